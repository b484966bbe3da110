gvr_enum! {
    /// The left and right eye.
    pub enum Eye as "gvr_eye" {
        Left = 0 => "GVR_LEFT_EYE",
        Right = 1 => "GVR_RIGHT_EYE",
    }
}

impl Eye {
    pub fn other(self) -> Eye {
        match self {
            Eye::Left => Eye::Right,
            Eye::Right => Eye::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn ordinals() {
        assert_eq!(i32::from(Eye::Left), 0);
        assert_eq!(i32::from(Eye::Right), 1);
        assert_eq!(Eye::COUNT, 2);
        assert_eq!(Eye::ALL, &[Eye::Left, Eye::Right]);
    }

    #[test]
    fn sentinel_is_not_an_eye() {
        assert_eq!(Eye::try_from(1), Ok(Eye::Right));
        let err = Eye::try_from(2).unwrap_err();
        assert_eq!(err.kind, "gvr_eye");
        assert_eq!(err.to_string(), "2 is not a valid gvr_eye");
        assert!(Eye::try_from(-1).is_err());
    }

    #[test]
    fn default_and_other() {
        assert_eq!(Eye::default(), Eye::Left);
        assert_eq!(Eye::Left.other(), Eye::Right);
        assert_eq!(Eye::Right.to_string(), "GVR_RIGHT_EYE");
    }
}
