use std::ops::{Index, IndexMut};

gvr_enum! {
    /// Runtime switches that are either on or off.
    pub enum BoolParameter as "gvr_bool_parameter" {
        /// Use a separate distortion function for each color channel.
        /// Disabled by default.
        ChromaticAberrationCorrectionEnabled = 0 => "GVR_CHROMATIC_ABERRATION_CORRECTION_ENABLED",
        /// Collect frames and re-project them in sync with the scanout of the
        /// display. Needs a high-priority render thread and may not be
        /// available on every platform. Disabled by default.
        ScanlineRacingEnabled = 1 => "GVR_SCANLINE_RACING_ENABLED",
    }
}

/// The C++ name of [`BoolParameter`].
pub type BoolParameterId = BoolParameter;

/// A value for every [`BoolParameter`]. Everything starts disabled.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct BoolParameters([bool; BoolParameter::COUNT]);

impl BoolParameters {
    pub fn get(&self, param: BoolParameter) -> bool {
        self[param]
    }

    pub fn set(&mut self, param: BoolParameter, enabled: bool) {
        self[param] = enabled;
    }

    /// Parameters currently enabled, in ordinal order.
    pub fn enabled(&self) -> impl Iterator<Item = BoolParameter> + '_ {
        BoolParameter::ALL.iter().cloned().filter(move |p| self[*p])
    }
}

impl Index<BoolParameter> for BoolParameters {
    type Output = bool;

    fn index(&self, param: BoolParameter) -> &bool {
        &self.0[param as usize]
    }
}

impl IndexMut<BoolParameter> for BoolParameters {
    fn index_mut(&mut self, param: BoolParameter) -> &mut bool {
        &mut self.0[param as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;

    #[test]
    fn ordinals() {
        assert_eq!(BoolParameter::ChromaticAberrationCorrectionEnabled as i32, 0);
        assert_eq!(BoolParameter::ScanlineRacingEnabled as i32, 1);
        assert_eq!(BoolParameter::COUNT, 2);
        assert!(BoolParameter::try_from(2).is_err());
    }

    #[test]
    fn everything_disabled_by_default() {
        let params = BoolParameters::default();
        assert!(!params.get(BoolParameter::ChromaticAberrationCorrectionEnabled));
        assert!(!params.get(BoolParameter::ScanlineRacingEnabled));
        assert_eq!(params.enabled().count(), 0);
    }

    #[test]
    fn set_one_parameter() {
        let mut params = BoolParameters::default();
        params.set(BoolParameter::ScanlineRacingEnabled, true);
        assert!(params[BoolParameter::ScanlineRacingEnabled]);
        assert!(!params[BoolParameter::ChromaticAberrationCorrectionEnabled]);
        assert_eq!(params.enabled().collect::<Vec<_>>(),
                   vec![BoolParameter::ScanlineRacingEnabled]);
    }
}
