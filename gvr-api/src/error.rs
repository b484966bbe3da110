use thiserror::Error;

/// An integer that has no matching value in one of the runtime's enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{value} is not a valid {kind}")]
pub struct DiscriminantError {
    /// C name of the enum the value was decoded as, e.g. `gvr_eye`.
    pub kind: &'static str,
    pub value: i32,
}

/// A per-button array whose length does not match the controller button count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} button entries, got {actual}")]
pub struct ButtonCountError {
    pub expected: usize,
    pub actual: usize,
}
