use thiserror::Error;

use crate::consts::RECOVERY_MAX_ATTEMPTS;

/// Errors raised by the FFT layer (field and group transforms, bit-reversal,
/// zero-polynomial construction). All of these are detected before any
/// computation begins; no partial output is ever produced.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FftError {
    /// Input (after padding to a power of two) does not fit the domain.
    #[error("length {len} exceeds maximum width {max_width}")]
    LengthExceedsMaxWidth { len: usize, max_width: usize },

    /// In-place transforms require an exact power-of-two length.
    #[error("length {0} is not a power of two")]
    LengthNotPowerOfTwo(usize),

    /// Caller-supplied output storage does not match the input length.
    #[error("output length {actual} does not match input length {expected}")]
    MismatchedOutputLength { expected: usize, actual: usize },

    /// The scalar field has no subgroup of the requested order.
    #[error("field has no root of unity for domain width {0}")]
    RootOfUnityNotFound(usize),

    /// A vanishing polynomial over the whole domain cannot be represented in
    /// `length` coefficients.
    #[error("{missing} missing indices do not leave room in a domain of length {length}")]
    TooManyMissingIndices { missing: usize, length: usize },

    /// Missing index outside `[0, length)`.
    #[error("missing index {index} is out of range for domain length {length}")]
    MissingIndexOutOfRange { index: usize, length: usize },
}

/// Errors related to KZG operations.
///
/// Note that proof *verification* failure is not an error: the check
/// functions return `Ok(false)` for an invalid proof and reserve `Err` for
/// malformed inputs.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum KzgError {
    /// Wraps errors originating from the FFT layer.
    #[error("FFT error: {0}")]
    FftError(#[from] FftError),

    /// Polynomial degree exceeds what the trusted setup can commit to.
    #[error("polynomial length {polynomial_len} exceeds SRS capacity {srs_len}")]
    SrsCapacityExceeded {
        polynomial_len: usize,
        srs_len: usize,
    },

    #[error("MSM error: {0}")]
    MsmError(String),

    /// DA-optimized FK20 variants require the upper half of the coefficient
    /// vector to be exactly zero. Hitting this is caller misuse.
    #[error("polynomial upper half must be zero for DA-optimized proof computation")]
    NonZeroUpperHalf,

    /// Division by a polynomial with a zero leading coefficient, or a zero
    /// denominator in an evaluation formula.
    #[error("invalid denominator")]
    InvalidDenominator,

    #[error("invalid input length: {0}")]
    InvalidInputLength(String),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Errors raised by erasure-code recovery.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RecoverError {
    /// No shift constant produced a reconstruction consistent with the known
    /// samples within the retry budget.
    #[error("could not find a usable shift constant within {RECOVERY_MAX_ATTEMPTS} attempts")]
    MaxAttemptsExceeded,

    #[error("FFT error: {0}")]
    FftError(#[from] FftError),
}
