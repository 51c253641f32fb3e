pub const BYTES_PER_FIELD_ELEMENT: usize = 32;

/// Width (in coefficients) of a zero-polynomial leaf. A leaf built by direct
/// multiplication covers at most `ZERO_POLY_LEAF_WIDTH - 1` missing indices.
pub const ZERO_POLY_LEAF_WIDTH: usize = 64;

/// Fan-in of the zero-polynomial tree reduction: how many partial products
/// are merged per FFT-multiplication round.
pub const ZERO_POLY_REDUCTION_FACTOR: usize = 4;

/// How many shift constants erasure recovery tries before giving up.
pub const RECOVERY_MAX_ATTEMPTS: usize = 10;

/// First shift constant tried by erasure recovery; attempt `i` uses
/// `RECOVERY_SHIFT_BASE + i`.
pub const RECOVERY_SHIFT_BASE: u64 = 2;
