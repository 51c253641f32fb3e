use ark_ff::FftField;

use crate::{errors::FftError, fft::FftSettings};

impl<F: FftField> FftSettings<F> {
    /// Extends even-indexed evaluations to the odd positions of the doubled
    /// domain.
    ///
    /// `evals[i]` is the value at `w^(2i)` of a polynomial whose upper half
    /// of coefficients (on the doubled domain) is zero; the return value is
    /// the evaluations at `w^(2i+1)`. Interleaving the two sequences yields a
    /// codeword of twice the length that interpolates back to the original
    /// half-degree polynomial, which is what makes sampled erasure recovery
    /// possible.
    pub fn das_fft_extension(&self, evals: &[F]) -> Result<Vec<F>, FftError> {
        let n = evals.len();
        if !n.is_power_of_two() {
            return Err(FftError::LengthNotPowerOfTwo(n));
        }
        if n * 2 > self.max_width() {
            return Err(FftError::LengthExceedsMaxWidth {
                len: n * 2,
                max_width: self.max_width(),
            });
        }

        // The even points are exactly the width-n subdomain, so interpolating
        // them recovers the polynomial's n coefficients.
        let mut coeffs = self.fft_fr(evals, true)?;

        // The odd points are the even points shifted by w, the 2n-th root of
        // unity: p(w * w_n^i). Fold the shift into the coefficients and
        // evaluate on the width-n subdomain again.
        let shift_stride = self.max_width() / (n * 2);
        for (j, coeff) in coeffs.iter_mut().enumerate() {
            *coeff *= self.expanded_roots_of_unity()[j * shift_stride];
        }
        self.fft_fr(&coeffs, false)
    }
}
