//! Recovery of erasure-coded evaluation data.
//!
//! Given a power-of-two evaluation vector with some positions missing, the
//! underlying polynomial is reconstructed by dividing out the zero
//! polynomial of the missing positions. The division happens on a shifted
//! copy of the domain so that the zero polynomial has no roots there; if a
//! shift factor still collides with a root, the next factor is tried.

use ark_ff::{batch_inversion, FftField};

use crate::{
    consts::{RECOVERY_MAX_ATTEMPTS, RECOVERY_SHIFT_BASE},
    errors::RecoverError,
    fft::FftSettings,
    helpers::compute_powers,
};

/// Multiplies coefficient `i` by `factor^i`, mapping `p(x)` to `p(factor * x)`.
fn shift_poly<F: FftField>(coeffs: &mut [F], factor: &F) {
    let factors = compute_powers(factor, coeffs.len());
    for (coeff, power) in coeffs.iter_mut().zip(factors.iter()) {
        *coeff *= power;
    }
}

impl<F: FftField> FftSettings<F> {
    /// Reconstructs the full evaluation vector from partial samples.
    /// `samples[i]` is `Some` when the evaluation at domain index `i` is
    /// known. The samples must come from a polynomial of degree below
    /// `samples.len() / 2` for the reconstruction to be meaningful; the
    /// result is validated against every known sample before returning.
    pub fn recover_poly_from_samples(
        &self,
        samples: &[Option<F>],
    ) -> Result<Vec<F>, RecoverError> {
        let length = samples.len();
        let missing: Vec<usize> = samples
            .iter()
            .enumerate()
            .filter_map(|(i, sample)| sample.is_none().then_some(i))
            .collect();
        if missing.is_empty() {
            return Ok(samples.iter().map(|sample| sample.unwrap_or_default()).collect());
        }

        let (zero_eval, mut zero_poly) = self.zero_poly_via_multiplication(&missing, length)?;

        // (D * Z) in evaluation form: the unknown positions contribute
        // nothing because Z vanishes there.
        let poly_evals_with_zero: Vec<F> = samples
            .iter()
            .zip(zero_eval.iter())
            .map(|(sample, zero)| match sample {
                Some(value) => *value * zero,
                None => F::zero(),
            })
            .collect();
        let mut poly_with_zero = self.fft_fr(&poly_evals_with_zero, true)?;

        let mut previous_shift = F::one();
        for attempt in 0..RECOVERY_MAX_ATTEMPTS {
            let shift = F::from(RECOVERY_SHIFT_BASE + attempt as u64);
            // Re-shift in place relative to the previous attempt.
            let relative = shift
                * previous_shift
                    .inverse()
                    .unwrap_or_else(F::one);
            shift_poly(&mut poly_with_zero, &relative);
            shift_poly(&mut zero_poly, &relative);
            previous_shift = shift;

            let eval_shifted_poly_with_zero = self.fft_fr(&poly_with_zero, false)?;
            let mut eval_shifted_zero_poly = self.fft_fr(&zero_poly, false)?;

            // Zeros are left untouched by the batch inversion; a zero
            // denominator yields a wrong candidate that fails validation
            // below, triggering the next shift.
            batch_inversion(&mut eval_shifted_zero_poly);
            let eval_shifted_reconstructed: Vec<F> = eval_shifted_poly_with_zero
                .iter()
                .zip(eval_shifted_zero_poly.iter())
                .map(|(num, inv_den)| *num * inv_den)
                .collect();

            let mut reconstructed_poly = self.fft_fr(&eval_shifted_reconstructed, true)?;
            let shift_inv = shift.inverse().unwrap_or_else(F::one);
            shift_poly(&mut reconstructed_poly, &shift_inv);

            let reconstructed_data = self.fft_fr(&reconstructed_poly, false)?;
            let consistent = samples
                .iter()
                .zip(reconstructed_data.iter())
                .all(|(sample, value)| match sample {
                    Some(expected) => expected == value,
                    None => true,
                });
            if consistent {
                return Ok(reconstructed_data);
            }
        }
        Err(RecoverError::MaxAttemptsExceeded)
    }
}
