//! Construction of zero (vanishing) polynomials over subsets of an FFT
//! domain.
//!
//! Given a set of missing evaluation indices, the zero polynomial is the
//! monic polynomial whose roots are exactly the domain points at those
//! indices. Small sets are multiplied out directly; larger sets are split
//! into leaves of at most 63 roots each, and the leaves are combined with
//! FFT-based multiplication in a fan-in-4 reduction tree.

use ark_ff::FftField;

use crate::{
    consts::{ZERO_POLY_LEAF_WIDTH, ZERO_POLY_REDUCTION_FACTOR},
    errors::FftError,
    fft::FftSettings,
};

impl<F: FftField> FftSettings<F> {
    /// Multiplies out `product(x - w^(index * stride))` over the given
    /// indices into `dst`. Slots past the degree are zeroed, so `dst` may
    /// be longer than `indices.len() + 1`.
    fn make_zero_poly_mul_leaf(
        &self,
        dst: &mut [F],
        indices: &[usize],
        stride: usize,
    ) -> Result<(), FftError> {
        if dst.len() < indices.len() + 1 {
            return Err(FftError::MismatchedOutputLength {
                expected: indices.len() + 1,
                actual: dst.len(),
            });
        }
        for slot in dst.iter_mut().skip(indices.len() + 1) {
            *slot = F::zero();
        }
        dst[indices.len()] = F::one();

        let roots = self.expanded_roots_of_unity();
        for (i, index) in indices.iter().enumerate() {
            let neg_root = -roots[index * stride];
            dst[i] = neg_root;
            if i > 0 {
                dst[i] += dst[i - 1];
                for j in (1..i).rev() {
                    dst[j] *= neg_root;
                    let lower = dst[j - 1];
                    dst[j] += lower;
                }
                dst[0] *= neg_root;
            }
        }
        Ok(())
    }

    /// Multiplies a group of coefficient-form partials into a single
    /// polynomial of `out_len` coefficients, via pointwise multiplication
    /// in evaluation form. The product is computed modulo `x^out_len - 1`,
    /// which is exact as long as the combined degree stays below `out_len`.
    fn reduce_partials(&self, out_len: usize, partials: &[Vec<F>]) -> Result<Vec<F>, FftError> {
        if !out_len.is_power_of_two() {
            return Err(FftError::LengthNotPowerOfTwo(out_len));
        }
        let mut padded = vec![F::zero(); out_len];
        padded[..partials[0].len()].copy_from_slice(&partials[0]);
        let mut product_eval = self.fft_fr(&padded, false)?;

        for partial in &partials[1..] {
            padded.iter_mut().for_each(|slot| *slot = F::zero());
            padded[..partial.len()].copy_from_slice(partial);
            let partial_eval = self.fft_fr(&padded, false)?;
            for (acc, eval) in product_eval.iter_mut().zip(partial_eval.iter()) {
                *acc *= eval;
            }
        }

        self.fft_fr(&product_eval, true)
    }

    /// Computes the zero polynomial over the domain points selected by
    /// `missing_indices`, for a domain of `length` points. Returns the
    /// polynomial both in evaluation form and in coefficient form, each
    /// padded to `length`.
    pub fn zero_poly_via_multiplication(
        &self,
        missing_indices: &[usize],
        length: usize,
    ) -> Result<(Vec<F>, Vec<F>), FftError> {
        if !length.is_power_of_two() {
            return Err(FftError::LengthNotPowerOfTwo(length));
        }
        if length > self.max_width() {
            return Err(FftError::LengthExceedsMaxWidth {
                len: length,
                max_width: self.max_width(),
            });
        }
        if missing_indices.len() >= length {
            return Err(FftError::TooManyMissingIndices {
                missing: missing_indices.len(),
                length,
            });
        }
        if let Some(&index) = missing_indices.iter().find(|&&index| index >= length) {
            return Err(FftError::MissingIndexOutOfRange { index, length });
        }
        if missing_indices.is_empty() {
            // Degenerate no-op case: nothing vanishes, nothing to divide
            // out. Callers short-circuit before using these.
            return Ok((vec![F::zero(); length], vec![F::zero(); length]));
        }

        let stride = self.max_width() / length;
        let per_leaf = ZERO_POLY_LEAF_WIDTH - 1;

        let zero_poly = if missing_indices.len() <= per_leaf {
            let mut poly = vec![F::zero(); length];
            self.make_zero_poly_mul_leaf(&mut poly, missing_indices, stride)?;
            poly
        } else {
            let mut partials: Vec<Vec<F>> = missing_indices
                .chunks(per_leaf)
                .map(|chunk| {
                    let mut leaf = vec![F::zero(); chunk.len() + 1];
                    self.make_zero_poly_mul_leaf(&mut leaf, chunk, stride)?;
                    Ok(leaf)
                })
                .collect::<Result<_, FftError>>()?;

            while partials.len() > 1 {
                let mut reduced = Vec::with_capacity(
                    (partials.len() + ZERO_POLY_REDUCTION_FACTOR - 1) / ZERO_POLY_REDUCTION_FACTOR,
                );
                for group in partials.chunks(ZERO_POLY_REDUCTION_FACTOR) {
                    if group.len() == 1 {
                        reduced.push(group[0].clone());
                        continue;
                    }
                    // Degree of the group product is the sum of the leaf
                    // degrees, bounded by the missing count and therefore
                    // by length - 1.
                    let coeff_count: usize =
                        group.iter().map(|partial| partial.len() - 1).sum::<usize>() + 1;
                    let out_len = coeff_count.next_power_of_two().min(length);
                    reduced.push(self.reduce_partials(out_len, group)?);
                }
                partials = reduced;
            }

            let mut poly = partials.pop().unwrap_or_default();
            poly.resize(length, F::zero());
            poly
        };

        let zero_eval = self.fft_fr(&zero_poly, false)?;
        Ok((zero_eval, zero_poly))
    }
}
