//! FK20 batch proof computation.
//!
//! FK20 computes KZG opening proofs for every point (or every coset) of an
//! FFT domain in `O(n log n)` group operations, instead of `O(n^2)` for
//! repeated single proofs. The quotient commitments are obtained as a
//! Toeplitz matrix-vector product with the reversed SRS, evaluated through
//! the circulant embedding implemented by the Toeplitz helpers on
//! [`KzgSettings`].
//!
//! The `da_optimized` variants assume the committed polynomial has degree
//! below half the domain, the usual shape for erasure-extended data where
//! the upper coefficient half is zero. The `da_using_*` entry points also
//! reverse-bit-order the proofs so that proof `i` lines up with chunk `i`
//! of reverse-bit-ordered extended data.

use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_std::Zero;

use crate::{
    errors::KzgError,
    fft::reverse_bit_order,
    kzg::KzgSettings,
};

/// Extracts the Toeplitz column/row coefficients for one stride-`stride`
/// slice of `poly`, in the layout expected by the circulant embedding:
/// the last polynomial coefficient first, a zero run, then the interior
/// coefficients of the slice.
pub fn toeplitz_coeffs_step_strided<F: ark_ff::FftField>(
    poly: &[F],
    offset: usize,
    stride: usize,
) -> Vec<F> {
    let n = poly.len();
    let k = n / stride;
    let k2 = k * 2;

    let mut toeplitz_coeffs = vec![F::zero(); k2];
    toeplitz_coeffs[0] = poly[n - 1 - offset];
    let mut i = k + 2;
    let mut j = 2 * stride - offset - 1;
    while i < k2 {
        toeplitz_coeffs[i] = poly[j];
        i += 1;
        j += stride;
    }
    toeplitz_coeffs
}

pub fn toeplitz_coeffs_step<F: ark_ff::FftField>(poly: &[F]) -> Vec<F> {
    toeplitz_coeffs_step_strided(poly, 0, 1)
}

/// Precomputed state for generating one proof per domain point.
#[derive(Debug, Clone)]
pub struct Fk20SingleSettings<'a, E: Pairing> {
    ks: &'a KzgSettings<'a, E>,
    x_ext_fft: Vec<E::G1>,
    n2: usize,
}

impl<'a, E: Pairing> Fk20SingleSettings<'a, E> {
    /// `n2` is the extended domain width: proofs are generated for
    /// polynomials of up to `n2 / 2` coefficients.
    pub fn new(ks: &'a KzgSettings<'a, E>, n2: usize) -> Result<Self, KzgError> {
        if !n2.is_power_of_two() {
            return Err(KzgError::FftError(
                crate::errors::FftError::LengthNotPowerOfTwo(n2),
            ));
        }
        if n2 > ks.fft_settings().max_width() {
            return Err(KzgError::FftError(
                crate::errors::FftError::LengthExceedsMaxWidth {
                    len: n2,
                    max_width: ks.fft_settings().max_width(),
                },
            ));
        }
        if n2 < 2 {
            return Err(KzgError::InvalidInputLength(
                "extended width must be at least 2".to_string(),
            ));
        }
        let n = n2 / 2;

        // Reversed SRS prefix with an identity sentinel, the vector the
        // Toeplitz matrix is multiplied against.
        let mut x = Vec::with_capacity(n);
        for i in 0..n - 1 {
            x.push(ks.secret_g1()[n - 2 - i]);
        }
        x.push(E::G1Affine::zero());
        let x_ext_fft = ks.toeplitz_part1(&x)?;

        Ok(Self { ks, x_ext_fft, n2 })
    }

    /// Computes `n` proofs for a polynomial of `n = n2 / 2` coefficients,
    /// one per point of the size-`n` domain, in domain order.
    pub fn fk20_single(&self, poly: &[E::ScalarField]) -> Result<Vec<E::G1Affine>, KzgError> {
        if poly.len() * 2 != self.n2 {
            return Err(KzgError::InvalidInputLength(format!(
                "expected {} coefficients, got {}",
                self.n2 / 2,
                poly.len()
            )));
        }
        let toeplitz_coeffs = toeplitz_coeffs_step(poly);
        let h_ext_fft = self.ks.toeplitz_part2(&toeplitz_coeffs, &self.x_ext_fft)?;
        let h = self.ks.toeplitz_part3(&h_ext_fft)?;
        let proofs = self.ks.fft_settings().fft_g1(&h, false)?;
        Ok(E::G1::normalize_batch(&proofs))
    }

    /// Computes `n2` proofs for a polynomial of `n2` coefficients whose
    /// upper half is zero, one per point of the extended domain.
    pub fn fk20_single_da_optimized(
        &self,
        poly: &[E::ScalarField],
    ) -> Result<Vec<E::G1Affine>, KzgError> {
        if poly.len() != self.n2 {
            return Err(KzgError::InvalidInputLength(format!(
                "expected {} coefficients, got {}",
                self.n2,
                poly.len()
            )));
        }
        let n = self.n2 / 2;
        if poly[n..].iter().any(|coeff| !coeff.is_zero()) {
            return Err(KzgError::NonZeroUpperHalf);
        }

        let toeplitz_coeffs = toeplitz_coeffs_step(&poly[..n]);
        let h_ext_fft = self.ks.toeplitz_part2(&toeplitz_coeffs, &self.x_ext_fft)?;
        let mut h = self.ks.toeplitz_part3(&h_ext_fft)?;
        h.resize(self.n2, E::G1::zero());
        let proofs = self.ks.fft_settings().fft_g1(&h, false)?;
        Ok(E::G1::normalize_batch(&proofs))
    }

    /// Extends a polynomial of `n2 / 2` coefficients to the full width and
    /// returns its `n2` proofs in reverse bit order, matching
    /// reverse-bit-ordered extended data.
    pub fn da_using_fk20(&self, poly: &[E::ScalarField]) -> Result<Vec<E::G1Affine>, KzgError> {
        let n = self.n2 / 2;
        if poly.len() != n {
            return Err(KzgError::InvalidInputLength(format!(
                "expected {} coefficients, got {}",
                n,
                poly.len()
            )));
        }
        let mut extended = poly.to_vec();
        extended.resize(self.n2, E::ScalarField::zero());
        let mut proofs = self.fk20_single_da_optimized(&extended)?;
        reverse_bit_order(&mut proofs)?;
        Ok(proofs)
    }
}

/// Precomputed state for generating one proof per size-`chunk_len` coset.
#[derive(Debug, Clone)]
pub struct Fk20MultiSettings<'a, E: Pairing> {
    ks: &'a KzgSettings<'a, E>,
    chunk_len: usize,
    x_ext_fft_files: Vec<Vec<E::G1>>,
    n2: usize,
}

impl<'a, E: Pairing> Fk20MultiSettings<'a, E> {
    pub fn new(ks: &'a KzgSettings<'a, E>, n2: usize, chunk_len: usize) -> Result<Self, KzgError> {
        if !n2.is_power_of_two() {
            return Err(KzgError::FftError(
                crate::errors::FftError::LengthNotPowerOfTwo(n2),
            ));
        }
        if n2 > ks.fft_settings().max_width() {
            return Err(KzgError::FftError(
                crate::errors::FftError::LengthExceedsMaxWidth {
                    len: n2,
                    max_width: ks.fft_settings().max_width(),
                },
            ));
        }
        if !chunk_len.is_power_of_two() {
            return Err(KzgError::FftError(
                crate::errors::FftError::LengthNotPowerOfTwo(chunk_len),
            ));
        }
        if chunk_len >= n2 / 2 {
            return Err(KzgError::InvalidInputLength(format!(
                "chunk length {} must be smaller than half the extended width {}",
                chunk_len, n2
            )));
        }

        let n = n2 / 2;
        let k = n / chunk_len;

        // One Toeplitz setup per position within a chunk, each against a
        // stride-chunk_len slice of the reversed SRS.
        let mut x_ext_fft_files = Vec::with_capacity(chunk_len);
        for offset in 0..chunk_len {
            let mut x = Vec::with_capacity(k);
            let mut index = n - chunk_len - 1 - offset;
            for _ in 0..k - 1 {
                x.push(ks.secret_g1()[index]);
                index = index.wrapping_sub(chunk_len);
            }
            x.push(E::G1Affine::zero());
            x_ext_fft_files.push(ks.toeplitz_part1(&x)?);
        }

        Ok(Self {
            ks,
            chunk_len,
            x_ext_fft_files,
            n2,
        })
    }

    pub fn chunk_len(&self) -> usize {
        self.chunk_len
    }

    /// Computes `k = n / chunk_len` proofs for a polynomial of `n = n2 / 2`
    /// coefficients. Proof `i` opens the coset
    /// `{w^i, w^(i+k), ..., w^(i+(chunk_len-1)*k)}` of the size-`n` domain.
    pub fn fk20_multi(&self, poly: &[E::ScalarField]) -> Result<Vec<E::G1Affine>, KzgError> {
        if poly.len() * 2 != self.n2 {
            return Err(KzgError::InvalidInputLength(format!(
                "expected {} coefficients, got {}",
                self.n2 / 2,
                poly.len()
            )));
        }
        let k = poly.len() / self.chunk_len;
        let k2 = k * 2;

        let mut h_ext_fft = vec![E::G1::zero(); k2];
        for offset in 0..self.chunk_len {
            let toeplitz_coeffs = toeplitz_coeffs_step_strided(poly, offset, self.chunk_len);
            let h_ext_fft_file = self
                .ks
                .toeplitz_part2(&toeplitz_coeffs, &self.x_ext_fft_files[offset])?;
            for (acc, part) in h_ext_fft.iter_mut().zip(h_ext_fft_file.iter()) {
                *acc += part;
            }
        }

        let h = self.ks.toeplitz_part3(&h_ext_fft)?;
        let proofs = self.ks.fft_settings().fft_g1(&h, false)?;
        Ok(E::G1::normalize_batch(&proofs))
    }

    /// Computes `n2 / chunk_len` coset proofs for a polynomial of `n2`
    /// coefficients whose upper half is zero.
    pub fn fk20_multi_da_optimized(
        &self,
        poly: &[E::ScalarField],
    ) -> Result<Vec<E::G1Affine>, KzgError> {
        if poly.len() != self.n2 {
            return Err(KzgError::InvalidInputLength(format!(
                "expected {} coefficients, got {}",
                self.n2,
                poly.len()
            )));
        }
        let n = self.n2 / 2;
        if poly[n..].iter().any(|coeff| !coeff.is_zero()) {
            return Err(KzgError::NonZeroUpperHalf);
        }

        let k = n / self.chunk_len;
        let k2 = k * 2;
        let reduced_poly = &poly[..n];

        let mut h_ext_fft = vec![E::G1::zero(); k2];
        for offset in 0..self.chunk_len {
            let toeplitz_coeffs =
                toeplitz_coeffs_step_strided(reduced_poly, offset, self.chunk_len);
            let h_ext_fft_file = self
                .ks
                .toeplitz_part2(&toeplitz_coeffs, &self.x_ext_fft_files[offset])?;
            for (acc, part) in h_ext_fft.iter_mut().zip(h_ext_fft_file.iter()) {
                *acc += part;
            }
        }

        let mut h = self.ks.toeplitz_part3(&h_ext_fft)?;
        h.resize(k2, E::G1::zero());
        let proofs = self.ks.fft_settings().fft_g1(&h, false)?;
        Ok(E::G1::normalize_batch(&proofs))
    }

    /// Extends a polynomial of `n2 / 2` coefficients to the full width and
    /// returns its coset proofs in reverse bit order, so that proof `i`
    /// covers chunk `i` of reverse-bit-ordered extended data.
    pub fn da_using_fk20_multi(
        &self,
        poly: &[E::ScalarField],
    ) -> Result<Vec<E::G1Affine>, KzgError> {
        let n = self.n2 / 2;
        if poly.len() != n {
            return Err(KzgError::InvalidInputLength(format!(
                "expected {} coefficients, got {}",
                n,
                poly.len()
            )));
        }
        let mut extended = poly.to_vec();
        extended.resize(self.n2, E::ScalarField::zero());
        let mut proofs = self.fk20_multi_da_optimized(&extended)?;
        reverse_bit_order(&mut proofs)?;
        Ok(proofs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_std::One;

    #[test]
    fn test_toeplitz_coeffs_step_layout() {
        let poly: Vec<Fr> = (1..=8u64).map(Fr::from).collect();
        let coeffs = toeplitz_coeffs_step(&poly);
        assert_eq!(coeffs.len(), 16);
        assert_eq!(coeffs[0], Fr::from(8u64));
        assert!(coeffs[1..10].iter().all(|coeff| coeff.is_zero()));
        // Interior coefficients poly[1..7] land at the tail.
        for (i, expected) in (2..8u64).enumerate() {
            assert_eq!(coeffs[10 + i], Fr::from(expected));
        }
    }

    #[test]
    fn test_toeplitz_coeffs_step_strided_layout() {
        let poly: Vec<Fr> = (1..=16u64).map(Fr::from).collect();
        let coeffs = toeplitz_coeffs_step_strided(&poly, 1, 4);
        // k = 4 slots plus the circulant padding.
        assert_eq!(coeffs.len(), 8);
        assert_eq!(coeffs[0], poly[14]);
        assert!(coeffs[1..6].iter().all(|coeff| coeff.is_zero()));
        assert_eq!(coeffs[6], poly[6]);
        assert_eq!(coeffs[7], poly[10]);
    }

    #[test]
    fn test_toeplitz_coeffs_step_single_coefficient() {
        let poly = vec![Fr::one()];
        let coeffs = toeplitz_coeffs_step(&poly);
        assert_eq!(coeffs, vec![Fr::one(), Fr::zero()]);
    }
}
