//! KZG polynomial commitments over a pairing-friendly curve.
//!
//! Commitments and proofs are computed from a structured reference string
//! (powers of a secret in G1 and G2). Single-point proofs use the quotient
//! `(p(X) - y) / (X - x)`; multi-point proofs open a polynomial over a full
//! coset of the FFT domain with the quotient `(p(X) - I(X)) / (X^n - x^n)`.
//! The Toeplitz helpers implement the matrix-vector products behind the
//! FK20 batch proof algorithms.

use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::Field;
use ark_std::Zero;
use rayon::prelude::*;

use crate::{
    errors::KzgError,
    fft::FftSettings,
    helpers::{compute_powers, g1_lincomb, pairings_verify},
    polynomial::poly_long_div,
};

/// Commitment and verification keys bound to an FFT domain. `secret_g1`
/// must cover the domain width; `secret_g2` needs as many points as the
/// largest coset opened with [`check_proof_multi`](Self::check_proof_multi),
/// plus one.
#[derive(Debug, Clone)]
pub struct KzgSettings<'a, E: Pairing> {
    fs: &'a FftSettings<E::ScalarField>,
    secret_g1: Vec<E::G1Affine>,
    secret_g2: Vec<E::G2Affine>,
}

impl<'a, E: Pairing> KzgSettings<'a, E> {
    pub fn new(
        fs: &'a FftSettings<E::ScalarField>,
        secret_g1: Vec<E::G1Affine>,
        secret_g2: Vec<E::G2Affine>,
    ) -> Result<Self, KzgError> {
        if secret_g1.len() < fs.max_width() {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: fs.max_width(),
                srs_len: secret_g1.len(),
            });
        }
        if secret_g2.len() < 2 {
            return Err(KzgError::InvalidInputLength(
                "setup requires at least two G2 points".to_string(),
            ));
        }
        Ok(Self {
            fs,
            secret_g1,
            secret_g2,
        })
    }

    pub fn fft_settings(&self) -> &FftSettings<E::ScalarField> {
        self.fs
    }

    pub fn secret_g1(&self) -> &[E::G1Affine] {
        &self.secret_g1
    }

    pub fn secret_g2(&self) -> &[E::G2Affine] {
        &self.secret_g2
    }

    /// Commits to a coefficient-form polynomial.
    pub fn commit_to_poly(&self, coeffs: &[E::ScalarField]) -> Result<E::G1Affine, KzgError> {
        if coeffs.len() > self.secret_g1.len() {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: coeffs.len(),
                srs_len: self.secret_g1.len(),
            });
        }
        g1_lincomb::<E>(&self.secret_g1[..coeffs.len()], coeffs)
    }

    /// Computes an opening proof for `p(x)`: a commitment to the quotient
    /// `(p(X) - p(x)) / (X - x)`. Dividing `p` directly by `X - x` yields
    /// the same quotient, with `p(x)` showing up as the discarded
    /// remainder.
    pub fn compute_proof_single(
        &self,
        coeffs: &[E::ScalarField],
        x: &E::ScalarField,
    ) -> Result<E::G1Affine, KzgError> {
        let divisor = [-*x, E::ScalarField::ONE];
        let quotient = poly_long_div(coeffs, &divisor)?;
        self.commit_to_poly(&quotient)
    }

    /// Verifies that `p(x) == y` against a commitment to `p`, via
    /// `e(C - y*G1, G2) == e(proof, s*G2 - x*G2)`.
    pub fn check_proof_single(
        &self,
        commitment: &E::G1Affine,
        proof: &E::G1Affine,
        x: &E::ScalarField,
        y: &E::ScalarField,
    ) -> Result<bool, KzgError> {
        let g2_generator = E::G2Affine::generator();
        let s_minus_x = (E::G2::from(self.secret_g2[1]) - g2_generator * x).into_affine();
        let y_g1 = E::G1Affine::generator() * y;
        let commitment_minus_y = (E::G1::from(*commitment) - y_g1).into_affine();
        Ok(pairings_verify::<E>(
            commitment_minus_y,
            g2_generator,
            *proof,
            s_minus_x,
        ))
    }

    /// Computes a proof that `p` takes given values over the size-`n` coset
    /// `{x, x*w, ..., x*w^(n-1)}`: a commitment to `p(X) / (X^n - x^n)`.
    pub fn compute_proof_multi(
        &self,
        coeffs: &[E::ScalarField],
        x: &E::ScalarField,
        n: usize,
    ) -> Result<E::G1Affine, KzgError> {
        if !n.is_power_of_two() {
            return Err(KzgError::FftError(
                crate::errors::FftError::LengthNotPowerOfTwo(n),
            ));
        }
        let mut divisor = vec![E::ScalarField::zero(); n + 1];
        divisor[0] = -x.pow([n as u64]);
        divisor[n] = E::ScalarField::ONE;
        let quotient = poly_long_div(coeffs, &divisor)?;
        self.commit_to_poly(&quotient)
    }

    /// Verifies a multi proof: `ys` are the claimed evaluations over the
    /// coset `{x, x*w, ..., x*w^(n-1)}` where `w` is the n-th root of
    /// unity. Interpolates `ys` into the coset polynomial `I` and checks
    /// `e(C - [I(s)], G2) == e(proof, [s^n - x^n])`.
    pub fn check_proof_multi(
        &self,
        commitment: &E::G1Affine,
        proof: &E::G1Affine,
        x: &E::ScalarField,
        ys: &[E::ScalarField],
    ) -> Result<bool, KzgError> {
        let n = ys.len();
        if self.secret_g2.len() <= n {
            return Err(KzgError::SrsCapacityExceeded {
                polynomial_len: n + 1,
                srs_len: self.secret_g2.len(),
            });
        }

        // Interpolation over the coset: IFFT onto the unit-root domain,
        // then substitute X -> X/x by unscaling coefficient i with x^-i.
        let mut interpolation = self.fs.fft_fr(ys, true)?;
        let inv_x = x.inverse().ok_or(KzgError::InvalidDenominator)?;
        let inv_powers = compute_powers(&inv_x, interpolation.len());
        for (coeff, inv_power) in interpolation.iter_mut().zip(inv_powers.iter()) {
            *coeff *= inv_power;
        }

        let xn = x.pow([n as u64]);
        let g2_generator = E::G2Affine::generator();
        let xn_minus_yn = (E::G2::from(self.secret_g2[n]) - g2_generator * xn).into_affine();
        let interpolation_g1 = self.commit_to_poly(&interpolation)?;
        let commit_minus_interp =
            (E::G1::from(*commitment) - E::G1::from(interpolation_g1)).into_affine();
        Ok(pairings_verify::<E>(
            commit_minus_interp,
            g2_generator,
            *proof,
            xn_minus_yn,
        ))
    }

    /// FK20 Toeplitz part 1: FFT of the SRS vector `x`, zero-padded to
    /// twice its length. Computed once per FK20 setup.
    pub fn toeplitz_part1(&self, x: &[E::G1Affine]) -> Result<Vec<E::G1>, KzgError> {
        let n = x.len();
        let mut x_ext: Vec<E::G1> = x.iter().map(|point| E::G1::from(*point)).collect();
        x_ext.resize(n * 2, E::G1::zero());
        Ok(self.fs.fft_g1(&x_ext, false)?)
    }

    /// FK20 Toeplitz part 2: pointwise product of the Toeplitz coefficient
    /// FFT with the extended SRS FFT. This is the per-proof hot loop, so
    /// the scalar multiplications run in parallel.
    pub fn toeplitz_part2(
        &self,
        toeplitz_coeffs: &[E::ScalarField],
        x_ext_fft: &[E::G1],
    ) -> Result<Vec<E::G1>, KzgError> {
        if toeplitz_coeffs.len() != x_ext_fft.len() {
            return Err(KzgError::InvalidInputLength(format!(
                "toeplitz coefficient count {} does not match setup length {}",
                toeplitz_coeffs.len(),
                x_ext_fft.len()
            )));
        }
        let toeplitz_coeffs_fft = self.fs.fft_fr(toeplitz_coeffs, false)?;
        Ok(x_ext_fft
            .par_iter()
            .zip(toeplitz_coeffs_fft.par_iter())
            .map(|(point, scalar)| *point * *scalar)
            .collect())
    }

    /// FK20 Toeplitz part 3: inverse FFT of the accumulated products,
    /// keeping only the first half (the upper half is garbage by
    /// construction of the circulant embedding).
    pub fn toeplitz_part3(&self, h_ext_fft: &[E::G1]) -> Result<Vec<E::G1>, KzgError> {
        let mut h = self.fs.fft_g1(h_ext_fft, true)?;
        h.truncate(h_ext_fft.len() / 2);
        Ok(h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{polynomial::eval_poly_at, srs::generate_trusted_setup};
    use ark_bn254::{Bn254, Fr};
    use ark_std::{test_rng, UniformRand};

    fn test_setup(fs: &FftSettings<Fr>) -> KzgSettings<'_, Bn254> {
        let secret = Fr::from(8927347823478352432985u128);
        let (secret_g1, secret_g2) =
            generate_trusted_setup::<Bn254>(&secret, fs.max_width() + 1);
        KzgSettings::new(fs, secret_g1, secret_g2).unwrap()
    }

    #[test]
    fn test_proof_single() {
        let fs = FftSettings::<Fr>::new(4).unwrap();
        let ks = test_setup(&fs);
        let mut rng = test_rng();
        let coeffs: Vec<Fr> = (0..16).map(|_| Fr::rand(&mut rng)).collect();

        let commitment = ks.commit_to_poly(&coeffs).unwrap();
        let x = Fr::from(17u64);
        let y = eval_poly_at(&coeffs, &x);
        let proof = ks.compute_proof_single(&coeffs, &x).unwrap();

        assert!(ks.check_proof_single(&commitment, &proof, &x, &y).unwrap());
        let wrong_y = y + Fr::ONE;
        assert!(!ks
            .check_proof_single(&commitment, &proof, &x, &wrong_y)
            .unwrap());
    }

    #[test]
    fn test_proof_multi() {
        let fs = FftSettings::<Fr>::new(4).unwrap();
        let ks = test_setup(&fs);
        let mut rng = test_rng();
        let coeffs: Vec<Fr> = (0..16).map(|_| Fr::rand(&mut rng)).collect();
        let commitment = ks.commit_to_poly(&coeffs).unwrap();

        // Open over the coset x * {w^0 .. w^15} of the full domain.
        let n = 16;
        let x = Fr::from(5431u64);
        let stride = fs.max_width() / n;
        let ys: Vec<Fr> = (0..n)
            .map(|i| {
                let point = x * fs.expanded_roots_of_unity()[i * stride];
                eval_poly_at(&coeffs, &point)
            })
            .collect();

        let proof = ks.compute_proof_multi(&coeffs, &x, n).unwrap();
        assert!(ks.check_proof_multi(&commitment, &proof, &x, &ys).unwrap());

        let mut bad_ys = ys.clone();
        bad_ys[3] += Fr::ONE;
        assert!(!ks
            .check_proof_multi(&commitment, &proof, &x, &bad_ys)
            .unwrap());
    }

    #[test]
    fn test_commit_rejects_oversized_polynomial() {
        let fs = FftSettings::<Fr>::new(3).unwrap();
        let ks = test_setup(&fs);
        let coeffs = vec![Fr::ONE; ks.secret_g1().len() + 1];
        assert!(matches!(
            ks.commit_to_poly(&coeffs),
            Err(KzgError::SrsCapacityExceeded { .. })
        ));
    }
}
