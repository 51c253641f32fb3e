use ark_ff::{batch_inversion, FftField, Field};

use crate::{errors::KzgError, fft::FftSettings};

/// Evaluates a coefficient-form polynomial at `x` using Horner's method.
pub fn eval_poly_at<F: Field>(coeffs: &[F], x: &F) -> F {
    coeffs
        .iter()
        .rev()
        .fold(F::zero(), |acc, coeff| acc * x + coeff)
}

/// Coefficient-form polynomial long division, returning the quotient and
/// discarding the remainder. The divisor's leading coefficient must be
/// nonzero.
pub fn poly_long_div<F: Field>(dividend: &[F], divisor: &[F]) -> Result<Vec<F>, KzgError> {
    if divisor.is_empty() {
        return Err(KzgError::InvalidDenominator);
    }
    let b_pos = divisor.len() - 1;
    let inv_lead = divisor[b_pos]
        .inverse()
        .ok_or(KzgError::InvalidDenominator)?;
    if dividend.len() < divisor.len() {
        return Ok(vec![F::zero()]);
    }

    let mut a = dividend.to_vec();
    let mut out = vec![F::zero(); dividend.len() - divisor.len() + 1];
    for d in (0..out.len()).rev() {
        let quot = a[d + b_pos] * inv_lead;
        out[d] = quot;
        for i in 0..=b_pos {
            let tmp = quot * divisor[i];
            a[d + i] -= tmp;
        }
    }
    Ok(out)
}

/// Evaluates an evaluation-form polynomial at an arbitrary point `z` using
/// the barycentric formula:
///
/// `f(z) = (z^width - 1) / width * sum(f_i * w_i / (z - w_i))`
///
/// If `z` lies on the domain the stored evaluation is returned directly.
pub fn evaluate_polynomial_in_evaluation_form<F: FftField>(
    fs: &FftSettings<F>,
    evals: &[F],
    z: &F,
) -> Result<F, KzgError> {
    let width = evals.len();
    if !width.is_power_of_two() {
        return Err(KzgError::FftError(
            crate::errors::FftError::LengthNotPowerOfTwo(width),
        ));
    }
    if width > fs.max_width() {
        return Err(KzgError::FftError(
            crate::errors::FftError::LengthExceedsMaxWidth {
                len: width,
                max_width: fs.max_width(),
            },
        ));
    }

    let stride = fs.max_width() / width;
    let roots = fs.expanded_roots_of_unity();

    if let Some(index) = (0..width).position(|i| roots[i * stride] == *z) {
        return Ok(evals[index]);
    }

    let inverse_width = F::from(width as u64)
        .inverse()
        .ok_or(KzgError::InvalidDenominator)?;

    // z is off-domain, so every denominator is nonzero; invert them as a
    // batch instead of one division per term.
    let mut denominators: Vec<F> = (0..width).map(|i| *z - roots[i * stride]).collect();
    batch_inversion(&mut denominators);

    let mut sum = F::zero();
    for i in 0..width {
        sum += evals[i] * roots[i * stride] * denominators[i];
    }

    let r = z.pow([width as u64]) - F::one();
    Ok(sum * r * inverse_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_std::{One, Zero};

    #[test]
    fn test_eval_poly_at() {
        // 3 + 2x + x^2 at x = 5 is 38
        let coeffs = vec![Fr::from(3u64), Fr::from(2u64), Fr::from(1u64)];
        assert_eq!(eval_poly_at(&coeffs, &Fr::from(5u64)), Fr::from(38u64));
        assert_eq!(eval_poly_at(&[], &Fr::from(5u64)), Fr::zero());
    }

    #[test]
    fn test_poly_long_div_exact() {
        // x^2 - 1 = (x - 1)(x + 1)
        let dividend = vec![-Fr::one(), Fr::zero(), Fr::one()];
        let divisor = vec![-Fr::one(), Fr::one()];
        let quotient = poly_long_div(&dividend, &divisor).unwrap();
        assert_eq!(quotient, vec![Fr::one(), Fr::one()]);
    }

    #[test]
    fn test_poly_long_div_rejects_zero_divisor() {
        let dividend = vec![Fr::one(), Fr::one()];
        assert_eq!(
            poly_long_div(&dividend, &[]),
            Err(KzgError::InvalidDenominator)
        );
        assert_eq!(
            poly_long_div(&dividend, &[Fr::zero()]),
            Err(KzgError::InvalidDenominator)
        );
    }

    #[test]
    fn test_division_inverts_multiplication() {
        // (2 + 3x + x^2) * (5 + x) recovered by dividing the product.
        let p = vec![Fr::from(2u64), Fr::from(3u64), Fr::from(1u64)];
        let q = vec![Fr::from(5u64), Fr::from(1u64)];
        let product = vec![
            Fr::from(10u64),
            Fr::from(17u64),
            Fr::from(8u64),
            Fr::from(1u64),
        ];
        assert_eq!(poly_long_div(&product, &q).unwrap(), p);
        assert_eq!(poly_long_div(&product, &p).unwrap(), q);
    }
}
