use ark_ec::CurveGroup;
use ark_ff::FftField;

use crate::{errors::FftError, fft::FftSettings};

impl<F: FftField> FftSettings<F> {
    /// The [Self::fft_fr] transform lifted to curve-group elements: scalar
    /// multiplication by roots of unity replaces field multiplication.
    /// Forward direction evaluates, inverse interpolates.
    pub fn fft_g1<G>(&self, vals: &[G], inverse: bool) -> Result<Vec<G>, FftError>
    where
        G: CurveGroup<ScalarField = F>,
    {
        if vals.is_empty() {
            return Err(FftError::LengthNotPowerOfTwo(0));
        }
        let n = vals.len().next_power_of_two();
        if n > self.max_width() {
            return Err(FftError::LengthExceedsMaxWidth {
                len: n,
                max_width: self.max_width(),
            });
        }

        let mut padded = vals.to_vec();
        padded.resize(n, G::zero());
        let mut out = vec![G::zero(); n];
        self.fft_g1_in_place(&padded, &mut out, inverse)?;
        Ok(out)
    }

    /// Allocation-free variant of [Self::fft_g1] writing into caller-supplied
    /// storage.
    pub fn fft_g1_in_place<G>(&self, vals: &[G], out: &mut [G], inverse: bool) -> Result<(), FftError>
    where
        G: CurveGroup<ScalarField = F>,
    {
        let n = vals.len();
        if n > self.max_width() {
            return Err(FftError::LengthExceedsMaxWidth {
                len: n,
                max_width: self.max_width(),
            });
        }
        if !n.is_power_of_two() {
            return Err(FftError::LengthNotPowerOfTwo(n));
        }
        if out.len() != n {
            return Err(FftError::MismatchedOutputLength {
                expected: n,
                actual: out.len(),
            });
        }

        let roots_stride = self.max_width() / n;
        if inverse {
            let roots = &self.reverse_roots_of_unity()[..self.max_width()];
            fft_g1_recursive(vals, 0, 1, roots, roots_stride, out);

            let inv_len = F::from(n as u64)
                .inverse()
                .ok_or(FftError::LengthNotPowerOfTwo(n))?;
            for point in out.iter_mut() {
                *point *= inv_len;
            }
        } else {
            let roots = &self.expanded_roots_of_unity()[..self.max_width()];
            fft_g1_recursive(vals, 0, 1, roots, roots_stride, out);
        }
        Ok(())
    }
}

/// Same `(offset, stride)` recursion as the field transform; the butterfly
/// reads both points into locals before overwriting the aliased slots.
fn fft_g1_recursive<G: CurveGroup>(
    vals: &[G],
    offset: usize,
    stride: usize,
    roots: &[G::ScalarField],
    roots_stride: usize,
    out: &mut [G],
) {
    if out.len() <= 4 {
        simple_ft_g1(vals, offset, stride, roots, roots_stride, out);
        return;
    }

    let half = out.len() >> 1;
    let (left, right) = out.split_at_mut(half);
    fft_g1_recursive(vals, offset, stride << 1, roots, roots_stride << 1, left);
    fft_g1_recursive(
        vals,
        offset + stride,
        stride << 1,
        roots,
        roots_stride << 1,
        right,
    );

    for i in 0..half {
        let x = left[i];
        let y = right[i];
        let y_times_root = y * roots[i * roots_stride];
        left[i] = x + y_times_root;
        right[i] = x - y_times_root;
    }
}

fn simple_ft_g1<G: CurveGroup>(
    vals: &[G],
    offset: usize,
    stride: usize,
    roots: &[G::ScalarField],
    roots_stride: usize,
    out: &mut [G],
) {
    let l = out.len();
    for (i, out_i) in out.iter_mut().enumerate() {
        let mut last = vals[offset] * roots[0];
        for j in 1..l {
            last += vals[offset + j * stride] * roots[((i * j) % l) * roots_stride];
        }
        *out_i = last;
    }
}
