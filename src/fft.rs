use ark_ff::FftField;

use crate::errors::FftError;

/// Precomputed roots-of-unity tables for a power-of-two evaluation domain.
///
/// [FftSettings] is built once from a scale parameter and never mutated
/// afterwards. Every other settings type in this crate ([crate::kzg::KzgSettings],
/// [crate::fk20::Fk20SingleSettings], [crate::fk20::Fk20MultiSettings]) borrows
/// it rather than owning a copy, so a single table can back many concurrent
/// provers and verifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct FftSettings<F: FftField> {
    max_width: usize,
    /// `expanded_roots_of_unity[i] = w^i` for the `max_width`-th root of
    /// unity `w`. Length `max_width + 1`; first and last entries are 1.
    expanded_roots_of_unity: Vec<F>,
    /// The same table reversed, i.e. `w^-i`; drives inverse transforms.
    reverse_roots_of_unity: Vec<F>,
}

impl<F: FftField> FftSettings<F> {
    /// Creates the domain of width `2^scale`.
    pub fn new(scale: u32) -> Result<Self, FftError> {
        let max_width: usize = 1 << scale;
        let root_of_unity = F::get_root_of_unity(max_width as u64)
            .ok_or(FftError::RootOfUnityNotFound(max_width))?;

        let expanded_roots_of_unity = Self::expand_root_of_unity(&root_of_unity);
        debug_assert_eq!(expanded_roots_of_unity.len(), max_width + 1);

        let mut reverse_roots_of_unity = expanded_roots_of_unity.clone();
        reverse_roots_of_unity.reverse();

        Ok(Self {
            max_width,
            expanded_roots_of_unity,
            reverse_roots_of_unity,
        })
    }

    /// Expands a root of unity into the full power sequence
    /// `[1, w, w^2, ...]`, stopping once the sequence cycles back to 1.
    fn expand_root_of_unity(root_of_unity: &F) -> Vec<F> {
        let mut roots = vec![F::one()];
        roots.push(*root_of_unity);

        let mut i = 1;
        while !roots[i].is_one() {
            let next = roots[i] * root_of_unity;
            i += 1;
            roots.push(next);
        }
        roots
    }

    /// Largest supported transform width.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    pub fn expanded_roots_of_unity(&self) -> &[F] {
        &self.expanded_roots_of_unity
    }

    pub fn reverse_roots_of_unity(&self) -> &[F] {
        &self.reverse_roots_of_unity
    }

    /// The `i`-th evaluation point of a width-`width` subdomain.
    pub fn root_of_unity_at(&self, width: usize, i: usize) -> &F {
        &self.expanded_roots_of_unity[i * (self.max_width / width)]
    }

    /// Transforms `vals` between coefficient and evaluation form, padding
    /// with zeros up to the next power of two.
    pub fn fft_fr(&self, vals: &[F], inverse: bool) -> Result<Vec<F>, FftError> {
        if vals.is_empty() {
            return Err(FftError::LengthNotPowerOfTwo(0));
        }
        let n = vals.len().next_power_of_two();
        if n > self.max_width {
            return Err(FftError::LengthExceedsMaxWidth {
                len: n,
                max_width: self.max_width,
            });
        }

        let mut padded = vals.to_vec();
        padded.resize(n, F::zero());
        let mut out = vec![F::zero(); n];
        self.fft_fr_in_place(&padded, &mut out, inverse)?;
        Ok(out)
    }

    /// Allocation-free variant of [Self::fft_fr]: reads `vals` and writes the
    /// transform into caller-supplied `out`. Requires `vals.len()` to be an
    /// exact power of two matching `out.len()`.
    pub fn fft_fr_in_place(&self, vals: &[F], out: &mut [F], inverse: bool) -> Result<(), FftError> {
        let n = vals.len();
        if n > self.max_width {
            return Err(FftError::LengthExceedsMaxWidth {
                len: n,
                max_width: self.max_width,
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

        let roots_stride = self.max_width / n;
        if inverse {
            let roots = &self.reverse_roots_of_unity[..self.max_width];
            fft_recursive(vals, 0, 1, roots, roots_stride, out);

            // n is nonzero and far below the field characteristic.
            let inv_len = F::from(n as u64)
                .inverse()
                .ok_or(FftError::LengthNotPowerOfTwo(n))?;
            for value in out.iter_mut() {
                *value *= inv_len;
            }
        } else {
            let roots = &self.expanded_roots_of_unity[..self.max_width];
            fft_recursive(vals, 0, 1, roots, roots_stride, out);
        }
        Ok(())
    }
}

/// Radix-2 decimation-in-time recursion. Sub-problems are `(offset, stride)`
/// views into the shared input slice; nothing is ever copied out.
///
/// Invariant: the butterfly below reads both operands into locals before
/// writing either output slot. The slots alias the recursion's own inputs,
/// so writing first would silently corrupt the transform.
fn fft_recursive<F: FftField>(
    vals: &[F],
    offset: usize,
    stride: usize,
    roots: &[F],
    roots_stride: usize,
    out: &mut [F],
) {
    if out.len() <= 4 {
        simple_ft(vals, offset, stride, roots, roots_stride, out);
        return;
    }

    let half = out.len() >> 1;
    let (left, right) = out.split_at_mut(half);
    // Even-index sub-problem into the left half, odd-index into the right.
    fft_recursive(vals, offset, stride << 1, roots, roots_stride << 1, left);
    fft_recursive(
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

/// Direct O(n^2) evaluation, used below the recursion cutoff.
fn simple_ft<F: FftField>(
    vals: &[F],
    offset: usize,
    stride: usize,
    roots: &[F],
    roots_stride: usize,
    out: &mut [F],
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

/// Reverses the low `log2(order)` bits of `value`. `order` must be a power
/// of two; `value` must be below it.
pub fn reverse_bits_limited(order: usize, value: usize) -> usize {
    debug_assert!(order.is_power_of_two());
    let bits = order.trailing_zeros();
    if bits == 0 {
        return 0;
    }
    value.reverse_bits() >> (usize::BITS - bits)
}

/// Permutes `vals` into bit-reversed index order. The permutation is an
/// involution: applying it twice restores the original order.
pub fn reverse_bit_order<T>(vals: &mut [T]) -> Result<(), FftError> {
    let n = vals.len();
    if !n.is_power_of_two() {
        return Err(FftError::LengthNotPowerOfTwo(n));
    }
    for i in 0..n {
        let r = reverse_bits_limited(n, i);
        if r > i {
            vals.swap(r, i);
        }
    }
    Ok(())
}
