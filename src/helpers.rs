use ark_ec::{pairing::Pairing, CurveGroup, VariableBaseMSM};
use ark_ff::{Field, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::Zero;

use crate::errors::KzgError;

/// Computes powers of a field element up to a given exponent:
/// `[1, x, x^2, ..., x^(count-1)]`.
pub fn compute_powers<F: Field>(base: &F, count: usize) -> Vec<F> {
    let mut powers = Vec::with_capacity(count);
    let mut current = F::one();
    for _ in 0..count {
        powers.push(current);
        current *= base;
    }
    powers
}

/// Computes a linear combination of G1 points weighted by scalar
/// coefficients, `s_1*P_1 + ... + s_n*P_n`, via multi-scalar multiplication.
pub fn g1_lincomb<E: Pairing>(
    points: &[E::G1Affine],
    scalars: &[E::ScalarField],
) -> Result<E::G1Affine, KzgError> {
    let lincomb = E::G1::msm(points, scalars)
        .map_err(|_| KzgError::MsmError("point and scalar lengths differ".to_string()))?;
    Ok(lincomb.into_affine())
}

/// Serializes a field element to its canonical little-endian byte encoding
/// (32 bytes for the 254/255-bit fields this crate is used with).
pub fn fr_to_bytes_le<F: PrimeField>(element: &F) -> Result<Vec<u8>, KzgError> {
    let mut bytes = Vec::new();
    element
        .serialize_compressed(&mut bytes)
        .map_err(|e| KzgError::SerializationError(e.to_string()))?;
    Ok(bytes)
}

/// Deserializes a field element from its canonical little-endian encoding.
/// Rejects non-canonical encodings (values at or above the field modulus).
pub fn fr_from_bytes_le<F: PrimeField>(bytes: &[u8]) -> Result<F, KzgError> {
    F::deserialize_compressed(bytes).map_err(|e| KzgError::SerializationError(e.to_string()))
}

/// Serializes a group point in compressed form (32 bytes for a bn254 G1
/// point, 48 for bls12-381).
pub fn point_to_compressed_bytes<P: CanonicalSerialize>(point: &P) -> Result<Vec<u8>, KzgError> {
    let mut bytes = Vec::new();
    point
        .serialize_compressed(&mut bytes)
        .map_err(|e| KzgError::SerializationError(e.to_string()))?;
    Ok(bytes)
}

/// Deserializes a group point from compressed form, with subgroup checks.
pub fn point_from_compressed_bytes<P: CanonicalDeserialize>(bytes: &[u8]) -> Result<P, KzgError> {
    P::deserialize_compressed(bytes).map_err(|e| KzgError::SerializationError(e.to_string()))
}

/// Verifies the pairing equation `e(a1, a2) * e(-b1, b2) == 1`, i.e.
/// `e(a1, a2) == e(b1, b2)`.
pub fn pairings_verify<E: Pairing>(
    a1: E::G1Affine,
    a2: E::G2Affine,
    b1: E::G1Affine,
    b2: E::G2Affine,
) -> bool {
    let neg_b1 = (-E::G1::from(b1)).into_affine();
    let result = E::multi_pairing([a1, neg_b1], [a2, b2]);
    result.is_zero()
}
