//! Structured reference string generation.
//!
//! Only for tests and local experimentation: a real deployment must load
//! the output of a trusted setup ceremony, since whoever knows the secret
//! scalar can forge proofs.

use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};

use crate::helpers::compute_powers;

/// Generates `[G * s^i]` and `[H * s^i]` for `i` in `0..n`, where `G` and
/// `H` are the G1 and G2 generators.
pub fn generate_trusted_setup<E: Pairing>(
    secret: &E::ScalarField,
    n: usize,
) -> (Vec<E::G1Affine>, Vec<E::G2Affine>) {
    let powers = compute_powers(secret, n);

    let g1_generator = E::G1Affine::generator();
    let g2_generator = E::G2Affine::generator();
    let g1_projective: Vec<E::G1> = powers.iter().map(|power| g1_generator * power).collect();
    let g2_projective: Vec<E::G2> = powers.iter().map(|power| g2_generator * power).collect();

    (
        E::G1::normalize_batch(&g1_projective),
        E::G2::normalize_batch(&g2_projective),
    )
}
