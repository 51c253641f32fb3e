//! ## Library Design / Architecture
//!
//! This library implements the polynomial commitment machinery behind data
//! availability sampling: FFTs over field elements and curve points,
//! erasure-code extension and recovery of evaluation data, and KZG
//! commitments with single, multi, and FK20 batch proofs.
//!
//! ### Data Pipeline
//!
//! The main data pipeline goes:
//! > data (field elements, evaluation form) -> DAS extension
//! > ([fft::FftSettings::das_fft_extension]) -> KZG commitment
//! > ([kzg::KzgSettings::commit_to_poly]) -> per-sample proofs
//! > ([fk20::Fk20SingleSettings] / [fk20::Fk20MultiSettings])
//!
//! and on the receiving side:
//! > sampled data with gaps -> recovery
//! > ([fft::FftSettings::recover_poly_from_samples]) -> original data
//!
//! ### Backends
//!
//! Everything is generic over the arkworks abstractions: field transforms
//! require [`ark_ff::FftField`], point transforms any
//! [`ark_ec::CurveGroup`] over that field, and the commitment layer an
//! [`ark_ec::pairing::Pairing`]. Tests and benchmarks instantiate the
//! stack with bn254; any curve with a large power-of-two subgroup in its
//! scalar field works the same way.
//!
//! [`FftSettings`](fft::FftSettings) precomputes the root-of-unity tables
//! a domain needs and is shared by every layer above it.
//! [`KzgSettings`](kzg::KzgSettings) borrows an `FftSettings` and adds the
//! SRS points; the FK20 types borrow a `KzgSettings` and add the
//! Toeplitz-transformed SRS their batch algorithms consume. None of the
//! settings types use interior mutability, so sharing them across threads
//! is plain `&` borrows.

mod das;
mod fft_g1;
mod recover;
mod zero_poly;

pub mod consts;
pub mod errors;
pub mod fft;
pub mod fk20;
pub mod helpers;
pub mod kzg;
pub mod polynomial;
pub mod srs;
