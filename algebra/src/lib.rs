#![deny(warnings)]
#![allow(clippy::needless_borrow)]
#![allow(clippy::upper_case_acronyms)]

/// Module for the BN254 scalar field and G1 group.
pub mod bn254;

/// Module for the algebra errors.
pub mod errors;

/// Module for the prelude.
pub mod prelude;

/// Module for the deterministic test randomness.
pub mod rand_helper;

/// Module for serde support of field and group elements.
pub mod serialization;

/// Module for the 101-element prime field.
pub mod small_field;

/// Module for the prime field wrapper macro.
mod prime_field;

/// Module for the algebra traits.
pub mod traits;

/// Module for byte and limb utilities.
pub mod utils;

pub use ark_std::{borrow, fmt, iter, marker, ops, rand, One, UniformRand, Zero};
