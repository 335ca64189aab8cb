#![deny(warnings)]
#![allow(clippy::needless_borrow)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;

/// Module for the plonk errors.
pub mod errors;

/// Module for the TurboPlonk gate machinery.
pub mod plonk;

/// Module for polynomials and polynomial commitments.
pub mod poly_commit;
