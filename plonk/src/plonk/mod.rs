//! The TurboPlonk gate machinery: evaluation domains, keys, the transcript,
//! the public-input delta and the gate widgets.

/// Module for the evaluation domains.
pub mod domain;

/// Module for indexer.
pub mod indexer;

/// Module for the proving and verification keys.
pub mod keys;

/// Module for the public-input delta.
pub mod public_inputs;

/// Module for transcript.
pub mod transcript;

/// Module for the gate widgets.
pub mod widgets;
