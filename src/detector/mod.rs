//! Image-space detection: binarize, group dark pixels into components,
//! locate the three position-detection patterns, and sample the module
//! matrix off the resulting grid.

/// Fixed-threshold binarization (stage A).
pub mod binarizer;
/// 8-connected flood-fill component grouping (stage B).
pub mod components;
/// Position-detection-pattern pairing and right-angle triple selection (stage C).
pub mod finder;
/// Module pitch estimation and grid sampling (stage D).
pub mod grid;
