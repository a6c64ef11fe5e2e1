//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Duplicate-key merging
//! - VDF reading
//! - Group / source-binding normalization
//! - Binding resolution
//! - Region compilation and table assembly

#[cfg(test)]
mod normalize_tests;
#[cfg(test)]
mod compiler_tests;
