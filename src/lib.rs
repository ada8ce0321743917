//! Binary search variants for sorted arrays.
//!
//! This crate implements a family of interchangeable point-lookup algorithms
//! over ascending `i32` slices, from the textbook two-bound search to
//! boundless, monobound, quaternary, interpolation-seeded, and
//! locality-seeded styles. All variants answer the same question — the index
//! of an exact match, or `None` — and differ only in how they narrow the
//! candidate window, trading comparison count against branch-prediction
//! friendliness and exploitation of the data distribution or access pattern.
//!
//! # Variants
//!
//! - Linear baselines ([`linear_search`], [`breaking_linear_search`])
//! - Bisection family ([`standard_binary_search`], [`boundless_binary_search`],
//!   [`doubletapped_binary_search`], [`monobound_binary_search`],
//!   [`tripletapped_binary_search`], [`monobound_quaternary_search`])
//! - Estimate-seeded ([`monobound_interpolated_search`], [`AdaptiveSearch`])
//! - Comparator-generic ([`monobound_search_by`])
//!
//! # Instrumentation
//!
//! Every variant ticks a caller-owned [`Checks`] counter once per element
//! comparison, so the comparison-count trade-offs between variants can be
//! measured directly. The counter never changes what a variant does.
//!
//! # Contract
//!
//! Input slices must be sorted ascending (duplicates allowed); passing
//! unsorted data gives meaningless results, not a reported error. The empty
//! slice is a defined miss for every variant, answered without touching any
//! element. Under duplicates the returned index is some matching position;
//! only [`linear_search`] pins down which one.

mod adaptive;
mod bisect;
mod checks;
mod comparator;
mod interpolated;
mod linear;

pub use adaptive::*;
pub use bisect::*;
pub use checks::*;
pub use comparator::*;
pub use interpolated::*;
pub use linear::*;
