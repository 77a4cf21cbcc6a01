//! Test utilities for labyr development.
//!
//! Provides hand-built fixture grids with known verdicts ([`fixtures`])
//! and proptest strategies for random grids ([`strategies`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod strategies;

pub use fixtures::*;
pub use strategies::{arb_grid, arb_grid_sized, arb_grid_with_endpoints};
