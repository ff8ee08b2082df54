//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where each component was drawn on the last
//! frame; `region_at()` says which component is under a screen position.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};

#[cfg(test)]
#[path = "layout/layout_hit_test_tests.rs"]
mod layout_hit_test_tests;
