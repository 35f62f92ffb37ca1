//! Layout module for tracking UI component regions
//!
//! The `LayoutRegions` struct tracks where UI components were rendered, and
//! `region_at()` determines which component is at a given screen position.

mod layout_hit_test;
mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
