//! Fixed tables of the sexagenary (ganzhi) calendar.
//!
//! This crate provides:
//! - The ten heavenly stems and twelve earthly branches with their elements
//! - Hidden stems (canggan) of each branch
//! - Pillars (stem-branch pairs) and the 60-pair cycle
//! - Nayin names and elements for every pair in the cycle
//!
//! All tables are immutable constants; nothing here allocates or fails
//! except text parsing.

pub mod branch;
pub mod element;
pub mod error;
pub mod nayin;
pub mod pillar;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element};
pub use error::BaseError;
pub use nayin::{ALL_NAYINS, Nayin, nayin_element_by_name, nayin_for_ganzhi};
pub use pillar::{CYCLE_LEN, Pillar};
pub use stem::{ALL_STEMS, Stem};
