//! Alias tables for user-typed region codes and expansion names.
//!
//! Both tables are built once on first use and are read-only afterwards,
//! so lookups can run from any number of tasks without locking.

pub mod expansions;
pub mod regions;

pub use expansions::{lookup_expansion, lookup_expansion_ordinal, Expansion};
pub use regions::{lookup_region, supported_region_aliases, RegionInfo};
