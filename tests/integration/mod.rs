//! Integration tests for raidscout.

pub mod common;
pub mod pipeline_test;
