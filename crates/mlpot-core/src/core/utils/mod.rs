//! Shared chemical reference data.

pub mod elements;
