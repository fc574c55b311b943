//! # Core Models Module
//!
//! This module contains the data structures that represent a potential input
//! record: the batched, per-frame description of one or more molecular
//! sub-systems handed to a machine-learned potential.
//!
//! ## Key Components
//!
//! - [`input`] - The validated [`input::PotentialInput`] record and its builder
//! - [`pairs`] - The candidate neighbor-pair list and its generation routines
//! - [`error`] - Construction and validation error taxonomy
//!
//! Records are immutable by convention: all fields are set at construction,
//! every shape invariant is validated in the builder, and consumers read the
//! record without mutating it.

pub mod error;
pub mod input;
pub mod pairs;
