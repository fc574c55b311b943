//! # mlpot Core Library
//!
//! A library for assembling, validating, serializing, and migrating the
//! input records consumed by machine-learned interatomic potentials.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict two-layer architecture to keep the
//! boundary format between data loading and model evaluation small,
//! testable, and stable across schema revisions.
//!
//! - **[`core`]: The Foundation.** Contains the stateless record model
//!   (`PotentialInput`), neighbor-pair generation, the versioned schema with
//!   its pure migration function, and I/O for the formats the library owns
//!   (binary positions tensors, versioned record files, TOML system
//!   descriptions).
//!
//! - **[`workflows`]: The Public API.** This is the highest-level,
//!   user-facing layer. It ties the `core` pieces together into complete
//!   procedures: assembling a validated record from its on-disk parts, and
//!   upgrading legacy record files to the current schema.
//!
//! ## Invariants
//!
//! A `PotentialInput` is only obtainable through its validating builder or
//! through deserialization paths that re-apply the same checks, so every
//! record a consumer sees satisfies the shape invariants: atom-indexed
//! fields agree in length, pair indices are in range with no self-pairs,
//! and absent optional fields hold their conventional defaults.

pub mod core;
pub mod workflows;
