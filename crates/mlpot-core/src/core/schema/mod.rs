//! # Schema Module
//!
//! Version tagging and migration for serialized input records.
//!
//! Record files carry a schema version in their header. Each version decodes
//! into its own payload type ([`legacy::LegacyInput`] for v1,
//! [`PotentialInput`] for the current v2) wrapped in the tagged
//! [`VersionedRecord`], and [`VersionedRecord::into_current`] applies the
//! pure conversion to the current shape. Legacy data is never probed
//! field-by-field at call sites; defaults are resolved in one place by the
//! record builder.

pub mod legacy;
pub mod migrate;

use crate::core::models::error::InputError;
use crate::core::models::input::PotentialInput;
use legacy::LegacyInput;

/// The schema version written by this library.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// A decoded record payload, tagged with the schema it was written under.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionedRecord {
    /// Schema v1: all fields optional on the wire.
    V1(LegacyInput),
    /// Schema v2: the current, validated record shape.
    V2(PotentialInput),
}

impl VersionedRecord {
    /// Returns the schema version this payload was written under.
    pub fn schema_version(&self) -> u32 {
        match self {
            Self::V1(_) => 1,
            Self::V2(_) => 2,
        }
    }

    /// Converts the payload to the current schema.
    ///
    /// Current-shaped payloads pass through unchanged; legacy payloads are
    /// migrated, which re-applies every construction invariant.
    ///
    /// # Errors
    ///
    /// Returns the construction errors of [`migrate::migrate`] for legacy
    /// payloads with missing required fields or inconsistent shapes.
    pub fn into_current(self) -> Result<PotentialInput, InputError> {
        match self {
            Self::V1(legacy) => migrate::migrate(legacy),
            Self::V2(input) => Ok(input),
        }
    }
}

impl From<PotentialInput> for VersionedRecord {
    fn from(input: PotentialInput) -> Self {
        Self::V2(input)
    }
}
