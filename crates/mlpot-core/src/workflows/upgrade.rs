use crate::core::io::error::{DeserializationError, SerializationError};
use crate::core::io::record::{read_record, write_record};
use crate::core::models::error::InputError;
use crate::core::models::input::PotentialInput;
use crate::core::schema::CURRENT_SCHEMA_VERSION;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum UpgradeError {
    #[error("Failed to read record: {0}")]
    Read(#[from] DeserializationError),

    #[error("Migration produced an invalid record: {0}")]
    Migrate(#[from] InputError),

    #[error("Failed to write upgraded record: {0}")]
    Write(#[from] SerializationError),
}

/// Rewrites a record file in the current schema.
///
/// Reads whichever schema version `input_path` carries, converts it to the
/// current shape (a pass-through for already-current files), and writes the
/// result to `output_path`. Returns the migrated record.
///
/// # Errors
///
/// Returns [`UpgradeError::Read`] if the source file is unreadable or
/// malformed, [`UpgradeError::Migrate`] if the legacy payload cannot form a
/// valid record, and [`UpgradeError::Write`] if the upgraded file cannot be
/// written.
#[instrument(skip_all, name = "upgrade_workflow")]
pub fn upgrade(input_path: &Path, output_path: &Path) -> Result<PotentialInput, UpgradeError> {
    let record = read_record(input_path)?;
    let from_version = record.schema_version();

    let input = record.into_current()?;
    write_record(output_path, &input)?;

    info!(
        from = from_version,
        to = CURRENT_SCHEMA_VERSION,
        atoms = input.num_atoms(),
        "Upgraded record file."
    );
    Ok(input)
}
