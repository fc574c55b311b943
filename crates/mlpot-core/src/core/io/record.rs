//! Versioned binary record files.
//!
//! A record file is a 4-byte magic (`MLPR`), a little-endian `u32` schema
//! version, then a bincode-encoded payload of that version's struct.
//! Writing always emits the current schema; reading decodes whichever
//! version the header names into a [`VersionedRecord`].

use super::error::{DeserializationError, SerializationError};
use crate::core::models::input::PotentialInput;
use crate::core::schema::legacy::LegacyInput;
use crate::core::schema::{CURRENT_SCHEMA_VERSION, VersionedRecord};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

pub const RECORD_MAGIC: [u8; 4] = *b"MLPR";

/// Writes a record file in the current schema.
///
/// # Errors
///
/// Returns a [`SerializationError`] if the file cannot be created or the
/// payload fails to encode.
pub fn write_record(path: &Path, input: &PotentialInput) -> Result<(), SerializationError> {
    let io_err = |source| SerializationError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&RECORD_MAGIC).map_err(io_err)?;
    writer
        .write_all(&CURRENT_SCHEMA_VERSION.to_le_bytes())
        .map_err(io_err)?;
    bincode::serialize_into(&mut writer, input).map_err(|source| SerializationError::Encode {
        path: path.to_string_lossy().to_string(),
        source,
    })?;
    writer.flush().map_err(io_err)?;

    debug!(
        atoms = input.num_atoms(),
        schema = CURRENT_SCHEMA_VERSION,
        path = %path.display(),
        "Wrote record file"
    );
    Ok(())
}

/// Reads a record file into its version-tagged payload.
///
/// Current-schema payloads are re-validated against the record invariants
/// before being returned; legacy payloads are returned as decoded, since
/// their invariants are applied during migration.
///
/// # Errors
///
/// Returns a [`DeserializationError`] if the file is unreadable, carries
/// the wrong magic or an unsupported schema version, fails to decode, or
/// (for current-schema payloads) violates the record invariants.
pub fn read_record(path: &Path) -> Result<VersionedRecord, DeserializationError> {
    let io_err = |source| DeserializationError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    };
    let decode_err = |source| DeserializationError::Decode {
        path: path.to_string_lossy().to_string(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic).map_err(io_err)?;
    if magic != RECORD_MAGIC {
        return Err(DeserializationError::BadMagic {
            path: path.to_string_lossy().to_string(),
            expected: "potential input record",
        });
    }

    let mut version_bytes = [0u8; 4];
    reader.read_exact(&mut version_bytes).map_err(io_err)?;
    let version = u32::from_le_bytes(version_bytes);

    let record = match version {
        1 => {
            let legacy: LegacyInput =
                bincode::deserialize_from(&mut reader).map_err(decode_err)?;
            VersionedRecord::V1(legacy)
        }
        2 => {
            let input: PotentialInput =
                bincode::deserialize_from(&mut reader).map_err(decode_err)?;
            input
                .validate()
                .map_err(|source| DeserializationError::Validation {
                    path: path.to_string_lossy().to_string(),
                    source,
                })?;
            VersionedRecord::V2(input)
        }
        version => {
            return Err(DeserializationError::UnsupportedVersion {
                path: path.to_string_lossy().to_string(),
                version,
            });
        }
    };

    debug!(schema = version, path = %path.display(), "Read record file");
    Ok(record)
}

/// Reads a record file and converts it to the current schema.
///
/// # Errors
///
/// Returns the errors of [`read_record`], plus a
/// [`DeserializationError::Validation`] if a legacy payload cannot be
/// migrated to a valid record.
pub fn read_current(path: &Path) -> Result<PotentialInput, DeserializationError> {
    read_record(path)?
        .into_current()
        .map_err(|source| DeserializationError::Validation {
            path: path.to_string_lossy().to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::pairs::PairList;
    use nalgebra::{Matrix3, Point3};
    use serde::Serialize;
    use tempfile::tempdir;

    fn sample_input() -> PotentialInput {
        PotentialInput::builder()
            .atomic_numbers(vec![6, 6, 8])
            .positions(vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.15, 0.0, 0.0),
                Point3::new(0.27, 0.0, 0.0),
            ])
            .atomic_subsystem_indices(vec![0, 0, 0])
            .total_charge(vec![0])
            .build()
            .unwrap()
    }

    fn write_legacy_file(path: &Path, legacy: &LegacyInput) {
        let file = File::create(path).unwrap();
        let mut writer = BufWriter::new(file);
        writer.write_all(&RECORD_MAGIC).unwrap();
        writer.write_all(&1u32.to_le_bytes()).unwrap();
        bincode::serialize_into(&mut writer, legacy).unwrap();
        writer.flush().unwrap();
    }

    mod round_trips {
        use super::*;

        #[test]
        fn current_record_survives_write_and_read_unchanged() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("frame.mlpr");
            let input = sample_input();

            write_record(&path, &input).unwrap();
            let loaded = read_current(&path).unwrap();
            assert_eq!(loaded, input);
        }

        #[test]
        fn all_optional_fields_survive_the_round_trip() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("full.mlpr");
            let input = PotentialInput::builder()
                .atomic_numbers(vec![1, 1])
                .positions(vec![Point3::origin(), Point3::new(0.074, 0.0, 0.0)])
                .atomic_subsystem_indices(vec![0, 0])
                .total_charge(vec![0])
                .pair_list(PairList::new(vec![[0, 1], [1, 0]]))
                .partial_charges(vec![0.0, 0.0])
                .box_vectors(Matrix3::from_diagonal_element(1.5))
                .is_periodic(true)
                .build()
                .unwrap();

            write_record(&path, &input).unwrap();
            assert_eq!(read_current(&path).unwrap(), input);
        }
    }

    mod legacy_files {
        use super::*;

        #[test]
        fn legacy_file_reads_as_v1_and_migrates_with_defaults() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("old.mlpr");
            write_legacy_file(
                &path,
                &LegacyInput {
                    atomic_numbers: Some(vec![8]),
                    positions: Some(vec![Point3::origin()]),
                    atomic_subsystem_indices: Some(vec![0]),
                    total_charge: Some(vec![-2]),
                    ..LegacyInput::default()
                },
            );

            let record = read_record(&path).unwrap();
            assert_eq!(record.schema_version(), 1);

            let input = read_current(&path).unwrap();
            assert!(input.pair_list().is_none());
            assert_eq!(input.box_vectors(), &Matrix3::zeros());
            assert!(!input.is_periodic());
            assert_eq!(input.total_charge(), &[-2]);
        }

        #[test]
        fn legacy_file_missing_required_fields_fails_validation() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("incomplete.mlpr");
            write_legacy_file(
                &path,
                &LegacyInput {
                    atomic_numbers: Some(vec![8]),
                    ..LegacyInput::default()
                },
            );

            let err = read_current(&path).unwrap_err();
            assert!(matches!(err, DeserializationError::Validation { .. }));
        }
    }

    mod corrupt_files {
        use super::*;

        #[test]
        fn wrong_magic_is_rejected() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("junk.mlpr");
            std::fs::write(&path, b"JUNK\x02\x00\x00\x00").unwrap();

            let err = read_record(&path).unwrap_err();
            assert!(matches!(err, DeserializationError::BadMagic { .. }));
        }

        #[test]
        fn unknown_schema_version_is_rejected() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("future.mlpr");
            let mut bytes = RECORD_MAGIC.to_vec();
            bytes.extend_from_slice(&9u32.to_le_bytes());
            std::fs::write(&path, bytes).unwrap();

            let err = read_record(&path).unwrap_err();
            assert!(matches!(
                err,
                DeserializationError::UnsupportedVersion { version: 9, .. }
            ));
        }

        #[test]
        fn truncated_payload_fails_to_decode() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("cut.mlpr");
            let mut bytes = RECORD_MAGIC.to_vec();
            bytes.extend_from_slice(&CURRENT_SCHEMA_VERSION.to_le_bytes());
            bytes.extend_from_slice(&[0x03, 0x00]);
            std::fs::write(&path, bytes).unwrap();

            let err = read_record(&path).unwrap_err();
            assert!(matches!(err, DeserializationError::Decode { .. }));
        }

        #[test]
        fn current_payload_with_broken_invariants_is_rejected() {
            // Same wire layout as the current record, but with skewed
            // lengths that the builder would never allow.
            #[derive(Serialize)]
            struct RawInput {
                atomic_numbers: Vec<u32>,
                positions: Vec<Point3<f64>>,
                atomic_subsystem_indices: Vec<u32>,
                total_charge: Vec<i32>,
                pair_list: Option<PairList>,
                partial_charges: Option<Vec<f64>>,
                box_vectors: Matrix3<f64>,
                is_periodic: bool,
            }

            let dir = tempdir().unwrap();
            let path = dir.path().join("skewed.mlpr");
            let raw = RawInput {
                atomic_numbers: vec![6, 8],
                positions: vec![Point3::origin()],
                atomic_subsystem_indices: vec![0, 0],
                total_charge: vec![0],
                pair_list: None,
                partial_charges: None,
                box_vectors: Matrix3::zeros(),
                is_periodic: false,
            };

            let file = File::create(&path).unwrap();
            let mut writer = BufWriter::new(file);
            writer.write_all(&RECORD_MAGIC).unwrap();
            writer.write_all(&CURRENT_SCHEMA_VERSION.to_le_bytes()).unwrap();
            bincode::serialize_into(&mut writer, &raw).unwrap();
            writer.flush().unwrap();

            let err = read_record(&path).unwrap_err();
            assert!(matches!(err, DeserializationError::Validation { .. }));
        }
    }
}
