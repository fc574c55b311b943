use super::error::DeserializationError;
use crate::core::models::error::InputError;
use crate::core::utils::elements::atomic_number;
use nalgebra::Matrix3;
use serde::Deserialize;
use std::path::Path;

/// The human-editable TOML counterpart of a record's scalar fields.
///
/// Positions always come from a separate binary tensor file; everything
/// else a record needs can be stated here. Atoms may be listed either as
/// `atomic_numbers` or as element symbols under `elements`; when both are
/// present, `atomic_numbers` wins. A `pair_cutoff` (same length unit as
/// the positions) requests neighbor-pair generation during assembly.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SystemDescription {
    pub elements: Option<Vec<String>>,
    pub atomic_numbers: Option<Vec<u32>>,
    pub atomic_subsystem_indices: Option<Vec<u32>>,
    pub total_charge: Option<Vec<i32>>,
    pub partial_charges: Option<Vec<f64>>,
    pub box_vectors: Option<[[f64; 3]; 3]>,
    pub is_periodic: Option<bool>,
    pub pair_cutoff: Option<f64>,
}

impl SystemDescription {
    /// Loads a description from a TOML file.
    pub fn load(path: &Path) -> Result<Self, DeserializationError> {
        let content = std::fs::read_to_string(path).map_err(|e| DeserializationError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| DeserializationError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    /// Resolves the per-atom atomic numbers, translating element symbols
    /// through the static element table when no explicit numbers are given.
    pub fn resolve_atomic_numbers(&self) -> Result<Vec<u32>, InputError> {
        if let Some(numbers) = &self.atomic_numbers {
            return Ok(numbers.clone());
        }
        let symbols = self
            .elements
            .as_ref()
            .ok_or(InputError::MissingField("atomic_numbers"))?;
        symbols
            .iter()
            .map(|symbol| {
                atomic_number(symbol).ok_or_else(|| InputError::UnknownElement(symbol.clone()))
            })
            .collect()
    }

    /// Returns the periodic cell as a matrix, row per lattice vector.
    pub fn box_matrix(&self) -> Option<Matrix3<f64>> {
        self.box_vectors
            .map(|rows| Matrix3::from_row_slice(&rows.concat()))
    }
}
