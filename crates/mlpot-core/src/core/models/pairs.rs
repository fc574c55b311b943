use super::error::InputError;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// An enumeration of candidate atom-index pairs for pairwise interactions.
///
/// Each entry is an ordered `[i, j]` pair of atom indices into the flat atom
/// arrays of an input record. Pairs never couple atoms from different
/// sub-systems, and an atom is never paired with itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairList {
    pairs: Vec<[u32; 2]>,
}

impl PairList {
    /// Wraps an explicit list of index pairs.
    ///
    /// No invariants are checked here; range and self-pair constraints are
    /// enforced when the pair list is attached to an input record.
    pub fn new(pairs: Vec<[u32; 2]>) -> Self {
        Self { pairs }
    }

    /// Builds a pair list from two parallel index rows.
    ///
    /// The rows correspond to the first and second atom of each pair, in the
    /// 2×M layout used by batched consumers.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::ShapeMismatch`] if the rows differ in length.
    pub fn from_rows(i: Vec<u32>, j: Vec<u32>) -> Result<Self, InputError> {
        if i.len() != j.len() {
            return Err(InputError::ShapeMismatch {
                field: "pair_list",
                expected: i.len(),
                actual: j.len(),
            });
        }
        Ok(Self {
            pairs: i.into_iter().zip(j).map(|(a, b)| [a, b]).collect(),
        })
    }

    /// Enumerates every pair of distinct atoms belonging to the same sub-system.
    ///
    /// # Arguments
    ///
    /// * `atomic_subsystem_indices` - Sub-system index of each atom.
    /// * `only_unique_pairs` - If true, only `i < j` pairs are emitted;
    ///   otherwise both `(i, j)` and `(j, i)` appear.
    pub fn all_pairs(atomic_subsystem_indices: &[u32], only_unique_pairs: bool) -> Self {
        let n = atomic_subsystem_indices.len();
        let mut pairs = Vec::new();
        for i in 0..n {
            let start = if only_unique_pairs { i + 1 } else { 0 };
            for j in start..n {
                if i == j {
                    continue;
                }
                if atomic_subsystem_indices[i] == atomic_subsystem_indices[j] {
                    pairs.push([i as u32, j as u32]);
                }
            }
        }
        Self { pairs }
    }

    /// Enumerates same-sub-system pairs whose atoms lie within `cutoff` of
    /// each other.
    ///
    /// The cutoff is compared against the Euclidean distance in the same
    /// length unit as `positions`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::ShapeMismatch`] if `positions` and
    /// `atomic_subsystem_indices` differ in length.
    pub fn within_cutoff(
        positions: &[Point3<f64>],
        atomic_subsystem_indices: &[u32],
        cutoff: f64,
        only_unique_pairs: bool,
    ) -> Result<Self, InputError> {
        if positions.len() != atomic_subsystem_indices.len() {
            return Err(InputError::ShapeMismatch {
                field: "atomic_subsystem_indices",
                expected: positions.len(),
                actual: atomic_subsystem_indices.len(),
            });
        }

        let pairs = Self::all_pairs(atomic_subsystem_indices, only_unique_pairs)
            .pairs
            .into_iter()
            .filter(|&[i, j]| {
                nalgebra::distance(&positions[i as usize], &positions[j as usize]) <= cutoff
            })
            .collect();
        Ok(Self { pairs })
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the list contains no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the pairs as a slice of `[i, j]` entries.
    pub fn pairs(&self) -> &[[u32; 2]] {
        &self.pairs
    }

    /// Exports the list as two parallel index rows (the 2×M layout).
    pub fn rows(&self) -> (Vec<u32>, Vec<u32>) {
        self.pairs.iter().map(|&[i, j]| (i, j)).unzip()
    }

    /// Checks range and self-pair invariants against a system of `num_atoms`.
    pub(crate) fn validate(&self, num_atoms: usize) -> Result<(), InputError> {
        for &[i, j] in &self.pairs {
            if i == j {
                return Err(InputError::SelfPair { index: i });
            }
            if i as usize >= num_atoms || j as usize >= num_atoms {
                return Err(InputError::PairOutOfRange { i, j, num_atoms });
            }
        }
        Ok(())
    }
}
