use super::error::InputError;
use super::pairs::PairList;
use nalgebra::{Matrix3, Point3};
use serde::{Deserialize, Serialize};

/// The input record consumed by machine-learned interatomic potentials.
///
/// This struct is the boundary format between data loading and model
/// evaluation: a flat, batched description of one or more molecular
/// sub-systems in a single frame. It is constructed once per snapshot
/// through [`PotentialInput::builder`], which validates all field-presence
/// and shape invariants, and is consumed read-only afterwards; a schema
/// change produces a new instance rather than mutating this one.
///
/// Atom-indexed fields (`atomic_numbers`, `positions`,
/// `atomic_subsystem_indices`, and `partial_charges` when present) all have
/// one entry per atom; `total_charge` has one entry per sub-system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotentialInput {
    /// Atomic number of each atom across all sub-systems.
    atomic_numbers: Vec<u32>,
    /// Cartesian coordinates of each atom.
    positions: Vec<Point3<f64>>,
    /// Sub-system (molecule) index of each atom.
    atomic_subsystem_indices: Vec<u32>,
    /// Net charge of each sub-system.
    total_charge: Vec<i32>,
    /// Candidate neighbor pairs; `None` means consumers recompute them.
    pair_list: Option<PairList>,
    /// Per-atom partial charges, if assigned.
    partial_charges: Option<Vec<f64>>,
    /// Periodic cell vectors, row per lattice vector; all-zero when the
    /// system is non-periodic.
    box_vectors: Matrix3<f64>,
    /// Whether the cell described by `box_vectors` repeats periodically.
    is_periodic: bool,
}

impl PotentialInput {
    /// Starts building a new input record.
    pub fn builder() -> PotentialInputBuilder {
        PotentialInputBuilder::default()
    }

    /// Returns the atomic number of each atom.
    pub fn atomic_numbers(&self) -> &[u32] {
        &self.atomic_numbers
    }

    /// Returns the Cartesian coordinates of each atom.
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Returns the sub-system index of each atom.
    pub fn atomic_subsystem_indices(&self) -> &[u32] {
        &self.atomic_subsystem_indices
    }

    /// Returns the net charge of each sub-system.
    pub fn total_charge(&self) -> &[i32] {
        &self.total_charge
    }

    /// Returns the neighbor-pair list, if one was provided.
    pub fn pair_list(&self) -> Option<&PairList> {
        self.pair_list.as_ref()
    }

    /// Returns the per-atom partial charges, if assigned.
    pub fn partial_charges(&self) -> Option<&[f64]> {
        self.partial_charges.as_deref()
    }

    /// Returns the periodic cell vectors.
    pub fn box_vectors(&self) -> &Matrix3<f64> {
        &self.box_vectors
    }

    /// Returns whether the system is periodic.
    pub fn is_periodic(&self) -> bool {
        self.is_periodic
    }

    /// Returns the total number of atoms across all sub-systems.
    pub fn num_atoms(&self) -> usize {
        self.atomic_numbers.len()
    }

    /// Returns the number of sub-systems, as given by `total_charge`.
    pub fn num_systems(&self) -> usize {
        self.total_charge.len()
    }

    /// Re-checks every shape invariant of the record.
    ///
    /// Records built through [`PotentialInput::builder`] always satisfy
    /// these; this is re-applied after deserializing untrusted payloads.
    pub(crate) fn validate(&self) -> Result<(), InputError> {
        let num_atoms = self.atomic_numbers.len();

        if self.positions.len() != num_atoms {
            return Err(InputError::ShapeMismatch {
                field: "positions",
                expected: num_atoms,
                actual: self.positions.len(),
            });
        }
        if self.atomic_subsystem_indices.len() != num_atoms {
            return Err(InputError::ShapeMismatch {
                field: "atomic_subsystem_indices",
                expected: num_atoms,
                actual: self.atomic_subsystem_indices.len(),
            });
        }
        if let Some(charges) = &self.partial_charges {
            if charges.len() != num_atoms {
                return Err(InputError::ShapeMismatch {
                    field: "partial_charges",
                    expected: num_atoms,
                    actual: charges.len(),
                });
            }
        }
        if let Some(pairs) = &self.pair_list {
            pairs.validate(num_atoms)?;
        }
        Ok(())
    }
}

/// Step-wise constructor for [`PotentialInput`].
///
/// Required fields (`atomic_numbers`, `positions`,
/// `atomic_subsystem_indices`, `total_charge`) must be set before
/// [`build`](PotentialInputBuilder::build); optional fields default to
/// their conventional "absent" values: no pair list, no partial charges,
/// an all-zero box, non-periodic.
#[derive(Default)]
pub struct PotentialInputBuilder {
    atomic_numbers: Option<Vec<u32>>,
    positions: Option<Vec<Point3<f64>>>,
    atomic_subsystem_indices: Option<Vec<u32>>,
    total_charge: Option<Vec<i32>>,
    pair_list: Option<PairList>,
    partial_charges: Option<Vec<f64>>,
    box_vectors: Option<Matrix3<f64>>,
    is_periodic: Option<bool>,
}

impl PotentialInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn atomic_numbers(mut self, numbers: Vec<u32>) -> Self {
        self.atomic_numbers = Some(numbers);
        self
    }

    pub fn positions(mut self, positions: Vec<Point3<f64>>) -> Self {
        self.positions = Some(positions);
        self
    }

    pub fn atomic_subsystem_indices(mut self, indices: Vec<u32>) -> Self {
        self.atomic_subsystem_indices = Some(indices);
        self
    }

    pub fn total_charge(mut self, charge: Vec<i32>) -> Self {
        self.total_charge = Some(charge);
        self
    }

    pub fn pair_list(mut self, pairs: PairList) -> Self {
        self.pair_list = Some(pairs);
        self
    }

    pub fn partial_charges(mut self, charges: Vec<f64>) -> Self {
        self.partial_charges = Some(charges);
        self
    }

    pub fn box_vectors(mut self, vectors: Matrix3<f64>) -> Self {
        self.box_vectors = Some(vectors);
        self
    }

    pub fn is_periodic(mut self, periodic: bool) -> Self {
        self.is_periodic = Some(periodic);
        self
    }

    /// Finalizes the record.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::MissingField`] if a required field was never
    /// set, and the shape-invariant errors of
    /// [`InputError`](super::error::InputError) if the assembled fields are
    /// inconsistent.
    pub fn build(self) -> Result<PotentialInput, InputError> {
        let input = PotentialInput {
            atomic_numbers: self
                .atomic_numbers
                .ok_or(InputError::MissingField("atomic_numbers"))?,
            positions: self.positions.ok_or(InputError::MissingField("positions"))?,
            atomic_subsystem_indices: self
                .atomic_subsystem_indices
                .ok_or(InputError::MissingField("atomic_subsystem_indices"))?,
            total_charge: self
                .total_charge
                .ok_or(InputError::MissingField("total_charge"))?,
            pair_list: self.pair_list,
            partial_charges: self.partial_charges,
            box_vectors: self.box_vectors.unwrap_or_else(Matrix3::zeros),
            is_periodic: self.is_periodic.unwrap_or(false),
        };
        input.validate()?;
        Ok(input)
    }
}
