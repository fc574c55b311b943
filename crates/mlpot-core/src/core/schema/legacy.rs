use crate::core::models::input::PotentialInput;
use crate::core::models::pairs::PairList;
use nalgebra::{Matrix3, Point3};
use serde::{Deserialize, Serialize};

/// The schema-v1 record payload.
///
/// Every field is optional: v1 writers emitted whatever fields the source
/// object happened to carry, so decoding must tolerate any of them being
/// absent. Resolution of defaults and presence checks happens in
/// [`migrate`](super::migrate::migrate), not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyInput {
    pub atomic_numbers: Option<Vec<u32>>,
    pub positions: Option<Vec<Point3<f64>>>,
    pub atomic_subsystem_indices: Option<Vec<u32>>,
    pub total_charge: Option<Vec<i32>>,
    pub pair_list: Option<PairList>,
    pub partial_charges: Option<Vec<f64>>,
    pub box_vectors: Option<Matrix3<f64>>,
    pub is_periodic: Option<bool>,
}

impl From<PotentialInput> for LegacyInput {
    /// Re-expresses a current record in the legacy shape, with every field
    /// present. Used to show migration is the identity on current data.
    fn from(input: PotentialInput) -> Self {
        Self {
            atomic_numbers: Some(input.atomic_numbers().to_vec()),
            positions: Some(input.positions().to_vec()),
            atomic_subsystem_indices: Some(input.atomic_subsystem_indices().to_vec()),
            total_charge: Some(input.total_charge().to_vec()),
            pair_list: input.pair_list().cloned(),
            partial_charges: input.partial_charges().map(<[f64]>::to_vec),
            box_vectors: Some(*input.box_vectors()),
            is_periodic: Some(input.is_periodic()),
        }
    }
}
