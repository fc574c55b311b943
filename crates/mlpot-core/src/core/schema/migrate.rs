use super::legacy::LegacyInput;
use crate::core::models::error::InputError;
use crate::core::models::input::PotentialInput;

/// Converts a legacy (schema-v1) payload into a current record.
///
/// A pure, one-shot transform: fields present on the source carry over
/// unchanged, absent optional fields take the current schema's defaults
/// (no pair list, no partial charges, zero box, non-periodic), and absent
/// required fields fail. Defaults are resolved by the record builder, so
/// this function stays a thin field relay.
///
/// Migration is idempotent: a current record re-expressed as
/// [`LegacyInput`] migrates back to an equal record.
///
/// # Errors
///
/// Returns [`InputError::MissingField`] if a required field is absent on
/// the source, or a shape-invariant error if the source data is
/// inconsistent.
pub fn migrate(legacy: LegacyInput) -> Result<PotentialInput, InputError> {
    let mut builder = PotentialInput::builder();

    if let Some(numbers) = legacy.atomic_numbers {
        builder = builder.atomic_numbers(numbers);
    }
    if let Some(positions) = legacy.positions {
        builder = builder.positions(positions);
    }
    if let Some(indices) = legacy.atomic_subsystem_indices {
        builder = builder.atomic_subsystem_indices(indices);
    }
    if let Some(charge) = legacy.total_charge {
        builder = builder.total_charge(charge);
    }
    if let Some(pairs) = legacy.pair_list {
        builder = builder.pair_list(pairs);
    }
    if let Some(charges) = legacy.partial_charges {
        builder = builder.partial_charges(charges);
    }
    if let Some(vectors) = legacy.box_vectors {
        builder = builder.box_vectors(vectors);
    }
    if let Some(periodic) = legacy.is_periodic {
        builder = builder.is_periodic(periodic);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::pairs::PairList;
    use nalgebra::{Matrix3, Point3};

    fn minimal_legacy() -> LegacyInput {
        LegacyInput {
            atomic_numbers: Some(vec![6, 6, 8]),
            positions: Some(vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.15, 0.0, 0.0),
                Point3::new(0.27, 0.0, 0.0),
            ]),
            atomic_subsystem_indices: Some(vec![0, 0, 0]),
            total_charge: Some(vec![0]),
            ..LegacyInput::default()
        }
    }

    #[test]
    fn absent_optional_fields_take_current_defaults() {
        let input = migrate(minimal_legacy()).unwrap();

        assert!(input.pair_list().is_none());
        assert!(input.partial_charges().is_none());
        assert_eq!(input.box_vectors(), &Matrix3::zeros());
        assert!(!input.is_periodic());
    }

    #[test]
    fn absent_required_field_fails_by_name() {
        let legacy = LegacyInput {
            positions: None,
            ..minimal_legacy()
        };
        assert_eq!(
            migrate(legacy).unwrap_err(),
            InputError::MissingField("positions")
        );
    }

    #[test]
    fn inconsistent_source_shapes_are_rejected() {
        let legacy = LegacyInput {
            partial_charges: Some(vec![0.1]),
            ..minimal_legacy()
        };
        assert!(matches!(
            migrate(legacy).unwrap_err(),
            InputError::ShapeMismatch {
                field: "partial_charges",
                ..
            }
        ));
    }

    #[test]
    fn migration_is_the_identity_on_current_records() {
        let original = PotentialInput::builder()
            .atomic_numbers(vec![1, 1, 8])
            .positions(vec![
                Point3::new(0.0757, 0.0586, 0.0),
                Point3::new(-0.0757, 0.0586, 0.0),
                Point3::new(0.0, 0.0, 0.0),
            ])
            .atomic_subsystem_indices(vec![0, 0, 0])
            .total_charge(vec![0])
            .pair_list(PairList::all_pairs(&[0, 0, 0], true))
            .partial_charges(vec![0.33, 0.33, -0.66])
            .box_vectors(Matrix3::from_diagonal_element(1.2))
            .is_periodic(true)
            .build()
            .unwrap();

        let migrated = migrate(LegacyInput::from(original.clone())).unwrap();
        assert_eq!(migrated, original);
    }
}
