use crate::core::io::description::SystemDescription;
use crate::core::io::error::DeserializationError;
use crate::core::io::positions::read_positions;
use crate::core::models::error::InputError;
use crate::core::models::input::PotentialInput;
use crate::core::models::pairs::PairList;
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum AssembleError {
    #[error("Failed to read input data: {0}")]
    Read(#[from] DeserializationError),

    #[error("Assembled fields do not form a valid record: {0}")]
    Input(#[from] InputError),
}

/// Assembles a validated input record from a system description and a
/// positions-tensor file.
///
/// The description supplies atom identities (numbers or element symbols),
/// grouping, charges, and the periodic box; the tensor file supplies the
/// coordinates. If the description carries a `pair_cutoff`, a neighbor-pair
/// list is generated over the loaded positions before the record is built.
///
/// # Errors
///
/// Returns [`AssembleError::Read`] if either file is unreadable or
/// malformed, and [`AssembleError::Input`] if the assembled fields violate
/// the record invariants.
#[instrument(skip_all, name = "assemble_workflow")]
pub fn assemble(
    description_path: &Path,
    positions_path: &Path,
) -> Result<PotentialInput, AssembleError> {
    info!("Assembling input record from system description and positions tensor.");

    let description = SystemDescription::load(description_path)?;
    let positions = read_positions(positions_path)?;

    let atomic_numbers = description.resolve_atomic_numbers()?;
    let box_vectors = description.box_matrix();

    let pair_list = match description.pair_cutoff {
        Some(cutoff) => {
            let indices = description
                .atomic_subsystem_indices
                .as_deref()
                .ok_or(InputError::MissingField("atomic_subsystem_indices"))?;
            Some(PairList::within_cutoff(&positions, indices, cutoff, false)?)
        }
        None => None,
    };

    let mut builder = PotentialInput::builder()
        .atomic_numbers(atomic_numbers)
        .positions(positions);
    if let Some(indices) = description.atomic_subsystem_indices {
        builder = builder.atomic_subsystem_indices(indices);
    }
    if let Some(charge) = description.total_charge {
        builder = builder.total_charge(charge);
    }
    if let Some(pairs) = pair_list {
        builder = builder.pair_list(pairs);
    }
    if let Some(charges) = description.partial_charges {
        builder = builder.partial_charges(charges);
    }
    if let Some(cell) = box_vectors {
        builder = builder.box_vectors(cell);
    }
    if let Some(periodic) = description.is_periodic {
        builder = builder.is_periodic(periodic);
    }

    let input = builder.build()?;
    info!(
        atoms = input.num_atoms(),
        systems = input.num_systems(),
        "Assembled input record."
    );
    Ok(input)
}
