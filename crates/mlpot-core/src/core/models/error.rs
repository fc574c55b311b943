use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Shape mismatch for '{field}': expected length {expected}, got {actual}")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Pair ({i}, {j}) references an atom outside the system of {num_atoms} atoms")]
    PairOutOfRange { i: u32, j: u32, num_atoms: usize },

    #[error("Pair list couples atom {index} with itself")]
    SelfPair { index: u32 },

    #[error("Unknown element symbol: '{0}'")]
    UnknownElement(String),
}
