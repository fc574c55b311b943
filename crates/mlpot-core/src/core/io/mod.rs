//! Provides input/output functionality for the file formats the library
//! owns or consumes.
//!
//! Three formats live here: the binary positions-tensor file ([`positions`]),
//! the versioned binary record file ([`record`]), and the human-editable
//! TOML system description ([`description`]). All file handles are scoped to
//! the operation that opens them and close on every exit path.

pub mod description;
pub mod error;
pub mod positions;
pub mod record;
