//! Binary positions-tensor files.
//!
//! A positions file holds a single (N, 3) array of Cartesian coordinates:
//! a 4-byte magic (`MLPT`), a `u32` format version, a `u64` atom count,
//! then N×3 `f64` coordinates. All integers and floats are little-endian.

use super::error::{DeserializationError, SerializationError};
use nalgebra::Point3;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

pub const POSITIONS_MAGIC: [u8; 4] = *b"MLPT";
pub const POSITIONS_FORMAT_VERSION: u32 = 1;

/// Reads an (N, 3) coordinate array from a positions file.
///
/// # Errors
///
/// Returns a [`DeserializationError`] if the file cannot be opened, carries
/// the wrong magic bytes or an unsupported format version, or is truncated.
pub fn read_positions(path: &Path) -> Result<Vec<Point3<f64>>, DeserializationError> {
    let io_err = |source| DeserializationError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic).map_err(io_err)?;
    if magic != POSITIONS_MAGIC {
        return Err(DeserializationError::BadMagic {
            path: path.to_string_lossy().to_string(),
            expected: "positions tensor",
        });
    }

    let version = read_u32(&mut reader).map_err(io_err)?;
    if version != POSITIONS_FORMAT_VERSION {
        return Err(DeserializationError::UnsupportedVersion {
            path: path.to_string_lossy().to_string(),
            version,
        });
    }

    let count = read_u64(&mut reader).map_err(io_err)? as usize;
    let mut positions = Vec::with_capacity(count);
    for _ in 0..count {
        let x = read_f64(&mut reader).map_err(io_err)?;
        let y = read_f64(&mut reader).map_err(io_err)?;
        let z = read_f64(&mut reader).map_err(io_err)?;
        positions.push(Point3::new(x, y, z));
    }

    debug!(atoms = count, path = %path.display(), "Read positions tensor");
    Ok(positions)
}

/// Writes an (N, 3) coordinate array to a positions file.
///
/// # Errors
///
/// Returns a [`SerializationError`] if the file cannot be created or a
/// write fails.
pub fn write_positions(
    path: &Path,
    positions: &[Point3<f64>],
) -> Result<(), SerializationError> {
    let io_err = |source| SerializationError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(&POSITIONS_MAGIC).map_err(io_err)?;
    writer
        .write_all(&POSITIONS_FORMAT_VERSION.to_le_bytes())
        .map_err(io_err)?;
    writer
        .write_all(&(positions.len() as u64).to_le_bytes())
        .map_err(io_err)?;
    for position in positions {
        for coordinate in [position.x, position.y, position.z] {
            writer.write_all(&coordinate.to_le_bytes()).map_err(io_err)?;
        }
    }
    writer.flush().map_err(io_err)
}

fn read_u32(reader: &mut impl Read) -> std::io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_u64(reader: &mut impl Read) -> std::io::Result<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

fn read_f64(reader: &mut impl Read) -> std::io::Result<f64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}
