use std::{fmt, path::PathBuf};

/// Fatal asset problems that callers may want to tell apart from other errors.
#[derive(Debug)]
pub enum AssetError {
    /// No file matching `name` (case-insensitively) exists in `dir`.
    MissingAsset { name: String, dir: PathBuf },
    /// The data ended before a complete record could be read.
    Truncated {
        name: String,
        offset: usize,
        needed: usize,
        len: usize,
    },
    /// A tile header describes an empty tile.
    MalformedHeader {
        name: String,
        width_bytes: u8,
        height: u8,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::MissingAsset { name, dir } => {
                write!(f, "asset file {} not found in {}", name, dir.display())
            }
            AssetError::Truncated {
                name,
                offset,
                needed,
                len,
            } => write!(
                f,
                "{}: unexpected end of data at offset {} (needed {} bytes, file has {})",
                name, offset, needed, len
            ),
            AssetError::MalformedHeader {
                name,
                width_bytes,
                height,
            } => write!(
                f,
                "{}: malformed tile header (width {} bytes, height {})",
                name, width_bytes, height
            ),
        }
    }
}

impl std::error::Error for AssetError {}
