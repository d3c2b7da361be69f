use std::{fmt, str::Utf8Error};

use thiserror::Error;

/// Which string of a track an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringField {
    Filename,
    Title,
}

impl fmt::Display for StringField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filename => f.write_str("filename"),
            Self::Title => f.write_str("title"),
        }
    }
}

/// The input bytes are not a valid TLST file
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("file is {len} bytes, shorter than the 12 byte header")]
    TruncatedHeader { len: usize },
    #[error("bad magic {found:02X?}, expected \"TLST\"")]
    BadMagic { found: [u8; 4] },
    #[error("string at {position:#X} is outside of the {len} byte file")]
    StringOutOfBounds { position: usize, len: usize },
    #[error("string at {position:#X} is not null terminated")]
    UnterminatedString { position: usize },
}

/// The track list can't be represented in the TLST format
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EncodeError {
    #[error("{count} tracks don't fit into a TLST file")]
    TooManyEntries { count: usize },
    #[error("{field} of track {index} would be at string offset {offset:#X}, max is 0xFFFE")]
    StringOffsetOverflow {
        index: usize,
        field: StringField,
        offset: usize,
    },
    #[error("{field} of track {index} contains a null byte")]
    InteriorNul { index: usize, field: StringField },
    #[error("file would be {len} bytes, the size field only fits 0xFFFF")]
    FileTooLarge { len: usize },
}

#[derive(Error, Debug)]
pub enum TlstError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("invalid UTF-8 in string: {0}")]
    Encoding(#[from] Utf8Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("binary read/write error: {0}")]
    Binary(#[from] binrw::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
