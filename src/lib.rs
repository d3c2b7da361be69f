pub mod error;
pub mod json;
mod model;
pub mod structs;
mod tlst;

pub use error::{EncodeError, FormatError, StringField, TlstError};
pub use model::{TrackEntry, TrackList};
