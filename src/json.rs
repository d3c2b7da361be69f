//! JSON representation of a [`TrackList`]
//!
//! The document is an object with a `tracks` array, every missing field falls
//! back to its default so hand edited files only need the fields they change.

use std::io::{Read, Write};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{error::TlstError, model::TrackList};

const INDENT: &[u8] = b"    ";

impl TrackList {
    pub fn from_json_str(s: &str) -> Result<Self, TlstError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_reader<R: Read>(r: R) -> Result<Self, TlstError> {
        Ok(serde_json::from_reader(r)?)
    }

    pub fn write_json<W: Write>(&self, w: W) -> Result<(), TlstError> {
        let mut ser = Serializer::with_formatter(w, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut ser)?;
        Ok(())
    }

    pub fn to_json_string(&self) -> Result<String, TlstError> {
        let mut buf = Vec::new();
        self.write_json(&mut buf)?;
        Ok(String::from_utf8(buf).map_err(|e| e.utf8_error())?)
    }
}
