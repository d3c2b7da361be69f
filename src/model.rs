use serde::{Deserialize, Serialize};

/// Metadata of a single track.
///
/// Empty `title` and `filename` mean the string is absent in the binary file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackEntry {
    pub song_id: u32,
    pub delay: u16,
    pub volume: i8,
    pub frequency: i8,
    #[serde(rename = "switch")]
    pub switch_value: u16,
    pub disable_pinch: bool,
    pub disable_tlst_inclusion: bool,
    pub title: String,
    pub filename: String,
}

/// All tracks of a TLST file, in file order
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackList {
    pub tracks: Vec<TrackEntry>,
}

impl TrackList {
    pub fn new(tracks: Vec<TrackEntry>) -> Self {
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl From<Vec<TrackEntry>> for TrackList {
    fn from(tracks: Vec<TrackEntry>) -> Self {
        Self::new(tracks)
    }
}
