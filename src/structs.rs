use binrw::binrw;

/// Marks an optional string as absent in a [`TrackRecord`].
pub const ABSENT_OFFSET: u16 = 0xFFFF;

/// The highest offset a string can have inside the string table.
pub const MAX_STRING_OFFSET: u16 = ABSENT_OFFSET - 1;

#[binrw]
#[brw(big, magic = b"TLST")]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TlstHeader {
    pub entry_count: u32,
    // informational only, never used for parsing
    pub file_length: u16,
    // absolute, points right after the last record
    pub strings_offset: u16,
}

impl TlstHeader {
    pub fn byte_len() -> usize {
        12
    }
}

/// Fixed size part of a single track, the strings are stored in the
/// string table and only referenced here
#[binrw]
#[brw(big)]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub song_id: u32,
    pub delay: u16,
    pub volume: i8,
    pub frequency: i8,
    // relative to the start of the string table
    pub filename_offset: u16,
    pub title_offset: u16,
    pub switch_value: u16,
    #[br(map = |b: u8| b != 0)]
    #[bw(map = |b: &bool| u8::from(*b))]
    pub disable_pinch: bool,
    #[br(map = |b: u8| b != 0)]
    #[bw(map = |b: &bool| u8::from(*b))]
    pub disable_tlst_inclusion: bool,
}

impl TrackRecord {
    pub fn byte_len() -> usize {
        16
    }

    /// absolute position of the record with the given index
    pub fn position(index: usize) -> usize {
        TlstHeader::byte_len() + index * Self::byte_len()
    }
}
