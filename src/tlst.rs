use std::io::{Cursor, Read, Seek, SeekFrom, Write};

use binrw::{BinReaderExt, BinWriterExt};
use log::{debug, warn};

use crate::{
    error::{EncodeError, FormatError, StringField, TlstError},
    model::{TrackEntry, TrackList},
    structs::{TlstHeader, TrackRecord, ABSENT_OFFSET, MAX_STRING_OFFSET},
};

impl TrackEntry {
    fn from_record(record: &TrackRecord, filename: String, title: String) -> Self {
        TrackEntry {
            song_id: record.song_id,
            delay: record.delay,
            volume: record.volume,
            frequency: record.frequency,
            switch_value: record.switch_value,
            disable_pinch: record.disable_pinch,
            disable_tlst_inclusion: record.disable_tlst_inclusion,
            title,
            filename,
        }
    }

    fn to_record(&self, filename_offset: u16, title_offset: u16) -> TrackRecord {
        TrackRecord {
            song_id: self.song_id,
            delay: self.delay,
            volume: self.volume,
            frequency: self.frequency,
            filename_offset,
            title_offset,
            switch_value: self.switch_value,
            disable_pinch: self.disable_pinch,
            disable_tlst_inclusion: self.disable_tlst_inclusion,
        }
    }
}

/// reads the null terminated string at `offset` relative to the string table
fn read_string(buf: &[u8], strings_offset: usize, offset: u16) -> Result<String, TlstError> {
    if offset == ABSENT_OFFSET {
        return Ok(String::new());
    }
    let position = strings_offset + usize::from(offset);
    let tail = buf
        .get(position..)
        .filter(|tail| !tail.is_empty())
        .ok_or(FormatError::StringOutOfBounds {
            position,
            len: buf.len(),
        })?;
    let end = tail
        .iter()
        .position(|b| *b == 0)
        .ok_or(FormatError::UnterminatedString { position })?;
    Ok(std::str::from_utf8(&tail[..end])?.to_owned())
}

/// appends the string to the string table, returns the offset to store in the record
fn push_string(
    strings: &mut Vec<u8>,
    value: &str,
    index: usize,
    field: StringField,
) -> Result<u16, EncodeError> {
    // empty strings are not written at all
    if value.is_empty() {
        return Ok(ABSENT_OFFSET);
    }
    if value.bytes().any(|b| b == 0) {
        return Err(EncodeError::InteriorNul { index, field });
    }
    let offset = u16::try_from(strings.len())
        .ok()
        .filter(|off| *off <= MAX_STRING_OFFSET)
        .ok_or(EncodeError::StringOffsetOverflow {
            index,
            field,
            offset: strings.len(),
        })?;
    strings.extend_from_slice(value.as_bytes());
    strings.push(0);
    Ok(offset)
}

impl TrackList {
    pub fn from_bytes(buf: &[u8]) -> Result<Self, TlstError> {
        if buf.len() < TlstHeader::byte_len() {
            return Err(FormatError::TruncatedHeader { len: buf.len() }.into());
        }
        let mut f = Cursor::new(buf);
        let header: TlstHeader = match f.read_be() {
            Ok(header) => header,
            Err(binrw::Error::BadMagic { .. }) => {
                let mut found = [0; 4];
                found.copy_from_slice(&buf[..4]);
                return Err(FormatError::BadMagic { found }.into());
            }
            Err(e) => return Err(e.into()),
        };
        let strings_offset = usize::from(header.strings_offset);
        // records can't overlap the string table, an offset inside the header
        // means there is no usable table position to limit them
        let records_end = if strings_offset > TlstHeader::byte_len() {
            strings_offset.min(buf.len())
        } else {
            buf.len()
        };
        // the count is untrusted, don't let it drive the allocation
        let fitting = (records_end - TlstHeader::byte_len()) / TrackRecord::byte_len();
        let mut tracks = Vec::with_capacity(fitting.min(header.entry_count as usize));
        for index in 0..header.entry_count as usize {
            let record_pos = TrackRecord::position(index);
            if record_pos + TrackRecord::byte_len() > records_end {
                warn!(
                    "record {index} doesn't fit before {records_end:#X}, stopping after {} of {} tracks",
                    tracks.len(),
                    header.entry_count
                );
                break;
            }
            f.seek(SeekFrom::Start(record_pos as u64))?;
            let record: TrackRecord = f.read_be()?;
            let title = read_string(buf, strings_offset, record.title_offset)?;
            let filename = read_string(buf, strings_offset, record.filename_offset)?;
            tracks.push(TrackEntry::from_record(&record, filename, title));
            // nothing can follow once the records reach the end of the file
            if f.position() as usize == buf.len() {
                if tracks.len() < header.entry_count as usize {
                    warn!(
                        "reached end of file after {} of {} tracks",
                        tracks.len(),
                        header.entry_count
                    );
                }
                break;
            }
        }
        debug!(
            "parsed {} tracks, string table at {strings_offset:#X}",
            tracks.len()
        );
        Ok(TrackList { tracks })
    }

    pub fn from_reader<R: Read>(r: &mut R) -> Result<Self, TlstError> {
        let mut buf = Vec::new();
        r.read_to_end(&mut buf)?;
        Self::from_bytes(&buf)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, TlstError> {
        let count = self.tracks.len();
        let entry_count =
            u32::try_from(count).map_err(|_| EncodeError::TooManyEntries { count })?;
        // string table starts right after the last record
        let strings_offset = TrackRecord::position(count);
        let strings_offset_field = u16::try_from(strings_offset)
            .map_err(|_| EncodeError::TooManyEntries { count })?;

        // first, lay out the string table and remember the offsets of every track
        let mut strings = Vec::new();
        let mut records = Vec::with_capacity(count);
        for (index, track) in self.tracks.iter().enumerate() {
            // filename always comes before the title
            let filename_offset =
                push_string(&mut strings, &track.filename, index, StringField::Filename)?;
            let title_offset =
                push_string(&mut strings, &track.title, index, StringField::Title)?;
            records.push(track.to_record(filename_offset, title_offset));
        }

        let len = strings_offset + strings.len();
        let file_length = u16::try_from(len).map_err(|_| EncodeError::FileTooLarge { len })?;
        let header = TlstHeader {
            entry_count,
            file_length,
            strings_offset: strings_offset_field,
        };
        let mut ws = Cursor::new(Vec::with_capacity(len));
        ws.write_be(&header)?;
        for record in records.iter() {
            ws.write_be(record)?;
        }
        ws.write_all(&strings)?;
        debug!("wrote {count} tracks, {len} bytes");
        Ok(ws.into_inner())
    }

    pub fn write_tlst<W: Write>(&self, w: &mut W) -> Result<(), TlstError> {
        w.write_all(&self.to_bytes()?)?;
        w.flush()?;
        Ok(())
    }
}
