//! GRIB1 message scanning.
//!
//! The reader walks a byte buffer looking for the 4-byte "GRIB" marker,
//! decodes one message per marker through the section parsers, and advances
//! by each message's declared total length. Malformed interior messages are
//! skipped by advancing a single byte and rescanning, so a corrupt tail
//! never discards a valid prefix.

use bytes::Bytes;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::message::{Grid, Level, Message, Parameter};
use crate::sections;
use crate::unpacking::unpack_simple;
use crate::{Grib1Error, Grib1Result};

/// Minimum bytes needed for a viable message header (the indicator section).
const MIN_MESSAGE_BYTES: usize = 8;

/// GRIB1 reader over an in-memory buffer.
///
/// Decoding is sequential by design: each message's start offset depends on
/// the previous message's declared length. The reader holds no mutable
/// state, so separate buffers can be parsed concurrently.
pub struct Grib1Reader {
    data: Bytes,
}

impl Grib1Reader {
    pub fn new(data: Bytes) -> Self {
        Self { data }
    }

    /// Size of the underlying buffer in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Decode every well-formed message in the buffer, in order.
    ///
    /// Partial-success semantics: a malformed message is logged and skipped,
    /// and previously decoded messages are always returned. The only hard
    /// failures are a wrong magic or an unsupported edition on the very
    /// first located message.
    pub fn parse(&self) -> Grib1Result<Vec<Message>> {
        let data = self.data.as_ref();
        info!(size = data.len(), "Scanning buffer for GRIB1 messages");

        let mut messages = Vec::new();
        let mut offset = 0;

        while data.len().saturating_sub(offset) >= MIN_MESSAGE_BYTES {
            let Some(found) = find_marker(&data[offset..]) else {
                break;
            };
            offset += found;

            if data.len() - offset < MIN_MESSAGE_BYTES {
                break;
            }

            match decode_message(data, offset, messages.len() + 1) {
                Ok(message) => {
                    debug!(
                        sequence = message.sequence,
                        parameter = %message.parameter.abbrev,
                        byte_length = message.byte_length,
                        "Decoded message"
                    );
                    offset += message.byte_length.max(MIN_MESSAGE_BYTES);
                    messages.push(message);
                }
                Err(err) => {
                    if messages.is_empty()
                        && matches!(
                            err,
                            Grib1Error::InvalidMagic | Grib1Error::UnsupportedEdition(_)
                        )
                    {
                        return Err(err);
                    }
                    warn!(offset, error = %err, "Skipping malformed message");
                    offset += 1;
                }
            }
        }

        info!(count = messages.len(), "Finished scanning");
        Ok(messages)
    }
}

/// Load a file and decode every message in it.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Grib1Result<Vec<Message>> {
    let data = std::fs::read(path)?;
    Grib1Reader::new(Bytes::from(data)).parse()
}

/// Find the next "GRIB" marker in a buffer.
fn find_marker(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|window| window == b"GRIB")
}

/// Decode exactly one message starting at `offset`.
///
/// Section offsets are computed incrementally from the declared section
/// lengths; the message slice is bounded by the indicator's declared total
/// length so a lying header cannot read into the following message.
fn decode_message(data: &[u8], offset: usize, sequence: usize) -> Grib1Result<Message> {
    let indicator = sections::parse_indicator(&data[offset..])?;

    let end = (offset + indicator.message_length).min(data.len());
    let message = &data[offset..end];

    let (pds, next) = sections::parse_product_definition(message, 8)?;

    if pds.has_bms {
        return Err(Grib1Error::Unsupported("bitmap section".to_string()));
    }

    let (grid, next) = if pds.has_gds {
        let (description, next) = sections::parse_grid_description(message, next)?;
        (Some(Grid::from_description(&description)?), next)
    } else {
        (None, next)
    };

    let (bds, _) = sections::parse_binary_data(message, next)?;

    let values = match &grid {
        Some(grid) => unpack_simple(
            &bds.data,
            grid.total_points(),
            bds.bits_per_value,
            bds.reference_value,
            bds.binary_scale_factor,
        )?,
        None => Vec::new(),
    };

    Ok(Message {
        sequence,
        byte_length: indicator.message_length,
        parameter: Parameter::from_code(pds.parameter_code),
        level: Level::new(pds.level_type, pds.level_value),
        reference_time: pds.reference_time,
        grid,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_marker_scans_forward() {
        assert_eq!(find_marker(b"GRIB...."), Some(0));
        assert_eq!(find_marker(b"xxGRIB.."), Some(2));
        assert_eq!(find_marker(b"GRxxIB.."), None);
        assert_eq!(find_marker(b"GRI"), None);
    }

    #[test]
    fn empty_buffer_yields_no_messages() {
        let reader = Grib1Reader::new(Bytes::new());
        assert!(reader.parse().unwrap().is_empty());
    }

    #[test]
    fn markerless_buffer_yields_no_messages() {
        let reader = Grib1Reader::new(Bytes::from_static(&[0u8; 64]));
        assert!(reader.parse().unwrap().is_empty());
    }
}
