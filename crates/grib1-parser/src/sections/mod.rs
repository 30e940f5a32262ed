//! GRIB1 section parsing.
//!
//! A GRIB Edition 1 message is a sequence of byte-aligned sections:
//! Indicator (IS), Product Definition (PDS), optional Grid Definition (GDS),
//! optional Bitmap (BMS), Binary Data (BDS) and the "7777" end marker.
//! Each parser here consumes one section at a fixed offset and reports the
//! offset where the next section starts.

use crate::{Grib1Error, Grib1Result};
use bytes::Bytes;
use chrono::{DateTime, NaiveDate, Utc};

/// Section 0: Indicator Section (fixed 8 bytes in edition 1)
#[derive(Debug, Clone)]
pub struct Indicator {
    pub magic: [u8; 4],
    pub message_length: usize,
    pub edition: u8,
}

/// Section 1: Product Definition Section
#[derive(Debug, Clone)]
pub struct ProductDefinition {
    pub table_version: u8,
    pub center: u8,
    pub generating_process: u8,
    pub grid_id: u8,
    pub has_gds: bool,
    pub has_bms: bool,
    pub parameter_code: u8,
    pub level_type: u8,
    pub level_value: u16,
    pub reference_time: DateTime<Utc>,
}

/// Section 2: Grid Definition Section, raw form.
///
/// Holds the un-normalized corner coordinates and the original scanning mode
/// byte exactly as encoded. Coordinate reconstruction depends on which corner
/// was the literal row/column origin, so this record must not be replaced by
/// a normalized bounding box.
#[derive(Debug, Clone)]
pub struct GridDescription {
    pub representation: u8,
    pub ni: u16,
    pub nj: u16,
    pub lat1: f64,
    pub lon1: f64,
    pub lat2: f64,
    pub lon2: f64,
    pub di: f64,
    pub dj: f64,
    pub scanning_mode: u8,
}

/// Section 4: Binary Data Section header plus the packed bitstream.
#[derive(Debug, Clone)]
pub struct BinaryData {
    pub flag: u8,
    pub binary_scale_factor: i32,
    pub reference_value: f32,
    pub bits_per_value: u8,
    pub data: Bytes,
}

// ===== Parsing Functions =====

/// Parse Section 0 (Indicator) at the start of a message.
///
/// Layout (0-based indices):
/// - Bytes 0-3: "GRIB" magic
/// - Bytes 4-6: Total message length, 3-byte big-endian (all sections
///   including the trailing "7777")
/// - Byte 7: GRIB edition number
pub fn parse_indicator(data: &[u8]) -> Grib1Result<Indicator> {
    if data.len() < 8 {
        return Err(Grib1Error::TruncatedData("indicator"));
    }

    if &data[0..4] != b"GRIB" {
        return Err(Grib1Error::InvalidMagic);
    }

    let message_length = u32::from_be_bytes([0, data[4], data[5], data[6]]) as usize;
    let edition = data[7];

    if edition != 1 {
        return Err(Grib1Error::UnsupportedEdition(edition));
    }

    Ok(Indicator {
        magic: [data[0], data[1], data[2], data[3]],
        message_length,
        edition,
    })
}

/// Parse Section 1 (Product Definition) starting at `offset`.
///
/// Layout relative to the section start:
/// - Bytes 0-2: Section length, 3-byte big-endian
/// - Byte 3: Parameter table version
/// - Byte 4: Originating centre
/// - Byte 5: Generating process id
/// - Byte 6: Grid identification
/// - Byte 7: Section flags (0x80 = GDS present, 0x40 = BMS present)
/// - Byte 8: Parameter indicator (table 2)
/// - Byte 9: Level type indicator (table 3)
/// - Bytes 10-11: Level value, 2-byte big-endian
/// - Bytes 12-16: Reference time: year-of-century, month, day, hour, minute
///
/// Returns the record and the offset of the next section. The cursor always
/// advances by the declared section length; trailing bytes beyond the named
/// fields (sub-centre, time range, averaging counts) are skipped.
pub fn parse_product_definition(
    data: &[u8],
    offset: usize,
) -> Grib1Result<(ProductDefinition, usize)> {
    let section = data
        .get(offset..)
        .filter(|s| s.len() >= 3)
        .ok_or(Grib1Error::TruncatedData("product definition"))?;

    let length = u32::from_be_bytes([0, section[0], section[1], section[2]]) as usize;
    if length < 17 || section.len() < length {
        return Err(Grib1Error::TruncatedData("product definition"));
    }

    let flags = section[7];

    // Two-digit year with the conventional 50/100 century pivot. This is a
    // genuine source-format ambiguity near the pivot; the pivot itself must
    // not change.
    let year_of_century = section[12] as i32;
    let year = if year_of_century >= 50 {
        1900 + year_of_century
    } else {
        2000 + year_of_century
    };
    let month = section[13] as u32;
    let day = section[14] as u32;
    let hour = section[15] as u32;
    let minute = section[16] as u32;

    let reference_time = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(|| {
            Grib1Error::InvalidTimestamp(format!(
                "{}-{:02}-{:02} {:02}:{:02}",
                year, month, day, hour, minute
            ))
        })?;
    let reference_time = DateTime::<Utc>::from_naive_utc_and_offset(reference_time, Utc);

    Ok((
        ProductDefinition {
            table_version: section[3],
            center: section[4],
            generating_process: section[5],
            grid_id: section[6],
            has_gds: flags & 0x80 != 0,
            has_bms: flags & 0x40 != 0,
            parameter_code: section[8],
            level_type: section[9],
            level_value: u16::from_be_bytes([section[10], section[11]]),
            reference_time,
        },
        offset + length,
    ))
}

/// Parse Section 2 (Grid Definition) starting at `offset`.
///
/// Layout relative to the section start (lat/lon grids):
/// - Bytes 0-2: Section length, 3-byte big-endian
/// - Byte 3: NV, number of vertical coordinate parameters (skipped)
/// - Byte 4: PV, octet of vertical parameter list (skipped)
/// - Byte 5: Data representation type (table 6)
/// - Bytes 6-7: Ni, points along a parallel
/// - Bytes 8-9: Nj, points along a meridian
/// - Bytes 10-12: La1, latitude of first grid point (sign-magnitude millidegrees)
/// - Bytes 13-15: Lo1, longitude of first grid point
/// - Byte 16: Resolution and component flags (skipped)
/// - Bytes 17-19: La2, latitude of last grid point
/// - Bytes 20-22: Lo2, longitude of last grid point
/// - Bytes 23-24: Di, i-direction increment (unsigned millidegrees)
/// - Bytes 25-26: Dj, j-direction increment
/// - Byte 27: Scanning mode flags (table 8)
///
/// Any representation type is accepted and recorded here; rejection happens
/// later only where a grid genuinely cannot be used.
pub fn parse_grid_description(data: &[u8], offset: usize) -> Grib1Result<(GridDescription, usize)> {
    let section = data
        .get(offset..)
        .filter(|s| s.len() >= 3)
        .ok_or(Grib1Error::TruncatedData("grid definition"))?;

    let length = u32::from_be_bytes([0, section[0], section[1], section[2]]) as usize;
    if length < 28 || section.len() < length {
        return Err(Grib1Error::TruncatedData("grid definition"));
    }

    Ok((
        GridDescription {
            representation: section[5],
            ni: u16::from_be_bytes([section[6], section[7]]),
            nj: u16::from_be_bytes([section[8], section[9]]),
            lat1: decode_signed_3(&section[10..13]) as f64 / 1000.0,
            lon1: decode_signed_3(&section[13..16]) as f64 / 1000.0,
            lat2: decode_signed_3(&section[17..20]) as f64 / 1000.0,
            lon2: decode_signed_3(&section[20..23]) as f64 / 1000.0,
            di: u16::from_be_bytes([section[23], section[24]]) as f64 / 1000.0,
            dj: u16::from_be_bytes([section[25], section[26]]) as f64 / 1000.0,
            scanning_mode: section[27],
        },
        offset + length,
    ))
}

/// Parse Section 4 (Binary Data) starting at `offset`.
///
/// Layout relative to the section start:
/// - Bytes 0-2: Section length, 3-byte big-endian
/// - Byte 3: Flag (0x80 = spherical harmonics, 0x40 = complex packing,
///   neither is supported)
/// - Bytes 4-5: Binary scale factor E (sign-magnitude over 15 bits)
/// - Bytes 6-9: Reference value R, IEEE-754 single precision big-endian
/// - Byte 10: Bits per packed value
/// - Bytes 11..length: Packed bitstream
pub fn parse_binary_data(data: &[u8], offset: usize) -> Grib1Result<(BinaryData, usize)> {
    let section = data
        .get(offset..)
        .filter(|s| s.len() >= 3)
        .ok_or(Grib1Error::TruncatedData("binary data"))?;

    let length = u32::from_be_bytes([0, section[0], section[1], section[2]]) as usize;
    if length < 11 || section.len() < length {
        return Err(Grib1Error::TruncatedData("binary data"));
    }

    let flag = section[3];
    if flag & 0x80 != 0 {
        return Err(Grib1Error::Unsupported(
            "spherical harmonic coefficients".to_string(),
        ));
    }
    if flag & 0x40 != 0 {
        return Err(Grib1Error::Unsupported(
            "complex/second-order packing".to_string(),
        ));
    }

    let binary_scale_factor = decode_signed_2(&section[4..6]);
    let reference_value = f32::from_be_bytes([section[6], section[7], section[8], section[9]]);
    let bits_per_value = section[10];

    Ok((
        BinaryData {
            flag,
            binary_scale_factor,
            reference_value,
            bits_per_value,
            data: Bytes::copy_from_slice(&section[11..length]),
        },
        offset + length,
    ))
}

// ===== Scalar codecs =====

/// Decode a 3-byte sign-magnitude integer (MSB = sign, 23-bit magnitude).
///
/// GRIB1 coordinates use sign-magnitude, not two's complement: 0x800001
/// decodes to -1, and negative zero decodes to 0. Slices of the wrong
/// length decode to 0.
pub fn decode_signed_3(bytes: &[u8]) -> i32 {
    if bytes.len() != 3 {
        return 0;
    }
    let magnitude = (((bytes[0] & 0x7F) as i32) << 16) | ((bytes[1] as i32) << 8) | bytes[2] as i32;
    if bytes[0] & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Decode a 2-byte sign-magnitude integer (MSB = sign, 15-bit magnitude).
///
/// Used for the BDS binary scale factor.
pub fn decode_signed_2(bytes: &[u8]) -> i32 {
    if bytes.len() != 2 {
        return 0;
    }
    let magnitude = (((bytes[0] & 0x7F) as i32) << 8) | bytes[1] as i32;
    if bytes[0] & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    }
}
