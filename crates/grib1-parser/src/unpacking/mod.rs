//! GRIB1 data unpacking.
//!
//! Simple packing only: each grid point is an unsigned integer of
//! `bits_per_value` bits, MSB-first and big-endian, packed back to back
//! with no byte alignment between values.

use crate::{Grib1Error, Grib1Result};

/// Unpack simple-packed GRIB1 data.
///
/// Reconstruction formula: `value = reference + packed * 2^binary_scale`.
/// A `bits_per_value` of 0 (or above 32) encodes a constant field where
/// every grid point takes the reference value.
pub fn unpack_simple(
    packed_data: &[u8],
    num_points: usize,
    bits_per_value: u8,
    reference_value: f32,
    binary_scale_factor: i32,
) -> Grib1Result<Vec<f32>> {
    if bits_per_value == 0 || bits_per_value > 32 {
        return Ok(vec![reference_value; num_points]);
    }

    let binary_scale = 2.0_f32.powi(binary_scale_factor);
    let bits_per_value = bits_per_value as usize;

    let mut values = Vec::with_capacity(num_points);
    for i in 0..num_points {
        let packed = extract_bits(packed_data, i * bits_per_value, bits_per_value)
            .map_err(Grib1Error::UnpackingError)?;
        values.push(reference_value + packed as f32 * binary_scale);
    }

    Ok(values)
}

/// Extract `num_bits` (1-32) starting at `start_bit` from a byte buffer.
///
/// Reads a 5-byte (40-bit) window into a u64 accumulator, then shifts and
/// masks to isolate the requested span. The window always covers a 32-bit
/// field at any bit offset within a byte, and no unaligned-load shortcuts
/// are involved, so the arithmetic is portable and auditable.
pub fn extract_bits(data: &[u8], start_bit: usize, num_bits: usize) -> Result<u32, String> {
    if num_bits == 0 || num_bits > 32 {
        return Err(format!("Invalid number of bits: {}", num_bits));
    }

    let first_byte = start_bit / 8;
    let bit_in_byte = start_bit % 8;

    if first_byte + (bit_in_byte + num_bits).div_ceil(8) > data.len() {
        return Err("Not enough data to extract bits".to_string());
    }

    let mut window = 0u64;
    for i in 0..5 {
        window <<= 8;
        if let Some(&byte) = data.get(first_byte + i) {
            window |= byte as u64;
        }
    }

    let shift = 40 - bit_in_byte - num_bits;
    let mask = if num_bits == 32 {
        u32::MAX as u64
    } else {
        (1u64 << num_bits) - 1
    };

    Ok(((window >> shift) & mask) as u32)
}
