//! Synthetic GRIB1 message builder for integration tests.
//!
//! Builds byte-exact edition 1 messages (IS + PDS + optional GDS + BDS +
//! "7777") so the reader can be exercised without binary fixtures.
#![allow(dead_code)]

/// Grid description for a synthetic message.
#[derive(Clone)]
pub struct TestGrid {
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

impl TestGrid {
    /// 3x2 grid over the Australian east coast, west-to-east north-to-south.
    pub fn small() -> Self {
        Self {
            ni: 3,
            nj: 2,
            lat1: -31.0,
            lon1: 145.0,
            lat2: -31.5,
            lon2: 146.0,
            di: 0.5,
            dj: 0.5,
            scanning_mode: 0,
        }
    }
}

/// Builder for one synthetic GRIB1 message.
#[derive(Clone)]
pub struct TestMessage {
    pub edition: u8,
    pub parameter: u8,
    pub level_type: u8,
    pub level_value: u16,
    /// (year-of-century, month, day, hour, minute)
    pub time: (u8, u8, u8, u8, u8),
    pub grid: Option<TestGrid>,
    pub bitmap_flag: bool,
    pub bds_flag: u8,
    pub reference_value: f32,
    pub binary_scale_factor: i32,
    pub bits_per_value: u8,
    pub raw_values: Vec<u32>,
}

impl TestMessage {
    pub fn new(parameter: u8) -> Self {
        Self {
            edition: 1,
            parameter,
            level_type: 105,
            level_value: 10,
            time: (26, 2, 1, 6, 0),
            grid: Some(TestGrid::small()),
            bitmap_flag: false,
            bds_flag: 0,
            reference_value: 0.0,
            binary_scale_factor: 0,
            bits_per_value: 8,
            raw_values: vec![0; 6],
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let pds = self.build_pds();
        let gds = self.grid.as_ref().map(|g| build_gds(g)).unwrap_or_default();
        let bds = self.build_bds();

        let total = 8 + pds.len() + gds.len() + bds.len() + 4;
        let mut message = Vec::with_capacity(total);
        message.extend_from_slice(b"GRIB");
        message.extend_from_slice(&encode_length_3(total));
        message.push(self.edition);
        message.extend_from_slice(&pds);
        message.extend_from_slice(&gds);
        message.extend_from_slice(&bds);
        message.extend_from_slice(b"7777");
        message
    }

    fn build_pds(&self) -> Vec<u8> {
        let mut flags = 0u8;
        if self.grid.is_some() {
            flags |= 0x80;
        }
        if self.bitmap_flag {
            flags |= 0x40;
        }

        let mut pds = Vec::with_capacity(28);
        pds.extend_from_slice(&encode_length_3(28));
        pds.push(2); // parameter table version
        pds.push(7); // originating centre
        pds.push(96); // generating process
        pds.push(255); // grid id: described by GDS
        pds.push(flags);
        pds.push(self.parameter);
        pds.push(self.level_type);
        pds.extend_from_slice(&self.level_value.to_be_bytes());
        let (yy, mm, dd, hh, min) = self.time;
        pds.extend_from_slice(&[yy, mm, dd, hh, min]);
        pds.resize(28, 0); // sub-centre, time range etc. unread by the decoder
        pds
    }

    fn build_bds(&self) -> Vec<u8> {
        let packed = pack_bits(&self.raw_values, self.bits_per_value as usize);
        let mut bds = Vec::with_capacity(11 + packed.len());
        bds.extend_from_slice(&encode_length_3(11 + packed.len()));
        bds.push(self.bds_flag);
        bds.extend_from_slice(&encode_signed_2(self.binary_scale_factor));
        bds.extend_from_slice(&self.reference_value.to_be_bytes());
        bds.push(self.bits_per_value);
        bds.extend_from_slice(&packed);
        bds
    }
}

fn build_gds(grid: &TestGrid) -> Vec<u8> {
    let mut gds = Vec::with_capacity(32);
    gds.extend_from_slice(&encode_length_3(32));
    gds.push(0); // NV
    gds.push(255); // PV: none
    gds.push(0); // representation: lat/lon
    gds.extend_from_slice(&grid.ni.to_be_bytes());
    gds.extend_from_slice(&grid.nj.to_be_bytes());
    gds.extend_from_slice(&encode_signed_3((grid.lat1 * 1000.0).round() as i32));
    gds.extend_from_slice(&encode_signed_3((grid.lon1 * 1000.0).round() as i32));
    gds.push(0x80); // resolution and component flags: increments given
    gds.extend_from_slice(&encode_signed_3((grid.lat2 * 1000.0).round() as i32));
    gds.extend_from_slice(&encode_signed_3((grid.lon2 * 1000.0).round() as i32));
    gds.extend_from_slice(&(((grid.di * 1000.0).round() as u16).to_be_bytes()));
    gds.extend_from_slice(&(((grid.dj * 1000.0).round() as u16).to_be_bytes()));
    gds.push(grid.scanning_mode);
    gds.resize(32, 0);
    gds
}

/// Encode a 3-byte big-endian length field.
pub fn encode_length_3(value: usize) -> [u8; 3] {
    let bytes = (value as u32).to_be_bytes();
    [bytes[1], bytes[2], bytes[3]]
}

/// Encode a 3-byte sign-magnitude integer (MSB = sign).
pub fn encode_signed_3(value: i32) -> [u8; 3] {
    let magnitude = value.unsigned_abs();
    let mut bytes = encode_length_3(magnitude as usize);
    if value < 0 {
        bytes[0] |= 0x80;
    }
    bytes
}

/// Encode a 2-byte sign-magnitude integer (MSB = sign).
pub fn encode_signed_2(value: i32) -> [u8; 2] {
    let magnitude = value.unsigned_abs() as u16;
    let mut bytes = magnitude.to_be_bytes();
    if value < 0 {
        bytes[0] |= 0x80;
    }
    bytes
}

/// Pack unsigned values at `width` bits each, MSB-first, back to back.
pub fn pack_bits(values: &[u32], width: usize) -> Vec<u8> {
    if width == 0 {
        return Vec::new();
    }
    let mut packed = vec![0u8; (values.len() * width).div_ceil(8)];
    for (i, &value) in values.iter().enumerate() {
        for bit in 0..width {
            if value >> (width - 1 - bit) & 1 == 1 {
                let absolute = i * width + bit;
                packed[absolute / 8] |= 1 << (7 - absolute % 8);
            }
        }
    }
    packed
}
