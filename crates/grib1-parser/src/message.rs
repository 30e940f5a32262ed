//! Decoded message records.
//!
//! Everything here is a plain immutable value: each parse call produces an
//! independent, self-contained result set with no shared ownership, so
//! decoded records are safe to move across threads and compare directly.

use chrono::{DateTime, Utc};
use grib_common::Bounds;
use serde::{Deserialize, Serialize};

use crate::sections::GridDescription;
use crate::tables;
use crate::{Grib1Error, Grib1Result};

/// A meteorological parameter: code is the authoritative key, the
/// abbreviation, name and unit are derived from the standard tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub code: u8,
    pub abbrev: String,
    pub name: String,
    pub unit: String,
}

impl Parameter {
    pub fn from_code(code: u8) -> Self {
        let (abbrev, name, unit) = tables::parameter_info(code);
        Self {
            code,
            abbrev,
            name,
            unit,
        }
    }
}

/// A vertical level. The meaning of `value` depends on `type_code` and is
/// opaque to the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub type_code: u8,
    pub name: String,
    pub value: u16,
}

impl Level {
    pub fn new(type_code: u8, value: u16) -> Self {
        Self {
            type_code,
            name: tables::level_name(type_code),
            value,
        }
    }

    /// Height above ground in metres, when the level type expresses one.
    pub fn height_above_ground(&self) -> Option<f64> {
        tables::level_is_height_above_ground(self.type_code).then_some(self.value as f64)
    }
}

/// A regular lat/lon grid.
///
/// `bounds` is normalized for display and spatial queries; `lat1`/`lon1`
/// keep the raw first corner and `scanning_mode` the raw direction flags,
/// which geolocation depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub ni: usize,
    pub nj: usize,
    pub bounds: Bounds,
    pub lat1: f64,
    pub lon1: f64,
    pub di: f64,
    pub dj: f64,
    pub scanning_mode: u8,
    pub representation: u8,
}

impl Grid {
    /// Build the public grid record from the raw section form.
    ///
    /// Dimensions of 0 or the 0xFFFF quasi-regular sentinel mark a grid this
    /// decoder cannot use.
    pub fn from_description(desc: &GridDescription) -> Grib1Result<Self> {
        if desc.ni == 0 || desc.nj == 0 || desc.ni == u16::MAX || desc.nj == u16::MAX {
            return Err(Grib1Error::UnsupportedGridType(desc.representation));
        }

        Ok(Self {
            ni: desc.ni as usize,
            nj: desc.nj as usize,
            bounds: Bounds::from_corners(desc.lat1, desc.lon1, desc.lat2, desc.lon2),
            lat1: desc.lat1,
            lon1: desc.lon1,
            di: desc.di,
            dj: desc.dj,
            scanning_mode: desc.scanning_mode,
            representation: desc.representation,
        })
    }

    /// Total number of grid points.
    pub fn total_points(&self) -> usize {
        self.ni * self.nj
    }

    /// Map a linear grid index to (latitude, longitude) in degrees.
    ///
    /// Values are packed row-major: `index = j * ni + i`. The scanning mode
    /// flags give the traversal direction: bit 0x80 clear means i runs
    /// west to east, bit 0x40 clear means j runs north to south (row 0 is
    /// the northernmost row). The arithmetic starts from the raw first
    /// corner, never from the normalized bounds.
    pub fn coordinate(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.total_points() {
            return None;
        }

        let i = (index % self.ni) as f64;
        let j = (index / self.ni) as f64;

        let lon = if self.scanning_mode & 0x80 == 0 {
            self.lon1 + i * self.di
        } else {
            self.lon1 - i * self.di
        };
        let lat = if self.scanning_mode & 0x40 == 0 {
            self.lat1 - j * self.dj
        } else {
            self.lat1 + j * self.dj
        };

        Some((lat, lon))
    }
}

/// One decoded GRIB1 message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// 1-based position of this message within the scanned buffer.
    pub sequence: usize,
    /// Declared total byte length from the indicator section.
    pub byte_length: usize,
    pub parameter: Parameter,
    pub level: Level,
    pub reference_time: DateTime<Utc>,
    /// Absent when the product definition carries no grid description.
    pub grid: Option<Grid>,
    /// One value per grid point, row-major; empty when `grid` is absent.
    pub values: Vec<f32>,
}

impl Message {
    /// Value plus its geographic location, for one grid point.
    pub fn value_at(&self, index: usize) -> Option<(f64, f64, f32)> {
        let grid = self.grid.as_ref()?;
        let (lat, lon) = grid.coordinate(index)?;
        Some((lat, lon, *self.values.get(index)?))
    }
}
