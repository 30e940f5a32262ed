//! GRIB1 decoder (WMO FM 92 GRIB Edition 1).
//!
//! Decodes sectioned, bit-packed GRIB Edition 1 files into typed message
//! records: section-by-section byte-layout parsing, arbitrary-bit-width
//! value unpacking, sign-magnitude scalar decoding and grid geolocation.
//!
//! Supported scope is simple packing on regular lat/lon grids. GRIB2,
//! complex packing, bitmap sections and projected grids are rejected
//! explicitly rather than silently approximated.

pub mod error;
pub mod message;
pub mod reader;
pub mod sections;
pub mod tables;
pub mod unpacking;

pub use error::{Grib1Error, Grib1Result};
pub use message::{Grid, Level, Message, Parameter};
pub use reader::{parse_file, Grib1Reader};
