//! Common geographic types shared across the GRIB decoder crates.

pub mod bounds;

pub use bounds::Bounds;
