//! Wind vector derivation from decoded GRIB1 messages.
//!
//! Pairs U- and V-component messages that share a reference timestamp and
//! grid, and computes per-point speed and meteorological direction (the
//! direction the wind is coming FROM, 0 = north, clockwise).

use chrono::{DateTime, Utc};
use grib1_parser::tables::{PARAM_WIND_U, PARAM_WIND_V};
use grib1_parser::Message;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

/// Errors from wind vector derivation.
#[derive(Debug, Error)]
pub enum WindError {
    #[error("No timestamp has both U and V wind component messages")]
    MissingComponent,

    #[error("U and V component messages do not share a grid")]
    GridMismatch,

    #[error("Stride must be at least 1")]
    InvalidStride,
}

/// One derived wind sample. Produced fresh per query; has no lifecycle of
/// its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindDataPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Wind speed in the component unit (m/s for GRIB1 table 2).
    pub speed: f64,
    /// Meteorological direction in degrees, [0, 360).
    pub direction: f64,
    pub timestamp: DateTime<Utc>,
    /// Height above ground in metres, when the level expresses one.
    pub altitude: Option<f64>,
}

/// Combines decoded U/V component messages into wind vectors.
#[derive(Debug, Clone)]
pub struct WindCombiner {
    pub u_code: u8,
    pub v_code: u8,
}

impl Default for WindCombiner {
    fn default() -> Self {
        Self {
            u_code: PARAM_WIND_U,
            v_code: PARAM_WIND_V,
        }
    }
}

impl WindCombiner {
    /// Derive wind vectors from a decoded message set.
    ///
    /// Messages are grouped by reference timestamp; within each group the
    /// first U and first V message are paired. Grid points are sampled at
    /// `stride` (1 = every point). Timestamps missing one component are
    /// skipped; it is an error only if no timestamp yields a pair.
    pub fn derive(
        &self,
        messages: &[Message],
        stride: usize,
    ) -> Result<Vec<WindDataPoint>, WindError> {
        if stride == 0 {
            return Err(WindError::InvalidStride);
        }

        let mut groups: BTreeMap<DateTime<Utc>, (Option<&Message>, Option<&Message>)> =
            BTreeMap::new();
        for message in messages {
            let entry = groups.entry(message.reference_time).or_default();
            if message.parameter.code == self.u_code && entry.0.is_none() {
                entry.0 = Some(message);
            } else if message.parameter.code == self.v_code && entry.1.is_none() {
                entry.1 = Some(message);
            }
        }

        let mut points = Vec::new();
        let mut paired = false;

        for (timestamp, pair) in groups {
            let (Some(u_msg), Some(v_msg)) = pair else {
                debug!(%timestamp, "Skipping timestamp without a full U/V pair");
                continue;
            };
            paired = true;

            let grid = match (&u_msg.grid, &v_msg.grid) {
                (Some(u_grid), Some(v_grid)) if u_grid == v_grid => u_grid,
                _ => return Err(WindError::GridMismatch),
            };

            let altitude = u_msg.level.height_above_ground();

            for index in (0..grid.total_points()).step_by(stride) {
                let (Some(&u), Some(&v)) = (u_msg.values.get(index), v_msg.values.get(index))
                else {
                    continue;
                };
                let Some((latitude, longitude)) = grid.coordinate(index) else {
                    continue;
                };

                let (speed, direction) = speed_and_direction(u as f64, v as f64);
                points.push(WindDataPoint {
                    latitude,
                    longitude,
                    speed,
                    direction,
                    timestamp,
                    altitude,
                });
            }
        }

        if !paired {
            return Err(WindError::MissingComponent);
        }

        Ok(points)
    }
}

/// Compute speed and meteorological direction from U/V components.
///
/// `direction = (270 - atan2(v, u) in degrees) mod 360`, the direction the
/// wind blows FROM. A zero vector yields speed 0 and direction 0 by
/// convention, not an error.
pub fn speed_and_direction(u: f64, v: f64) -> (f64, f64) {
    let speed = (u * u + v * v).sqrt();
    if speed == 0.0 {
        return (0.0, 0.0);
    }
    let direction = (270.0 - v.atan2(u).to_degrees()).rem_euclid(360.0);
    (speed, direction)
}
