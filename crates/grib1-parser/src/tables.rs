//! GRIB1 parameter and level lookup tables.
//!
//! Numeric codes are the authoritative keys; names and units are derived
//! from the WMO standard tables (parameter table 2, level table 3) as used
//! by the international exchange version. Unknown codes fall back to a
//! formatted placeholder rather than an error.

/// Parameter indicator for the U-component of wind (table 2).
pub const PARAM_WIND_U: u8 = 33;
/// Parameter indicator for the V-component of wind (table 2).
pub const PARAM_WIND_V: u8 = 34;

/// Look up (abbreviation, name, unit) for a table-2 parameter indicator.
pub fn parameter_info(code: u8) -> (String, String, String) {
    let (abbrev, name, unit) = match code {
        1 => ("PRES", "Pressure", "Pa"),
        2 => ("PRMSL", "Pressure reduced to MSL", "Pa"),
        3 => ("PTEND", "Pressure tendency", "Pa/s"),
        6 => ("GP", "Geopotential", "m2/s2"),
        7 => ("HGT", "Geopotential height", "gpm"),
        8 => ("DIST", "Geometric height", "m"),
        11 => ("TMP", "Temperature", "K"),
        12 => ("VTMP", "Virtual temperature", "K"),
        13 => ("POT", "Potential temperature", "K"),
        15 => ("TMAX", "Maximum temperature", "K"),
        16 => ("TMIN", "Minimum temperature", "K"),
        17 => ("DPT", "Dew point temperature", "K"),
        31 => ("WDIR", "Wind direction", "deg"),
        32 => ("WIND", "Wind speed", "m/s"),
        33 => ("UGRD", "U-component of wind", "m/s"),
        34 => ("VGRD", "V-component of wind", "m/s"),
        39 => ("VVEL", "Vertical velocity (pressure)", "Pa/s"),
        40 => ("DZDT", "Vertical velocity (geometric)", "m/s"),
        41 => ("ABSV", "Absolute vorticity", "1/s"),
        51 => ("SPFH", "Specific humidity", "kg/kg"),
        52 => ("RH", "Relative humidity", "%"),
        54 => ("PWAT", "Precipitable water", "kg/m2"),
        59 => ("PRATE", "Precipitation rate", "kg/m2/s"),
        61 => ("APCP", "Total precipitation", "kg/m2"),
        63 => ("ACPCP", "Convective precipitation", "kg/m2"),
        65 => ("WEASD", "Water equivalent of snow depth", "kg/m2"),
        66 => ("SNOD", "Snow depth", "m"),
        71 => ("TCDC", "Total cloud cover", "%"),
        73 => ("LCDC", "Low cloud cover", "%"),
        74 => ("MCDC", "Medium cloud cover", "%"),
        75 => ("HCDC", "High cloud cover", "%"),
        81 => ("LAND", "Land cover", "fraction"),
        91 => ("ICEC", "Ice cover", "fraction"),
        // Ocean wave parameters, common in marine GRIB1 products
        100 => ("HTSGW", "Significant height of combined wind waves and swell", "m"),
        101 => ("WVDIR", "Direction of wind waves", "deg"),
        102 => ("WVHGT", "Significant height of wind waves", "m"),
        103 => ("WVPER", "Mean period of wind waves", "s"),
        104 => ("SWDIR", "Direction of swell waves", "deg"),
        105 => ("SWELL", "Significant height of swell waves", "m"),
        106 => ("SWPER", "Mean period of swell waves", "s"),
        107 => ("DIRPW", "Primary wave direction", "deg"),
        108 => ("PERPW", "Primary wave mean period", "s"),
        _ => {
            return (
                format!("P{}", code),
                format!("Parameter {}", code),
                String::new(),
            )
        }
    };
    (abbrev.to_string(), name.to_string(), unit.to_string())
}

/// Look up the description for a table-3 level type indicator.
///
/// The numeric level value's meaning depends on the type and stays opaque
/// to the decoder; only the type name is resolved here.
pub fn level_name(level_type: u8) -> String {
    match level_type {
        1 => "surface".to_string(),
        2 => "cloud base".to_string(),
        3 => "cloud top".to_string(),
        4 => "0C isotherm".to_string(),
        6 => "maximum wind level".to_string(),
        7 => "tropopause".to_string(),
        8 => "nominal top of atmosphere".to_string(),
        100 => "isobaric level".to_string(),
        101 => "layer between two isobaric levels".to_string(),
        102 => "mean sea level".to_string(),
        103 => "height above mean sea level".to_string(),
        105 => "height above ground".to_string(),
        107 => "sigma level".to_string(),
        109 => "hybrid level".to_string(),
        111 => "depth below land surface".to_string(),
        113 => "isentropic level".to_string(),
        200 => "entire atmosphere".to_string(),
        201 => "entire ocean".to_string(),
        _ => format!("level type {}", level_type),
    }
}

/// Whether a level type expresses a height above ground in metres.
pub fn level_is_height_above_ground(level_type: u8) -> bool {
    level_type == 105
}
