//! Environmental design loads - wind and seismic parameters
//!
//! Two independent pure functions over the code tables. Both are total:
//! unknown locations resolve to the documented fallback constants and are
//! logged, never raised.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::tables::CodeTables;

/// Seismic zone ordinal per IS 1893
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeismicZone {
    Ii,
    Iii,
    Iv,
    V,
}

impl SeismicZone {
    /// Zone factor Z per IS 1893 Table 2
    pub fn factor(&self) -> f64 {
        match self {
            SeismicZone::Ii => 0.10,
            SeismicZone::Iii => 0.16,
            SeismicZone::Iv => 0.24,
            SeismicZone::V => 0.36,
        }
    }

    /// Roman-numeral label
    pub fn label(&self) -> &'static str {
        match self {
            SeismicZone::Ii => "II",
            SeismicZone::Iii => "III",
            SeismicZone::Iv => "IV",
            SeismicZone::V => "V",
        }
    }
}

/// Full wind design parameter set, inputs and outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindLoad {
    /// Location the lookup was made for
    pub location: String,
    /// Reference height in m
    pub height: f64,
    /// Basic wind speed Vb from the city table, m/s
    pub basic_speed: f64,
    /// Terrain category factor
    pub k_terrain: f64,
    /// Topography factor
    pub k_topography: f64,
    /// Height factor
    pub k_height: f64,
    /// Importance factor
    pub k_importance: f64,
    /// Design wind speed Vz = Vb x terrain x topography x height x importance, m/s
    pub design_speed: f64,
    /// Design wind pressure pz = 0.6 * Vz², N/m²
    pub design_pressure: f64,
}

/// Full seismic design parameter set, inputs and outputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeismicLoad {
    /// Location the lookup was made for
    pub location: String,
    /// Seismic zone from the city table
    pub zone: SeismicZone,
    /// Zone factor Z
    pub zone_factor: f64,
    /// Importance factor I
    pub importance: f64,
    /// Response reduction factor R
    pub response_reduction: f64,
    /// Spectral acceleration coefficient Sa/g for the assumed soil
    pub spectral_accel: f64,
    /// Design horizontal seismic coefficient Ah = (Z/2)(I/R)(Sa/g)
    pub design_coefficient: f64,
}

/// Compute the wind design parameters for a location and reference height
///
/// The k-factors default to 1.0, a documented simplification of the IS 875-3
/// chain; a faithful model would vary the height factor with the terrain
/// category and reference height.
pub fn wind_load(tables: &CodeTables, location: &str, height: f64) -> WindLoad {
    let basic_speed = match tables.wind_speed_for(location) {
        Some(speed) => speed,
        None => {
            warn!(
                "No basic wind speed for '{}'; using default {} m/s",
                location, tables.default_wind_speed
            );
            tables.default_wind_speed
        }
    };

    let k_terrain = 1.0;
    let k_topography = 1.0;
    let k_height = 1.0;
    let k_importance = 1.0;

    let design_speed = basic_speed * k_terrain * k_topography * k_height * k_importance;
    let design_pressure = 0.6 * design_speed * design_speed;

    WindLoad {
        location: location.to_string(),
        height,
        basic_speed,
        k_terrain,
        k_topography,
        k_height,
        k_importance,
        design_speed,
        design_pressure,
    }
}

/// Compute the seismic design parameters for a location
pub fn seismic_load(tables: &CodeTables, location: &str) -> SeismicLoad {
    let zone = match tables.zone_for(location) {
        Some(zone) => zone,
        None => {
            warn!(
                "No seismic zone for '{}'; using default zone {}",
                location,
                tables.default_seismic_zone.label()
            );
            tables.default_seismic_zone
        }
    };

    let zone_factor = zone.factor();
    let importance = tables.importance_factor;
    let response_reduction = tables.response_reduction;
    let spectral_accel = tables.spectral_accel;

    let design_coefficient =
        (zone_factor / 2.0) * (importance / response_reduction) * spectral_accel;

    SeismicLoad {
        location: location.to_string(),
        zone,
        zone_factor,
        importance,
        response_reduction,
        spectral_accel,
        design_coefficient,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_city_wind() {
        let tables = CodeTables::default();
        let wind = wind_load(&tables, "Delhi", 12.0);
        assert_eq!(wind.basic_speed, 47.0);
        assert_eq!(wind.k_height, 1.0);
        assert_eq!(wind.k_terrain, 1.0);
        assert_relative_eq!(wind.design_speed, 47.0, epsilon = 1e-12);
        assert_relative_eq!(wind.design_pressure, 0.6 * 47.0 * 47.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_city_wind_falls_back() {
        let tables = CodeTables::default();
        let wind = wind_load(&tables, "Atlantis", 10.0);
        assert_eq!(wind.basic_speed, tables.default_wind_speed);
        assert_eq!(wind.location, "Atlantis");
    }

    #[test]
    fn test_seismic_coefficient_delhi() {
        let tables = CodeTables::default();
        let seismic = seismic_load(&tables, "Delhi");
        assert_eq!(seismic.zone, SeismicZone::Iv);
        // Ah = (0.24/2) * (1.0/5.0) * 2.5
        assert_relative_eq!(seismic.design_coefficient, 0.06, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_city_seismic_falls_back() {
        let tables = CodeTables::default();
        let seismic = seismic_load(&tables, "Atlantis");
        assert_eq!(seismic.zone, tables.default_seismic_zone);
        assert_relative_eq!(seismic.design_coefficient, 0.04, epsilon = 1e-12);
    }

    #[test]
    fn test_zone_factors() {
        assert_eq!(SeismicZone::Ii.factor(), 0.10);
        assert_eq!(SeismicZone::V.factor(), 0.36);
        assert!(SeismicZone::Ii < SeismicZone::V);
    }
}
