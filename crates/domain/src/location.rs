// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::validate_coordinates;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The observation network a site belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LocationType {
    /// Surface weather observation station.
    #[default]
    Weather,
    /// Hydrological gauging station.
    Hydro,
    /// Automatic weather station.
    Aws,
    /// Weather radar site.
    Radar,
    /// Upper-air (aerological) sounding station.
    Aerology,
    /// Agro-meteorological station.
    Agro,
    /// Calibration reference (etalon) site.
    Etalon,
    /// Anything else.
    Other,
}

impl LocationType {
    /// Converts this location type to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weather => "WEATHER",
            Self::Hydro => "HYDRO",
            Self::Aws => "AWS",
            Self::Radar => "RADAR",
            Self::Aerology => "AEROLOGY",
            Self::Agro => "AGRO",
            Self::Etalon => "ETALON",
            Self::Other => "OTHER",
        }
    }
}

impl FromStr for LocationType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WEATHER" => Ok(Self::Weather),
            "HYDRO" => Ok(Self::Hydro),
            "AWS" => Ok(Self::Aws),
            "RADAR" => Ok(Self::Radar),
            "AEROLOGY" => Ok(Self::Aerology),
            "AGRO" => Ok(Self::Agro),
            "ETALON" => Ok(Self::Etalon),
            "OTHER" => Ok(Self::Other),
            _ => Err(DomainError::InvalidLocationType(s.to_string())),
        }
    }
}

impl std::fmt::Display for LocationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A physical measurement site.
///
/// Locations anchor devices to the administrative hierarchy: the owning
/// aimag drives visibility scoping, the optional sub-region drives
/// district-level scoping inside the capital. An AWS may carry a link to
/// the nearest staffed weather station via `parent_location_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// The canonical numeric identifier assigned by the database.
    pub location_id: Option<i64>,
    /// The site name.
    pub name: String,
    /// The observation network this site belongs to.
    pub location_type: LocationType,
    /// The owning region.
    pub aimag_id: i64,
    /// The owning sub-region (optional).
    pub sum_id: Option<i64>,
    /// Latitude in decimal degrees, if surveyed.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees, if surveyed.
    pub longitude: Option<f64>,
    /// Optional link to a parent site (e.g., an AWS's nearest weather station).
    pub parent_location_id: Option<i64>,
}

impl Location {
    /// Creates a new `Location` without a persisted ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the coordinates, when both
    /// present, fall outside the national bounding box.
    pub fn new(
        name: &str,
        location_type: LocationType,
        aimag_id: i64,
        sum_id: Option<i64>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName { entity: "Location" });
        }
        if let (Some(lat), Some(lon)) = (latitude, longitude) {
            validate_coordinates(lat, lon)?;
        }
        Ok(Self {
            location_id: None,
            name: name.to_string(),
            location_type,
            aimag_id,
            sum_id,
            latitude,
            longitude,
            parent_location_id: None,
        })
    }
}
