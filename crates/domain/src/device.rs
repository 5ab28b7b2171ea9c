// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::validate_serial_number;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// The instrument category of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeviceKind {
    /// Surface weather instrument.
    #[default]
    Weather,
    /// Hydrological instrument.
    Hydro,
    /// Automatic weather station unit.
    Aws,
    /// Calibration reference (etalon) instrument.
    Etalon,
    /// Weather radar.
    Radar,
    /// Upper-air sounding equipment.
    Aerology,
    /// Agro-meteorological instrument.
    Agro,
    /// Anything else.
    Other,
}

impl DeviceKind {
    /// Converts this kind to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weather => "WEATHER",
            Self::Hydro => "HYDRO",
            Self::Aws => "AWS",
            Self::Etalon => "ETALON",
            Self::Radar => "RADAR",
            Self::Aerology => "AEROLOGY",
            Self::Agro => "AGRO",
            Self::Other => "OTHER",
        }
    }
}

impl FromStr for DeviceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "WEATHER" => Ok(Self::Weather),
            "HYDRO" => Ok(Self::Hydro),
            "AWS" => Ok(Self::Aws),
            "ETALON" => Ok(Self::Etalon),
            "RADAR" => Ok(Self::Radar),
            "AEROLOGY" => Ok(Self::Aerology),
            "AGRO" => Ok(Self::Agro),
            "OTHER" => Ok(Self::Other),
            _ => Err(DomainError::InvalidDeviceKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The operational status of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeviceStatus {
    /// In service.
    #[default]
    Active,
    /// Out of service due to a fault.
    Broken,
    /// Being repaired.
    Repair,
    /// Held as a spare.
    Spare,
    /// Withdrawn from service.
    Retired,
}

impl DeviceStatus {
    /// Converts this status to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Broken => "Broken",
            Self::Repair => "Repair",
            Self::Spare => "Spare",
            Self::Retired => "Retired",
        }
    }
}

impl FromStr for DeviceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Broken" => Ok(Self::Broken),
            "Repair" => Ok(Self::Repair),
            "Spare" => Ok(Self::Spare),
            "Retired" => Ok(Self::Retired),
            _ => Err(DomainError::InvalidDeviceStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A physical measurement instrument.
///
/// Devices are soft-scoped to a region through their location; a device
/// with no location is invisible to regional engineers (fail-closed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// The canonical numeric identifier assigned by the database.
    pub device_id: Option<i64>,
    /// The unique serial number.
    pub serial_number: String,
    /// The instrument category.
    pub kind: DeviceKind,
    /// The operational status.
    pub status: DeviceStatus,
    /// The date the device was installed, if known.
    pub installation_date: Option<Date>,
    /// Expected service life in years.
    pub lifespan_years: u32,
    /// The next verification/calibration due date, if scheduled.
    pub next_verification_date: Option<Date>,
    /// The site this device is installed at (optional).
    pub location_id: Option<i64>,
}

impl Device {
    /// Default expected service life in years.
    pub const DEFAULT_LIFESPAN_YEARS: u32 = 10;

    /// Creates a new `Device` without a persisted ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the serial number is empty.
    pub fn new(
        serial_number: &str,
        kind: DeviceKind,
        status: DeviceStatus,
        location_id: Option<i64>,
    ) -> Result<Self, DomainError> {
        validate_serial_number(serial_number)?;
        Ok(Self {
            device_id: None,
            serial_number: serial_number.to_string(),
            kind,
            status,
            installation_date: None,
            lifespan_years: Self::DEFAULT_LIFESPAN_YEARS,
            next_verification_date: None,
            location_id,
        })
    }
}
