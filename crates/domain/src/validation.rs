// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Latitude bounds for stations inside Mongolia, degrees.
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = 41.5..=52.2;

/// Longitude bounds for stations inside Mongolia, degrees.
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = 87.7..=119.95;

/// Validates that station coordinates fall inside the national bounding box.
///
/// # Errors
///
/// Returns [`DomainError::CoordinatesOutOfBounds`] when either coordinate
/// is outside the box.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), DomainError> {
    if LATITUDE_RANGE.contains(&latitude) && LONGITUDE_RANGE.contains(&longitude) {
        Ok(())
    } else {
        Err(DomainError::CoordinatesOutOfBounds {
            latitude,
            longitude,
        })
    }
}

/// Validates a reject reason: required and non-blank.
///
/// # Errors
///
/// Returns [`DomainError::MissingRejectReason`] when the reason is
/// missing or whitespace-only.
pub fn validate_reject_reason(reason: Option<&str>) -> Result<(), DomainError> {
    match reason {
        Some(r) if !r.trim().is_empty() => Ok(()),
        _ => Err(DomainError::MissingRejectReason),
    }
}

/// Validates a device serial number: non-blank, printable, at most 64 bytes.
///
/// # Errors
///
/// Returns [`DomainError::InvalidSerialNumber`] when the serial is blank,
/// over-long, or contains control characters.
pub fn validate_serial_number(serial: &str) -> Result<(), DomainError> {
    let trimmed = serial.trim();
    if trimmed.is_empty() || trimmed.len() > 64 || trimmed.chars().any(char::is_control) {
        return Err(DomainError::InvalidSerialNumber(serial.to_string()));
    }
    Ok(())
}
