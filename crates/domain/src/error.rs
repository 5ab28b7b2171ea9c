// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Workflow status string is not one of the four valid states.
    InvalidWorkflowStatus(String),
    /// Record kind string is not MAINTENANCE or CONTROL.
    InvalidRecordKind(String),
    /// Maintenance reason string is not recognized.
    InvalidMaintenanceReason(String),
    /// Control result string is not recognized.
    InvalidControlResult(String),
    /// Location type string is not recognized.
    InvalidLocationType(String),
    /// Device kind string is not recognized.
    InvalidDeviceKind(String),
    /// Device status string is not recognized.
    InvalidDeviceStatus(String),
    /// Audit action string is not recognized.
    InvalidAuditAction(String),
    /// Performer fields do not describe exactly one performing party.
    InvalidPerformer(String),
    /// Device serial number is empty or invalid.
    InvalidSerialNumber(String),
    /// Coordinates fall outside the national bounding box.
    CoordinatesOutOfBounds {
        /// The rejected latitude.
        latitude: f64,
        /// The rejected longitude.
        longitude: f64,
    },
    /// A reject transition was attempted without a reason.
    MissingRejectReason,
    /// A name field is empty.
    EmptyName {
        /// The entity whose name was empty.
        entity: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidWorkflowStatus(s) => write!(f, "Invalid workflow status: {s}"),
            Self::InvalidRecordKind(s) => write!(f, "Invalid record kind: {s}"),
            Self::InvalidMaintenanceReason(s) => write!(f, "Invalid maintenance reason: {s}"),
            Self::InvalidControlResult(s) => write!(f, "Invalid control result: {s}"),
            Self::InvalidLocationType(s) => write!(f, "Invalid location type: {s}"),
            Self::InvalidDeviceKind(s) => write!(f, "Invalid device kind: {s}"),
            Self::InvalidDeviceStatus(s) => write!(f, "Invalid device status: {s}"),
            Self::InvalidAuditAction(s) => write!(f, "Invalid audit action: {s}"),
            Self::InvalidPerformer(msg) => write!(f, "Invalid performer: {msg}"),
            Self::InvalidSerialNumber(msg) => write!(f, "Invalid serial number: {msg}"),
            Self::CoordinatesOutOfBounds {
                latitude,
                longitude,
            } => {
                write!(
                    f,
                    "Coordinates ({latitude}, {longitude}) fall outside the national bounding box"
                )
            }
            Self::MissingRejectReason => {
                write!(f, "A rejection requires a non-empty reason")
            }
            Self::EmptyName { entity } => write!(f, "{entity} name must not be empty"),
        }
    }
}

impl std::error::Error for DomainError {}
