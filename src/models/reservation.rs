//! Reservation model and related types.
//!
//! This module defines the Reservation struct together with the
//! ReservationStatus and OccupantClass enums. Reservations are created and
//! transitioned by the booking system; the engine only reads them.

use serde::{Deserialize, Serialize};

use super::DateRange;

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Submitted but not yet approved. Does not block the slip.
    Pending,
    /// Approved. Blocks the slip for its date range.
    Confirmed,
    /// Cancelled. Does not block the slip.
    Cancelled,
}

/// The category of party occupying a slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupantClass {
    /// A paying guest charged the nightly rate.
    Renter,
    /// The owner of the slip's property.
    Homeowner,
    /// Marina administrator.
    Admin,
    /// Platform administrator.
    Superadmin,
}

impl OccupantClass {
    /// Returns true for classes that are never charged for a stay.
    ///
    /// ```
    /// use dock_booking_engine::models::OccupantClass;
    ///
    /// assert!(!OccupantClass::Renter.is_fee_exempt());
    /// assert!(OccupantClass::Homeowner.is_fee_exempt());
    /// ```
    pub fn is_fee_exempt(self) -> bool {
        !matches!(self, OccupantClass::Renter)
    }

    /// The wire name of the class, as used in audit records.
    pub fn as_str(self) -> &'static str {
        match self {
            OccupantClass::Renter => "renter",
            OccupantClass::Homeowner => "homeowner",
            OccupantClass::Admin => "admin",
            OccupantClass::Superadmin => "superadmin",
        }
    }
}

impl std::fmt::Display for OccupantClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An existing booking of a slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Identifier assigned by the booking system.
    pub id: String,
    /// The slip this reservation occupies.
    pub slip_id: String,
    /// The nights the slip is held.
    pub range: DateRange,
    /// Current lifecycle state.
    pub status: ReservationStatus,
    /// Who is occupying the slip.
    pub occupant_class: OccupantClass,
}

impl Reservation {
    /// Returns true if this reservation holds its slip for its date range.
    pub fn blocks_availability(&self) -> bool {
        self.status == ReservationStatus::Confirmed
    }
}
