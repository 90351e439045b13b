//! Great-circle travel estimates for map display.
//!
//! Distances come from the `geo` crate's Haversine measure. Walk and drive
//! times are coarse editorial estimates (12 min/km on foot, 2 min/km by
//! car) shown only where they make sense: walking under 2 km, driving from
//! 1 km.

use geo::{Coord, Distance, Haversine, Point};

const METRES_PER_KM: f64 = 1000.0;
const WALK_MINUTES_PER_KM: f64 = 12.0;
const DRIVE_MINUTES_PER_KM: f64 = 2.0;
/// Walking times are only shown below this distance.
const WALK_LIMIT_KM: f64 = 2.0;
/// Driving times are only shown from this distance.
const DRIVE_FLOOR_KM: f64 = 1.0;

/// Distance between two points with display-ready travel times.
///
/// # Examples
/// ```
/// use coveside_core::TravelEstimate;
///
/// let estimate = TravelEstimate::from_km(0.85);
/// assert_eq!(estimate.display(), "850m");
/// assert_eq!(estimate.walk_minutes, Some(10));
/// assert_eq!(estimate.drive_minutes, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelEstimate {
    /// Great-circle distance in kilometres.
    pub km: f64,
    /// Estimated walking time in minutes, for short distances.
    pub walk_minutes: Option<u32>,
    /// Estimated driving time in minutes, for longer distances.
    pub drive_minutes: Option<u32>,
}

impl TravelEstimate {
    /// Estimate travel between two WGS84 coordinates.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use coveside_core::TravelEstimate;
    ///
    /// let town = Coord { x: 149.7587, y: -37.5578 };
    /// let estimate = TravelEstimate::between(town, town);
    /// assert_eq!(estimate.km, 0.0);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "haversine output converts metres to kilometres"
    )]
    pub fn between(origin: Coord<f64>, destination: Coord<f64>) -> Self {
        let metres = Haversine.distance(Point::from(origin), Point::from(destination));
        Self::from_km(metres / METRES_PER_KM)
    }

    /// Build an estimate from a known distance in kilometres.
    ///
    /// Negative input is treated as zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "travel times round small non-negative distances to whole minutes"
    )]
    pub fn from_km(km: f64) -> Self {
        let km = km.max(0.0);
        let walk_minutes = (km < WALK_LIMIT_KM).then(|| (km * WALK_MINUTES_PER_KM).round() as u32);
        let drive_minutes =
            (km >= DRIVE_FLOOR_KM).then(|| (km * DRIVE_MINUTES_PER_KM).round() as u32);
        Self {
            km,
            walk_minutes,
            drive_minutes,
        }
    }

    /// Format the distance for display: metres under 1 km, otherwise
    /// kilometres with one decimal.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "display rounds a non-negative distance to coarse units"
    )]
    pub fn display(&self) -> String {
        if self.km < 1.0 {
            format!("{}m", (self.km * METRES_PER_KM).round() as u32)
        } else {
            format!("{:.1}km", self.km)
        }
    }
}
