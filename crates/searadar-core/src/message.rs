//! Domain messages produced by the converter.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Output of one conversion: a decoded domain message or a diagnostic.
///
/// # Examples
/// ```
/// use searadar_core::{InvalidMessage, StationMessage};
///
/// let message = StationMessage::Invalid(InvalidMessage::new("bad scale"));
/// assert!(message.is_invalid());
/// assert_eq!(message.kind(), "invalid");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StationMessage {
    TrackedTarget(TrackedTarget),
    RadarSystemData(RadarSystemData),
    WaterSpeedHeading(WaterSpeedHeading),
    Invalid(InvalidMessage),
}

impl StationMessage {
    /// Stable, lowercase name of the variant (matches the serialized tag).
    pub fn kind(&self) -> &'static str {
        match self {
            StationMessage::TrackedTarget(_) => "tracked_target",
            StationMessage::RadarSystemData(_) => "radar_system_data",
            StationMessage::WaterSpeedHeading(_) => "water_speed_heading",
            StationMessage::Invalid(_) => "invalid",
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, StationMessage::Invalid(_))
    }
}

/// Target tracking report (TTM).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedTarget {
    pub target_number: i32,
    /// Distance to the target.
    pub distance: f64,
    /// Bearing to the target, degrees.
    pub bearing: f64,
    /// Target course, degrees.
    pub course: f64,
    pub speed: f64,
    pub status: TargetStatus,
    pub iff: Iff,
    pub target_type: TargetType,
    #[serde(with = "time::serde::rfc3339")]
    pub received_at: OffsetDateTime,
}

/// Radar system and display configuration (RSD).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSystemData {
    pub initial_distance: f64,
    pub initial_bearing: f64,
    pub moving_circle_of_distance: f64,
    pub bearing: f64,
    pub distance_from_ship: f64,
    pub bearing2: f64,
    /// Display range; legal values are listed in `validate::DISTANCE_SCALES`.
    pub distance_scale: f64,
    pub distance_unit: String,
    pub display_orientation: String,
    pub working_mode: String,
    #[serde(with = "time::serde::rfc3339")]
    pub received_at: OffsetDateTime,
}

/// Water speed and heading (VHW).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterSpeedHeading {
    pub course: f64,
    pub course_attr: String,
    pub speed: f64,
    pub speed_unit: String,
    #[serde(with = "time::serde::rfc3339")]
    pub received_at: OffsetDateTime,
}

/// Diagnostic emitted in place of a message that failed domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidMessage {
    pub info: String,
}

impl InvalidMessage {
    pub fn new(info: impl Into<String>) -> Self {
        Self { info: info.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetStatus {
    Lost,
    UnreliableData,
    Tracked,
}

/// Identification friend or foe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Iff {
    Friend,
    Foe,
    Unknown,
}

/// Target classification. Radar sentences carry no type, so decoding
/// always yields `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum TargetType {
    Unknown,
}
