//! Post-decode domain checks.
//!
//! A failed check is not an error: it becomes an `InvalidMessage` that
//! replaces the decoded message in the converter output.

use crate::message::{InvalidMessage, StationMessage};

/// Legal RSD distance scales.
pub const DISTANCE_SCALES: [f64; 10] = [0.125, 0.25, 0.5, 1.5, 3.0, 6.0, 12.0, 24.0, 48.0, 96.0];

pub trait Validator: Send + Sync {
    /// Returns a diagnostic when `message` violates this check.
    fn validate(&self, message: &StationMessage) -> Option<InvalidMessage>;
}

/// Rejects radar system data whose distance scale is not in the legal set.
///
/// Membership is exact; no tolerance is applied.
///
/// # Examples
/// ```
/// use searadar_core::DistanceScaleValidator;
///
/// let validator = DistanceScaleValidator::default();
/// assert!(validator.is_legal(48.0));
/// assert!(!validator.is_legal(48.0001));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceScaleValidator {
    legal: Vec<f64>,
}

impl DistanceScaleValidator {
    pub fn new(legal: impl Into<Vec<f64>>) -> Self {
        Self {
            legal: legal.into(),
        }
    }

    pub fn is_legal(&self, scale: f64) -> bool {
        self.legal.contains(&scale)
    }
}

impl Default for DistanceScaleValidator {
    fn default() -> Self {
        Self::new(DISTANCE_SCALES)
    }
}

impl Validator for DistanceScaleValidator {
    fn validate(&self, message: &StationMessage) -> Option<InvalidMessage> {
        let StationMessage::RadarSystemData(data) = message else {
            return None;
        };
        if self.is_legal(data.distance_scale) {
            return None;
        }
        Some(InvalidMessage::new(format!(
            "RSD message. Wrong distance scale value: {:?}",
            data.distance_scale
        )))
    }
}

/// Run `validators` in order; the first diagnostic wins.
pub fn run_validators(
    validators: &[std::sync::Arc<dyn Validator>],
    message: &StationMessage,
) -> Option<InvalidMessage> {
    validators
        .iter()
        .find_map(|validator| validator.validate(message))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use time::OffsetDateTime;

    use super::*;
    use crate::message::{InvalidMessage, RadarSystemData, WaterSpeedHeading};

    fn rsd(scale: f64) -> StationMessage {
        StationMessage::RadarSystemData(RadarSystemData {
            initial_distance: 50.5,
            initial_bearing: 309.9,
            moving_circle_of_distance: 64.8,
            bearing: 132.3,
            distance_from_ship: 52.6,
            bearing2: 155.0,
            distance_scale: scale,
            distance_unit: "K".to_string(),
            display_orientation: "N".to_string(),
            working_mode: "S".to_string(),
            received_at: OffsetDateTime::UNIX_EPOCH,
        })
    }

    struct Reject(&'static str);

    impl Validator for Reject {
        fn validate(&self, _message: &StationMessage) -> Option<InvalidMessage> {
            Some(InvalidMessage::new(self.0))
        }
    }

    #[test]
    fn legal_scales_pass() {
        let validator = DistanceScaleValidator::default();
        for scale in DISTANCE_SCALES {
            assert_eq!(validator.validate(&rsd(scale)), None, "{scale}");
        }
    }

    #[test]
    fn illegal_scale_names_value() {
        let validator = DistanceScaleValidator::default();
        let invalid = validator.validate(&rsd(999.0)).expect("diagnostic");
        assert_eq!(invalid.info, "RSD message. Wrong distance scale value: 999.0");

        let invalid = validator.validate(&rsd(0.3)).expect("diagnostic");
        assert!(invalid.info.contains("0.3"));
    }

    #[test]
    fn other_messages_pass() {
        let message = StationMessage::WaterSpeedHeading(WaterSpeedHeading {
            course: 1.0,
            course_attr: "T".to_string(),
            speed: 1.0,
            speed_unit: "N".to_string(),
            received_at: OffsetDateTime::UNIX_EPOCH,
        });
        assert_eq!(DistanceScaleValidator::default().validate(&message), None);
    }

    #[test]
    fn custom_scale_table() {
        let validator = DistanceScaleValidator::new(vec![2.0]);
        assert_eq!(validator.validate(&rsd(2.0)), None);
        assert!(validator.validate(&rsd(48.0)).is_some());
    }

    #[test]
    fn first_failure_short_circuits() {
        let validators: Vec<Arc<dyn Validator>> = vec![
            Arc::new(DistanceScaleValidator::default()),
            Arc::new(Reject("first")),
            Arc::new(Reject("second")),
        ];
        let invalid = run_validators(&validators, &rsd(48.0)).expect("diagnostic");
        assert_eq!(invalid.info, "first");
        assert_eq!(run_validators(&[], &rsd(999.0)), None);
    }
}
