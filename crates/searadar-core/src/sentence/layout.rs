//! Sentence framing constants and per-type field layouts.
//!
//! Field indices count from the type code, which sits at index 0.

/// Talker/sentence-class prefix length (e.g. `$RA`), discarded on extraction.
pub const PREFIX_LEN: usize = 3;
pub const CHECKSUM_DELIMITER: char = '*';
pub const FIELD_SEPARATOR: char = ',';

pub const TTM: &str = "TTM";
pub const RSD: &str = "RSD";
pub const VHW: &str = "VHW";

/// Tracked target message field positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtmLayout {
    pub target_number: usize,
    pub distance: usize,
    pub bearing: usize,
    pub speed: usize,
    pub course: usize,
    pub iff: usize,
    pub status: usize,
}

impl TtmLayout {
    pub fn max_index(&self) -> usize {
        max_of(&[
            self.target_number,
            self.distance,
            self.bearing,
            self.speed,
            self.course,
            self.iff,
            self.status,
        ])
    }
}

pub const TTM_LAYOUT: TtmLayout = TtmLayout {
    target_number: 1,
    distance: 2,
    bearing: 3,
    speed: 5,
    course: 6,
    iff: 11,
    status: 12,
};

/// Radar system data field positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsdLayout {
    pub initial_distance: usize,
    pub initial_bearing: usize,
    pub moving_circle_of_distance: usize,
    pub bearing: usize,
    pub distance_from_ship: usize,
    pub bearing2: usize,
    pub distance_scale: usize,
    pub distance_unit: usize,
    pub display_orientation: usize,
    pub working_mode: usize,
}

impl RsdLayout {
    pub fn max_index(&self) -> usize {
        max_of(&[
            self.initial_distance,
            self.initial_bearing,
            self.moving_circle_of_distance,
            self.bearing,
            self.distance_from_ship,
            self.bearing2,
            self.distance_scale,
            self.distance_unit,
            self.display_orientation,
            self.working_mode,
        ])
    }
}

pub const RSD_LAYOUT: RsdLayout = RsdLayout {
    initial_distance: 1,
    initial_bearing: 2,
    moving_circle_of_distance: 3,
    bearing: 4,
    distance_from_ship: 9,
    bearing2: 10,
    distance_scale: 11,
    distance_unit: 12,
    display_orientation: 13,
    working_mode: 14,
};

/// Water speed and heading field positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VhwLayout {
    pub course: usize,
    pub course_attr: usize,
    pub speed: usize,
    pub speed_unit: usize,
}

impl VhwLayout {
    pub fn max_index(&self) -> usize {
        max_of(&[self.course, self.course_attr, self.speed, self.speed_unit])
    }
}

pub const VHW_LAYOUT: VhwLayout = VhwLayout {
    course: 1,
    course_attr: 2,
    speed: 5,
    speed_unit: 6,
};

fn max_of(indices: &[usize]) -> usize {
    indices.iter().copied().max().unwrap_or(0)
}
