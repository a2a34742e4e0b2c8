//! Expands a slot group into the open angular intervals around the circle.
use serde::{Deserialize, Serialize};

use crate::config::SlotGroup;

/// Slack for the end-of-circle check. `i * (360 / count) + slot` can land a
/// few ulps past 360 for a slot that really ends on it.
const FULL_TURN_SLACK: f64 = 1e-9;

/// One open slot, in degrees, counter-clockwise from the positive x axis.
/// Only [`layout`] makes these.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AngularInterval {
    start_degrees: f64,
    end_degrees: f64,
}

impl AngularInterval {
    pub fn start_degrees(&self) -> f64 {
        self.start_degrees
    }

    pub fn end_degrees(&self) -> f64 {
        self.end_degrees
    }

    pub fn span_degrees(&self) -> f64 {
        self.end_degrees - self.start_degrees
    }

    /// Half open: the start edge is inside, the end edge is not.
    pub fn contains(&self, degrees: f64) -> bool {
        self.start_degrees <= degrees && degrees < self.end_degrees
    }
}

/// # layout
///
/// Cut a group into `floor(count)` repetitions of `360 / count` degrees and
/// open the first `ratio` of each one.
///
/// The repetition angle comes from the un-floored count, so a fractional count
/// leaves a gap at the end of the circle rather than drawing a partial slot:
/// `count = 4.5` gives four 80° repetitions and 40° of nothing. Groups with
/// fewer than one whole repetition (zero, negative, infinite or NaN counts)
/// give no intervals at all.
///
/// Slots ending beyond 360° are dropped. That only happens for `ratio > 1`;
/// such groups still come out overlapping, since the ratio isn't clamped.
/// A slot ending within rounding error of 360° is kept and ends at 360.
///
/// ```rust
/// use fan_harp_blade::config::SlotGroup;
/// use fan_harp_blade::layout::layout;
///
/// let slots = layout(&SlotGroup::new(5.0, 10.0, 4.5, 0.2));
/// assert_eq!(slots.len(), 4);
/// assert_eq!(slots[1].start_degrees(), 80.0);
/// ```
pub fn layout(group: &SlotGroup) -> Vec<AngularInterval> {
    let repetitions = group.repetitions();
    if repetitions == 0 {
        return vec![];
    }
    let total_angle = 360.0 / group.count;
    let slot_angle = total_angle * group.ratio;

    (0..repetitions)
        .map(|i| {
            let start_degrees = i as f64 * total_angle;
            AngularInterval {
                start_degrees,
                end_degrees: start_degrees + slot_angle,
            }
        })
        .filter(|interval| interval.end_degrees <= 360.0 + FULL_TURN_SLACK)
        .map(|interval| AngularInterval {
            end_degrees: interval.end_degrees.min(360.0),
            ..interval
        })
        .collect()
}
