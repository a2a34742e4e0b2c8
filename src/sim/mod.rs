//! Listening to a blade: a probe sits at a fixed radius while the blade spins
//! past it, and every sample records whether the probe is over an open slot.
//! The result is an ideal square wave, no filtering or anti-aliasing.
use num_traits::ToPrimitive;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{Configuration, SlotGroup};
use crate::layout::{layout, AngularInterval};
use crate::util::RonFile;

/// # RotationModel
///
/// How fast the blade turns and how it is sampled. Defaults match the fan
/// harp rig: 600 rpm, 44 kHz, half a second per ring, full 16-bit swing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RotationModel {
    pub rpm: f64,
    pub sampling_rate_hz: f64,
    pub duration_per_group_seconds: f64,
    pub amplitude: i32,
}

impl Default for RotationModel {
    fn default() -> Self {
        Self {
            rpm: 600.0,
            sampling_rate_hz: 44000.0,
            duration_per_group_seconds: 0.5,
            amplitude: 32767,
        }
    }
}

impl RonFile for RotationModel {}

impl RotationModel {
    pub fn degrees_per_sample(&self) -> f64 {
        360.0 * (self.rpm / 60.0) / self.sampling_rate_hz
    }

    /// Length of every per-ring segment. Nonsense durations give zero.
    pub fn samples_per_group(&self) -> usize {
        (self.sampling_rate_hz * self.duration_per_group_seconds)
            .round()
            .to_usize()
            .unwrap_or(0)
    }

    /// `+0.5 * amplitude`, truncated toward zero.
    pub fn present_level(&self) -> i16 {
        self.level(0.5)
    }

    /// `-0.5 * amplitude`, truncated toward zero.
    pub fn absent_level(&self) -> i16 {
        self.level(-0.5)
    }

    fn level(&self, fraction: f64) -> i16 {
        // `as` truncates toward zero and saturates at the i16 bounds.
        (fraction * f64::from(self.amplitude)) as i16
    }
}

/// # sample
///
/// Sample `samples` points of the probe at `radius`. Sample `s` looks at
/// angle `(s * degrees_per_sample) mod 360`. It is present if any group
/// whose band contains the radius has an interval containing that angle,
/// checked in declaration order with the first hit winning; otherwise it is
/// absent.
pub fn sample(
    groups: &[(SlotGroup, Vec<AngularInterval>)],
    radius: f64,
    samples: usize,
    model: &RotationModel,
) -> Vec<i16> {
    let degrees_per_sample = model.degrees_per_sample();
    let present = model.present_level();
    let absent = model.absent_level();
    let under_probe: Vec<&[AngularInterval]> = groups
        .iter()
        .filter(|(group, _)| group.contains_radius(radius))
        .map(|(_, intervals)| intervals.as_slice())
        .collect();

    (0..samples)
        .map(|s| {
            let current_angle = (s as f64 * degrees_per_sample).rem_euclid(360.0);
            let hit = under_probe
                .iter()
                .find(|intervals| intervals.iter().any(|i| i.contains(current_angle)));
            match hit {
                Some(_) => present,
                None => absent,
            }
        })
        .collect()
}

/// A mono signal made of one fixed-length segment per slot group.
#[derive(Debug, Clone, PartialEq)]
pub struct PresenceSignal {
    pub sampling_rate_hz: f64,
    pub segment_len: usize,
    pub samples: Vec<i16>,
}

impl PresenceSignal {
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sampling_rate_hz
    }

    /// One slice per slot group, declaration order.
    pub fn segments(&self) -> impl Iterator<Item = &[i16]> {
        self.samples.chunks(self.segment_len.max(1))
    }
}

/// # simulate
///
/// Listen to every slot group on its own, with the probe at the middle of the
/// group's band, for `duration_per_group_seconds` each, and join the clips in
/// declaration order. Every group gets the same length regardless of how
/// many turns that covers. Degenerate groups come out as silence (all absent).
///
/// Groups are sampled in parallel; the output order doesn't depend on it.
pub fn simulate(config: &Configuration, model: &RotationModel) -> PresenceSignal {
    let samples = model.samples_per_group();
    let segments: Vec<Vec<i16>> = config
        .slot_groups()
        .par_iter()
        .enumerate()
        .map(|(index, group)| {
            for diagnostic in group.diagnose() {
                tracing::warn!(group = index, %diagnostic, "simulating odd slot group");
            }
            let laid_out = [(*group, layout(group))];
            let segment = sample(&laid_out, group.mid_radius(), samples, model);
            tracing::debug!(
                group = index,
                radius = group.mid_radius(),
                slots = laid_out[0].1.len(),
                samples = segment.len(),
                "sampled slot group"
            );
            segment
        })
        .collect();

    PresenceSignal {
        sampling_rate_hz: model.sampling_rate_hz,
        segment_len: samples,
        samples: segments.concat(),
    }
}
