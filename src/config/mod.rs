//! The blade configuration model: two boundary circles plus an ordered list of
//! slot groups, and the tolerant line grammar that produces it. See
//! [`parse`] for the grammar.
use std::convert::Infallible;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::errors::GroupDiagnostic;

mod parse;

pub use parse::{parse, parse_line, parse_with_diagnostics, Directive, SkippedLine};

/// # SlotGroup
///
/// One `sector` line: a radial band cut into `count` equal repetitions around
/// the circle, each of which is open for `ratio` of its span.
///
/// Nothing here is validated. An inverted band or a ratio above one is carried
/// through to the geometry and the signal as-is; use [`SlotGroup::diagnose`]
/// if you want to complain about it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SlotGroup {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub count: f64,
    pub ratio: f64,
}

impl SlotGroup {
    pub fn new(inner_radius: f64, outer_radius: f64, count: f64, ratio: f64) -> SlotGroup {
        SlotGroup {
            inner_radius,
            outer_radius,
            count,
            ratio,
        }
    }

    /// Whole repetitions actually laid out. The fractional part of `count`
    /// is dropped, and anything below one, infinite or NaN is zero.
    pub fn repetitions(&self) -> usize {
        if self.count.is_finite() && self.count >= 1.0 {
            // Float-to-int `as` saturates, so absurd counts can't wrap.
            self.count.floor() as usize
        } else {
            0
        }
    }

    /// Radius halfway across the band. The simulator listens here.
    pub fn mid_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }

    /// Closed band test, both edges included.
    pub fn contains_radius(&self, radius: f64) -> bool {
        self.inner_radius <= radius && radius <= self.outer_radius
    }

    /// Everything odd about this group. An empty list means the group lays
    /// out into disjoint, in-range wedges.
    pub fn diagnose(&self) -> Vec<GroupDiagnostic> {
        let mut found = vec![];
        if self.repetitions() == 0 {
            found.push(GroupDiagnostic::DegenerateGroup { count: self.count });
        }
        if !(0.0..=1.0).contains(&self.ratio) {
            found.push(GroupDiagnostic::RatioOutOfRange { ratio: self.ratio });
        }
        if !(self.inner_radius < self.outer_radius) {
            found.push(GroupDiagnostic::InvertedBand {
                inner_radius: self.inner_radius,
                outer_radius: self.outer_radius,
            });
        }
        found
    }
}

/// # Configuration
///
/// What a blade file describes. Built once by [`parse`] and then only read;
/// there are no setters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Configuration {
    inner_circle_radius: f64,
    outer_circle_radius: f64,
    slot_groups: Vec<SlotGroup>,
}

impl Configuration {
    pub fn new(
        inner_circle_radius: f64,
        outer_circle_radius: f64,
        slot_groups: Vec<SlotGroup>,
    ) -> Configuration {
        Configuration {
            inner_circle_radius,
            outer_circle_radius,
            slot_groups,
        }
    }

    pub fn inner_circle_radius(&self) -> f64 {
        self.inner_circle_radius
    }

    pub fn outer_circle_radius(&self) -> f64 {
        self.outer_circle_radius
    }

    /// Slot groups in declaration order.
    pub fn slot_groups(&self) -> &[SlotGroup] {
        &self.slot_groups
    }

    /// Largest radius anything in the blade reaches: the outer circle or the
    /// furthest band edge, whichever is bigger. Zero for an empty blade.
    pub fn max_radius(&self) -> f64 {
        self.slot_groups
            .iter()
            .map(|group| group.outer_radius)
            .fold(self.outer_circle_radius.max(0.0), f64::max)
    }

    /// Read and parse a blade file. Only I/O can fail; malformed lines are
    /// skipped exactly as in [`parse`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Configuration> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read blade configuration {}", path.display()))?;
        Ok(parse(&text))
    }
}

impl FromStr for Configuration {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(parse(s))
    }
}
