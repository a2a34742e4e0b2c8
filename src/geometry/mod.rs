//! Turns laid-out slots into outlines: annular wedges for the open slots and
//! the two boundary rings.
use geo_types::{coord, Coord};
use serde::{Deserialize, Serialize};

use crate::util::RonFile;

/// Circles and polar helpers.
pub mod shapes;

/// Single wedge outlines, chord or true arc.
pub mod wedge;

/// Affine placement of finished drawings.
pub mod matrix;

/// Whole-blade projection and page fitting.
pub mod blade;

pub use blade::{project_blade, BladeDrawing, Canvas, WedgeSet};
pub use shapes::{circle, RingPrimitive};
pub use wedge::{annular_wedge, project, BoundaryStyle, ClosedPath};

/// Knobs for [`project_blade`]. Missing fields in a RON file take the
/// defaults: origin center, chord boundaries, 100-gon rings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ProjectionOptions {
    pub center: Coord<f64>,
    pub boundary: BoundaryStyle,
    /// Vertices used whenever a ring has to become a polygon.
    pub ring_vertices: usize,
    /// Max deviation when arcs are flattened to lines.
    pub arc_tolerance: f64,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            center: coord! {x: 0.0, y: 0.0},
            boundary: BoundaryStyle::Chord,
            ring_vertices: 100,
            arc_tolerance: 0.01,
        }
    }
}

impl RonFile for ProjectionOptions {}
