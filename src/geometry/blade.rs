use geo::BoundingRect;
use geo_types::{coord, Coord, MultiLineString, Rect};
use nalgebra::Affine2;
use serde::{Deserialize, Serialize};

use super::matrix::{flip_y_matrix, translate_matrix, TransformGeometry};
use super::shapes::{circle, RingPrimitive};
use super::wedge::{project, ClosedPath};
use super::ProjectionOptions;
use crate::config::{Configuration, SlotGroup};
use crate::layout::layout;

/// The outlines cut for one slot group.
#[derive(Debug, Clone)]
pub struct WedgeSet {
    pub group: SlotGroup,
    pub paths: Vec<ClosedPath>,
}

/// # BladeDrawing
///
/// Everything needed to draw a blade: both boundary rings and every slot
/// outline, groups in declaration order.
#[derive(Debug, Clone)]
pub struct BladeDrawing {
    pub inner_ring: RingPrimitive,
    pub outer_ring: RingPrimitive,
    pub groups: Vec<WedgeSet>,
    options: ProjectionOptions,
}

/// Project a whole configuration. Groups without a whole repetition draw
/// nothing but still get an (empty) entry, so indexes line up with
/// [`Configuration::slot_groups`].
pub fn project_blade(config: &Configuration, options: &ProjectionOptions) -> BladeDrawing {
    let center = options.center;
    let groups = config
        .slot_groups()
        .iter()
        .map(|group| WedgeSet {
            group: *group,
            paths: project(group, &layout(group), center, options.boundary),
        })
        .collect();
    BladeDrawing {
        inner_ring: circle(center, config.inner_circle_radius()),
        outer_ring: circle(center, config.outer_circle_radius()),
        groups,
        options: options.clone(),
    }
}

impl BladeDrawing {
    pub fn options(&self) -> &ProjectionOptions {
        &self.options
    }

    pub fn wedges(&self) -> impl Iterator<Item = &ClosedPath> {
        self.groups.iter().flat_map(|set| set.paths.iter())
    }

    /// Plotter lines: the two rings as `ring_vertices`-gons, then every wedge
    /// flattened to `arc_tolerance`.
    pub fn to_multi_line_string(&self) -> MultiLineString<f64> {
        let vertices = self.options.ring_vertices;
        let mut lines = MultiLineString::new(vec![
            self.inner_ring.to_polygon(vertices).exterior().clone(),
            self.outer_ring.to_polygon(vertices).exterior().clone(),
        ]);
        lines.0.extend(
            self.wedges()
                .map(|path| path.to_polygon(self.options.arc_tolerance).exterior().clone()),
        );
        lines
    }

    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.to_multi_line_string().bounding_rect()
    }
}

/// # Canvas
///
/// A square page big enough for the blade plus a margin, with the blade's
/// center in the middle.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub size: f64,
    pub center: Coord<f64>,
}

impl Canvas {
    /// Margin, in drawing units (mm), the SVG drawings always had.
    pub const DEFAULT_MARGIN: f64 = 20.0;

    pub fn fit(config: &Configuration, margin: f64) -> Canvas {
        let size = config.max_radius() * 2.0 + margin;
        Canvas {
            size,
            center: coord! {x: size / 2.0, y: size / 2.0},
        }
    }

    /// Move a drawing made around `origin` onto this canvas. With
    /// `y_down` the result is mirrored for page formats whose y axis
    /// points down.
    pub fn placement(&self, origin: Coord<f64>, y_down: bool) -> Affine2<f64> {
        let shift = translate_matrix(self.center.x - origin.x, self.center.y - origin.y);
        if y_down {
            flip_y_matrix(self.size) * shift
        } else {
            shift
        }
    }

    pub fn place(&self, drawing: &BladeDrawing, y_down: bool) -> MultiLineString<f64> {
        drawing
            .to_multi_line_string()
            .transformed(&self.placement(drawing.options.center, y_down))
    }
}
