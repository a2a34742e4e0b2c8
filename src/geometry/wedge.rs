use geo_types::{coord, Coord, LineString, Polygon};
use kurbo::{Arc, BezPath, PathEl, Point as BezPoint, Vec2};
use serde::{Deserialize, Serialize};

use super::shapes::polar;
use crate::config::SlotGroup;
use crate::layout::AngularInterval;

/// Accuracy used when kurbo turns a circular arc into cubic segments.
const ARC_APPROXIMATION: f64 = 1e-6;

/// How the curved sides of a wedge are drawn.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryStyle {
    /// Straight chords between the four corners (the DXF polyline form).
    #[default]
    Chord,
    /// Real circular arcs (the SVG path form).
    TrueArc,
}

/// # ClosedPath
///
/// The outline of one open slot: outer arc from start to end, radial edge in,
/// inner arc back from end to start, radial edge out. The variant says which
/// boundary style was used; for wide slots the two are not the same shape.
#[derive(Debug, Clone)]
pub enum ClosedPath {
    /// Four corners: outer start, outer end, inner end, inner start.
    ///
    /// A full-turn slot puts both outer corners on the same point, so the
    /// outline collapses to a line and its span reads back as zero. Use
    /// `TrueArc` when a group has a single fully open repetition.
    Chord(Polygon<f64>),
    TrueArc(BezPath),
}

fn bez(c: Coord<f64>) -> BezPoint {
    BezPoint::new(c.x, c.y)
}

fn degrees_from(center: Coord<f64>, x: f64, y: f64) -> f64 {
    (y - center.y).atan2(x - center.x).to_degrees()
}

/// Signed angle from `a` to `b`, folded into (-180, 180].
fn angle_step(a: f64, b: f64) -> f64 {
    let d = (b - a).rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

impl ClosedPath {
    pub fn style(&self) -> BoundaryStyle {
        match self {
            ClosedPath::Chord(_) => BoundaryStyle::Chord,
            ClosedPath::TrueArc(_) => BoundaryStyle::TrueArc,
        }
    }

    /// Flatten to a polygon. Chord outlines already are one; arcs are
    /// subdivided until they stay within `tolerance` of the true curve.
    pub fn to_polygon(&self, tolerance: f64) -> Polygon<f64> {
        match self {
            ClosedPath::Chord(poly) => poly.clone(),
            ClosedPath::TrueArc(path) => {
                let mut ring: Vec<Coord<f64>> = vec![];
                path.flatten(tolerance, |el| match el {
                    PathEl::MoveTo(p) | PathEl::LineTo(p) => ring.push(coord! {x: p.x, y: p.y}),
                    // ClosePath; Polygon::new closes the ring for us.
                    _ => (),
                });
                Polygon::new(LineString::new(ring), vec![])
            }
        }
    }

    pub fn to_bez_path(&self) -> BezPath {
        match self {
            ClosedPath::Chord(poly) => {
                let mut path = BezPath::new();
                let mut corners = poly.exterior().coords();
                if let Some(first) = corners.next() {
                    path.move_to(bez(*first));
                    for c in corners.take(poly.exterior().0.len().saturating_sub(2)) {
                        path.line_to(bez(*c));
                    }
                    path.close_path();
                }
                path
            }
            ClosedPath::TrueArc(path) => path.clone(),
        }
    }

    /// Angular span of the outer boundary, measured back off the shape.
    ///
    /// Chord outlines only keep the two corners, so they can't tell a full
    /// turn from no turn at all. Arc outlines are summed segment by segment
    /// and report the full 360.
    pub fn arc_span_degrees(&self, center: Coord<f64>) -> f64 {
        match self {
            ClosedPath::Chord(poly) => {
                let ring = &poly.exterior().0;
                if ring.len() < 2 {
                    return 0.0;
                }
                let a = degrees_from(center, ring[0].x, ring[0].y);
                let b = degrees_from(center, ring[1].x, ring[1].y);
                (b - a).rem_euclid(360.0)
            }
            ClosedPath::TrueArc(path) => {
                let mut previous: Option<f64> = None;
                let mut span = 0.0;
                for el in path.elements() {
                    match el {
                        PathEl::MoveTo(p) => previous = Some(degrees_from(center, p.x, p.y)),
                        PathEl::CurveTo(_, _, p) => {
                            let angle = degrees_from(center, p.x, p.y);
                            if let Some(prev) = previous {
                                span += angle_step(prev, angle);
                            }
                            previous = Some(angle);
                        }
                        // The first radial edge ends the outer arc.
                        _ => break,
                    }
                }
                span
            }
        }
    }
}

fn arc(center: Coord<f64>, radius: f64, start_degrees: f64, sweep_degrees: f64) -> Arc {
    Arc {
        center: bez(center),
        radii: Vec2::new(radius, radius),
        start_angle: start_degrees.to_radians(),
        sweep_angle: sweep_degrees.to_radians(),
        x_rotation: 0.0,
    }
}

/// Outline of a single interval between `inner_radius` and `outer_radius`.
pub fn annular_wedge(
    center: Coord<f64>,
    inner_radius: f64,
    outer_radius: f64,
    interval: &AngularInterval,
    style: BoundaryStyle,
) -> ClosedPath {
    let start = interval.start_degrees();
    let end = interval.end_degrees();
    let outer_start = polar(center, outer_radius, start);
    let inner_end = polar(center, inner_radius, end);
    match style {
        BoundaryStyle::Chord => ClosedPath::Chord(Polygon::new(
            LineString::new(vec![
                outer_start,
                polar(center, outer_radius, end),
                inner_end,
                polar(center, inner_radius, start),
            ]),
            vec![],
        )),
        BoundaryStyle::TrueArc => {
            let mut path = BezPath::new();
            path.move_to(bez(outer_start));
            for el in arc(center, outer_radius, start, end - start).append_iter(ARC_APPROXIMATION) {
                path.push(el);
            }
            path.line_to(bez(inner_end));
            for el in arc(center, inner_radius, end, start - end).append_iter(ARC_APPROXIMATION) {
                path.push(el);
            }
            path.close_path();
            ClosedPath::TrueArc(path)
        }
    }
}

/// One outline per interval, in interval order. Radii come from the group
/// unchecked, so an inverted band draws inside out.
pub fn project(
    group: &SlotGroup,
    intervals: &[AngularInterval],
    center: Coord<f64>,
    style: BoundaryStyle,
) -> Vec<ClosedPath> {
    intervals
        .iter()
        .map(|interval| {
            annular_wedge(center, group.inner_radius, group.outer_radius, interval, style)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::layout::layout;
    use geo::Area;

    const ORIGIN: Coord<f64> = coord! {x: 0.0, y: 0.0};

    #[test]
    fn test_chord_corners() {
        let group = SlotGroup::new(5.0, 10.0, 4.0, 0.5);
        let paths = project(&group, &layout(&group), ORIGIN, BoundaryStyle::Chord);
        assert_eq!(paths.len(), 4);
        let ClosedPath::Chord(poly) = &paths[0] else {
            panic!("expected a chord outline");
        };
        let corners = &poly.exterior().0;
        // four corners plus the closing repeat
        assert_eq!(corners.len(), 5);
        assert!((corners[0].x - 10.0).abs() < 1e-9 && corners[0].y.abs() < 1e-9);
        assert!((corners[1].x - 10.0 / 2f64.sqrt()).abs() < 1e-9);
        assert!((corners[2].y - 5.0 / 2f64.sqrt()).abs() < 1e-9);
        assert!((corners[3].x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_span_round_trip() {
        let group = SlotGroup::new(5.0, 10.0, 4.5, 0.2);
        let intervals = layout(&group);
        for style in [BoundaryStyle::Chord, BoundaryStyle::TrueArc] {
            let paths = project(&group, &intervals, ORIGIN, style);
            for (path, interval) in paths.iter().zip(intervals.iter()) {
                assert_eq!(path.style(), style);
                assert!((path.arc_span_degrees(ORIGIN) - interval.span_degrees()).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_true_arc_full_turn() {
        let group = SlotGroup::new(5.0, 10.0, 1.0, 1.0);
        let center = coord! {x: 3.0, y: -4.0};
        let paths = project(&group, &layout(&group), center, BoundaryStyle::TrueArc);
        assert_eq!(paths.len(), 1);
        assert!((paths[0].arc_span_degrees(center) - 360.0).abs() < 1e-6);
    }

    #[test]
    fn test_chord_full_turn_collapses() {
        let group = SlotGroup::new(5.0, 10.0, 1.0, 1.0);
        let intervals = layout(&group);
        let chord = &project(&group, &intervals, ORIGIN, BoundaryStyle::Chord)[0];
        let ClosedPath::Chord(poly) = chord else {
            panic!("expected a chord outline");
        };
        let corners = &poly.exterior().0;
        assert!((corners[0].x - corners[1].x).abs() < 1e-9);
        assert!((corners[0].y - corners[1].y).abs() < 1e-9);
        let span = chord.arc_span_degrees(ORIGIN);
        assert!(span < 1e-6 || span > 360.0 - 1e-6);
        assert!(chord.to_polygon(1e-4).unsigned_area() < 1e-6);

        let arc = &project(&group, &intervals, ORIGIN, BoundaryStyle::TrueArc)[0];
        assert!((arc.arc_span_degrees(ORIGIN) - 360.0).abs() < 1e-6);
    }

    #[test]
    fn test_arc_and_chord_differ_for_wide_slots() {
        let group = SlotGroup::new(5.0, 10.0, 2.0, 0.9);
        let intervals = layout(&group);
        let chord = &project(&group, &intervals, ORIGIN, BoundaryStyle::Chord)[0];
        let arc = &project(&group, &intervals, ORIGIN, BoundaryStyle::TrueArc)[0];
        let arc_area = arc.to_polygon(1e-4).unsigned_area();
        // 162° slot of the 5..10 annulus
        let expected = std::f64::consts::PI * (100.0 - 25.0) * 162.0 / 360.0;
        assert!((arc_area - expected).abs() / expected < 1e-3);
        assert!(chord.to_polygon(1e-4).unsigned_area() < arc_area * 0.9);
    }

    #[test]
    fn test_chord_to_bez_path() {
        let group = SlotGroup::new(5.0, 10.0, 4.0, 0.25);
        let paths = project(&group, &layout(&group), ORIGIN, BoundaryStyle::Chord);
        let path = paths[0].to_bez_path();
        let elements = path.elements();
        assert_eq!(elements.len(), 5);
        assert!(matches!(elements[0], PathEl::MoveTo(_)));
        assert!(matches!(elements[3], PathEl::LineTo(_)));
        assert!(matches!(elements[4], PathEl::ClosePath));
    }
}
