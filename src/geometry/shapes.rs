use geo_types::{coord, Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Point at `radius` from `center`, `degrees` counter-clockwise from +x.
pub fn polar(center: Coord<f64>, radius: f64, degrees: f64) -> Coord<f64> {
    let radians = degrees.to_radians();
    coord! {x: center.x + radius * radians.cos(), y: center.y + radius * radians.sin()}
}

/// Regular polygon in plain mathematical orientation, first vertex on +x.
/// `Polygon::new` closes the ring, so `sides` distinct vertices go in.
pub fn regular_poly_native(sides: usize, center: Coord<f64>, radius: f64) -> Polygon<f64> {
    let sides = sides.max(3);
    Polygon::new(
        LineString::new(
            (0..sides)
                .map(|i| {
                    let angle = (i as f64 / sides as f64) * (2.0 * PI);
                    coord! {x: center.x + angle.cos() * radius, y: center.y + angle.sin() * radius}
                })
                .collect(),
        ),
        vec![],
    )
}

/// A boundary circle. Formats with a circle primitive take it as-is,
/// everyone else asks for [`RingPrimitive::to_polygon`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RingPrimitive {
    pub center: Coord<f64>,
    pub radius: f64,
}

impl RingPrimitive {
    pub fn to_polygon(&self, vertices: usize) -> Polygon<f64> {
        regular_poly_native(vertices, self.center, self.radius)
    }
}

pub fn circle(center: Coord<f64>, radius: f64) -> RingPrimitive {
    RingPrimitive { center, radius }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ring_polygon_vertices() {
        let ring = circle(coord! {x: 1.0, y: 2.0}, 10.0).to_polygon(100);
        // closed: first vertex repeated at the end
        assert_eq!(ring.exterior().0.len(), 101);
        let first = ring.exterior().0[0];
        assert!((first.x - 11.0).abs() < 1e-9 && (first.y - 2.0).abs() < 1e-9);
        for c in ring.exterior().coords() {
            let r = ((c.x - 1.0).powi(2) + (c.y - 2.0).powi(2)).sqrt();
            assert!((r - 10.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_too_few_sides_clamped() {
        assert_eq!(regular_poly_native(1, coord! {x: 0.0, y: 0.0}, 1.0).exterior().0.len(), 4);
    }

    #[test]
    fn test_polar() {
        let p = polar(coord! {x: 0.0, y: 0.0}, 2.0, 90.0);
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 2.0).abs() < 1e-12);
    }
}
