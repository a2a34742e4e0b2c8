use geo::MapCoords;
use geo::{coord, Coord};
use geo_types::MultiLineString;
use nalgebra::{Affine2, Matrix3, Point2 as NPoint2};

/// Helper to create a translation matrix
pub fn translate_matrix(tx: f64, ty: f64) -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(1.0, 0.0, tx, 0.0, 1.0, ty, 0.0, 0.0, 1.0))
}

/// Mirror about the horizontal line `y = height / 2`. Turns y-up drawing
/// coordinates into y-down page coordinates of the same height.
pub fn flip_y_matrix(height: f64) -> Affine2<f64> {
    Affine2::from_matrix_unchecked(Matrix3::new(1.0, 0.0, 0.0, 0.0, -1.0, height, 0.0, 0.0, 1.0))
}

pub trait TransformGeometry {
    fn transformed(&self, affine: &Affine2<f64>) -> Self;
}

fn xform_coord(xy: Coord<f64>, affine: &Affine2<f64>) -> Coord<f64> {
    let out = affine * NPoint2::new(xy.x, xy.y);
    coord!(x: out.x, y: out.y)
}

impl TransformGeometry for MultiLineString<f64> {
    fn transformed(&self, affine: &Affine2<f64>) -> MultiLineString<f64> {
        self.map_coords(|xy| xform_coord(xy, affine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::LineString;

    #[test]
    fn test_translate() {
        let lines = MultiLineString::new(vec![LineString::from(vec![(25.0, 25.0), (0.0, 0.0)])]);
        let moved = lines.transformed(&translate_matrix(10., 5.));
        assert_eq!(moved.0[0].0[0], coord! {x: 35.0, y: 30.0});
        assert_eq!(moved.0[0].0[1], coord! {x: 10.0, y: 5.0});
    }

    #[test]
    fn test_flip_then_translate() {
        let lines = MultiLineString::new(vec![LineString::from(vec![(0.0, 1.0)])]);
        let placed = lines.transformed(&(flip_y_matrix(10.0) * translate_matrix(5.0, 5.0)));
        assert_eq!(placed.0[0].0[0], coord! {x: 5.0, y: 4.0});
    }
}
