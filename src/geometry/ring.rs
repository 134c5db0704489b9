use nalgebra::Point3;

use crate::error::GeometryError;
use crate::misc::FloatingPoint;

/// Returns true if the two points coincide within `tolerance`.
pub fn fuzzy_point_equals<T: FloatingPoint>(
    a: &Point3<T>,
    b: &Point3<T>,
    tolerance: T,
) -> bool {
    (a - b).norm() <= tolerance
}

/// Returns true if both lists have the same length and coincide pointwise.
pub fn fuzzy_point_list_equals<T: FloatingPoint>(
    a: &[Point3<T>],
    b: &[Point3<T>],
    tolerance: T,
) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(p, q)| fuzzy_point_equals(p, q, tolerance))
}

/// Removes adjacent duplicates within `tolerance`, including the closing pair.
fn without_adjacent_duplicates<T: FloatingPoint>(
    vertices: &[Point3<T>],
    tolerance: T,
) -> Vec<Point3<T>> {
    let mut distinct: Vec<Point3<T>> = Vec::with_capacity(vertices.len());
    for vertex in vertices {
        match distinct.last() {
            Some(last) if fuzzy_point_equals(last, vertex, tolerance) => {}
            _ => distinct.push(*vertex),
        }
    }
    while distinct.len() > 1
        && fuzzy_point_equals(&distinct[0], distinct.last().unwrap(), tolerance)
    {
        distinct.pop();
    }
    distinct
}

/// A closed ring of at least three distinct vertices. The closing edge back to
/// the first vertex is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRing3D<T: FloatingPoint> {
    vertices: Vec<Point3<T>>,
}

impl<T: FloatingPoint> LinearRing3D<T> {
    pub fn try_new(vertices: Vec<Point3<T>>, tolerance: T) -> Result<Self, GeometryError> {
        let distinct = without_adjacent_duplicates(&vertices, tolerance);
        if distinct.len() < 3 {
            return Err(GeometryError::DegenerateRing(distinct.len()));
        }
        Ok(Self { vertices: distinct })
    }

    pub fn vertices(&self) -> &[Point3<T>] {
        &self.vertices
    }

    /// Builds the rings bridging two equally sampled boundary point lists.
    /// Degenerate rings, arising where the boundaries coincide, are skipped, so
    /// the result is empty for fully coinciding lists.
    pub fn of_two_point_lists(
        left: &[Point3<T>],
        right: &[Point3<T>],
        tolerance: T,
    ) -> Result<Vec<Self>, GeometryError> {
        if left.len() != right.len() {
            return Err(GeometryError::Sampling(
                "the boundary point lists differ in length".into(),
            ));
        }
        if left.len() < 2 {
            return Err(GeometryError::Sampling(
                "at least two samples per boundary are required".into(),
            ));
        }
        let mut rings = Vec::new();
        for i in 0..left.len() - 1 {
            let candidate = vec![left[i], right[i], right[i + 1], left[i + 1]];
            match Self::try_new(candidate, tolerance) {
                Ok(ring) => rings.push(ring),
                Err(GeometryError::DegenerateRing(_)) => {}
                Err(error) => return Err(error),
            }
        }
        Ok(rings)
    }
}

/// A planar face bounded by at least three distinct vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon3D<T: FloatingPoint> {
    vertices: Vec<Point3<T>>,
}

impl<T: FloatingPoint> Polygon3D<T> {
    pub fn try_new(vertices: Vec<Point3<T>>, tolerance: T) -> Result<Self, GeometryError> {
        let distinct = without_adjacent_duplicates(&vertices, tolerance);
        if distinct.len() < 3 {
            return Err(GeometryError::DegenerateRing(distinct.len()));
        }
        Ok(Self { vertices: distinct })
    }

    pub fn vertices(&self) -> &[Point3<T>] {
        &self.vertices
    }
}

impl<T: FloatingPoint> From<LinearRing3D<T>> for Polygon3D<T> {
    fn from(ring: LinearRing3D<T>) -> Self {
        Self {
            vertices: ring.vertices,
        }
    }
}

/// A surface composed of planar patches, possibly empty.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeSurface3D<T: FloatingPoint> {
    patches: Vec<Polygon3D<T>>,
}

impl<T: FloatingPoint> CompositeSurface3D<T> {
    pub fn new(patches: Vec<Polygon3D<T>>) -> Self {
        Self { patches }
    }

    pub fn of_rings(rings: Vec<LinearRing3D<T>>) -> Self {
        Self::new(rings.into_iter().map(Polygon3D::from).collect())
    }

    pub fn patches(&self) -> &[Polygon3D<T>] {
        &self.patches
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }
}
