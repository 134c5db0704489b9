use approx::assert_relative_eq;
use nalgebra::{Point2, Point3};
use std::sync::Arc;

use crate::error::GeometryError;
use crate::function::{LinearFunction, UnivariateFunction};
use crate::range::{HasDomain, Range};

use super::{
    fresnel, Affine3D, AffineSequence3D, Arc2D, CompositeCurve2D, CompositeSurface3D, Cuboid3D,
    CurveOnParametricSurface3D, CurveRelativeParametricSurface3D, Curve2D, Curve3D, Cylinder3D,
    LineSegment2D, LinearRing3D, ParametricSweep3D, Polygon3D, Pose2D, Pose3D, SamplePoints,
    SectionedCurveRelativeParametricSurface3D, Spiral2D,
};

const EPS: f64 = 1e-7;

fn constant(value: f64) -> Arc<UnivariateFunction<f64>> {
    Arc::new(LinearFunction::unbounded(0., value).into())
}

fn straight_plan(length: f64) -> Arc<CompositeCurve2D<f64>> {
    let line = LineSegment2D::new(Pose2D::identity(), Range::closed(0., length));
    Arc::new(CompositeCurve2D::try_new(vec![line.into()], 0.).unwrap())
}

fn flat_surface(length: f64) -> Arc<CurveRelativeParametricSurface3D<f64>> {
    let base = Curve3D::try_new(straight_plan(length), constant(0.), None, EPS).unwrap();
    Arc::new(CurveRelativeParametricSurface3D::new(base, None))
}

#[test]
fn fresnel_integrals_match_tabulated_values() {
    let cases = [
        (0.5, 0.4923442, 0.0647324),
        (1.0, 0.7798934, 0.4382591),
        (1.5, 0.4452612, 0.6975050),
        (2.0, 0.4882534, 0.3434157),
        (2.5, 0.4574130, 0.6191818),
        (3.0, 0.6057208, 0.4963130),
        // asymptotic branch
        (4.0, 0.4984260, 0.4205158),
        (5.0, 0.5636312, 0.4991914),
    ];
    for (x, c_expected, s_expected) in cases {
        let (c, s) = fresnel(x);
        assert_relative_eq!(c, c_expected, epsilon = 2e-6);
        assert_relative_eq!(s, s_expected, epsilon = 2e-6);
    }

    // odd symmetry
    let (c, s) = fresnel(-1.0);
    assert_relative_eq!(c, -0.7798934, epsilon = 1e-6);
    assert_relative_eq!(s, -0.4382591, epsilon = 1e-6);
}

#[test]
fn line_segment_runs_along_its_heading() {
    let pose = Pose2D::new(Point2::new(1., 2.), std::f64::consts::FRAC_PI_2);
    let line: Curve2D<f64> = LineSegment2D::new(pose, Range::closed(0., 10.)).into();
    let at = line.pose_at(4.).unwrap();
    assert_relative_eq!(at.position.x, 1., epsilon = 1e-12);
    assert_relative_eq!(at.position.y, 6., epsilon = 1e-12);
    assert_relative_eq!(at.heading, std::f64::consts::FRAC_PI_2);
    assert!(line.pose_at(10.5).is_err());
}

#[test]
fn arc_traverses_a_quarter_circle() {
    let curvature = 0.1;
    let quarter = std::f64::consts::FRAC_PI_2 / curvature;
    let arc: Curve2D<f64> =
        Arc2D::try_new(Pose2D::identity(), curvature, Range::closed(0., quarter))
            .unwrap()
            .into();
    let at = arc.pose_at(quarter).unwrap();
    assert_relative_eq!(at.position.x, 10., epsilon = 1e-9);
    assert_relative_eq!(at.position.y, 10., epsilon = 1e-9);
    assert_relative_eq!(at.heading, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
}

#[test]
fn spiral_matches_numeric_integration_of_its_curvature_law() {
    let curvature_start = 0.01;
    let curvature_slope = 0.002;
    let length = 40.;
    let spiral: Curve2D<f64> = Spiral2D::try_new(
        Pose2D::identity(),
        curvature_start,
        curvature_slope,
        Range::closed(0., length),
    )
    .unwrap()
    .into();

    let steps = 200_000;
    let ds = length / steps as f64;
    let (mut x, mut y) = (0_f64, 0_f64);
    for i in 0..steps {
        let s = (i as f64 + 0.5) * ds;
        let theta = curvature_start * s + 0.5 * curvature_slope * s * s;
        x += theta.cos() * ds;
        y += theta.sin() * ds;
    }

    let at = spiral.pose_at(length).unwrap();
    assert_relative_eq!(at.position.x, x, epsilon = 1e-5);
    assert_relative_eq!(at.position.y, y, epsilon = 1e-5);
    assert_relative_eq!(
        at.heading,
        curvature_start * length + 0.5 * curvature_slope * length * length,
        epsilon = 1e-9
    );

    let start = spiral.pose_at(0.).unwrap();
    assert_relative_eq!(start.position.x, 0., epsilon = 1e-12);
    assert_relative_eq!(start.position.y, 0., epsilon = 1e-12);
    assert_relative_eq!(start.heading, 0., epsilon = 1e-12);
}

#[test]
fn right_turning_spiral_bends_to_negative_y() {
    let spiral: Curve2D<f64> = Spiral2D::try_new(
        Pose2D::identity(),
        0.,
        -0.002,
        Range::closed(0., 40.),
    )
    .unwrap()
    .into();
    let at = spiral.pose_at(40.).unwrap();
    assert!(at.position.y < -1.);
    assert!(at.heading < 0.);
}

#[test]
fn composite_curve_concatenates_members() {
    let line = LineSegment2D::new(Pose2D::identity(), Range::closed_open(0., 10.));
    let arc = Arc2D::try_new(
        Pose2D::new(Point2::new(10., 0.), 0.),
        0.1,
        Range::closed(0., 5.),
    )
    .unwrap();
    let composite = CompositeCurve2D::try_new(vec![line.into(), arc.into()], 0.).unwrap();

    assert_eq!(composite.domain(), Range::closed(0., 15.));
    let on_line = composite.pose_at(5.).unwrap();
    assert_relative_eq!(on_line.position.y, 0.);
    let at_seam = composite.pose_at(10.).unwrap();
    assert_relative_eq!(at_seam.position.x, 10., epsilon = 1e-12);
    let near_seam = composite.pose_at_fuzzy(10. - 5e-8, EPS).unwrap();
    assert_relative_eq!(near_seam.position.x, 10., epsilon = 1e-6);
}

#[test]
fn curve3d_lifts_the_plan_view_by_the_elevation() {
    let elevation: Arc<UnivariateFunction<f64>> =
        Arc::new(LinearFunction::unbounded(0.1, 0.).into());
    let curve = Curve3D::try_new(straight_plan(100.), elevation, None, EPS).unwrap();

    let point = curve.point_at(10.).unwrap();
    assert_relative_eq!(point.x, 10.);
    assert_relative_eq!(point.y, 0.);
    assert_relative_eq!(point.z, 1.);

    let points = curve.sample_points(30.).unwrap();
    assert_eq!(points.len(), 5);
    assert_relative_eq!(points.last().unwrap().x, 100.);
}

#[test]
fn torsion_rolls_the_lateral_axis() {
    let roll = 0.1_f64;
    let base =
        Curve3D::try_new(straight_plan(100.), constant(0.), Some(constant(roll)), EPS).unwrap();
    let surface = CurveRelativeParametricSurface3D::new(base, None);

    let point = surface.point_at(50., 2., 0.).unwrap();
    assert_relative_eq!(point.x, 50.);
    assert_relative_eq!(point.y, 2. * roll.cos(), epsilon = 1e-12);
    assert_relative_eq!(point.z, 2. * roll.sin(), epsilon = 1e-12);
}

#[test]
fn sectioned_surface_shifts_the_curve_position() {
    let surface = flat_surface(100.);
    let sectioned =
        SectionedCurveRelativeParametricSurface3D::try_new(surface, Range::closed(40., 60.))
            .unwrap();
    assert_eq!(sectioned.domain(), Range::closed(0., 20.));

    let point = sectioned.point_at(10., 1., 0.).unwrap();
    assert_relative_eq!(point.x, 50.);
    assert_relative_eq!(point.y, 1.);
    assert!(sectioned.point_at(21., 0., 0.).is_err());
}

#[test]
fn restriction_outside_the_source_domain_is_refused() {
    let surface = flat_surface(100.);
    let result =
        SectionedCurveRelativeParametricSurface3D::try_new(surface, Range::closed(90., 110.));
    assert!(matches!(
        result,
        Err(GeometryError::RestrictionOutsideDomain)
    ));
}

#[test]
fn curve_on_surface_applies_lateral_and_height_offsets() {
    let surface = flat_surface(100.);
    let sectioned =
        SectionedCurveRelativeParametricSurface3D::try_new(surface, Range::closed(0., 100.))
            .unwrap();
    let curve = CurveOnParametricSurface3D::try_new(
        sectioned,
        LinearFunction::unbounded(0., 1.5).into(),
        Some(LinearFunction::unbounded(0., -0.1).into()),
    )
    .unwrap();

    let point = curve.point_at(30.).unwrap();
    assert_relative_eq!(point.x, 30.);
    assert_relative_eq!(point.y, 1.5);
    assert_relative_eq!(point.z, -0.1);

    let points = curve.sample_points(0.7).unwrap();
    assert_relative_eq!(points.first().unwrap().x, 0.);
    assert_relative_eq!(points.last().unwrap().x, 100.);
}

#[test]
fn linear_ring_requires_three_distinct_vertices() {
    let ring = LinearRing3D::try_new(
        vec![
            Point3::new(0., 0., 0.),
            Point3::new(0., 0., 0.),
            Point3::new(1., 0., 0.),
            Point3::new(1., 0., 1e-9),
            Point3::new(0., 1., 0.),
        ],
        EPS,
    )
    .unwrap();
    assert_eq!(ring.vertices().len(), 3);

    let degenerate = LinearRing3D::try_new(
        vec![
            Point3::new(0., 0., 0.),
            Point3::new(1., 0., 0.),
            Point3::new(0., 0., 1e-9),
        ],
        EPS,
    );
    assert!(matches!(
        degenerate,
        Err(GeometryError::DegenerateRing(2))
    ));
}

#[test]
fn rings_of_two_point_lists_skip_coinciding_segments() {
    let left = vec![
        Point3::new(0., 0., 0.),
        Point3::new(1., 0., 0.),
        Point3::new(2., 0., 0.),
    ];
    let right = vec![
        Point3::new(0., 0., 0.5),
        Point3::new(1., 0., 0.5),
        Point3::new(2., 0., 0.5),
    ];
    let rings = LinearRing3D::of_two_point_lists(&left, &right, EPS).unwrap();
    assert_eq!(rings.len(), 2);

    let coinciding = LinearRing3D::of_two_point_lists(&left, &left, EPS).unwrap();
    assert!(coinciding.is_empty());

    let surface = CompositeSurface3D::of_rings(coinciding);
    assert!(surface.is_empty());
}

#[test]
fn cuboid_exposes_six_faces() {
    let cuboid = Cuboid3D::try_new(Pose3D::identity(), 2., 1., 0.5).unwrap();
    let polygons = cuboid.polygons(EPS).unwrap();
    assert_eq!(polygons.len(), 6);
    for polygon in &polygons {
        assert_eq!(polygon.vertices().len(), 4);
    }
}

#[test]
fn cylinder_exposes_caps_and_slices() {
    let cylinder = Cylinder3D::try_new(Pose3D::identity(), 1., 2., 8).unwrap();
    let polygons = cylinder.polygons(EPS).unwrap();
    assert_eq!(polygons.len(), 10);
    assert!(Cylinder3D::try_new(Pose3D::identity(), 1., 2., 2).is_err());
}

#[test]
fn parametric_sweep_produces_a_closed_strip() {
    let reference = Curve3D::try_new(straight_plan(10.), constant(0.), None, EPS).unwrap();
    let sweep = ParametricSweep3D::try_new(
        reference,
        LinearFunction::unbounded(0., 0.4).into(),
        LinearFunction::unbounded(0., 0.8).into(),
        5.,
    )
    .unwrap();
    let surface = sweep.surface().unwrap();
    // two caps plus four quads per longitudinal segment
    assert_eq!(surface.patches().len(), 10);
}

#[test]
fn affine_sequences_apply_first_to_last() {
    let translate = Affine3D::from_pose(&Pose3D::new(Point3::new(1., 0., 0.), 0., 0., 0.));
    let rotate = Affine3D::from_pose(&Pose3D::new(
        Point3::origin(),
        std::f64::consts::FRAC_PI_2,
        0.,
        0.,
    ));
    let folded = AffineSequence3D::new(vec![translate, rotate]).fold();
    let point = folded.transform_point(&Point3::new(1., 0., 0.));
    assert_relative_eq!(point.x, 0., epsilon = 1e-12);
    assert_relative_eq!(point.y, 2., epsilon = 1e-12);
    assert_relative_eq!(point.z, 0., epsilon = 1e-12);
}

#[test]
fn polygon_from_ring_keeps_the_vertices() {
    let ring = LinearRing3D::try_new(
        vec![
            Point3::new(0., 0., 0.),
            Point3::new(1., 0., 0.),
            Point3::new(0., 1., 0.),
        ],
        EPS,
    )
    .unwrap();
    let polygon: Polygon3D<f64> = ring.into();
    assert_eq!(polygon.vertices().len(), 3);
}
