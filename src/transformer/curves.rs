//! Builders reconstructing the reference curve and the road surfaces.

use std::sync::Arc;

use nalgebra::Point2;

use crate::error::RoadspaceError;
use crate::geometry::{
    Arc2D, CompositeCurve2D, CubicCurve2D, Curve2D, Curve3D,
    CurveRelativeParametricSurface3D, LineSegment2D, ParametricCubicCurve2D, Pose2D, Spiral2D,
};
use crate::misc::Reported;
use crate::opendrive::{PlanViewGeometry, PlanViewGeometryContent, Road};
use crate::range::Range;

use super::functions::{
    build_elevation, build_shape, build_superelevation, sorted_strict,
};
use super::TransformerConfig;

/// Builds the road reference curve in the plane from the plan-view records.
///
/// Each geometry piece is positioned by its start pose and the pieces are
/// concatenated end-to-end. Pieces shorter than the tolerance are dropped with
/// a report message; degenerate spirals fall back to arcs or lines.
pub fn build_plan_view(
    geometries: &[PlanViewGeometry],
    tolerance: f64,
) -> Result<Reported<CompositeCurve2D<f64>>, RoadspaceError> {
    if geometries.is_empty() {
        return Err(RoadspaceError::IllegalState(
            "the plan view requires at least one geometry".into(),
        ));
    }
    let mut messages = Vec::new();
    let entries: Vec<PlanViewGeometry> = geometries
        .iter()
        .filter(|entry| {
            if entry.length <= tolerance {
                let message = format!(
                    "Removing plan view geometry at {}: length below tolerance",
                    entry.s
                );
                log::warn!("{}", message);
                messages.push(message);
                false
            } else {
                true
            }
        })
        .cloned()
        .collect();
    let entries = sorted_strict(&entries, |g| g.s, "plan view geometry", &mut messages);
    if entries.is_empty() {
        return Err(RoadspaceError::IllegalState(
            "the plan view contains no geometry of positive length".into(),
        ));
    }

    let count = entries.len();
    let mut members: Vec<Curve2D<f64>> = Vec::with_capacity(count);
    for (index, entry) in entries.iter().enumerate() {
        let domain = if index + 1 < count {
            Range::closed_open(0., entry.length)
        } else {
            Range::closed(0., entry.length)
        };
        members.push(build_plan_view_member(entry, domain, tolerance, &mut messages)?);
    }
    let composite = CompositeCurve2D::try_new(members, entries[0].s)
        .map_err(RoadspaceError::from)?;
    Ok(Reported::new(composite, messages))
}

fn build_plan_view_member(
    entry: &PlanViewGeometry,
    domain: Range<f64>,
    tolerance: f64,
    messages: &mut Vec<String>,
) -> Result<Curve2D<f64>, RoadspaceError> {
    let pose = Pose2D::new(Point2::new(entry.x, entry.y), entry.hdg);
    let curve = match &entry.content {
        PlanViewGeometryContent::Line => LineSegment2D::new(pose, domain).into(),
        PlanViewGeometryContent::Arc { curvature } => {
            if curvature.abs() <= tolerance {
                messages.push(format!(
                    "Arc geometry at {} has a curvature below tolerance; \
                     building a line instead",
                    entry.s
                ));
                LineSegment2D::new(pose, domain).into()
            } else {
                Arc2D::try_new(pose, *curvature, domain)?.into()
            }
        }
        PlanViewGeometryContent::Spiral {
            curvature_start,
            curvature_end,
        } => {
            let curvature_slope = (curvature_end - curvature_start) / entry.length;
            if curvature_slope.abs() <= tolerance {
                if curvature_start.abs() <= tolerance {
                    messages.push(format!(
                        "Spiral geometry at {} has constant zero curvature; \
                         building a line instead",
                        entry.s
                    ));
                    LineSegment2D::new(pose, domain).into()
                } else {
                    messages.push(format!(
                        "Spiral geometry at {} has a constant curvature; \
                         building an arc instead",
                        entry.s
                    ));
                    Arc2D::try_new(pose, *curvature_start, domain)?.into()
                }
            } else {
                Spiral2D::try_new(pose, *curvature_start, curvature_slope, domain)?.into()
            }
        }
        PlanViewGeometryContent::Poly3 { a, b, c, d } => {
            CubicCurve2D::new(pose, [*a, *b, *c, *d], domain).into()
        }
        PlanViewGeometryContent::ParamPoly3 {
            a_u,
            b_u,
            c_u,
            d_u,
            a_v,
            b_v,
            c_v,
            d_v,
            normalized,
        } => ParametricCubicCurve2D::new(
            pose,
            [*a_u, *b_u, *c_u, *d_u],
            [*a_v, *b_v, *c_v, *d_v],
            *normalized,
            domain,
        )
        .into(),
    };
    Ok(curve)
}

/// Builds the two road surfaces: the surface with superelevation torsion and
/// its torsion-free twin for lanes on level. Both share the plan view, the
/// elevation and the lateral shape.
pub fn build_road_surfaces(
    road: &Road,
    config: &TransformerConfig,
) -> Result<
    Reported<(
        Arc<CurveRelativeParametricSurface3D<f64>>,
        Arc<CurveRelativeParametricSurface3D<f64>>,
    )>,
    RoadspaceError,
> {
    let mut messages = Vec::new();

    let plan = build_plan_view(&road.plan_view, config.tolerance)?;
    messages.extend(plan.messages);
    let plan = Arc::new(plan.value);

    let elevation = build_elevation(&road.elevation_profile)?;
    messages.extend(elevation.messages);
    let elevation = Arc::new(elevation.value);

    let superelevation = build_superelevation(&road.lateral_profile.superelevation)?;
    messages.extend(superelevation.messages);
    let superelevation = Arc::new(superelevation.value);

    let shape = match build_shape(&road.lateral_profile.shape)? {
        Some(shape) => {
            messages.extend(shape.messages);
            Some(Arc::new(shape.value))
        }
        None => None,
    };

    let base = Curve3D::try_new(
        plan.clone(),
        elevation.clone(),
        Some(superelevation),
        config.tolerance,
    )?;
    let base_without_torsion = Curve3D::try_new(plan, elevation, None, config.tolerance)?;

    let surface = Arc::new(CurveRelativeParametricSurface3D::new(base, shape.clone()));
    let surface_without_torsion = Arc::new(CurveRelativeParametricSurface3D::new(
        base_without_torsion,
        shape,
    ));
    Ok(Reported::new((surface, surface_without_torsion), messages))
}
