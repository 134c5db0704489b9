//! Builders translating piecewise polynomial records into function trees.

use itertools::Itertools;

use crate::error::FunctionError;
use crate::function::{ConcatenatedFunction, LinearFunction, ShapeFunction, UnivariateFunction};
use crate::misc::Reported;
use crate::opendrive::{
    ElevationEntry, LaneHeightEntry, LaneOffsetEntry, LaneWidthEntry, ShapeEntry,
    SuperelevationEntry,
};

/// Sorts the entries by key and keeps only a strictly ascending sequence: of a
/// group of entries with equal keys, the first one survives and every further
/// one is dropped with a report message.
pub(crate) fn sorted_strict<E: Clone>(
    entries: &[E],
    key: impl Fn(&E) -> f64,
    label: &str,
    messages: &mut Vec<String>,
) -> Vec<E> {
    let sorted = entries
        .iter()
        .cloned()
        .sorted_by(|a, b| key(a).total_cmp(&key(b)))
        .collect_vec();
    let mut kept: Vec<E> = Vec::with_capacity(sorted.len());
    for entry in sorted {
        match kept.last() {
            Some(last) if key(&entry) <= key(last) => {
                let message = format!(
                    "Removing {} entries which are not placed in strictly ascending \
                     order (duplicated key {})",
                    label,
                    key(&entry)
                );
                log::warn!("{}", message);
                messages.push(message);
            }
            _ => kept.push(entry),
        }
    }
    kept
}

/// Lateral offset of the lane reference from the road reference line. An empty
/// record list yields the zero function; regions before the first entry
/// default to zero.
pub fn build_lane_offset(
    entries: &[LaneOffsetEntry],
) -> Result<Reported<UnivariateFunction<f64>>, FunctionError> {
    if entries.is_empty() {
        return Ok(Reported::clean(LinearFunction::x_axis().into()));
    }
    let mut messages = Vec::new();
    let entries = sorted_strict(entries, |e| e.s, "lane offset", &mut messages);
    let starts = entries.iter().map(|e| e.s).collect_vec();
    let coefficients = entries.iter().map(|e| e.coefficients()).collect_vec();
    let built =
        ConcatenatedFunction::of_polynomial_functions(&starts, &coefficients, Some(0.))?;
    let mut reported = Reported::new(UnivariateFunction::from(built.value), messages);
    reported.messages.extend(built.messages);
    Ok(reported)
}

/// Superelevation of the road surface, used as the torsion of the reference
/// line. Regions before the first entry default to zero.
pub fn build_superelevation(
    entries: &[SuperelevationEntry],
) -> Result<Reported<UnivariateFunction<f64>>, FunctionError> {
    if entries.is_empty() {
        return Ok(Reported::clean(LinearFunction::x_axis().into()));
    }
    let mut messages = Vec::new();
    let entries = sorted_strict(entries, |e| e.s, "superelevation", &mut messages);
    let starts = entries.iter().map(|e| e.s).collect_vec();
    let coefficients = entries.iter().map(|e| e.coefficients()).collect_vec();
    let built =
        ConcatenatedFunction::of_polynomial_functions(&starts, &coefficients, Some(0.))?;
    let mut reported = Reported::new(UnivariateFunction::from(built.value), messages);
    reported.messages.extend(built.messages);
    Ok(reported)
}

/// Elevation of the reference line. Regions before the first entry default to
/// zero elevation.
pub fn build_elevation(
    entries: &[ElevationEntry],
) -> Result<Reported<UnivariateFunction<f64>>, FunctionError> {
    if entries.is_empty() {
        return Ok(Reported::clean(LinearFunction::x_axis().into()));
    }
    let mut messages = Vec::new();
    let entries = sorted_strict(entries, |e| e.s, "elevation", &mut messages);
    let starts = entries.iter().map(|e| e.s).collect_vec();
    let coefficients = entries.iter().map(|e| e.coefficients()).collect_vec();
    let built =
        ConcatenatedFunction::of_polynomial_functions(&starts, &coefficients, Some(0.))?;
    let mut reported = Reported::new(UnivariateFunction::from(built.value), messages);
    reported.messages.extend(built.messages);
    Ok(reported)
}

/// Width of a lane over the curve position relative to the lane-section start.
/// An empty record list yields the zero function. A first entry starting after
/// the section start leaves a region of zero width, which is reported.
pub fn build_lane_width(
    entries: &[LaneWidthEntry],
    tolerance: f64,
) -> Result<Reported<UnivariateFunction<f64>>, FunctionError> {
    if entries.is_empty() {
        return Ok(Reported::clean(LinearFunction::x_axis().into()));
    }
    let mut messages = Vec::new();
    let entries = sorted_strict(entries, |e| e.s_offset, "width", &mut messages);
    if entries[0].s_offset > tolerance {
        let message = format!(
            "The lane width is undefined before the first width entry at {}; \
             defaulting to zero width",
            entries[0].s_offset
        );
        log::warn!("{}", message);
        messages.push(message);
    }
    let starts = entries.iter().map(|e| e.s_offset).collect_vec();
    let coefficients = entries.iter().map(|e| e.coefficients()).collect_vec();
    let built =
        ConcatenatedFunction::of_polynomial_functions(&starts, &coefficients, Some(0.))?;
    let mut reported = Reported::new(UnivariateFunction::from(built.value), messages);
    reported.messages.extend(built.messages);
    Ok(reported)
}

/// Vertical offsets of the inner and outer lane border as step functions over
/// the curve position relative to the lane-section start. Missing records mean
/// offsets of zero; a first entry starting after the section start is extended
/// back to it.
pub fn build_lane_height_offsets(
    entries: &[LaneHeightEntry],
) -> Result<Reported<(UnivariateFunction<f64>, UnivariateFunction<f64>)>, FunctionError> {
    if entries.is_empty() {
        return Ok(Reported::clean((
            LinearFunction::x_axis().into(),
            LinearFunction::x_axis().into(),
        )));
    }
    let mut messages = Vec::new();
    let mut entries = sorted_strict(entries, |e| e.s_offset, "height", &mut messages);
    if entries[0].s_offset > 0. {
        let message = format!(
            "The lane height offsets start at {}; extending the first entry back \
             to the lane-section start",
            entries[0].s_offset
        );
        log::warn!("{}", message);
        messages.push(message);
        let mut leading = entries[0];
        leading.s_offset = 0.;
        entries.insert(0, leading);
    }
    let starts = entries.iter().map(|e| e.s_offset).collect_vec();
    let inner_offsets = entries.iter().map(|e| e.inner).collect_vec();
    let outer_offsets = entries.iter().map(|e| e.outer).collect_vec();

    let inner = ConcatenatedFunction::of_linear_functions(&starts, &inner_offsets, None)?;
    let outer = ConcatenatedFunction::of_linear_functions(&starts, &outer_offsets, None)?;
    let mut reported = Reported::new(
        (
            UnivariateFunction::from(inner.value),
            UnivariateFunction::from(outer.value),
        ),
        messages,
    );
    reported.messages.extend(inner.messages);
    reported.messages.extend(outer.messages);
    Ok(reported)
}

/// The lateral road shape: the entries are grouped by their curve position and
/// each group becomes the lateral cut at that station. Returns `None` when the
/// road carries no shape.
pub fn build_shape(
    entries: &[ShapeEntry],
) -> Result<Option<Reported<ShapeFunction<f64>>>, FunctionError> {
    if entries.is_empty() {
        return Ok(None);
    }
    let mut messages = Vec::new();
    let sorted = entries
        .iter()
        .copied()
        .sorted_by(|a, b| a.s.total_cmp(&b.s).then(a.t.total_cmp(&b.t)))
        .collect_vec();

    let mut cuts: Vec<(f64, UnivariateFunction<f64>)> = Vec::new();
    let mut group: Vec<ShapeEntry> = Vec::new();
    for entry in sorted {
        if let Some(first) = group.first() {
            if entry.s != first.s {
                cuts.push(build_shape_cut(&group, &mut messages)?);
                group.clear();
            }
        }
        group.push(entry);
    }
    cuts.push(build_shape_cut(&group, &mut messages)?);

    let shape = ShapeFunction::try_new(cuts)?;
    Ok(Some(Reported::new(shape, messages)))
}

fn build_shape_cut(
    group: &[ShapeEntry],
    messages: &mut Vec<String>,
) -> Result<(f64, UnivariateFunction<f64>), FunctionError> {
    let entries = sorted_strict(group, |e| e.t, "lateral shape", messages);
    let lateral_starts = entries.iter().map(|e| e.t).collect_vec();
    let coefficients = entries.iter().map(|e| e.coefficients()).collect_vec();
    let built =
        ConcatenatedFunction::of_polynomial_functions(&lateral_starts, &coefficients, None)?;
    messages.extend(built.messages);
    Ok((group[0].s, built.value.into()))
}
