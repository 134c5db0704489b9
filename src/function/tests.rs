use approx::assert_relative_eq;
use std::sync::Arc;

use crate::error::FunctionError;
use crate::range::{HasDomain, Range};

use super::{
    ConcatenatedFunction, LinearFunction, PolynomialFunction, SectionedUnivariateFunction,
    ShapeFunction, StackedFunction, UnivariateFunction,
};

const EPS: f64 = 1e-7;

fn poly(coefficients: &[f64], domain: Range<f64>) -> UnivariateFunction<f64> {
    PolynomialFunction::with_domain(coefficients.to_vec(), domain).into()
}

#[test]
fn x_axis_is_zero_everywhere() {
    let f = LinearFunction::<f64>::x_axis();
    assert_eq!(f.value(-1e9).unwrap(), 0.);
    assert_eq!(f.value(0.).unwrap(), 0.);
    assert_eq!(f.value(42.).unwrap(), 0.);
    assert_eq!(f.slope(13.).unwrap(), 0.);
}

#[test]
fn polynomial_evaluation_and_slope() {
    // 1 + 2x + 3x^2
    let f = PolynomialFunction::new(vec![1., 2., 3.], 10.);
    assert_relative_eq!(f.value(2.).unwrap(), 17.);
    assert_relative_eq!(f.slope(2.).unwrap(), 14.);
    assert!(matches!(
        f.value(10.),
        Err(FunctionError::OutOfDomain { .. })
    ));
    assert_relative_eq!(f.value_fuzzy(10., EPS).unwrap(), 321.);
}

#[test]
fn prepended_constant_covers_everything_before_the_first_entry() {
    let built = ConcatenatedFunction::of_polynomial_functions(
        &[5., 10.],
        &[vec![1., 0.1], vec![2.]],
        Some(0.),
    )
    .unwrap();
    assert!(built.messages.is_empty());
    let f = built.value;

    assert_eq!(f.value(-100.).unwrap(), 0.);
    assert_eq!(f.value(0.).unwrap(), 0.);
    assert_eq!(f.value(4.9).unwrap(), 0.);
    // first piece evaluates in its local coordinate
    assert_relative_eq!(f.value(5.).unwrap(), 1.);
    assert_relative_eq!(f.value(7.).unwrap(), 1.2);
    // the last piece is unbounded
    assert_relative_eq!(f.value(1000.).unwrap(), 2.);
}

#[test]
fn concatenation_is_continuous_iff_adjacent_pieces_agree() {
    // both pieces meet with value 1 at the boundary
    let continuous = ConcatenatedFunction::of_polynomial_functions(
        &[0., 10.],
        &[vec![0., 0.1], vec![1., -0.5]],
        None,
    )
    .unwrap()
    .value;
    let below = continuous.value(10. - 1e-9).unwrap();
    let above = continuous.value(10.).unwrap();
    assert_relative_eq!(below, above, epsilon = 1e-8);

    let jumping = ConcatenatedFunction::of_polynomial_functions(
        &[0.0f64, 10.],
        &[vec![0., 0.1], vec![3.]],
        None,
    )
    .unwrap()
    .value;
    let below = jumping.value(10. - 1e-9).unwrap();
    let above = jumping.value(10.).unwrap();
    assert!((above - below).abs() > 1.9);
}

#[test]
fn equal_start_positions_keep_the_first_entry() {
    let built = ConcatenatedFunction::of_polynomial_functions(
        &[0., 10., 10., 20.],
        &[vec![0.], vec![1.], vec![2.], vec![3.]],
        None,
    )
    .unwrap();
    assert_eq!(built.messages.len(), 1);
    assert!(built.messages[0].starts_with("Removing"));
    // the surviving piece on [10, 20) is the first of the two equal-key entries
    assert_relative_eq!(built.value.value(15.).unwrap(), 1.);
    assert_relative_eq!(built.value.value(25.).unwrap(), 3.);
}

#[test]
fn descending_start_positions_are_refused() {
    let result = ConcatenatedFunction::of_polynomial_functions(
        &[10., 0.],
        &[vec![1.], vec![2.]],
        None,
    );
    assert!(matches!(
        result,
        Err(FunctionError::IllegalConstruction(_))
    ));
}

#[test]
fn fuzzy_member_selection_is_stable_around_boundaries() {
    let f = ConcatenatedFunction::of_polynomial_functions(
        &[0., 10.],
        &[vec![1.], vec![2.]],
        None,
    )
    .unwrap()
    .value;
    let container = f.container();

    let (below, _) = container.fuzzy_select_member(10. - 5e-8, EPS).unwrap();
    let (exact, _) = container.fuzzy_select_member(10., EPS).unwrap();
    let (above, _) = container.fuzzy_select_member(10. + 5e-8, EPS).unwrap();
    assert!(std::ptr::eq(below, exact));
    assert!(std::ptr::eq(exact, above));

    // beyond the fuzzy extension the selection fails
    assert!(container.fuzzy_select_member(-1., EPS).is_err());
    // strictly inside a member, selection is by containment
    assert!(container.strict_select_member(9.).is_ok());
    assert!(container.strict_select_member(-0.5).is_err());
}

#[test]
fn building_from_sorted_input_is_idempotent() {
    let clean = ConcatenatedFunction::of_polynomial_functions(
        &[0., 10., 20.],
        &[vec![1.], vec![2.], vec![3.]],
        Some(0.),
    )
    .unwrap();
    let dirty = ConcatenatedFunction::of_polynomial_functions(
        &[0., 10., 10., 20.],
        &[vec![1.], vec![2.], vec![4.], vec![3.]],
        Some(0.),
    )
    .unwrap();
    assert!(clean.messages.is_empty());
    assert!(!dirty.messages.is_empty());
    assert_eq!(clean.value, dirty.value);
}

#[test]
fn sectioning_shifts_the_domain_to_zero() {
    let source: Arc<UnivariateFunction<f64>> =
        Arc::new(poly(&[0., 1.], Range::closed(0., 100.)));
    let sectioned =
        SectionedUnivariateFunction::try_new(source.clone(), Range::closed(20., 30.)).unwrap();

    assert_eq!(sectioned.domain(), Range::closed(0., 10.));
    for x in [0., 2.5, 10.] {
        assert_relative_eq!(
            sectioned.value(x).unwrap(),
            source.value(20. + x).unwrap()
        );
    }
    assert!(sectioned.value(10.5).is_err());
    assert!(sectioned.value_fuzzy(10. + 5e-8, EPS).is_ok());
}

#[test]
fn sectioning_by_the_own_domain_reproduces_the_function() {
    let source: Arc<UnivariateFunction<f64>> =
        Arc::new(poly(&[1., 2.], Range::closed(2., 10.)));
    let sectioned =
        SectionedUnivariateFunction::try_new(source.clone(), source.domain()).unwrap();
    for x in [0., 3., 8.] {
        assert_relative_eq!(
            sectioned.value(x).unwrap(),
            source.value(2. + x).unwrap()
        );
    }
}

#[test]
fn sectioning_outside_the_source_domain_is_refused() {
    let source: Arc<UnivariateFunction<f64>> =
        Arc::new(poly(&[1.], Range::closed(0., 10.)));
    let result = SectionedUnivariateFunction::try_new(source, Range::closed(5., 11.));
    assert!(matches!(
        result,
        Err(FunctionError::IllegalConstruction(_))
    ));
}

#[test]
fn stacked_sum_adds_member_values() {
    let a = poly(&[1., 1.], Range::closed(0., 10.));
    let b = poly(&[2., 0., 1.], Range::closed(0., 20.));
    let sum = StackedFunction::of_sum(vec![a.clone(), b.clone()]).unwrap();

    assert_eq!(sum.domain(), Range::closed(0., 10.));
    for x in [0., 1., 5.5, 10.] {
        assert_relative_eq!(
            sum.value(x).unwrap(),
            a.value(x).unwrap() + b.value(x).unwrap()
        );
    }
    assert!(sum.value(10.5).is_err());
}

#[test]
fn stacked_weights_mix_member_values() {
    let inner = poly(&[0.], Range::all());
    let outer = poly(&[-0.15], Range::all());
    let mixed = StackedFunction::try_new(vec![inner, outer], vec![0.5, 0.5]).unwrap();
    assert_relative_eq!(mixed.value(3.).unwrap(), -0.075);
}

#[test]
fn stacked_members_with_disjoint_domains_are_refused() {
    let a = poly(&[1.], Range::closed(0., 1.));
    let b = poly(&[1.], Range::closed(2., 3.));
    assert!(matches!(
        StackedFunction::of_sum(vec![a, b]),
        Err(FunctionError::IllegalConstruction(_))
    ));
}

#[test]
fn linear_concatenation_defaults_to_a_step_function() {
    let built =
        ConcatenatedFunction::of_linear_functions(&[0., 5.], &[1., 2.], None).unwrap();
    let f = built.value;
    assert_relative_eq!(f.value(0.).unwrap(), 1.);
    assert_relative_eq!(f.value(4.9).unwrap(), 1.);
    assert_relative_eq!(f.value(5.).unwrap(), 2.);
    assert_relative_eq!(f.value(100.).unwrap(), 2.);
}

#[test]
fn shape_function_selects_the_cut_at_or_before_s() {
    let cut_a = poly(&[1.], Range::closed(-5., 5.));
    let cut_b = poly(&[2.], Range::closed(-5., 5.));
    let shape = ShapeFunction::try_new(vec![(0., cut_a), (50., cut_b)]).unwrap();

    assert_relative_eq!(shape.value_fuzzy(10., 0., EPS).unwrap(), 1.);
    assert_relative_eq!(shape.value_fuzzy(50., 0., EPS).unwrap(), 2.);
    assert_relative_eq!(shape.value_fuzzy(80., 0., EPS).unwrap(), 2.);
    // beyond the outermost lateral entry the height continues constantly
    assert_relative_eq!(shape.value_fuzzy(10., 9., EPS).unwrap(), 1.);
}
