//! Integration tests for axes resolution against a `PlotContext`.

use jetpack_chart::*;
use jetpack_common::test_utils::init_test_logging;
use jetpack_common::JetpackError;

#[test]
fn test_create_if_absent_in_empty_context() {
    init_test_logging();
    let mut ctx = PlotContext::new();

    let (figure, axes) = resolve(&mut ctx, Target::none(), Resolution::CreateIfAbsent).unwrap();

    assert_eq!(ctx.len(), 1);
    assert_eq!(figure.axes().len(), 1);
    assert!(Figure::ptr_eq(&ctx.current_figure().unwrap(), &figure));
    assert!(Axes::ptr_eq(&ctx.current_axes().unwrap(), &axes));
    assert_eq!(axes.read().spec(), SubplotSpec::single());
}

#[test]
fn test_create_if_absent_always_creates_without_target() {
    init_test_logging();
    let mut ctx = PlotContext::new();
    let (first, _) = resolve(&mut ctx, Target::none(), Resolution::CreateIfAbsent).unwrap();
    let (second, _) = resolve(&mut ctx, Target::none(), Resolution::CreateIfAbsent).unwrap();

    assert!(!Figure::ptr_eq(&first, &second));
    assert_eq!(ctx.len(), 2);
}

#[test]
fn test_never_create_in_empty_context() {
    init_test_logging();
    let mut ctx = PlotContext::new();

    let result = resolve(&mut ctx, Target::none(), Resolution::NeverCreate);

    assert!(matches!(result, Err(JetpackError::NoCurrentAxes)));
    assert!(ctx.is_empty());
}

#[test]
fn test_never_create_with_figure_but_no_axes() {
    init_test_logging();
    let mut ctx = PlotContext::new();
    let figure = ctx.figure();

    let result = resolve(&mut ctx, Target::none(), Resolution::NeverCreate);

    assert!(matches!(result, Err(JetpackError::NoCurrentAxes)));
    assert!(figure.axes().is_empty());
}

#[test]
fn test_never_create_follows_current_axes() {
    init_test_logging();
    let mut ctx = PlotContext::new();
    let figure = ctx.figure();
    let left = figure.add_subplot(SubplotSpec::from_code(121).unwrap());
    let right = figure.add_subplot(SubplotSpec::from_code(122).unwrap());

    let (_, found) = resolve(&mut ctx, Target::none(), Resolution::NeverCreate).unwrap();
    assert!(Axes::ptr_eq(&found, &right));

    ctx.set_current_axes(&left).unwrap();
    let (_, found) = resolve(&mut ctx, Target::none(), Resolution::NeverCreate).unwrap();
    assert!(Axes::ptr_eq(&found, &left));
}

#[test]
fn test_named_axes_and_figure_are_used_as_given() {
    init_test_logging();
    let mut ctx = PlotContext::new();
    let figure = ctx.figure();
    let axes = figure.add_subplot(SubplotSpec::single());
    let target = Target::from_axes(axes.clone()).with_figure(figure.clone());

    let (found_figure, found_axes) =
        resolve(&mut ctx, target, Resolution::CreateIfAbsent).unwrap();

    assert!(Figure::ptr_eq(&found_figure, &figure));
    assert!(Axes::ptr_eq(&found_axes, &axes));
    assert_eq!(figure.axes().len(), 1);
}

#[test]
fn test_target_accessors() {
    init_test_logging();
    let figure = Figure::new(FigureId(5));
    let axes = figure.add_subplot(SubplotSpec::single());

    let target = Target::none();
    assert!(target.axes().is_none() && target.figure().is_none());

    let target = Target::from(&figure).with_axes(axes.clone());
    assert!(Axes::ptr_eq(target.axes().unwrap(), &axes));
    assert_eq!(target.figure().unwrap().id(), FigureId(5));
}
