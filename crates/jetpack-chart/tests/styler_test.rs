//! Integration tests for the configuration driven `Styler`.

use jetpack_chart::*;
use jetpack_common::test_utils::{assert_approx_eq, init_test_logging};
use jetpack_common::{Color, JetpackError, TickDirection};
use jetpack_config::{Config, ConfigCache};
use std::sync::Arc;

fn context_with_axes() -> (PlotContext, Axes) {
    init_test_logging();
    let mut ctx = PlotContext::new();
    let axes = ctx.figure().add_subplot(SubplotSpec::single());
    (ctx, axes)
}

#[test]
fn test_default_preset_breathes_and_colours() {
    let (mut ctx, axes) = context_with_axes();

    let returned = Styler::default().apply(&mut ctx, Target::none()).unwrap();

    assert!(Axes::ptr_eq(&returned, &axes));
    let state = axes.read();
    assert!(!state.spine(Side::Top).is_visible());
    assert_eq!(state.xaxis().params().color, Color::DARK_GRAY);
    assert_approx_eq(state.xlim().lower, -0.05, 1e-12);
    // font sizing is off by default
    assert!(state
        .xaxis()
        .tick_labels()
        .all(|label| (label.font_size - DEFAULT_FONT_SIZE).abs() < f64::EPSILON));
}

#[test]
fn test_default_preset_does_not_create_axes() {
    init_test_logging();
    let mut ctx = PlotContext::new();

    let result = Styler::default().apply(&mut ctx, Target::none());

    assert!(matches!(result, Err(JetpackError::NoCurrentAxes)));
    assert!(ctx.is_empty());
}

#[test]
fn test_font_size_preset_creates_axes() {
    init_test_logging();
    let mut config = Config::default();
    config.style.preset.font_size = true;
    config.style.font_size = 15.0;
    let mut ctx = PlotContext::new();

    let axes = Styler::from_config(config).apply(&mut ctx, Target::none()).unwrap();

    assert_eq!(ctx.len(), 1);
    assert!(axes
        .read()
        .yaxis()
        .tick_labels()
        .all(|label| (label.font_size - 15.0).abs() < f64::EPSILON));
}

#[test]
fn test_configured_breathe_uses_config_spines_and_direction() {
    let (mut ctx, axes) = context_with_axes();
    let mut config = Config::default();
    config.style.breathe.factor = 0.5;
    config.style.breathe.direction = TickDirection::In;
    config.style.spines.top = false;
    config.style.spines.left = true;

    Styler::from_config(config).breathe(&mut ctx, Target::none()).unwrap();

    let state = axes.read();
    assert_approx_eq(state.xlim().lower, -0.5, 1e-12);
    assert_approx_eq(state.xlim().upper, 1.5, 1e-12);
    assert!(state.spine(Side::Top).is_visible());
    // left and right hidden: y ticks removed
    assert!(state.yaxis().ticks().is_empty());
    assert_eq!(state.xaxis().params().direction, TickDirection::In);
}

#[test]
fn test_cache_updates_apply_to_next_call() {
    let (mut ctx, axes) = context_with_axes();
    let cache = Arc::new(ConfigCache::default());
    let styler = Styler::new(Arc::clone(&cache));

    styler.setcolor(&mut ctx, Target::none()).unwrap();
    assert_eq!(axes.read().yaxis().label().color, Color::DARK_GRAY);

    let mut config = (*cache.get()).clone();
    config.style.color = Color::rgb(0, 0, 255);
    cache.update(config);

    styler.setcolor(&mut ctx, Target::none()).unwrap();
    assert_eq!(axes.read().yaxis().label().color, Color::rgb(0, 0, 255));
}

#[test]
fn test_configured_nospines_and_fontsize() {
    let (mut ctx, axes) = context_with_axes();
    let mut config = Config::default();
    config.style.font_size = 20.0;
    config.style.spines.bottom = true;
    config.style.spines.top = false;
    let styler = Styler::from_config(config);

    styler.nospines(&mut ctx, Target::from(&axes)).unwrap();
    styler.setfontsize(&mut ctx, Target::from(&axes)).unwrap();

    let state = axes.read();
    assert_eq!(state.xaxis().ticks_position(), Some(Side::Top));
    assert!((state.xaxis().params().label_size - 20.0).abs() < f64::EPSILON);
}
