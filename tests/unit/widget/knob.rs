use super::*;
use crate::test_support::{CountingGraphic, approx};
use crate::widget::config::OutOfRange;

use std::f64::consts::{FRAC_PI_2, PI};

fn half_turn() -> KnobConfig {
    KnobConfig::new(0.0, 10.0, 0.0, PI)
}

fn apply(knob: &SvgKnob<CountingGraphic>, p: Vec2) -> Vec2 {
    (knob.transform() * kurbo::Point::from(p)).into()
}

#[test]
fn midpoint_value_rotates_quarter_turn_about_center() {
    let mut knob = SvgKnob::new(half_turn(), CountingGraphic::new(40.0, 20.0)).unwrap();
    knob.set_value(5.0).unwrap();
    knob.step().unwrap();

    assert!((knob.angle() - FRAC_PI_2).abs() < 1e-12);

    let center = Vec2::new(20.0, 10.0);
    assert!(approx(apply(&knob, center), center));
    // A point right of center swings below it (clockwise, y down).
    assert!(approx(
        apply(&knob, Vec2::new(30.0, 10.0)),
        Vec2::new(20.0, 20.0)
    ));
}

#[test]
fn steady_state_reuses_cache() {
    let face = CountingGraphic::new(16.0, 16.0);
    let mut knob = SvgKnob::new(half_turn(), face.clone()).unwrap();

    assert_eq!(knob.step().unwrap(), StepOutcome::Rendered);
    assert_eq!(knob.step().unwrap(), StepOutcome::Reused);
    assert_eq!(face.renders(), 1);
    assert!(knob.cached().is_some());
}

#[test]
fn one_mutation_one_redraw() {
    let face = CountingGraphic::new(16.0, 16.0);
    let mut knob = SvgKnob::new(half_turn(), face.clone()).unwrap();
    knob.step().unwrap();

    knob.set_value(3.0).unwrap();
    assert!(knob.is_dirty());
    assert!(knob.cached().is_none());
    assert_eq!(knob.step().unwrap(), StepOutcome::Rendered);
    assert_eq!(knob.step().unwrap(), StepOutcome::Reused);
    assert_eq!(face.renders(), 2);
    assert_eq!(face.last_transform(), Some(knob.transform()));
}

#[test]
fn assigning_the_same_value_does_not_redraw() {
    let face = CountingGraphic::new(16.0, 16.0);
    let mut knob = SvgKnob::new(half_turn(), face.clone()).unwrap();
    knob.set_value(4.0).unwrap();
    knob.step().unwrap();

    knob.set_value(4.0).unwrap();
    assert!(!knob.is_dirty());
    knob.step().unwrap();
    assert_eq!(face.renders(), 1);
}

#[test]
fn set_graphic_adopts_natural_size_for_both_boxes() {
    let mut knob = SvgKnob::new(half_turn(), CountingGraphic::new(16.0, 16.0)).unwrap();
    knob.set_box_size(Vec2::new(64.0, 64.0));
    knob.step().unwrap();

    let old = knob.set_graphic(CountingGraphic::new(30.0, 12.0)).unwrap();
    assert_eq!(old.natural_size(), Vec2::new(16.0, 16.0));
    assert_eq!(knob.box_size(), Vec2::new(30.0, 12.0));
    assert_eq!(knob.graphic().natural_size(), Vec2::new(30.0, 12.0));
    assert!(knob.is_dirty());
}

#[test]
fn degenerate_graphic_is_rejected() {
    assert!(SvgKnob::new(half_turn(), CountingGraphic::new(0.0, 10.0)).is_err());

    let mut knob = SvgKnob::new(half_turn(), CountingGraphic::new(10.0, 10.0)).unwrap();
    let err = knob.set_graphic(CountingGraphic::new(10.0, f64::NAN)).unwrap_err();
    assert!(matches!(err, KnobError::Validation(_)));
    assert_eq!(knob.box_size(), Vec2::new(10.0, 10.0));
}

#[test]
fn resize_scales_graphic_and_keeps_pivot_at_box_center() {
    let face = CountingGraphic::new(20.0, 10.0);
    let mut knob = SvgKnob::new(half_turn(), face.clone()).unwrap();
    knob.set_box_size(Vec2::new(60.0, 20.0));
    knob.set_value(10.0).unwrap();
    knob.step().unwrap();

    assert_eq!(face.last_target(), Some((60, 20)));
    // The unscaled center lands on the center of the display box.
    assert!(approx(apply(&knob, Vec2::new(10.0, 5.0)), Vec2::new(30.0, 10.0)));
    // Half turn: the top-left corner ends up at the bottom-right of the box.
    assert!(approx(apply(&knob, Vec2::ZERO), Vec2::new(60.0, 20.0)));
}

#[test]
fn resize_to_same_size_is_not_a_change() {
    let face = CountingGraphic::new(20.0, 20.0);
    let mut knob = SvgKnob::new(half_turn(), face.clone()).unwrap();
    knob.step().unwrap();
    knob.set_box_size(Vec2::new(20.0, 20.0));
    knob.step().unwrap();
    assert_eq!(face.renders(), 1);
}

#[test]
fn empty_box_skips_render() {
    let face = CountingGraphic::new(20.0, 20.0);
    let mut knob = SvgKnob::new(half_turn(), face.clone()).unwrap();
    knob.set_box_size(Vec2::new(0.0, 0.0));
    assert_eq!(knob.step().unwrap(), StepOutcome::Skipped);
    assert_eq!(face.renders(), 0);
    assert!(knob.cached().is_none());
}

#[test]
fn clamp_policy_limits_angle() {
    let mut knob = SvgKnob::new(half_turn(), CountingGraphic::new(8.0, 8.0)).unwrap();
    knob.set_value(25.0).unwrap();
    knob.step().unwrap();
    assert_eq!(knob.value(), 10.0);
    assert!((knob.angle() - PI).abs() < 1e-12);
}

#[test]
fn extrapolate_policy_overshoots_angle() {
    let cfg = half_turn().with_out_of_range(OutOfRange::Extrapolate);
    let mut knob = SvgKnob::new(cfg, CountingGraphic::new(8.0, 8.0)).unwrap();
    knob.set_value(20.0).unwrap();
    knob.step().unwrap();
    assert!((knob.angle() - 2.0 * PI).abs() < 1e-12);
}

#[test]
fn infinite_value_is_refused_and_cache_stays_clean() {
    let cfg = half_turn().with_out_of_range(OutOfRange::Extrapolate);
    let face = CountingGraphic::new(8.0, 8.0);
    let mut knob = SvgKnob::new(cfg, face.clone()).unwrap();
    knob.set_value(5.0).unwrap();
    knob.step().unwrap();

    assert!(knob.set_value(f64::INFINITY).is_err());
    assert!(!knob.is_dirty());
    assert_eq!(knob.value(), 5.0);
    assert_eq!(knob.step().unwrap(), StepOutcome::Reused);
    assert!((knob.angle() - FRAC_PI_2).abs() < 1e-12);
    assert!(knob.cached().is_some());
    assert_eq!(face.renders(), 1);
}

#[test]
fn reject_policy_keeps_cache_clean() {
    let cfg = half_turn().with_out_of_range(OutOfRange::Reject);
    let mut knob = SvgKnob::new(cfg, CountingGraphic::new(8.0, 8.0)).unwrap();
    knob.step().unwrap();
    assert!(knob.set_value(-1.0).is_err());
    assert!(!knob.is_dirty());
}

#[test]
fn reset_redraws_at_default_angle() {
    let cfg = half_turn().with_default_value(10.0);
    let face = CountingGraphic::new(8.0, 8.0);
    let mut knob = SvgKnob::new(cfg, face.clone()).unwrap();
    knob.step().unwrap();
    assert!((knob.angle() - PI).abs() < 1e-12);

    knob.set_value(0.0).unwrap();
    knob.step().unwrap();
    assert!(knob.angle().abs() < 1e-12);

    knob.reset();
    knob.step().unwrap();
    assert!((knob.angle() - PI).abs() < 1e-12);
    assert_eq!(face.renders(), 3);
    assert_eq!(knob.stats().renders, 3);
}
