// Host-side tests for tweens and the reveal/hide slides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod math {
        include!("../src/core/math.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
    pub mod slide {
        include!("../src/core/slide.rs");
    }
}

use crate::core::pointer::Direction;
use crate::core::slide::{PanelState, SlideKind};
use crate::core::tween::{stagger, Ease, Tween};

const EPS: f32 = 1e-4;
const FRAME: f32 = 1.0 / 60.0;

fn run_to_end(panel: &mut PanelState) -> usize {
    let mut frames = 0;
    while panel.tick(FRAME) {
        frames += 1;
        assert!(frames < 1000, "slide never finished");
    }
    frames
}

#[test]
fn eases_hit_both_endpoints() {
    for ease in [Ease::Linear, Ease::SineOut, Ease::Power1Out, Ease::ExpoOut] {
        assert!(ease.apply(0.0).abs() < EPS, "{:?}", ease);
        assert!((ease.apply(1.0) - 1.0).abs() < EPS, "{:?}", ease);
        // out-eases run ahead of linear
        assert!(ease.apply(0.5) >= 0.5, "{:?}", ease);
    }
    assert!((Ease::Power1Out.apply(0.5) - 0.75).abs() < EPS);
    assert!((Ease::SineOut.apply(0.5) - 0.70710677).abs() < EPS);
}

#[test]
fn ease_input_is_clamped() {
    assert_eq!(Ease::Linear.apply(-1.0), 0.0);
    assert_eq!(Ease::Linear.apply(3.0), 1.0);
}

#[test]
fn tween_runs_from_start_to_end() {
    let mut t = Tween::new(100.0, 0.0, 0.2, Ease::Linear);
    assert_eq!(t.value(), 100.0);
    assert!((t.advance(0.1) - 50.0).abs() < EPS);
    assert!(!t.is_finished());
    assert_eq!(t.advance(0.5), 0.0);
    assert!(t.is_finished());
}

#[test]
fn tween_waits_for_its_delay() {
    let mut t = Tween::new(0.0, 1.0, 1.0, Ease::Linear).with_delay(0.5);
    assert_eq!(t.advance(0.25), 0.0);
    assert!(!t.has_started());
    assert!((t.advance(0.75) - 0.5).abs() < EPS);
    assert!(t.has_started());
}

#[test]
fn zero_duration_finishes_immediately() {
    let mut t = Tween::new(3.0, 9.0, 0.0, Ease::SineOut);
    assert!((t.advance(0.0) - 9.0).abs() < EPS);
    assert!(t.is_finished());
}

#[test]
fn stagger_offsets_each_tween() {
    let tweens = stagger(4, 100.0, 0.0, 1.2, 0.06, Ease::ExpoOut);
    assert_eq!(tweens.len(), 4);
    for (i, t) in tweens.iter().enumerate() {
        assert!((t.delay - i as f32 * 0.06).abs() < EPS);
        assert_eq!(t.duration, 1.2);
        assert_eq!(t.value(), 100.0);
    }
}

#[test]
fn reveal_enters_from_the_side_of_travel() {
    let mut panel = PanelState::default();
    panel.show(Direction::Left, 5);
    assert_eq!(panel.inner_offset, -100.0);
    assert_eq!(panel.image_offset, 100.0);

    let mut panel = PanelState::default();
    panel.show(Direction::Right, 5);
    assert_eq!(panel.inner_offset, 100.0);
    assert_eq!(panel.image_offset, -100.0);
}

#[test]
fn reveal_raises_and_shows_panel_on_start() {
    let mut panel = PanelState::default();
    assert_eq!(panel.opacity, 0.0);
    assert_eq!(panel.z_index, 1);

    panel.show(Direction::Right, 6);
    assert_eq!(panel.opacity, 0.0);
    assert_eq!(panel.active_kind(), Some(SlideKind::Reveal { z_index: 6 }));

    assert!(panel.tick(FRAME));
    assert_eq!(panel.opacity, 1.0);
    assert_eq!(panel.z_index, 6);

    let frames = run_to_end(&mut panel);
    // 0.2s at 60fps
    assert!((10..=13).contains(&frames), "frames={}", frames);
    assert!(panel.inner_offset.abs() < EPS);
    assert!(panel.image_offset.abs() < EPS);
    assert_eq!(panel.opacity, 1.0);
    assert!(!panel.is_animating());
}

#[test]
fn hide_keeps_panel_visible_until_complete() {
    let mut panel = PanelState::default();
    panel.show(Direction::Right, 3);
    run_to_end(&mut panel);

    panel.hide(Direction::Right);
    panel.tick(FRAME);
    assert_eq!(panel.z_index, 1);
    assert_eq!(panel.opacity, 1.0);
    while panel.tick(FRAME) {
        assert_eq!(panel.opacity, 1.0);
    }
    assert_eq!(panel.opacity, 0.0);
    assert!((panel.inner_offset - (-100.0)).abs() < EPS);
    assert!((panel.image_offset - 100.0).abs() < EPS);
}

#[test]
fn hide_exits_toward_the_opposite_side_when_moving_left() {
    let mut panel = PanelState::default();
    panel.show(Direction::Left, 3);
    run_to_end(&mut panel);
    panel.hide(Direction::Left);
    run_to_end(&mut panel);
    assert!((panel.inner_offset - 100.0).abs() < EPS);
    assert!((panel.image_offset - (-100.0)).abs() < EPS);
}

#[test]
fn hide_cancels_reveal_without_leaking_its_transform() {
    let mut panel = PanelState::default();
    panel.show(Direction::Right, 3);
    for _ in 0..4 {
        panel.tick(FRAME);
    }
    let mid = panel.inner_offset;
    assert!(mid > 0.0 && mid < 100.0, "mid={}", mid);

    panel.hide(Direction::Right);
    assert_eq!(panel.active_kind(), Some(SlideKind::Hide));
    // slides out from where the reveal stopped
    panel.tick(0.0);
    assert!((panel.inner_offset - mid).abs() < EPS);

    run_to_end(&mut panel);
    assert!((panel.inner_offset - (-100.0)).abs() < EPS);
    assert!((panel.image_offset - 100.0).abs() < EPS);
    assert_eq!(panel.opacity, 0.0);
    assert_eq!(panel.z_index, 1);
}

#[test]
fn reentry_cancels_hide_before_it_can_clear_opacity() {
    let mut panel = PanelState::default();
    panel.show(Direction::Right, 4);
    run_to_end(&mut panel);
    panel.hide(Direction::Right);
    panel.tick(FRAME);
    panel.tick(FRAME);

    panel.show(Direction::Left, 4);
    assert_eq!(panel.inner_offset, -100.0);
    run_to_end(&mut panel);
    assert_eq!(panel.opacity, 1.0);
    assert_eq!(panel.z_index, 4);
    assert!(panel.inner_offset.abs() < EPS);
}

#[test]
fn tick_without_transition_is_idle() {
    let mut panel = PanelState::default();
    assert!(!panel.tick(FRAME));
    assert_eq!(panel.active_kind(), None);
}
