// Host-side tests for toasts, navigation and the loading screen.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod math {
        include!("../src/core/math.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
    pub mod loader {
        include!("../src/core/loader.rs");
    }
    pub mod nav {
        include!("../src/core/nav.rs");
    }
    pub mod toast {
        include!("../src/core/toast.rs");
    }
}

use crate::core::loader::{LoaderPhase, LoaderProgress, MatrixRain};
use crate::core::nav::NavState;
use crate::core::toast::{ToastKind, ToastOptions, ToastStack};
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPS: f32 = 1e-3;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn with_id(id: &str) -> ToastOptions {
    ToastOptions {
        id: Some(id.to_string()),
        ..ToastOptions::default()
    }
}

#[test]
fn toast_defaults() {
    let mut stack = ToastStack::new();
    let plan = stack.push(&ToastOptions::default(), &mut rng());
    assert!(plan.id.starts_with("toast-"));
    assert_eq!(plan.id.len(), "toast-".len() + 16);
    assert_eq!(plan.duration_ms, 5000);
    assert_eq!(plan.class_name, "toast info");
    assert_eq!(plan.evict, None);
    assert!(stack.contains(&plan.id));
}

#[test]
fn toast_kind_and_duration() {
    let mut stack = ToastStack::new();
    let mut options = ToastOptions::kind(ToastKind::Error);
    options.duration_ms = Some(1200);
    let plan = stack.push(&options, &mut rng());
    assert_eq!(plan.class_name, "toast error");
    assert_eq!(plan.duration_ms, 1200);
    assert_eq!(ToastKind::Success.class_name(), "success");
}

#[test]
fn generated_ids_differ() {
    let mut stack = ToastStack::new();
    let mut r = rng();
    let a = stack.push(&ToastOptions::default(), &mut r).id;
    let b = stack.push(&ToastOptions::default(), &mut r).id;
    assert_ne!(a, b);
    assert_eq!(stack.len(), 2);
}

#[test]
fn full_stack_evicts_oldest() {
    let mut stack = ToastStack::new();
    let mut r = rng();
    for id in ["a", "b"] {
        let mut options = with_id(id);
        options.max_stack = Some(2);
        assert_eq!(stack.push(&options, &mut r).evict, None);
    }
    let mut options = with_id("c");
    options.max_stack = Some(2);
    let plan = stack.push(&options, &mut r);
    assert_eq!(plan.evict.as_deref(), Some("a"));
    assert_eq!(stack.len(), 2);
    assert!(!stack.contains("a"));
    assert!(stack.contains("c"));
}

#[test]
fn unbounded_stack_never_evicts() {
    let mut stack = ToastStack::new();
    let mut r = rng();
    for _ in 0..20 {
        assert_eq!(stack.push(&ToastOptions::default(), &mut r).evict, None);
    }
    assert_eq!(stack.len(), 20);
}

#[test]
fn reused_id_replaces_entry() {
    let mut stack = ToastStack::new();
    let mut r = rng();
    stack.push(&with_id("a"), &mut r);
    stack.push(&with_id("b"), &mut r);
    stack.push(&with_id("a"), &mut r);
    assert_eq!(stack.len(), 2);
}

#[test]
fn toast_removal() {
    let mut stack = ToastStack::new();
    stack.push(&with_id("a"), &mut rng());
    assert!(stack.remove("a"));
    assert!(!stack.remove("a"));
    assert!(!stack.remove("missing"));
    assert!(stack.is_empty());
}

#[test]
fn nav_toggles_and_closes() {
    let mut nav = NavState::default();
    assert!(!nav.is_open());
    assert_eq!(nav.label(), "Menu");

    assert!(nav.toggle());
    assert_eq!(nav.label(), "Close");

    assert!(nav.close());
    assert!(!nav.is_open());
    // closing a closed menu reports nothing to do
    assert!(!nav.close());
}

#[test]
fn loader_fills_toward_fake_target() {
    let mut loader = LoaderProgress::new();
    assert_eq!(loader.phase(), LoaderPhase::Filling);
    assert_eq!(loader.percent_label(), "0%");

    loader.tick(1.5);
    assert!((loader.value() - 67.5).abs() < EPS);
    assert_eq!(loader.percent_label(), "67%");

    // never passes the fake target while the page is loading
    for _ in 0..600 {
        assert_eq!(loader.tick(1.0 / 60.0), LoaderPhase::Filling);
    }
    assert!((loader.value() - 90.0).abs() < EPS);
    assert_eq!(loader.opacity(), 1.0);
}

#[test]
fn loader_finishes_then_fades() {
    let mut loader = LoaderProgress::new();
    loader.tick(1.5);
    loader.finish();
    assert_eq!(loader.phase(), LoaderPhase::Finishing);

    // resumes from where the fake fill stopped
    loader.tick(0.5);
    assert!((loader.value() - (67.5 + 32.5 * 0.75)).abs() < EPS);
    assert_eq!(loader.tick(0.6), LoaderPhase::Fading);
    assert_eq!(loader.percent_label(), "100%");
    assert_eq!(loader.opacity(), 1.0);

    loader.tick(0.5);
    assert!((loader.opacity() - 0.25).abs() < EPS);
    assert_eq!(loader.tick(0.6), LoaderPhase::Done);
    assert!(loader.opacity().abs() < EPS);
}

#[test]
fn loader_finish_is_ignored_after_filling() {
    let mut loader = LoaderProgress::new();
    loader.finish();
    loader.tick(2.0);
    assert_eq!(loader.phase(), LoaderPhase::Fading);
    loader.finish();
    assert_eq!(loader.phase(), LoaderPhase::Fading);
}

#[test]
fn matrix_columns_follow_width() {
    assert_eq!(MatrixRain::new(0.0).columns(), 1);
    assert_eq!(MatrixRain::new(100.0).columns(), 6);
    assert_eq!(MatrixRain::new(1919.0).columns(), 96);
}

#[test]
fn matrix_glyphs_fall_and_reset() {
    let mut rain = MatrixRain::new(200.0);
    let mut r = rng();
    let first = rain.step(&mut r);
    assert_eq!(first.len(), rain.columns());
    for (i, g) in first.iter().enumerate() {
        assert!(g.ch.is_ascii());
        assert_eq!(g.x, i as f64 * 20.0);
        assert_eq!(g.y, 0.0);
    }

    // each column either drops one row or starts over at the top
    let mut previous = first;
    let mut saw_reset = false;
    for _ in 0..2000 {
        let glyphs = rain.step(&mut r);
        for (before, after) in previous.iter().zip(&glyphs) {
            assert_eq!(before.x, after.x);
            assert!(after.y == 0.0 || after.y == before.y + 20.0);
            assert!(after.y <= 100.0 + 10_000.0 + 20.0);
            saw_reset |= after.y == 0.0 && before.y > 0.0;
        }
        previous = glyphs;
    }
    assert!(saw_reset);
}

#[test]
fn reused_id_is_known_before_it_is_pushed_again() {
    let mut stack = ToastStack::new();
    let mut r = rng();
    stack.push(&with_id("saved"), &mut r);
    assert!(stack.contains("saved"));
    assert!(!stack.contains("other"));

    // the view drops the stale element, then pushes the replacement
    stack.push(&with_id("saved"), &mut r);
    assert_eq!(stack.len(), 1);
    assert!(stack.remove("saved"));
    assert!(stack.is_empty());
}
