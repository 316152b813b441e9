// Host-side tests for section theming, lazy images and in-page links.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use crate::core::scroll::*;

#[test]
fn logo_contrasts_with_section() {
    assert_eq!(SectionTheme::Light.logo(), "dark");
    assert_eq!(SectionTheme::Dark.logo(), "light");
    assert_eq!(SectionTheme::Invert.logo(), "invert");
    assert_eq!(SectionTheme::from_attr("invert"), Some(SectionTheme::Invert));
    assert_eq!(SectionTheme::from_attr("sepia"), None);
}

#[test]
fn entering_section_sets_its_logo() {
    let mut t = ThemeTracker::new(3);
    assert_eq!(t.update(0, Some("dark"), true), Some("light"));
    assert_eq!(t.update(1, Some("light"), true), Some("dark"));
    assert_eq!(t.theme(), Some(SectionTheme::Light));
}

#[test]
fn leaving_a_section_changes_nothing() {
    let mut t = ThemeTracker::new(2);
    t.update(0, Some("light"), true);
    assert_eq!(t.update(0, Some("light"), false), None);
    assert_eq!(t.theme(), Some(SectionTheme::Light));
}

#[test]
fn repeated_report_while_active_is_ignored() {
    let mut t = ThemeTracker::new(1);
    assert_eq!(t.update(0, Some("invert"), true), Some("invert"));
    assert_eq!(t.update(0, Some("invert"), true), None);
    // re-entering after leaving applies again
    t.update(0, Some("invert"), false);
    assert_eq!(t.update(0, Some("invert"), true), Some("invert"));
}

#[test]
fn section_without_theme_inherits_previous() {
    let mut t = ThemeTracker::new(2);
    t.update(0, Some("light"), true);
    assert_eq!(t.update(1, None, true), Some("dark"));
}

#[test]
fn first_untagged_section_uses_dark_default() {
    let mut t = ThemeTracker::new(1);
    assert_eq!(t.update(0, None, true), Some("light"));
}

#[test]
fn unknown_theme_leaves_logo_alone() {
    let mut t = ThemeTracker::new(3);
    t.update(0, Some("light"), true);
    assert_eq!(t.update(1, Some("sepia"), true), None);
    assert_eq!(t.theme(), None);
    // an untagged section after it has nothing to inherit
    assert_eq!(t.update(2, None, true), None);
}

#[test]
fn out_of_range_section_is_ignored() {
    let mut t = ThemeTracker::new(1);
    assert_eq!(t.update(5, Some("light"), true), None);
    assert_eq!(t.theme(), Some(SectionTheme::Dark));
}

#[test]
fn lazy_image_needs_a_source() {
    assert!(LazyImage::from_data_src(None).is_none());
    assert!(LazyImage::from_data_src(Some("  ")).is_none());
    let img = LazyImage::from_data_src(Some(" /img/hero.webp ")).unwrap();
    assert_eq!(img.src(), "/img/hero.webp");
    assert_eq!(img.state(), LazyState::Waiting);
}

#[test]
fn lazy_image_loads_once_and_swaps_once() {
    let mut img = LazyImage::from_data_src(Some("a.webp")).unwrap();
    // nothing to swap before a load started
    assert!(!img.finish_load());

    assert_eq!(img.begin_load(), Some("a.webp"));
    assert_eq!(img.state(), LazyState::Loading);
    // scrolling back into range while loading starts nothing new
    assert_eq!(img.begin_load(), None);

    assert!(img.finish_load());
    assert_eq!(img.state(), LazyState::Swapped);
    assert!(!img.finish_load());
    assert_eq!(img.begin_load(), None);
}

#[test]
fn preload_starts_half_an_image_early() {
    assert_eq!(preload_margin(400.0), "0px 0px 200px 0px");
    assert_eq!(preload_margin(301.0), "0px 0px 151px 0px");
    assert_eq!(preload_margin(0.0), "0px 0px 0px 0px");
    assert_eq!(preload_margin(-10.0), "0px 0px 0px 0px");
}

#[test]
fn cover_box_styles() {
    let cover = CoverBox {
        top: 12,
        left: 0,
        width: 640,
        height: 360,
    };
    let styles = cover.styles();
    assert_eq!(styles[0], ("position", "absolute".to_string()));
    assert_eq!(styles[1], ("top", "12px".to_string()));
    assert_eq!(styles[3], ("width", "640px".to_string()));
    assert_eq!(styles[4], ("height", "360px".to_string()));
}

#[test]
fn scroll_target_is_the_fragment() {
    assert_eq!(scroll_target("#services"), Some("services"));
    assert_eq!(scroll_target(" /about#team "), Some("team"));
    assert_eq!(scroll_target("#"), None);
    assert_eq!(scroll_target("/contact"), None);
}
