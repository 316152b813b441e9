// Directional reveal/hide slides for a hover panel.
//
// The outer panel and its inner image layer always move in opposite
// directions, which gives the parallax look. Starting a slide kills the one in
// flight instead of queueing behind it.

use super::pointer::Direction;
use super::tween::{Ease, Tween};
use crate::constants::{PANEL_Z_REST, SLIDE_DURATION_SEC, SLIDE_OFFSET_PCT};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideKind {
    Reveal { z_index: i32 },
    Hide,
}

#[derive(Clone, Debug)]
struct SlideTransition {
    kind: SlideKind,
    inner: Tween,
    image: Tween,
    started: bool,
}

/// Visual state of one reveal panel, in percent offsets.
#[derive(Clone, Debug)]
pub struct PanelState {
    pub inner_offset: f32,
    pub image_offset: f32,
    pub opacity: f32,
    pub z_index: i32,
    transition: Option<SlideTransition>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            inner_offset: 0.0,
            image_offset: 0.0,
            opacity: 0.0,
            z_index: PANEL_Z_REST,
            transition: None,
        }
    }
}

impl PanelState {
    pub fn show(&mut self, direction: Direction, item_count: usize) {
        self.transition = None;
        let side = if direction.is_left() { -1.0 } else { 1.0 };
        self.inner_offset = side * SLIDE_OFFSET_PCT;
        self.image_offset = -side * SLIDE_OFFSET_PCT;
        self.transition = Some(SlideTransition {
            kind: SlideKind::Reveal {
                z_index: item_count as i32,
            },
            inner: Tween::new(self.inner_offset, 0.0, SLIDE_DURATION_SEC, Ease::SineOut),
            image: Tween::new(self.image_offset, 0.0, SLIDE_DURATION_SEC, Ease::SineOut),
            started: false,
        });
    }

    /// Slides out from wherever the panel currently sits.
    pub fn hide(&mut self, direction: Direction) {
        self.transition = None;
        let side = if direction.is_left() { 1.0 } else { -1.0 };
        self.transition = Some(SlideTransition {
            kind: SlideKind::Hide,
            inner: Tween::new(
                self.inner_offset,
                side * SLIDE_OFFSET_PCT,
                SLIDE_DURATION_SEC,
                Ease::SineOut,
            ),
            image: Tween::new(
                self.image_offset,
                -side * SLIDE_OFFSET_PCT,
                SLIDE_DURATION_SEC,
                Ease::SineOut,
            ),
            started: false,
        });
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn active_kind(&self) -> Option<SlideKind> {
        self.transition.as_ref().map(|t| t.kind)
    }

    /// Advance the active slide. Returns whether it is still running.
    pub fn tick(&mut self, dt_sec: f32) -> bool {
        let Some(t) = self.transition.as_mut() else {
            return false;
        };
        if !t.started {
            t.started = true;
            match t.kind {
                SlideKind::Reveal { z_index } => {
                    self.opacity = 1.0;
                    self.z_index = z_index;
                }
                SlideKind::Hide => self.z_index = PANEL_Z_REST,
            }
        }
        self.inner_offset = t.inner.advance(dt_sec);
        self.image_offset = t.image.advance(dt_sec);
        if t.inner.is_finished() && t.image.is_finished() {
            // opacity drops only once the exit slide has fully played
            if t.kind == SlideKind::Hide {
                self.opacity = 0.0;
            }
            self.transition = None;
            return false;
        }
        true
    }
}
