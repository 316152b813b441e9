// Cursor-follow state for one hover-reveal menu item.

use super::math::{lerp, map_range};
use super::pointer::{Direction, PointerTracker};
use super::slide::PanelState;
use crate::constants::{
    BRIGHTNESS_MAX, BRIGHTNESS_REST, CHANNEL_SMOOTHING, POINTER_DISTANCE_MAX, ROTATION_MAX_DEG,
};

/// One eased scalar. `current` is this frame's target, `previous` is what
/// actually gets applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatableProperty {
    pub previous: f32,
    pub current: f32,
    pub smoothing: f32,
}

impl AnimatableProperty {
    pub fn new(value: f32) -> Self {
        Self {
            previous: value,
            current: value,
            smoothing: CHANNEL_SMOOTHING,
        }
    }

    #[inline]
    pub fn snap(&mut self) {
        self.previous = self.current;
    }

    /// Close `smoothing` of the remaining gap toward `current`.
    #[inline]
    pub fn ease(&mut self) {
        self.previous = lerp(self.previous, self.current, self.smoothing);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channels {
    pub translate_x: AnimatableProperty,
    pub translate_y: AnimatableProperty,
    pub rotation: AnimatableProperty,
    pub brightness: AnimatableProperty,
}

impl Default for Channels {
    fn default() -> Self {
        Self {
            translate_x: AnimatableProperty::new(0.0),
            translate_y: AnimatableProperty::new(0.0),
            rotation: AnimatableProperty::new(0.0),
            brightness: AnimatableProperty::new(BRIGHTNESS_REST),
        }
    }
}

impl Channels {
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut AnimatableProperty> {
        [
            &mut self.translate_x,
            &mut self.translate_y,
            &mut self.rotation,
            &mut self.brightness,
        ]
        .into_iter()
    }

    pub fn transform(&self) -> PanelTransform {
        PanelTransform {
            x: self.translate_x.previous,
            y: self.translate_y.previous,
            rotation: self.rotation.previous,
            brightness: self.brightness.previous,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Client rects of the menu item and its floating panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ItemBounds {
    pub item: Bounds,
    pub panel: Bounds,
}

/// Eased values written to the panel each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelTransform {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub brightness: f32,
}

impl PanelTransform {
    pub fn css_transform(&self) -> String {
        format!(
            "translate({:.3}px, {:.3}px) rotate({:.3}deg)",
            self.x, self.y, self.rotation
        )
    }

    pub fn css_filter(&self) -> String {
        format!("brightness({:.3})", self.brightness)
    }
}

/// Per-item animation-frame token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameSlot {
    #[default]
    Idle,
    Scheduled(i32),
}

impl FrameSlot {
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        matches!(self, FrameSlot::Scheduled(_))
    }

    /// Request a frame unless one is already pending. Returns whether a new
    /// request was made.
    pub fn schedule_with(&mut self, request: impl FnOnce() -> Option<i32>) -> bool {
        if self.is_scheduled() {
            return false;
        }
        match request() {
            Some(handle) => {
                *self = FrameSlot::Scheduled(handle);
                true
            }
            None => false,
        }
    }

    /// Drop the pending request, handing back its handle for cancellation.
    pub fn take(&mut self) -> Option<i32> {
        match std::mem::take(self) {
            FrameSlot::Scheduled(handle) => Some(handle),
            FrameSlot::Idle => None,
        }
    }

    /// The pending frame has run.
    #[inline]
    pub fn clear(&mut self) {
        *self = FrameSlot::Idle;
    }
}

/// Model of one hover-reveal menu entry.
#[derive(Clone, Debug)]
pub struct HoverItem {
    pub index: usize,
    pub image_url: String,
    pub channels: Channels,
    pub panel: PanelState,
    pub frame: FrameSlot,
    first_frame: bool,
    hovered: bool,
    bounds: Option<ItemBounds>,
}

impl HoverItem {
    pub fn new(index: usize, image_url: impl Into<String>) -> Self {
        Self {
            index,
            image_url: image_url.into(),
            channels: Channels::default(),
            panel: PanelState::default(),
            frame: FrameSlot::Idle,
            first_frame: false,
            hovered: false,
            bounds: None,
        }
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[inline]
    pub fn is_first_frame(&self) -> bool {
        self.first_frame
    }

    /// Start a hover session: the next frame snaps and re-measures.
    pub fn begin_hover(&mut self) {
        self.hovered = true;
        self.first_frame = true;
        self.bounds = None;
    }

    pub fn enter(&mut self, direction: Direction, item_count: usize) {
        self.panel.show(direction, item_count);
        self.begin_hover();
    }

    /// End the hover session. Returns the pending frame handle, if any, for
    /// the caller to cancel.
    pub fn leave(&mut self, direction: Direction) -> Option<i32> {
        self.hovered = false;
        let pending = self.frame.take();
        self.panel.hide(direction);
        pending
    }

    /// One frame of the follow loop. `measure` is only called on the first
    /// frame of a hover session.
    pub fn render(
        &mut self,
        tracker: &mut PointerTracker,
        measure: impl FnOnce() -> ItemBounds,
    ) -> PanelTransform {
        let first = self.first_frame;
        let bounds = match self.bounds {
            Some(b) if !first => b,
            _ => {
                let b = measure();
                self.bounds = Some(b);
                b
            }
        };

        let step = tracker.advance();
        let pointer = tracker.current();
        let direction = Direction::from_delta_x(step.delta.x);

        self.channels.translate_x.current =
            (pointer.x - bounds.item.left).abs() - bounds.panel.width / 2.0;
        self.channels.translate_y.current =
            (pointer.y - bounds.item.top).abs() - bounds.panel.height / 2.0;

        self.channels.rotation.current = if first {
            0.0
        } else {
            let max = if direction.is_left() {
                ROTATION_MAX_DEG
            } else {
                -ROTATION_MAX_DEG
            };
            map_range(step.distance, 0.0, POINTER_DISTANCE_MAX, 0.0, max)
        };
        self.channels.brightness.current = if first {
            BRIGHTNESS_REST
        } else {
            map_range(
                step.distance,
                0.0,
                POINTER_DISTANCE_MAX,
                BRIGHTNESS_REST,
                BRIGHTNESS_MAX,
            )
        };

        for channel in self.channels.iter_mut() {
            if first {
                channel.snap();
            } else {
                channel.ease();
            }
        }

        self.first_frame = false;
        self.channels.transform()
    }
}
