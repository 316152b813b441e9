use super::math::clamp;
use crate::constants::POINTER_DISTANCE_MAX;
use glam::Vec2;

/// Horizontal direction of the last pointer step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Sign of `prev.x - cur.x`: negative is `Left`, zero and positive are `Right`.
    #[inline]
    pub fn from_delta_x(dx: f32) -> Self {
        if dx < 0.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    #[inline]
    pub fn is_left(self) -> bool {
        self == Direction::Left
    }
}

/// Result of advancing the tracker by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerStep {
    /// `|prev.x - cur.x|` clamped to `[0, POINTER_DISTANCE_MAX]`.
    pub distance: f32,
    /// `prev - cur` on both axes.
    pub delta: Vec2,
}

/// Page-wide pointer state shared by every hover item.
///
/// The pointer-move listener is the only caller of [`PointerTracker::record`].
/// Items only ever call [`PointerTracker::advance`], which moves the cached
/// "previous" sample forward; whichever item renders last in a frame wins.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    current: Vec2,
    cached: Vec2,
    delta: Vec2,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self, x: f32, y: f32) {
        self.current = Vec2::new(x, y);
    }

    #[inline]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn advance(&mut self) -> PointerStep {
        let delta = self.cached - self.current;
        let distance = clamp(delta.x.abs(), 0.0, POINTER_DISTANCE_MAX);
        self.delta = delta;
        self.cached = self.current;
        PointerStep { distance, delta }
    }

    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::from_delta_x(self.delta().x)
    }
}
