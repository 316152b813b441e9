// Minimal time-based tweens for slides, staggered intros and the loader.

use super::math::{clamp, lerp};
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    SineOut,
    Power1Out,
    ExpoOut,
}

impl Ease {
    /// Eased progress for linear progress `t` in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = clamp(t, 0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::SineOut => (t * FRAC_PI_2).sin(),
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            delay: 0.0,
            ease,
            elapsed: 0.0,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// True once the delay has passed.
    #[inline]
    pub fn has_started(&self) -> bool {
        self.elapsed >= self.delay
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return if self.has_started() { 1.0 } else { 0.0 };
        }
        clamp((self.elapsed - self.delay) / self.duration, 0.0, 1.0)
    }

    pub fn value(&self) -> f32 {
        lerp(self.from, self.to, self.ease.apply(self.progress()))
    }

    pub fn advance(&mut self, dt_sec: f32) -> f32 {
        self.elapsed += dt_sec.max(0.0);
        self.value()
    }
}

/// Tweens for `count` targets, tween `i` delayed by `i * step`.
pub fn stagger(count: usize, from: f32, to: f32, duration: f32, step: f32, ease: Ease) -> Vec<Tween> {
    (0..count)
        .map(|i| Tween::new(from, to, duration, ease).with_delay(i as f32 * step))
        .collect()
}
