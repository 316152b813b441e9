// Loading screen progress and the matrix-rain backdrop.

use super::tween::{Ease, Tween};
use crate::constants::{
    LOADER_FADE_DURATION_SEC, LOADER_FAKE_DURATION_SEC, LOADER_FAKE_TARGET,
    LOADER_FINISH_DURATION_SEC, MATRIX_COLUMN_PX, MATRIX_RESET_BASE_PX, MATRIX_RESET_SPREAD_PX,
};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPhase {
    /// Creeping toward 90% while the page loads.
    Filling,
    /// Page loaded; running to 100%.
    Finishing,
    Fading,
    Done,
}

#[derive(Clone, Debug)]
pub struct LoaderProgress {
    phase: LoaderPhase,
    progress: Tween,
    fade: Tween,
    value: f32,
}

impl Default for LoaderProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl LoaderProgress {
    pub fn new() -> Self {
        Self {
            phase: LoaderPhase::Filling,
            progress: Tween::new(0.0, LOADER_FAKE_TARGET, LOADER_FAKE_DURATION_SEC, Ease::Power1Out),
            fade: Tween::new(1.0, 0.0, LOADER_FADE_DURATION_SEC, Ease::Power1Out),
            value: 0.0,
        }
    }

    #[inline]
    pub fn phase(&self) -> LoaderPhase {
        self.phase
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn opacity(&self) -> f32 {
        match self.phase {
            LoaderPhase::Filling | LoaderPhase::Finishing => 1.0,
            LoaderPhase::Fading | LoaderPhase::Done => self.fade.value(),
        }
    }

    pub fn percent_label(&self) -> String {
        format!("{}%", self.value.floor() as u32)
    }

    /// The page finished loading: drop the fake fill and run to 100% from
    /// wherever it got to. Ignored outside the filling phase.
    pub fn finish(&mut self) {
        if self.phase != LoaderPhase::Filling {
            return;
        }
        self.progress = Tween::new(self.value, 100.0, LOADER_FINISH_DURATION_SEC, Ease::Power1Out);
        self.phase = LoaderPhase::Finishing;
    }

    pub fn tick(&mut self, dt_sec: f32) -> LoaderPhase {
        match self.phase {
            LoaderPhase::Filling => {
                self.value = self.progress.advance(dt_sec);
            }
            LoaderPhase::Finishing => {
                self.value = self.progress.advance(dt_sec);
                if self.progress.is_finished() {
                    self.phase = LoaderPhase::Fading;
                }
            }
            LoaderPhase::Fading => {
                self.fade.advance(dt_sec);
                if self.fade.is_finished() {
                    self.phase = LoaderPhase::Done;
                }
            }
            LoaderPhase::Done => {}
        }
        self.phase
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub x: f64,
    pub y: f64,
}

/// Falling glyph columns, one glyph per column per step.
#[derive(Clone, Debug)]
pub struct MatrixRain {
    ypos: Vec<f64>,
}

impl MatrixRain {
    pub fn new(width: f64) -> Self {
        let cols = (width.max(0.0) / MATRIX_COLUMN_PX).floor() as usize + 1;
        Self {
            ypos: vec![0.0; cols],
        }
    }

    pub fn columns(&self) -> usize {
        self.ypos.len()
    }

    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Vec<Glyph> {
        let mut glyphs = Vec::with_capacity(self.ypos.len());
        for (i, y) in self.ypos.iter_mut().enumerate() {
            let ch = char::from(rng.gen_range(0u8..128));
            glyphs.push(Glyph {
                ch,
                x: i as f64 * MATRIX_COLUMN_PX,
                y: *y,
            });
            let reset_at = MATRIX_RESET_BASE_PX + rng.gen::<f64>() * MATRIX_RESET_SPREAD_PX;
            *y = if *y > reset_at { 0.0 } else { *y + MATRIX_COLUMN_PX };
        }
        glyphs
    }
}
