// Scalar helpers shared by the reveal engine, tweens and the loader.

/// Linear interpolation between `a` and `b` by amount `n`.
#[inline]
pub fn lerp(a: f32, b: f32, n: f32) -> f32 {
    (1.0 - n) * a + n * b
}

#[inline]
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    if x <= min {
        min
    } else if x >= max {
        max
    } else {
        x
    }
}

/// Map `x` from `[a, b]` onto `[c, d]`. Not clamped.
#[inline]
pub fn map_range(x: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    (x - a) * (d - c) / (b - a) + c
}
