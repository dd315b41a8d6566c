//! Scalar helpers shared by the choreography: clamped fractions, lerps, easing
//! and the linear RGB color type used for the page background.

#[inline]
pub fn clamp01(x: f32) -> f32 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, 1.0)
}

/// Position of `x` inside `[start, end]` as a clamped fraction.
#[inline]
pub fn fraction(x: f32, start: f32, end: f32) -> f32 {
    let span = end - start;
    if span.abs() <= f32::EPSILON {
        return if x >= end { 1.0 } else { 0.0 };
    }
    clamp01((x - start) / span)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic ease-in-out: `4x³` below 0.5, `1 - (-2x + 2)³ / 2` above.
#[inline]
pub fn ease_in_out_cubic(x: f32) -> f32 {
    let x = clamp01(x);
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

/// Linear RGB color with channels in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn from_array(c: [f32; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = clamp01(t);
        // weighted form so both endpoints are reproduced exactly
        let mix = |a: f32, b: f32| clamp01(a * (1.0 - t) + b * t);
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// 8-bit channels, rounded.
    pub fn to_u8(self) -> [u8; 3] {
        let q = |c: f32| (clamp01(c) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}
