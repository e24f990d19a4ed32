/// 2D vector in fractal-plane coordinates.
///
/// Double precision keeps repeated small pan steps stable at deep zoom levels;
/// the renderer narrows to f32 only when packing uniforms.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DVec2 {
    pub x: f64,
    pub y: f64,
}

impl DVec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Narrows to `[f32; 2]` for GPU upload.
    #[inline]
    pub fn to_f32_array(self) -> [f32; 2] {
        [self.x as f32, self.y as f32]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_keeps_representable_values() {
        assert_eq!(DVec2::new(-1.5, 0.25).to_f32_array(), [-1.5f32, 0.25f32]);
    }

    #[test]
    fn is_finite_rejects_nan_and_inf() {
        assert!(DVec2::new(1.0, 2.0).is_finite());
        assert!(!DVec2::new(f64::NAN, 0.0).is_finite());
        assert!(!DVec2::new(0.0, f64::INFINITY).is_finite());
    }
}
