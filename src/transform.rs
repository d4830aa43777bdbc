//! 2D transformation matrices for canvas coordinate systems.

use crate::units::*;

/// A PDF transformation matrix, where (0,0) is at the bottom-left of the page.
/// The matrix is represented as [a, b, c, d, e, f] corresponding to:
/// ```text
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    /// Create a translation transform
    pub fn translate(x: Pt, y: Pt) -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: *x,
            f: *y,
        }
    }

    /// Create a rotation transform (angle in radians, counter-clockwise)
    pub fn rotate(angle: f32) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Transform {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// The matrix as the six operands of the `cm` content operator.
    pub fn to_array(self) -> [f32; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_fills_only_the_offset_operands() {
        let t = Transform::translate(Pt(10.0), Pt(20.0)).to_array();
        assert_eq!(t, [1.0, 0.0, 0.0, 1.0, 10.0, 20.0]);
    }

    #[test]
    fn quarter_turn_rotation_swaps_the_axes() {
        let r = Transform::rotate(std::f32::consts::FRAC_PI_2).to_array();
        // x axis maps to +y, y axis maps to -x
        assert!(r[0].abs() < 1e-6 && (r[1] - 1.0).abs() < 1e-6);
        assert!((r[2] + 1.0).abs() < 1e-6 && r[3].abs() < 1e-6);
        assert_eq!(r[4], 0.0);
        assert_eq!(r[5], 0.0);
    }
}
