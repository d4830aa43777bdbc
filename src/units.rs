//! Typed units for page measurements.
//!
//! PDF user space is measured in points (1/72 inch). All layout code in this
//! crate works in [Pt]; the other units exist so that humans can write
//! `Cm(2.0)` in configuration and driver code and convert at the boundary.

use derive_more::{Add, AddAssign, Deref, Display, From, Into, Sum};

/// Points per inch, per the PDF imaging model.
pub const PT_PER_IN: f32 = 72.0;
/// Points per millimetre.
pub const PT_PER_MM: f32 = 72.0 / 25.4;
/// Points per centimetre.
pub const PT_PER_CM: f32 = 72.0 / 2.54;

/// A distance in points (1/72 inch), the native unit of PDF user space.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, PartialOrd, Add, AddAssign, Sum, Deref, Display, From,
    Into,
)]
pub struct Pt(pub f32);

/// A distance in inches.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From, Into)]
pub struct In(pub f32);

/// A distance in millimetres.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From, Into)]
pub struct Mm(pub f32);

/// A distance in centimetres.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd, Display, From, Into)]
pub struct Cm(pub f32);

impl From<In> for Pt {
    fn from(v: In) -> Pt {
        Pt(v.0 * PT_PER_IN)
    }
}

impl From<Mm> for Pt {
    fn from(v: Mm) -> Pt {
        Pt(v.0 * PT_PER_MM)
    }
}

impl From<Cm> for Pt {
    fn from(v: Cm) -> Pt {
        Pt(v.0 * PT_PER_CM)
    }
}

impl std::ops::Sub for Pt {
    type Output = Pt;
    fn sub(self, rhs: Pt) -> Pt {
        Pt(self.0 - rhs.0)
    }
}

impl std::ops::SubAssign for Pt {
    fn sub_assign(&mut self, rhs: Pt) {
        self.0 -= rhs.0;
    }
}

impl std::ops::Neg for Pt {
    type Output = Pt;
    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;
    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;
    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

/// The ratio between two distances is dimensionless.
impl std::ops::Div<Pt> for Pt {
    type Output = f32;
    fn div(self, rhs: Pt) -> f32 {
        self.0 / rhs.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_metric_units_to_points() {
        let pt: Pt = Cm(2.54).into();
        assert!((pt.0 - 72.0).abs() < 1e-4);
        let pt: Pt = Mm(25.4).into();
        assert!((pt.0 - 72.0).abs() < 1e-4);
        let pt: Pt = In(1.0).into();
        assert!((pt.0 - 72.0).abs() < 1e-4);
    }

    #[test]
    fn point_arithmetic() {
        assert_eq!(Pt(10.0) + Pt(5.0), Pt(15.0));
        assert_eq!(Pt(10.0) - Pt(5.0), Pt(5.0));
        assert_eq!(Pt(10.0) * 0.5, Pt(5.0));
        assert_eq!(Pt(10.0) / 2.0, Pt(5.0));
        assert_eq!(Pt(10.0) / Pt(5.0), 2.0);
    }
}
