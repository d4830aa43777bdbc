//! A six-petal flower. The numbers sit inside the center disc; the flower
//! draws no explicit slot decorations but still reports a usable spacing.

use super::{Anchor, SlotLayout};
use crate::canvas::Canvas;
use crate::error::SheetError;
use crate::units::Pt;

const FLOWER_SIZE: Pt = Pt(55.0);
/// How far petal centers sit from the flower center, in petal radii
const PETAL_REACH: f32 = 1.99;

pub(super) fn outline(canvas: &mut Canvas, anchor: &Anchor) -> Result<Pt, SheetError> {
    canvas.save();
    canvas.translate(anchor.center_x, anchor.center_y);

    let petal_radius = FLOWER_SIZE / 3.0;
    for i in 0..6 {
        let angle = (i as f32 * 60.0).to_radians();
        let petal_x = petal_radius * PETAL_REACH * angle.cos();
        let petal_y = petal_radius * PETAL_REACH * angle.sin();

        canvas.save();
        canvas.translate(petal_x, petal_y);
        canvas.rotate(angle);
        canvas.ellipse(
            -petal_radius / 1.8,
            -petal_radius / 3.5,
            petal_radius / 1.8,
            petal_radius / 3.5,
        );
        canvas.restore()?;
    }

    let center_radius = FLOWER_SIZE / 2.0;
    canvas.circle(Pt(0.0), Pt(0.0), center_radius);
    canvas.restore()?;
    Ok(center_radius)
}

pub(super) fn slots(
    _canvas: &mut Canvas,
    anchor: &Anchor,
    center_radius: Pt,
) -> Result<SlotLayout, SheetError> {
    // no eyes; the numbers share the center disc
    let spacing = center_radius * 0.8;
    Ok(SlotLayout {
        left_x: anchor.center_x - spacing / 2.0,
        right_x: anchor.center_x + spacing / 2.0,
        slot_y: anchor.center_y,
        operator_y: anchor.center_y,
    })
}
