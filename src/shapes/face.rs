//! A simple circular face: the operands live in the eyes and the operator is
//! the nose.

use super::{Anchor, SlotLayout};
use crate::canvas::Canvas;
use crate::error::SheetError;
use crate::units::Pt;

const FACE_RADIUS: Pt = Pt(42.0);

pub(super) fn outline(canvas: &mut Canvas, anchor: &Anchor) -> Result<Pt, SheetError> {
    canvas.circle(anchor.center_x, anchor.center_y, FACE_RADIUS);
    Ok(FACE_RADIUS)
}

pub(super) fn slots(
    canvas: &mut Canvas,
    anchor: &Anchor,
    radius: Pt,
) -> Result<SlotLayout, SheetError> {
    let eye_radius = radius / 4.5;
    let left_x = anchor.center_x - radius / 2.0;
    let right_x = anchor.center_x + radius / 2.0;
    let eye_y = anchor.center_y + radius / 3.0;

    canvas.circle(left_x, eye_y, eye_radius);
    canvas.circle(right_x, eye_y, eye_radius);

    Ok(SlotLayout {
        left_x,
        right_x,
        slot_y: eye_y,
        operator_y: anchor.center_y,
    })
}
