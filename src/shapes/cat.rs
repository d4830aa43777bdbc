//! A cat face: circle, triangular ears, circular eyes, and a triangle nose.
//! The operator sits in the nose area rather than between the eyes.

use super::{Anchor, SlotLayout};
use crate::canvas::Canvas;
use crate::error::SheetError;
use crate::units::Pt;

const CAT_SIZE: Pt = Pt(42.0);

pub(super) fn outline(canvas: &mut Canvas, anchor: &Anchor) -> Result<Pt, SheetError> {
    let size = CAT_SIZE;
    canvas.save();
    canvas.translate(anchor.center_x, anchor.center_y);

    canvas.circle(Pt(0.0), Pt(0.0), size);

    // left ear, starting from the face boundary
    canvas.move_to(-size * 0.85, size * 0.4);
    canvas.line_to(-size * 1.2, size * 0.9);
    canvas.line_to(-size * 0.5, size * 0.7);
    canvas.line_to(-size * 0.85, size * 0.4);

    // right ear, mirrored
    canvas.move_to(size * 0.85, size * 0.4);
    canvas.line_to(size * 1.2, size * 0.9);
    canvas.line_to(size * 0.5, size * 0.7);
    canvas.line_to(size * 0.85, size * 0.4);
    canvas.stroke_path();

    // triangle nose; the operator glyph is drawn over it
    let nose = size * 0.3;
    canvas.move_to(-nose, -nose * 0.5);
    canvas.line_to(nose, -nose * 0.5);
    canvas.line_to(Pt(0.0), nose * 0.5);
    canvas.line_to(-nose, -nose * 0.5);
    canvas.stroke_path();

    canvas.restore()?;
    Ok(size)
}

pub(super) fn slots(
    canvas: &mut Canvas,
    anchor: &Anchor,
    size: Pt,
) -> Result<SlotLayout, SheetError> {
    let eye_radius = size / 4.0;
    let left_x = anchor.center_x - size * 0.4;
    let right_x = anchor.center_x + size * 0.4;
    let eye_y = anchor.center_y + size * 0.2;

    canvas.circle(left_x, eye_y, eye_radius);
    canvas.circle(right_x, eye_y, eye_radius);

    Ok(SlotLayout {
        left_x,
        right_x,
        slot_y: eye_y,
        operator_y: anchor.center_y,
    })
}
