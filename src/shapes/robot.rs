//! A robot head: rectangular skull, antenna on top, and two digital-display
//! rectangles for the operands.

use super::{Anchor, SlotLayout};
use crate::canvas::Canvas;
use crate::error::SheetError;
use crate::units::Pt;

const ROBOT_SIZE: Pt = Pt(42.0);

pub(super) fn outline(canvas: &mut Canvas, anchor: &Anchor) -> Result<Pt, SheetError> {
    let size = ROBOT_SIZE;
    canvas.save();
    canvas.translate(anchor.center_x, anchor.center_y);

    // main head rectangle
    canvas.rect(-size, -size / 2.0, size * 2.0, size * 1.5);

    // antenna on top of the head
    canvas.move_to(-size / 4.0, size);
    canvas.line_to(-size / 4.0, size * 1.3);
    canvas.line_to(size / 4.0, size * 1.3);
    canvas.line_to(size / 4.0, size);
    canvas.stroke_path();

    canvas.restore()?;
    Ok(size)
}

pub(super) fn slots(
    canvas: &mut Canvas,
    anchor: &Anchor,
    size: Pt,
) -> Result<SlotLayout, SheetError> {
    let eye_width = size / 2.0;
    let eye_height = size / 3.0;
    let eye_bottom = anchor.center_y + size / 4.0;

    // digital-style eyes
    canvas.rect(
        anchor.center_x - size * 0.7,
        eye_bottom,
        eye_width,
        eye_height,
    );
    canvas.rect(
        anchor.center_x + size * 0.2,
        eye_bottom,
        eye_width,
        eye_height,
    );

    let slot_y = eye_bottom + eye_height / 2.0;
    Ok(SlotLayout {
        left_x: anchor.center_x - size * 0.45,
        right_x: anchor.center_x + size * 0.45,
        slot_y,
        operator_y: slot_y,
    })
}
