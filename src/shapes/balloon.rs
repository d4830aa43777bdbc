//! A balloon on a curly string. The balloon has no slot decorations; the
//! operands float inside the envelope.

use super::{Anchor, SlotLayout};
use crate::canvas::Canvas;
use crate::error::SheetError;
use crate::units::Pt;

const BALLOON_SIZE: Pt = Pt(42.0);

pub(super) fn outline(canvas: &mut Canvas, anchor: &Anchor) -> Result<Pt, SheetError> {
    let size = BALLOON_SIZE;
    canvas.save();
    canvas.translate(anchor.center_x, anchor.center_y);

    // envelope: an ellipse slightly wider than it is tall
    canvas.ellipse(-size / 1.67, -size / 1.8, size / 1.67, size / 1.5);

    // tie: a small triangle under the envelope
    canvas.move_to(-size / 6.0, -size / 1.8);
    canvas.line_to(size / 6.0, -size / 1.8);
    canvas.line_to(Pt(0.0), -size / 1.4);
    canvas.line_to(-size / 6.0, -size / 1.8);

    // string: a single S-curve hanging from the tie
    canvas.move_to(Pt(0.0), -size / 1.4);
    canvas.curve_to(
        (-size / 3.0, -size * 1.07),
        (size / 3.0, -size * 1.17),
        Pt(0.0),
        -size * 1.28,
    );
    canvas.stroke_path();

    canvas.restore()?;
    Ok(size)
}

pub(super) fn slots(
    _canvas: &mut Canvas,
    anchor: &Anchor,
    size: Pt,
) -> Result<SlotLayout, SheetError> {
    let slot_y = anchor.center_y + size / 4.0;
    Ok(SlotLayout {
        left_x: anchor.center_x - size / 3.0,
        right_x: anchor.center_x + size / 3.0,
        slot_y,
        operator_y: slot_y,
    })
}
