//! The drawing surface shapes are rendered onto.
//!
//! A [Canvas] buffers two kinds of page content: stroke-drawn geometry, as a
//! [pdf_writer::Content] operator stream, and text, as absolutely-positioned
//! [SpanLayout] values. Geometry is affected by the canvas transform stack
//! (save / translate / rotate / restore); text coordinates are always page
//! coordinates.
//!
//! The transform stack is strictly nested: every [Canvas::save] must be
//! matched by a [Canvas::restore] before the canvas is finished. Violating
//! the nesting would corrupt all subsequent drawing on the page, so it is
//! surfaced as an error instead.

use crate::colour::{colours, Colour};
use crate::error::SheetError;
use crate::font::BuiltinFont;
use crate::page::{SpanFont, SpanLayout};
use crate::transform::Transform;
use crate::units::Pt;
use pdf_writer::Content;

/// Magic constant for approximating quarter-circle arcs with cubic Béziers.
const KAPPA: f32 = 0.552_284_8;

/// The buffered output of a canvas, ready to apply to a
/// [Page](crate::page::Page)
pub struct CanvasContent {
    pub graphics: Vec<u8>,
    pub spans: Vec<SpanLayout>,
}

/// A single-owner drawing surface for one page
pub struct Canvas {
    ops: Content,
    spans: Vec<SpanLayout>,
    text_font: BuiltinFont,
    text_size: Pt,
    text_colour: Colour,
    save_depth: usize,
}

impl Canvas {
    /// Create a canvas whose text is set in `font` at `size`
    pub fn new(font: BuiltinFont, size: Pt) -> Canvas {
        Canvas {
            ops: Content::new(),
            spans: Vec::default(),
            text_font: font,
            text_size: size,
            text_colour: colours::BLACK,
            save_depth: 0,
        }
    }

    /// The size text is currently set at
    pub fn text_size(&self) -> Pt {
        self.text_size
    }

    /// Measure the width of `text` as it would be drawn by
    /// [draw_string](Canvas::draw_string)
    pub fn text_width(&self, text: &str) -> Pt {
        self.text_font.text_width(text, self.text_size)
    }

    /// Record a span of text with its baseline starting at page coordinates
    /// `(x, y)`. Text is not affected by the transform stack.
    pub fn draw_string(&mut self, x: Pt, y: Pt, text: &str) {
        self.spans.push(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                font: self.text_font,
                size: self.text_size,
            },
            colour: self.text_colour,
            coords: (x, y),
        });
    }

    /// The spans recorded so far, in draw order
    pub fn spans(&self) -> &[SpanLayout] {
        &self.spans
    }

    /// Push the current graphics state (including the coordinate transform)
    pub fn save(&mut self) {
        self.ops.save_state();
        self.save_depth += 1;
    }

    /// Pop the most recently saved graphics state. Fails if there is no
    /// matching [save](Canvas::save).
    pub fn restore(&mut self) -> Result<(), SheetError> {
        if self.save_depth == 0 {
            return Err(SheetError::GraphicsState("restore without matching save"));
        }
        self.ops.restore_state();
        self.save_depth -= 1;
        Ok(())
    }

    /// Concatenate a transform onto the current coordinate system
    pub fn transform(&mut self, t: Transform) {
        self.ops.transform(t.to_array());
    }

    /// Move the origin of the coordinate system
    pub fn translate(&mut self, x: Pt, y: Pt) {
        self.transform(Transform::translate(x, y));
    }

    /// Rotate the coordinate system counter-clockwise (angle in radians)
    pub fn rotate(&mut self, angle: f32) {
        self.transform(Transform::rotate(angle));
    }

    /// Set the colour used to stroke geometry
    pub fn set_stroke_colour(&mut self, colour: Colour) {
        match colour {
            Colour::RGB { r, g, b } => self.ops.set_stroke_rgb(r, g, b),
            Colour::Grey { g } => self.ops.set_stroke_gray(g),
        };
    }

    /// Set the width of stroked lines
    pub fn set_line_width(&mut self, width: Pt) {
        self.ops.set_line_width(*width);
    }

    /// Stroke a circle centered at `(cx, cy)` with radius `r`
    pub fn circle(&mut self, cx: Pt, cy: Pt, r: Pt) {
        self.ellipse(cx - r, cy - r, cx + r, cy + r);
    }

    /// Stroke the ellipse inscribed in the rectangle with corners
    /// `(x1, y1)` and `(x2, y2)`, approximated by four Bézier arcs
    pub fn ellipse(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt) {
        let (cx, cy) = ((*x1 + *x2) / 2.0, (*y1 + *y2) / 2.0);
        let (rx, ry) = ((*x2 - *x1).abs() / 2.0, (*y2 - *y1).abs() / 2.0);
        let (kx, ky) = (rx * KAPPA, ry * KAPPA);

        self.ops.move_to(cx + rx, cy);
        self.ops.cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry);
        self.ops.cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy);
        self.ops.cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry);
        self.ops.cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy);
        self.ops.close_path();
        self.ops.stroke();
    }

    /// Stroke a rectangle from its lower-left corner, width, and height
    pub fn rect(&mut self, x: Pt, y: Pt, width: Pt, height: Pt) {
        self.ops.rect(*x, *y, *width, *height);
        self.ops.stroke();
    }

    /// Begin a path at `(x, y)`
    pub fn move_to(&mut self, x: Pt, y: Pt) {
        self.ops.move_to(*x, *y);
    }

    /// Extend the current path with a straight line to `(x, y)`
    pub fn line_to(&mut self, x: Pt, y: Pt) {
        self.ops.line_to(*x, *y);
    }

    /// Extend the current path with a cubic Bézier through the two control
    /// points to `(x, y)`
    pub fn curve_to(&mut self, c1: (Pt, Pt), c2: (Pt, Pt), x: Pt, y: Pt) {
        self.ops.cubic_to(*c1.0, *c1.1, *c2.0, *c2.1, *x, *y);
    }

    /// Close the current path back to its starting point
    pub fn close_path(&mut self) {
        self.ops.close_path();
    }

    /// Stroke the current path
    pub fn stroke_path(&mut self) {
        self.ops.stroke();
    }

    /// Finish the canvas, validating that every save was restored, and yield
    /// the buffered content
    pub fn finish(self) -> Result<CanvasContent, SheetError> {
        if self.save_depth != 0 {
            return Err(SheetError::GraphicsState("finished with unrestored saves"));
        }
        Ok(CanvasContent {
            graphics: self.ops.finish(),
            spans: self.spans,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_without_save_fails() {
        let mut canvas = Canvas::new(BuiltinFont::Helvetica, Pt(12.0));
        assert!(matches!(
            canvas.restore(),
            Err(SheetError::GraphicsState(_))
        ));
    }

    #[test]
    fn finish_with_open_save_fails() {
        let mut canvas = Canvas::new(BuiltinFont::Helvetica, Pt(12.0));
        canvas.save();
        assert!(matches!(
            canvas.finish(),
            Err(SheetError::GraphicsState(_))
        ));
    }

    #[test]
    fn balanced_saves_finish_cleanly() {
        let mut canvas = Canvas::new(BuiltinFont::Helvetica, Pt(12.0));
        canvas.save();
        canvas.translate(Pt(10.0), Pt(10.0));
        canvas.circle(Pt(0.0), Pt(0.0), Pt(5.0));
        canvas.restore().expect("matching save exists");
        canvas.draw_string(Pt(1.0), Pt(2.0), "7");
        let content = canvas.finish().expect("balanced canvas");
        assert!(!content.graphics.is_empty());
        assert_eq!(content.spans.len(), 1);
        assert_eq!(content.spans[0].text, "7");
    }

    #[test]
    fn measures_text_with_font_metrics() {
        let canvas = Canvas::new(BuiltinFont::Helvetica, Pt(12.0));
        let expected = BuiltinFont::Helvetica.text_width("12 + 3", Pt(12.0));
        assert_eq!(canvas.text_width("12 + 3"), expected);
    }
}
