//! Decorative shape templates.
//!
//! Each problem is drawn inside one of a closed set of shapes. Every shape
//! follows the same five-phase pipeline, with each phase handing an explicit
//! layout value to the next:
//!
//! 1. *setup* — measure the problem text and derive the shape's [Anchor]
//!    from the placement;
//! 2. *outline* — stroke the silhouette around the anchor, returning the
//!    characteristic size;
//! 3. *slots* — stroke the two slot decorations (eyes, display rectangles;
//!    some shapes draw none) and return the [SlotLayout] derived from the
//!    characteristic size;
//! 4. *numbers* — draw operand `a` centered in the left slot and `b` in the
//!    right slot;
//! 5. *operator* — draw the operator glyph between the two slots.
//!
//! Regardless of which shape was drawn, rendering returns the placement's
//! y-coordinate stepped down by one fixed [ROW_STEP], so the layout driver
//! can stack shapes without caring which variant it got.

use crate::canvas::Canvas;
use crate::error::SheetError;
use crate::problem::MathProblem;
use crate::units::{Pt, PT_PER_CM};
use rand::Rng;

mod balloon;
mod cat;
mod face;
mod flower;
mod robot;

/// The fixed vertical step between stacked problems
pub const ROW_STEP: Pt = Pt(3.0 * PT_PER_CM);

/// The closed set of shape variants a problem can be drawn inside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A circular face with circular eyes
    Face,
    /// A six-petal flower; the numbers sit inside the center disc
    Flower,
    /// A robot head with an antenna and digital-display eyes
    Robot,
    /// A balloon on a curly string; no explicit slot decorations
    Balloon,
    /// A cat face with triangular ears and a triangle nose
    Cat,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Face,
        ShapeKind::Flower,
        ShapeKind::Robot,
        ShapeKind::Balloon,
        ShapeKind::Cat,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Face => "face",
            ShapeKind::Flower => "flower",
            ShapeKind::Robot => "robot",
            ShapeKind::Balloon => "balloon",
            ShapeKind::Cat => "cat",
        }
    }

    fn template(&self) -> ShapeTemplate {
        match self {
            ShapeKind::Face => ShapeTemplate {
                anchor_dy: Pt(0.0),
                outline: face::outline,
                slots: face::slots,
            },
            ShapeKind::Flower => ShapeTemplate {
                anchor_dy: Pt(0.0),
                outline: flower::outline,
                slots: flower::slots,
            },
            ShapeKind::Robot => ShapeTemplate {
                // the head is drawn below the anchor to leave room for the
                // antenna within the row
                anchor_dy: Pt(-0.5 * PT_PER_CM),
                outline: robot::outline,
                slots: robot::slots,
            },
            ShapeKind::Balloon => ShapeTemplate {
                anchor_dy: Pt(0.0),
                outline: balloon::outline,
                slots: balloon::slots,
            },
            ShapeKind::Cat => ShapeTemplate {
                anchor_dy: Pt(0.0),
                outline: cat::outline,
                slots: cat::slots,
            },
        }
    }
}

/// Where one problem's shape is anchored on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: Pt,
    pub y: Pt,
}

/// The result of the setup phase: the measured problem text and the center
/// point the outline is drawn around
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub center_x: Pt,
    pub center_y: Pt,
    pub text_width: Pt,
    pub text_height: Pt,
}

/// The result of the slots phase: where the two operands and the operator
/// land, in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    /// Center of the left slot
    pub left_x: Pt,
    /// Center of the right slot
    pub right_x: Pt,
    /// The line the operands sit on
    pub slot_y: Pt,
    /// The line the operator sits on (some shapes put it on the nose rather
    /// than between the eyes)
    pub operator_y: Pt,
}

impl SlotLayout {
    /// The horizontal spacing between the two slots
    pub fn spacing(&self) -> Pt {
        self.right_x - self.left_x
    }
}

type OutlineFn = fn(&mut Canvas, &Anchor) -> Result<Pt, SheetError>;
type SlotsFn = fn(&mut Canvas, &Anchor, Pt) -> Result<SlotLayout, SheetError>;

/// One shape variant's rendering strategy: the outline and slot phases vary
/// per shape, everything else is shared
struct ShapeTemplate {
    anchor_dy: Pt,
    outline: OutlineFn,
    slots: SlotsFn,
}

/// Setup phase, shared by every shape: measure the problem text at the
/// canvas font and derive the anchor from the placement
fn setup(canvas: &Canvas, problem: &MathProblem, placement: Placement, dy: Pt) -> Anchor {
    let text_width = canvas.text_width(&problem.to_string());
    let text_height = canvas.text_size();
    let y = placement.y + dy;
    Anchor {
        center_x: placement.x + text_width / 2.0,
        center_y: y + text_height / 4.0,
        text_width,
        text_height,
    }
}

/// Draw one problem inside the given shape at the given placement, returning
/// the y position for the next problem stacked below this one
pub fn render(
    canvas: &mut Canvas,
    problem: &MathProblem,
    placement: Placement,
    kind: ShapeKind,
) -> Result<Pt, SheetError> {
    let template = kind.template();
    let anchor = setup(canvas, problem, placement, template.anchor_dy);
    let size = (template.outline)(canvas, &anchor)?;
    let slots = (template.slots)(canvas, &anchor, size)?;
    draw_numbers(canvas, problem, &slots);
    draw_operator(canvas, problem, &anchor, &slots);
    Ok(placement.y - ROW_STEP)
}

/// Draw one problem inside a shape picked uniformly at random. Selection is
/// independent per placement; repeats are allowed.
pub fn render_random<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    problem: &MathProblem,
    placement: Placement,
    rng: &mut R,
) -> Result<Pt, SheetError> {
    let kind = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
    log::debug!("drawing {problem} as {}", kind.name());
    render(canvas, problem, placement, kind)
}

/// Numbers phase: each operand is horizontally centered within its slot
/// using its own rendered width
fn draw_numbers(canvas: &mut Canvas, problem: &MathProblem, slots: &SlotLayout) {
    let offset_y = canvas.text_size() / 3.0;
    let a = problem.a().to_string();
    let b = problem.b().to_string();
    let a_offset_x = canvas.text_width(&a) / 2.0;
    let b_offset_x = canvas.text_width(&b) / 2.0;
    canvas.draw_string(slots.left_x - a_offset_x, slots.slot_y - offset_y, &a);
    canvas.draw_string(slots.right_x - b_offset_x, slots.slot_y - offset_y, &b);
}

/// Operator phase: the glyph is horizontally centered between the two slots
fn draw_operator(canvas: &mut Canvas, problem: &MathProblem, anchor: &Anchor, slots: &SlotLayout) {
    let glyph = problem.operator().symbol().to_string();
    let offset_x = canvas.text_width(&glyph) / 2.0;
    let offset_y = canvas.text_size() / 3.0;
    canvas.draw_string(
        anchor.center_x - offset_x,
        slots.operator_y - offset_y,
        &glyph,
    );
}
