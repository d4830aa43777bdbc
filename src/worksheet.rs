//! The generation driver: builds one page of problems laid out in fixed
//! columns, stacking shapes by the y-offsets the renderer reports back.

use crate::canvas::Canvas;
use crate::colour::colours;
use crate::config::Settings;
use crate::document::Document;
use crate::error::SheetError;
use crate::font::BuiltinFont;
use crate::info::Info;
use crate::numbers;
use crate::page::{Margins, Page, SpanFont, SpanLayout};
use crate::problem::MathProblem;
use crate::shapes::{self, Placement};
use crate::units::{Cm, Pt};
use rand::Rng;

const TITLE_FONT: BuiltinFont = BuiltinFont::HelveticaBold;
const TITLE_SIZE: Pt = Pt(16.0);
const PROBLEM_FONT: BuiltinFont = BuiltinFont::Helvetica;
const PROBLEM_SIZE: Pt = Pt(12.0);

/// Generate a complete worksheet document from the settings. Any failure
/// aborts the whole run; there is no partial-success mode.
pub fn generate<R: Rng + ?Sized>(
    settings: &Settings,
    rng: &mut R,
) -> Result<Document, SheetError> {
    let operator = settings.operator()?;
    let range = settings.operand_range()?;
    let (width, height) = settings.page_size();

    log::info!(
        "generating {} '{}' problems in {} columns of {}",
        settings.problem_count(),
        operator,
        settings.columns,
        settings.problems_per_column,
    );

    let mut doc = Document::default();
    let mut info = Info::new();
    info.title(&settings.title)
        .subject(format!("{} practice", operator.name()))
        .keywords(format!("math, worksheet, {}", operator.name()));
    doc.set_info(info);

    let mut page = Page::new((width, height), Some(Margins::all(Cm(2.0).into())));
    let title_start = page.baseline_start(TITLE_FONT, TITLE_SIZE);
    page.add_span(SpanLayout {
        text: settings.title.clone(),
        font: SpanFont {
            font: TITLE_FONT,
            size: TITLE_SIZE,
        },
        colour: colours::BLACK,
        coords: title_start,
    });

    let mut canvas = Canvas::new(PROBLEM_FONT, PROBLEM_SIZE);
    canvas.set_stroke_colour(colours::BLACK);
    canvas.set_line_width(Pt(1.0));
    let start_y = height - Pt::from(Cm(5.0));
    let column_pitch: Pt = Cm(10.0).into();
    let left_edge: Pt = Cm(2.0).into();

    for column in 0..settings.columns {
        let x = left_edge + column_pitch * column as f32;
        let mut y = start_y;
        for _ in 0..settings.problems_per_column {
            let pair = numbers::sample_pair(rng, &range, operator)?;
            let problem = MathProblem::new(|| pair, operator);
            y = shapes::render_random(&mut canvas, &problem, Placement { x, y }, rng)?;
        }
    }

    let content = canvas.finish()?;
    page.add_graphics(content.graphics);
    page.add_spans(content.spans);
    doc.add_page(page);

    Ok(doc)
}
