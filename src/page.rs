use crate::colour::Colour;
use crate::font::BuiltinFont;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Finish, Name, Pdf};
use std::io::Write;

/// The font and size a span of text is set in
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub font: BuiltinFont,
    pub size: Pt,
}

/// A single run of text, positioned absolutely on the page by its baseline
/// start point
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// One block of page content, rendered in insertion order
#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    /// Text spans, rendered together in one text-state group
    Text(Vec<SpanLayout>),
    /// Raw graphics operators, wrapped in a save/restore pair when rendered
    Graphics(Vec<u8>),
}

/// Margins are used when laying out objects on a page. Nothing prevents page
/// contents from overflowing the margins—they are guidelines for layout code,
/// and they determine the `ArtBox` attribute of each page in the generated PDF
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins where all values are equal
    pub fn all(value: Pt) -> Margins {
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// A single page of the document: a media box, a content box within the
/// margins, and an ordered list of content blocks
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content should live, i.e. within the margins
    pub content_box: Rect,
    /// The content blocks, in paint order
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_default();
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    /// Add a single span of text to the page contents
    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(vec![span]));
    }

    /// Add a group of text spans to the page contents
    pub fn add_spans(&mut self, spans: Vec<SpanLayout>) {
        if !spans.is_empty() {
            self.contents.push(PageContents::Text(spans));
        }
    }

    /// Add raw graphics operators (typically a finished
    /// [pdf_writer::Content] stream) to the page contents
    pub fn add_graphics(&mut self, ops: Vec<u8>) {
        if !ops.is_empty() {
            self.contents.push(PageContents::Graphics(ops));
        }
    }

    /// Iterate over every text span on the page, in paint order
    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents.iter().flat_map(|c| match c {
            PageContents::Text(spans) => spans.as_slice(),
            PageContents::Graphics(_) => &[],
        })
    }

    /// Calculate where text starts on the page to sit just within the top
    /// left margin, taking the ascending height of the font into account
    pub fn baseline_start(&self, font: BuiltinFont, size: Pt) -> (Pt, Pt) {
        let x = self.content_box.x1;
        let y = self.content_box.y2 - font.ascent(size);
        (x, y)
    }

    #[allow(clippy::write_with_newline)]
    fn render(&self) -> Result<Vec<u8>, std::io::Error> {
        if self.contents.is_empty() {
            return Ok(Vec::default());
        }
        let mut content: Vec<u8> = Vec::default();

        for page_content in self.contents.iter() {
            match page_content {
                PageContents::Text(spans) => render_text_spans(&mut content, spans)?,
                PageContents::Graphics(ops) => {
                    write!(&mut content, "q\n")?;
                    content.write_all(ops.as_slice())?;
                    write!(&mut content, "\nQ\n")?;
                }
            }
        }

        Ok(content)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), std::io::Error> {
        let id = refs
            .get(RefType::Page(page_index))
            .expect("page ref was pre-generated");
        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(refs.get(RefType::PageTree).expect("page tree ref exists"));

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for font in BuiltinFont::ALL {
            resource_fonts.pair(
                Name(font.resource_name().as_bytes()),
                refs.get(RefType::Font(font.number()))
                    .expect("font refs are written before pages"),
            );
        }
        resource_fonts.finish();
        resources.finish();

        let content_id = refs.gen(RefType::ContentForPage(page_index));
        page.contents(content_id);
        page.finish();

        let rendered = self.render()?;
        writer.stream(content_id, rendered.as_slice());
        Ok(())
    }
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(content: &mut Vec<u8>, spans: &[SpanLayout]) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;
    write_font(content, current_font)?;
    write_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write_font(content, current_font)?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_colour(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", *span.coords.0, *span.coords.1)?;
        write!(content, "(")?;
        content.write_all(escape_string(&span.text).as_slice())?;
        write!(content, ") Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_font(content: &mut Vec<u8>, font: SpanFont) -> Result<(), std::io::Error> {
    write!(
        content,
        "/{} {} Tf\n",
        font.font.resource_name(),
        *font.size
    )
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

/// Escape a string for inclusion in a PDF literal string: backslashes and
/// parentheses must be backslash-escaped
fn escape_string(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'\\' | b'(' | b')' => {
                out.push(b'\\');
                out.push(byte);
            }
            _ => out.push(byte),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::pagesize;

    #[test]
    fn content_box_respects_margins() {
        let page = Page::new(pagesize::A4, Some(Margins::all(Pt(36.0))));
        assert_eq!(page.content_box.x1, Pt(36.0));
        assert_eq!(page.content_box.y2, pagesize::A4.1 - Pt(36.0));
    }

    #[test]
    fn renders_spans_with_escaping() {
        let mut page = Page::new(pagesize::A4, None);
        page.add_span(SpanLayout {
            text: "(2 + 3)".into(),
            font: SpanFont {
                font: BuiltinFont::Helvetica,
                size: Pt(12.0),
            },
            colour: colours::BLACK,
            coords: (Pt(10.0), Pt(20.0)),
        });
        let rendered = page.render().expect("render in-memory page");
        let rendered = String::from_utf8(rendered).expect("content is ascii");
        assert!(rendered.contains("/F1 12 Tf"));
        assert!(rendered.contains("(\\(2 + 3\\)) Tj"));
    }
}
