//! Built-in (base-14) PDF fonts.
//!
//! Worksheets only ever set ASCII digits, operators, and short titles, so the
//! crate sticks to the standard fonts every PDF viewer ships with and embeds
//! nothing. Text measurement uses the Adobe AFM advance widths, expressed in
//! 1/1000 em units.

use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Name, Pdf};

/// One of the standard PDF fonts available in every conforming viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
}

/// Character widths for Helvetica (ASCII 32..=126) in units of 1/1000 em.
/// Source: Adobe Helvetica AFM data.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 32..47
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 48..57 digits
    278, 278, 584, 584, 584, 556, 1015, // 58..64
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, 778, 722,
    667, 611, 722, 667, 944, 667, 667, 611, // 65..90 A-Z
    278, 278, 278, 469, 556, 333, // 91..96
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333,
    500, 278, 556, 500, 722, 500, 500, 500, // 97..122 a-z
    334, 260, 334, 584, // 123..126
];

/// Character widths for Helvetica-Bold (ASCII 32..=126) in 1/1000 em.
/// Source: Adobe Helvetica-Bold AFM data.
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 32..47
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 48..57 digits
    333, 333, 584, 584, 584, 611, 975, // 58..64
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, 778, 722,
    667, 611, 722, 667, 944, 667, 667, 611, // 65..90 A-Z
    333, 278, 333, 584, 556, 333, // 91..96
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389,
    556, 333, 611, 556, 778, 556, 556, 500, // 97..122 a-z
    389, 280, 389, 584, // 123..126
];

impl BuiltinFont {
    /// Every font this crate can set text in.
    pub const ALL: [BuiltinFont; 5] = [
        BuiltinFont::Helvetica,
        BuiltinFont::HelveticaBold,
        BuiltinFont::HelveticaOblique,
        BuiltinFont::HelveticaBoldOblique,
        BuiltinFont::Courier,
    ];

    /// A stable index used for object references and `/F<n>` resource names.
    pub fn number(&self) -> usize {
        match self {
            BuiltinFont::Helvetica => 1,
            BuiltinFont::HelveticaBold => 2,
            BuiltinFont::HelveticaOblique => 3,
            BuiltinFont::HelveticaBoldOblique => 4,
            BuiltinFont::Courier => 5,
        }
    }

    /// The resource name this font is registered under in page resource
    /// dictionaries, e.g. `F1`.
    pub fn resource_name(&self) -> String {
        format!("F{}", self.number())
    }

    /// The PDF BaseFont name, e.g. `Helvetica-Bold`.
    pub fn base_name(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
            BuiltinFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            BuiltinFont::Courier => "Courier",
        }
    }

    fn widths(&self) -> Option<&'static [u16; 95]> {
        match self {
            BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => Some(&HELVETICA_WIDTHS),
            BuiltinFont::HelveticaBold | BuiltinFont::HelveticaBoldOblique => {
                Some(&HELVETICA_BOLD_WIDTHS)
            }
            // fixed pitch
            BuiltinFont::Courier => None,
        }
    }

    /// The advance width of a single character in 1/1000 em units.
    /// Characters outside the printable ASCII range measure as a space.
    pub fn char_width(&self, ch: char) -> u16 {
        match self.widths() {
            None => 600,
            Some(widths) => {
                let index = (ch as u32).checked_sub(32).unwrap_or(0) as usize;
                widths.get(index).copied().unwrap_or(widths[0])
            }
        }
    }

    /// Calculate the width of a string as set in this font at the given size.
    pub fn text_width(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text.chars().map(|ch| self.char_width(ch) as u32).sum();
        size * (units as f32 / 1000.0)
    }

    /// Calculate the ascent (distance from the baseline to the top of the
    /// font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        let ascender = match self {
            BuiltinFont::Courier => 629.0,
            _ => 718.0,
        };
        size * (ascender / 1000.0)
    }

    /// Write this font as a Type1 font object, recording its reference.
    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(self.number()));
        let mut font = writer.type1_font(id);
        font.base_font(Name(self.base_name().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_share_a_width_in_helvetica() {
        for ch in '0'..='9' {
            assert_eq!(BuiltinFont::Helvetica.char_width(ch), 556);
            assert_eq!(BuiltinFont::HelveticaBold.char_width(ch), 556);
        }
    }

    #[test]
    fn string_width_is_the_sum_of_advances() {
        // "2 + 3" = 556 + 278 + 584 + 278 + 556 = 2252/1000 em
        let w = BuiltinFont::Helvetica.text_width("2 + 3", Pt(1000.0));
        assert!((*w - 2252.0).abs() < 1e-3);
    }

    #[test]
    fn ascent_scales_with_size() {
        assert_eq!(BuiltinFont::Helvetica.ascent(Pt(1000.0)), Pt(718.0));
        assert_eq!(BuiltinFont::HelveticaBold.ascent(Pt(500.0)), Pt(359.0));
        assert_eq!(BuiltinFont::Courier.ascent(Pt(1000.0)), Pt(629.0));
    }

    #[test]
    fn courier_is_fixed_pitch() {
        let narrow = BuiltinFont::Courier.text_width("iii", Pt(12.0));
        let wide = BuiltinFont::Courier.text_width("WWW", Pt(12.0));
        assert_eq!(narrow, wide);
    }
}
