//! Metrics and encoding for the two built-in fonts the reports use.
//!
//! Both faces are PDF standard Type 1 fonts, so nothing is embedded: widths
//! come from the Adobe AFM tables and text is encoded as WinAnsi bytes.

/// Font face a run of text is set in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
}

impl FontFace {
    pub const ALL: [FontFace; 2] = [FontFace::Regular, FontFace::Bold];

    /// Name of the font in each page's resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
        }
    }

    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            FontFace::Regular => &HELVETICA_WIDTHS,
            FontFace::Bold => &HELVETICA_BOLD_WIDTHS,
        }
    }
}

/// Glyph widths in 1/1000 em for printable ASCII (0x20..=0x7E).
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width used for anything outside printable ASCII.
const FALLBACK_WIDTH: u16 = 556;

fn char_width(face: FontFace, c: char) -> u16 {
    match c {
        ' '..='~' => face.widths()[c as usize - 0x20],
        _ => FALLBACK_WIDTH,
    }
}

/// Width of `text` in points when set in `face` at `size`.
pub fn text_width(text: &str, face: FontFace, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(face, c))).sum();
    units as f32 * size / 1000.0
}

/// Shorten `text` with a trailing `...` so it fits within `max_width`.
pub fn truncate_to_width(text: &str, face: FontFace, size: f32, max_width: f32) -> String {
    if text_width(text, face, size) <= max_width {
        return text.to_string();
    }

    const ELLIPSIS: &str = "...";
    let budget = max_width - text_width(ELLIPSIS, face, size);
    let mut used = 0.0;
    let mut out = String::new();
    for c in text.chars() {
        let w = f32::from(char_width(face, c)) * size / 1000.0;
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

/// Encode `text` as WinAnsi bytes for a standard-font `Tj` operand.
///
/// Control characters become spaces; characters WinAnsi cannot represent
/// become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\t' | '\n' | '\r' => b' ',
            ' '..='~' => c as u8,
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '\u{20AC}' => 0x80,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2122}' => 0x99,
            _ => b'?',
        })
        .collect()
}
