//! Advance widths of the built-in Helvetica faces.
//!
//! Built-in PDF fonts carry no metrics in the file, so centred and
//! right-aligned text is positioned with the standard AFM widths
//! (thousandths of an em) for printable ASCII.

use crate::render::surface::FontWeight;

/// Millimetres per typographic point.
const MM_PER_PT: f32 = 25.4 / 72.0;

/// Width used for characters outside the tables.
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn char_width(ch: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Normal => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    match ch as u32 {
        code @ 0x20..=0x7e => table[(code - 0x20) as usize],
        _ => FALLBACK_WIDTH,
    }
}

/// Returns the rendered width of `text` in millimetres.
pub fn text_width_mm(text: &str, weight: FontWeight, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(char_width(ch, weight))).sum();
    units as f32 / 1000.0 * size_pt * MM_PER_PT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_are_fixed_width() {
        let one = text_width_mm("1", FontWeight::Normal, 10.0);
        let eight = text_width_mm("8", FontWeight::Normal, 10.0);
        assert_eq!(one, eight);
    }

    #[test]
    fn test_width_scales_with_size() {
        let small = text_width_mm("Total", FontWeight::Normal, 7.0);
        let large = text_width_mm("Total", FontWeight::Normal, 14.0);
        assert!((large - small * 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_bold_is_wider_for_lowercase() {
        let normal = text_width_mm("net pay", FontWeight::Normal, 10.0);
        let bold = text_width_mm("net pay", FontWeight::Bold, 10.0);
        assert!(bold > normal);
    }

    #[test]
    fn test_known_width() {
        // "0" is 556/1000 em; 10pt em is 3.5278mm
        let width = text_width_mm("0", FontWeight::Normal, 10.0);
        assert!((width - 1.9614).abs() < 1e-3);
    }

    #[test]
    fn test_non_ascii_uses_fallback() {
        let yen = text_width_mm("¥", FontWeight::Normal, 10.0);
        let zero = text_width_mm("0", FontWeight::Normal, 10.0);
        assert_eq!(yen, zero);
    }

    #[test]
    fn test_empty_text_has_no_width() {
        assert_eq!(text_width_mm("", FontWeight::Bold, 12.0), 0.0);
    }
}
