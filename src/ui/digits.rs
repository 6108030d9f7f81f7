//! Large clock face built from block characters, five rows tall.

use unicode_width::UnicodeWidthStr;

pub const HEIGHT: u16 = 5;

fn glyph(c: char) -> [&'static str; 5] {
    match c {
        '0' => ["███", "█ █", "█ █", "█ █", "███"],
        '1' => ["  █", "  █", "  █", "  █", "  █"],
        '2' => ["███", "  █", "███", "█  ", "███"],
        '3' => ["███", "  █", "███", "  █", "███"],
        '4' => ["█ █", "█ █", "███", "  █", "  █"],
        '5' => ["███", "█  ", "███", "  █", "███"],
        '6' => ["███", "█  ", "███", "█ █", "███"],
        '7' => ["███", "  █", "  █", "  █", "  █"],
        '8' => ["███", "█ █", "███", "█ █", "███"],
        '9' => ["███", "█ █", "███", "  █", "███"],
        ':' => [" ", "▪", " ", "▪", " "],
        _ => [" ", " ", " ", " ", " "],
    }
}

/// Rows of the big rendering of `text`, glyphs separated by one column
pub fn big_rows(text: &str) -> Vec<String> {
    (0..HEIGHT as usize)
        .map(|row| {
            text.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Display width of the big rendering
pub fn big_width(text: &str) -> u16 {
    big_rows(text)
        .iter()
        .map(|r| r.width())
        .max()
        .unwrap_or(0) as u16
}
