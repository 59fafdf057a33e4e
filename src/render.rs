//! HTML and terminal rendering of colorized characters

use std::fmt::Write;

use colored::Colorize;

use crate::color::Color;

/// One input character with the colors chosen for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub foreground: Color,
    pub background: Option<Color>,
}

/// Render glyphs as a `<div>` holding one styled `<span>` per character.
pub fn render_html(glyphs: &[Glyph]) -> String {
    // "<span style=\"color:#rrggbb;background-color:#rrggbb\">c</span>"
    let mut html = String::with_capacity(16 + glyphs.len() * 64);
    html.push_str("<div>");
    for glyph in glyphs {
        let _ = write!(html, "<span style=\"color:{}", glyph.foreground);
        if let Some(bg) = glyph.background {
            let _ = write!(html, ";background-color:{}", bg);
        }
        html.push_str("\">");
        push_escaped(&mut html, glyph.ch);
        html.push_str("</span>");
    }
    html.push_str("</div>\n");
    html
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(ch),
    }
}

/// Render glyphs with 24-bit terminal escapes.
pub fn render_ansi(glyphs: &[Glyph]) -> String {
    let mut out = String::with_capacity(glyphs.len() * 40);
    let mut buf = [0u8; 4];
    for glyph in glyphs {
        if glyph.ch == '\n' {
            out.push('\n');
            continue;
        }
        let Color { r, g, b } = glyph.foreground;
        let ch: &str = glyph.ch.encode_utf8(&mut buf);
        let styled = ch.truecolor(r, g, b);
        let styled = match glyph.background {
            Some(Color { r, g, b }) => styled.on_truecolor(r, g, b),
            None => styled,
        };
        let _ = write!(out, "{}", styled);
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
