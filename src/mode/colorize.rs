//! Per-character color schemes

use rand::Rng;

use crate::color::{
    Color, ColorSelector, Outcome, Selection, Thresholds, anti_color, color_metrics,
};
use crate::render::Glyph;

/// How foreground and background are chosen for each character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Random foreground, no background
    Plain,
    /// Foreground contrasting against a fixed background
    OnBackground(Color),
    /// Background is the complement of a random foreground, searched for
    /// when the complement is too close
    Anti,
    /// Foreground is the previous character's background. A fallback glyph
    /// is white on black and the next one continues from its black.
    Drift,
}

#[derive(Debug, Clone, Copy)]
pub struct ColorizeConfig {
    pub scheme: Scheme,
    /// Random RGB triples instead of table names
    pub invent: bool,
    pub contrast_pct: u8,
    pub distance_pct: u8,
}

pub struct Colorized {
    pub glyphs: Vec<Glyph>,
    /// Characters that fell back to white on black
    pub fallbacks: usize,
}

pub fn colorize<R: Rng>(
    text: &str,
    config: &ColorizeConfig,
    selector: &mut ColorSelector<'_, R>,
) -> Colorized {
    let mut glyphs = Vec::with_capacity(text.len());
    let mut fallbacks = 0;
    let mut previous_bg: Option<Color> = None;

    for ch in text.chars() {
        let (foreground, background) = match config.scheme {
            Scheme::Plain => (random_foreground(selector, config.invent), None),
            Scheme::OnBackground(bg) => {
                let sel = selector.select_contrasting(
                    bg,
                    config.contrast_pct,
                    config.distance_pct,
                    !config.invent,
                );
                fallbacks += usize::from(sel.outcome == Outcome::Fallback);
                (sel.foreground, Some(sel.background))
            }
            Scheme::Anti => {
                let fg = random_foreground(selector, config.invent);
                let (fg, bg, fell_back) = pair_for(fg, Some(anti_color(fg)), config, selector);
                fallbacks += usize::from(fell_back);
                (fg, Some(bg))
            }
            Scheme::Drift => {
                let fg = previous_bg.unwrap_or_else(|| random_foreground(selector, config.invent));
                let (fg, bg, fell_back) = pair_for(fg, None, config, selector);
                fallbacks += usize::from(fell_back);
                previous_bg = Some(bg);
                (fg, Some(bg))
            }
        };

        tracing::trace!(%ch, %foreground, background = ?background, "glyph");
        glyphs.push(Glyph {
            ch,
            foreground,
            background,
        });
    }

    Colorized { glyphs, fallbacks }
}

/// Random foreground within the selector's brightness band.
fn random_foreground<R: Rng>(selector: &mut ColorSelector<'_, R>, invent: bool) -> Color {
    if invent {
        return selector.random_color();
    }
    for _ in 0..selector.options().max_attempts {
        let named = selector.random_named();
        if selector.options().brightness.contains(&named.color.brightness()) {
            return named.color;
        }
    }
    selector.random_color()
}

/// Background for `fg`: `candidate` if it already meets the minimums,
/// otherwise a searched one. The fallback replaces both colors.
fn pair_for<R: Rng>(
    fg: Color,
    candidate: Option<Color>,
    config: &ColorizeConfig,
    selector: &mut ColorSelector<'_, R>,
) -> (Color, Color, bool) {
    let thresholds = Thresholds::from_percentages(config.contrast_pct, config.distance_pct);
    if let Some(bg) = candidate
        && thresholds.is_met_by(&color_metrics(fg, bg))
    {
        return (fg, bg, false);
    }

    let sel: Selection =
        selector.select_contrasting(fg, config.contrast_pct, config.distance_pct, !config.invent);
    match sel.outcome {
        Outcome::Fallback => (sel.foreground, sel.background, true),
        // the found color becomes the background of the reference foreground
        Outcome::Named | Outcome::Invented => (fg, sel.foreground, false),
    }
}
