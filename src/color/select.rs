//! Bounded search for colors meeting contrast and distance minimums

use std::ops::RangeInclusive;

use rand::Rng;

use super::metrics::{Thresholds, color_metrics};
use super::rgb::Color;
use super::table::{ColorTable, NamedColor};

/// Default number of random draws before giving up on invention
pub const DEFAULT_MAX_ATTEMPTS: usize = 500;

/// Full range of channel sums (0..=765)
pub const FULL_BRIGHTNESS: RangeInclusive<u16> = 0..=765;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOptions {
    /// Random draws allowed when inventing colors
    pub max_attempts: usize,
    /// Accepted channel sum for candidate foregrounds
    pub brightness: RangeInclusive<u16>,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            brightness: FULL_BRIGHTNESS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A table entry met both minimums
    Named,
    /// A random triple met both minimums
    Invented,
    /// Nothing qualified; white on black was returned
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub name: Option<&'static str>,
    pub foreground: Color,
    /// The reference color, unless the fallback replaced it with black
    pub background: Color,
    /// Candidates evaluated, across the table scan and invention
    pub attempts: usize,
    pub outcome: Outcome,
}

impl Selection {
    fn fallback(attempts: usize) -> Self {
        Self {
            name: None,
            foreground: Color::WHITE,
            background: Color::BLACK,
            attempts,
            outcome: Outcome::Fallback,
        }
    }
}

/// Picks colors from a [`ColorTable`] or invents them, using its own RNG.
pub struct ColorSelector<'t, R> {
    table: &'t ColorTable,
    options: SelectOptions,
    rng: R,
}

impl<'t, R: Rng> ColorSelector<'t, R> {
    pub fn new(table: &'t ColorTable, options: SelectOptions, rng: R) -> Self {
        Self {
            table,
            options,
            rng,
        }
    }

    pub fn table(&self) -> &'t ColorTable {
        self.table
    }

    pub fn options(&self) -> &SelectOptions {
        &self.options
    }

    pub fn random_named(&mut self) -> NamedColor {
        self.table.random_named(&mut self.rng)
    }

    /// Random triple whose channel sum lies in the brightness band.
    pub fn random_color(&mut self) -> Color {
        self.draw()
    }

    /// Pick a channel sum uniformly in the band, then split it across the
    /// channels with none above 255.
    fn draw(&mut self) -> Color {
        let (lo, hi) = band_bounds(&self.options.brightness);
        let sum = self.rng.gen_range(lo..=hi);
        let first = self.rng.gen_range(sum.saturating_sub(510)..=sum.min(255));
        let rest = sum - first;
        let second = self.rng.gen_range(rest.saturating_sub(255)..=rest.min(255));
        let third = rest - second;

        let mut channels = [first as u8, second as u8, third as u8];
        channels.rotate_left(self.rng.gen_range(0..3));
        Color::rgb(channels[0], channels[1], channels[2])
    }

    /// Find a foreground for `reference` meeting both percentage minimums.
    ///
    /// With `named_only` the table is scanned from a random start with
    /// wraparound; a full wrap without success falls through to invention.
    pub fn select_contrasting(
        &mut self,
        reference: Color,
        contrast_pct: u8,
        distance_pct: u8,
        named_only: bool,
    ) -> Selection {
        if !named_only {
            return self.invent_color(reference, contrast_pct, distance_pct);
        }

        let thresholds = Thresholds::from_percentages(contrast_pct, distance_pct);
        let len = self.table.len();
        let start = self.rng.gen_range(0..len);
        let mut attempts = 0;

        for offset in 0..len {
            let candidate = self.table.entries()[(start + offset) % len];
            if !self.options.brightness.contains(&candidate.color.brightness()) {
                continue;
            }
            attempts += 1;
            let metrics = color_metrics(candidate.color, reference);
            if thresholds.is_met_by(&metrics) {
                tracing::trace!(
                    name = candidate.name,
                    %reference,
                    attempts,
                    "accepted named color"
                );
                return Selection {
                    name: Some(candidate.name),
                    foreground: candidate.color,
                    background: reference,
                    attempts,
                    outcome: Outcome::Named,
                };
            }
        }

        tracing::debug!(
            %reference,
            contrast_pct,
            distance_pct,
            "no named color qualifies, inventing"
        );
        let mut selection = self.invent_color(reference, contrast_pct, distance_pct);
        selection.attempts += attempts;
        selection
    }

    /// Draw random in-band triples until one meets both minimums against
    /// `reference`, or return white on black after `max_attempts` draws.
    pub fn invent_color(
        &mut self,
        reference: Color,
        contrast_pct: u8,
        distance_pct: u8,
    ) -> Selection {
        let thresholds = Thresholds::from_percentages(contrast_pct, distance_pct);

        for attempt in 1..=self.options.max_attempts {
            let candidate = self.draw();
            let metrics = color_metrics(candidate, reference);
            if thresholds.is_met_by(&metrics) {
                tracing::trace!(%candidate, %reference, attempt, "accepted invented color");
                return Selection {
                    name: None,
                    foreground: candidate,
                    background: reference,
                    attempts: attempt,
                    outcome: Outcome::Invented,
                };
            }
        }

        tracing::debug!(
            %reference,
            contrast_pct,
            distance_pct,
            attempts = self.options.max_attempts,
            "could not find a contrasting color, using white on black"
        );
        Selection::fallback(self.options.max_attempts)
    }
}

/// Band clamped to reachable channel sums; an inverted band collapses to its start
fn band_bounds(band: &RangeInclusive<u16>) -> (u16, u16) {
    let lo = (*band.start()).min(765);
    let hi = (*band.end()).clamp(lo, 765);
    (lo, hi)
}
