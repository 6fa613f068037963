// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font metrics hooks for tick label layout.
//!
//! Dense tick placement needs to know how wide a tick label will be once it
//! is drawn. Glyph shaping and rasterization belong to whatever renderer owns
//! the chart, so tick generators only depend on the tiny [`TextMeasurer`]
//! interface defined here.
//!
//! Two measurers ship with this crate:
//! - [`HeuristicTextMeasurer`] estimates widths from an average glyph advance.
//! - [`FixedAdvanceMeasurer`] gives every character the same pixel advance,
//!   which models simple bitmap fonts and makes layout tests exact.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// Measures rendered text.
///
/// This is the font collaborator consumed by tick generators: given a label
/// and a style, return how much room the label needs.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers should split on `\n` if they
    /// want multi-line layout.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;

    /// Returns the line height of the font described by `style`.
    ///
    /// The default measures a capital `M`.
    fn line_height(&self, style: &TextStyle) -> f64 {
        self.measure("M", style).line_height()
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }

    fn line_height(&self, style: &TextStyle) -> f64 {
        (**self).line_height(style)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Arc<T> {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }

    fn line_height(&self, style: &TextStyle) -> f64 {
        (**self).line_height(style)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart’s coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub font_style: FontStyle,
}

impl TextStyle {
    /// Creates a sans-serif, normal weight `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
            font_style: FontStyle::Normal,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, font_weight: FontWeight) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the font style.
    #[must_use]
    pub fn with_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(10.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family.
    Serif,
    /// A generic sans-serif family.
    SansSerif,
    /// A generic monospace family.
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// Upright or slanted glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Normal style.
    Normal,
    /// Italic style.
    Italic,
    /// Oblique style.
    Oblique,
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    /// The advance width along the baseline.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// Estimates text extents from an average glyph advance.
///
/// Every character advances `advance_em * font_size`; the baseline sits at
/// 0.8em. Bold text is widened by 10%.
#[derive(Clone, Copy, Debug)]
pub struct HeuristicTextMeasurer {
    /// Average glyph advance as a fraction of the font size.
    pub advance_em: f64,
}

impl HeuristicTextMeasurer {
    /// Creates a measurer with the given average advance (in ems).
    #[must_use]
    pub fn new(advance_em: f64) -> Self {
        Self { advance_em }
    }
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let weight = if style.font_weight >= FontWeight::BOLD {
            1.1
        } else {
            1.0
        };
        let advance_width =
            self.advance_em * weight * style.font_size * text.chars().count() as f64;
        TextMetrics {
            advance_width,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}

/// A measurer where every character advances the same number of pixels,
/// regardless of font size.
///
/// The line height is the font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMeasurer {
    /// Pixel advance of every character.
    pub advance: f64,
}

impl FixedAdvanceMeasurer {
    /// Creates a measurer with the given per-character advance.
    #[must_use]
    pub fn new(advance: f64) -> Self {
        Self { advance }
    }
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        TextMetrics {
            advance_width: self.advance * text.chars().count() as f64,
            ascent: style.font_size,
            descent: 0.0,
            leading: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_width_scales_with_length_and_size() {
        let m = HeuristicTextMeasurer::default();
        let small = m.measure("0.5", &TextStyle::new(10.0));
        let large = m.measure("0.5", &TextStyle::new(20.0));
        let longer = m.measure("0.25", &TextStyle::new(10.0));
        assert!((small.advance_width - 18.0).abs() < 1e-9, "{small:?}");
        assert!((large.advance_width - 2.0 * small.advance_width).abs() < 1e-9);
        assert!(longer.advance_width > small.advance_width);
    }

    #[test]
    fn heuristic_bold_is_wider() {
        let m = HeuristicTextMeasurer::default();
        let normal = m.measure("2024", &TextStyle::new(12.0));
        let bold = m.measure("2024", &TextStyle::new(12.0).with_weight(FontWeight::BOLD));
        assert!(bold.advance_width > normal.advance_width);
    }

    #[test]
    fn fixed_advance_counts_chars_not_bytes() {
        let m = FixedAdvanceMeasurer::new(3.0);
        let style = TextStyle::default();
        assert_eq!(m.measure("0.00M", &style).advance_width, 15.0);
        assert_eq!(m.measure("\u{e9}t\u{e9}", &style).advance_width, 9.0);
        assert_eq!(m.line_height(&style), 10.0);
    }

    #[test]
    fn measurer_works_through_references_and_arcs() {
        let m = FixedAdvanceMeasurer::new(2.0);
        let shared: Arc<dyn TextMeasurer> = Arc::new(m);
        let style = TextStyle::new(8.0);
        assert_eq!(shared.measure("abc", &style).advance_width, 6.0);
        assert_eq!((&m).measure("abc", &style).advance_width, 6.0);
    }
}
