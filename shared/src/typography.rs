//! Vertical rhythm helpers producing CSS `rem` lengths.
//!
//! The numbers follow the classic "Wordpress 2016" type scale: a 16px base
//! font, 1.75 base line height and a 5/2 modular scale ratio.

/// Font size and matching line height for a step on the modular scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontScale {
    /// CSS `font-size`.
    pub font_size: String,
    /// CSS `line-height`.
    pub line_height: String,
}

impl FontScale {
    /// Inline `style` fragment.
    pub fn to_style(&self) -> String {
        format!("font-size: {}; line-height: {};", self.font_size, self.line_height)
    }
}

/// Type scale parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    /// Root font size in pixels.
    pub base_font_size_px: f64,
    /// Line height as a multiple of the base font size.
    pub base_line_height: f64,
    /// Ratio between adjacent steps of the modular scale.
    pub scale_ratio: f64,
    /// Minimum padding kept above and below a line of text, in pixels.
    pub min_line_padding_px: f64,
}

impl Typography {
    /// The site's type scale.
    pub const WORDPRESS_2016: Self = Self {
        base_font_size_px: 16.0,
        base_line_height: 1.75,
        scale_ratio: 5.0 / 2.0,
        min_line_padding_px: 2.0,
    };

    /// Length of `lines` base lines, e.g. `rhythm(1.5) == "2.625rem"`.
    pub fn rhythm(&self, lines: f64) -> String {
        format_rem(lines * self.base_line_height)
    }

    /// Font size `value` steps up the modular scale, with a line height
    /// rounded up to the nearest half line.
    pub fn scale(&self, value: f64) -> FontScale {
        let font_size_rem = self.scale_ratio.powf(value);
        let font_size_px = font_size_rem * self.base_font_size_px;
        let line_height_px = self.base_line_height * self.base_font_size_px;
        let padded = font_size_px + 2.0 * self.min_line_padding_px;
        let lines = ((2.0 * padded / line_height_px).ceil() / 2.0).max(1.0);
        FontScale {
            font_size: format_rem(font_size_rem),
            line_height: self.rhythm(lines),
        }
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self::WORDPRESS_2016
    }
}

/// Shorthand for [`Typography::rhythm`] on the site's scale.
pub fn rhythm(lines: f64) -> String {
    Typography::WORDPRESS_2016.rhythm(lines)
}

/// Shorthand for [`Typography::scale`] on the site's scale.
pub fn scale(value: f64) -> FontScale {
    Typography::WORDPRESS_2016.scale(value)
}

fn format_rem(value: f64) -> String {
    let rounded = (value * 100_000.0).round() / 100_000.0;
    format!("{rounded}rem")
}
