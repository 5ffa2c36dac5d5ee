use printpdf::{Color, Rgb};
use serde::Serialize;

/// An sRGB tone from the brand palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tone {
    r: u8,
    g: u8,
    b: u8,
}

impl Tone {
    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub(crate) fn color(self) -> Color {
        Color::Rgb(Rgb::new(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            None,
        ))
    }
}

pub(crate) const BLACK: Tone = Tone::new(23, 23, 23);
pub(crate) const BODY: Tone = Tone::new(63, 63, 70);
pub(crate) const GRAY: Tone = Tone::new(115, 115, 115);
pub(crate) const LIGHT: Tone = Tone::new(163, 163, 163);
pub(crate) const RULE: Tone = Tone::new(228, 228, 228);
pub(crate) const PAPER: Tone = Tone::new(250, 250, 249);
pub(crate) const RED: Tone = Tone::new(220, 38, 38);
pub(crate) const RED_BG: Tone = Tone::new(254, 242, 242);
pub(crate) const AMBER: Tone = Tone::new(180, 83, 9);
pub(crate) const AMBER_BG: Tone = Tone::new(255, 251, 235);
pub(crate) const GREEN: Tone = Tone::new(22, 163, 74);
pub(crate) const GREEN_BG: Tone = Tone::new(240, 253, 244);
pub(crate) const DARK: Tone = Tone::new(10, 10, 10);
pub(crate) const WHITE: Tone = Tone::new(255, 255, 255);
pub(crate) const GOLD: Tone = Tone::new(180, 130, 30);

/// Three-way severity banding for a 1-10 rating. Single-sourced: the
/// cover bars, detail cards, and the full-score table all band through
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityBand {
    NeedsAttention,
    Developing,
    Solid,
}

impl SeverityBand {
    pub const fn for_rating(rating: u8) -> Self {
        match rating {
            0..=3 => Self::NeedsAttention,
            4..=6 => Self::Developing,
            _ => Self::Solid,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NeedsAttention => "Needs attention",
            Self::Developing => "Developing",
            Self::Solid => "Solid",
        }
    }

    pub(crate) const fn tone(self) -> Tone {
        match self {
            Self::NeedsAttention => RED,
            Self::Developing => AMBER,
            Self::Solid => GREEN,
        }
    }

    pub(crate) const fn background(self) -> Tone {
        match self {
            Self::NeedsAttention => RED_BG,
            Self::Developing => AMBER_BG,
            Self::Solid => GREEN_BG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_follow_the_three_way_split() {
        assert_eq!(SeverityBand::for_rating(1), SeverityBand::NeedsAttention);
        assert_eq!(SeverityBand::for_rating(3), SeverityBand::NeedsAttention);
        assert_eq!(SeverityBand::for_rating(4), SeverityBand::Developing);
        assert_eq!(SeverityBand::for_rating(6), SeverityBand::Developing);
        assert_eq!(SeverityBand::for_rating(7), SeverityBand::Solid);
        assert_eq!(SeverityBand::for_rating(10), SeverityBand::Solid);
    }

    #[test]
    fn band_labels_match_report_copy() {
        assert_eq!(SeverityBand::NeedsAttention.label(), "Needs attention");
        assert_eq!(SeverityBand::Developing.label(), "Developing");
        assert_eq!(SeverityBand::Solid.label(), "Solid");
    }
}
