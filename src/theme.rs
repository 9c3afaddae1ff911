//! The two looks a show can be presented in.
//!
//! A theme only decides colours, wording and decoration. Navigation is the
//! same in both.

use clap::ValueEnum;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Exhibition,
    Festival,
}

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub backdrop: Color,        // Shown where art is missing
    pub overlay: Color,         // Drawn over art, alpha applied separately
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub button_border: Color,
    pub button_fill: Color,
    pub closing_top: Color,
    pub closing_bottom: Color,
}

pub struct ClosingSection {
    pub heading: &'static str,
    pub body: &'static str,
}

pub struct Closing {
    pub title: &'static str,
    pub sections: [ClosingSection; 3],
}

pub struct Labels {
    pub next: &'static str,
    pub finish: &'static str,
    pub back: &'static str,
    pub restart: &'static str,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Exhibition => Palette {
                backdrop: Color::new(23, 23, 23, 255),
                overlay: Color::BLACK,
                text: Color::new(245, 245, 245, 255),
                text_dim: Color::new(245, 245, 245, 110),
                accent: Color::new(255, 255, 255, 255),
                button_border: Color::new(255, 255, 255, 52),
                button_fill: Color::new(255, 255, 255, 13),
                closing_top: Color::new(38, 38, 38, 255),
                closing_bottom: Color::BLACK,
            },
            Theme::Festival => Palette {
                backdrop: Color::new(58, 20, 48, 255),
                overlay: Color::new(40, 8, 30, 255),
                text: Color::new(255, 244, 224, 255),
                text_dim: Color::new(255, 220, 170, 140),
                accent: Color::new(255, 176, 59, 255),
                button_border: Color::new(255, 176, 59, 150),
                button_fill: Color::new(255, 120, 80, 40),
                closing_top: Color::new(120, 32, 72, 255),
                closing_bottom: Color::new(34, 10, 48, 255),
            },
        }
    }

    /// Every string here is drawn with raylib's built-in font, which only
    /// covers ASCII. The exhibition's Thai finish label ("จบการเดินทาง") is
    /// therefore shown in English.
    pub fn labels(self) -> Labels {
        match self {
            Theme::Exhibition => Labels {
                next: "NEXT",
                finish: "END THE JOURNEY",
                back: "BACK",
                restart: "RESTART THE JOURNEY",
            },
            Theme::Festival => Labels {
                next: "ONWARD",
                finish: "JOIN THE CELEBRATION",
                back: "BACK",
                restart: "DANCE AGAIN",
            },
        }
    }

    pub fn closing(self) -> Closing {
        match self {
            Theme::Exhibition => Closing {
                title: "Behind the Exhibition",
                sections: [
                    ClosingSection {
                        heading: "SECTION 1 - CONCEPT",
                        body: "This exhibition represents a journey of the heart, moving through memories, emotions, and transformation. It is a visual exploration of the silent spaces between our thoughts.",
                    },
                    ClosingSection {
                        heading: "SECTION 2 - PURPOSE",
                        body: "The goal is to let visitors reflect on their own inner story, providing a safe sanctuary to acknowledge feelings that are often overlooked in the rush of daily life.",
                    },
                    ClosingSection {
                        heading: "SECTION 3 - MESSAGE",
                        body: "\"Growth is not always a loud blooming; sometimes it is the quiet turning of a page, a subtle shift in the light, and the brave act of finally seeing yourself.\"",
                    },
                ],
            },
            Theme::Festival => Closing {
                title: "Behind the Festival",
                sections: [
                    ClosingSection {
                        heading: "SECTION 1 - CONCEPT",
                        body: "The festival gathers every feeling under one sky: the loud ones, the shy ones, and the ones that only show up after the music stops.",
                    },
                    ClosingSection {
                        heading: "SECTION 2 - PURPOSE",
                        body: "It invites each guest to celebrate where they are right now, without needing to be anywhere else first.",
                    },
                    ClosingSection {
                        heading: "SECTION 3 - MESSAGE",
                        body: "\"Joy is not a finish line. It is a lantern you keep lighting, one small flame at a time.\"",
                    },
                ],
            },
        }
    }

    pub fn has_confetti(self) -> bool {
        self == Theme::Festival
    }
}

/// Copy of `color` with its alpha scaled by `factor` (0..=1).
pub fn faded(color: Color, factor: f32) -> Color {
    let a = (color.a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
    Color::new(color.r, color.g, color.b, a)
}
