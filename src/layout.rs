use raylib::prelude::*;

use crate::constants::*;
use crate::emoji::Emoji;

/// Fixed positions of every control, in render-target coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub back: Rectangle,
    pub next: Rectangle,
    pub restart: Rectangle,
    pub slider_track: Rectangle,
    pub slider_hit: Rectangle,
    pub emoji_cells: [Rectangle; 5],
}

const MARGIN: f32 = 24.0;
const EMOJI_CELL: f32 = 120.0;
const EMOJI_GAP: f32 = 36.0;
const SLIDER_WIDTH: f32 = 480.0;

pub const WIDGET_TOP: f32 = 640.0;

impl Layout {
    pub fn new() -> Layout {
        let w = RENDER_WIDTH as f32;
        let h = RENDER_HEIGHT as f32;

        let next_size = Vector2::new(520.0, 80.0);
        let restart_size = Vector2::new(600.0, 80.0);

        let slider_track = Rectangle::new((w - SLIDER_WIDTH) / 2.0, WIDGET_TOP + 20.0, SLIDER_WIDTH, 8.0);
        // Generous vertical grab area around the thin track
        let slider_hit = Rectangle::new(
            slider_track.x - 16.0,
            slider_track.y - 28.0,
            slider_track.width + 32.0,
            slider_track.height + 56.0,
        );

        let row_width = EMOJI_CELL * Emoji::ALL.len() as f32 + EMOJI_GAP * (Emoji::ALL.len() - 1) as f32;
        let row_x = (w - row_width) / 2.0;
        let emoji_cells = std::array::from_fn(|i| {
            Rectangle::new(row_x + i as f32 * (EMOJI_CELL + EMOJI_GAP), WIDGET_TOP, EMOJI_CELL, EMOJI_CELL)
        });

        Layout {
            back: Rectangle::new(w - MARGIN - 140.0, MARGIN, 140.0, 48.0),
            next: Rectangle::new((w - next_size.x) / 2.0, h - 48.0 - next_size.y, next_size.x, next_size.y),
            restart: Rectangle::new((w - restart_size.x) / 2.0, h - 48.0 - restart_size.y, restart_size.x, restart_size.y),
            slider_track,
            slider_hit,
            emoji_cells,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new()
    }
}

pub fn contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// Maps a window position into render-target space. The framebuffer is
/// stretched over the whole window, so each axis scales on its own.
pub fn to_render_space(point: Vector2, screen_width: f32, screen_height: f32) -> Vector2 {
    if screen_width <= 0.0 || screen_height <= 0.0 {
        return point;
    }
    Vector2::new(
        point.x * RENDER_WIDTH as f32 / screen_width,
        point.y * RENDER_HEIGHT as f32 / screen_height,
    )
}

/// Source rectangle that makes a `tex_width` x `tex_height` texture cover the
/// whole render target, centered, without distortion.
pub fn cover_source(tex_width: f32, tex_height: f32) -> Rectangle {
    let target_ratio = RENDER_WIDTH as f32 / RENDER_HEIGHT as f32;
    let tex_ratio = tex_width / tex_height;

    if tex_ratio > target_ratio {
        // Too wide: crop left and right
        let width = tex_height * target_ratio;
        Rectangle::new((tex_width - width) / 2.0, 0.0, width, tex_height)
    } else {
        let height = tex_width / target_ratio;
        Rectangle::new(0.0, (tex_height - height) / 2.0, tex_width, height)
    }
}

/// Greedy word wrap. A single word wider than `max_width` gets a line of its own.
pub fn wrap_text(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
