use std::ops::Deref;

use raylib::prelude::*;

use crate::constants::*;
use crate::emoji::Emoji;
use crate::theme::{Palette, faded};

const FACE: Color = Color::new(255, 204, 77, 255);
const FEATURE: Color = Color::new(92, 58, 20, 255);
const TEAR: Color = Color::new(110, 180, 255, 255);

/// Draw target that can still reach the handle, which owns text measuring.
pub trait Canvas: RaylibDraw + Deref<Target = RaylibHandle> {}

impl<T: RaylibDraw + Deref<Target = RaylibHandle>> Canvas for T {}

pub fn draw_text_centered<D: Canvas>(d: &mut D, text: &str, center_x: f32, y: f32, size: i32, color: Color) {
    let rl: &RaylibHandle = d;
    let width = rl.measure_text(text, size);
    d.draw_text(text, center_x as i32 - width / 2, y as i32, size, color);
}

pub fn draw_button<D: Canvas>(d: &mut D, rect: Rectangle, label: &str, size: i32, hovered: bool, palette: &Palette) {
    let base = palette.button_fill;
    let fill = if hovered {
        Color::new(base.r, base.g, base.b, base.a.saturating_mul(3))
    } else {
        base
    };
    d.draw_rectangle_rec(rect, fill);
    d.draw_rectangle_lines_ex(rect, 1.5, palette.button_border);
    draw_text_centered(
        d,
        label,
        rect.x + rect.width / 2.0,
        rect.y + (rect.height - size as f32) / 2.0,
        size,
        palette.text,
    );
}

/// Text-only control without a frame, used for the back link.
pub fn draw_link<D: Canvas>(d: &mut D, rect: Rectangle, label: &str, hovered: bool, palette: &Palette) {
    let color = if hovered { palette.text } else { palette.text_dim };
    draw_text_centered(
        d,
        label,
        rect.x + rect.width / 2.0,
        rect.y + (rect.height - SMALL_FONT_SIZE as f32) / 2.0,
        SMALL_FONT_SIZE,
        color,
    );
}

pub fn draw_slider<D: Canvas>(d: &mut D, track: Rectangle, value: u8, palette: &Palette) {
    let t = value as f32 / SLIDER_MAX as f32;
    d.draw_rectangle_rec(track, palette.button_border);
    d.draw_rectangle_rec(
        Rectangle::new(track.x, track.y, track.width * t, track.height),
        palette.accent,
    );
    let knob = Vector2::new(track.x + track.width * t, track.y + track.height / 2.0);
    d.draw_circle_v(knob, 16.0, palette.accent);
    draw_text_centered(
        d,
        &format!("{}%", value),
        track.x + track.width / 2.0,
        track.y + 48.0,
        BUTTON_FONT_SIZE,
        faded(palette.text, 0.8),
    );
}

fn draw_arc<D: RaylibDraw>(d: &mut D, center: Vector2, radius: f32, start: f32, end: f32, color: Color) {
    d.draw_ring(center, radius - 3.0, radius + 3.0, start, end, 24, color);
}

/// Draws a mood face inside `cell`. Unselected faces are dimmed when some
/// other face is chosen.
pub fn draw_emoji<D: RaylibDraw>(d: &mut D, cell: Rectangle, emoji: Emoji, selection: Option<Emoji>, palette: &Palette) {
    let selected = selection == Some(emoji);
    let (scale, alpha) = match selection {
        Some(_) if selected => (1.25, 1.0),
        _ => (1.0, 0.4),
    };

    let c = Vector2::new(cell.x + cell.width / 2.0, cell.y + cell.height / 2.0);
    let r = cell.width * 0.4 * scale;
    let s = r / 48.0; // features are laid out for a 48px face

    if selected {
        d.draw_circle_v(c, r + 14.0, faded(palette.accent, 0.25));
    }
    d.draw_circle_v(c, r, faded(FACE, alpha));

    let feature = faded(FEATURE, alpha);
    let left_eye = Vector2::new(c.x - 16.0 * s, c.y - 10.0 * s);
    let right_eye = Vector2::new(c.x + 16.0 * s, c.y - 10.0 * s);

    match emoji {
        Emoji::Happy => {
            d.draw_circle_v(left_eye, 5.0 * s, feature);
            d.draw_circle_v(right_eye, 5.0 * s, feature);
            draw_arc(d, Vector2::new(c.x, c.y + 2.0 * s), 22.0 * s, 30.0, 150.0, feature);
        }
        Emoji::Sad => {
            d.draw_circle_v(left_eye, 5.0 * s, feature);
            d.draw_circle_v(right_eye, 5.0 * s, feature);
            draw_arc(d, Vector2::new(c.x, c.y + 34.0 * s), 18.0 * s, 220.0, 320.0, feature);
            d.draw_circle_v(Vector2::new(left_eye.x - 2.0 * s, left_eye.y + 14.0 * s), 5.0 * s, faded(TEAR, alpha));
        }
        Emoji::Angry => {
            d.draw_circle_v(left_eye, 5.0 * s, feature);
            d.draw_circle_v(right_eye, 5.0 * s, feature);
            d.draw_line_ex(
                Vector2::new(left_eye.x - 10.0 * s, left_eye.y - 14.0 * s),
                Vector2::new(left_eye.x + 8.0 * s, left_eye.y - 6.0 * s),
                4.0 * s,
                feature,
            );
            d.draw_line_ex(
                Vector2::new(right_eye.x + 10.0 * s, right_eye.y - 14.0 * s),
                Vector2::new(right_eye.x - 8.0 * s, right_eye.y - 6.0 * s),
                4.0 * s,
                feature,
            );
            draw_arc(d, Vector2::new(c.x, c.y + 34.0 * s), 16.0 * s, 225.0, 315.0, feature);
        }
        Emoji::Sleepy => {
            for eye in [left_eye, right_eye] {
                d.draw_line_ex(
                    Vector2::new(eye.x - 8.0 * s, eye.y),
                    Vector2::new(eye.x + 8.0 * s, eye.y),
                    4.0 * s,
                    feature,
                );
            }
            d.draw_circle_v(Vector2::new(c.x, c.y + 22.0 * s), 7.0 * s, feature);
            d.draw_text(
                "z",
                (c.x + r * 0.7) as i32,
                (c.y - r * 1.1) as i32,
                (24.0 * s) as i32,
                faded(palette.text, alpha),
            );
        }
        Emoji::Relieved => {
            for eye in [left_eye, right_eye] {
                draw_arc(d, Vector2::new(eye.x, eye.y - 4.0 * s), 8.0 * s, 30.0, 150.0, feature);
            }
            draw_arc(d, Vector2::new(c.x, c.y + 6.0 * s), 18.0 * s, 40.0, 140.0, feature);
        }
    }
}
