use raylib::prelude::*;

use crate::constants::*;
use crate::layout::cover_source;
use crate::theme::{Palette, faded};

/// Moves `current` toward `target` by at most `dt / FADE_DURATION`.
pub fn step_opacity(current: f32, target: f32, dt: f32) -> f32 {
    let step = dt / FADE_DURATION;
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}

/// Background of one slide. Art is optional; without it the theme backdrop
/// colour is shown.
pub struct SlideBackdrop {
    image: Option<Texture2D>,
    pub opacity: f32,
    target: f32,
}

impl SlideBackdrop {
    pub fn new(image: Option<Texture2D>) -> Self {
        Self {
            image,
            opacity: 0.0,
            target: 0.0,
        }
    }

    pub fn set_active(&mut self, active: bool) {
        self.target = if active { 1.0 } else { 0.0 };
    }

    /// Jumps straight to the target without fading.
    pub fn settle(&mut self) {
        self.opacity = self.target;
    }

    pub fn update(&mut self, dt: f32) {
        self.opacity = step_opacity(self.opacity, self.target, dt);
    }

    pub fn draw<D: RaylibDraw>(&self, d: &mut D, palette: &Palette) {
        if self.opacity <= 0.0 {
            return;
        }
        let dest = Rectangle::new(0.0, 0.0, RENDER_WIDTH as f32, RENDER_HEIGHT as f32);

        match &self.image {
            Some(image) => {
                let source = cover_source(image.width() as f32, image.height() as f32);
                d.draw_texture_pro(
                    image,
                    source,
                    dest,
                    Vector2::new(0.0, 0.0),
                    0.0,
                    faded(Color::WHITE, self.opacity),
                );
            }
            None => d.draw_rectangle_rec(dest, faded(palette.backdrop, self.opacity)),
        }

        d.draw_rectangle_rec(dest, faded(palette.overlay, OVERLAY_ALPHA * self.opacity));
    }
}
