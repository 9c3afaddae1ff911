use raylib::prelude::*;
use tracing::{info, warn};

use crate::catalog::{Catalog, InteractiveKind};
use crate::confetti::Confetti;
use crate::constants::*;
use crate::emoji::Emoji;
use crate::layout::{Layout, WIDGET_TOP, contains, wrap_text};
use crate::slide::{SlideBackdrop, step_opacity};
use crate::state::{NavigationState, NextLabel};
use crate::texture_loader::load_background;
use crate::theme::{Palette, Theme, faded};
use crate::widgets::*;

const TITLE_FONT_SIZE: i32 = 60;
const SECTION_WIDTH: i32 = 1200;
const SECTION_LINE_HEIGHT: f32 = 36.0;

/// Draws the story from the navigation state. Owns every texture.
pub struct StoryEngine {
    theme: Theme,
    palette: Palette,
    layout: Layout,
    backdrops: Vec<SlideBackdrop>,
    slide_lines: Vec<Vec<String>>,
    closing_lines: Vec<Vec<String>>,
    closing_opacity: f32,
    confetti: Option<Confetti>,
}

impl StoryEngine {
    pub fn new(theme: Theme, layout: Layout, rl: &RaylibHandle) -> Self {
        let closing_lines = theme
            .closing()
            .sections
            .iter()
            .map(|section| wrap_text(section.body, SECTION_WIDTH, |s| rl.measure_text(s, BUTTON_FONT_SIZE)))
            .collect();

        Self {
            theme,
            palette: theme.palette(),
            layout,
            backdrops: Vec::new(),
            slide_lines: Vec::new(),
            closing_lines,
            closing_opacity: 0.0,
            confetti: theme.has_confetti().then(Confetti::new),
        }
    }

    /// Loads every background. Art that fails to load is replaced by the
    /// theme backdrop; returns how many images loaded.
    pub fn initialize(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, catalog: &Catalog, nav: &NavigationState) -> usize {
        let mut loaded = 0;
        for slide in catalog.iter() {
            let image = match load_background(rl, thread, &slide.background) {
                Ok(texture) => {
                    loaded += 1;
                    Some(texture)
                }
                Err(e) => {
                    warn!(error = %e, "using plain backdrop");
                    None
                }
            };
            self.backdrops.push(SlideBackdrop::new(image));
            self.slide_lines
                .push(wrap_text(&slide.text, SLIDE_TEXT_WIDTH, |s| rl.measure_text(s, SLIDE_FONT_SIZE)));
        }
        info!(slides = catalog.len(), loaded, theme = ?self.theme, "story ready");

        self.sync(nav);
        for backdrop in self.backdrops.iter_mut() {
            backdrop.settle();
        }
        loaded
    }

    /// Points every backdrop at its target opacity for the new state.
    pub fn sync(&mut self, nav: &NavigationState) {
        let active = nav.position();
        for (i, backdrop) in self.backdrops.iter_mut().enumerate() {
            backdrop.set_active(active == Some(i));
        }
    }

    pub fn update(&mut self, dt: f32, nav: &NavigationState) {
        for backdrop in self.backdrops.iter_mut() {
            backdrop.update(dt);
        }
        let target = if nav.on_closing_screen() { 1.0 } else { 0.0 };
        self.closing_opacity = step_opacity(self.closing_opacity, target, dt);
        if let Some(confetti) = self.confetti.as_mut() {
            confetti.update(dt);
        }
    }

    /// `pointer` is in render space and only drives hover highlights.
    pub fn draw<D: Canvas>(&self, d: &mut D, nav: &NavigationState, catalog: &Catalog, pointer: Vector2) {
        d.clear_background(Color::BLACK);

        for backdrop in &self.backdrops {
            backdrop.draw(d, &self.palette);
        }
        self.draw_closing_background(d);

        if let Some(confetti) = &self.confetti {
            let alpha = if nav.on_closing_screen() { 1.0 } else { 0.5 };
            confetti.draw(d, alpha);
        }

        let controls = nav.controls(catalog);
        let labels = self.theme.labels();

        if controls.back {
            draw_link(d, self.layout.back, labels.back, contains(self.layout.back, pointer), &self.palette);
        }

        match nav.position() {
            Some(position) => {
                self.draw_slide_text(d, position);
                match controls.widget {
                    InteractiveKind::Slider => draw_slider(d, self.layout.slider_track, nav.slider(), &self.palette),
                    InteractiveKind::Emoji => {
                        for (cell, emoji) in self.layout.emoji_cells.iter().zip(Emoji::ALL) {
                            draw_emoji(d, *cell, emoji, nav.emoji(), &self.palette);
                        }
                    }
                    InteractiveKind::None => {}
                }
            }
            None => self.draw_closing_content(d),
        }

        if let Some(next) = controls.next {
            let label = match next {
                NextLabel::Next => labels.next,
                NextLabel::Finish => labels.finish,
            };
            draw_button(
                d,
                self.layout.next,
                label,
                BUTTON_FONT_SIZE,
                contains(self.layout.next, pointer),
                &self.palette,
            );
        }
        if controls.restart {
            draw_button(
                d,
                self.layout.restart,
                labels.restart,
                BUTTON_FONT_SIZE,
                contains(self.layout.restart, pointer),
                &self.palette,
            );
        }
    }

    fn draw_slide_text<D: Canvas>(&self, d: &mut D, position: usize) {
        let Some(lines) = self.slide_lines.get(position) else {
            return;
        };
        let line_height = SLIDE_FONT_SIZE as f32 * 1.6;
        // Text block sits above the widget row, centered in the space left
        let block = lines.len() as f32 * line_height;
        let top = (WIDGET_TOP - 80.0 - block).max(0.0) / 2.0 + 80.0;
        for (i, line) in lines.iter().enumerate() {
            draw_text_centered(
                d,
                line,
                RENDER_WIDTH as f32 / 2.0,
                top + i as f32 * line_height,
                SLIDE_FONT_SIZE,
                self.palette.text,
            );
        }
    }

    fn draw_closing_background<D: RaylibDraw>(&self, d: &mut D) {
        if self.closing_opacity <= 0.0 {
            return;
        }
        d.draw_rectangle_gradient_v(
            0,
            0,
            RENDER_WIDTH,
            RENDER_HEIGHT,
            faded(self.palette.closing_top, self.closing_opacity),
            faded(self.palette.closing_bottom, self.closing_opacity),
        );
    }

    fn draw_closing_content<D: Canvas>(&self, d: &mut D) {
        let closing = self.theme.closing();
        let center_x = RENDER_WIDTH as f32 / 2.0;
        let left = (RENDER_WIDTH - SECTION_WIDTH) / 2;

        draw_text_centered(d, closing.title, center_x, 110.0, TITLE_FONT_SIZE, self.palette.text);
        d.draw_line_ex(
            Vector2::new(left as f32, 210.0),
            Vector2::new((left + SECTION_WIDTH) as f32, 210.0),
            1.0,
            faded(self.palette.text, 0.1),
        );

        let mut y = 260.0;
        for (section, lines) in closing.sections.iter().zip(&self.closing_lines) {
            d.draw_text(section.heading, left, y as i32, SMALL_FONT_SIZE, self.palette.text_dim);
            y += SMALL_FONT_SIZE as f32 + 14.0;
            for line in lines {
                d.draw_text(line, left, y as i32, BUTTON_FONT_SIZE, faded(self.palette.text, 0.85));
                y += SECTION_LINE_HEIGHT;
            }
            y += 40.0;
        }
    }
}
