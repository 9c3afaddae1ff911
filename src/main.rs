use anyhow::{Context, Result, anyhow};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;

mod catalog;
mod config;
mod confetti;
mod constants;
mod emoji;
mod engine;
mod input;
mod layout;
mod slide;
mod state;
mod texture_loader;
mod theme;
mod widgets;

use crate::config::{Args, init_logging};
use crate::constants::*;
use crate::engine::StoryEngine;
use crate::input::InputState;
use crate::layout::{Layout, to_render_space};
use crate::state::NavigationState;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let catalog = args.load_catalog().context("could not load the slide catalog")?;
    info!(slides = catalog.len(), theme = ?args.theme, "starting");

    let mut builder = raylib::init();
    builder
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Story Slides")
        .vsync()
        .resizable();
    if args.fullscreen {
        builder.fullscreen();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let layout = Layout::new();
    let mut nav = NavigationState::new();
    let mut input = InputState::new();
    let mut engine = StoryEngine::new(args.theme, layout, &rl);
    engine.initialize(&mut rl, &thread, &catalog, &nav);

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as _, RENDER_HEIGHT as _)
        .map_err(|e| anyhow!("failed to create render texture: {}", e))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        let controls = nav.controls(&catalog);
        let mut changed = false;
        for action in input.poll(&mut rl, &layout, &nav, &controls) {
            changed |= nav.apply(action, &catalog);
        }
        if changed {
            engine.sync(&nav);
        }
        engine.update(dt, &nav);

        let sw = rl.get_screen_width() as f32;
        let sh = rl.get_screen_height() as f32;
        let pointer = to_render_space(rl.get_mouse_position(), sw, sh);

        rl.draw_texture_mode(&thread, &mut framebuffer, |mut d| {
            engine.draw(&mut d, &nav, &catalog, pointer);
        });

        // Render target is stored upside down, flip while scaling to the window
        let mut d = rl.begin_drawing(&thread);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    info!("window closed");
    Ok(())
}
