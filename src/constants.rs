pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const DEFAULT_FPS: u32 = 60;              // Frames per second unless overridden

pub const FADE_DURATION: f32 = 1.0;           // Background crossfade (seconds)
pub const OVERLAY_ALPHA: f32 = 0.6;           // Darkening over background art

pub const SLIDER_MIN: u8 = 0;
pub const SLIDER_MAX: u8 = 100;
pub const SLIDER_DEFAULT: u8 = 50;
pub const SLIDER_KEY_STEP: u8 = 5;            // Up/Down arrow increment

pub const SLIDE_FONT_SIZE: i32 = 44;
pub const SLIDE_TEXT_WIDTH: i32 = 1100;       // Wrap width for slide text
pub const BUTTON_FONT_SIZE: i32 = 28;
pub const SMALL_FONT_SIZE: i32 = 20;
