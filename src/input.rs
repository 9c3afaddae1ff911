use raylib::prelude::*;

use crate::catalog::InteractiveKind;
use crate::constants::{SLIDER_KEY_STEP, SLIDER_MAX, SLIDER_MIN};
use crate::emoji::Emoji;
use crate::layout::{Layout, contains, to_render_space};
use crate::state::{Action, Controls, NavigationState};

/// Slider value for a pointer at `x`, clamped to the track.
pub fn slider_value_at(x: f32, track: Rectangle) -> u8 {
    if track.width <= 0.0 {
        return SLIDER_MIN;
    }
    let t = ((x - track.x) / track.width).clamp(0.0, 1.0);
    (t * SLIDER_MAX as f32).round() as u8
}

/// Turns raw pointer and keyboard input into actions, offering only the
/// controls that are currently shown.
#[derive(Debug, Default)]
pub struct InputState {
    dragging_slider: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `point` is already in render space.
    pub fn pointer(
        &mut self,
        point: Vector2,
        pressed: bool,
        down: bool,
        layout: &Layout,
        controls: &Controls,
    ) -> Option<Action> {
        if controls.widget != InteractiveKind::Slider || !down {
            self.dragging_slider = false;
        }
        if self.dragging_slider {
            return Some(Action::SetSlider(slider_value_at(point.x, layout.slider_track)));
        }
        if !pressed {
            return None;
        }

        if controls.back && contains(layout.back, point) {
            return Some(Action::Retreat);
        }
        if controls.next.is_some() && contains(layout.next, point) {
            return Some(Action::Advance);
        }
        if controls.restart && contains(layout.restart, point) {
            return Some(Action::Restart);
        }
        match controls.widget {
            InteractiveKind::Slider if contains(layout.slider_hit, point) => {
                self.dragging_slider = true;
                Some(Action::SetSlider(slider_value_at(point.x, layout.slider_track)))
            }
            InteractiveKind::Emoji => layout
                .emoji_cells
                .iter()
                .position(|cell| contains(*cell, point))
                .and_then(Emoji::from_slot)
                .map(Action::SetEmoji),
            _ => None,
        }
    }

    pub fn key(&self, key: KeyboardKey, controls: &Controls, slider: u8) -> Option<Action> {
        use KeyboardKey::*;
        match key {
            KEY_RIGHT | KEY_SPACE | KEY_ENTER if controls.next.is_some() => Some(Action::Advance),
            KEY_LEFT | KEY_BACKSPACE if controls.back => Some(Action::Retreat),
            KEY_R if controls.restart => Some(Action::Restart),
            KEY_UP if controls.widget == InteractiveKind::Slider => {
                Some(Action::SetSlider(slider.saturating_add(SLIDER_KEY_STEP).min(SLIDER_MAX)))
            }
            KEY_DOWN if controls.widget == InteractiveKind::Slider => {
                Some(Action::SetSlider(slider.saturating_sub(SLIDER_KEY_STEP).max(SLIDER_MIN)))
            }
            KEY_ONE | KEY_TWO | KEY_THREE | KEY_FOUR | KEY_FIVE
                if controls.widget == InteractiveKind::Emoji =>
            {
                let slot = key as usize - KEY_ONE as usize;
                Emoji::from_slot(slot).map(Action::SetEmoji)
            }
            _ => None,
        }
    }

    /// Collects this frame's actions from the window.
    pub fn poll(&mut self, rl: &mut RaylibHandle, layout: &Layout, nav: &NavigationState, controls: &Controls) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Some(key) = rl.get_key_pressed() {
            if let Some(action) = self.key(key, controls, nav.slider()) {
                actions.push(action);
            }
        }

        let point = to_render_space(
            rl.get_mouse_position(),
            rl.get_screen_width() as f32,
            rl.get_screen_height() as f32,
        );
        let pressed = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
        let down = rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT);
        if let Some(action) = self.pointer(point, pressed, down, layout, controls) {
            // Dragging repeats the same value every frame
            if action != Action::SetSlider(nav.slider()) {
                actions.push(action);
            }
        }

        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NextLabel;

    fn browsing(widget: InteractiveKind, back: bool) -> Controls {
        Controls {
            back,
            next: Some(NextLabel::Next),
            widget,
            restart: false,
        }
    }

    fn closing() -> Controls {
        Controls {
            back: true,
            next: None,
            widget: InteractiveKind::None,
            restart: true,
        }
    }

    fn center(r: Rectangle) -> Vector2 {
        Vector2::new(r.x + r.width / 2.0, r.y + r.height / 2.0)
    }

    #[test]
    fn slider_value_is_clamped_to_track() {
        let track = Rectangle::new(100.0, 0.0, 200.0, 8.0);
        assert_eq!(slider_value_at(0.0, track), 0);
        assert_eq!(slider_value_at(100.0, track), 0);
        assert_eq!(slider_value_at(200.0, track), 50);
        assert_eq!(slider_value_at(300.0, track), 100);
        assert_eq!(slider_value_at(9000.0, track), 100);
    }

    #[test]
    fn hidden_back_button_is_inert() {
        let layout = Layout::new();
        let mut input = InputState::new();
        let hit = input.pointer(center(layout.back), true, true, &layout, &browsing(InteractiveKind::None, false));
        assert_eq!(hit, None);
        let hit = input.pointer(center(layout.back), true, true, &layout, &browsing(InteractiveKind::None, true));
        assert_eq!(hit, Some(Action::Retreat));
    }

    #[test]
    fn next_button_is_gone_on_closing_screen() {
        let layout = Layout::new();
        let mut input = InputState::new();
        assert_eq!(input.pointer(center(layout.next), true, true, &layout, &closing()), None);
        assert_eq!(
            input.pointer(center(layout.restart), true, true, &layout, &closing()),
            Some(Action::Restart)
        );
    }

    #[test]
    fn slider_drag_tracks_pointer_until_release() {
        let layout = Layout::new();
        let controls = browsing(InteractiveKind::Slider, true);
        let mut input = InputState::new();
        let track = layout.slider_track;

        let start = Vector2::new(track.x + track.width / 2.0, track.y);
        assert_eq!(input.pointer(start, true, true, &layout, &controls), Some(Action::SetSlider(50)));

        // Still held, pointer wandered off the widget
        let far = Vector2::new(track.x + track.width * 2.0, 10.0);
        assert_eq!(input.pointer(far, false, true, &layout, &controls), Some(Action::SetSlider(100)));

        assert_eq!(input.pointer(far, false, false, &layout, &controls), None);
    }

    #[test]
    fn emoji_cells_pick_their_emoji() {
        let layout = Layout::new();
        let controls = browsing(InteractiveKind::Emoji, true);
        let mut input = InputState::new();
        for (cell, emoji) in layout.emoji_cells.iter().zip(Emoji::ALL) {
            assert_eq!(
                input.pointer(center(*cell), true, true, &layout, &controls),
                Some(Action::SetEmoji(emoji))
            );
        }
        let other = browsing(InteractiveKind::None, true);
        assert_eq!(input.pointer(center(layout.emoji_cells[0]), true, true, &layout, &other), None);
    }

    #[test]
    fn keys_respect_available_controls() {
        let input = InputState::new();
        let first = browsing(InteractiveKind::None, false);
        assert_eq!(input.key(KeyboardKey::KEY_RIGHT, &first, 50), Some(Action::Advance));
        assert_eq!(input.key(KeyboardKey::KEY_LEFT, &first, 50), None);
        assert_eq!(input.key(KeyboardKey::KEY_R, &first, 50), None);
        assert_eq!(input.key(KeyboardKey::KEY_SPACE, &closing(), 50), None);
        assert_eq!(input.key(KeyboardKey::KEY_R, &closing(), 50), Some(Action::Restart));
    }

    #[test]
    fn arrow_keys_step_slider_within_bounds() {
        let input = InputState::new();
        let slider = browsing(InteractiveKind::Slider, true);
        assert_eq!(input.key(KeyboardKey::KEY_UP, &slider, 50), Some(Action::SetSlider(55)));
        assert_eq!(input.key(KeyboardKey::KEY_UP, &slider, 98), Some(Action::SetSlider(100)));
        assert_eq!(input.key(KeyboardKey::KEY_DOWN, &slider, 3), Some(Action::SetSlider(0)));
    }

    #[test]
    fn number_keys_select_emoji() {
        let input = InputState::new();
        let picker = browsing(InteractiveKind::Emoji, true);
        assert_eq!(input.key(KeyboardKey::KEY_FIVE, &picker, 50), Some(Action::SetEmoji(Emoji::Relieved)));
        assert_eq!(input.key(KeyboardKey::KEY_ONE, &picker, 50), Some(Action::SetEmoji(Emoji::Happy)));
        let slider = browsing(InteractiveKind::Slider, true);
        assert_eq!(input.key(KeyboardKey::KEY_ONE, &slider, 50), None);
    }
}
