use tracing::debug;

use crate::catalog::{Catalog, InteractiveKind};
use crate::constants::{SLIDER_DEFAULT, SLIDER_MAX};
use crate::emoji::Emoji;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Screen {
    Browsing(usize), // Showing the slide at this catalog index
    Closing,         // Past the last slide, closing screen shown
}

/// Label carried by the next control.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NextLabel {
    Next,
    Finish,
}

/// What the presentation layer may offer for the current state.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Controls {
    pub back: bool,
    pub next: Option<NextLabel>,
    pub widget: InteractiveKind,
    pub restart: bool,
}

/// A user intent produced by the input layer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    Advance,
    Retreat,
    Restart,
    SetSlider(u8),
    SetEmoji(Emoji),
}

/// Position in the story plus the session-wide widget values. The catalog
/// is passed to every operation that needs its length, never copied in.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NavigationState {
    screen: Screen,
    slider: u8,
    emoji: Option<Emoji>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Browsing(0),
            slider: SLIDER_DEFAULT,
            emoji: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Active slide index, `None` on the closing screen.
    pub fn position(&self) -> Option<usize> {
        match self.screen {
            Screen::Browsing(p) => Some(p),
            Screen::Closing => None,
        }
    }

    pub fn on_closing_screen(&self) -> bool {
        self.screen == Screen::Closing
    }

    pub fn slider(&self) -> u8 {
        self.slider
    }

    pub fn emoji(&self) -> Option<Emoji> {
        self.emoji
    }

    pub fn advance(&mut self, catalog: &Catalog) {
        self.screen = match self.screen {
            Screen::Browsing(p) if p < catalog.last_index() => Screen::Browsing(p + 1),
            Screen::Browsing(_) => Screen::Closing,
            Screen::Closing => Screen::Closing,
        };
    }

    pub fn retreat(&mut self, catalog: &Catalog) {
        self.screen = match self.screen {
            Screen::Closing => Screen::Browsing(catalog.last_index()),
            Screen::Browsing(p) => Screen::Browsing(p.saturating_sub(1)),
        };
    }

    pub fn restart(&mut self) {
        self.screen = Screen::Browsing(0);
        self.slider = SLIDER_DEFAULT;
        self.emoji = None;
    }

    /// The input widget clamps before calling; out-of-range values are a caller bug.
    pub fn set_slider(&mut self, value: u8) {
        debug_assert!(value <= SLIDER_MAX, "slider value {} out of range", value);
        self.slider = value;
    }

    pub fn set_emoji(&mut self, emoji: Emoji) {
        self.emoji = Some(emoji);
    }

    pub fn controls(&self, catalog: &Catalog) -> Controls {
        match self.screen {
            Screen::Browsing(p) => Controls {
                back: p > 0,
                next: Some(if p >= catalog.last_index() {
                    NextLabel::Finish
                } else {
                    NextLabel::Next
                }),
                widget: catalog.interactive_at(p),
                restart: false,
            },
            Screen::Closing => Controls {
                back: true,
                next: None,
                widget: InteractiveKind::None,
                restart: true,
            },
        }
    }

    /// Applies `action` if its control is currently offered. Returns whether
    /// the state changed.
    pub fn apply(&mut self, action: Action, catalog: &Catalog) -> bool {
        let controls = self.controls(catalog);
        let before = self.clone();
        match action {
            Action::Advance if controls.next.is_some() => self.advance(catalog),
            Action::Retreat if controls.back => self.retreat(catalog),
            Action::Restart if controls.restart => self.restart(),
            Action::SetSlider(v) if controls.widget == InteractiveKind::Slider => self.set_slider(v),
            Action::SetEmoji(e) if controls.widget == InteractiveKind::Emoji => self.set_emoji(e),
            _ => {
                debug!(?action, screen = ?self.screen, "ignoring unavailable action");
                return false;
            }
        }
        let changed = *self != before;
        if changed {
            debug!(
                ?action,
                screen = ?self.screen,
                slider = self.slider,
                emoji = self.emoji.map_or("none", Emoji::glyph),
                "state changed"
            );
        }
        changed
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SlideRecord;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn plain_catalog(n: usize) -> Catalog {
        Catalog::new(
            (0..n)
                .map(|i| SlideRecord::new(format!("slide {}", i), format!("{}.png", i)))
                .collect(),
        )
        .unwrap()
    }

    /// Every screen a session can be on: each slide, then the closing screen.
    fn reachable_screens(catalog: &Catalog) -> Vec<NavigationState> {
        let mut state = NavigationState::new();
        let mut screens = vec![state.clone()];
        while !state.on_closing_screen() {
            state.advance(catalog);
            screens.push(state.clone());
        }
        screens
    }

    #[test]
    fn starts_browsing_first_slide_with_defaults() {
        let state = NavigationState::new();
        assert_eq!(state.screen(), Screen::Browsing(0));
        assert_eq!(state.position(), Some(0));
        assert!(!state.on_closing_screen());
        assert_eq!(state.slider(), 50);
        assert_eq!(state.emoji(), None);
    }

    #[test]
    fn advancing_walks_every_slide_then_closes() {
        for n in 1..=6 {
            let catalog = plain_catalog(n);
            let mut state = NavigationState::new();
            for _ in 0..n - 1 {
                state.advance(&catalog);
            }
            assert_eq!(state.screen(), Screen::Browsing(n - 1));
            state.advance(&catalog);
            assert_eq!(state.screen(), Screen::Closing);
            assert_eq!(state.position(), None);
        }
    }

    #[test]
    fn retreat_from_closing_returns_to_last_slide() {
        let catalog = plain_catalog(4);
        let mut state = NavigationState::new();
        for _ in 0..4 {
            state.advance(&catalog);
        }
        state.retreat(&catalog);
        state.retreat(&catalog);
        state.advance(&catalog);
        state.advance(&catalog);
        assert_eq!(state.screen(), Screen::Closing);
        state.retreat(&catalog);
        assert_eq!(state.screen(), Screen::Browsing(3));
    }

    #[test]
    fn retreat_at_first_slide_is_a_no_op() {
        let catalog = plain_catalog(3);
        let mut state = NavigationState::new();
        state.set_slider(20);
        let before = state.clone();
        for _ in 0..5 {
            state.retreat(&catalog);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn restart_resets_from_every_reachable_screen() {
        let catalog = Catalog::builtin(Path::new("assets"));
        let screens = reachable_screens(&catalog);
        assert_eq!(screens.len(), catalog.len() + 1);

        for mut state in screens {
            let screen = state.screen();
            state.set_slider(3);
            state.set_emoji(Emoji::Angry);
            state.restart();
            assert_eq!(state, NavigationState::new(), "restart from {:?}", screen);
        }
    }

    #[test]
    fn widget_values_survive_navigation() {
        let catalog = plain_catalog(5);
        let mut state = NavigationState::new();
        state.advance(&catalog);
        state.set_slider(77);
        state.set_emoji(Emoji::Sleepy);
        assert_eq!(state.screen(), Screen::Browsing(1));
        state.advance(&catalog);
        state.advance(&catalog);
        state.retreat(&catalog);
        state.retreat(&catalog);
        state.retreat(&catalog);
        assert_eq!(state.slider(), 77);
        assert_eq!(state.emoji(), Some(Emoji::Sleepy));
    }

    #[test]
    fn setters_touch_only_their_field() {
        let catalog = plain_catalog(3);
        let mut state = NavigationState::new();
        state.advance(&catalog);
        let screen = state.screen();
        state.set_slider(10);
        state.set_emoji(Emoji::Sad);
        assert_eq!(state.screen(), screen);
        assert_eq!(state.slider(), 10);
        assert_eq!(state.emoji(), Some(Emoji::Sad));
    }

    #[test]
    fn closing_follows_the_catalog_it_is_given() {
        let short = plain_catalog(2);
        let long = plain_catalog(5);
        let mut state = NavigationState::new();
        state.advance(&short);
        state.advance(&short);
        assert!(state.on_closing_screen());
        state.retreat(&long);
        assert_eq!(state.screen(), Screen::Browsing(4));
    }

    #[test]
    fn builtin_story_walkthrough() {
        let catalog = Catalog::builtin(Path::new("assets"));
        let mut state = NavigationState::new();

        for _ in 0..4 {
            assert!(state.apply(Action::Advance, &catalog));
        }
        assert_eq!(state.screen(), Screen::Browsing(4));
        assert!(state.apply(Action::SetSlider(80), &catalog));

        state.apply(Action::Advance, &catalog);
        state.apply(Action::Advance, &catalog);
        assert_eq!(state.screen(), Screen::Browsing(6));
        assert!(state.apply(Action::SetEmoji(Emoji::Relieved), &catalog));
        assert_eq!(state.slider(), 80);

        state.apply(Action::Advance, &catalog);
        assert_eq!(state.screen(), Screen::Browsing(7));
        state.apply(Action::Advance, &catalog);
        assert_eq!(state.screen(), Screen::Closing);
        assert_eq!(state.emoji(), Some(Emoji::Relieved));

        assert!(state.apply(Action::Restart, &catalog));
        assert_eq!(state.screen(), Screen::Browsing(0));
        assert_eq!(state.slider(), 50);
        assert_eq!(state.emoji(), None);
    }

    #[test]
    fn apply_ignores_unavailable_controls() {
        let catalog = Catalog::builtin(Path::new("assets"));
        let mut state = NavigationState::new();

        assert!(!state.apply(Action::Retreat, &catalog));
        assert!(!state.apply(Action::Restart, &catalog));
        assert!(!state.apply(Action::SetSlider(10), &catalog));
        assert!(!state.apply(Action::SetEmoji(Emoji::Happy), &catalog));
        assert_eq!(state, NavigationState::new());

        for _ in 0..4 {
            state.apply(Action::Advance, &catalog);
        }
        assert!(!state.apply(Action::SetEmoji(Emoji::Happy), &catalog));

        for _ in 0..4 {
            state.apply(Action::Advance, &catalog);
        }
        assert!(state.on_closing_screen());
        assert!(!state.apply(Action::Advance, &catalog));
        assert!(!state.apply(Action::SetSlider(10), &catalog));
        assert!(state.on_closing_screen());
    }

    #[test]
    fn controls_follow_position() {
        let catalog = Catalog::builtin(Path::new("assets"));
        let mut state = NavigationState::new();

        assert_eq!(
            state.controls(&catalog),
            Controls {
                back: false,
                next: Some(NextLabel::Next),
                widget: InteractiveKind::None,
                restart: false,
            }
        );

        for _ in 0..4 {
            state.advance(&catalog);
        }
        assert_eq!(state.controls(&catalog).widget, InteractiveKind::Slider);
        assert!(state.controls(&catalog).back);

        for _ in 0..3 {
            state.advance(&catalog);
        }
        assert_eq!(state.controls(&catalog).next, Some(NextLabel::Finish));

        state.advance(&catalog);
        assert_eq!(
            state.controls(&catalog),
            Controls {
                back: true,
                next: None,
                widget: InteractiveKind::None,
                restart: true,
            }
        );
    }

    #[test]
    fn single_slide_catalog_offers_finish_immediately() {
        let catalog = plain_catalog(1);
        let mut state = NavigationState::new();
        assert_eq!(state.controls(&catalog).next, Some(NextLabel::Finish));
        state.apply(Action::Advance, &catalog);
        assert!(state.on_closing_screen());
        state.apply(Action::Retreat, &catalog);
        assert_eq!(state.screen(), Screen::Browsing(0));
    }
}
