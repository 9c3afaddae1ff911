/// Moods offered by the emoji picker, in picker order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emoji {
    Happy,
    Sad,
    Angry,
    Sleepy,
    Relieved,
}

impl Emoji {
    pub const ALL: [Emoji; 5] = [
        Emoji::Happy,
        Emoji::Sad,
        Emoji::Angry,
        Emoji::Sleepy,
        Emoji::Relieved,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            Emoji::Happy => "🙂",
            Emoji::Sad => "😢",
            Emoji::Angry => "😠",
            Emoji::Sleepy => "😴",
            Emoji::Relieved => "😌",
        }
    }

    /// Picker slot for number-key selection (1-based keys map to these).
    pub fn from_slot(slot: usize) -> Option<Emoji> {
        Self::ALL.get(slot).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_follow_picker_order() {
        for (i, emoji) in Emoji::ALL.iter().enumerate() {
            assert_eq!(Emoji::from_slot(i), Some(*emoji));
        }
        assert_eq!(Emoji::from_slot(5), None);
    }

    #[test]
    fn relieved_has_its_glyph() {
        assert_eq!(Emoji::Relieved.glyph(), "😌");
    }
}
