//! The ordered, read-only list of slides a session walks through.
//!
//! A catalog is either the built-in story or a TOML document:
//!
//! ```toml
//! [[slides]]
//! text = "Some days the light comes in sideways."
//! background = "art/window.jpg"
//! interactive = "slider"   # optional: "slider" | "emoji"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Widget shown alongside a slide, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractiveKind {
    #[default]
    None,
    Slider,
    Emoji,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SlideRecord {
    pub text: String,
    pub background: PathBuf,
    #[serde(default)]
    pub interactive: InteractiveKind,
}

impl SlideRecord {
    pub fn new(text: impl Into<String>, background: impl Into<PathBuf>) -> Self {
        Self {
            text: text.into(),
            background: background.into(),
            interactive: InteractiveKind::None,
        }
    }

    pub fn with_interactive(mut self, kind: InteractiveKind) -> Self {
        self.interactive = kind;
        self
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("catalog contains no slides")]
    Empty,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    slides: Vec<SlideRecord>,
}

/// Non-empty, immutable slide sequence.
#[derive(Debug, Clone)]
pub struct Catalog {
    slides: Vec<SlideRecord>,
}

const BUILTIN_STORY: [(&str, InteractiveKind); 8] = [
    ("Every journey of the heart begins in a quiet room.", InteractiveKind::None),
    ("Some memories arrive like morning light, soft and without warning.", InteractiveKind::None),
    ("Others stay in the corners, waiting to be noticed.", InteractiveKind::None),
    ("We carry them with us, even when we forget their names.", InteractiveKind::None),
    ("How happy are you, right now, in this moment?", InteractiveKind::Slider),
    ("Whatever the answer, it is allowed to be true.", InteractiveKind::None),
    ("Which face feels closest to yours today?", InteractiveKind::Emoji),
    ("Growth is sometimes just the quiet turning of a page.", InteractiveKind::None),
];

impl Catalog {
    pub fn new(slides: Vec<SlideRecord>) -> Result<Self, CatalogError> {
        if slides.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { slides })
    }

    /// The embedded eight-slide story. Art is looked up as
    /// `slide-01.jpg` .. `slide-08.jpg` inside `asset_dir`.
    pub fn builtin(asset_dir: &Path) -> Self {
        let slides = BUILTIN_STORY
            .iter()
            .enumerate()
            .map(|(i, (text, kind))| {
                SlideRecord::new(*text, asset_dir.join(format!("slide-{:02}.jpg", i + 1)))
                    .with_interactive(*kind)
            })
            .collect();
        Self { slides }
    }

    /// Reads a TOML catalog. Relative backgrounds resolve against the
    /// directory holding the file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let source = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&source, base).map_err(|e| match e {
            CatalogError::Parse { source, .. } => CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    fn parse(source: &str, base: &Path) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source).map_err(|source| CatalogError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        let slides = file
            .slides
            .into_iter()
            .map(|mut slide| {
                if slide.background.is_relative() {
                    slide.background = base.join(&slide.background);
                }
                slide
            })
            .collect();
        Self::new(slides)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&SlideRecord> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideRecord> {
        self.slides.iter()
    }

    pub fn interactive_at(&self, index: usize) -> InteractiveKind {
        self.get(index).map_or(InteractiveKind::None, |s| s.interactive)
    }
}
