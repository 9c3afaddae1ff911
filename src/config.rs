use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use crate::catalog::{Catalog, CatalogError};
use crate::constants::DEFAULT_FPS;
use crate::theme::Theme;

/// A linear story slideshow with a closing screen.
#[derive(Debug, Parser)]
#[command(name = "storyslides", version)]
pub struct Args {
    /// Visual theme
    #[arg(long, value_enum, default_value_t = Theme::Exhibition)]
    pub theme: Theme,

    /// TOML catalog to show instead of the built-in story
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Directory holding the built-in story's art
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    #[arg(long)]
    pub fullscreen: bool,

    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,
}

impl Args {
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin(&self.assets)),
        }
    }
}

/// `RUST_LOG` wins; otherwise this crate logs at info.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("storyslides=info")))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_builtin_exhibition() {
        let args = Args::parse_from(["storyslides"]);
        assert_eq!(args.theme, Theme::Exhibition);
        assert_eq!(args.fps, DEFAULT_FPS);
        assert!(!args.fullscreen);
        assert_eq!(args.load_catalog().unwrap().len(), 8);
    }

    #[test]
    fn parses_theme_and_catalog() {
        let args = Args::parse_from(["storyslides", "--theme", "festival", "--catalog", "show.toml"]);
        assert_eq!(args.theme, Theme::Festival);
        assert_eq!(args.catalog, Some(PathBuf::from("show.toml")));
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Args::try_parse_from(["storyslides", "--theme", "carnival"]).is_err());
    }
}
