use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

const SUPPORTED: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Clockwise quarter turns needed to display an image with this EXIF
/// orientation upright. Mirrored orientations are shown unmirrored.
pub fn orientation_turns(orientation: u16) -> u8 {
    match orientation {
        3 | 4 => 2,
        5 | 6 => 1,
        7 | 8 => 3,
        _ => 0,
    }
}

fn read_orientation(bytes: &[u8], path: &Path) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

/// Loads background art, applying its EXIF rotation, as a GPU texture.
pub fn load_background(rl: &mut RaylibHandle, thread: &RaylibThread, path: &Path) -> Result<Texture2D> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    if !SUPPORTED.contains(&extension.as_str()) {
        bail!("unsupported image format {:?}", path);
    }

    let bytes = fs::read(path).with_context(|| format!("failed to read {:?}", path))?;

    // EXIF only reliably present in JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(&bytes, path)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &bytes)
        .map_err(|e| anyhow!("failed to decode {:?}: {}", path, e))?;

    let turns = orientation_turns(orientation);
    for _ in 0..turns {
        image.rotate_cw();
    }
    if turns > 0 {
        debug!(path = %path.display(), orientation, turns, "applied EXIF rotation");
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {:?}: {}", path, e))?;
    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_maps_to_quarter_turns() {
        assert_eq!(orientation_turns(1), 0);
        assert_eq!(orientation_turns(3), 2);
        assert_eq!(orientation_turns(6), 1);
        assert_eq!(orientation_turns(8), 3);
        assert_eq!(orientation_turns(0), 0);
        assert_eq!(orientation_turns(42), 0);
    }
}
