//! Window icon loading.

use std::path::Path;

use anyhow::{Context, Result};
use fractal_engine::window::Icon;

/// Loads an RGBA window icon.
///
/// The icon is cosmetic: a missing file is logged at debug level and a
/// broken one at warn level, and the window opens without an icon.
pub fn load_icon(path: &Path) -> Option<Icon> {
    if !path.exists() {
        log::debug!("no window icon at {}", path.display());
        return None;
    }

    match decode_icon(path) {
        Ok(icon) => Some(icon),
        Err(e) => {
            log::warn!("ignoring window icon: {e:#}");
            None
        }
    }
}

fn decode_icon(path: &Path) -> Result<Icon> {
    let rgba = image::open(path)
        .with_context(|| format!("failed to decode {}", path.display()))?
        .into_rgba8();
    let (width, height) = rgba.dimensions();
    Icon::from_rgba(rgba.into_raw(), width, height)
        .with_context(|| format!("invalid icon data in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_none() {
        assert!(load_icon(Path::new("definitely/not/here.png")).is_none());
    }

    #[test]
    fn undecodable_file_yields_none() {
        let path = std::env::temp_dir().join(format!("fractal-viewer-icon-{}.png", std::process::id()));
        std::fs::write(&path, b"not a png").unwrap();
        assert!(load_icon(&path).is_none());
        let _ = std::fs::remove_file(&path);
    }
}
