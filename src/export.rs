use std::fs;
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageError, RgbImage};

use crate::logger::log_line;

/// Required iconset sizes (px) and their output filenames, in write order.
pub const TARGETS: [(u32, &str); 13] = [
    (20, "Icon-20.png"),
    (29, "Icon-29.png"),
    (40, "Icon-40.png"),
    (58, "Icon-58.png"),
    (60, "Icon-60.png"),
    (76, "Icon-76.png"),
    (80, "Icon-80.png"),
    (87, "Icon-87.png"),
    (120, "Icon-120.png"), // Required for iPhone
    (152, "Icon-152.png"), // Required for iPad
    (167, "Icon-167.png"),
    (180, "Icon-180.png"),
    (1024, "Icon-1024.png"),
];

/// Resize the master to every target size and write the PNGs into `out_dir`,
/// creating the directory if needed. Existing files are overwritten. The first
/// failed write aborts the remaining exports.
pub fn export_iconset(master: &RgbImage, out_dir: &Path) -> Result<(), ImageError> {
    fs::create_dir_all(out_dir)?;

    for (sz, name) in TARGETS {
        let resized = if sz == master.width() {
            master.clone()
        } else {
            imageops::resize(master, sz, sz, FilterType::Lanczos3)
        };
        let path = out_dir.join(name);
        resized.save(&path)?;
        log_line(&format!("wrote {}", path.display()));
        println!("Generated: {} ({}x{})", name, sz, sz);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{self, LabelFont};

    #[test]
    fn test_export_writes_every_target() {
        let master = icon::generate_master_with(icon::MASTER_DIM, &LabelFont::Bitmap);
        let dir = tempfile::tempdir().unwrap();
        export_iconset(&master, dir.path()).unwrap();

        for (sz, name) in TARGETS {
            let img = image::open(dir.path().join(name)).unwrap();
            assert_eq!(img.width(), sz, "{name}");
            assert_eq!(img.height(), sz, "{name}");
        }
    }

    #[test]
    fn test_export_overwrites_existing_directory() {
        let master = icon::generate_master_with(64, &LabelFont::Bitmap);
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Icon-20.png"), b"stale").unwrap();

        export_iconset(&master, dir.path()).unwrap();
        export_iconset(&master, dir.path()).unwrap();

        let img = image::open(dir.path().join("Icon-20.png")).unwrap();
        assert_eq!(img.width(), 20);
    }

    #[test]
    fn test_export_fails_on_unwritable_dir() {
        let master = icon::generate_master_with(64, &LabelFont::Bitmap);
        let dir = tempfile::tempdir().unwrap();
        // A file where the output directory should be makes create_dir_all fail
        let blocked = dir.path().join("occupied");
        fs::write(&blocked, b"x").unwrap();
        assert!(export_iconset(&master, &blocked).is_err());
    }
}
