use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::logger::log_line;

/// One icon-slot declaration consumed by Xcode's asset catalog.
#[derive(Debug, Clone, Serialize)]
pub struct SlotEntry {
    pub filename: &'static str,
    pub idiom: &'static str,
    pub scale: &'static str,
    pub size: &'static str,
}

#[derive(Serialize)]
struct Contents {
    images: &'static [SlotEntry],
    info: Info,
}

#[derive(Serialize)]
struct Info {
    author: &'static str,
    version: u32,
}

const fn slot(
    filename: &'static str,
    idiom: &'static str,
    scale: &'static str,
    size: &'static str,
) -> SlotEntry {
    SlotEntry {
        filename,
        idiom,
        scale,
        size,
    }
}

/// The AppIcon.appiconset slot table. This is a hand-maintained constant, not
/// derived from the export target list; the two must be kept in sync by hand.
pub const SLOTS: [SlotEntry; 18] = [
    slot("Icon-40.png", "iphone", "2x", "20x20"),
    slot("Icon-60.png", "iphone", "3x", "20x20"),
    slot("Icon-58.png", "iphone", "2x", "29x29"),
    slot("Icon-87.png", "iphone", "3x", "29x29"),
    slot("Icon-80.png", "iphone", "2x", "40x40"),
    slot("Icon-120.png", "iphone", "3x", "40x40"),
    slot("Icon-120.png", "iphone", "2x", "60x60"),
    slot("Icon-180.png", "iphone", "3x", "60x60"),
    slot("Icon-20.png", "ipad", "1x", "20x20"),
    slot("Icon-40.png", "ipad", "2x", "20x20"),
    slot("Icon-29.png", "ipad", "1x", "29x29"),
    slot("Icon-58.png", "ipad", "2x", "29x29"),
    slot("Icon-40.png", "ipad", "1x", "40x40"),
    slot("Icon-80.png", "ipad", "2x", "40x40"),
    slot("Icon-76.png", "ipad", "1x", "76x76"),
    slot("Icon-152.png", "ipad", "2x", "76x76"),
    slot("Icon-167.png", "ipad", "2x", "83.5x83.5"),
    slot("Icon-1024.png", "ios-marketing", "1x", "1024x1024"),
];

/// Write Contents.json into `out_dir`, overwriting any existing file.
pub fn write_contents(out_dir: &Path) -> io::Result<()> {
    let doc = Contents {
        images: &SLOTS,
        info: Info {
            author: "xcode",
            version: 1,
        },
    };
    let json = serde_json::to_string_pretty(&doc).map_err(io::Error::other)?;
    let path = out_dir.join("Contents.json");
    fs::write(&path, json)?;
    log_line(&format!("wrote {}", path.display()));
    println!("\nGenerated Contents.json");
    Ok(())
}
