use std::path::Path;

use fspicons::icon::{self, MASTER_DIM};
use fspicons::{export, logger, manifest};

/// Destination asset catalog of the FSPRani3 app.
const ICONSET_DIR: &str = "/Volumes/FSP/FSPRani3/FSPRani3App/Assets.xcassets/AppIcon.appiconset";

fn main() {
    logger::log_line("icon generation started");

    let master = icon::generate_master(MASTER_DIM);
    let out_dir = Path::new(ICONSET_DIR);

    export::export_iconset(&master, out_dir).unwrap_or_else(|e| {
        logger::log_error("export iconset", &e);
        panic!("failed to write iconset to {}: {}", out_dir.display(), e);
    });

    manifest::write_contents(out_dir).unwrap_or_else(|e| {
        logger::log_error("write Contents.json", &e);
        panic!("failed to write Contents.json: {}", e);
    });

    logger::log_line("icon generation finished");
    println!("\nAll icons generated successfully in:\n{}", out_dir.display());
}
