use std::fs;
use std::path::Path;

use veloread_icons::{iconset, logger};

fn main() {
    let out_dir = Path::new(iconset::ICONSET_DIR);
    fs::create_dir_all(out_dir).expect("create iconset dir");

    println!("Generating Veloread icons...");
    if let Err(e) = iconset::generate(out_dir) {
        logger::log_error("mkiconset", &e);
        panic!("failed to generate iconset: {}", e);
    }
    println!("\nDone! Icons saved to {}", out_dir.display());
}
