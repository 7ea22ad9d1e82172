use std::path::Path;

use image::ImageResult;

use crate::{icon, logger, manifest};

/// Output directory for the generated iconset, relative to the project root.
pub const ICONSET_DIR: &str = "assets/AppIcon.appiconset";

/// One target variant: rendered pixel edge, display scale, output filename.
pub struct SizeSpec {
    pub px: u32,
    pub scale: u32,
    pub filename: &'static str,
}

/// The macOS iconset variants, smallest to largest.
pub const SIZES: [SizeSpec; 10] = [
    SizeSpec { px: 16, scale: 1, filename: "icon_16x16.png" },
    SizeSpec { px: 32, scale: 2, filename: "icon_16x16@2x.png" },
    SizeSpec { px: 32, scale: 1, filename: "icon_32x32.png" },
    SizeSpec { px: 64, scale: 2, filename: "icon_32x32@2x.png" },
    SizeSpec { px: 128, scale: 1, filename: "icon_128x128.png" },
    SizeSpec { px: 256, scale: 2, filename: "icon_128x128@2x.png" },
    SizeSpec { px: 256, scale: 1, filename: "icon_256x256.png" },
    SizeSpec { px: 512, scale: 2, filename: "icon_256x256@2x.png" },
    SizeSpec { px: 512, scale: 1, filename: "icon_512x512.png" },
    SizeSpec { px: 1024, scale: 2, filename: "icon_512x512@2x.png" },
];

/// Render every variant into `out_dir`, then write the manifest.
///
/// Each variant is rendered at its own pixel size rather than downscaled from
/// a master. Steps run strictly in sequence; the first failure aborts the run
/// and already-written files stay on disk.
pub fn generate(out_dir: &Path) -> ImageResult<()> {
    for spec in &SIZES {
        let img = icon::render(spec.px);
        let path = out_dir.join(spec.filename);
        img.save(&path)?;
        println!("  Created {} ({}x{})", spec.filename, spec.px, spec.px);
        logger::log_line(&format!("wrote {}", path.display()));
    }
    manifest::write(out_dir)?;
    logger::log_line("wrote Contents.json");
    Ok(())
}
