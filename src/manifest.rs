use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::iconset::SIZES;

pub const MANIFEST_FILENAME: &str = "Contents.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconManifest {
    pub images: Vec<ImageEntry>,
    pub info: ManifestInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub idiom: String,
    pub scale: String,
    pub size: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

/// The fixed descriptor set for the iconset.
///
/// Derived from the size table alone; rendering outcomes never add or remove
/// entries. The `size` label is in points, i.e. pixels divided by scale.
pub fn contents() -> IconManifest {
    let images = SIZES
        .iter()
        .map(|spec| {
            let points = spec.px / spec.scale;
            ImageEntry {
                idiom: "mac".to_string(),
                scale: format!("{}x", spec.scale),
                size: format!("{0}x{0}", points),
                filename: spec.filename.to_string(),
            }
        })
        .collect();
    IconManifest {
        images,
        info: ManifestInfo {
            author: "xcode".to_string(),
            version: 1,
        },
    }
}

/// Serialize the manifest into `Contents.json` inside `dir`.
pub fn write(dir: &Path) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&contents())?;
    fs::write(dir.join(MANIFEST_FILENAME), json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_lists_all_ten_variants() {
        let m = contents();
        assert_eq!(m.images.len(), 10);
        assert!(m.images.iter().all(|e| e.idiom == "mac"));
        assert_eq!(m.info.author, "xcode");
        assert_eq!(m.info.version, 1);
    }

    #[test]
    fn entries_pair_point_sizes_with_scales() {
        let m = contents();
        assert_eq!(m.images[0].scale, "1x");
        assert_eq!(m.images[0].size, "16x16");
        assert_eq!(m.images[0].filename, "icon_16x16.png");
        assert_eq!(m.images[1].scale, "2x");
        assert_eq!(m.images[1].size, "16x16");
        assert_eq!(m.images[1].filename, "icon_16x16@2x.png");
        assert_eq!(m.images[9].scale, "2x");
        assert_eq!(m.images[9].size, "512x512");
        assert_eq!(m.images[9].filename, "icon_512x512@2x.png");
    }

    #[test]
    fn serialization_is_stable() {
        let a = serde_json::to_string_pretty(&contents()).unwrap();
        let b = serde_json::to_string_pretty(&contents()).unwrap();
        assert_eq!(a, b);
        let parsed: IconManifest = serde_json::from_str(&a).unwrap();
        assert_eq!(parsed, contents());
    }
}
