use std::fs;
use std::path::PathBuf;

use veloread_icons::{iconset, manifest};

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("veloread-icons-{}-{}", tag, std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn generates_all_variants_and_manifest() {
    let dir = scratch_dir("full");
    iconset::generate(&dir).expect("generate iconset");

    for spec in &iconset::SIZES {
        let img = image::open(dir.join(spec.filename)).expect("open generated png");
        assert_eq!(img.width(), spec.px, "{}", spec.filename);
        assert_eq!(img.height(), spec.px, "{}", spec.filename);
    }

    let json = fs::read_to_string(dir.join(manifest::MANIFEST_FILENAME)).unwrap();
    let parsed: manifest::IconManifest = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.images.len(), 10);
    assert_eq!(parsed, manifest::contents());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn manifest_rewrite_is_byte_identical() {
    let dir = scratch_dir("manifest");
    manifest::write(&dir).unwrap();
    let first = fs::read(dir.join(manifest::MANIFEST_FILENAME)).unwrap();
    manifest::write(&dir).unwrap();
    let second = fs::read(dir.join(manifest::MANIFEST_FILENAME)).unwrap();
    assert_eq!(first, second);
    fs::remove_dir_all(&dir).unwrap();
}
