// End-to-end checks for the app icon set: sizes, opacity, manifest and
// repeatability of the written files
use image::{imageops, ColorType, Rgb};
use std::collections::HashSet;
use std::fs;
use voice_scheduler_assets::constants::{icon, palette};
use voice_scheduler_assets::exporter::verify_catalog;
use voice_scheduler_assets::icon::{create_app_icon, generate_icon_set};
use voice_scheduler_assets::manifest::ImageManifest;

#[test]
fn test_icon_set_matches_size_table_and_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("Assets.xcassets/AppIcon.appiconset");

    let written = generate_icon_set(&out).unwrap();
    assert_eq!(written.len(), icon::SIZES.len() + 1);

    for &(size, filename) in icon::SIZES {
        let decoded = image::open(out.join(filename)).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (size, size), "{}", filename);
        // Alpha is stripped for the App Store
        assert_eq!(decoded.color(), ColorType::Rgb8, "{}", filename);
    }

    let manifest = ImageManifest::read(&out).unwrap();
    assert_eq!(manifest, ImageManifest::app_icon());
    for filename in manifest.filenames() {
        assert!(out.join(filename).is_file(), "{} missing", filename);
    }
    assert_eq!(verify_catalog(&out, &manifest, icon::SIZES).unwrap(), 14);

    let slots: HashSet<_> = manifest
        .images
        .iter()
        .map(|i| (i.size.clone(), i.idiom.clone(), i.scale.clone()))
        .collect();
    assert_eq!(slots.len(), manifest.images.len());

    let entry = manifest
        .images
        .iter()
        .find(|i| i.filename == "icon_60@2x.png")
        .unwrap();
    assert_eq!(entry.scale, "2x");
    assert_eq!(entry.idiom, "iphone");

    let json = fs::read_to_string(out.join("Contents.json")).unwrap();
    assert!(json.contains("\"author\": \"xcode\""));
}

#[test]
fn test_regenerating_icons_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();

    generate_icon_set(dir.path()).unwrap();
    let first: Vec<Vec<u8>> = icon::SIZES
        .iter()
        .map(|(_, name)| fs::read(dir.path().join(name)).unwrap())
        .collect();

    // Second run into the existing directory
    generate_icon_set(dir.path()).unwrap();
    for ((_, name), before) in icon::SIZES.iter().zip(&first) {
        let after = fs::read(dir.path().join(name)).unwrap();
        assert!(after == *before, "{} changed between runs", name);
    }
}

#[test]
fn test_resized_icon_corners_are_background() {
    let base = create_app_icon(1024);
    for (x, y) in [(0, 0), (1023, 0), (0, 1023), (1023, 1023)] {
        assert_eq!(*base.get_pixel(x, y), palette::DEEP_NAVY);
    }

    let small = imageops::resize(&base, 120, 120, imageops::FilterType::Lanczos3);
    assert_eq!(small.dimensions(), (120, 120));
    for (x, y) in [(0, 0), (119, 0), (0, 119), (119, 119)] {
        assert_eq!(*small.get_pixel(x, y), palette::DEEP_NAVY, "corner ({}, {})", x, y);
    }
}

#[test]
fn test_icon_artwork_is_drawn() {
    let base = create_app_icon(1024);

    // Microphone capsule is white at the center of the calendar body
    let header_bottom = 81 + 122;
    let mic_cy = (header_bottom + 942) / 2;
    assert_eq!(*base.get_pixel(512, mic_cy as u32), Rgb([255, 255, 255]));

    // Header band is filled between the weekday dots
    let header = base.get_pixel(300, 120);
    assert!(header[0] > 200 && header[1] > 180, "header pixel {:?}", header);
}
