use image::ColorType;
use std::fs;
use voice_scheduler_assets::config::AssetsConfig;
use voice_scheduler_assets::constants::screenshots::{HEIGHT, WIDTH};
use voice_scheduler_assets::screenshots::{generate_screenshots, SCREENSHOTS};
use voice_scheduler_assets::text::Typeface;

#[test]
fn test_five_layouts_in_order() {
    let names: Vec<&str> = SCREENSHOTS.iter().map(|s| s.filename).collect();
    assert_eq!(
        names,
        vec![
            "01_voice_input.png",
            "02_ai_analysis.png",
            "03_calendar.png",
            "04_smart_time.png",
            "05_multilingual.png",
        ]
    );
}

#[test]
fn test_screenshots_are_written_at_store_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("AppStore/screenshots");
    let typeface = Typeface::builtin();

    let written = generate_screenshots(&out, &typeface).unwrap();
    assert_eq!(written.len(), 5);

    for shot in SCREENSHOTS {
        let decoded = image::open(out.join(shot.filename)).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (WIDTH, HEIGHT));
        assert_eq!(decoded.color(), ColorType::Rgb8);
    }
}

#[test]
fn test_screenshot_rendering_is_deterministic() {
    let typeface = Typeface::builtin();
    let first = SCREENSHOTS[2].render(&typeface);
    let second = SCREENSHOTS[2].render(&typeface);
    assert!(first == second);
}

#[test]
fn test_screenshot_draws_over_gradient() {
    let typeface = Typeface::builtin();
    let shot = SCREENSHOTS[0].render(&typeface);

    // Gradient starts at deep navy above the headline
    assert_eq!(shot.get_pixel(5, 5).0, [15, 20, 40]);
    // Gold microphone disc behind the white glyph
    assert_eq!(shot.get_pixel(640, 920).0, [218, 175, 75]);
}

#[test]
fn test_configured_fonts_fall_back_when_missing() {
    let mut config = AssetsConfig::default();
    config.fonts.candidates = vec!["/nonexistent/Helvetica.ttc".into()];
    config.fonts.search_user_fonts = false;

    let typeface = Typeface::load(&config.font_candidates());
    assert!(matches!(typeface, Typeface::Builtin));

    let dir = tempfile::tempdir().unwrap();
    generate_screenshots(dir.path(), &typeface).unwrap();
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 5);
}
