use std::fs;
use std::path::Path;
use voice_scheduler_assets::config::AssetsConfig;
use voice_scheduler_assets::exporter::check_assets;
use voice_scheduler_assets::icon::generate_icon_set;
use voice_scheduler_assets::screenshots::{generate_screenshots, SCREENSHOTS};
use voice_scheduler_assets::splash::{generate_background_colorset, generate_splash_logo};
use voice_scheduler_assets::text::Typeface;

/// Generate every asset kind under `root` the way `all` lays them out
fn generate_all(root: &Path, config: &AssetsConfig) {
    let output = &config.output;
    generate_icon_set(&root.join(&output.icon_dir)).unwrap();
    generate_splash_logo(&root.join(&output.splash_dir)).unwrap();
    generate_background_colorset(&root.join(&output.splash_background_dir)).unwrap();
    generate_screenshots(&root.join(&output.screenshots_dir), &Typeface::builtin()).unwrap();
}

#[test]
fn test_check_passes_on_freshly_generated_assets() {
    let root = tempfile::tempdir().unwrap();
    let config = AssetsConfig::default();
    generate_all(root.path(), &config);

    check_assets(root.path(), &config).unwrap();
}

#[test]
fn test_check_fails_when_a_screenshot_is_missing() {
    let root = tempfile::tempdir().unwrap();
    let config = AssetsConfig::default();
    generate_all(root.path(), &config);

    let shot = root
        .path()
        .join(&config.output.screenshots_dir)
        .join(SCREENSHOTS[2].filename);
    fs::remove_file(&shot).unwrap();

    let err = check_assets(root.path(), &config).unwrap_err();
    assert!(format!("{:#}", err).contains(SCREENSHOTS[2].filename));
}

#[test]
fn test_check_fails_on_out_of_range_colour_component() {
    let root = tempfile::tempdir().unwrap();
    let config = AssetsConfig::default();
    generate_all(root.path(), &config);

    let contents = root
        .path()
        .join(&config.output.splash_background_dir)
        .join("Contents.json");
    let json = fs::read_to_string(&contents).unwrap();
    assert!(json.contains("\"red\": \"0.059\""));
    fs::write(&contents, json.replace("\"red\": \"0.059\"", "\"red\": \"1.5\"")).unwrap();

    let err = check_assets(root.path(), &config).unwrap_err();
    assert!(format!("{:#}", err).contains("1.5"));
}

#[test]
fn test_check_follows_configured_output_dirs() {
    let root = tempfile::tempdir().unwrap();
    fs::write(
        root.path().join("assets.yaml"),
        "output:\n  screenshots_dir: store/shots\n",
    )
    .unwrap();
    let config = AssetsConfig::load_or_default(root.path()).unwrap();
    generate_all(root.path(), &config);

    assert!(root.path().join("store/shots").join(SCREENSHOTS[0].filename).is_file());
    check_assets(root.path(), &config).unwrap();

    // The default layout has no screenshots under this root
    assert!(check_assets(root.path(), &AssetsConfig::default()).is_err());
}
