use anyhow::Result;
use std::path::Path;
use voice_scheduler_assets::config::AssetsConfig;
use voice_scheduler_assets::splash;

fn main() -> Result<()> {
    let root = Path::new(".");
    let config = AssetsConfig::load_or_default(root)?;
    splash::run(root, &config)
}
