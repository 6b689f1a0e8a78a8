// Library exports for the generator binaries and tests
pub mod canvas;
pub mod config;
pub mod constants;
pub mod exporter;
pub mod icon;
pub mod manifest;
pub mod screenshots;
pub mod splash;
pub mod text;
