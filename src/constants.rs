/// Shared palette and fixed asset tables

pub mod palette {
    use image::{Rgb, Rgba};

    /// App background, also the flattening colour for opaque icon output
    pub const DEEP_NAVY: Rgb<u8> = Rgb([15, 20, 40]);
    pub const NAVY_MID: Rgb<u8> = Rgb([25, 35, 65]);

    pub const GOLD: Rgba<u8> = Rgba([218, 175, 75, 255]);
    pub const GOLD_LIGHT: Rgba<u8> = Rgba([240, 210, 120, 255]);
    pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    /// Mock UI card fill used throughout the screenshots
    pub const CARD: Rgba<u8> = Rgba([35, 45, 80, 255]);
    pub const GREEN: Rgba<u8> = Rgba([80, 200, 120, 255]);
    pub const RED: Rgba<u8> = Rgba([230, 80, 80, 255]);
    pub const ORANGE: Rgba<u8> = Rgba([240, 160, 50, 255]);
}

pub mod icon {
    /// Side of the master canvas every icon size is resampled from
    pub const BASE_SIZE: u32 = 1024;

    /// Output pixel size and file name, in write order
    pub const SIZES: &[(u32, &str)] = &[
        (1024, "icon_1024.png"),
        (180, "icon_60@3x.png"),
        (120, "icon_60@2x.png"),
        (167, "icon_83.5@2x.png"),
        (152, "icon_76@2x.png"),
        (76, "icon_76.png"),
        (40, "icon_40.png"),
        (80, "icon_40@2x.png"),
        (120, "icon_40@3x.png"),
        (58, "icon_29@2x.png"),
        (87, "icon_29@3x.png"),
        (20, "icon_20.png"),
        (40, "icon_20@2x.png"),
        (60, "icon_20@3x.png"),
    ];
}

pub mod splash {
    /// Splash logos are drawn natively at each resolution rather than resampled
    pub const SIZES: &[(u32, &str)] = &[
        (200, "splash_logo.png"),
        (400, "splash_logo@2x.png"),
        (600, "splash_logo@3x.png"),
    ];
}

pub mod screenshots {
    /// iPhone 6.5" App Store screenshot resolution
    pub const WIDTH: u32 = 1284;
    pub const HEIGHT: u32 = 2778;
}

pub mod manifest {
    pub const FILE_NAME: &str = "Contents.json";
    pub const VERSION: u32 = 1;
    pub const AUTHOR: &str = "xcode";
}
