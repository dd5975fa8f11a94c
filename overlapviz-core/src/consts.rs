use image::Rgb;

/// Record tag in token position 1 that marks a line as a box definition.
///
/// A box line looks like `<label> box <min_x> <word> <min_z> <max_x> <word> <max_z>`.
pub const BOX_RECORD_TAG: &str = "box";

/// Token index of the group label.
pub const LABEL_TOKEN: usize = 0;

/// Token index of the record tag.
pub const TAG_TOKEN: usize = 1;

/// Token indices of `min.x`, `min.z`, `max.x`, `max.z`.
///
/// Tokens 3 and 6 hold descriptive words and are ignored.
pub const COORD_TOKENS: [usize; 4] = [2, 4, 5, 7];

/// Default uniform multiplier from box units to canvas pixels.
pub const DEFAULT_SCALE: u32 = 1;

/// Default JPEG quality of the rendered image.
pub const DEFAULT_JPEG_QUALITY: u8 = 100;

/// Default input file name.
pub const DEFAULT_INPUT_PATH: &str = "stackedConfig.txt";

/// Default output image name.
pub const DEFAULT_OUTPUT_PATH: &str = "testimg.jpg";

/// Canvas background.
pub const BACKGROUND_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Fill of every overlap region.
pub const OVERLAP_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Inclusive range of the red and blue channels of an isolated box.
pub const ISOLATED_LOW_CHANNEL: (u8, u8) = (0, 30);

/// Inclusive range of the green channel of an isolated box.
pub const ISOLATED_GREEN_CHANNEL: (u8, u8) = (230, 255);
