use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::{RgbImage, codecs::jpeg::JpegEncoder};
use snafu::ResultExt;
use tracing::*;

use crate::error::*;

/// Writes the canvas as a baseline JPEG.
///
/// An empty canvas cannot be encoded; it is skipped with a warning and no file
/// is created.
pub fn save_jpeg<P: AsRef<Path>>(
    canvas: &RgbImage,
    output: P,
    quality: u8,
) -> Result<(), OverlapError> {
    let output = output.as_ref();
    if canvas.width() == 0 || canvas.height() == 0 {
        warn!("canvas is empty, skip writing {}", output.display());
        return Ok(());
    }

    let file = File::create(output).context(IoWriteSnafu {
        path: output.to_string_lossy(),
    })?;
    let mut writer = BufWriter::new(file);

    JpegEncoder::new_with_quality(&mut writer, quality)
        .encode_image(canvas)
        .context(ImageWriteSnafu {
            path: output.to_string_lossy(),
        })?;
    writer.flush().context(IoWriteSnafu {
        path: output.to_string_lossy(),
    })?;

    info!(
        "wrote {}x{} image to {}",
        canvas.width(),
        canvas.height(),
        output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use image::{GenericImageView, Rgb};

    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("overlapviz-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_save_jpeg_roundtrip_size() {
        let path = temp_path("canvas.jpg");
        let canvas = RgbImage::from_pixel(17, 9, Rgb([255, 0, 0]));
        save_jpeg(&canvas, &path, 100).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.dimensions(), (17, 9));
        let [r, g, b, _] = decoded.get_pixel(8, 4).0;
        assert!(r > 200 && g < 60 && b < 60);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_save_jpeg_empty_canvas_skipped() {
        let path = temp_path("empty.jpg");
        save_jpeg(&RgbImage::new(0, 0), &path, 100).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_save_jpeg_bad_directory() {
        let canvas = RgbImage::new(2, 2);
        let err = save_jpeg(&canvas, "/definitely/not/here/out.jpg", 90).unwrap_err();
        assert!(matches!(err, OverlapError::IoWrite { .. }));
    }
}
