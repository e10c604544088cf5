//! Renders a z-slice of the noise field to a grayscale image.

use std::path::{Path, PathBuf};

use grain_utils::math::scale_clamped;
use grain_utils::noise::SimplexNoise;
use image::{GrayImage, ImageFormat};
use rayon::prelude::*;
use thiserror::Error;

use crate::config::GrainConfig;

/// An error that can occur while producing an image.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The pixel buffer does not fit the requested dimensions.
    #[error("pixel buffer does not fit a {width}x{height} image")]
    BufferSize {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// Encoding or writing the image failed.
    #[error("failed to write image {path}: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying image error.
        #[source]
        source: image::ImageError,
    },
}

/// Map a noise value from `[-1, 1]` onto a pixel intensity.
#[must_use]
pub fn to_intensity(value: f64) -> u8 {
    scale_clamped(value, -1.0, 1.0, 0.0, 255.0).round() as u8
}

/// Sample the plane `z = config.depth`, one row per rayon task.
pub fn render(noise: &SimplexNoise, config: &GrainConfig) -> Result<GrayImage, RenderError> {
    let width = config.width as usize;
    let height = config.height as usize;
    let frequency = config.frequency;
    let depth = config.depth;
    if width == 0 || height == 0 {
        return Err(RenderError::BufferSize {
            width: config.width,
            height: config.height,
        });
    }

    let mut pixels = vec![0u8; width * height];
    pixels
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let ny = y as f64 * frequency;
            for (x, pixel) in row.iter_mut().enumerate() {
                *pixel = to_intensity(noise.sample(x as f64 * frequency, ny, depth));
            }
        });

    GrayImage::from_raw(config.width, config.height, pixels).ok_or(RenderError::BufferSize {
        width: config.width,
        height: config.height,
    })
}

/// Write `image` as PNG.
pub fn write_png(image: &GrayImage, path: &Path) -> Result<(), RenderError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GrainConfig {
        GrainConfig {
            width: 16,
            height: 8,
            frequency: 0.25,
            depth: 1.5,
            ..GrainConfig::default()
        }
    }

    #[test]
    fn test_to_intensity() {
        assert_eq!(to_intensity(-1.0), 0);
        assert_eq!(to_intensity(0.0), 128);
        assert_eq!(to_intensity(1.0), 255);
        assert_eq!(to_intensity(3.0), 255);
        assert_eq!(to_intensity(-3.0), 0);
    }

    #[test]
    fn test_render_matches_direct_sampling() {
        let noise = SimplexNoise::from_seed(1);
        let config = small_config();
        let image = render(&noise, &config).expect("render");

        assert_eq!(image.dimensions(), (16, 8));
        for (x, y, pixel) in image.enumerate_pixels() {
            let v = noise.sample(f64::from(x) * 0.25, f64::from(y) * 0.25, 1.5);
            assert_eq!(pixel.0[0], to_intensity(v));
        }
    }

    #[test]
    fn test_render_has_contrast() {
        let noise = SimplexNoise::from_seed(0);
        let image = render(&noise, &small_config()).expect("render");
        let min = image.pixels().map(|p| p.0[0]).min().unwrap_or(0);
        let max = image.pixels().map(|p| p.0[0]).max().unwrap_or(0);
        assert!(max - min > 32, "flat image: {min}..{max}");
    }

    #[test]
    fn test_write_png_round_trip() {
        let noise = SimplexNoise::from_seed(2);
        let image = render(&noise, &small_config()).expect("render");
        let path = std::env::temp_dir().join(format!("grain-render-{}.png", std::process::id()));

        write_png(&image, &path).expect("write");
        let loaded = image::open(&path).expect("read back").into_luma8();
        assert_eq!(loaded, image);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_render_rejects_empty_image() {
        let config = GrainConfig {
            width: 0,
            ..small_config()
        };
        let result = render(&SimplexNoise::default(), &config);
        assert!(matches!(result, Err(RenderError::BufferSize { width: 0, .. })));
    }

    #[test]
    fn test_write_png_bad_path() {
        let image = GrayImage::new(1, 1);
        let path = Path::new("/nonexistent-grain-dir/out.png");
        assert!(matches!(write_png(&image, path), Err(RenderError::Write { .. })));
    }
}
