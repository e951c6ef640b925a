//! Sprite loading, recolouring, and PNG output.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{RetintError, Result};
use crate::types::Colour;

use super::{ColourMapper, SelectionPolicy};

/// A decoded RGBA sprite.
///
/// Dimensions are fixed at load time. The recolour pass mutates RGB in
/// place and never touches the alpha channel.
#[derive(Debug, Clone)]
pub struct Sprite {
    name: String,
    image: RgbaImage,
}

impl Sprite {
    /// Decode a sprite from raw image bytes.
    ///
    /// Any format supported by the `image` crate is accepted; the pixels
    /// are converted to RGBA. Malformed bytes fail with a decode error and
    /// produce no sprite.
    pub fn decode(name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let name = name.into();
        let image = image::load_from_memory(bytes)
            .map_err(|e| RetintError::Decode {
                name: name.clone(),
                message: e.to_string(),
            })?
            .to_rgba8();

        Ok(Self { name, image })
    }

    /// Load a sprite from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("sprite")
            .to_string();

        let bytes = std::fs::read(path).map_err(|e| RetintError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read sprite: {}", e),
        })?;

        Self::decode(name, &bytes)
    }

    /// Build a sprite from an existing pixel buffer.
    pub fn from_image(name: impl Into<String>, image: RgbaImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    /// Source file name this sprite was loaded under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Colour of a single pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Colour {
        Colour::from_rgba(self.image.get_pixel(x, y).0)
    }

    /// The underlying RGBA buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Recolour eligible pixels in place.
    ///
    /// One pass over every pixel: fully transparent pixels are skipped
    /// byte-for-byte, pixels the policy rejects are left untouched, and the
    /// rest go through the mapper with their alpha preserved. Returns the
    /// number of pixels that changed.
    pub fn recolor(&mut self, mapper: &ColourMapper, policy: &SelectionPolicy) -> usize {
        let mut changed = 0;

        for pixel in self.image.pixels_mut() {
            let colour = Colour::from_rgba(pixel.0);
            if colour.is_transparent() || !policy.eligible(colour) {
                continue;
            }

            let mapped = mapper.map(colour);
            if mapped != colour {
                *pixel = Rgba(mapped.to_rgba());
                changed += 1;
            }
        }

        changed
    }

    /// Write the sprite as a PNG, upscaled by an integer factor.
    ///
    /// Nearest-neighbour scaling keeps pixel art crisp. A scale of 0 is
    /// treated as 1.
    pub fn write_png(&self, path: &Path, scale: u32) -> Result<()> {
        let scale = scale.max(1);
        let scaled = self.scaled_pixels(scale);

        scaled.save(path).map_err(|e| RetintError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(())
    }

    /// Produce an integer-upscaled copy of the pixel buffer.
    pub fn scaled_pixels(&self, scale: u32) -> RgbaImage {
        let scale = scale.max(1);
        if scale == 1 {
            return self.image.clone();
        }

        let width = self.width() * scale;
        let height = self.height() * scale;
        let mut img: RgbaImage = ImageBuffer::new(width, height);

        for (x, y, pixel) in self.image.enumerate_pixels() {
            for sy in 0..scale {
                for sx in 0..scale {
                    img.put_pixel(x * scale + sx, y * scale + sy, *pixel);
                }
            }
        }

        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recolor::ToneTuning;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn encode_png(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();
        bytes
    }

    fn test_sprite() -> Sprite {
        // 2x2: grey, wood, transparent, translucent grey.
        let mut img: RgbaImage = ImageBuffer::new(2, 2);
        img.put_pixel(0, 0, Rgba([128, 128, 128, 255]));
        img.put_pixel(1, 0, Rgba([137, 103, 39, 255]));
        img.put_pixel(0, 1, Rgba([55, 66, 77, 0]));
        img.put_pixel(1, 1, Rgba([200, 200, 200, 128]));
        Sprite::from_image("iron_pickaxe.png", img)
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = Sprite::decode("bad.png", b"definitely not an image").unwrap_err();
        assert!(matches!(err, RetintError::Decode { .. }));
    }

    #[test]
    fn test_decode_round_trip() {
        let sprite = test_sprite();
        let bytes = encode_png(sprite.image());
        let decoded = Sprite::decode("copy.png", &bytes).unwrap();
        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.pixel(1, 0), Colour::rgb(137, 103, 39));
    }

    #[test]
    fn test_recolor_respects_policy() {
        let mut sprite = test_sprite();
        let mapper = ColourMapper::new(Colour::rgb(0, 255, 0));
        let policy = SelectionPolicy::default();

        let changed = sprite.recolor(&mapper, &policy);

        // Grey and translucent grey change; wood and transparent do not.
        assert_eq!(changed, 2);
        assert_eq!(sprite.pixel(1, 0), Colour::rgb(137, 103, 39));
        assert_eq!(sprite.pixel(0, 1), Colour::new(55, 66, 77, 0));
        assert_ne!(sprite.pixel(0, 0), Colour::rgb(128, 128, 128));
    }

    #[test]
    fn test_recolor_preserves_alpha_everywhere() {
        let mut sprite = test_sprite();
        let before: Vec<u8> = sprite.image().pixels().map(|p| p.0[3]).collect();

        sprite.recolor(
            &ColourMapper::new(Colour::rgb(200, 50, 50)),
            &SelectionPolicy::default(),
        );

        let after: Vec<u8> = sprite.image().pixels().map(|p| p.0[3]).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_recolor_keeps_dimensions() {
        let mut sprite = test_sprite();
        sprite.recolor(
            &ColourMapper::new(Colour::rgb(10, 10, 200)),
            &SelectionPolicy::default(),
        );
        assert_eq!((sprite.width(), sprite.height()), (2, 2));
    }

    #[test]
    fn test_recolor_wood_invariant_across_bases() {
        for base in [
            Colour::rgb(0, 255, 0),
            Colour::rgb(255, 0, 0),
            Colour::rgb(12, 34, 200),
            Colour::rgb(255, 255, 255),
        ] {
            let mut sprite = test_sprite();
            sprite.recolor(&ColourMapper::new(base), &SelectionPolicy::default());
            assert_eq!(sprite.pixel(1, 0), Colour::rgb(137, 103, 39));
        }
    }

    #[test]
    fn test_recolor_with_tuning() {
        let mut sprite = test_sprite();
        let tuning = ToneTuning {
            saturation_spread: 0.0,
            value_keep: 1.0,
        };
        let mapper = ColourMapper::with_tuning(Colour::rgb(0, 0, 255), tuning);
        sprite.recolor(&mapper, &SelectionPolicy::default());

        // value_keep 1.0 leaves the grey's brightness intact.
        let out = sprite.pixel(0, 0).to_hsv();
        assert!((out.value - 128.0 / 255.0).abs() < 0.01);
    }

    #[test]
    fn test_write_png_and_read_back() {
        let sprite = test_sprite();
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.png");

        sprite.write_png(&path, 1).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(1, 0).0, [137, 103, 39, 255]);
        assert_eq!(img.get_pixel(0, 1).0, [55, 66, 77, 0]);
    }

    #[test]
    fn test_write_png_scaled() {
        let sprite = test_sprite();
        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        sprite.write_png(&path, 3).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 6);
        assert_eq!(img.height(), 6);
        // Top-left block is the grey pixel.
        assert_eq!(img.get_pixel(2, 2).0, [128, 128, 128, 255]);
        // Top-right block is the wood pixel.
        assert_eq!(img.get_pixel(5, 0).0, [137, 103, 39, 255]);
    }

    #[test]
    fn test_write_png_scale_zero_treated_as_one() {
        let sprite = test_sprite();
        let dir = tempdir().unwrap();
        let path = dir.path().join("zero.png");

        sprite.write_png(&path, 0).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
    }

    #[test]
    fn test_write_png_bad_directory() {
        let sprite = test_sprite();
        let err = sprite
            .write_png(Path::new("/nonexistent-dir/out.png"), 1)
            .unwrap_err();
        assert!(matches!(err, RetintError::Encode { .. }));
    }
}
