//! Read-only RGBA pixel access over decoded puzzle images.

use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::error::SolveError;

/// A decoded image with packed `0xRRGGBBAA` colour lookup.
///
/// Coordinates are signed so that translated contour points can be
/// bounds-checked without casting at every call site.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    image: RgbaImage,
}

impl PixelGrid {
    pub fn new(image: RgbaImage) -> Self {
        PixelGrid { image }
    }

    /// Decode encoded image bytes (PNG, JPEG, BMP).
    pub fn decode(bytes: &[u8]) -> Result<Self, SolveError> {
        let img = image::load_from_memory(bytes).map_err(|e| SolveError::Decode(e.to_string()))?;
        Ok(Self::new(img.into_rgba8()))
    }

    /// Load and decode an image file.
    pub fn open(path: &Path) -> Result<Self, SolveError> {
        let img = ImageReader::open(path)
            .map_err(|e| SolveError::Decode(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| SolveError::Decode(e.to_string()))?
            .decode()
            .map_err(|e| SolveError::Decode(e.to_string()))?;
        Ok(Self::new(img.into_rgba8()))
    }

    pub fn width(&self) -> i32 {
        self.image.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.image.height() as i32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width() && y >= 0 && y < self.height()
    }

    /// Packed colour at (x, y). Callers must stay within bounds.
    pub fn color_at(&self, x: i32, y: i32) -> u32 {
        debug_assert!(self.contains(x, y), "pixel ({x}, {y}) out of range");
        u32::from_be_bytes(self.image.get_pixel(x as u32, y as u32).0)
    }

    /// Packed colour at (x, y), or `None` outside the image.
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if self.contains(x, y) {
            Some(self.color_at(x, y))
        } else {
            None
        }
    }

    /// Whether the in-bounds pixel at (x, y) carries the given alpha.
    pub fn is_opaque(&self, x: i32, y: i32, opaque_alpha: u8) -> bool {
        self.get(x, y).is_some_and(|c| alpha(c) == opaque_alpha)
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.image
    }
}

/// Alpha channel of a packed `0xRRGGBBAA` colour.
pub fn alpha(color: u32) -> u8 {
    (color & 0xFF) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn packs_rgba_big_endian() {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(1, 0, Rgba([0x12, 0x34, 0x56, 0xFF]));
        let grid = PixelGrid::new(img);

        assert_eq!(grid.color_at(1, 0), 0x1234_56FF);
        assert_eq!(alpha(grid.color_at(1, 0)), 0xFF);
        assert!(grid.is_opaque(1, 0, 0xFF));
        assert!(!grid.is_opaque(0, 0, 0xFF));
    }

    #[test]
    fn out_of_range_lookups_are_none() {
        let grid = PixelGrid::new(RgbaImage::new(3, 2));
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert!(!grid.is_opaque(5, 5, 0xFF));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = PixelGrid::decode(b"not an image").unwrap_err();
        assert!(matches!(err, SolveError::Decode(_)));
    }
}
