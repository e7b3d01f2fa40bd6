use std::fs;
use std::path::Path;

use vello::peniko::{Blob, Color, ImageAlphaType, ImageData, ImageFormat};

use crate::color::to_rgba8;
use crate::error::{ThemeError, ThemeResult};

/// A 2D RGBA8 image registered in a [Palette](crate::palette::Palette).
///
/// Cloning is cheap: the pixel data lives in a shared [Blob].
#[derive(Clone, Debug)]
pub struct Texture {
    image: ImageData,
    fill: Option<Color>,
}

impl Texture {
    /// Create a texture from raw RGBA8 pixels.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * 4);
        Self {
            image: ImageData {
                data: Blob::from(data),
                format: ImageFormat::Rgba8,
                alpha_type: ImageAlphaType::Alpha,
                width,
                height,
            },
            fill: None,
        }
    }

    /// Create a uniform 1×1 texture of the given color.
    pub fn solid(color: Color) -> Self {
        let mut texture = Self::from_rgba8(1, 1, to_rgba8(color).to_vec());
        texture.fill = Some(color);
        texture
    }

    /// Decode an encoded image (PNG, JPEG, ...).
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self::from_rgba8(width, height, rgba.into_raw()))
    }

    /// Read and decode an image file.
    pub fn load(path: &Path) -> ThemeResult<Self> {
        let bytes = fs::read(path).map_err(|source| ThemeError::TextureRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::decode(&bytes).map_err(|source| ThemeError::TextureDecode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height
    }

    /// The RGBA8 bytes of one pixel, or [None] outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let offset = (y as usize * self.width() as usize + x as usize) * 4;
        let bytes = self.image.data.data().get(offset..offset + 4)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// The color this texture was synthesized from, if any.
    pub fn fill_color(&self) -> Option<Color> {
        self.fill
    }

    /// The renderer-native image.
    pub fn image(&self) -> &ImageData {
        &self.image
    }
}

impl PartialEq for Texture {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.image.data.data() == other.image.data.data()
    }
}
