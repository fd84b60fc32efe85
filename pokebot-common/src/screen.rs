//! Framebuffer decoding for the emulator's `screen` action.
//!
//! The control server answers with the raw framebuffer as an ASCII hex string. There is no
//! header and no compression, so the only checks possible are hex validity and total length.

use crate::error::{BridgeError, BridgeResult};
use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 288;

/// Attachment name the screen embed points at.
pub const SCREEN_FILENAME: &str = "screen.png";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    #[default]
    Rgba8,
    Rgb8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba8 => 4,
            PixelFormat::Rgb8 => 3,
        }
    }

    pub fn frame_len(self) -> usize {
        SCREEN_WIDTH as usize * SCREEN_HEIGHT as usize * self.bytes_per_pixel()
    }
}

impl std::str::FromStr for PixelFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgba8" | "rgba" => Ok(PixelFormat::Rgba8),
            "rgb8" | "rgb" => Ok(PixelFormat::Rgb8),
            _ => Err(format!("unknown pixel format: {s}")),
        }
    }
}

pub struct ScreenImage {
    image: DynamicImage,
}

impl ScreenImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Encode as PNG for use as a chat attachment.
    pub fn to_png(&self) -> BridgeResult<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| BridgeError::Decode(format!("failed to encode png: {e}")))?;
        Ok(cursor.into_inner())
    }
}

pub fn decode_screen(hex_bytes: &[u8], format: PixelFormat) -> BridgeResult<ScreenImage> {
    let body = hex_bytes.trim_ascii();
    let raw = hex::decode(body).map_err(|e| BridgeError::Decode(format!("invalid hex: {e}")))?;

    let expected = format.frame_len();
    if raw.len() != expected {
        return Err(BridgeError::Decode(format!(
            "expected {expected} bytes for a {SCREEN_WIDTH}x{SCREEN_HEIGHT} frame, got {}",
            raw.len()
        )));
    }

    let image = match format {
        PixelFormat::Rgba8 => RgbaImage::from_raw(SCREEN_WIDTH, SCREEN_HEIGHT, raw)
            .map(DynamicImage::ImageRgba8),
        PixelFormat::Rgb8 => {
            RgbImage::from_raw(SCREEN_WIDTH, SCREEN_HEIGHT, raw).map(DynamicImage::ImageRgb8)
        }
    }
    .ok_or_else(|| BridgeError::Decode("frame buffer does not fit the screen".into()))?;

    Ok(ScreenImage { image })
}
