//! JPEG image format support (read only)

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use pipscan_core::{ImageFormat, Pix, color};
use std::io::Read;

/// Read a JPEG image as an 8-bit gray `Pix`.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG: missing image info".to_string()))?;

    let gray: Vec<u8> = match info.pixel_format {
        PixelFormat::L8 => pixels,
        PixelFormat::L16 => pixels.chunks_exact(2).map(|b| b[0]).collect(),
        PixelFormat::RGB24 => pixels
            .chunks_exact(3)
            .map(|px| color::rgb_to_gray(px[0], px[1], px[2]))
            .collect(),
        PixelFormat::CMYK32 => pixels
            .chunks_exact(4)
            .map(|px| {
                let k = 255 - px[3] as u32;
                let channel = |c: u8| ((255 - c as u32) * k / 255) as u8;
                color::rgb_to_gray(channel(px[0]), channel(px[1]), channel(px[2]))
            })
            .collect(),
    };

    let mut pm = Pix::from_gray_bytes(info.width as u32, info.height as u32, gray)?.into_mut();
    pm.set_informat(ImageFormat::Jpeg);
    Ok(pm.into())
}
