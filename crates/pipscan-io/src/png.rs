//! PNG image format support
//!
//! Decoding expands palettes and low bit depths and strips 16-bit samples
//! to 8 bits; color input is converted to gray. Encoding writes 8-bit
//! grayscale or 8-bit RGB.

use crate::{IoError, IoResult};
use pipscan_core::{ImageFormat, Pix, PixelDepth, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image as an 8-bit gray `Pix`.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth: {:?}",
            info.bit_depth
        )));
    }

    let channels = match info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpected PNG output color type: {:?}",
                other
            )));
        }
    };

    let (width, height) = (info.width, info.height);
    let mut gray = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row = &buf[y * info.line_size..][..width as usize * channels];
        match channels {
            1 | 2 => gray.extend(row.chunks_exact(channels).map(|px| px[0])),
            _ => gray.extend(
                row.chunks_exact(channels)
                    .map(|px| color::rgb_to_gray(px[0], px[1], px[2])),
            ),
        }
    }

    let mut pm = Pix::from_gray_bytes(width, height, gray)?.into_mut();
    pm.set_informat(ImageFormat::Png);
    Ok(pm.into())
}

/// Write a `Pix` as PNG: 8 bpp as grayscale, 32 bpp as RGB.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let (color_type, data): (ColorType, Vec<u8>) = match pix.depth() {
        PixelDepth::Bit8 => (ColorType::Grayscale, pix.data().to_vec()),
        PixelDepth::Bit32 => (
            ColorType::Rgb,
            pix.data()
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
        ),
    };

    let mut encoder = Encoder::new(writer, pix.width(), pix.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;
    Ok(())
}
