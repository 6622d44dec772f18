//! PNM (Portable Any Map) format support
//!
//! Reads PGM (P2 ascii, P5 binary) and PPM (P3 ascii, P6 binary).
//! Color input is converted to 8-bit gray; samples with a maxval other
//! than 255 are rescaled to the full 8-bit range.
//!
//! Writes P5 for 8-bit images and P6 for 32-bit images.

use crate::{IoError, IoResult};
use pipscan_core::{ImageFormat, Pix, PixelDepth, color};
use std::io::{Read, Write};

/// Header of a PNM file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PnmHeader {
    kind: u8,
    width: u32,
    height: u32,
    maxval: u32,
}

/// Cursor over the raw PNM bytes.
struct Tokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Skip whitespace and `#` comments.
    fn skip_space(&mut self) {
        while let Some(&c) = self.data.get(self.pos) {
            if c == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    self.pos += 1;
                    if c == b'\n' {
                        break;
                    }
                }
            } else if c.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn next_u32(&mut self, what: &str) -> IoResult<u32> {
        self.skip_space();
        let start = self.pos;
        while self.pos < self.data.len() && self.data[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        std::str::from_utf8(&self.data[start..self.pos])
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| IoError::InvalidData(format!("PNM: missing or invalid {what}")))
    }
}

fn read_header(tokens: &mut Tokens<'_>) -> IoResult<PnmHeader> {
    let magic = tokens.data.get(..2).unwrap_or_default();
    let kind = match magic {
        b"P2" | b"P3" | b"P5" | b"P6" => magic[1] - b'0',
        _ => {
            return Err(IoError::UnsupportedFormat(
                "PNM: only P2, P3, P5 and P6 are supported".to_string(),
            ));
        }
    };
    tokens.pos = 2;

    let width = tokens.next_u32("width")?;
    let height = tokens.next_u32("height")?;
    let maxval = tokens.next_u32("maxval")?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("PNM: invalid maxval {maxval}")));
    }

    Ok(PnmHeader {
        kind,
        width,
        height,
        maxval,
    })
}

/// Read a PNM image (P2/P3/P5/P6) as an 8-bit gray `Pix`.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<Pix> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    let mut tokens = Tokens::new(&data);
    let header = read_header(&mut tokens)?;
    let channels = if matches!(header.kind, 3 | 6) { 3 } else { 1 };
    let npix = header.width as usize * header.height as usize;
    let nsamples = npix * channels;

    let samples: Vec<u32> = if matches!(header.kind, 5 | 6) {
        // Exactly one whitespace byte separates maxval from the raster
        let start = tokens.pos + 1;
        let wide = header.maxval > 255;
        let bytes_per_sample = if wide { 2 } else { 1 };
        let raster = data
            .get(start..start + nsamples * bytes_per_sample)
            .ok_or_else(|| IoError::InvalidData("PNM: truncated raster".to_string()))?;
        if wide {
            raster
                .chunks_exact(2)
                .map(|b| u16::from_be_bytes([b[0], b[1]]) as u32)
                .collect()
        } else {
            raster.iter().map(|&b| b as u32).collect()
        }
    } else {
        (0..nsamples)
            .map(|_| tokens.next_u32("sample"))
            .collect::<IoResult<_>>()?
    };

    let scale = |v: u32| -> u8 {
        if header.maxval == 255 {
            v.min(255) as u8
        } else {
            ((v.min(header.maxval) * 255 + header.maxval / 2) / header.maxval) as u8
        }
    };

    let gray: Vec<u8> = if channels == 3 {
        samples
            .chunks_exact(3)
            .map(|c| color::rgb_to_gray(scale(c[0]), scale(c[1]), scale(c[2])))
            .collect()
    } else {
        samples.into_iter().map(scale).collect()
    };

    let pix = Pix::from_gray_bytes(header.width, header.height, gray)?;
    let mut pm = pix.into_mut();
    pm.set_informat(ImageFormat::Pnm);
    Ok(pm.into())
}

/// Write a `Pix` as binary PNM to a writer.
///
/// Chooses P5 (8 bpp grayscale) or P6 (32 bpp RGB) based on the depth.
pub fn write_pnm<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    let (w, h) = (pix.width(), pix.height());
    match pix.depth() {
        PixelDepth::Bit8 => {
            write!(writer, "P5\n{w} {h}\n255\n")?;
            writer.write_all(pix.data())?;
        }
        PixelDepth::Bit32 => {
            write!(writer, "P6\n{w} {h}\n255\n")?;
            let rgb: Vec<u8> = pix
                .data()
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            writer.write_all(&rgb)?;
        }
    }
    writer.flush()?;
    Ok(())
}
