//! pipscan-io - Image I/O for pipscan
//!
//! Decodes image files into the 8-bit intensity buffers the region
//! analysis works on, and encodes results (label maps, rendered RGB
//! annotations) for inspection.
//!
//! Supported formats:
//!
//! | Format | Read            | Write        | Feature      |
//! |--------|-----------------|--------------|--------------|
//! | PNM    | P2, P3, P5, P6  | P5, P6       | `pnm`        |
//! | PNG    | all color types | gray, RGB    | `png-format` |
//! | JPEG   | yes             | no           | `jpeg`       |
//!
//! Every reader returns an 8-bit gray `Pix`; color input is converted
//! to luma.

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use pipscan_core::ImageFormat;

use pipscan_core::Pix;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;

/// Read an image file as an 8-bit gray `Pix`.
///
/// The format is detected from the file contents, not the extension.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = BufReader::new(File::open(path)?);
    let pix = read_with_format(file, format)?;
    tracing::debug!(
        "read {}: {}x{} ({:?})",
        path.display(),
        pix.width(),
        pix.height(),
        format
    );
    Ok(pix)
}

/// Read an image from an in-memory encoded buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    read_with_format(Cursor::new(data), format)
}

fn read_with_format<R>(reader: R, format: ImageFormat) -> IoResult<Pix>
where
    R: std::io::BufRead + std::io::Seek,
{
    match format {
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => crate::png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        other => Err(IoError::UnsupportedFormat(format!(
            "reading {:?} is not enabled",
            other
        ))),
    }
}

/// Write an image to a file in the given format.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let writer = BufWriter::new(File::create(path)?);
    write_with_format(pix, writer, format)?;
    tracing::debug!("wrote {} ({:?})", path.display(), format);
    Ok(())
}

/// Encode an image into memory in the given format.
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_with_format(pix, &mut buf, format)?;
    Ok(buf)
}

fn write_with_format<W: std::io::Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(pix, writer),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => crate::png::write_png(pix, writer),
        other => Err(IoError::UnsupportedFormat(format!(
            "writing {:?} is not supported",
            other
        ))),
    }
}
