//! PNG grid loading
//!
//! Decodes an 8-bit RGB PNG into a grid of packed `0x00RRGGBB` cells.
//! Other color types and bit depths are rejected here, before the
//! segmentation core ever sees the data.

use crate::error::{IoError, IoResult};
use gridfill_core::{Grid, color};
use png::{BitDepth, ColorType, Decoder};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

/// Read a grid from a PNG stream.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] unless the image is 8-bit RGB,
/// and [`IoError::DecodeError`] if the PNG data is invalid.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Grid> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if color_type != ColorType::Rgb || bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG mode: {:?} {:?} (need 8-bit RGB)",
            color_type, bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut cells = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        let row_start = (y as usize) * bytes_per_row;
        for x in 0..width {
            let idx = row_start + (x as usize) * 3;
            cells.push(color::pack_rgb(data[idx], data[idx + 1], data[idx + 2]));
        }
    }

    Ok(Grid::from_cells(width, height, cells)?)
}

/// Read a grid from a PNG file.
pub fn read_png_file<P: AsRef<Path>>(path: P) -> IoResult<Grid> {
    let file = File::open(path)?;
    read_png(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_png(width: u32, height: u32, color_type: ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
        writer.finish().unwrap();
        out
    }

    #[test]
    fn test_read_rgb_png() {
        // 2x2: red, green / blue, white
        let data = [
            255, 0, 0, 0, 255, 0, //
            0, 0, 255, 255, 255, 255,
        ];
        let bytes = encode_png(2, 2, ColorType::Rgb, &data);

        let grid = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(0, 0), Some(0xff0000));
        assert_eq!(grid.get(1, 0), Some(0x00ff00));
        assert_eq!(grid.get(0, 1), Some(0x0000ff));
        assert_eq!(grid.get(1, 1), Some(0xffffff));
    }

    #[test]
    fn test_rejects_grayscale() {
        let bytes = encode_png(2, 2, ColorType::Grayscale, &[0, 64, 128, 255]);
        let err = read_png(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, IoError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_rejects_garbage() {
        let err = read_png(Cursor::new(b"not a png".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
