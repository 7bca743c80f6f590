use std::io::Cursor;

use anyhow::Context;

use crate::foundation::error::{ThumbsmithError, ThumbsmithResult};
use crate::render::FrameRGBA;

/// Straight-alpha RGBA8 from a premultiplied buffer.
pub fn unpremultiply(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    for px in data.chunks_exact(4) {
        let a = px[3];
        match a {
            0 => out.extend_from_slice(&[0, 0, 0, 0]),
            255 => out.extend_from_slice(px),
            _ => {
                let a16 = u16::from(a);
                let un = |c: u8| ((u16::from(c) * 255 + a16 / 2) / a16).min(255) as u8;
                out.extend_from_slice(&[un(px[0]), un(px[1]), un(px[2]), a]);
            }
        }
    }
    out
}

/// Encode a frame as PNG bytes (straight alpha, 8-bit RGBA).
pub fn encode_png(frame: &FrameRGBA) -> ThumbsmithResult<Vec<u8>> {
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.data.len() != expected {
        return Err(ThumbsmithError::export(format!(
            "frame buffer is {} bytes, expected {expected}",
            frame.data.len()
        )));
    }

    let straight = if frame.premultiplied {
        unpremultiply(&frame.data)
    } else {
        frame.data.clone()
    };
    let img = image::RgbaImage::from_raw(frame.width, frame.height, straight)
        .ok_or_else(|| ThumbsmithError::export("frame buffer does not match its dimensions"))?;

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
