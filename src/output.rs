use std::path::{Path, PathBuf};

use base64::Engine;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use tracing::debug;

use crate::config::BoundaryPolicy;
use crate::error::Result;
use crate::render::Image;
use crate::rule::Rule;

/// `rule30.png`, or `rule30-wrapped.png` for wrapped boundaries.
pub fn file_name(rule: Rule, policy: BoundaryPolicy) -> String {
    match policy {
        BoundaryPolicy::Wrapped => format!("rule{}-wrapped.png", rule.number()),
        BoundaryPolicy::Clamped => format!("rule{}.png", rule.number()),
    }
}

/// Write `img` as a PNG into `dir`, creating the directory if needed.
pub fn save_png(dir: &Path, name: &str, img: &Image) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(name);
    image::save_buffer(
        &path,
        &img.rgba,
        img.w as u32,
        img.h as u32,
        image::ColorType::Rgba8,
    )?;
    debug!(path = %path.display(), w = img.w, h = img.h, "saved image");
    Ok(path)
}

pub fn encode_png(img: &Image) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        &img.rgba,
        img.w as u32,
        img.h as u32,
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(buf)
}

pub fn data_url(img: &Image) -> Result<String> {
    let b64 = base64::engine::general_purpose::STANDARD.encode(encode_png(img)?);
    Ok(format!("data:image/png;base64,{}", b64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{BLACK, WHITE};

    fn checker() -> Image {
        let mut rgba = Vec::new();
        for i in 0..6 {
            rgba.extend_from_slice(if i % 2 == 0 { &BLACK } else { &WHITE });
        }
        Image { w: 3, h: 2, rgba }
    }

    #[test]
    fn names() {
        let r = Rule::decode(110).unwrap();
        assert_eq!(file_name(r, BoundaryPolicy::Clamped), "rule110.png");
        assert_eq!(file_name(r, BoundaryPolicy::Wrapped), "rule110-wrapped.png");
    }

    #[test]
    fn png_bytes_decode_back() {
        let img = checker();
        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.into_raw(), img.rgba);
    }

    #[test]
    fn data_url_prefix() {
        let url = data_url(&checker()).unwrap();
        assert!(url.starts_with("data:image/png;base64,iVBOR"));
    }
}
