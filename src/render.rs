use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::grid::Grid;

pub const BLACK: [u8; 4] = [0, 0, 0, 255];
pub const WHITE: [u8; 4] = [255, 255, 255, 255];

/// RGBA8 pixel buffer, row-major, 4 bytes per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub w: usize,
    pub h: usize,
    pub rgba: Vec<u8>,
}

impl Image {
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        debug_assert!(x < self.w && y < self.h);
        let i = (y * self.w + x) * 4;
        [self.rgba[i], self.rgba[i + 1], self.rgba[i + 2], self.rgba[i + 3]]
    }

    pub fn into_rgba_image(self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.w as u32, self.h as u32, self.rgba)
    }
}

/// Render a space-time grid: live cells black, dead cells white.
/// Grid rows before `offset` are dropped; grid row `offset` becomes pixel row 0.
pub fn render(grid: &Grid<bool>, offset: i64) -> Result<Image> {
    let start = usize::try_from(offset)
        .ok()
        .filter(|&o| o < grid.h)
        .ok_or(Error::InvalidOffset {
            offset,
            height: grid.h,
        })?;

    let w = grid.w;
    let h = grid.h - start;
    let mut rgba = vec![0u8; w * h * 4];

    rgba.par_chunks_mut(w * 4).enumerate().for_each(|(y, row)| {
        for (px, &cell) in row.chunks_exact_mut(4).zip(grid.row(start + y)) {
            px.copy_from_slice(if cell { &BLACK } else { &WHITE });
        }
    });

    Ok(Image { w, h, rgba })
}
