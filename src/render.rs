// Translation of the occupancy grid to pixels and onto disk.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::bounds::BoundingBox;
use crate::error::GrowthError;
use crate::grid::{Grid, GridPoint, PixelState};

pub const EMPTY_PIXEL : Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const FILLED_PIXEL : Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const OUTLINE_PIXEL : Rgba<u8> = Rgba([255, 0, 0, 255]);

pub fn pixel_color(state : PixelState) -> Rgba<u8> {
    match state {
        PixelState::Empty => EMPTY_PIXEL,
        PixelState::Filled => FILLED_PIXEL
    }
}

pub fn image(grid : &Grid) -> RgbaImage {
    RgbaImage::from_fn(grid.width(), grid.height(), |x, y| {
        pixel_color(grid.get(GridPoint { x : x as i64, y : y as i64 }))
    })
}

// Debug overlay of the final bounding box.
pub fn outline_bounds(image : &mut RgbaImage, bounds : &BoundingBox) {
    let min = bounds.min();
    let rect = Rect::at(min.x as i32, min.y as i32).of_size(bounds.width() as u32, bounds.height() as u32);
    draw_hollow_rect_mut(image, rect, OUTLINE_PIXEL);
}

pub fn save_png<P : AsRef<Path>>(image : &RgbaImage, path : P) -> Result<(), GrowthError> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_cells_are_opaque() {
        let mut grid = Grid::init(3, 2);
        grid.fill(GridPoint { x : 2, y : 1 });
        let img = image(&grid);
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(*img.get_pixel(2, 1), FILLED_PIXEL);
        assert_eq!(*img.get_pixel(0, 0), EMPTY_PIXEL);
        assert_eq!(img.pixels().filter(|p| p[3] == 255).count(), 1);
    }

    #[test]
    fn outline_traces_the_box_edges() {
        let grid = Grid::init(6, 6);
        let bounds = BoundingBox::from_seeds(&[GridPoint { x : 1, y : 1 }, GridPoint { x : 4, y : 3 }]).unwrap();
        let mut img = image(&grid);
        outline_bounds(&mut img, &bounds);
        assert_eq!(*img.get_pixel(1, 1), OUTLINE_PIXEL);
        assert_eq!(*img.get_pixel(4, 3), OUTLINE_PIXEL);
        assert_eq!(*img.get_pixel(2, 2), EMPTY_PIXEL);
        assert_eq!(*img.get_pixel(5, 5), EMPTY_PIXEL);
    }

    #[test]
    fn png_is_written_to_disk() {
        let mut grid = Grid::init(4, 4);
        grid.fill(GridPoint { x : 1, y : 1 });
        let path = std::env::temp_dir().join(format!("walker_tree_render_{}.png", std::process::id()));
        save_png(&image(&grid), &path).unwrap();
        let loaded = ::image::open(&path).unwrap().to_rgba8();
        assert_eq!(*loaded.get_pixel(1, 1), FILLED_PIXEL);
        std::fs::remove_file(&path).unwrap();
    }
}
