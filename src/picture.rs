// Module for full-screen pictures: four 8000-byte planes (blue, green, red,
// brighten), one byte per 8-pixel group, no transparency plane.
use anyhow::{Context, Result};
use log::info;
use std::path::Path;

use crate::{
    common::{PixelSize, SCREEN_HEIGHT, SCREEN_WIDTH, TRANSPARENT},
    geometry::Rect,
    reader::AssetReader,
    surface::Surface,
    tile::ByteRow,
};

pub const PICTURE_WIDTH_GROUPS: usize = SCREEN_WIDTH as usize / 8;
pub const PICTURE_HEIGHT: usize = SCREEN_HEIGHT as usize;
pub const PLANE_SIZE: usize = PICTURE_WIDTH_GROUPS * PICTURE_HEIGHT;

pub fn load_picture(reader: &mut AssetReader, pixel_size: PixelSize) -> Result<Surface> {
    let mut planes: [Vec<u8>; 4] = Default::default();
    for (plane, name) in planes.iter_mut().zip(["blue", "green", "red", "brighten"]) {
        *plane = reader
            .read_n(PLANE_SIZE)
            .with_context(|| format!("reading {} plane", name))?
            .to_vec();
    }
    let [blue, green, red, brighten] = planes;

    let width = SCREEN_WIDTH * pixel_size;
    let mut picture = Surface::new(width, SCREEN_HEIGHT * pixel_size);
    let mut dest = Rect::new(0, 0, pixel_size, pixel_size);
    for i in 0..PLANE_SIZE {
        let row = ByteRow {
            brighten: brighten[i],
            red: red[i],
            green: green[i],
            blue: blue[i],
            trans: 0xFF,
        };
        row.draw(TRANSPARENT, &mut dest, pixel_size, &mut picture);
        if dest.x as u32 >= width {
            dest.x = 0;
            dest.y += pixel_size as i32;
        }
    }
    Ok(picture)
}

pub fn load_picture_file(path: &Path, pixel_size: PixelSize) -> Result<Surface> {
    info!("Loading picture {}", path.display());
    let mut reader = AssetReader::open(path)?;
    load_picture(&mut reader, pixel_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::BLACK, error::AssetError};

    #[test]
    fn all_zero_picture_is_black() {
        let mut reader = AssetReader::new("BADGUY.DN1", vec![0; 4 * PLANE_SIZE]);
        let picture = load_picture(&mut reader, 1).unwrap();
        assert_eq!((picture.width(), picture.height()), (320, 200));
        assert!(picture.pixels().iter().all(|&c| c == BLACK));
        assert_eq!(picture.color_key(), None);
    }

    #[test]
    fn planes_are_read_in_order() {
        let mut data = vec![0; 4 * PLANE_SIZE];
        // Group 0: blue; group 41 (second row, second group): red + brighten.
        data[0] = 0xFF;
        data[2 * PLANE_SIZE + 41] = 0x80;
        data[3 * PLANE_SIZE + 41] = 0x80;
        let mut reader = AssetReader::new("TEST.DN1", data);
        let picture = load_picture(&mut reader, 2).unwrap();
        assert_eq!((picture.width(), picture.height()), (640, 400));
        assert_eq!(picture.pixel(0, 0), Some([0, 0, 0xA8]));
        assert_eq!(picture.pixel(15, 1), Some([0, 0, 0xA8]));
        assert_eq!(picture.pixel(16, 0), Some(BLACK));
        assert_eq!(picture.pixel(16, 2), Some([0xFC, 0x54, 0x54]));
        assert_eq!(picture.pixel(17, 3), Some([0xFC, 0x54, 0x54]));
        assert_eq!(picture.pixel(18, 2), Some(BLACK));
    }

    #[test]
    fn missing_plane_fails() {
        let mut reader = AssetReader::new("TEST.DN1", vec![0; 3 * PLANE_SIZE + 10]);
        let err = load_picture(&mut reader, 1).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AssetError>(),
            Some(AssetError::Truncated { .. })
        ));
    }
}
