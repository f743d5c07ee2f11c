use std::fs;
use std::io::Cursor;
use std::path::Path;

use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use tracing::{debug, warn};

use crate::image_dir::{LoadError, lowercase_extension};

fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!(path = ?image_path, error = %e, "could not read EXIF data");
            1
        }
    }
}

// Loads an image, applies its EXIF rotation and uploads it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, LoadError> {
    let file_bytes = fs::read(image_path)
        .map_err(|source| LoadError::ReadFile { path: image_path.to_path_buf(), source })?;

    let extension = lowercase_extension(image_path);

    // EXIF is only read reliably from JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| LoadError::Decode { path: image_path.to_path_buf(), message: e.to_string() })?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW; flipped orientations are ignored
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(path = ?image_path, orientation, "applied EXIF rotation");
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| LoadError::Texture { path: image_path.to_path_buf(), message: e.to_string() })
}
