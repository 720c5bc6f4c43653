use crate::{ViewerError, ViewerResult, rgb_to_u32};
use image::RgbImage;
use minifb::{Key, Window, WindowOptions};

/// Show `image` and block until the window is closed or `Escape` is pressed.
pub fn show_image(title: &str, image: &RgbImage) -> ViewerResult<()> {
    if image.is_empty() {
        return Err(ViewerError::EmptyImage);
    }

    let (width, height) = (image.width() as usize, image.height() as usize);
    let buffer = rgb_to_u32(image);

    let mut window = Window::new(
        title,
        width,
        height,
        WindowOptions {
            resize: false,
            ..WindowOptions::default()
        },
    )?;

    window.set_target_fps(30);
    log::debug!("showing `{title}` ({width}x{height}), close the window to continue");

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&buffer, width, height)?;
    }

    Ok(())
}
