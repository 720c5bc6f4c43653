use crate::{
    ControlSurface, Trackbar, TrackbarSpec, ViewerError, ViewerResult, rgb_to_u32,
};
use fast_image_resize::{PixelType, ResizeAlg, Resizer, images::Image as FastImage};
use image::RgbImage;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};
use plotters::{coord::Shift, prelude::*};
use std::{thread, time::Duration};

const ROW_HEIGHT: usize = 40;
const TRACK_MARGIN: usize = 16;
const TRACK_TOP: i32 = 26;
const TRACK_THICKNESS: i32 = 6;
const KNOB_HALF_WIDTH: i32 = 4;
const MAX_PREVIEW_WIDTH: u32 = 1280;

const PANEL_BG: RGBColor = RGBColor(40, 40, 40);
const TRACK_BG: RGBColor = RGBColor(90, 90, 90);
const TRACK_FILL: RGBColor = RGBColor(0, 150, 255);

/// Frame preview with a strip of trackbars below it.
///
/// The native window is opened by the first [`ControlSurface::show`], once the
/// frame size is known.
#[derive(Default)]
pub struct ControlWindow {
    title: Option<String>,
    window: Option<Window>,
    trackbars: Vec<Trackbar>,
    preview_size: Option<(u32, u32)>,
    dragging: Option<usize>,
    keys_down: Vec<Key>,
}

impl ControlWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trackbars(&self) -> &[Trackbar] {
        &self.trackbars
    }

    fn handle_mouse(&mut self) {
        let (Some(window), Some((width, height))) = (self.window.as_ref(), self.preview_size)
        else {
            return;
        };

        if !window.get_mouse_down(MouseButton::Left) {
            self.dragging = None;
            return;
        }

        let Some((x, y)) = window.get_mouse_pos(MouseMode::Clamp) else {
            return;
        };

        if self.dragging.is_none() {
            self.dragging = trackbar_at(y, height as usize, self.trackbars.len());
        }

        if let Some(index) = self.dragging
            && let Some(bar) = self.trackbars.get_mut(index)
        {
            bar.set_ratio(track_ratio(x, width as usize));
        }
    }
}

impl ControlSurface for ControlWindow {
    fn named_window(&mut self, title: &str) -> ViewerResult<()> {
        self.title = Some(title.to_string());
        Ok(())
    }

    fn create_trackbar(&mut self, spec: TrackbarSpec) -> ViewerResult<()> {
        if self.title.is_none() {
            return Err(ViewerError::NoWindow(spec.name.to_string()));
        }

        match self.trackbars.iter_mut().find(|bar| bar.name() == spec.name) {
            Some(bar) => *bar = Trackbar::new(spec),
            None => self.trackbars.push(Trackbar::new(spec)),
        }
        Ok(())
    }

    fn trackbar_pos(&self, name: &str) -> Option<i64> {
        self.trackbars
            .iter()
            .find(|bar| bar.name() == name)
            .map(|bar| bar.value())
    }

    fn show(&mut self, frame: &RgbImage) -> ViewerResult<()> {
        let Some(title) = self.title.as_deref() else {
            return Err(ViewerError::NoWindow(String::default()));
        };

        if frame.is_empty() {
            return Err(ViewerError::EmptyImage);
        }

        let (width, height) = *self
            .preview_size
            .get_or_insert_with(|| fit_preview_size(frame.dimensions()));

        let mut canvas = if frame.dimensions() == (width, height) {
            rgb_to_u32(frame)
        } else {
            rgb_to_u32(&resize_rgb(frame, width, height)?)
        };
        canvas.extend(render_panel(width, &self.trackbars));

        let total_height = height as usize + panel_height(self.trackbars.len());

        if self.window.is_none() {
            let mut window = Window::new(
                title,
                width as usize,
                total_height,
                WindowOptions::default(),
            )?;
            window.set_target_fps(0);

            log::info!("opened window `{title}` ({width}x{total_height})");
            self.window = Some(window);
        }

        if let Some(window) = self.window.as_mut() {
            window.update_with_buffer(&canvas, width as usize, total_height)?;
        }

        Ok(())
    }

    // Input state was refreshed by the `update_with_buffer` in `show`. A
    // second `update` here would age a fresh press before it could be read.
    fn wait_key(&mut self, delay: Duration) -> Option<char> {
        thread::sleep(delay);
        self.handle_mouse();

        let keys = self.window.as_ref()?.get_keys();
        let pressed = newly_pressed(&self.keys_down, &keys);
        self.keys_down = keys;
        pressed
    }

    fn is_open(&self) -> bool {
        self.window.as_ref().is_none_or(|w| w.is_open())
    }

    fn destroy_all_windows(&mut self) {
        if self.window.take().is_some() {
            log::debug!("window closed");
        }
        self.title = None;
        self.dragging = None;
        self.keys_down.clear();
    }
}

fn panel_height(rows: usize) -> usize {
    rows * ROW_HEIGHT
}

/// Index of the trackbar row under a pointer at height `y`.
fn trackbar_at(y: f32, preview_height: usize, rows: usize) -> Option<usize> {
    let offset = y - preview_height as f32;
    if offset < 0.0 {
        return None;
    }

    let row = (offset / ROW_HEIGHT as f32) as usize;
    (row < rows).then_some(row)
}

fn track_span(width: usize) -> (usize, usize) {
    let left = TRACK_MARGIN.min(width / 2);
    (left, width.saturating_sub(left).max(left + 1))
}

fn track_ratio(x: f32, width: usize) -> f32 {
    let (left, right) = track_span(width);
    ((x - left as f32) / (right - left) as f32).clamp(0.0, 1.0)
}

fn fit_preview_size((width, height): (u32, u32)) -> (u32, u32) {
    if width <= MAX_PREVIEW_WIDTH {
        return (width, height);
    }

    let scaled = (height as u64 * MAX_PREVIEW_WIDTH as u64 / width as u64).max(1);
    (MAX_PREVIEW_WIDTH, scaled as u32)
}

fn resize_rgb(frame: &RgbImage, width: u32, height: u32) -> ViewerResult<RgbImage> {
    let (src_width, src_height) = frame.dimensions();
    let src = FastImage::from_vec_u8(
        src_width,
        src_height,
        frame.as_raw().clone(),
        PixelType::U8x3,
    )?;

    let mut resized = vec![0u8; (width * height * 3) as usize];
    let mut dst = FastImage::from_slice_u8(width, height, &mut resized, PixelType::U8x3)?;

    let resize_options = fast_image_resize::ResizeOptions::new().resize_alg(
        ResizeAlg::Convolution(fast_image_resize::FilterType::Bilinear),
    );
    Resizer::new().resize(&src, &mut dst, &resize_options)?;

    RgbImage::from_raw(width, height, resized).ok_or(ViewerError::EmptyImage)
}

fn render_panel(width: u32, trackbars: &[Trackbar]) -> Vec<u32> {
    let height = panel_height(trackbars.len()) as u32;
    if height == 0 || width == 0 {
        return Vec::new();
    }

    let mut buffer = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();

        if let Err(e) = draw_tracks(&root, width as usize, trackbars) {
            log::debug!("draw trackbars failed: {e}");
        }

        // labels need a system font, tracks don't
        if let Err(e) = draw_labels(&root, trackbars) {
            log::debug!("draw trackbar labels failed: {e}");
        }

        _ = root.present();
    }

    RgbImage::from_raw(width, height, buffer)
        .map(|panel| rgb_to_u32(&panel))
        .unwrap_or_default()
}

fn draw_tracks(
    root: &DrawingArea<BitMapBackend, Shift>,
    width: usize,
    trackbars: &[Trackbar],
) -> Result<(), String> {
    root.fill(&PANEL_BG).map_err(|e| e.to_string())?;

    let (left, right) = track_span(width);
    let (left, right) = (left as i32, right as i32);

    for (row, bar) in trackbars.iter().enumerate() {
        let top = (row * ROW_HEIGHT) as i32 + TRACK_TOP;
        let bottom = top + TRACK_THICKNESS;
        let knob = left + ((right - left) as f32 * bar.ratio()).round() as i32;

        root.draw(&Rectangle::new(
            [(left, top), (right, bottom)],
            TRACK_BG.filled(),
        ))
        .map_err(|e| e.to_string())?;

        root.draw(&Rectangle::new(
            [(left, top), (knob, bottom)],
            TRACK_FILL.filled(),
        ))
        .map_err(|e| e.to_string())?;

        root.draw(&Rectangle::new(
            [(knob - KNOB_HALF_WIDTH, top - 6), (knob + KNOB_HALF_WIDTH, bottom + 6)],
            WHITE.filled(),
        ))
        .map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn draw_labels(
    root: &DrawingArea<BitMapBackend, Shift>,
    trackbars: &[Trackbar],
) -> Result<(), String> {
    let style = ("sans-serif", 14).into_font().color(&WHITE);

    for (row, bar) in trackbars.iter().enumerate() {
        let (min, max) = bar.range();
        let label = format!("{}: {} [{min}, {max}]", bar.name(), bar.value());
        let pos = (TRACK_MARGIN as i32, (row * ROW_HEIGHT) as i32 + 4);

        root.draw(&Text::new(label, pos, style.clone()))
            .map_err(|e| e.to_string())?;
    }

    Ok(())
}

/// First key that is down now but was not at the previous poll.
fn newly_pressed(before: &[Key], now: &[Key]) -> Option<char> {
    now.iter()
        .copied()
        .filter(|key| !before.contains(key))
        .find_map(key_to_char)
}

fn key_to_char(key: Key) -> Option<char> {
    let c = match key {
        Key::A => 'a',
        Key::B => 'b',
        Key::C => 'c',
        Key::D => 'd',
        Key::E => 'e',
        Key::F => 'f',
        Key::G => 'g',
        Key::H => 'h',
        Key::I => 'i',
        Key::J => 'j',
        Key::K => 'k',
        Key::L => 'l',
        Key::M => 'm',
        Key::N => 'n',
        Key::O => 'o',
        Key::P => 'p',
        Key::Q => 'q',
        Key::R => 'r',
        Key::S => 's',
        Key::T => 't',
        Key::U => 'u',
        Key::V => 'v',
        Key::W => 'w',
        Key::X => 'x',
        Key::Y => 'y',
        Key::Z => 'z',
        Key::Key0 => '0',
        Key::Key1 => '1',
        Key::Key2 => '2',
        Key::Key3 => '3',
        Key::Key4 => '4',
        Key::Key5 => '5',
        Key::Key6 => '6',
        Key::Key7 => '7',
        Key::Key8 => '8',
        Key::Key9 => '9',
        Key::Space => ' ',
        Key::Enter => '\r',
        Key::Escape => '\u{1b}',
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trackbar_at() {
        assert_eq!(trackbar_at(10.0, 480, 3), None);
        assert_eq!(trackbar_at(480.0, 480, 3), Some(0));
        assert_eq!(trackbar_at(519.0, 480, 3), Some(0));
        assert_eq!(trackbar_at(520.0, 480, 3), Some(1));
        assert_eq!(trackbar_at(599.0, 480, 3), Some(2));
        assert_eq!(trackbar_at(600.0, 480, 3), None);
        assert_eq!(trackbar_at(500.0, 480, 0), None);
    }

    #[test]
    fn test_track_ratio() {
        assert_eq!(track_ratio(0.0, 640), 0.0);
        assert_eq!(track_ratio(16.0, 640), 0.0);
        assert_eq!(track_ratio(320.0, 640), 0.5);
        assert_eq!(track_ratio(624.0, 640), 1.0);
        assert_eq!(track_ratio(10_000.0, 640), 1.0);
        assert!((0.0..=1.0).contains(&track_ratio(1.0, 1)));
    }

    #[test]
    fn test_fit_preview_size() {
        assert_eq!(fit_preview_size((640, 480)), (640, 480));
        assert_eq!(fit_preview_size((1280, 720)), (1280, 720));
        assert_eq!(fit_preview_size((1920, 1080)), (1280, 720));
        assert_eq!(fit_preview_size((100_000, 1)), (1280, 1));
    }

    #[test]
    fn test_resize_rgb() {
        let frame = RgbImage::from_pixel(64, 32, image::Rgb([200, 100, 50]));
        let resized = resize_rgb(&frame, 32, 16).unwrap();
        assert_eq!(resized.dimensions(), (32, 16));
        assert_eq!(resized.get_pixel(10, 10).0, [200, 100, 50]);
    }

    #[test]
    fn test_key_to_char() {
        assert_eq!(key_to_char(Key::Q), Some('q'));
        assert_eq!(key_to_char(Key::Key7), Some('7'));
        assert_eq!(key_to_char(Key::Escape), Some('\u{1b}'));
        assert_eq!(key_to_char(Key::LeftShift), None);
    }

    #[test]
    fn test_newly_pressed() {
        assert_eq!(newly_pressed(&[], &[Key::Q]), Some('q'));
        assert_eq!(newly_pressed(&[Key::Q], &[Key::Q]), None);
        assert_eq!(newly_pressed(&[Key::Q], &[]), None);
        assert_eq!(newly_pressed(&[Key::Q], &[Key::Q, Key::A]), Some('a'));
        assert_eq!(newly_pressed(&[], &[Key::LeftShift, Key::Q]), Some('q'));

        // held across polls, released, pressed again
        let polls: [&[Key]; 4] = [&[Key::Q], &[Key::Q], &[], &[Key::Q]];
        let mut before = Vec::new();
        let seen = polls
            .into_iter()
            .map(|now| {
                let pressed = newly_pressed(&before, now);
                before = now.to_vec();
                pressed
            })
            .collect::<Vec<_>>();
        assert_eq!(seen, vec![Some('q'), None, None, Some('q')]);
    }

    #[test]
    fn test_render_panel_size() {
        let bars = [Trackbar::new(TrackbarSpec::new("Focus", 1, 1023, 512))];
        let panel = render_panel(64, &bars);
        assert_eq!(panel.len(), 64 * ROW_HEIGHT);
        assert!(panel.iter().all(|&p| p <= 0x00ff_ffff));
        assert!(render_panel(64, &[]).is_empty());
    }

    #[test]
    fn test_trackbars_without_display() {
        let mut window = ControlWindow::new();
        let spec = TrackbarSpec::new("Focus", 1, 1023, 1);

        assert!(matches!(
            window.create_trackbar(spec),
            Err(ViewerError::NoWindow(_))
        ));

        window.named_window("Camera").unwrap();
        window.create_trackbar(spec).unwrap();
        window
            .create_trackbar(TrackbarSpec::new("Exposure", 1, 5000, 1))
            .unwrap();

        assert_eq!(window.trackbar_pos("Focus"), Some(1));
        assert_eq!(window.trackbar_pos("Exposure"), Some(1));
        assert_eq!(window.trackbar_pos("Zoom"), None);
        assert!(window.is_open());

        // Recreating a trackbar replaces it instead of adding a row.
        window
            .create_trackbar(TrackbarSpec::new("Focus", 1, 1023, 280))
            .unwrap();
        assert_eq!(window.trackbars().len(), 2);
        assert_eq!(window.trackbar_pos("Focus"), Some(280));

        // No native window yet, so polling only waits.
        assert_eq!(window.wait_key(Duration::from_millis(1)), None);

        window.destroy_all_windows();
        assert!(window.is_open());
    }

    #[test]
    fn test_show_requires_window() {
        let mut window = ControlWindow::new();
        let frame = RgbImage::new(4, 4);
        assert!(matches!(window.show(&frame), Err(ViewerError::NoWindow(_))));
    }
}
