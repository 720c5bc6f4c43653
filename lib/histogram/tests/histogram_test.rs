// cargo test -p histogram --test histogram_test

use anyhow::Result;
use histogram::{BINS, Channel, ColorHistogram, HistogramError, load_image};
use image::{Rgb, RgbImage};

fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 7 % 256) as u8,
            (y * 13 % 256) as u8,
            ((x + y) * 3 % 256) as u8,
        ])
    })
}

#[test]
fn test_totals_match_pixel_count() {
    for (width, height) in [(1, 1), (17, 9), (320, 240)] {
        let hist = ColorHistogram::compute(&gradient_image(width, height));

        let sum = Channel::ALL.iter().map(|&c| hist.total(c)).sum::<u64>();
        assert_eq!(sum, 3 * width as u64 * height as u64);

        for channel in Channel::ALL {
            assert_eq!(hist.channel(channel).len(), BINS);
            assert_eq!(hist.total(channel), width as u64 * height as u64);
        }
    }
}

#[test]
fn test_load_png_from_disk() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("gradient.png");
    gradient_image(64, 48).save(&path)?;

    let image = load_image(&path)?;
    assert_eq!(image.dimensions(), (64, 48));

    let hist = ColorHistogram::compute(&image);
    assert_eq!(hist, ColorHistogram::compute(&gradient_image(64, 48)));
    Ok(())
}

#[test]
fn test_load_grayscale_png_counts_every_channel() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("gray.png");
    image::GrayImage::from_pixel(8, 8, image::Luma([42])).save(&path)?;

    let hist = ColorHistogram::compute(&load_image(&path)?);
    for channel in Channel::ALL {
        assert_eq!(hist.channel(channel)[42], 64);
    }
    Ok(())
}

#[test]
fn test_load_missing_file() {
    let err = load_image("does/not/exist.jpg").unwrap_err();
    assert!(matches!(err, HistogramError::ImageLoad { .. }));
    assert!(err.to_string().contains("does/not/exist.jpg"));
}

#[test]
fn test_load_undecodable_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png")?;

    assert!(matches!(
        load_image(&path),
        Err(HistogramError::ImageLoad { .. })
    ));
    Ok(())
}
