use std::io::Cursor;

use super::*;
use crate::foundation::palette::Color;
use crate::surface::framebuffer::IndexedFramebuffer;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "deskpaint_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([255, 255, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    let path = dir.join(name);
    std::fs::write(&path, &buf).unwrap();
    path
}

#[test]
fn center_origin_keeps_small_bitmap_on_screen() {
    let screen = Canvas::SCREEN;
    for (w, h) in [(1, 1), (100, 50), (639, 479), (640, 480), (3, 400)] {
        let o = centered_origin(Canvas { width: w, height: h }, screen);
        assert!(o.x >= 0 && o.y >= 0);
        assert!(o.x as u32 + w <= screen.width);
        assert!(o.y as u32 + h <= screen.height);
    }
    assert_eq!(
        centered_origin(
            Canvas {
                width: 100,
                height: 50
            },
            screen
        ),
        Point::new(270, 215)
    );
}

#[test]
fn center_origin_clamps_oversized_bitmap() {
    let o = centered_origin(
        Canvas {
            width: 800,
            height: 600,
        },
        Canvas::SCREEN,
    );
    assert_eq!(o, Point::ORIGIN);
}

#[test]
fn cache_center_and_stretch_placement() {
    let tmp = temp_dir("wallpaper_modes");
    let path = write_png(&tmp, "wp.png", 100, 50);

    let mut cache = WallpaperCache::new();
    assert!(cache.cache(Some(&path), PlacementMode::Center, Canvas::SCREEN));
    assert_eq!(cache.footprint(), Some(Rect::new(270, 215, 100, 50)));

    assert!(cache.cache(Some(&path), PlacementMode::Stretch, Canvas::SCREEN));
    assert_eq!(cache.footprint(), Some(Rect::new(0, 0, 640, 480)));

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn missing_file_leaves_cache_empty() {
    let mut fb = IndexedFramebuffer::new(Canvas::SCREEN);
    let mut cache = WallpaperCache::new();
    let missing = temp_dir("wallpaper_missing").join("nope.png");
    assert!(!cache.cache(Some(&missing), PlacementMode::Center, Canvas::SCREEN));
    assert!(cache.cached().is_none());
    assert_eq!(cache.footprint(), None);

    cache.draw_full(&mut fb);
    cache.draw_partial(&mut fb, 0, 0, 0, 0, 10, 10);
    assert!(fb.back().iter().all(|&p| p == 0));
}

#[test]
fn update_decodes_only_on_path_or_mode_change() {
    let tmp = temp_dir("wallpaper_update");
    let a = write_png(&tmp, "a.png", 4, 4);
    let b = write_png(&tmp, "b.png", 4, 4);

    let mut cache = WallpaperCache::new();
    assert!(cache.update(Some(&a), PlacementMode::Center, Canvas::SCREEN));
    assert!(!cache.update(Some(&a), PlacementMode::Center, Canvas::SCREEN));
    assert_eq!(cache.decode_count(), 1);

    assert!(cache.update(Some(&a), PlacementMode::Stretch, Canvas::SCREEN));
    assert!(cache.update(Some(&b), PlacementMode::Stretch, Canvas::SCREEN));
    assert_eq!(cache.decode_count(), 3);

    assert!(cache.update(None, PlacementMode::Stretch, Canvas::SCREEN));
    assert!(cache.cached().is_none());
    assert_eq!(cache.decode_count(), 3);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn draw_partial_blits_the_requested_sub_rect() {
    let tmp = temp_dir("wallpaper_partial");
    let path = write_png(&tmp, "wp.png", 100, 50);

    let mut fb = IndexedFramebuffer::new(Canvas::SCREEN);
    let mut cache = WallpaperCache::new();
    cache.cache(Some(&path), PlacementMode::Center, Canvas::SCREEN);
    cache.draw_partial(&mut fb, 280, 220, 10, 5, 3, 2);

    assert_eq!(fb.get_pixel(280, 220), Some(Color::WHITE));
    assert_eq!(fb.get_pixel(282, 221), Some(Color::WHITE));
    assert_eq!(fb.get_pixel(283, 220), Some(Color::BLACK));
    assert_eq!(fb.back().iter().filter(|&&p| p != 0).count(), 6);

    std::fs::remove_dir_all(&tmp).ok();
}
