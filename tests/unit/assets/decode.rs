use std::io::Cursor;

use super::*;

fn png_bytes(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb(rgb));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_bitmap_png_dimensions_and_palette() {
    let bmp = decode_bitmap(&png_bytes(3, 2, [255, 255, 255])).unwrap();
    assert_eq!((bmp.width, bmp.height), (3, 2));
    assert!(bmp.is_valid());
    assert!(bmp.pixels.iter().all(|&p| p == Color::WHITE.0));
}

#[test]
fn decode_bitmap_scaled_fills_target() {
    let target = Canvas {
        width: 16,
        height: 12,
    };
    let bmp = decode_bitmap_scaled(&png_bytes(2, 2, [0, 0, 0]), target).unwrap();
    assert_eq!(bmp.canvas(), target);
    assert_eq!(bmp.pixels.len(), 16 * 12);
}

#[test]
fn decode_rejects_garbage() {
    let err = decode_bitmap(b"not an image").unwrap_err();
    assert!(matches!(err, DeskError::Decode(_)));
    assert!(err.to_string().contains("decode image"));
}
