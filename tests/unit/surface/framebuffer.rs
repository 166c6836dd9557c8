use super::*;

fn small() -> IndexedFramebuffer {
    IndexedFramebuffer::new(Canvas {
        width: 8,
        height: 6,
    })
}

#[test]
fn fill_rect_clips_to_screen() {
    let mut fb = small();
    fb.fill_rect(Rect::new(-2, -2, 4, 4), Color(7));
    assert_eq!(fb.get_pixel(0, 0), Some(Color(7)));
    assert_eq!(fb.get_pixel(1, 1), Some(Color(7)));
    assert_eq!(fb.get_pixel(2, 2), Some(Color(0)));
    assert_eq!(fb.back().iter().filter(|&&p| p == 7).count(), 4);
}

#[test]
fn out_of_screen_access_is_ignored() {
    let mut fb = small();
    fb.put_pixel(8, 0, Color(1));
    fb.put_pixel(-1, 3, Color(1));
    assert_eq!(fb.get_pixel(8, 0), None);
    assert!(fb.back().iter().all(|&p| p == 0));
}

#[test]
fn present_copies_back_to_front() {
    let mut fb = small();
    fb.put_pixel(3, 3, Color(9));
    assert_eq!(fb.front_pixel(3, 3), Some(Color(0)));
    fb.present();
    assert_eq!(fb.front_pixel(3, 3), Some(Color(9)));
    assert_eq!(fb.present_count(), 1);
}

#[test]
fn blit_copies_sub_rect_to_destination() {
    let mut fb = small();
    let mut bmp = Bitmap::filled(4, 4, Color(1));
    bmp.pixels[5] = 2; // (1, 1)
    fb.blit(&bmp, 2, 2, Rect::new(1, 1, 2, 2));
    assert_eq!(fb.get_pixel(2, 2), Some(Color(2)));
    assert_eq!(fb.get_pixel(3, 3), Some(Color(1)));
    assert_eq!(fb.get_pixel(4, 4), Some(Color(0)));
    assert_eq!(fb.back().iter().filter(|&&p| p != 0).count(), 4);
}

#[test]
fn outline_draws_only_the_border() {
    let mut fb = small();
    fb.outline_rect(Rect::new(1, 1, 4, 3), Color(5));
    assert_eq!(fb.get_pixel(1, 1), Some(Color(5)));
    assert_eq!(fb.get_pixel(4, 3), Some(Color(5)));
    assert_eq!(fb.get_pixel(2, 2), Some(Color(0)));
    assert_eq!(fb.back().iter().filter(|&&p| p == 5).count(), 10);
}

#[test]
fn rgb_export_expands_palette() {
    let mut fb = small();
    fb.put_pixel(0, 0, Color::WHITE);
    fb.present();
    let img = fb.to_rgb_image();
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0]);
}

#[test]
fn outline_past_right_edge_keeps_visible_edges_only() {
    let mut fb = small();
    fb.outline_rect(Rect::new(6, 1, 4, 3), Color(5));
    assert_eq!(fb.get_pixel(6, 1), Some(Color(5)));
    assert_eq!(fb.get_pixel(7, 1), Some(Color(5)));
    assert_eq!(fb.get_pixel(6, 2), Some(Color(5)));
    assert_eq!(fb.get_pixel(7, 3), Some(Color(5)));
    // The right edge is at x=9; the screen's last column must not get one.
    assert_eq!(fb.get_pixel(7, 2), Some(Color(0)));
    assert_eq!(fb.back().iter().filter(|&&p| p == 5).count(), 5);
}

#[test]
fn outline_of_huge_rect_draws_nothing_off_screen() {
    let mut fb = small();
    fb.outline_rect(
        Rect::new(-1_000_000, -1_000_000, i32::MAX, i32::MAX),
        Color(5),
    );
    assert!(fb.back().iter().all(|&p| p == 0));
}

#[test]
fn line_from_far_off_screen_still_lands() {
    let mut fb = small();
    fb.draw_line(-1_000_000, 2, 1_000_000, 2, Color(3));
    assert!((0..8).all(|x| fb.get_pixel(x, 2) == Some(Color(3))));
    assert_eq!(fb.back().iter().filter(|&&p| p == 3).count(), 8);
}
