use eframe_sketchpad::drawable::{
    BrushPreview, Drawable, DrawableKind, Sticker, StickerPreview, Stroke,
};
use eframe_sketchpad::pixmap::Pixmap;
use eframe_sketchpad::surface::Surface;
use egui::{Color32, Vec2, pos2};

fn ink(pixmap: &Pixmap) -> usize {
    pixmap
        .pixels()
        .chunks_exact(4)
        .filter(|px| px[3] > 0)
        .count()
}

#[test]
fn extend_appends_points_in_order() {
    let mut stroke = Stroke::new(pos2(0.0, 0.0), 1.0);
    for i in 1..=4 {
        stroke.extend(pos2(i as f32, i as f32 * 2.0));
    }

    // One initial point plus one per extend, earlier points untouched.
    assert_eq!(stroke.points().len(), 5);
    assert_eq!(stroke.points()[0], pos2(0.0, 0.0));
    assert_eq!(stroke.points()[2], pos2(2.0, 4.0));
    assert_eq!(stroke.points()[4], pos2(4.0, 8.0));
}

#[test]
fn one_point_stroke_renders_nothing_without_error() {
    let stroke = Stroke::new(pos2(8.0, 8.0), 3.0);
    let mut pixmap = Pixmap::new(Vec2::splat(16.0), 1.0);
    pixmap.set_color(Color32::BLACK);

    stroke.render(&mut pixmap);
    assert_eq!(ink(&pixmap), 0);
}

#[test]
fn two_point_stroke_renders_ink() {
    let mut stroke = Stroke::new(pos2(2.0, 8.0), 3.0);
    stroke.extend(pos2(14.0, 8.0));
    let mut pixmap = Pixmap::new(Vec2::splat(16.0), 1.0);
    pixmap.set_color(Color32::BLACK);

    stroke.render(&mut pixmap);
    assert!(ink(&pixmap) > 0);
}

#[test]
fn empty_glyph_sticker_is_a_safe_noop() {
    let sticker = Sticker::new(pos2(8.0, 8.0), "");
    let mut pixmap = Pixmap::new(Vec2::splat(16.0), 1.0);
    pixmap.set_color(Color32::BLACK);

    sticker.render(&mut pixmap);
    assert_eq!(ink(&pixmap), 0);
}

#[test]
fn sticker_extend_replaces_the_anchor() {
    let mut sticker = Sticker::new(pos2(1.0, 1.0), "🐶");
    sticker.extend(pos2(9.0, 9.0));
    sticker.extend(pos2(4.0, 2.0));
    assert_eq!(sticker.anchor(), pos2(4.0, 2.0));
    assert_eq!(sticker.glyph(), "🐶");
}

#[test]
fn previews_follow_the_pointer() {
    let mut brush = BrushPreview::new(pos2(0.0, 0.0), 3.0);
    brush.extend(pos2(5.0, 6.0));
    assert_eq!(brush.center(), pos2(5.0, 6.0));
    assert_eq!(brush.radius(), 3.0);

    let mut sticker = StickerPreview::new(pos2(0.0, 0.0), "🥞");
    sticker.extend(pos2(7.0, 8.0));
    assert_eq!(sticker.anchor(), pos2(7.0, 8.0));
}

#[test]
fn brush_preview_renders_a_dot_at_its_center() {
    let preview = BrushPreview::new(pos2(8.0, 8.0), 3.0);
    let mut pixmap = Pixmap::new(Vec2::splat(16.0), 1.0);
    pixmap.set_color(Color32::BLACK);

    preview.render(&mut pixmap);
    assert!(ink(&pixmap) > 0);

    // Coverage stays near the center.
    let far_corner = &pixmap.pixels()[..4];
    assert_eq!(far_corner[3], 0);
}

#[test]
fn enum_dispatch_matches_variant_behavior() {
    let mut drawable: DrawableKind = Stroke::new(pos2(0.0, 0.0), 1.0).into();
    drawable.extend(pos2(1.0, 1.0));
    assert_eq!(drawable.position(), pos2(1.0, 1.0));

    let mut drawable: DrawableKind = Sticker::new(pos2(0.0, 0.0), "🐶").into();
    drawable.extend(pos2(3.0, 3.0));
    assert_eq!(drawable.position(), pos2(3.0, 3.0));
}
