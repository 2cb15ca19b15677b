use vgadraw::config::{HISTORY_SLOTS, MAX_DIMENSION};
use vgadraw::framebuffer::color::encode;
use vgadraw::{Command, Config, DrawContext, DrawError, FrameBuffer, OpKind};

#[test]
fn extreme_rectangle_arguments_are_rejected() {
    let mut fb = FrameBuffer::vga();
    let mut ctx = DrawContext::new();

    let diag = ctx.rectangle(&mut fb, 10, 10, i32::MAX, 5, "red", 1).unwrap_err();
    assert_eq!(diag.get(2), Some(DrawError::InvalidExtent));
    assert_eq!(diag.errors().count(), 1);

    let diag = ctx.rectangle(&mut fb, i32::MIN, i32::MAX, i32::MAX, i32::MIN, "red", 1).unwrap_err();
    assert_eq!(diag.get(0), Some(DrawError::CoordinateOutOfRange));
    assert_eq!(diag.get(1), Some(DrawError::CoordinateOutOfRange));
    assert_eq!(diag.get(3), Some(DrawError::InvalidExtent));

    assert_eq!(fb.writes(), 0);
    assert!(ctx.history().is_empty());
}

#[test]
fn extreme_circle_and_tower_arguments_are_rejected() {
    let mut fb = FrameBuffer::vga();
    let mut ctx = DrawContext::new();

    let diag = ctx.circle(&mut fb, i32::MIN, 10, 5, "red").unwrap_err();
    assert_eq!(diag.get(0), Some(DrawError::CoordinateOutOfRange));
    let diag = ctx.circle(&mut fb, 10, 10, i32::MAX, "red").unwrap_err();
    assert_eq!(diag.get(2), Some(DrawError::InvalidExtent));
    let diag = ctx.circle(&mut fb, i32::MAX, i32::MAX, i32::MIN, "red").unwrap_err();
    assert_eq!(diag.get(2), Some(DrawError::InvalidExtent));

    for size in [1_000_000_000, i32::MAX, i32::MIN] {
        let diag = ctx.tower(&mut fb, 100, 100, size, "grey", "red").unwrap_err();
        assert_eq!(diag.get(2), Some(DrawError::InvalidExtent));
    }
    let diag = ctx.tower(&mut fb, i32::MAX, i32::MIN, 20, "grey", "red").unwrap_err();
    assert_eq!(diag.get(0), Some(DrawError::CoordinateOutOfRange));
    assert_eq!(diag.get(1), Some(DrawError::CoordinateOutOfRange));

    assert!(ctx.bitmap(&mut fb, 1, i32::MAX, 0).is_err());
    assert!(ctx.text(&mut fb, i32::MIN, 0, "red", "x", "pearl", i32::MAX, "bold").is_err());
    assert!(ctx.wait(i32::MIN).is_err());

    assert_eq!(fb.writes(), 0);
    assert!(ctx.history().is_empty());
}

#[test]
fn small_display_bounds_every_primitive() {
    let config = Config::new(64, 48).unwrap();
    let mut fb = FrameBuffer::new(64, 48);
    let mut ctx = DrawContext::with_config(config);

    ctx.set_pixel(&mut fb, 63, 47, "white").unwrap();
    assert_eq!(fb.pixel(63, 47), Some(encode("white")));
    assert!(ctx.set_pixel(&mut fb, 64, 0, "white").is_err());

    ctx.rectangle(&mut fb, 54, 38, 10, 10, "red", 0).unwrap();
    let diag = ctx.rectangle(&mut fb, 55, 0, 10, 5, "red", 0).unwrap_err();
    assert_eq!(diag.get(2), Some(DrawError::InvalidExtent));

    let diag = ctx.tower(&mut fb, 32, 40, 49, "grey", "red").unwrap_err();
    assert_eq!(diag.get(2), Some(DrawError::InvalidExtent));
    let diag = ctx.bitmap(&mut fb, 1, 50, 0).unwrap_err();
    assert_eq!(diag.get(1), Some(DrawError::InvalidExtent));

    assert_eq!(ctx.history().len(), 2);
}

#[test]
fn display_sides_are_capped_at_slot_width() {
    assert!(Config::new(MAX_DIMENSION + 1, 240).is_none());
    assert!(Config::new(320, i32::MAX).is_none());
    assert!(Config::new(0, 240).is_none());

    let config = Config::new(MAX_DIMENSION, 4).unwrap();
    let mut fb = FrameBuffer::new(MAX_DIMENSION as usize, 4);
    let mut ctx = DrawContext::with_config(config);

    ctx.set_pixel(&mut fb, MAX_DIMENSION - 1, 3, "green").unwrap();
    // the widest accepted coordinate still decodes to itself
    let expected = Command::SetPixel { x: MAX_DIMENSION - 1, y: 3, color: encode("green") };
    assert_eq!(ctx.history().command(0), Some(expected));

    fb.reset_writes();
    ctx.replay(&mut fb, 1, 1).unwrap();
    assert_eq!(fb.writes(), 1);
    assert_eq!(fb.pixel(MAX_DIMENSION as usize - 1, 3), Some(encode("green")));
}

#[test]
fn slot_capacity_evicts_through_the_context() {
    let mut fb = FrameBuffer::vga();
    let mut ctx = DrawContext::new();
    let points = [(10, 10), (20, 10), (20, 20), (10, 20), (15, 25)];

    // 21 twelve-slot polygons need 252 slots; only 20 fit
    for _ in 0..21 {
        ctx.polygon(&mut fb, points, "green").unwrap();
    }
    assert_eq!(ctx.history().len(), 20);
    assert_eq!(ctx.history().used(), 240);

    ctx.circle(&mut fb, 50, 50, 5, "red").unwrap();
    assert_eq!(ctx.history().len(), 21);
    assert_eq!(ctx.history().used(), HISTORY_SLOTS);

    // the next circle has to push one polygon out
    ctx.circle(&mut fb, 60, 50, 5, "red").unwrap();
    assert_eq!(ctx.history().len(), 21);
    assert_eq!(ctx.history().used(), 19 * 12 + 2 * 5);
    let last = ctx.history().record(20).map(|r| r.kind);
    assert_eq!(last, Some(OpKind::Circle));
    assert_eq!(
        ctx.history().command(20),
        Some(Command::Circle { x: 60, y: 50, radius: 5, color: encode("red") })
    );
}
