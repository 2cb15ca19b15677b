use core::sync::atomic::{AtomicU64, Ordering};

use vgadraw::framebuffer::color::{self, encode};
use vgadraw::timer::TickSource;
use vgadraw::{DrawContext, DrawError, FrameBuffer, OpKind};

#[test]
fn line_off_screen_is_rejected_without_drawing() {
    let mut fb = FrameBuffer::vga();
    let mut ctx = DrawContext::new();

    let diag = ctx.line(&mut fb, -1, 0, 10, 10, "red", 1).unwrap_err();
    assert_eq!(diag.kind(), OpKind::Line);
    assert_eq!(diag.get(0), Some(DrawError::CoordinateOutOfRange));
    assert_eq!(diag.errors().count(), 1);
    assert_eq!(fb.writes(), 0);
    assert!(ctx.history().is_empty());
}

#[test]
fn every_failing_argument_gets_its_own_channel() {
    let mut fb = FrameBuffer::vga();
    let mut ctx = DrawContext::new();

    let diag = ctx.rectangle(&mut fb, 400, 10, 0, 5, "mauve", 3).unwrap_err();
    assert_eq!(diag.get(0), Some(DrawError::CoordinateOutOfRange));
    assert_eq!(diag.get(1), None);
    assert_eq!(diag.get(2), Some(DrawError::InvalidExtent));
    assert_eq!(diag.get(3), None);
    assert_eq!(diag.get(4), Some(DrawError::InvalidColor));
    assert_eq!(diag.get(5), Some(DrawError::InvalidFlag));
    assert_eq!(fb.writes(), 0);
}

#[test]
fn text_near_the_right_edge_wraps() {
    let mut fb = FrameBuffer::vga();
    let mut ctx = DrawContext::new();

    ctx.text(&mut fb, 300, 10, "red", "MMMM", "acorn", 1, "normal").unwrap();
    // third glyph lands at x = 0, one text line down
    assert_eq!(fb.first_in_row(18, encode("red")), Some(0));
    assert_eq!(fb.first_in_row(10, encode("red")), Some(300));
}

#[test]
fn bold_and_italic_widen_glyphs() {
    let red = encode("red");

    let mut plain = FrameBuffer::vga();
    let mut ctx = DrawContext::new();
    ctx.text(&mut plain, 0, 0, "red", "_", "pearl", 2, "normal").unwrap();

    let mut bold = FrameBuffer::vga();
    ctx.text(&mut bold, 0, 0, "red", "_", "pearl", 2, "vet").unwrap();
    // '_' is a single full-width bottom row: 16 wide, plus one for bold
    assert_eq!(plain.count(red), 16 * 2);
    assert_eq!(bold.count(red), 17 * 2);

    let mut italic = FrameBuffer::vga();
    ctx.text(&mut italic, 0, 0, "red", "_", "pearl", 2, "cursief").unwrap();
    // bottom row is never sheared
    assert_eq!(italic.first_in_row(14, red), Some(0));

    let mut slanted = FrameBuffer::vga();
    ctx.text(&mut slanted, 0, 0, "red", "|", "pearl", 2, "italic").unwrap();
    // '|' starts in column 3; its top row shifts right by 7 * 2 / 2
    assert_eq!(slanted.first_in_row(0, red), Some(3 * 2 + 7));
}

#[test]
fn text_validation_covers_font_style_and_overflow() {
    let mut fb = FrameBuffer::vga();
    let mut ctx = DrawContext::new();

    let diag = ctx.text(&mut fb, 0, 0, "red", "", "comic", 0, "wavy").unwrap_err();
    assert_eq!(diag.get(3), Some(DrawError::EmptyText));
    assert_eq!(diag.get(4), Some(DrawError::InvalidStyle));
    assert_eq!(diag.get(5), Some(DrawError::InvalidExtent));
    assert_eq!(diag.get(6), Some(DrawError::InvalidStyle));

    let long = "x".repeat(60);
    let diag = ctx.text(&mut fb, 0, 200, "red", &long, "pearl", 2, "normal").unwrap_err();
    assert_eq!(diag.get(3), Some(DrawError::InvalidExtent));
    assert_eq!(fb.writes(), 0);
    assert!(ctx.text_slots().get(0).map_or(false, |s| s.as_str().is_empty()));
}

#[test]
fn tower_records_one_command() {
    let mut fb = FrameBuffer::vga();
    let mut ctx = DrawContext::new();

    ctx.tower(&mut fb, 160, 180, 24, "grey", "red").unwrap();
    assert_eq!(ctx.history().len(), 1);
    assert_eq!(ctx.history().record(0).map(|r| r.kind), Some(OpKind::Tower));
    assert!(fb.count(encode("grey")) > 0);
    assert!(fb.count(encode("red")) > 0);

    let diag = ctx.tower(&mut fb, 160, 180, 2, "grey", "red").unwrap_err();
    assert_eq!(diag.get(2), Some(DrawError::InvalidExtent));
}

#[test]
fn polygon_closes_back_to_its_first_point() {
    let mut fb = FrameBuffer::vga();
    let mut ctx = DrawContext::new();
    let points = [(10, 10), (30, 10), (30, 30), (20, 40), (10, 30)];

    ctx.polygon(&mut fb, points, "cyan").unwrap();
    let cyan = encode("cyan");
    for (x, y) in points {
        assert_eq!(fb.pixel(x as usize, y as usize), Some(cyan));
    }
    // closing edge (10,30) -> (10,10)
    assert_eq!(fb.pixel(10, 20), Some(cyan));
}

#[test]
fn bitmap_checks_symbol_and_fit() {
    let mut fb = FrameBuffer::vga();
    let mut ctx = DrawContext::new();

    ctx.bitmap(&mut fb, 5, 0, 0).unwrap();
    assert_eq!(fb.writes(), 256);

    let diag = ctx.bitmap(&mut fb, 99, 0, 0).unwrap_err();
    assert_eq!(diag.get(0), Some(DrawError::UnknownSymbol));
    let diag = ctx.bitmap(&mut fb, 1, 310, 0).unwrap_err();
    assert_eq!(diag.get(1), Some(DrawError::InvalidExtent));
}

#[test]
fn clear_fills_the_surface() {
    let mut fb = FrameBuffer::vga();
    let mut ctx = DrawContext::new();
    ctx.clear(&mut fb, "blauw").unwrap();
    assert_eq!(fb.count(encode("blue")), 320 * 240);
    assert!(ctx.clear(&mut fb, "plaid").is_err());
}

static CLOCK: Stepping = Stepping(AtomicU64::new(0));

struct Stepping(AtomicU64);

impl TickSource for Stepping {
    fn now_ms(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

#[test]
fn wait_spins_on_the_context_clock() {
    let mut ctx = DrawContext::new().with_clock(&CLOCK);
    let before = CLOCK.now_ms();
    ctx.wait(25).unwrap();
    assert!(CLOCK.now_ms() >= before + 25);
    assert_eq!(ctx.history().record(0).map(|r| r.kind), Some(OpKind::Wait));

    assert_eq!(ctx.wait(0).unwrap_err().get(0), Some(DrawError::InvalidExtent));
    assert_eq!(ctx.wait(65_536).unwrap_err().get(0), Some(DrawError::InvalidExtent));
}

#[test]
fn color_names_round_trip() {
    for name in color::names() {
        assert_eq!(color::decode(encode(name)), name);
    }
    assert_eq!(encode("rood"), encode("red"));
    assert!(!encode("chartreuse").is_valid());
}
