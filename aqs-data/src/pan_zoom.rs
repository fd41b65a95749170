//! Pan/zoom view transform for the map widget.
//!
//! Content is drawn at `translate(tx, ty) scale(s)` with the origin at the
//! top-left corner. Translation on each axis stays within
//! `[min(0, viewport - content * s) - slack, slack]`, so with zero slack the
//! content always covers the viewport once it is at least as large.

// ---------------------------------------------------------------------------
// Constants and value types
// ---------------------------------------------------------------------------

pub const MIN_SCALE: f64 = 1.0;
pub const MAX_SCALE: f64 = 5.0;
/// Scale factor applied per wheel notch or zoom button press.
pub const ZOOM_STEP: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        ViewTransform {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    Idle,
    /// Pointer position minus translation at pointer-down.
    Panning { anchor: Point },
}

// ---------------------------------------------------------------------------
// Pure transform math
// ---------------------------------------------------------------------------

/// Translation that keeps the content point under `cursor` fixed when the
/// scale changes from `old_scale` to `new_scale`.
pub fn zoom_translate_at(cursor: Point, translate: Point, old_scale: f64, new_scale: f64) -> Point {
    let content_x = (cursor.x - translate.x) / old_scale;
    let content_y = (cursor.y - translate.y) / old_scale;
    Point::new(
        cursor.x - content_x * new_scale,
        cursor.y - content_y * new_scale,
    )
}

/// Clamp one axis of the translation to the content bounds.
pub fn clamp_axis(translate: f64, viewport: f64, content: f64, scale: f64, slack: f64) -> f64 {
    let min = (viewport - content * scale).min(0.0) - slack;
    translate.clamp(min, slack)
}

pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PanZoom {
    transform: ViewTransform,
    interaction: Interaction,
    viewport: Size,
    content: Size,
    slack: f64,
}

impl PanZoom {
    pub fn new(viewport: Size, content: Size) -> Self {
        PanZoom {
            transform: ViewTransform::default(),
            interaction: Interaction::Idle,
            viewport,
            content,
            slack: 0.0,
        }
    }

    /// Allow panning `slack` pixels past each content edge.
    pub fn with_slack(mut self, slack: f64) -> Self {
        self.slack = slack.max(0.0);
        self.clamp();
        self
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.interaction, Interaction::Panning { .. })
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Track a new viewport size, keeping the current transform valid.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.clamp();
    }

    /// Viewport and content both take `size`, as when the content is drawn
    /// at 100% of its container.
    pub fn resize_fitted(&mut self, size: Size) {
        self.content = size;
        self.set_viewport(size);
    }

    fn translate(&self) -> Point {
        Point::new(self.transform.translate_x, self.transform.translate_y)
    }

    fn set_translate(&mut self, translate: Point) {
        self.transform.translate_x = translate.x;
        self.transform.translate_y = translate.y;
        self.clamp();
    }

    fn clamp(&mut self) {
        let t = &mut self.transform;
        t.scale = clamp_scale(t.scale);
        t.translate_x = clamp_axis(
            t.translate_x,
            self.viewport.width,
            self.content.width,
            t.scale,
            self.slack,
        );
        t.translate_y = clamp_axis(
            t.translate_y,
            self.viewport.height,
            self.content.height,
            t.scale,
            self.slack,
        );
    }

    /// Idle -> Panning.
    pub fn pointer_down(&mut self, pointer: Point) {
        let t = self.translate();
        self.interaction = Interaction::Panning {
            anchor: Point::new(pointer.x - t.x, pointer.y - t.y),
        };
    }

    /// Pan while a pointer is held. Returns whether the transform changed.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Interaction::Panning { anchor } = self.interaction else {
            return false;
        };
        let before = self.transform;
        self.set_translate(Point::new(pointer.x - anchor.x, pointer.y - anchor.y));
        self.transform != before
    }

    /// Panning -> Idle.
    pub fn pointer_up(&mut self) {
        self.interaction = Interaction::Idle;
    }

    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Multiply the scale by `factor`, keeping the point under `cursor` fixed.
    /// Returns whether the scale changed.
    pub fn zoom_at(&mut self, cursor: Point, factor: f64) -> bool {
        let old_scale = self.transform.scale;
        let new_scale = clamp_scale(old_scale * factor);
        if (new_scale - old_scale).abs() < 1e-9 {
            return false;
        }
        let translate = zoom_translate_at(cursor, self.translate(), old_scale, new_scale);
        self.transform.scale = new_scale;
        self.set_translate(translate);
        true
    }

    /// Wheel handler: negative `delta_y` (scroll up) zooms in.
    pub fn wheel(&mut self, cursor: Point, delta_y: f64) -> bool {
        if delta_y == 0.0 {
            return false;
        }
        let factor = if delta_y < 0.0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
        self.zoom_at(cursor, factor)
    }

    pub fn zoom_in(&mut self) -> bool {
        self.zoom_at(self.viewport.center(), ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.zoom_at(self.viewport.center(), 1.0 / ZOOM_STEP)
    }

    pub fn reset(&mut self) {
        self.transform = ViewTransform::default();
        self.interaction = Interaction::Idle;
    }

    /// Content coordinates of a viewport point.
    pub fn screen_to_content(&self, point: Point) -> Point {
        let t = self.transform;
        Point::new(
            (point.x - t.translate_x) / t.scale,
            (point.y - t.translate_y) / t.scale,
        )
    }

    /// CSS `transform` value; pair with `transform-origin: 0 0`.
    pub fn css_transform(&self) -> String {
        let t = self.transform;
        format!(
            "translate({:.2}px, {:.2}px) scale({:.4})",
            t.translate_x, t.translate_y, t.scale
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeded_rng;
    use rand::Rng;

    fn map() -> PanZoom {
        PanZoom::new(Size::new(1000.0, 600.0), Size::new(1000.0, 600.0))
    }

    fn assert_covers(pz: &PanZoom) {
        let t = pz.transform();
        let content_w = 1000.0 * t.scale;
        let content_h = 600.0 * t.scale;
        assert!(t.translate_x <= 1e-9 && t.translate_y <= 1e-9);
        assert!(t.translate_x + content_w >= 1000.0 - 1e-9);
        assert!(t.translate_y + content_h >= 600.0 - 1e-9);
    }

    #[test]
    fn test_scale_stays_clamped_under_wheel_storm() {
        let mut pz = map();
        let mut rng = seeded_rng(11);
        for _ in 0..2_000 {
            let cursor = Point::new(rng.random_range(0.0..1000.0), rng.random_range(0.0..600.0));
            let delta = rng.random_range(-100.0..100.0);
            pz.wheel(cursor, delta);
            let s = pz.transform().scale;
            assert!((MIN_SCALE..=MAX_SCALE).contains(&s));
            assert_covers(&pz);
        }
    }

    #[test]
    fn test_zoom_keeps_point_under_cursor() {
        let mut pz = map();
        let mut rng = seeded_rng(4);
        for _ in 0..200 {
            let cursor = Point::new(rng.random_range(0.0..1000.0), rng.random_range(0.0..600.0));
            let before = pz.screen_to_content(cursor);
            if pz.wheel(cursor, -1.0) {
                let after = pz.screen_to_content(cursor);
                assert!((before.x - after.x).abs() < 1e-6);
                assert!((before.y - after.y).abs() < 1e-6);
            }
        }
        assert!((pz.transform().scale - MAX_SCALE).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_translate_at_matches_formula() {
        let t = zoom_translate_at(Point::new(300.0, 200.0), Point::new(0.0, 0.0), 1.0, 2.0);
        assert!((t.x + 300.0).abs() < 1e-9);
        assert!((t.y + 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_out_at_min_is_noop() {
        let mut pz = map();
        assert!(!pz.wheel(Point::new(10.0, 10.0), 50.0));
        assert_eq!(pz.transform(), ViewTransform::default());
        assert!(!pz.wheel(Point::new(10.0, 10.0), 0.0));
    }

    #[test]
    fn test_pan_state_machine() {
        let mut pz = map();
        pz.zoom_at(Point::new(500.0, 300.0), 2.0);
        let start = pz.transform();
        assert!(!pz.pointer_move(Point::new(0.0, 0.0)), "idle moves are ignored");

        pz.pointer_down(Point::new(400.0, 300.0));
        assert!(pz.is_panning());
        pz.pointer_move(Point::new(450.0, 320.0));
        let t = pz.transform();
        assert!((t.translate_x - (start.translate_x + 50.0)).abs() < 1e-9);
        assert!((t.translate_y - (start.translate_y + 20.0)).abs() < 1e-9);

        pz.pointer_leave();
        assert_eq!(pz.interaction(), Interaction::Idle);
        assert!(!pz.pointer_move(Point::new(0.0, 0.0)));
    }

    #[test]
    fn test_pan_clamps_to_edges() {
        let mut pz = map();
        pz.zoom_at(Point::new(0.0, 0.0), 2.0);
        pz.pointer_down(Point::new(500.0, 300.0));
        pz.pointer_move(Point::new(5_000.0, 5_000.0));
        let t = pz.transform();
        assert_eq!((t.translate_x, t.translate_y), (0.0, 0.0));
        pz.pointer_move(Point::new(-5_000.0, -5_000.0));
        let t = pz.transform();
        assert!((t.translate_x + 1000.0).abs() < 1e-9);
        assert!((t.translate_y + 600.0).abs() < 1e-9);
        assert_covers(&pz);
    }

    #[test]
    fn test_pan_at_unit_scale_is_pinned() {
        let mut pz = map();
        pz.pointer_down(Point::new(100.0, 100.0));
        assert!(!pz.pointer_move(Point::new(300.0, 250.0)));
        assert_eq!(pz.transform(), ViewTransform::default());
    }

    #[test]
    fn test_slack_allows_overscroll() {
        let mut pz = map().with_slack(40.0);
        pz.pointer_down(Point::new(0.0, 0.0));
        pz.pointer_move(Point::new(100.0, 100.0));
        let t = pz.transform();
        assert_eq!((t.translate_x, t.translate_y), (40.0, 40.0));
    }

    #[test]
    fn test_reset_and_buttons() {
        let mut pz = map();
        assert!(pz.zoom_in());
        assert!(pz.transform().scale > 1.0);
        assert!(pz.zoom_out());
        pz.zoom_in();
        pz.pointer_down(Point::new(1.0, 1.0));
        pz.reset();
        assert_eq!(pz.transform(), ViewTransform::default());
        assert!(!pz.is_panning());
    }

    #[test]
    fn test_shrinking_viewport_reclamps() {
        let mut pz = map();
        pz.zoom_at(Point::new(1000.0, 600.0), 3.0);
        pz.resize_fitted(Size::new(500.0, 300.0));
        let t = pz.transform();
        assert!(t.translate_x >= 500.0 - 500.0 * t.scale - 1e-9);
        assert!(t.translate_y >= 300.0 - 300.0 * t.scale - 1e-9);
    }

    #[test]
    fn test_css_transform_format() {
        let pz = map();
        assert_eq!(pz.css_transform(), "translate(0.00px, 0.00px) scale(1.0000)");
    }
}
