//! Render hand-off: flatten feed state into a sprite list.
//!
//! The core never renders pixels; front-ends draw exactly what this module
//! emits, in order (painter's algorithm, alpha-blended).

use glam::Vec2;

use crate::button::AddState;
use crate::catalog::OrderStatus;
use crate::constants::*;
use crate::feed::{add_button_rect, price_pill_rects, Card, CardState, FeedState};
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Ring,
    RoundedRect,
}

/// One instanced draw: `param` is the ring thickness or corner radius in
/// pixels, depending on the shape.
#[derive(Clone, Copy, Debug)]
pub struct Sprite {
    pub center: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
    pub shape: Shape,
    pub param: f32,
}

impl Sprite {
    fn rect(r: Rect, color: [f32; 4], corner: f32) -> Self {
        Self {
            center: r.center(),
            size: r.size,
            color,
            shape: Shape::RoundedRect,
            param: corner,
        }
    }

    fn circle(center: Vec2, diameter: f32, color: [f32; 4]) -> Self {
        Self {
            center,
            size: Vec2::splat(diameter),
            color,
            shape: Shape::Circle,
            param: 0.0,
        }
    }

    fn ring(center: Vec2, diameter: f32, thickness: f32, color: [f32; 4]) -> Self {
        Self {
            center,
            size: Vec2::splat(diameter),
            color,
            shape: Shape::Ring,
            param: thickness,
        }
    }
}

#[inline]
fn rgba(rgb: [f32; 3], a: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], a]
}

#[inline]
fn mix_rgb(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Build the full frame's sprite list, culled to the viewport.
pub fn build_scene(feed: &FeedState) -> Vec<Sprite> {
    let mut out = Vec::with_capacity(96);
    let viewport = feed.viewport();
    for (i, card) in feed.cards().iter().enumerate() {
        if card.frame.min.y > viewport.y || card.frame.max().y < 0.0 {
            continue;
        }
        let active = feed.active_card() == Some(i);
        push_panel(&mut out, card, active);
        match &card.state {
            CardState::Carousel(c) => push_carousel(&mut out, feed, card, c),
            CardState::Slinky(t) => push_slinky(&mut out, card, t),
            CardState::PriceCheck(g) => push_price_check(&mut out, feed, card, g),
            CardState::Looks(l) => push_looks(&mut out, feed, card, l),
            CardState::AddButton(b) => push_add_button(&mut out, card, b),
            CardState::SpatialTap(t) => push_spatial_tap(&mut out, card, t),
            CardState::Orders => push_orders(&mut out, feed, card),
        }
    }
    out
}

fn push_panel(out: &mut Vec<Sprite>, card: &Card, active: bool) {
    let color = if active {
        mix_rgb(CARD_PANEL_COLOR, [1.0, 1.0, 1.0], 0.04)
    } else {
        CARD_PANEL_COLOR
    };
    out.push(Sprite::rect(card.frame, rgba(color, 1.0), CARD_CORNER_RADIUS));
    // skeleton title bar; the web front-end overlays real titles in the DOM
    let title = Rect::new(card.frame.min + Vec2::new(24.0, 24.0), Vec2::new(140.0, 14.0));
    out.push(Sprite::rect(title, rgba(NEUTRAL_PILL_COLOR, 1.0), 7.0));
}

fn push_carousel(
    out: &mut Vec<Sprite>,
    feed: &FeedState,
    card: &Card,
    state: &crate::feed::CarouselState,
) {
    let offset = state.offset();
    let row_y = card.frame.min.y + 120.0;
    for (i, product) in feed.catalog.products.iter().take(state.count()).enumerate() {
        let shift = i as f32 - offset;
        if shift.abs() > 1.8 {
            continue;
        }
        let center = Vec2::new(card.frame.center().x + shift * TILE_SPACING, row_y);
        let focus = 1.0 - 0.5 * shift.abs().min(1.0);
        out.push(Sprite {
            center,
            size: Vec2::new(TILE_SIZE[0], TILE_SIZE[1]),
            color: rgba(product.color_rgb, 0.4 + 0.6 * focus),
            shape: Shape::RoundedRect,
            param: 14.0,
        });
    }
    let dots_y = card.frame.max().y - 26.0;
    let dots_w = state.count() as f32 * 14.0;
    for i in 0..state.count() {
        let x = card.frame.center().x - dots_w * 0.5 + 7.0 + i as f32 * 14.0;
        let on = i == state.active();
        out.push(Sprite::circle(
            Vec2::new(x, dots_y),
            if on { 7.0 } else { 5.0 },
            rgba(ACCENT_COLOR, if on { 1.0 } else { 0.35 }),
        ));
    }
}

fn push_slinky(out: &mut Vec<Sprite>, card: &Card, trail: &crate::trail::PointerTrail) {
    // tail first so the head renders on top
    let n = trail.len();
    for i in (0..n).rev() {
        let t = if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
        let color = mix_rgb(TRAIL_HEAD_COLOR, TRAIL_TAIL_COLOR, t);
        out.push(Sprite::ring(
            card.frame.from_local(trail.position_of(i)),
            TRAIL_RING_DIAMETER,
            TRAIL_RING_THICKNESS,
            rgba(color, 1.0 - 0.6 * t),
        ));
    }
}

fn push_spatial_tap(out: &mut Vec<Sprite>, card: &Card, tap: &crate::tap::TapTrail) {
    if let Some(ghost) = tap.ghost() {
        out.push(Sprite::circle(
            card.frame.from_local(ghost),
            TAP_MARKER_DIAMETER,
            rgba(ACCENT_COLOR, GHOST_OPACITY),
        ));
    }
    out.push(Sprite::ring(
        card.frame.from_local(tap.trailing_position()),
        TAP_TRAILING_DIAMETER,
        TAP_TRAILING_THICKNESS,
        rgba(TRAIL_TAIL_COLOR, 0.9),
    ));
    let scale = tap.marker_scale().max(0.0);
    if scale > 0.0 {
        out.push(Sprite::circle(
            card.frame.from_local(tap.marker_position()),
            TAP_MARKER_DIAMETER * scale,
            rgba(ACCENT_COLOR, 1.0),
        ));
    }
}

fn push_price_check(
    out: &mut Vec<Sprite>,
    feed: &FeedState,
    card: &Card,
    game: &crate::feed::PriceCheckState,
) {
    let rounds = &feed.catalog.rounds;
    if rounds.is_empty() {
        return;
    }
    let round = &rounds[game.round_index() % rounds.len()];
    if let Some(product) = feed.catalog.product(round.product_id) {
        let swatch = Rect::new(
            card.frame.min + Vec2::new(24.0, 56.0),
            Vec2::new(96.0, 96.0),
        );
        out.push(Sprite::rect(swatch, rgba(product.color_rgb, 1.0), 14.0));
    }
    let pills = price_pill_rects(card.frame);
    for (i, pill) in pills.iter().enumerate() {
        out.push(Sprite::rect(*pill, rgba(NEUTRAL_PILL_COLOR, 1.0), 22.0));
        // fading verdict highlight on the pill picked last round
        if let Some((choice, correct)) = game.last_result() {
            if choice == i && game.flash() > 0.01 {
                let color = if correct { ADDED_COLOR } else { ALERT_COLOR };
                out.push(Sprite::rect(*pill, rgba(color, 0.8 * game.flash()), 22.0));
            }
        }
    }
    // score tally dots, one per attempt up to eight
    let (score, attempts) = game.score();
    for i in 0..attempts.min(8) {
        let hit = i < score;
        out.push(Sprite::circle(
            Vec2::new(card.frame.min.x + 140.0 + i as f32 * 14.0, card.frame.min.y + 72.0),
            6.0,
            rgba(if hit { ADDED_COLOR } else { ALERT_COLOR }, 0.8),
        ));
    }
}

fn push_looks(
    out: &mut Vec<Sprite>,
    feed: &FeedState,
    card: &Card,
    state: &crate::feed::LooksState,
) {
    let looks = &feed.catalog.looks;
    if looks.is_empty() {
        return;
    }
    let look = &looks[state.active() % looks.len()];
    let row_y = card.frame.min.y + 120.0;
    for (i, product) in feed.catalog.products_for_look(look).iter().enumerate() {
        let swatch = Rect::new(
            Vec2::new(card.frame.min.x + 24.0 + i as f32 * 68.0, row_y - 28.0),
            Vec2::splat(56.0),
        );
        out.push(Sprite::rect(swatch, rgba(product.color_rgb, 1.0), 12.0));
    }
    // page dots, one per look
    for i in 0..looks.len() {
        let on = i == state.active();
        out.push(Sprite::circle(
            Vec2::new(card.frame.min.x + 28.0 + i as f32 * 14.0, card.frame.max().y - 24.0),
            if on { 7.0 } else { 5.0 },
            rgba(ACCENT_COLOR, if on { 1.0 } else { 0.35 }),
        ));
    }
}

fn push_add_button(out: &mut Vec<Sprite>, card: &Card, button: &crate::button::AddButton) {
    let rect = add_button_rect(card.frame);
    let scale = button.pop_scale().max(0.1);
    let color = match button.state() {
        AddState::Idle => ACCENT_COLOR,
        AddState::Added => ADDED_COLOR,
    };
    out.push(Sprite {
        center: rect.center(),
        size: rect.size * scale,
        color: rgba(color, 1.0),
        shape: Shape::RoundedRect,
        param: rect.size.y * 0.5 * scale,
    });
}

fn push_orders(out: &mut Vec<Sprite>, feed: &FeedState, card: &Card) {
    for (i, order) in feed.catalog.orders.iter().take(4).enumerate() {
        let row_y = card.frame.min.y + 64.0 + i as f32 * 46.0;
        if let Some(product) = feed.catalog.product(order.product_id) {
            let swatch = Rect::new(
                Vec2::new(card.frame.min.x + 24.0, row_y - 20.0),
                Vec2::splat(40.0),
            );
            out.push(Sprite::rect(swatch, rgba(product.color_rgb, 1.0), 10.0));
        }
        let bar = Rect::new(
            Vec2::new(card.frame.min.x + 80.0, row_y - 6.0),
            Vec2::new(130.0, 12.0),
        );
        out.push(Sprite::rect(bar, rgba(NEUTRAL_PILL_COLOR, 1.0), 6.0));
        let chip_color = match order.status {
            OrderStatus::Processing => [0.90, 0.70, 0.30],
            OrderStatus::Shipped => ACCENT_COLOR,
            OrderStatus::Delivered => ADDED_COLOR,
        };
        let chip = Rect::new(
            Vec2::new(card.frame.max().x - 24.0 - 64.0, row_y - 11.0),
            Vec2::new(64.0, 22.0),
        );
        out.push(Sprite::rect(chip, rgba(chip_color, 0.9), 11.0));
    }
}
