// Host-side tests for feed composition, routing and the stateful button.

use feedlab_core::{
    add_button_rect, build_scene, feed_cards, price_pill_rects, AddButton, CardKind, CardState,
    FeedState, Shape,
};
use glam::Vec2;

fn make_feed() -> FeedState {
    FeedState::new(Vec2::new(430.0, 900.0), 42)
}

fn card_frame(feed: &FeedState, kind: CardKind) -> feedlab_core::Rect {
    feed.cards()
        .iter()
        .find(|c| c.kind == kind)
        .expect("card kind present")
        .frame
}

#[test]
fn registry_order_is_stable() {
    let kinds: Vec<CardKind> = feed_cards().iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CardKind::Carousel,
            CardKind::Slinky,
            CardKind::PriceCheck,
            CardKind::Looks,
            CardKind::AddButton,
            CardKind::SpatialTap,
            CardKind::Orders,
        ]
    );
}

#[test]
fn cards_are_stacked_without_overlap() {
    let feed = make_feed();
    let mut prev_bottom = 0.0_f32;
    for card in feed.cards() {
        assert!(card.frame.min.y >= prev_bottom);
        assert!(card.frame.size.x > 0.0 && card.frame.size.y > 0.0);
        prev_bottom = card.frame.max().y;
    }
}

#[test]
fn scroll_is_clamped_to_content() {
    let mut feed = make_feed();
    feed.scroll_by(-500.0);
    assert_eq!(feed.scroll(), 0.0);
    feed.scroll_by(1.0e9);
    let max = feed.scroll();
    assert!(max > 0.0);
    feed.scroll_by(100.0);
    assert_eq!(feed.scroll(), max);
}

#[test]
fn drag_on_the_slinky_card_is_clamped_to_its_bounds() {
    // The input surface clamps; the animator itself never does.
    let mut feed = make_feed();
    let frame = card_frame(&feed, CardKind::Slinky);
    feed.pointer_down(frame.center());
    feed.pointer_moved(Vec2::new(1.0e4, frame.min.y - 500.0));
    let card = feed
        .cards()
        .iter()
        .find(|c| c.kind == CardKind::Slinky)
        .unwrap();
    let CardState::Slinky(trail) = &card.state else {
        panic!("slinky card state");
    };
    let target = trail.target();
    assert_eq!(target, Vec2::new(frame.size.x, 0.0));
}

#[test]
fn routing_to_one_card_never_touches_another() {
    let mut feed = make_feed();
    let slinky = card_frame(&feed, CardKind::Slinky);
    feed.pointer_down(slinky.center());
    feed.pointer_moved(slinky.center() + Vec2::new(30.0, 30.0));
    feed.pointer_up(slinky.center() + Vec2::new(30.0, 30.0));
    let tap_card = feed
        .cards()
        .iter()
        .find(|c| c.kind == CardKind::SpatialTap)
        .unwrap();
    let CardState::SpatialTap(tap) = &tap_card.state else {
        panic!("spatial tap card state");
    };
    assert_eq!(tap.ghost(), None);
    assert_eq!(tap.marker_target(), Vec2::new(188.0, 322.0));
}

#[test]
fn tap_card_receives_card_local_coordinates() {
    let mut feed = make_feed();
    let frame = card_frame(&feed, CardKind::SpatialTap);
    let press = frame.min + Vec2::new(50.0, 60.0);
    feed.pointer_down(press);
    feed.pointer_up(press);
    let card = feed
        .cards()
        .iter()
        .find(|c| c.kind == CardKind::SpatialTap)
        .unwrap();
    let CardState::SpatialTap(tap) = &card.state else {
        panic!("spatial tap card state");
    };
    assert_eq!(tap.marker_target(), Vec2::new(50.0, 60.0));
    assert_eq!(tap.ghost(), Some(Vec2::new(188.0, 322.0)));
}

#[test]
fn add_button_auto_reverts_after_two_seconds() {
    let mut button = AddButton::new();
    assert!(!button.is_added());
    assert!(button.press());
    assert!(button.is_added());
    button.advance(1.9);
    assert!(button.is_added(), "reverted early");
    button.advance(0.2);
    assert!(!button.is_added(), "did not revert after 2s");
}

#[test]
fn pressing_while_added_neither_reenters_nor_extends_the_delay() {
    let mut button = AddButton::new();
    assert!(button.press());
    button.advance(1.0);
    // guarded: the second press is ignored and the delay keeps running
    assert!(!button.press());
    button.advance(1.1);
    assert!(!button.is_added(), "second press extended the delay");
    // once idle again the button accepts a fresh press
    assert!(button.press());
}

#[test]
fn add_button_press_routes_through_the_feed() {
    let mut feed = make_feed();
    // bring the button card into view so its pill is hittable
    feed.scroll_by(1.0e9);
    feed.scroll_by(-420.0);
    let frame = card_frame(&feed, CardKind::AddButton);
    let pill = add_button_rect(frame);
    feed.pointer_down(pill.center());
    feed.pointer_up(pill.center());
    let card = feed
        .cards()
        .iter()
        .find(|c| c.kind == CardKind::AddButton)
        .unwrap();
    let CardState::AddButton(button) = &card.state else {
        panic!("add button card state");
    };
    assert!(button.is_added());
}

#[test]
fn price_pills_sit_inside_their_card() {
    let feed = make_feed();
    let frame = card_frame(&feed, CardKind::PriceCheck);
    for pill in price_pill_rects(frame) {
        assert!(frame.contains(pill.min));
        assert!(frame.contains(pill.max()));
    }
}

#[test]
fn scene_starts_with_the_first_visible_card_panel() {
    let feed = make_feed();
    let sprites = build_scene(&feed);
    assert!(!sprites.is_empty());
    let first = &sprites[0];
    assert_eq!(first.shape, Shape::RoundedRect);
    let frame = feed.cards()[0].frame;
    assert_eq!(first.center, frame.center());
    assert_eq!(first.size, frame.size);
}

#[test]
fn advancing_the_feed_settles_a_dragged_trail() {
    let mut feed = make_feed();
    let frame = card_frame(&feed, CardKind::Slinky);
    let goal = frame.min + Vec2::new(80.0, 90.0);
    feed.pointer_down(goal);
    feed.pointer_up(goal);
    for _ in 0..900 {
        feed.advance(1.0 / 60.0);
    }
    let card = feed
        .cards()
        .iter()
        .find(|c| c.kind == CardKind::Slinky)
        .unwrap();
    let CardState::Slinky(trail) = &card.state else {
        panic!("slinky card state");
    };
    for pos in trail.positions() {
        assert!((pos - Vec2::new(80.0, 90.0)).length() < 1.0);
    }
}
