//! Feed composition: an ordered card registry, layout, and pointer routing.
//!
//! The feed is a static list of tagged cards laid out top to bottom. Each
//! card owns its interaction state exclusively; routing converts screen
//! coordinates to card-local space and clamps them to the card's bounds
//! before any animator sees them.

use glam::Vec2;

use crate::button::AddButton;
use crate::catalog::{check_guess, Catalog};
use crate::constants::{
    CARD_GUTTER, CARD_WIDTH, CAROUSEL_SNAP_RESPONSE_SECS, INTERACTIVE_CARD_HEIGHT,
    PRICE_FLASH_FADE_SECS, TRAIL_DAMPING_RATIO, TRAIL_RESPONSE_BASE_SECS,
    TRAIL_RESPONSE_STEP_SECS, TRAIL_RING_COUNT,
};
use crate::constants::rest_point;
use crate::geometry::Rect;
use crate::spring::{SpringSpec, SpringValue};
use crate::tap::TapTrail;
use crate::trail::PointerTrail;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKind {
    Carousel,
    Slinky,
    PriceCheck,
    Looks,
    AddButton,
    SpatialTap,
    Orders,
}

#[derive(Clone, Copy, Debug)]
pub struct CardSpec {
    pub kind: CardKind,
    pub title: &'static str,
}

/// The feed registry: ordered, static, iterated top to bottom.
pub fn feed_cards() -> Vec<CardSpec> {
    vec![
        CardSpec { kind: CardKind::Carousel, title: "New Arrivals" },
        CardSpec { kind: CardKind::Slinky, title: "Slinky" },
        CardSpec { kind: CardKind::PriceCheck, title: "Price Check" },
        CardSpec { kind: CardKind::Looks, title: "Shop the Look" },
        CardSpec { kind: CardKind::AddButton, title: "Quick Add" },
        CardSpec { kind: CardKind::SpatialTap, title: "Spatial Tap" },
        CardSpec { kind: CardKind::Orders, title: "Recent Orders" },
    ]
}

fn card_height(kind: CardKind) -> f32 {
    match kind {
        CardKind::Carousel => 240.0,
        CardKind::Slinky | CardKind::SpatialTap => INTERACTIVE_CARD_HEIGHT,
        CardKind::PriceCheck => 280.0,
        CardKind::Looks => 220.0,
        CardKind::AddButton => 160.0,
        CardKind::Orders => 260.0,
    }
}

pub struct CarouselState {
    active: usize,
    count: usize,
    offset: SpringValue,
}

impl CarouselState {
    pub fn new(count: usize) -> Self {
        Self {
            active: 0,
            count: count.max(1),
            offset: SpringValue::new(SpringSpec::smooth(CAROUSEL_SNAP_RESPONSE_SECS), 0.0),
        }
    }

    pub fn select(&mut self, index: usize) {
        self.active = index.min(self.count - 1);
        self.offset.retarget(self.active as f32);
    }

    pub fn next(&mut self) {
        self.select((self.active + 1).min(self.count - 1));
    }

    pub fn prev(&mut self) {
        self.select(self.active.saturating_sub(1));
    }

    #[inline]
    pub fn active(&self) -> usize {
        self.active
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Animated offset in tile units; rests at the active index.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset.value()
    }

    pub fn advance(&mut self, dt_secs: f32) {
        self.offset.advance(dt_secs);
    }
}

pub struct PriceCheckState {
    round: usize,
    score: u32,
    attempts: u32,
    last_choice: Option<usize>,
    last_correct: bool,
    flash: SpringValue,
}

impl PriceCheckState {
    pub fn new() -> Self {
        Self {
            round: 0,
            score: 0,
            attempts: 0,
            last_choice: None,
            last_correct: false,
            flash: SpringValue::new(SpringSpec::smooth(PRICE_FLASH_FADE_SECS), 0.0),
        }
    }

    /// Apply a guess for the current round and move on to the next one.
    pub fn guess(&mut self, catalog: &Catalog, choice: usize) {
        if catalog.rounds.is_empty() {
            return;
        }
        let round = &catalog.rounds[self.round % catalog.rounds.len()];
        let correct = check_guess(round, choice);
        self.attempts += 1;
        if correct {
            self.score += 1;
        }
        self.last_choice = Some(choice);
        self.last_correct = correct;
        self.flash.snap(1.0);
        self.flash.retarget(0.0);
        self.round += 1;
    }

    #[inline]
    pub fn round_index(&self) -> usize {
        self.round
    }

    #[inline]
    pub fn score(&self) -> (u32, u32) {
        (self.score, self.attempts)
    }

    #[inline]
    pub fn last_result(&self) -> Option<(usize, bool)> {
        self.last_choice.map(|c| (c, self.last_correct))
    }

    /// Fading highlight on the last-chosen pill, 1.0 right after a guess.
    #[inline]
    pub fn flash(&self) -> f32 {
        self.flash.value()
    }

    pub fn advance(&mut self, dt_secs: f32) {
        self.flash.advance(dt_secs);
    }
}

impl Default for PriceCheckState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LooksState {
    active: usize,
    count: usize,
}

impl LooksState {
    pub fn new(count: usize) -> Self {
        Self {
            active: 0,
            count: count.max(1),
        }
    }

    pub fn cycle(&mut self) {
        self.active = (self.active + 1) % self.count;
    }

    #[inline]
    pub fn active(&self) -> usize {
        self.active
    }
}

pub enum CardState {
    Carousel(CarouselState),
    Slinky(PointerTrail),
    PriceCheck(PriceCheckState),
    Looks(LooksState),
    AddButton(AddButton),
    SpatialTap(TapTrail),
    Orders,
}

pub struct Card {
    pub kind: CardKind,
    pub title: &'static str,
    pub state: CardState,
    pub frame: Rect,
}

pub struct FeedState {
    pub catalog: Catalog,
    cards: Vec<Card>,
    scroll: f32,
    content_height: f32,
    viewport: Vec2,
    pressed: Option<usize>,
}

impl FeedState {
    pub fn new(viewport: Vec2, seed: u64) -> Self {
        let catalog = Catalog::demo(seed);
        let cards = feed_cards()
            .into_iter()
            .map(|spec| {
                let state = match spec.kind {
                    CardKind::Carousel => {
                        CardState::Carousel(CarouselState::new(catalog.products.len().min(5)))
                    }
                    CardKind::Slinky => CardState::Slinky(PointerTrail::new(
                        TRAIL_RING_COUNT,
                        rest_point(),
                        TRAIL_RESPONSE_BASE_SECS,
                        TRAIL_RESPONSE_STEP_SECS,
                        TRAIL_DAMPING_RATIO,
                    )),
                    CardKind::PriceCheck => CardState::PriceCheck(PriceCheckState::new()),
                    CardKind::Looks => CardState::Looks(LooksState::new(catalog.looks.len())),
                    CardKind::AddButton => CardState::AddButton(AddButton::new()),
                    CardKind::SpatialTap => CardState::SpatialTap(TapTrail::new(rest_point())),
                    CardKind::Orders => CardState::Orders,
                };
                Card {
                    kind: spec.kind,
                    title: spec.title,
                    state,
                    frame: Rect::new(Vec2::ZERO, Vec2::ZERO),
                }
            })
            .collect();
        let mut feed = Self {
            catalog,
            cards,
            scroll: 0.0,
            content_height: 0.0,
            viewport,
            pressed: None,
        };
        feed.layout();
        feed
    }

    /// Recompute card frames in screen space from the scroll offset.
    fn layout(&mut self) {
        let x = ((self.viewport.x - CARD_WIDTH) * 0.5).max(CARD_GUTTER);
        let mut y = CARD_GUTTER;
        for card in &mut self.cards {
            let h = card_height(card.kind);
            card.frame = Rect::new(
                Vec2::new(x, y - self.scroll),
                Vec2::new(CARD_WIDTH, h),
            );
            y += h + CARD_GUTTER;
        }
        self.content_height = y;
    }

    pub fn resized(&mut self, viewport: Vec2) {
        if viewport != self.viewport && viewport.x > 0.0 && viewport.y > 0.0 {
            self.viewport = viewport;
            self.scroll = self.scroll.min(self.max_scroll());
            self.layout();
        }
    }

    fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport.y).max(0.0)
    }

    pub fn scroll_by(&mut self, dy: f32) {
        let next = (self.scroll + dy).clamp(0.0, self.max_scroll());
        if next != self.scroll {
            self.scroll = next;
            self.layout();
        }
    }

    #[inline]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    #[inline]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Index of the card currently holding the pointer, if any.
    #[inline]
    pub fn active_card(&self) -> Option<usize> {
        self.pressed
    }

    fn card_at(&self, p: Vec2) -> Option<usize> {
        self.cards.iter().position(|c| c.frame.contains(p))
    }

    pub fn pointer_down(&mut self, position: Vec2) {
        self.pressed = self.card_at(position);
        if let Some(i) = self.pressed {
            log::info!("[down] card {} ({})", i, self.cards[i].title);
            // The slinky card tracks from the first touch, not the first move
            let local = self.local_clamped(i, position);
            if let CardState::Slinky(trail) = &mut self.cards[i].state {
                trail.pointer_moved(local);
            }
        }
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        if let Some(i) = self.pressed {
            let local = self.local_clamped(i, position);
            if let CardState::Slinky(trail) = &mut self.cards[i].state {
                trail.pointer_moved(local);
            }
        }
    }

    pub fn pointer_up(&mut self, position: Vec2) {
        let Some(i) = self.pressed.take() else {
            return;
        };
        let frame = self.cards[i].frame;
        let local = self.local_clamped(i, position);
        match &mut self.cards[i].state {
            CardState::SpatialTap(tap) => {
                tap.tap_ended(local);
                log::info!("[tap] spatial marker -> ({:.0},{:.0})", local.x, local.y);
            }
            CardState::AddButton(button) => {
                if add_button_rect(frame).contains(position) {
                    if button.press() {
                        log::info!("[tap] add button -> added");
                    } else {
                        log::info!("[tap] add button ignored; already added");
                    }
                }
            }
            CardState::Carousel(carousel) => {
                if local.x < frame.size.x * 0.5 {
                    carousel.prev();
                } else {
                    carousel.next();
                }
                log::info!("[tap] carousel -> tile {}", carousel.active());
            }
            CardState::PriceCheck(game) => {
                if let Some(choice) = price_pill_hit(frame, position) {
                    game.guess(&self.catalog, choice);
                    let (score, attempts) = game.score();
                    log::info!("[tap] price check {} / {}", score, attempts);
                }
            }
            CardState::Looks(looks) => {
                looks.cycle();
                log::info!("[tap] look {}", looks.active());
            }
            CardState::Slinky(_) | CardState::Orders => {}
        }
    }

    pub fn advance(&mut self, dt_secs: f32) {
        for card in &mut self.cards {
            match &mut card.state {
                CardState::Carousel(c) => c.advance(dt_secs),
                CardState::Slinky(t) => t.advance(dt_secs),
                CardState::PriceCheck(g) => g.advance(dt_secs),
                CardState::AddButton(b) => b.advance(dt_secs),
                CardState::SpatialTap(t) => t.advance(dt_secs),
                CardState::Looks(_) | CardState::Orders => {}
            }
        }
    }

    /// Card-local coordinates, clamped to the card's bounds. The animators
    /// never clamp; bounding gesture coordinates is this surface's job.
    fn local_clamped(&self, index: usize, position: Vec2) -> Vec2 {
        let frame = self.cards[index].frame;
        frame.to_local(frame.clamp_point(position))
    }
}

/// The pressable pill within the add-button card, in screen space.
pub fn add_button_rect(frame: Rect) -> Rect {
    let size = Vec2::new(200.0, 56.0);
    Rect::new(frame.center() - size * 0.5 + Vec2::new(0.0, 14.0), size)
}

/// Screen-space rects of the three price pills within a price-check card.
pub fn price_pill_rects(frame: Rect) -> [Rect; 3] {
    let size = Vec2::new(104.0, 44.0);
    let y = frame.max().y - 68.0;
    let span = frame.size.x - 2.0 * 24.0;
    let step = (span - size.x) / 2.0;
    [0, 1, 2].map(|i| {
        Rect::new(
            Vec2::new(frame.min.x + 24.0 + i as f32 * step, y),
            size,
        )
    })
}

fn price_pill_hit(frame: Rect, position: Vec2) -> Option<usize> {
    price_pill_rects(frame)
        .iter()
        .position(|r| r.contains(position))
}
