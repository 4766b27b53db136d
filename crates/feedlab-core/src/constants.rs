use glam::Vec2;

// Layout and interaction tuning constants shared by both front-ends.

// Feed layout
pub const CARD_WIDTH: f32 = 375.0;
pub const CARD_GUTTER: f32 = 24.0;
pub const CARD_CORNER_RADIUS: f32 = 20.0;

// Interactive demo cards use a tall canvas; the rest point below is its center
pub const INTERACTIVE_CARD_HEIGHT: f32 = 644.0;

// Where followers sit before any input arrives (card-local coordinates)
pub const REST_POINT: [f32; 2] = [188.0, 322.0];

// Slinky trail card
pub const TRAIL_RING_COUNT: usize = 30;
pub const TRAIL_RESPONSE_BASE_SECS: f32 = 0.08; // head follower
pub const TRAIL_RESPONSE_STEP_SECS: f32 = 0.02; // added per index
pub const TRAIL_DAMPING_RATIO: f32 = 0.85;
pub const TRAIL_RING_DIAMETER: f32 = 44.0;
pub const TRAIL_RING_THICKNESS: f32 = 3.5;

// Spatial tap card: hand-tuned response/damping pairs
pub const TAP_MARKER_RESPONSE_SECS: f32 = 0.30;
pub const TAP_MARKER_DAMPING_RATIO: f32 = 0.80;
pub const TAP_POP_RESPONSE_SECS: f32 = 0.45; // marker scale-in
pub const TAP_POP_DAMPING_RATIO: f32 = 0.60;
pub const TAP_TRAILING_RESPONSE_SECS: f32 = 0.90;
pub const TAP_TRAILING_DAMPING_RATIO: f32 = 1.0;
pub const TAP_MARKER_DIAMETER: f32 = 52.0;
pub const TAP_TRAILING_DIAMETER: f32 = 68.0;
pub const TAP_TRAILING_THICKNESS: f32 = 3.0;
pub const GHOST_OPACITY: f32 = 0.35; // ghosts freeze at this, no fade-out

// Stateful add-button card
pub const ADD_REVERT_SECS: f32 = 2.0; // the only timeout in the system
pub const ADD_POP_RESPONSE_SECS: f32 = 0.35;
pub const ADD_POP_DAMPING_RATIO: f32 = 0.55;

// Product carousel
pub const CAROUSEL_SNAP_RESPONSE_SECS: f32 = 0.45;
pub const TILE_SIZE: [f32; 2] = [120.0, 150.0];
pub const TILE_SPACING: f32 = 132.0;

// Price check game
pub const PRICE_FLASH_FADE_SECS: f32 = 0.8;

// Palette (linear RGB)
pub const FEED_CLEAR_COLOR: [f32; 3] = [0.035, 0.04, 0.06];
pub const CARD_PANEL_COLOR: [f32; 3] = [0.10, 0.11, 0.15];
pub const ACCENT_COLOR: [f32; 3] = [0.36, 0.42, 0.95];
pub const ADDED_COLOR: [f32; 3] = [0.22, 0.78, 0.45];
pub const ALERT_COLOR: [f32; 3] = [0.92, 0.30, 0.30];
pub const TRAIL_HEAD_COLOR: [f32; 3] = [0.36, 0.42, 0.95];
pub const TRAIL_TAIL_COLOR: [f32; 3] = [0.93, 0.35, 0.62];
pub const NEUTRAL_PILL_COLOR: [f32; 3] = [0.20, 0.22, 0.28];

#[inline]
pub fn rest_point() -> Vec2 {
    Vec2::new(REST_POINT[0], REST_POINT[1])
}
