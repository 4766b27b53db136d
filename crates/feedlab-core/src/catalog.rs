//! Static demo data: products, orders, looks and price-check rounds.
//!
//! All records are immutable values. The only derivation is the price-check
//! decoy shuffle, which runs on a seeded RNG so fixtures stay deterministic
//! for a given seed.

use fnv::FnvHashMap;
use rand::prelude::*;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price_cents: u32,
    pub color_rgb: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    Processing,
    Shipped,
    Delivered,
}

#[derive(Clone, Debug)]
pub struct Order {
    pub product_id: u32,
    pub status: OrderStatus,
}

#[derive(Clone, Debug)]
pub struct Look {
    pub title: &'static str,
    pub product_ids: &'static [u32],
}

/// One round of the price game: a product and three price choices, exactly
/// one of which is the real price.
#[derive(Clone, Debug)]
pub struct PriceCheckRound {
    pub product_id: u32,
    pub choices_cents: [u32; 3],
    pub answer: usize,
}

pub fn demo_products() -> Vec<Product> {
    vec![
        Product { id: 1, name: "Court Sneaker", price_cents: 8900, color_rgb: [0.88, 0.86, 0.82] },
        Product { id: 2, name: "Canvas Tote", price_cents: 3400, color_rgb: [0.80, 0.62, 0.38] },
        Product { id: 3, name: "Round Sunglasses", price_cents: 12900, color_rgb: [0.22, 0.20, 0.24] },
        Product { id: 4, name: "Boxy Hoodie", price_cents: 6500, color_rgb: [0.42, 0.48, 0.72] },
        Product { id: 5, name: "Field Watch", price_cents: 19900, color_rgb: [0.35, 0.55, 0.45] },
        Product { id: 6, name: "Wool Cap", price_cents: 2800, color_rgb: [0.68, 0.30, 0.30] },
        Product { id: 7, name: "Knit Scarf", price_cents: 4200, color_rgb: [0.85, 0.70, 0.30] },
        Product { id: 8, name: "Chelsea Boot", price_cents: 15500, color_rgb: [0.30, 0.24, 0.20] },
    ]
}

pub fn demo_orders() -> Vec<Order> {
    vec![
        Order { product_id: 5, status: OrderStatus::Delivered },
        Order { product_id: 2, status: OrderStatus::Shipped },
        Order { product_id: 8, status: OrderStatus::Shipped },
        Order { product_id: 6, status: OrderStatus::Processing },
    ]
}

pub fn demo_looks() -> Vec<Look> {
    vec![
        Look { title: "Weekend Errands", product_ids: &[1, 2, 6] },
        Look { title: "City Evening", product_ids: &[3, 4, 8] },
        Look { title: "Cold Snap", product_ids: &[4, 6, 7] },
    ]
}

/// Build one price round per product: the real price plus two decoys (one
/// low, one high, both ending in .99), positions shuffled per-round.
pub fn price_check_rounds(products: &[Product], seed: u64) -> Vec<PriceCheckRound> {
    products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            // Derive a per-round RNG from the base seed, same mix as voice reseeding
            let mix = seed ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
            let mut rng = StdRng::seed_from_u64(mix);
            let low = to_pretty_price((p.price_cents as f32 * 0.78) as u32);
            let high = to_pretty_price((p.price_cents as f32 * 1.25) as u32);
            let mut slots: [(u32, bool); 3] = [(p.price_cents, true), (low, false), (high, false)];
            slots.shuffle(&mut rng);
            let answer = slots.iter().position(|(_, real)| *real).unwrap_or(0);
            PriceCheckRound {
                product_id: p.id,
                choices_cents: [slots[0].0, slots[1].0, slots[2].0],
                answer,
            }
        })
        .collect()
}

/// Round a price to the nearest dollar minus a cent (x.99), never below 99.
fn to_pretty_price(cents: u32) -> u32 {
    let dollars = (cents + 50) / 100;
    (dollars.max(1) * 100).saturating_sub(1)
}

/// The full demo catalog with an id index.
pub struct Catalog {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub looks: Vec<Look>,
    pub rounds: Vec<PriceCheckRound>,
    by_id: FnvHashMap<u32, usize>,
}

impl Catalog {
    pub fn demo(seed: u64) -> Self {
        let products = demo_products();
        let by_id = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id, i))
            .collect::<FnvHashMap<_, _>>();
        let rounds = price_check_rounds(&products, seed);
        Self {
            products,
            orders: demo_orders(),
            looks: demo_looks(),
            rounds,
            by_id,
        }
    }

    pub fn product(&self, id: u32) -> Option<&Product> {
        self.by_id.get(&id).map(|&i| &self.products[i])
    }

    /// Resolve a look's product ids, skipping any id the catalog does not
    /// know (demo fixtures reference every id they use).
    pub fn products_for_look(&self, look: &Look) -> SmallVec<[&Product; 4]> {
        look.product_ids
            .iter()
            .filter_map(|id| self.product(*id))
            .collect()
    }
}

/// Whether `choice` picked the real price for `round`.
#[inline]
pub fn check_guess(round: &PriceCheckRound, choice: usize) -> bool {
    choice == round.answer
}
