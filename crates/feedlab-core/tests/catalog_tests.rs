// Host-side tests for the demo catalog fixtures.

use feedlab_core::{check_guess, demo_looks, demo_orders, demo_products, Catalog};

#[test]
fn product_ids_are_unique() {
    let products = demo_products();
    for (i, a) in products.iter().enumerate() {
        for b in &products[i + 1..] {
            assert_ne!(a.id, b.id, "duplicate product id {}", a.id);
        }
    }
}

#[test]
fn orders_and_looks_reference_known_products() {
    let catalog = Catalog::demo(1);
    for order in demo_orders() {
        assert!(
            catalog.product(order.product_id).is_some(),
            "order references unknown product {}",
            order.product_id
        );
    }
    for look in demo_looks() {
        let resolved = catalog.products_for_look(&look);
        assert_eq!(
            resolved.len(),
            look.product_ids.len(),
            "look '{}' lost products in resolution",
            look.title
        );
    }
}

#[test]
fn every_round_contains_the_real_price_exactly_once() {
    let catalog = Catalog::demo(7);
    assert_eq!(catalog.rounds.len(), catalog.products.len());
    for round in &catalog.rounds {
        let product = catalog.product(round.product_id).expect("round product");
        let hits = round
            .choices_cents
            .iter()
            .filter(|&&c| c == product.price_cents)
            .count();
        assert_eq!(hits, 1, "product {} price appears {} times", product.name, hits);
        assert_eq!(round.choices_cents[round.answer], product.price_cents);
    }
}

#[test]
fn decoy_prices_differ_from_the_real_price() {
    let catalog = Catalog::demo(3);
    for round in &catalog.rounds {
        let product = catalog.product(round.product_id).unwrap();
        for (i, &c) in round.choices_cents.iter().enumerate() {
            if i != round.answer {
                assert_ne!(c, product.price_cents);
            }
        }
    }
}

#[test]
fn rounds_are_deterministic_for_a_seed() {
    let a = Catalog::demo(99);
    let b = Catalog::demo(99);
    for (ra, rb) in a.rounds.iter().zip(b.rounds.iter()) {
        assert_eq!(ra.product_id, rb.product_id);
        assert_eq!(ra.choices_cents, rb.choices_cents);
        assert_eq!(ra.answer, rb.answer);
    }
    // a different seed shuffles at least one round differently
    let c = Catalog::demo(100);
    let any_diff = a
        .rounds
        .iter()
        .zip(c.rounds.iter())
        .any(|(ra, rc)| ra.choices_cents != rc.choices_cents);
    assert!(any_diff, "seed had no effect on decoy placement");
}

#[test]
fn check_guess_accepts_only_the_answer_slot() {
    let catalog = Catalog::demo(5);
    let round = &catalog.rounds[0];
    for choice in 0..3 {
        assert_eq!(check_guess(round, choice), choice == round.answer);
    }
}
