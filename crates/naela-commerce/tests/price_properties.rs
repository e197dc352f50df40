use naela_commerce::cart::{normalize_quantity, Cart, CartStore};
use naela_commerce::money::{format_currency, parse_price, Rupiah};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parse_price_never_panics(text in any::<String>()) {
        let _ = parse_price(&text);
    }

    #[test]
    fn round_thousands_round_trip(thousands in 1u64..1_000) {
        let amount = Rupiah::new(thousands * 1_000);
        let formatted = format_currency(amount);
        prop_assert!(formatted.ends_with('K'));
        prop_assert_eq!(parse_price(&formatted), amount);
    }

    #[test]
    fn large_amounts_use_grouping(amount in 1_000_000u64..10_000_000_000) {
        let formatted = format_currency(Rupiah::new(amount));
        prop_assert!(!formatted.contains('K'));
        prop_assert!(formatted.split('.').skip(1).all(|group| group.len() == 3));
    }

    #[test]
    fn quantity_is_at_least_one(raw in any::<String>()) {
        prop_assert!(normalize_quantity(&raw) >= 1);
    }

    #[test]
    fn total_value_ignores_insertion_order(
        items in proptest::collection::vec((0u8..6, 1u64..500, 1u32..20), 1..12)
    ) {
        let mut forward = Cart::new();
        let mut backward = Cart::new();
        for (title, price, qty) in &items {
            forward.add_item("", &format!("item-{}", title), &format!("{}K", price), &qty.to_string());
        }
        for (title, price, qty) in items.iter().rev() {
            backward.add_item("", &format!("item-{}", title), &format!("{}K", price), &qty.to_string());
        }

        let expected: u64 = items.iter().map(|(_, p, q)| p * 1_000 * u64::from(*q)).sum();
        prop_assert_eq!(forward.total_value().amount(), expected);
        prop_assert_eq!(backward.total_value(), forward.total_value());
        prop_assert_eq!(forward.len(), backward.len());
    }
}

#[test]
fn documented_examples() {
    assert_eq!(parse_price("45K").amount(), 45_000);
    assert_eq!(parse_price("Rp 120.000").amount(), 120_000);
    assert_eq!(parse_price("").amount(), 0);
    assert_eq!(format_currency(Rupiah::new(45_000)), "45K");
    assert_eq!(format_currency(Rupiah::new(1_500_000)), "1.500.000");
}

#[test]
fn shorthand_stops_at_one_million() {
    // 999K is the last shorthand value; one million switches to grouping.
    assert_eq!(format_currency(Rupiah::new(999_000)), "999K");
    assert_eq!(format_currency(Rupiah::new(1_000_000)), "1.000.000");
    // Grouped text still parses back because separators are discarded.
    assert_eq!(parse_price("1.000.000").amount(), 1_000_000);
}
