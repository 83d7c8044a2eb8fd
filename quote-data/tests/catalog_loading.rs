//! Integration tests for catalog loading against the bundled fixture files.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use quote_core::{AccessorySlot, Eligibility, eligible_variants};
use quote_data::{AccessoryCatalogLoader, FabricCatalogLoader, load_catalog};

const FABRICS_CSV: &str = include_str!("../test-data/fabrics.csv");
const ACCESSORIES_CSV: &str = include_str!("../test-data/accessories.csv");

#[test]
fn loads_the_full_fixture_catalog() {
    let catalog = load_catalog(FABRICS_CSV.as_bytes(), ACCESSORIES_CSV.as_bytes())
        .expect("fixture catalog loads");

    assert_eq!(catalog.fabrics.len(), 4);
    assert_eq!(catalog.rails.len(), 3);
    assert_eq!(catalog.tassels.len(), 2);
    assert_eq!(catalog.hooks.len(), 1);
    assert_eq!(catalog.sheer_fabrics.len(), 2);
    assert_eq!(catalog.sheer_rails.len(), 2);
}

#[test]
fn parsed_records_preserve_prices_and_widths() {
    let fabrics = FabricCatalogLoader::parse(FABRICS_CSV.as_bytes()).expect("fabrics parse");
    assert_eq!(fabrics[0].price_per_meter, dec!(100000));

    let accessories =
        AccessoryCatalogLoader::parse(ACCESSORIES_CSV.as_bytes()).expect("accessories parse");
    let telescopic = accessories.iter().find(|r| r.id == "rel-3").unwrap();
    assert_eq!(telescopic.max_width, None);
}

#[test]
fn wide_item_narrows_the_rail_offer() {
    let catalog = load_catalog(FABRICS_CSV.as_bytes(), ACCESSORIES_CSV.as_bytes())
        .expect("fixture catalog loads");

    // 350cm: rel-1 (300) drops out, rel-2 (400) and rel-3 (unconstrained) stay.
    let offer = eligible_variants(AccessorySlot::Rail, &catalog.rails, dec!(350));
    let ids: Vec<&str> = offer.variants().iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["rel-2", "rel-3"]);

    // 500cm: both sheer rails (250, 450) are too short and none are
    // unconstrained, so the offer collapses to the distinct state.
    let offer = eligible_variants(AccessorySlot::SheerRail, &catalog.sheer_rails, dec!(500));
    assert_eq!(offer, Eligibility::InsufficientWidth);
}
