use binpack_core::prelude::*;

/// Four items whose areas exactly tile a 10x10 bin; best-short-side with
/// rotation off should place all of them at perfect efficiency.
#[test]
fn four_items_tile_bin() {
    let opts = BinManagerOptions::builder()
        .bin_size(10, 10)
        .pack_algo(AlgorithmFamily::MaximalRectangle)
        .maxrects_heuristic(MaxRectsHeuristic::BestShortSide)
        .rotation(false)
        .sorting(false)
        .build();
    let mut mgr = BinManager::new(opts).unwrap();
    mgr.add_items(vec![
        Item::new(8, 8),
        Item::new(2, 8),
        Item::new(8, 2),
        Item::new(2, 2),
    ]);
    mgr.execute().unwrap();

    assert_eq!(mgr.bins().len(), 1);
    let stats = mgr.bins()[0].stats();
    assert_eq!(stats.item_count, 4);
    assert!((stats.efficiency - 1.0).abs() < 1e-9);
}
