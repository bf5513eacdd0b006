use binpack_core::prelude::*;

/// With rotation on, bottom-left skyline placement fits all three items on
/// a narrow 5x10 bin. Placed area is rotation-invariant (swapping width and
/// height doesn't change an item's area), so efficiency is fixed regardless
/// of which items end up rotated.
#[test]
fn three_items_fit_narrow_bin() {
    let opts = BinManagerOptions::builder()
        .bin_size(5, 10)
        .pack_algo(AlgorithmFamily::Skyline)
        .skyline_heuristic(SkylineHeuristic::BottomLeft)
        .rotation(true)
        .wastemap(false)
        .sorting(false)
        .build();
    let mut mgr = BinManager::new(opts).unwrap();
    mgr.add_items(vec![Item::new(3, 5), Item::new(5, 3), Item::new(2, 2)]);
    mgr.execute().unwrap();

    assert_eq!(mgr.bins().len(), 1);
    let items = mgr.bins()[0].items();
    assert_eq!(items.len(), 3);

    for it in items {
        assert!(it.is_placed());
        let r = it.placement().unwrap();
        assert!(r.right() <= 5);
        assert!(r.bottom() <= 10);
    }
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            assert!(!items[i].placement().unwrap().intersects(&items[j].placement().unwrap()));
        }
    }

    let stats = mgr.bins()[0].stats();
    assert!((stats.efficiency - 0.68).abs() < 1e-9);
}
