use binpack_core::prelude::*;

/// Next-fit never looks back at a closed shelf, so five items of varying
/// height open exactly three shelves on a 10x10 bin.
#[test]
fn next_fit_opens_three_shelves() {
    let opts = BinManagerOptions::builder()
        .bin_size(10, 10)
        .pack_algo(AlgorithmFamily::Shelf)
        .shelf_heuristic(ShelfHeuristic::NextFit)
        .rotation(false)
        .wastemap(false)
        .sorting(false)
        .build();
    let mut mgr = BinManager::new(opts).unwrap();
    mgr.add_items(vec![
        Item::new(5, 2),
        Item::new(5, 2),
        Item::new(3, 3),
        Item::new(7, 3),
        Item::new(10, 2),
    ]);
    mgr.execute().unwrap();

    assert_eq!(mgr.bins().len(), 1);
    let items = mgr.bins()[0].items();
    assert_eq!(items.len(), 5);

    let ys: Vec<u32> = items.iter().map(|i| i.y.unwrap()).collect();
    assert_eq!(ys, vec![0, 0, 2, 2, 5]);

    let stats = mgr.bins()[0].stats();
    let used_area: u64 = items.iter().map(|i| i.area()).sum();
    assert_eq!(used_area, stats.area - stats.free_area);
    assert!((stats.efficiency - 0.70).abs() < 1e-9);
}
