use binpack_core::prelude::*;

/// DESCA sorts by area descending (stable on ties), then bin_best_fit opens
/// a new bin whenever no existing bin scores a fit. On tiny 4x4 bins, each
/// (4,4) item exactly fills a bin by itself and a guillotine split never
/// leaves a large enough leftover for the items that follow, so every item
/// after the first ends up opening its own bin.
#[test]
fn descending_area_sort_is_stable_and_opens_bins_on_demand() {
    let opts = BinManagerOptions::builder()
        .bin_size(4, 4)
        .bin_algo(BinSelection::BinBestFit)
        .pack_algo(AlgorithmFamily::Guillotine)
        .sorting(true)
        .sorting_heuristic(SortOrder::DescArea)
        .build();
    let mut mgr = BinManager::new(opts).unwrap();
    mgr.add_items(vec![
        Item::new(3, 3),
        Item::new(4, 4),
        Item::new(2, 2),
        Item::new(4, 4),
    ]);
    mgr.execute().unwrap();

    assert_eq!(mgr.bins().len(), 4);
    for bin in mgr.bins() {
        assert_eq!(bin.items().len(), 1);
    }

    // Stable sort keeps the two equal-area (4,4) items in their original
    // relative order ahead of (3,3) and (2,2).
    assert_eq!(mgr.bins()[0].items()[0].width, 4);
    assert_eq!(mgr.bins()[1].items()[0].width, 4);
}
