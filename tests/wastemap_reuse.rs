use binpack_core::prelude::*;

/// Skyline: a wide item placed at the height of a taller neighboring segment
/// traps a rectangle under the shorter segment it spans. That trapped space
/// must be donated to the wastemap *before* the skyline segments are
/// clipped, and a later item that fits only in the trapped rectangle must
/// be placed there (not stacked fresh on top of the skyline envelope).
#[test]
fn skyline_reclaims_space_trapped_under_a_shorter_segment() {
    let opts = BinManagerOptions::builder()
        .bin_size(10, 20)
        .pack_algo(AlgorithmFamily::Skyline)
        .skyline_heuristic(SkylineHeuristic::BottomLeft)
        .rotation(false)
        .wastemap(true)
        .sorting(false)
        .build();
    let mut mgr = BinManager::new(opts).unwrap();
    mgr.add_items(vec![
        Item::new(4, 2), // occupies x:0-4, y:0-2, leaving segment {x:4, y:0, w:6} shorter than it
        Item::new(8, 5), // spans both segments at y:2, trapping a 4x2 rect at {x:4, y:0}
        Item::new(4, 2), // fits the trapped rect exactly; must land at (4, 0)
    ]);
    mgr.execute().unwrap();

    let items = mgr.bins()[0].items();
    assert_eq!(items.len(), 3);

    assert_eq!((items[0].x, items[0].y), (Some(0), Some(0)));
    assert_eq!((items[1].x, items[1].y), (Some(0), Some(2)));
    // Only reachable through the wastemap: the skyline's own envelope would
    // place a fresh (4,2) item at (0, 7), on top of the second item.
    assert_eq!((items[2].x, items[2].y), (Some(4), Some(0)));

    let stats = mgr.bins()[0].stats();
    let used: u64 = items.iter().map(|it| it.area()).sum();
    assert_eq!(used, stats.area - stats.free_area);
}

/// Shelf: opening a new shelf closes the one below it for good, so the
/// closing shelf's trailing unused width must be donated to the wastemap at
/// that moment. A later item that only fits in that trailing strip must be
/// placed there instead of opening yet another shelf.
#[test]
fn shelf_reclaims_the_trailing_gap_of_a_closed_shelf() {
    let opts = BinManagerOptions::builder()
        .bin_size(10, 20)
        .pack_algo(AlgorithmFamily::Shelf)
        .shelf_heuristic(ShelfHeuristic::NextFit)
        .rotation(false)
        .wastemap(true)
        .sorting(false)
        .build();
    let mut mgr = BinManager::new(opts).unwrap();
    mgr.add_items(vec![
        Item::new(6, 3), // opens shelf 0 at y=0, using width 6 of 10
        Item::new(5, 2), // too wide for shelf 0's remaining width (4); closes
                         // shelf 0 (donating its trailing 4x3 strip) and opens shelf 1
        Item::new(4, 3), // fits shelf 0's donated trailing strip exactly
    ]);
    mgr.execute().unwrap();

    let items = mgr.bins()[0].items();
    assert_eq!(items.len(), 3);

    assert_eq!((items[0].x, items[0].y), (Some(0), Some(0)));
    assert_eq!((items[1].x, items[1].y), (Some(0), Some(3)));
    // Only reachable through the wastemap: neither shelf 0 (closed) nor
    // shelf 1 (would have to grow past its current height) is tried first.
    assert_eq!((items[2].x, items[2].y), (Some(6), Some(0)));

    let stats = mgr.bins()[0].stats();
    let used: u64 = items.iter().map(|it| it.area()).sum();
    assert_eq!(used, stats.area - stats.free_area);
}
