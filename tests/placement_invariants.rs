use binpack_core::prelude::*;

fn assert_bin_valid(mgr: &BinManager) {
    for bin in mgr.bins() {
        let stats = bin.stats();
        let items = bin.items();
        for it in items {
            assert!(it.is_placed());
            let r = it.placement().unwrap();
            assert!(r.right() <= stats.width, "item escapes bin width");
            assert!(r.bottom() <= stats.height, "item escapes bin height");
        }
        for i in 0..items.len() {
            for j in (i + 1)..items.len() {
                let a = items[i].placement().unwrap();
                let b = items[j].placement().unwrap();
                assert!(!a.intersects(&b), "items {i} and {j} overlap");
            }
        }
        let used: u64 = items.iter().map(|it| it.area()).sum();
        assert_eq!(used, stats.area - stats.free_area);
        assert!(stats.efficiency >= 0.0 && stats.efficiency <= 1.0);
    }
}

fn sample_items() -> Vec<Item> {
    vec![
        Item::new(3, 2),
        Item::new(2, 5),
        Item::new(4, 4),
        Item::new(1, 7),
        Item::new(6, 3),
        Item::new(2, 2),
    ]
}

#[test]
fn guillotine_never_overlaps_or_escapes() {
    let opts = BinManagerOptions::builder()
        .bin_size(8, 8)
        .pack_algo(AlgorithmFamily::Guillotine)
        .build();
    let mut mgr = BinManager::new(opts).unwrap();
    mgr.add_items(sample_items());
    mgr.execute().unwrap();
    assert_bin_valid(&mgr);
}

#[test]
fn maxrects_never_overlaps_or_escapes() {
    let opts = BinManagerOptions::builder()
        .bin_size(8, 8)
        .pack_algo(AlgorithmFamily::MaximalRectangle)
        .build();
    let mut mgr = BinManager::new(opts).unwrap();
    mgr.add_items(sample_items());
    mgr.execute().unwrap();
    assert_bin_valid(&mgr);
}

#[test]
fn shelf_never_overlaps_or_escapes() {
    let opts = BinManagerOptions::builder()
        .bin_size(8, 8)
        .pack_algo(AlgorithmFamily::Shelf)
        .build();
    let mut mgr = BinManager::new(opts).unwrap();
    mgr.add_items(sample_items());
    mgr.execute().unwrap();
    assert_bin_valid(&mgr);
}

#[test]
fn skyline_never_overlaps_or_escapes() {
    let opts = BinManagerOptions::builder()
        .bin_size(8, 8)
        .pack_algo(AlgorithmFamily::Skyline)
        .build();
    let mut mgr = BinManager::new(opts).unwrap();
    mgr.add_items(sample_items());
    mgr.execute().unwrap();
    assert_bin_valid(&mgr);
}

/// Rotating an item twice restores its original dimensions and flag.
#[test]
fn rotate_is_idempotent_in_pairs() {
    let mut item = Item::new(3, 7);
    item.rotate();
    assert_eq!((item.width, item.height, item.rotated), (7, 3, true));
    item.rotate();
    assert_eq!((item.width, item.height, item.rotated), (3, 7, false));
}

/// Sorting ties keep their relative input order (stable sort).
#[test]
fn sorting_is_stable_on_ties() {
    let opts = BinManagerOptions::builder()
        .bin_size(20, 20)
        .sorting(true)
        .sorting_heuristic(SortOrder::DescArea)
        .build();
    let mut mgr = BinManager::new(opts).unwrap();
    // Three items share area 4 in input order (4,1) (1,4) (2,2); all tie.
    mgr.add_items(vec![Item::new(4, 1), Item::new(1, 4), Item::new(2, 2)]);
    mgr.execute().unwrap();
    let items = mgr.bins()[0].items();
    assert_eq!((items[0].width, items[0].height), (4, 1));
    assert_eq!((items[1].width, items[1].height), (1, 4));
    assert_eq!((items[2].width, items[2].height), (2, 2));
}
