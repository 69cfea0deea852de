//! End-to-end searches through the coordinator.

use otkhi_engine::{Backend, ChainSearcher, EngineError};

#[test]
fn search_over_the_first_thousand() {
    let searcher = ChainSearcher::new();
    let outcome = searcher.search(0, 1_000).unwrap();
    let chain = outcome.chain.expect("non-empty range yields a chain");
    assert!(chain.start() < 1_000);
    assert_eq!(*chain.values().last().unwrap(), 4);
    assert_eq!(outcome.stats.candidates, 1_000);
    assert_eq!(outcome.stats.backend, Backend::Cpu);
}

#[test]
fn result_is_stable_across_lane_counts() {
    let reference = ChainSearcher::builder()
        .lanes(1)
        .build()
        .unwrap()
        .search(0, 20_000)
        .unwrap()
        .chain
        .unwrap();

    for lanes in [2, 5, 11] {
        let chain = ChainSearcher::builder()
            .lanes(lanes)
            .build()
            .unwrap()
            .search(0, 20_000)
            .unwrap()
            .chain
            .unwrap();
        assert_eq!(chain.start(), reference.start(), "lanes = {lanes}");
        assert_eq!(chain.values(), reference.values(), "lanes = {lanes}");
    }
}

#[test]
fn ties_resolve_to_the_smallest_start() {
    // 6, 7 and 8 all map through a 3-value chain; the scan must report 6.
    let outcome = ChainSearcher::new().search(6, 9).unwrap();
    let chain = outcome.chain.unwrap();
    assert_eq!(chain.start(), 6);
    assert_eq!(chain.len(), 3);
}

#[test]
fn inverted_bounds_examine_the_start() {
    let outcome = ChainSearcher::new().search(50, 10).unwrap();
    assert_eq!(outcome.stats.candidates, 1);
    assert_eq!(outcome.chain.unwrap().start(), 50);
}

#[test]
fn single_space_separator_changes_chains() {
    let comma = ChainSearcher::new().search(1_001, 1_002).unwrap();
    let space = ChainSearcher::builder()
        .separator_len(1)
        .build()
        .unwrap()
        .search(1_001, 1_002)
        .unwrap();
    let comma_chain = comma.chain.unwrap();
    let space_chain = space.chain.unwrap();
    assert_eq!(comma_chain.values()[1], 10);
    assert_eq!(space_chain.values()[1], 9);
}

#[cfg(not(feature = "cuda"))]
#[test]
fn cuda_backend_requires_the_feature() {
    let searcher = ChainSearcher::builder()
        .backend(Backend::Cuda)
        .build()
        .unwrap();
    assert!(matches!(
        searcher.search(0, 10),
        Err(EngineError::BackendDisabled {
            backend: "cuda",
            ..
        })
    ));
}
