//! End-to-end filter scenarios and property tests

use bloomgate::{
    CountingBloomFilter, FilterBuilder, HashStrategy, HasKey, KeyedFilter, Lookup,
};
use proptest::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct CrawledPage {
    uri: String,
    title: Option<String>,
}

impl CrawledPage {
    fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: None,
        }
    }
}

impl HasKey for CrawledPage {
    type Key = String;

    fn key(&self) -> String {
        self.uri.clone()
    }
}

fn crawler_builder() -> FilterBuilder {
    FilterBuilder::new()
        .with_name("crawler")
        .with_capacity(300)
        .with_false_positive_rate(0.01)
        .with_strategy(HashStrategy::Murmur3)
}

#[test]
fn plain_filter_crawl_scenario() {
    let mut filter = crawler_builder().build_filter().unwrap();

    for i in 0..300 {
        filter.add(i.to_string().as_bytes());
    }

    // Zero false negatives among the added keys.
    for i in 0..300 {
        assert!(
            filter.contains(i.to_string().as_bytes()),
            "false negative for {i}"
        );
    }

    // Keys never added should only occasionally hit (target rate 1%).
    let false_positives = (300..1000)
        .filter(|i| filter.contains(i.to_string().as_bytes()))
        .count();
    assert!(
        false_positives < 70,
        "{false_positives} false positives in 700 probes is far above target"
    );
}

#[test]
fn counting_filter_crawl_scenario() {
    let filter = crawler_builder().build_counting_filter().unwrap();

    for i in 0..300 {
        filter.add(i.to_string().as_bytes());
    }
    for i in 0..300 {
        assert!(
            filter.contains(i.to_string().as_bytes()),
            "false negative for {i}"
        );
    }

    assert!(filter.remove(b"0"), "removing an added key succeeds");
    assert!(!filter.contains(b"0"), "removed key no longer probes present");
    assert!(!filter.remove(b"0"), "second remove fails");
    assert!(!filter.remove(b"888"), "removing a never-added key fails");
}

#[test]
fn keyed_facade_round_trip() {
    let core = crawler_builder().build_filter().unwrap();
    let mut filter = KeyedFilter::in_memory(core);

    for i in 0..300 {
        filter.add(CrawledPage::new(format!("https://crawl.example/{i}")));
    }

    for i in 0..300 {
        let key = format!("https://crawl.example/{i}");
        match filter.get(&key) {
            Lookup::Found(page) => assert_eq!(page.uri, key),
            other => panic!("expected stored page for {key}, got {other:?}"),
        }
    }

    // A key the filter definitely rejects is reported as a definite
    // negative without ever consulting storage.
    let absent = (0..10_000)
        .map(|i| format!("https://elsewhere.example/{i}"))
        .find(|key| !filter.contains_key(key))
        .expect("some key is a definite negative");
    assert_eq!(filter.get(&absent), Lookup::Absent);
}

#[test]
fn counting_facade_remove_flow() {
    let core: CountingBloomFilter = crawler_builder().build_counting_filter().unwrap();
    let mut filter = KeyedFilter::in_memory(core);

    let page = CrawledPage::new("https://crawl.example/revisit");
    filter.add(page.clone());
    assert!(filter.contains(&page));

    assert!(filter.remove(&page.key()));
    assert!(!filter.contains(&page));
    // The entity itself is still stored; only the filter stopped vouching.
    assert_eq!(filter.storage().unwrap().len(), 1);
}

#[test]
fn every_strategy_survives_the_crawl_scenario() {
    for strategy in HashStrategy::ALL {
        let mut filter = FilterBuilder::new()
            .with_capacity(300)
            .with_false_positive_rate(0.01)
            .with_strategy(strategy)
            .build_filter()
            .unwrap();

        for i in 0..300 {
            filter.add(i.to_string().as_bytes());
        }
        for i in 0..300 {
            assert!(
                filter.contains(i.to_string().as_bytes()),
                "false negative for {i} under {strategy:?}"
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn probe_positions_stay_in_range(
        bytes in proptest::collection::vec(any::<u8>(), 0..64),
        m in 1usize..5000,
        k in 1usize..16,
    ) {
        for strategy in HashStrategy::ALL {
            let positions = strategy.probe(&bytes, m, k);
            prop_assert_eq!(positions.len(), k);
            for pos in positions {
                prop_assert!(pos < m, "{:?}: {} out of range for m={}", strategy, pos, m);
            }
        }
    }

    #[test]
    fn added_bytes_are_never_reported_absent(
        keys in proptest::collection::hash_set(
            proptest::collection::vec(any::<u8>(), 1..32),
            1..40,
        ),
    ) {
        let mut filter = FilterBuilder::new()
            .with_capacity(64)
            .with_false_positive_rate(0.01)
            .with_strategy(HashStrategy::Murmur3)
            .build_filter()
            .unwrap();

        for key in &keys {
            filter.add(key);
        }
        for key in &keys {
            prop_assert!(filter.contains(key));
        }
    }

    #[test]
    fn counting_remove_balances_one_add(
        key in proptest::collection::vec(any::<u8>(), 1..32),
    ) {
        let filter = FilterBuilder::new()
            .with_capacity(64)
            .with_false_positive_rate(0.01)
            .with_strategy(HashStrategy::Cassandra)
            .build_counting_filter()
            .unwrap();

        filter.add(&key);
        prop_assert!(filter.contains(&key));
        prop_assert!(filter.remove(&key));
        prop_assert!(!filter.contains(&key));
        prop_assert!(!filter.remove(&key));
    }
}
