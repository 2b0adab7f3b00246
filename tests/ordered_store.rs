//! Property tests comparing [OrderedStore] against a map of counts
use quickcheck::{quickcheck, TestResult};
use std::collections::BTreeMap;
use stockroom::OrderedStore;

fn model(keys: &[u8]) -> BTreeMap<u8, usize> {
    let mut map = BTreeMap::new();
    for key in keys {
        *map.entry(*key).or_insert(0) += 1
    }
    map
}

fn contents(store: &OrderedStore<u8>) -> Vec<(u8, usize)> {
    store.iter().map(|(key, count)| (*key, count)).collect()
}

quickcheck! {
    fn traversal_is_strictly_ascending(keys: Vec<u8>) -> bool {
        let store: OrderedStore<u8> = keys.into_iter().collect();
        let sorted: Vec<_> = store.iter().map(|(key, _)| *key).collect();
        sorted.windows(2).all(|pair| pair[0] < pair[1])
    }

    fn one_node_per_distinct_key(keys: Vec<u8>) -> bool {
        let store: OrderedStore<u8> = keys.iter().copied().collect();
        let expected = model(&keys);
        store.len() == expected.len()
            && store.total() == keys.len()
            && expected.iter().all(|(key, count)| store.occurrence(key) == *count)
    }

    fn removing_every_insert_empties(keys: Vec<u8>) -> bool {
        let mut store: OrderedStore<u8> = keys.iter().copied().collect();
        let all_removed = keys.iter().all(|key| store.remove(key));
        all_removed
            && store.is_empty()
            && keys.iter().all(|key| store.retrieve(key).is_none())
    }

    fn matches_count_model(ops: Vec<(bool, u8)>) -> bool {
        let mut store = OrderedStore::new();
        let mut expected: BTreeMap<u8, usize> = BTreeMap::new();
        for (insert, key) in ops {
            if insert {
                store.insert(key);
                *expected.entry(key).or_insert(0) += 1;
            } else {
                let present = match expected.get_mut(&key) {
                    Some(count) if *count > 1 => {
                        *count -= 1;
                        true
                    }
                    Some(_) => {
                        expected.remove(&key);
                        true
                    }
                    None => false,
                };
                if store.remove(&key) != present {
                    return false;
                }
            }
        }
        contents(&store) == expected.into_iter().collect::<Vec<_>>()
    }

    fn deleting_a_key_keeps_the_rest(keys: Vec<u8>, pick: usize) -> TestResult {
        if keys.is_empty() {
            return TestResult::discard();
        }
        let target = keys[pick % keys.len()];
        let mut store: OrderedStore<u8> = keys.iter().copied().collect();
        let mut expected = model(&keys);
        for _ in 0..store.occurrence(&target) {
            store.remove(&target);
        }
        expected.remove(&target);
        TestResult::from_bool(
            !store.contains(&target)
                && contents(&store) == expected.into_iter().collect::<Vec<_>>(),
        )
    }

    fn copies_are_independent(keys: Vec<u8>, edits: Vec<(bool, u8)>) -> bool {
        let original: OrderedStore<u8> = keys.into_iter().collect();
        let before = contents(&original);
        let mut copy = original.clone();
        for (insert, key) in edits {
            if insert {
                copy.insert(key);
            } else {
                copy.remove(&key);
            }
        }
        drop(copy);
        contents(&original) == before
    }
}
