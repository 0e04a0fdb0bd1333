#![cfg(test)]

// Property tests for HashMap kept inside the crate next to the unit tests.

use crate::error::Error;
use crate::hash_map::{HashMap, INITIAL_CAPACITY};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::{BTreeSet, HashMap as ModelMap};
use std::hash::{BuildHasher, Hasher};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Find(usize),
    Contains(String),
    CursorWalk,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=40).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            4 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            2 => idx.clone().prop_map(OpI::Find),
            1 => prop_oneof![contains_pool, "[a-z]{0,5}"].prop_map(OpI::Contains),
            1 => Just(OpI::CursorWalk),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Invariants exercised across random operation sequences:
// - Duplicate keys are rejected and never overwrite the stored value.
// - `find`/`contains_key` parity with the model.
// - Capacity follows the grow-before-probe rule, counting rejected inserts.
// - `count` is always one more than the number of entries.
// - A cursor walk and `iter` both yield each entry exactly once, in the same order.
fn run_scenario<S: BuildHasher>(
    mut sut: HashMap<i32, S>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: ModelMap<String, i32> = ModelMap::new();
    let mut expected_cap = INITIAL_CAPACITY;

    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = &pool[i];
                if (model.len() + 1 + 2) * 4 > expected_cap * 3 {
                    expected_cap *= 2;
                }
                let already = model.contains_key(k);
                match sut.insert(k, v) {
                    Ok(()) => {
                        prop_assert!(!already, "insert must fail on duplicate");
                        model.insert(k.clone(), v);
                    }
                    Err(Error::AlreadyExists) => {
                        prop_assert!(already, "duplicate error only when key exists");
                    }
                    Err(e) => prop_assert!(false, "unexpected error {:?}", e),
                }
                prop_assert_eq!(sut.capacity(), expected_cap);
            }
            OpI::Find(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.find(k).ok(), model.get(k));
                if !model.contains_key(k) {
                    prop_assert_eq!(sut.find(k), Err(Error::NotFound));
                }
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            OpI::CursorWalk => {
                sut.reset_cursor();
                let mut walked = Vec::new();
                while let Some((k, v)) = sut.next_entry() {
                    walked.push((k.to_string(), *v));
                }
                prop_assert!(sut.next_entry().is_none());
                let from_iter: Vec<(String, i32)> =
                    sut.iter().map(|(k, v)| (k.to_string(), *v)).collect();
                prop_assert_eq!(&walked, &from_iter);
                let mut sorted = walked;
                sorted.sort();
                let mut expected: Vec<(String, i32)> =
                    model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                expected.sort();
                prop_assert_eq!(sorted, expected);
            }
            OpI::Iterate => {
                let s_keys: BTreeSet<&str> = sut.iter().map(|(k, _)| k).collect();
                let m_keys: BTreeSet<&str> = model.keys().map(String::as_str).collect();
                prop_assert_eq!(s_keys, m_keys);
            }
        }

        // Post-conditions after each op
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.count(), model.len() + 1);
        prop_assert!(sut.capacity().is_power_of_two());
        prop_assert!(sut.count() * 4 <= sut.capacity() * 3);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(HashMap::new(), &pool, ops)?;
    }
}

// Collision variant using a constant hasher to stress equality resolution.
#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

// Property: Same state-machine invariants as above, under worst-case
// collision behavior (constant hasher). Every probe runs from slot 0.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_scenario(HashMap::with_hasher(ConstBuildHasher), &pool, ops)?;
    }
}
