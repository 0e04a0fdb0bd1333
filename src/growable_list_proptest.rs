#![cfg(test)]

// Property tests for GrowableList against a Vec model.

use crate::error::Error;
use crate::growable_list::{GrowableList, INITIAL_CAPACITY};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Append(i32),
    Insert(usize, i32),
    Get(usize),
    Push(i32),
    Pop,
    Next,
    Reset,
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        3 => any::<i32>().prop_map(Op::Append),
        2 => (0usize..48, any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (0usize..48).prop_map(Op::Get),
        2 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
        2 => Just(Op::Next),
        1 => Just(Op::Reset),
    ];
    proptest::collection::vec(op, 1..200)
}

// Invariants exercised:
// - Contents match the model after every op, including the append done by
//   an out-of-range insert that still reports IndexPastEnd.
// - Capacity doubles exactly when `len + 2 > capacity` before a write.
// - `get` beyond `len` and `pop` on empty fail without side effects.
// - The cursor yields model[cursor] and then `None` without advancing.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_list_matches_vec(ops in arb_ops()) {
        let mut sut: GrowableList<i32> = GrowableList::new();
        let mut model: Vec<i32> = Vec::new();
        let mut cursor = 0usize;
        let mut expected_cap = INITIAL_CAPACITY;

        for op in ops {
            let grows = matches!(op, Op::Append(_) | Op::Insert(..) | Op::Push(_));
            if grows && model.len() + 2 > expected_cap {
                expected_cap *= 2;
            }
            match op {
                Op::Append(v) | Op::Push(v) => {
                    let r = if matches!(op, Op::Append(_)) { sut.append(v) } else { sut.push(v) };
                    prop_assert_eq!(r, Ok(()));
                    model.push(v);
                }
                Op::Insert(i, v) => {
                    if i < model.len() {
                        prop_assert_eq!(sut.insert(i, v), Ok(()));
                        model.insert(i, v);
                    } else {
                        prop_assert_eq!(sut.insert(i, v), Err(Error::IndexPastEnd));
                        model.push(v);
                    }
                }
                Op::Get(i) => match model.get(i) {
                    Some(v) => prop_assert_eq!(sut.get(i), Ok(v)),
                    None => prop_assert_eq!(sut.get(i), Err(Error::IndexOutOfRange)),
                },
                Op::Pop => match model.pop() {
                    Some(v) => prop_assert_eq!(sut.pop(), Ok(v)),
                    None => prop_assert_eq!(sut.pop(), Err(Error::Underflow)),
                },
                Op::Next => {
                    let expected = model.get(cursor);
                    prop_assert_eq!(sut.next_item(), expected);
                    if expected.is_some() {
                        cursor += 1;
                    }
                }
                Op::Reset => {
                    sut.reset_cursor();
                    cursor = 0;
                }
            }

            prop_assert_eq!(sut.raw_view(), model.as_slice());
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.capacity(), expected_cap);
            prop_assert!(sut.len() < sut.capacity());
        }
    }
}
