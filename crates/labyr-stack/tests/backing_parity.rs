//! Integration test: every backing behaves identically through `Stack`.
//!
//! Random operation sequences are replayed against each backing and the
//! observable results (pop values, peeks, lengths) are compared.

use labyr_stack::{ArrayStack, DequeStack, LinkedStack, Stack};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Push(u32),
    Pop,
    Peek,
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u32>().prop_map(Op::Push),
        3 => Just(Op::Pop),
        1 => Just(Op::Peek),
        1 => Just(Op::Clear),
    ]
}

/// Apply `ops` and record every observable result.
fn trace<S: Stack<u32>>(ops: &[Op]) -> Vec<String> {
    let mut s = S::default();
    let mut out = Vec::with_capacity(ops.len());
    for op in ops {
        let seen = match op {
            Op::Push(v) => {
                s.push(*v);
                String::new()
            }
            Op::Pop => format!("{:?}", s.pop()),
            Op::Peek => format!("{:?}", s.peek()),
            Op::Clear => {
                s.clear();
                String::new()
            }
        };
        out.push(format!("{seen}|{}|{}", s.len(), s.is_empty()));
    }
    out
}

proptest! {
    #[test]
    fn all_backings_are_observably_identical(ops in proptest::collection::vec(arb_op(), 0..200)) {
        let array = trace::<ArrayStack<u32>>(&ops);
        let linked = trace::<LinkedStack<u32>>(&ops);
        let deque = trace::<DequeStack<u32>>(&ops);
        prop_assert_eq!(&array, &linked);
        prop_assert_eq!(&array, &deque);
    }

    #[test]
    fn pops_reverse_pushes(items in proptest::collection::vec(any::<i64>(), 0..100)) {
        let mut s = LinkedStack::new();
        for &i in &items {
            s.push(i);
        }
        let mut popped = Vec::new();
        while !s.is_empty() {
            popped.push(s.pop().unwrap());
        }
        popped.reverse();
        prop_assert_eq!(popped, items);
    }
}
