use std::{num::NonZeroU32, sync::Arc};

use canteen::{CartStore, Catalog, UpdatePolicy};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Update(usize, u32),
    Step(usize, i64),
    Remove(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..6usize).prop_map(Op::Add),
        2 => (0..6usize, 1..5u32).prop_map(|(i, q)| Op::Update(i, q)),
        2 => (0..6usize, -3..3i64).prop_map(|(i, d)| Op::Step(i, d)),
        1 => (0..6usize, any::<i64>()).prop_map(|(i, d)| Op::Step(i, d)),
        1 => (0..6usize, any::<u32>()).prop_map(|(i, q)| Op::Update(i, q)),
        1 => (0..6usize).prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

fn cart(policy: UpdatePolicy) -> CartStore {
    CartStore::new(Arc::new(Catalog::canteen()), policy)
}

fn apply(cart: &mut CartStore, op: &Op) {
    let catalog = Catalog::canteen();
    let item = |i: usize| catalog.items()[i].clone();
    match *op {
        Op::Add(i) => {
            let _ = cart.add_item(&item(i));
        }
        Op::Update(i, q) => {
            if let Some(q) = NonZeroU32::new(q) {
                cart.update_quantity(&item(i).id, q);
            }
        }
        Op::Step(i, d) => cart.step_quantity(&item(i).id, d),
        Op::Remove(i) => cart.remove_item(&item(i).id),
        Op::Clear => cart.clear(),
    }
}

proptest! {
    #[test]
    fn repeated_adds_count_up(n in 1..20u32) {
        let mut cart = cart(UpdatePolicy::Ignore);
        let coffee = Catalog::canteen().get("3").cloned().expect("cold coffee");
        for _ in 0..n {
            cart.add_item(&coffee).expect("available");
        }
        prop_assert_eq!(cart.entries().len(), 1);
        prop_assert_eq!(cart.quantity_of("3"), n);
        prop_assert_eq!(cart.total(), 60 * u64::from(n));
    }

    #[test]
    fn invariants_hold_after_any_sequence(
        ops in prop::collection::vec(op(), 0..40),
        recreate in any::<bool>(),
    ) {
        let policy = if recreate { UpdatePolicy::Recreate } else { UpdatePolicy::Ignore };
        let mut cart = cart(policy);
        for op in &ops {
            apply(&mut cart, op);

            let expected: u64 = cart
                .entries()
                .iter()
                .map(|e| u64::from(e.item.price) * u64::from(e.quantity))
                .sum();
            prop_assert_eq!(cart.total(), expected);

            let mut ids: Vec<&str> = cart.entries().iter().map(|e| e.id()).collect();
            prop_assert!(cart.entries().iter().all(|e| e.quantity >= 1));
            prop_assert!(cart.entries().iter().all(|e| e.item.available));
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), cart.entries().len());
        }
    }

    #[test]
    fn clear_always_zeroes(ops in prop::collection::vec(op(), 0..20)) {
        let mut cart = cart(UpdatePolicy::Ignore);
        for op in &ops {
            apply(&mut cart, op);
        }
        cart.clear();
        prop_assert_eq!(cart.total(), 0);
        prop_assert!(cart.entries().is_empty());
    }

    #[test]
    fn ignore_policy_never_resurrects(i in 0..6usize, q in 1..10u32) {
        let mut cart = cart(UpdatePolicy::Ignore);
        let item = Catalog::canteen().items()[i].clone();
        let _ = cart.add_item(&item);
        cart.remove_item(&item.id);
        cart.update_quantity(&item.id, NonZeroU32::new(q).expect("non-zero"));
        prop_assert!(cart.is_empty());
    }
}
