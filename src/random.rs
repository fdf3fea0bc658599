use rand::{Rng, SeedableRng};
use crate::catalog::Catalog;


// One tap a customer makes on the menu or cart screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    Add(String),
    Step(String, i64),
    Remove(String),
    Checkout,
}

// A customer's session, ending in a checkout attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub customer: usize,
    pub actions: Vec<CartAction>,
}


// Random pick from the whole menu, out of stock items included
fn random_item_id(rng: &mut impl Rng, catalog: &Catalog) -> Option<String> {
    let items = catalog.items();
    if items.is_empty() {
        return None;
    }
    Some(items[rng.gen_range(0..items.len())].id.clone())
}

// Random generation of a cart action
fn random_action(rng: &mut impl Rng, catalog: &Catalog) -> Option<CartAction> {
    let id = random_item_id(rng, catalog)?;
    let action = match rng.gen_range(0..10) {
        0..=6 => CartAction::Add(id),
        7 => CartAction::Step(id, 1),
        8 => CartAction::Step(id, -1),
        9 => CartAction::Remove(id),
        _ => unreachable!(),
    };
    Some(action)
}

// Random generation of a visit
fn random_visit(rng: &mut impl Rng, catalog: &Catalog, customer: usize) -> Visit {
    let num_actions = rng.gen_range(1..7);
    let mut actions = Vec::new();
    for _i in 0..num_actions {
        actions.extend(random_action(rng, catalog));
    }
    actions.push(CartAction::Checkout);
    Visit { customer, actions }
}

// Generate a list of random visits
pub fn generator_visits(catalog: &Catalog, n: usize, seed: u64) -> Vec<Visit> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut visits = Vec::new();
    for i in 0..n {
        visits.push(random_visit(&mut rng, catalog, i));
    }
    visits
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_visits() {
        let catalog = Catalog::canteen();
        assert_eq!(
            generator_visits(&catalog, 5, 7),
            generator_visits(&catalog, 5, 7)
        );
    }

    #[test]
    fn every_visit_ends_in_checkout() {
        let catalog = Catalog::canteen();
        for visit in generator_visits(&catalog, 20, 1) {
            assert_eq!(visit.actions.last(), Some(&CartAction::Checkout));
            assert!(visit.actions.len() >= 2);
        }
    }

    #[test]
    fn empty_catalog_only_checks_out() {
        let visits = generator_visits(&Catalog::new(Vec::new()), 2, 3);
        assert!(visits.iter().all(|v| v.actions == vec![CartAction::Checkout]));
    }
}
