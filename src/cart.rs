//! Cart store: the (item, quantity) selections of the current session.
//!
//! Entries are kept in insertion order and an item id appears at most once.
//! Quantities are always at least one; an entry that would reach zero is
//! removed instead of retained.

use std::{num::NonZeroU32, sync::Arc};

use tracing::{debug, warn};

use crate::{
    catalog::Catalog,
    config::UpdatePolicy,
    error::CartError,
    model::{CartEntry, MenuItem},
};


#[derive(Debug, Clone)]
pub struct CartStore {
    catalog: Arc<Catalog>,
    policy: UpdatePolicy,
    entries: Vec<CartEntry>,
}


impl CartStore {
    pub fn new(catalog: Arc<Catalog>, policy: UpdatePolicy) -> Self {
        CartStore {
            catalog,
            policy,
            entries: Vec::new(),
        }
    }

    /// Adds one unit of `item`. Unavailable items, and entries already at
    /// `u32::MAX`, are rejected and the cart is left as it was.
    pub fn add_item(&mut self, item: &MenuItem) -> Result<(), CartError> {
        if !item.available {
            warn!(item = %item.id, "rejected unavailable item");
            return Err(CartError::Unavailable {
                id: item.id.clone(),
                name: item.name.clone(),
            });
        }

        match self.position(&item.id) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.quantity = entry.quantity.checked_add(1).ok_or_else(|| {
                    warn!(item = %item.id, "quantity limit reached");
                    CartError::QuantityLimit {
                        id: item.id.clone(),
                    }
                })?;
            }
            None => self.entries.push(CartEntry {
                item: item.clone(),
                quantity: 1,
            }),
        }
        debug!(item = %item.id, quantity = self.quantity_of(&item.id), "added to cart");
        Ok(())
    }

    /// Sets the quantity of an existing entry. A missing id follows the
    /// configured [`UpdatePolicy`].
    pub fn update_quantity(&mut self, id: &str, quantity: NonZeroU32) {
        let quantity = quantity.get();
        if let Some(index) = self.position(id) {
            self.entries[index].quantity = quantity;
            return;
        }

        match self.policy {
            UpdatePolicy::Ignore => debug!(item = id, "update for item not in cart ignored"),
            UpdatePolicy::Recreate => match self.catalog.get(id) {
                Some(item) if item.available => {
                    let item = item.clone();
                    debug!(item = id, quantity, "recreated cart entry");
                    self.entries.push(CartEntry { item, quantity });
                }
                _ => debug!(item = id, "cannot recreate entry for unknown or unavailable item"),
            },
        }
    }

    /// The cart screen's +/- buttons: applies `delta` and removes the entry
    /// once it would drop to zero. Unknown ids are ignored.
    pub fn step_quantity(&mut self, id: &str, delta: i64) {
        let Some(index) = self.position(id) else {
            return;
        };
        let next = i64::from(self.entries[index].quantity).saturating_add(delta);
        let next = u32::try_from(next.max(0)).unwrap_or(u32::MAX);
        match NonZeroU32::new(next) {
            Some(quantity) => self.update_quantity(id, quantity),
            None => self.remove_item(id),
        }
    }

    pub fn remove_item(&mut self, id: &str) {
        if let Some(index) = self.position(id) {
            self.entries.remove(index);
            debug!(item = id, "removed from cart");
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // Σ(price × quantity) over the current entries
    pub fn total(&self) -> u64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    // Number of units across all entries
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn quantity_of(&self, id: &str) -> u32 {
        self.position(id).map(|i| self.entries[i].quantity).unwrap_or(0)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn nz(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).expect("non-zero")
    }

    fn store(policy: UpdatePolicy) -> CartStore {
        CartStore::new(Arc::new(Catalog::canteen()), policy)
    }

    fn menu(store: &CartStore, id: &str) -> MenuItem {
        store.catalog().get(id).cloned().expect("catalog item")
    }

    #[test]
    fn worked_example() {
        let mut cart = store(UpdatePolicy::Ignore);
        let biryani = menu(&cart, "1");
        let coffee = menu(&cart, "3");

        cart.add_item(&biryani).unwrap();
        cart.add_item(&biryani).unwrap();
        assert_eq!(cart.quantity_of("1"), 2);
        assert_eq!(cart.total(), 240);

        cart.add_item(&coffee).unwrap();
        assert_eq!(cart.total(), 300);

        cart.remove_item("1");
        assert_eq!(cart.total(), 60);
        assert_eq!(cart.entries().len(), 1);
    }

    #[test]
    fn unavailable_item_leaves_cart_unchanged() {
        let mut cart = store(UpdatePolicy::Ignore);
        cart.add_item(&menu(&cart, "3")).unwrap();
        let before = cart.entries().to_vec();

        let err = cart.add_item(&menu(&cart, "5")).unwrap_err();
        assert_eq!(
            err,
            CartError::Unavailable {
                id: "5".to_string(),
                name: "Masala Dosa".to_string()
            }
        );
        assert_eq!(cart.entries(), before.as_slice());
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut cart = store(UpdatePolicy::Ignore);
        for id in ["4", "1", "6", "1"] {
            let item = menu(&cart, id);
            cart.add_item(&item).unwrap();
        }
        let ids: Vec<_> = cart.entries().iter().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["4", "1", "6"]);
    }

    #[test]
    fn removed_entry_stays_removed_when_ignoring() {
        let mut cart = store(UpdatePolicy::Ignore);
        cart.add_item(&menu(&cart, "2")).unwrap();
        cart.remove_item("2");
        cart.update_quantity("2", nz(3));
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn removed_entry_is_recreated_when_configured() {
        let mut cart = store(UpdatePolicy::Recreate);
        cart.add_item(&menu(&cart, "6")).unwrap();
        cart.add_item(&menu(&cart, "2")).unwrap();
        cart.remove_item("2");
        cart.update_quantity("2", nz(3));
        let ids: Vec<_> = cart.entries().iter().map(|e| (e.id(), e.quantity)).collect();
        assert_eq!(ids, vec![("6", 1), ("2", 3)]);
        assert_eq!(cart.total(), 90 + 450);

        // never recreates something that could not be added
        cart.update_quantity("5", nz(1));
        cart.update_quantity("99", nz(1));
        assert_eq!(cart.entries().len(), 2);
    }

    #[test]
    fn step_down_to_zero_removes() {
        let mut cart = store(UpdatePolicy::Ignore);
        cart.add_item(&menu(&cart, "3")).unwrap();
        cart.step_quantity("3", 1);
        assert_eq!(cart.quantity_of("3"), 2);
        cart.step_quantity("3", -1);
        cart.step_quantity("3", -1);
        assert!(cart.is_empty());
        cart.step_quantity("3", 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn add_at_quantity_limit_is_rejected() {
        let mut cart = store(UpdatePolicy::Ignore);
        let coffee = menu(&cart, "3");
        cart.add_item(&coffee).unwrap();
        cart.update_quantity("3", NonZeroU32::MAX);

        assert_eq!(
            cart.add_item(&coffee),
            Err(CartError::QuantityLimit { id: "3".to_string() })
        );
        assert_eq!(cart.quantity_of("3"), u32::MAX);
        assert_eq!(cart.entries().len(), 1);
    }

    #[test]
    fn extreme_steps_clamp() {
        let mut cart = store(UpdatePolicy::Ignore);
        cart.add_item(&menu(&cart, "3")).unwrap();
        cart.step_quantity("3", i64::MAX);
        assert_eq!(cart.quantity_of("3"), u32::MAX);
        cart.step_quantity("3", i64::MIN);
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = store(UpdatePolicy::Ignore);
        cart.add_item(&menu(&cart, "1")).unwrap();
        cart.add_item(&menu(&cart, "4")).unwrap();
        assert_eq!(cart.item_count(), 2);
        cart.clear();
        assert_eq!(cart.total(), 0);
        assert!(cart.entries().is_empty());
    }
}
