use chrono::{Duration as ClockDuration, NaiveTime};
use tracing::info;

use crate::{
    catalog::Catalog,
    error::{CheckoutError, LedgerError},
    model::{CartEntry, Order, OrderLine, OrderStatus},
};


const ORDER_PREFIX: &str = "ORD";

// Placed orders, oldest first
#[derive(Debug, Clone)]
pub struct OrderLedger {
    orders: Vec<Order>,
    next_seq: u32,
}


fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

fn mock_line(catalog: &Catalog, id: &str, quantity: u32) -> Option<OrderLine> {
    catalog.get(id).map(|item| {
        OrderLine::from_entry(&CartEntry {
            item: item.clone(),
            quantity,
        })
    })
}

fn mock_order(
    id: &str,
    lines: Vec<OrderLine>,
    status: OrderStatus,
    order_time: NaiveTime,
    estimated_time: Option<NaiveTime>,
    pickup_time: Option<NaiveTime>,
) -> Order {
    Order {
        id: id.to_string(),
        total: lines.iter().map(OrderLine::line_total).sum(),
        lines,
        status,
        order_time,
        estimated_time,
        pickup_time,
    }
}

// Longest single preparation among the lines
fn longest_prep_minutes(lines: &[OrderLine]) -> u32 {
    lines
        .iter()
        .map(|l| l.preparation_time_minutes)
        .max()
        .unwrap_or(0)
}


impl OrderLedger {
    pub fn new() -> Self {
        OrderLedger {
            orders: Vec::new(),
            next_seq: 1,
        }
    }

    // The three orders a fresh install shows
    pub fn with_mock_orders(catalog: &Catalog) -> Self {
        let lines = |wanted: &[(&str, u32)]| -> Vec<OrderLine> {
            wanted.iter()
                .filter_map(|(id, qty)| mock_line(catalog, id, *qty))
                .collect()
        };

        let orders = vec![
            mock_order(
                "ORD001",
                lines(&[("1", 1), ("3", 2)]),
                OrderStatus::Preparing,
                at(14, 30),
                Some(at(14, 50)),
                None,
            ),
            mock_order(
                "ORD002",
                lines(&[("2", 1), ("6", 1)]),
                OrderStatus::Ready,
                at(13, 15),
                None,
                Some(at(13, 35)),
            ),
            mock_order(
                "ORD003",
                lines(&[("4", 2)]),
                OrderStatus::Completed,
                at(12, 30),
                None,
                Some(at(12, 50)),
            ),
        ];

        OrderLedger {
            next_seq: orders.len() as u32 + 1,
            orders,
        }
    }

    /// Builds an order from cart entries and records it. Prices and
    /// quantities are locked at this point; the estimate is the placement
    /// time plus the longest preparation among the lines.
    pub fn place_order(
        &mut self,
        entries: &[CartEntry],
        order_time: NaiveTime,
    ) -> Result<Order, CheckoutError> {
        if entries.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let lines: Vec<OrderLine> = entries.iter().map(OrderLine::from_entry).collect();
        let prep = longest_prep_minutes(&lines);
        let order = Order {
            id: format!("{ORDER_PREFIX}{:03}", self.next_seq),
            total: lines.iter().map(OrderLine::line_total).sum(),
            status: OrderStatus::Placed,
            order_time,
            estimated_time: Some(order_time + ClockDuration::minutes(i64::from(prep))),
            pickup_time: None,
            lines,
        };
        self.next_seq += 1;

        info!(order = %order.id, total = order.total, lines = order.lines.len(), "order placed");
        self.orders.push(order.clone());
        Ok(order)
    }

    /// Moves an order one step along placed → preparing → ready → completed.
    /// Reaching `ready` stamps the pickup time.
    pub fn advance(&mut self, id: &str, now: NaiveTime) -> Result<OrderStatus, LedgerError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| LedgerError::UnknownOrder(id.to_string()))?;

        let next = order
            .status
            .next()
            .ok_or_else(|| LedgerError::AlreadyCompleted(id.to_string()))?;
        if next == OrderStatus::Ready {
            order.pickup_time = Some(now);
        }
        order.status = next;

        info!(order = id, status = %next, "order status changed");
        Ok(next)
    }

    pub fn get(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    // Placed, preparing or ready
    pub fn active(&self) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.status.is_active()).collect()
    }

    pub fn history(&self) -> Vec<&Order> {
        self.orders.iter().filter(|o| !o.status.is_active()).collect()
    }

    pub fn amount_spent(&self) -> u64 {
        self.orders.iter().map(|o| o.total).sum()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderLedger {
    fn default() -> Self {
        OrderLedger::new()
    }
}


// Clock label used on order cards, e.g. "2:30 PM"
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(catalog: &Catalog, id: &str, quantity: u32) -> CartEntry {
        CartEntry {
            item: catalog.get(id).cloned().expect("catalog item"),
            quantity,
        }
    }

    #[test]
    fn mock_orders_match_their_totals() {
        let ledger = OrderLedger::with_mock_orders(&Catalog::canteen());
        let summary: Vec<_> = ledger
            .orders()
            .iter()
            .map(|o| (o.id.as_str(), o.total, o.status))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("ORD001", 240, OrderStatus::Preparing),
                ("ORD002", 240, OrderStatus::Ready),
                ("ORD003", 360, OrderStatus::Completed),
            ]
        );
        assert_eq!(
            ledger.get("ORD001").map(Order::items),
            Some(vec!["Veg Biryani x1".to_string(), "Cold Coffee x2".to_string()])
        );
        assert_eq!(ledger.active().len(), 2);
        assert_eq!(ledger.history().len(), 1);
    }

    #[test]
    fn place_order_locks_lines_and_continues_numbering() {
        let catalog = Catalog::canteen();
        let mut ledger = OrderLedger::with_mock_orders(&catalog);
        let entries = vec![entry(&catalog, "4", 1), entry(&catalog, "6", 2)];

        let order = ledger.place_order(&entries, at(11, 5)).unwrap();
        assert_eq!(order.id, "ORD004");
        assert_eq!(order.total, 180 + 180);
        assert_eq!(order.status, OrderStatus::Placed);
        assert_eq!(order.estimated_time, Some(at(11, 17)));
        assert_eq!(order.items(), vec!["Chicken Burger x1", "Chocolate Shake x2"]);
        assert_eq!(ledger.len(), 4);
    }

    #[test]
    fn empty_entries_are_rejected() {
        let mut ledger = OrderLedger::new();
        assert_eq!(ledger.place_order(&[], at(9, 0)), Err(CheckoutError::EmptyCart));
        assert!(ledger.is_empty());
    }

    #[test]
    fn advance_walks_the_lifecycle() {
        let catalog = Catalog::canteen();
        let mut ledger = OrderLedger::new();
        let id = ledger
            .place_order(&[entry(&catalog, "3", 1)], at(10, 0))
            .unwrap()
            .id;
        assert_eq!(id, "ORD001");

        assert_eq!(ledger.advance(&id, at(10, 1)), Ok(OrderStatus::Preparing));
        assert_eq!(ledger.advance(&id, at(10, 6)), Ok(OrderStatus::Ready));
        assert_eq!(ledger.get(&id).and_then(|o| o.pickup_time), Some(at(10, 6)));
        assert_eq!(ledger.advance(&id, at(10, 9)), Ok(OrderStatus::Completed));
        assert_eq!(
            ledger.advance(&id, at(10, 9)),
            Err(LedgerError::AlreadyCompleted(id.clone()))
        );
        assert_eq!(
            ledger.advance("ORD999", at(10, 9)),
            Err(LedgerError::UnknownOrder("ORD999".to_string()))
        );
    }

    #[test]
    fn times_render_like_the_order_cards() {
        assert_eq!(format_time(at(14, 30)), "2:30 PM");
        assert_eq!(format_time(at(0, 5)), "12:05 AM");
    }
}
