//! A lunch rush: random customers fill carts and check out, the kitchen
//! prepares every placed order and the customers collect them.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use chrono::{Duration as ClockDuration, Local, NaiveTime};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    catalog::Catalog,
    config::Config,
    dashboard::{dashboard_task, Board},
    error::{CheckoutError, Error, KitchenError},
    kitchen::{process_order, Kitchen},
    model::Order,
    random::{generator_visits, CartAction},
    session::{Notice, Session},
    station::ProgressEvent,
};


// Menu minutes a customer takes to collect a ready order
const PICKUP_MINUTES: u32 = 2;

/// Wall clock of the simulation: one scaled `minute` of real time advances
/// the order clock by one minute from `base`.
#[derive(Debug, Clone, Copy)]
pub struct SimClock {
    base: NaiveTime,
    start: Instant,
    minute: Duration,
}

#[derive(Debug)]
pub struct SimulationReport {
    pub session: Session,
    pub notices: Vec<Notice>,
    pub placed: Vec<String>,
    pub prepared_items: usize,
}


impl SimClock {
    pub fn new(base: NaiveTime, minute: Duration) -> Self {
        SimClock {
            base,
            start: Instant::now(),
            minute,
        }
    }

    pub fn now(&self) -> NaiveTime {
        let minute_ms = self.minute.as_millis().max(1);
        let minutes = self.start.elapsed().as_millis() / minute_ms;
        self.base + ClockDuration::minutes(i64::try_from(minutes).unwrap_or(0))
    }
}


// Replay one customer's taps against the session
fn replay(
    session: &mut Session,
    actions: Vec<CartAction>,
    now: NaiveTime,
    notices: &mut Vec<Notice>,
) -> Option<Order> {
    for action in actions {
        match action {
            CartAction::Add(id) => notices.push(session.add_to_cart(&id)),
            CartAction::Step(id, delta) => session.cart.step_quantity(&id, delta),
            CartAction::Remove(id) => session.cart.remove_item(&id),
            CartAction::Checkout => match session.checkout(now) {
                Ok(order) => {
                    notices.push(Notice::OrderPlaced {
                        order_id: order.id.clone(),
                        total: order.total,
                    });
                    return Some(order);
                }
                Err(CheckoutError::EmptyCart) => notices.push(Notice::EmptyCart),
            },
        }
    }
    None
}

pub async fn run(config: &Config, live: bool) -> Result<SimulationReport, Error> {
    let catalog = Arc::new(Catalog::canteen());
    let mut session = Session::start(Arc::clone(&catalog), config.cart);
    let kitchen = Kitchen::open(&config.kitchen);
    let clock = SimClock::new(Local::now().time(), kitchen.minute);

    let visits = generator_visits(&catalog, config.simulation.customers, config.simulation.seed);
    let mut notices = Vec::new();
    let mut placed_orders = Vec::new();
    for visit in visits {
        debug!(customer = visit.customer, actions = visit.actions.len(), "customer at the counter");
        if let Some(order) = replay(&mut session, visit.actions, clock.now(), &mut notices) {
            placed_orders.push(order);
        }
    }
    info!(
        customers = config.simulation.customers,
        orders = placed_orders.len(),
        "lunch rush placed"
    );

    let placed: Vec<String> = placed_orders.iter().map(|o| o.id.clone()).collect();
    let board = Board::new(&placed_orders);
    let (progress_tx, progress_rx) = mpsc::unbounded_channel::<ProgressEvent>();

    let dashboard = tokio::spawn(dashboard_task(
        progress_rx,
        kitchen.clone(),
        session,
        board,
        clock,
        config.simulation.debounce(),
        live,
    ));

    let mut handles = Vec::with_capacity(placed_orders.len());
    for order in placed_orders {
        let kitchen = kitchen.clone();
        let progress_tx = progress_tx.clone();
        let pickup = kitchen.minute * PICKUP_MINUTES;
        handles.push(tokio::spawn(async move {
            let order_id = order.id.clone();
            let prepared = process_order(kitchen, order, progress_tx.clone()).await?;
            tokio::time::sleep(pickup).await;
            let _ = progress_tx.send(ProgressEvent::PickedUp { order_id });
            Ok::<usize, KitchenError>(prepared.len())
        }));
    }
    drop(progress_tx);

    let mut prepared_items = 0;
    for handle in handles {
        prepared_items += handle
            .await
            .map_err(|err| KitchenError::TaskFailed(err.to_string()))??;
    }

    let session = dashboard
        .await
        .map_err(|err| KitchenError::TaskFailed(err.to_string()))?;
    info!(prepared_items, "kitchen drained");

    Ok(SimulationReport {
        session,
        notices,
        placed,
        prepared_items,
    })
}
