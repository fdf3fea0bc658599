use std::{io::{self, Write}, pin::Pin, time::{Duration, Instant}};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::kitchen::Kitchen;
use crate::model::{Order, OrderStatus, PreparedItem};
use crate::orders::OrderLedger;
use crate::session::Session;
use crate::simulation::SimClock;
use crate::station::ProgressEvent;
use crate::status::{tracker_dots, StatusDisplay};
use crate::utils::order_total_items;


// Per-order preparation progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderProgress {
    pub order_id: String,
    pub total: usize,
    pub done: usize,
    pub by_station: [usize; 3],
}

// Progress of every order sent to the kitchen, in submission order
#[derive(Debug, Clone, Default)]
pub struct Board {
    rows: Vec<OrderProgress>,
}


impl Board {
    pub fn new(orders: &[Order]) -> Self {
        let rows = orders
            .iter()
            .map(|o| OrderProgress {
                order_id: o.id.clone(),
                total: order_total_items(o),
                done: 0,
                by_station: [0; 3],
            })
            .collect();
        Board { rows }
    }

    pub fn record(&mut self, item: &PreparedItem) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.order_id == item.order_id) {
            row.done += 1;
            row.by_station[item.station.bucket()] += 1;
        }
    }

    pub fn rows(&self) -> &[OrderProgress] {
        &self.rows
    }
}


// Step an order forward until it reaches `target`; never moves backwards
pub fn advance_to(ledger: &mut OrderLedger, order_id: &str, target: OrderStatus, clock: &SimClock) {
    loop {
        let Some(order) = ledger.get(order_id) else {
            warn!(order = order_id, "progress for unknown order");
            return;
        };
        if order.status >= target {
            return;
        }
        if let Err(err) = ledger.advance(order_id, clock.now()) {
            warn!(order = order_id, %err, "could not advance order");
            return;
        }
    }
}

// Apply one progress event to the ledger and the board
pub fn apply_event(session: &mut Session, board: &mut Board, event: ProgressEvent, clock: &SimClock) {
    match event {
        ProgressEvent::Started { order_id } => {
            advance_to(&mut session.ledger, &order_id, OrderStatus::Preparing, clock)
        }
        ProgressEvent::ItemDone(item) => board.record(&item),
        ProgressEvent::OrderReady { order_id } => {
            advance_to(&mut session.ledger, &order_id, OrderStatus::Ready, clock)
        }
        ProgressEvent::PickedUp { order_id } => {
            advance_to(&mut session.ledger, &order_id, OrderStatus::Completed, clock)
        }
    }
}


// Render the kitchen board as text
pub fn render_board(elapsed: Duration, kitchen: &Kitchen, board: &Board, ledger: &OrderLedger) -> String {
    let mut lines = vec![
        format!("Time: {:.1}s\n", elapsed.as_secs_f32()),
        "Pipeline".to_string(),
        "Station | active/workers | queue/buffer".to_string(),
        "------- | ------------- | -----------".to_string(),
    ];

    for s in kitchen.stations() {
        lines.push(format!(
            "{:>7} | {:>2}/{:<11} | {:>3}/{:<6}",
            s.name(),
            s.active(),
            s.workers,
            s.queue_len(),
            s.buffer
        ));
    }

    lines.push(String::new());
    lines.push("Orders".to_string());
    lines.push("id     | status           | track | done/total | grill | tawa | drinks".to_string());
    lines.push("------ | ---------------- | ----- | ---------- | ----- | ---- | ------".to_string());

    for row in board.rows() {
        let status = ledger.get(&row.order_id).map(|o| o.status);
        let label = status.map(|s| StatusDisplay::of(s).label).unwrap_or("?");
        let track = status.map(tracker_dots).unwrap_or_default();
        lines.push(format!(
            "{:<6} | {:<16} | {:<5} | {:>4}/{:<5} | {:>5} | {:>4} | {:>6}",
            row.order_id,
            label,
            track,
            row.done,
            row.total,
            row.by_station[0],
            row.by_station[1],
            row.by_station[2],
        ));
    }

    lines.join("\n")
}

// Move cursor to top-left, clear and draw
pub fn redraw_screen<W: Write>(
    out: &mut W,
    start: Instant,
    kitchen: &Kitchen,
    board: &Board,
    ledger: &OrderLedger,
) {
    let _ = write!(out, "\x1B[H\x1B[0J");
    let _ = writeln!(out, "{}", render_board(start.elapsed(), kitchen, board, ledger));
    let _ = out.flush();
}


/// Consumes progress until every sender is gone, moving orders through
/// their statuses. With `live` set the board is redrawn, debounced, as
/// events arrive. Returns the session with its updated ledger.
pub async fn dashboard_task(
    progress_rx: mpsc::UnboundedReceiver<ProgressEvent>,
    kitchen: Kitchen,
    session: Session,
    board: Board,
    clock: SimClock,
    debounce: Duration,
    live: bool,
) -> Session {
    let mut stdout = io::stdout();
    run_dashboard(
        progress_rx,
        kitchen,
        session,
        board,
        clock,
        debounce,
        live.then_some(&mut stdout),
    )
    .await
}

// The dashboard loop, drawing to `screen` when one is given
async fn run_dashboard<W: Write>(
    mut progress_rx: mpsc::UnboundedReceiver<ProgressEvent>,
    kitchen: Kitchen,
    mut session: Session,
    mut board: Board,
    clock: SimClock,
    debounce: Duration,
    mut screen: Option<&mut W>,
) -> Session {
    let start = Instant::now();

    // Render once at startup so the board shows before the first event
    if let Some(out) = screen.as_deref_mut() {
        redraw_screen(out, start, &kitchen, &board, &session.ledger);
    }

    // "dirty flag": data changed since last render
    let mut dirty = false;

    // Debounce timer: coalesce many events into one redraw
    let mut pending: Option<Pin<Box<tokio::time::Sleep>>> = None;

    loop {
        tokio::select! {
            ev = progress_rx.recv() => {
                match ev {
                    Some(event) => {
                        apply_event(&mut session, &mut board, event, &clock);
                        dirty = true;

                        // Start debounce if not already running
                        if screen.is_some() && pending.is_none() {
                            pending = Some(Box::pin(tokio::time::sleep(debounce)));
                        }
                    }
                    None => {
                        // Channel closed; do a final render if needed and exit
                        if let (Some(out), true) = (screen.as_deref_mut(), dirty) {
                            redraw_screen(out, start, &kitchen, &board, &session.ledger);
                        }
                        break;
                    }
                }
            }

            // Debounce fires: redraw once if anything changed
            _ = async {
                if let Some(s) = &mut pending {
                    s.as_mut().await;
                }
            }, if pending.is_some() => {
                if let (Some(out), true) = (screen.as_deref_mut(), dirty) {
                    redraw_screen(out, start, &kitchen, &board, &session.ledger);
                    dirty = false;
                }
                pending = None;
            }
        }
    }

    debug!(orders = board.rows().len(), "dashboard finished");
    session
}
