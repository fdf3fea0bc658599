use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use crate::{config::KitchenConfig, error::KitchenError, model::*, station::*};


// Collection of all station handles
#[derive(Debug, Clone)]
pub struct Kitchen {
    pub grill: StationHandle,
    pub tawa: StationHandle,
    pub drinks: StationHandle,
    pub minute: Duration,
}


impl Kitchen {
    // Spawn every station's workers; needs a running tokio runtime
    pub fn open(config: &KitchenConfig) -> Self {
        info!(minute_ms = config.minute_ms, "kitchen open");
        Kitchen {
            grill: station_channel(Station::Grill, &config.grill),
            tawa: station_channel(Station::Tawa, &config.tawa),
            drinks: station_channel(Station::Drinks, &config.drinks),
            minute: config.minute(),
        }
    }

    pub fn station(&self, station: Station) -> &StationHandle {
        match station {
            Station::Grill => &self.grill,
            Station::Tawa => &self.tawa,
            Station::Drinks => &self.drinks,
        }
    }

    pub fn stations(&self) -> [&StationHandle; 3] {
        [&self.grill, &self.tawa, &self.drinks]
    }
}


// Submit all jobs of an order and wait for completion
pub async fn process_order(
    kitchen: Kitchen,
    order: Order,
    progress_tx: mpsc::UnboundedSender<ProgressEvent>,
) -> Result<Vec<PreparedItem>, KitchenError> {
    let mut waiting: Vec<oneshot::Receiver<PreparedItem>> = Vec::new();

    for line in &order.lines {
        let handle = kitchen.station(line.station());
        for _ in 0..line.quantity {
            let (done_tx, done_rx) = oneshot::channel::<PreparedItem>();

            let job = Job {
                order_id: order.id.clone(),
                item_id: line.item_id.clone(),
                duration: line.prep_time(kitchen.minute),
                if_done: done_tx,
                progress_tx: progress_tx.clone(),
            };

            handle
                .tx
                .send(job)
                .await
                .map_err(|_| KitchenError::StationClosed(handle.name()))?;

            waiting.push(done_rx);
        }
    }
    debug!(order = %order.id, jobs = waiting.len(), "order submitted to stations");

    let expected = waiting.len();
    let mut prepared = Vec::with_capacity(expected);

    for rx in waiting {
        if let Ok(item) = rx.await {
            prepared.push(item);
        }
    }

    // A dropped job never reached a worker; the order cannot be ready
    if prepared.len() < expected {
        warn!(order = %order.id, missing = expected - prepared.len(), "jobs lost before completion");
        return Err(KitchenError::Unfinished {
            order_id: order.id,
            missing: expected - prepared.len(),
        });
    }

    let _ = progress_tx.send(ProgressEvent::OrderReady {
        order_id: order.id.clone(),
    });
    Ok(prepared)
}
