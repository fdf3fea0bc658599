use tokio::{spawn, sync::{Mutex, mpsc, oneshot}};
use std::{sync::{atomic::{AtomicUsize, Ordering}, Arc}, time::Duration};
use tracing::{debug, trace};

use crate::config::StationConfig;
use crate::model::{PreparedItem, Station};


// Events sent from workers and order tasks to the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    // A worker picked up a unit of this order
    Started { order_id: String },
    ItemDone(PreparedItem),
    // Every unit of the order is done
    OrderReady { order_id: String },
    PickedUp { order_id: String },
}

// One unit of a menu item to prepare
#[derive(Debug)]
pub struct Job {
    pub order_id: String,
    pub item_id: String,
    pub duration: Duration,
    pub if_done: oneshot::Sender<PreparedItem>,
    pub progress_tx: mpsc::UnboundedSender<ProgressEvent>,
}

// Handle to a kitchen station
#[derive(Debug, Clone)]
pub struct StationHandle {
    pub station: Station,
    pub tx: mpsc::Sender<Job>,
    pub buffer: usize,
    pub workers: usize,
    pub active: Arc<AtomicUsize>,
}


impl StationHandle {
    pub fn name(&self) -> &'static str {
        self.station.name()
    }

    // Current queue length
    pub fn queue_len(&self) -> usize {
        self.buffer.saturating_sub(self.tx.capacity())
    }

    // Number of active workers
    pub fn active(&self) -> usize {
        self.active.load(Ordering::Relaxed)
    }
}


// Worker task that processes a single job
async fn worker(station: Station, active: Arc<AtomicUsize>, job: Job) {
    active.fetch_add(1, Ordering::Relaxed);
    let _ = job.progress_tx.send(ProgressEvent::Started {
        order_id: job.order_id.clone(),
    });
    trace!(station = station.name(), order = %job.order_id, item = %job.item_id, "job started");

    tokio::time::sleep(job.duration).await;

    let prepared_item = PreparedItem {
        order_id: job.order_id,
        item_id: job.item_id,
        station,
    };
    let _ = job.progress_tx.send(ProgressEvent::ItemDone(prepared_item.clone()));
    let _ = job.if_done.send(prepared_item);
    active.fetch_sub(1, Ordering::Relaxed);
}


// Create a station with a bounded queue and worker pool
pub fn station_channel(station: Station, config: &StationConfig) -> StationHandle {
    let StationConfig { workers, buffer } = *config;
    let (tx, rx) = mpsc::channel::<Job>(buffer);
    let rx = Arc::new(Mutex::new(rx));
    let active = Arc::new(AtomicUsize::new(0));

    for _ in 0..workers {
        let rx = Arc::clone(&rx);
        let active_clone = Arc::clone(&active);
        spawn(async move {
            loop {
                let job = {
                    let mut rx = rx.lock().await;
                    rx.recv().await
                };
                match job {
                    Some(job) => worker(station, active_clone.clone(), job).await,
                    None => break,
                }
            }
            debug!(station = station.name(), "station worker stopped");
        });
    }

    StationHandle {
        station,
        tx,
        buffer,
        workers,
        active,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn worker_reports_start_and_done() {
        let handle = station_channel(Station::Drinks, &StationConfig { workers: 1, buffer: 2 });
        let (progress_tx, mut progress_rx) = mpsc::unbounded_channel();
        let (done_tx, done_rx) = oneshot::channel();

        handle
            .tx
            .send(Job {
                order_id: "ORD001".to_string(),
                item_id: "3".to_string(),
                duration: Duration::from_millis(1),
                if_done: done_tx,
                progress_tx,
            })
            .await
            .expect("station open");

        let prepared = done_rx.await.expect("job finished");
        assert_eq!(prepared.station, Station::Drinks);
        assert_eq!(
            progress_rx.recv().await,
            Some(ProgressEvent::Started {
                order_id: "ORD001".to_string()
            })
        );
        assert_eq!(progress_rx.recv().await, Some(ProgressEvent::ItemDone(prepared)));
    }
}
