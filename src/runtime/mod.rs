//! Async sidebar driver
//!
//! Runs a [`Sidebar`] on a single tokio task so that pointer, hover,
//! leave and dismissal-timer notifications are handled strictly one at a
//! time, in arrival order.
//!
//! # Architecture
//!
//! ```text
//! SidebarHandle ──mpsc(MenuEvent)──> SidebarRuntime loop
//!                                      ├─> select! { dismissal deadline, next event }
//!                                      ├─> Sidebar::poll / Sidebar::dispatch
//!                                      └─> publish MenuSnapshot
//! SidebarHandle <──watch(MenuSnapshot)─┘
//! ```
//!
//! The pending dismissal is re-read from the controller on every loop
//! iteration, so a cancelled or superseded dismissal simply stops being
//! awaited. When a deadline and an event are ready together the dismissal
//! fires first.

mod error;

pub use error::{Result, RuntimeError};

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::menu::MenuSnapshot;
use crate::nav::{MenuEvent, Sidebar};

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Bound of the event queue between handles and the loop
    #[serde(default = "default_event_queue_capacity")]
    pub event_queue_capacity: usize,
}

fn default_event_queue_capacity() -> usize {
    64
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_queue_capacity: default_event_queue_capacity(),
        }
    }
}

/// Event loop owning the sidebar
pub struct SidebarRuntime {
    sidebar: Sidebar,
    events_rx: mpsc::Receiver<MenuEvent>,
    snapshot_tx: watch::Sender<MenuSnapshot>,
}

/// Cloneable handle for feeding events and observing the read model
#[derive(Clone)]
pub struct SidebarHandle {
    events_tx: mpsc::Sender<MenuEvent>,
    snapshot_rx: watch::Receiver<MenuSnapshot>,
}

impl SidebarRuntime {
    /// Create the loop and its first handle
    pub fn new(sidebar: Sidebar, config: &RuntimeConfig) -> (Self, SidebarHandle) {
        let (events_tx, events_rx) = mpsc::channel(config.event_queue_capacity.max(1));
        let (snapshot_tx, snapshot_rx) = watch::channel(sidebar.snapshot());

        let runtime = Self {
            sidebar,
            events_rx,
            snapshot_tx,
        };
        let handle = SidebarHandle {
            events_tx,
            snapshot_rx,
        };
        (runtime, handle)
    }

    /// Spawn the loop on the current tokio runtime
    ///
    /// The task ends once every handle is dropped and yields the sidebar
    /// back for inspection.
    pub fn spawn(sidebar: Sidebar, config: &RuntimeConfig) -> (SidebarHandle, JoinHandle<Sidebar>) {
        let (runtime, handle) = Self::new(sidebar, config);
        (handle, tokio::spawn(runtime.run()))
    }

    /// Run until every handle is dropped
    pub async fn run(mut self) -> Sidebar {
        info!("Sidebar runtime started");

        loop {
            let deadline = self.sidebar.next_deadline();

            tokio::select! {
                biased;

                _ = wait_until(deadline) => {
                    if let Some(dismissal) = self.sidebar.poll(Instant::now().into_std()) {
                        debug!(
                            "Dismissed '{}' ({}), cleared {:?}",
                            dismissal.section, dismissal.delay, dismissal.cleared_item
                        );
                    }
                }
                event = self.events_rx.recv() => match event {
                    Some(event) => self.sidebar.dispatch(&event, Instant::now().into_std()),
                    None => break,
                }
            }

            self.publish();
        }

        info!("Sidebar runtime stopped");
        self.sidebar
    }

    fn publish(&self) {
        let next = self.sidebar.snapshot();
        self.snapshot_tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

/// Sleep until `deadline`, or forever when there is none
async fn wait_until(deadline: Option<std::time::Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

impl SidebarHandle {
    /// Queue an event, waiting for room
    pub async fn send(&self, event: MenuEvent) -> Result<()> {
        self.events_tx
            .send(event)
            .await
            .map_err(|_| RuntimeError::Closed)
    }

    /// Queue an event without waiting
    pub fn try_send(&self, event: MenuEvent) -> Result<()> {
        self.events_tx.try_send(event).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => RuntimeError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => RuntimeError::Closed,
        })
    }

    /// Latest published read model
    pub fn snapshot(&self) -> MenuSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Wait for the next published change
    pub async fn changed(&mut self) -> Result<MenuSnapshot> {
        self.snapshot_rx
            .changed()
            .await
            .map_err(|_| RuntimeError::Closed)?;
        Ok(self.snapshot_rx.borrow_and_update().clone())
    }

    /// Wait until the read model satisfies `predicate`
    pub async fn wait_for<F>(&mut self, mut predicate: F) -> Result<MenuSnapshot>
    where
        F: FnMut(&MenuSnapshot) -> bool,
    {
        loop {
            {
                let current = self.snapshot_rx.borrow_and_update();
                if predicate(&current) {
                    return Ok(current.clone());
                }
            }
            self.snapshot_rx
                .changed()
                .await
                .map_err(|_| RuntimeError::Closed)?;
        }
    }

    /// Independent read-model subscription
    pub fn subscribe(&self) -> watch::Receiver<MenuSnapshot> {
        self.snapshot_rx.clone()
    }
}
