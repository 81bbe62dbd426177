//! Scenario replay
//!
//! A scenario is a TOML list of timestamped [`MenuEvent`]s. Replaying it
//! drives a [`Sidebar`] on a synthetic clock so hover-intent behavior can be
//! reproduced exactly, independent of wall time.
//!
//! ```toml
//! name = "diagonal approach"
//!
//! [[event]]
//! at_ms = 0
//! event = { kind = "item_enter", section = "web_design", item = "Utility UI" }
//! ```
//!
//! Ordering rule: a dismissal whose deadline is at or before an event's
//! timestamp fires before that event is dispatched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

use crate::menu::{Dismissal, MenuSnapshot, SectionId};
use crate::nav::{MenuEvent, NavConfig, Sidebar};

/// Result type for scenario loading
pub type Result<T> = std::result::Result<T, ScenarioError>;

/// Scenario loading errors
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// File could not be read
    #[error("Failed to read scenario {path}: {source}")]
    Io {
        /// Scenario path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML
    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),

    /// Event references a section missing from the layout
    #[error("Event {index} references unknown section '{section}'")]
    UnknownSection {
        /// Event position in the file
        index: usize,
        /// Section named by the event
        section: SectionId,
    },

    /// Timestamps go backwards
    #[error("Event {index} at {at_ms}ms is earlier than the previous event at {previous_ms}ms")]
    OutOfOrder {
        /// Event position in the file
        index: usize,
        /// Event timestamp
        at_ms: u64,
        /// Previous timestamp
        previous_ms: u64,
    },
}

/// One event at a point on the scenario clock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    /// Milliseconds from scenario start
    pub at_ms: u64,
    /// Event delivered at that time
    pub event: MenuEvent,
}

/// Timestamped event script
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Optional label
    #[serde(default)]
    pub name: Option<String>,
    /// Events in time order
    #[serde(default, rename = "event")]
    pub events: Vec<ScheduledEvent>,
}

impl Scenario {
    /// Load a scenario file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scenario = Self::parse(&contents)?;
        debug!(
            "Loaded scenario {:?} with {} events from {:?}",
            scenario.name,
            scenario.events.len(),
            path
        );
        Ok(scenario)
    }

    /// Parse scenario TOML
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Check timestamps and section references against a layout
    pub fn validate(&self, nav: &NavConfig) -> Result<()> {
        let mut previous_ms = 0;
        for (index, scheduled) in self.events.iter().enumerate() {
            if scheduled.at_ms < previous_ms {
                return Err(ScenarioError::OutOfOrder {
                    index,
                    at_ms: scheduled.at_ms,
                    previous_ms,
                });
            }
            previous_ms = scheduled.at_ms;

            if let Some(section) = scheduled.event.section() {
                if nav.section(section).is_none() {
                    return Err(ScenarioError::UnknownSection {
                        index,
                        section: section.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Scenario length (last event timestamp)
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.events.last().map_or(0, |e| e.at_ms))
    }
}

/// What produced a timeline entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimelineCause {
    /// A scenario event was dispatched
    Event {
        /// The event
        event: MenuEvent,
    },
    /// A delayed dismissal fired
    Dismissal {
        /// The dismissal
        dismissal: Dismissal,
    },
}

impl fmt::Display for TimelineCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Event { event } => match event.section() {
                Some(section) => write!(f, "{} [{}]", event.name(), section),
                None => write!(f, "{}", event.name()),
            },
            Self::Dismissal { dismissal } => {
                write!(f, "dismissal [{}] ({})", dismissal.section, dismissal.delay)
            }
        }
    }
}

/// A state change observed during replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    /// Scenario clock time
    pub at_ms: u64,
    /// Trigger
    pub cause: TimelineCause,
    /// State after the change
    pub snapshot: MenuSnapshot,
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6}ms  {:<40}  {}",
            self.at_ms,
            self.cause.to_string(),
            self.snapshot
        )
    }
}

/// Replay a scenario against a sidebar on a synthetic clock
///
/// Returns one entry per observable state change. A dismissal still
/// pending after the last event is fired at its deadline.
pub fn replay(sidebar: &mut Sidebar, scenario: &Scenario) -> Vec<TimelineEntry> {
    let last = sidebar.snapshot();
    let mut replay = Replay {
        sidebar,
        start: Instant::now(),
        last,
        timeline: Vec::new(),
    };

    for scheduled in &scenario.events {
        let now = replay.at(scheduled.at_ms);
        replay.fire_due(now);
        replay.sidebar.dispatch(&scheduled.event, now);
        replay.record(
            scheduled.at_ms,
            TimelineCause::Event {
                event: scheduled.event.clone(),
            },
        );
    }

    if let Some(deadline) = replay.sidebar.next_deadline() {
        replay.fire_due(deadline);
    }

    info!(
        "Replayed {} events, {} state changes",
        scenario.events.len(),
        replay.timeline.len()
    );
    replay.timeline
}

struct Replay<'a> {
    sidebar: &'a mut Sidebar,
    start: Instant,
    last: MenuSnapshot,
    timeline: Vec<TimelineEntry>,
}

impl Replay<'_> {
    fn at(&self, at_ms: u64) -> Instant {
        self.start + Duration::from_millis(at_ms)
    }

    fn fire_due(&mut self, now: Instant) {
        while let Some(deadline) = self.sidebar.next_deadline().filter(|d| *d <= now) {
            let Some(dismissal) = self.sidebar.poll(deadline) else {
                break;
            };
            let at_ms = deadline.duration_since(self.start).as_millis() as u64;
            self.record(at_ms, TimelineCause::Dismissal { dismissal });
        }
    }

    fn record(&mut self, at_ms: u64, cause: TimelineCause) {
        let snapshot = self.sidebar.snapshot();
        if self.last == snapshot {
            return;
        }
        debug!("{}ms: {}", at_ms, cause);
        self.last = snapshot.clone();
        self.timeline.push(TimelineEntry {
            at_ms,
            cause,
            snapshot,
        });
    }
}
