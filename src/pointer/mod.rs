//! Pointer tracking
//!
//! Keeps a short rolling history of pointer samples and answers one
//! question about it: is the pointer currently heading toward a submenu
//! rendered below its trigger?
//!
//! # Heuristic
//!
//! ```text
//! prev, recent = two newest samples
//! deltaY = recent.y - prev.y
//! deltaX = |recent.x - prev.x|
//!
//! heading toward submenu  <=>  deltaY > 0 && deltaX < 50
//! ```
//!
//! Screen coordinates grow downward, so a positive `deltaY` means the
//! pointer moved down. Some sideways drift is tolerated, near-horizontal
//! motion is not. With fewer than two samples the answer is always `false`.
//!
//! # Architecture
//!
//! ```text
//! Pointer Move Events
//!   └─> PointerTracker
//!       ├─> Append sample
//!       ├─> Evict oldest beyond capacity (3)
//!       └─> estimate_heading_toward_submenu()
//!             └─> HoverIntentController (on leave)
//! ```

mod tracker;

pub use tracker::{PointerSample, PointerTracker, TrackerConfig};

/// Number of samples retained by default
pub const DEFAULT_HISTORY_SIZE: usize = 3;

/// Horizontal movement (device independent pixels) at or beyond which
/// motion no longer counts as heading toward the submenu
pub const DEFAULT_MAX_SIDEWAYS_PX: f64 = 50.0;

/// Fewest samples the direction estimate can work with
pub const MIN_HISTORY_SIZE: usize = 2;
