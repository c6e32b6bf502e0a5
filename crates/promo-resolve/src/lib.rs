//! Resolution engine for recovered card configuration tables.
//!
//! Given one immutable [`promo_model::RecoveredTables`] snapshot, the engine
//! answers two questions:
//!
//! - **Administrative view**: every card joined with its partner and first
//!   display rule, for dashboard tables.
//! - **Eligible cards**: which cards a viewer in a given segment may see,
//!   ordered by priority.
//!
//! The [`session`] module owns the snapshot lifecycle between fetches.

pub mod engine;
pub mod session;
pub mod view;

pub use engine::ResolutionEngine;
pub use session::{LoadStatus, LoadTicket, SnapshotStore};
pub use view::{
    CardPreview, DEFAULT_PRIORITY, DenormalizedRow, INACTIVE_STATUS, UNKNOWN_PARTNER,
    WILDCARD_SEGMENT,
};
