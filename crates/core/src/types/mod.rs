//! Domain types for Birthday Pass.
//!
//! Passes, redemption records and the flipbook link. These types carry no
//! behavior beyond validation and conversions.

pub mod link;
pub mod pass;
pub mod redemption;

pub use link::FlipbookLink;
pub use pass::{Pass, PassId, PassStatus};
pub use redemption::{RedemptionRecord, RedemptionState};
