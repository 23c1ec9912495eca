//! Birthday Pass Core - pass catalog, redemption state and persistence.
//!
//! This crate holds everything the `bp-cli` shell drives:
//! - the fixed five-pass [`Catalog`]
//! - the [`RedemptionController`] state machine (redeem, reset, queries)
//! - the [`FlipbookLinkController`]
//! - best-effort JSON persistence through [`store::PersistentStore`]
//! - the [`confirm`] gate that wraps mutations in a yes/no prompt
//!
//! # Example
//!
//! ```
//! use birthday_pass_core::store::MemoryBackend;
//! use birthday_pass_core::{Catalog, RedemptionController};
//!
//! let mut passes = RedemptionController::load(Catalog::default(), MemoryBackend::new());
//! passes.redeem("food-treat").unwrap();
//!
//! assert!(passes.is_redeemed("food-treat"));
//! assert!(!passes.all_redeemed());
//! ```
//!
//! # Modules
//!
//! - [`types`] - Pass IDs, passes, redemption records, flipbook links
//! - [`store`] - Storage backends and the persistent store
//! - [`confirm`] - Confirmation gate

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod clock;
pub mod confirm;
pub mod error;
pub mod flipbook;
pub mod redemption;
pub mod store;
pub mod types;

pub use catalog::{CATALOG_SIZE, Catalog};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CatalogError, PassError};
pub use flipbook::FlipbookLinkController;
pub use redemption::RedemptionController;
pub use types::*;
