//! launchdash-store — the launch record table.
//!
//! Loads the launch records CSV once and holds it as an immutable,
//! in-memory table. The `RecordStore` is `Clone` + `Send` + `Sync`
//! (backed by `Arc<[LaunchRecord]>`) and is handed to request handlers
//! as shared state rather than living in a global.
//!
//! # Schema
//!
//! Only four columns are read; anything else in the file is ignored:
//!
//! | Column | Field |
//! |---|---|
//! | `Launch Site` | `launch_site` |
//! | `Payload Mass (kg)` | `payload_mass_kg` |
//! | `class` | `outcome` |
//! | `Booster Version Category` | `booster_version_category` |

pub mod error;
pub mod rows;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::RecordStore;
