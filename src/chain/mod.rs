//! Descriptor chains.
//!
//! A chain is the linear history of snapshots for one property of one
//! object. [`StatefulChain`] is the default implementation; [`MinimalChain`]
//! drops the `active`/`enabled` flags for callers that only need ordered
//! storage with a cursor.

mod contract;
mod minimal;
mod stateful;

pub use contract::{Chain, Entries, Values};
pub use minimal::MinimalChain;
pub use stateful::StatefulChain;
