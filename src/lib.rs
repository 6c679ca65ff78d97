//! # Descriptor Chain
//!
//! A linear, navigable history of property descriptor snapshots for a
//! single named property of a single object.
//!
//! ## Core Concepts
//!
//! - **Snapshots**: A property's value plus its access flags at one point in time
//! - **Chains**: Ordered history with a cursor marking the current snapshot
//! - **Flags**: Independent `active`/`enabled` toggles read by whatever consumes the chain
//! - **Sources**: Collaborators that read a live descriptor for `load`
//!
//! ## Example
//!
//! ```
//! use descriptor_chain::{Chain, Descriptor, DescriptorPatch, OwnPropertySource, StatefulChain};
//! use serde_json::json;
//!
//! let mut chain: StatefulChain<_, Descriptor, _> =
//!     StatefulChain::new(json!({"a": 1}), "a", OwnPropertySource);
//!
//! // Pull the live descriptor, then record a read-only version of it
//! chain.load()?;
//! chain.add(Descriptor::new(json!(1)).with_writable(false));
//! chain.update(1, DescriptorPatch::new().value(json!(2)))?;
//!
//! assert_eq!(chain.step_forward().map(|d| &d.value), Some(&json!(2)));
//! # Ok::<(), descriptor_chain::ChainError>(())
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod shared;
pub mod source;
pub mod types;

// Re-exports
pub use chain::{Chain, Entries, MinimalChain, StatefulChain, Values};
pub use config::{ChainConfig, SetPolicy};
pub use error::{ChainError, Result};
pub use shared::SharedChain;
pub use source::{DescriptorSource, OwnPropertySource};
pub use types::{Descriptor, DescriptorPatch, Snapshot};
