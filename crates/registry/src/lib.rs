//! Deferred registry bridge.
//!
//! Producers publish implementor data for one library each, in whatever order
//! they happen to run. The trait page attaches a single consumer at some point
//! during startup. The [`Bridge`] stages everything published before that
//! point, flushes it to the consumer in one batch on attach, and delivers
//! everything published afterwards immediately.
//!
//! ```
//! use std::sync::Arc;
//!
//! use implbridge_registry::{Bridge, ImplementorCollector, PublishOutcome};
//! use implbridge_registry::primitives::{ImplementationDescriptor, LibraryId};
//!
//! let bridge = Bridge::new();
//! let early = bridge.publish(LibraryId::new("hashbrown")?, vec![ImplementationDescriptor::explicit("impl FusedIterator for Iter", ["hashbrown::map::Iter"])]);
//! assert_eq!(early, PublishOutcome::Staged);
//!
//! let page = Arc::new(ImplementorCollector::new());
//! bridge.attach_shared(page.clone())?;
//! assert_eq!(page.deliveries(), 1);
//!
//! let late = bridge.publish(LibraryId::new("smallvec")?, Vec::new());
//! assert_eq!(late, PublishOutcome::Delivered);
//! assert_eq!(page.snapshot().len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod bridge;
mod collector;
pub mod config;
mod error;
mod sink;

pub use bridge::{Bridge, BridgeState, PublishOutcome};
pub use collector::ImplementorCollector;
pub use config::{BridgeConfig, ConfigError, DuplicateLibrary};
pub use error::BridgeError;
pub use implbridge_primitives as primitives;
pub use sink::ImplementorSink;
