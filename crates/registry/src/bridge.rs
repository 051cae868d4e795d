use std::sync::Arc;

use implbridge_primitives::{ImplementationDescriptor, ImplementorSet, LibraryId};
use parking_lot::{Mutex, ReentrantMutex};

use crate::{BridgeConfig, BridgeError, DuplicateLibrary, ImplementorSink};

/// What happened to one published payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
	/// Handed to the attached consumer.
	Delivered,
	/// Parked in the staging slot until a consumer attaches.
	Staged,
}

/// Observable bridge state. `HasConsumer` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
	NoConsumer,
	HasConsumer,
}

enum Slot {
	NoConsumer(ImplementorSet),
	HasConsumer(Arc<dyn ImplementorSink>),
}

/// Hand-off point between producers and the single page consumer.
///
/// Every `publish` is handled exactly once: staged while no consumer is
/// attached, delivered immediately afterwards. Deliveries are serialized by a
/// per-bridge turn lock, so the staged batch always reaches the consumer before
/// any later publish. The lock is reentrant: a consumer may publish into the
/// same bridge from inside [`ImplementorSink::register`].
pub struct Bridge {
	config: BridgeConfig,
	turn: ReentrantMutex<()>,
	slot: Mutex<Slot>,
}

impl Default for Bridge {
	fn default() -> Self {
		Self::new()
	}
}

impl Bridge {
	pub fn new() -> Self {
		Self::with_config(BridgeConfig::default())
	}

	pub fn with_config(config: BridgeConfig) -> Self {
		let staged = ImplementorSet::with_capacity(config.staging_capacity);
		Self {
			config,
			turn: ReentrantMutex::new(()),
			slot: Mutex::new(Slot::NoConsumer(staged)),
		}
	}

	pub fn config(&self) -> &BridgeConfig {
		&self.config
	}

	/// Publishes one library's descriptors.
	///
	/// Library identifiers are expected to be unique per bridge. A repeat
	/// while staging replaces the earlier descriptors in place.
	pub fn publish(&self, library: LibraryId, descriptors: Vec<ImplementationDescriptor>) -> PublishOutcome {
		let _turn = self.turn.lock();
		let sink = {
			let mut slot = self.slot.lock();
			match &mut *slot {
				Slot::HasConsumer(sink) => Arc::clone(sink),
				Slot::NoConsumer(staged) => {
					let count = descriptors.len();
					if staged.insert(library.clone(), descriptors).is_some() {
						self.report_duplicate(&library);
					}
					tracing::debug!(library = %library, descriptors = count, staged = staged.len(), "staged implementors");
					return PublishOutcome::Staged;
				}
			}
		};

		tracing::debug!(library = %library, descriptors = descriptors.len(), "delivering implementors");
		sink.register(ImplementorSet::single(library, descriptors));
		PublishOutcome::Delivered
	}

	/// Attaches the consumer, flushing anything staged to it in one call.
	pub fn attach_consumer(&self, sink: impl ImplementorSink + 'static) -> Result<(), BridgeError> {
		self.attach_shared(Arc::new(sink))
	}

	/// [`Bridge::attach_consumer`] for a consumer the caller keeps a handle to.
	pub fn attach_shared(&self, sink: Arc<dyn ImplementorSink>) -> Result<(), BridgeError> {
		let _turn = self.turn.lock();
		let staged = {
			let mut slot = self.slot.lock();
			let staged = match &mut *slot {
				Slot::HasConsumer(_) => {
					tracing::warn!("rejected second consumer attachment");
					return Err(BridgeError::ConsumerAlreadyAttached);
				}
				Slot::NoConsumer(staged) => std::mem::take(staged),
			};
			*slot = Slot::HasConsumer(Arc::clone(&sink));
			staged
		};

		if staged.is_empty() {
			tracing::debug!("consumer attached, nothing staged");
			return Ok(());
		}

		tracing::debug!(libraries = staged.len(), descriptors = staged.descriptor_count(), "flushing staged implementors");
		sink.register(staged);
		Ok(())
	}

	pub fn state(&self) -> BridgeState {
		match &*self.slot.lock() {
			Slot::NoConsumer(_) => BridgeState::NoConsumer,
			Slot::HasConsumer(_) => BridgeState::HasConsumer,
		}
	}

	/// Staged library identifiers in publish order. Always empty once a
	/// consumer is attached.
	pub fn staged_libraries(&self) -> Vec<LibraryId> {
		match &*self.slot.lock() {
			Slot::NoConsumer(staged) => staged.libraries().cloned().collect(),
			Slot::HasConsumer(_) => Vec::new(),
		}
	}

	pub fn staged_len(&self) -> usize {
		match &*self.slot.lock() {
			Slot::NoConsumer(staged) => staged.len(),
			Slot::HasConsumer(_) => 0,
		}
	}

	fn report_duplicate(&self, library: &LibraryId) {
		match self.config.duplicate_library {
			DuplicateLibrary::Warn => {
				tracing::warn!(library = %library, "library published twice before a consumer attached; keeping the later descriptors");
			}
			DuplicateLibrary::Ignore => {}
		}
	}
}

impl std::fmt::Debug for Bridge {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Bridge")
			.field("state", &self.state())
			.field("staged", &self.staged_len())
			.finish_non_exhaustive()
	}
}
