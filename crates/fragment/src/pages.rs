use std::sync::Arc;

use implbridge_primitives::{LibraryId, TraitPath};
use implbridge_registry::{Bridge, BridgeConfig, BridgeError, ImplementorSink, PublishOutcome};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::Fragment;

/// One [`Bridge`] per trait page, created on first use by either side.
#[derive(Debug, Default)]
pub struct PageRegistry {
	config: BridgeConfig,
	pages: Mutex<FxHashMap<TraitPath, Arc<Bridge>>>,
}

impl PageRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry whose bridges all use `config`.
	pub fn with_config(config: BridgeConfig) -> Self {
		Self {
			config,
			pages: Mutex::default(),
		}
	}

	/// The bridge for `trait_path`, created if this is the first mention.
	pub fn bridge(&self, trait_path: &TraitPath) -> Arc<Bridge> {
		let mut pages = self.pages.lock();
		if let Some(bridge) = pages.get(trait_path) {
			return Arc::clone(bridge);
		}
		tracing::debug!(page = %trait_path, "opening trait page bridge");
		let bridge = Arc::new(Bridge::with_config(self.config.clone()));
		pages.insert(trait_path.clone(), Arc::clone(&bridge));
		bridge
	}

	/// Publishes a fragment to its trait page.
	pub fn publish(&self, fragment: Fragment) -> Vec<(LibraryId, PublishOutcome)> {
		let bridge = self.bridge(fragment.trait_path());
		fragment.publish_into(&bridge)
	}

	/// Attaches the consumer for one trait page.
	pub fn attach(&self, trait_path: &TraitPath, sink: Arc<dyn ImplementorSink>) -> Result<(), BridgeError> {
		self.bridge(trait_path).attach_shared(sink)
	}

	/// Known trait pages, sorted by path.
	pub fn pages(&self) -> Vec<TraitPath> {
		let mut pages: Vec<_> = self.pages.lock().keys().cloned().collect();
		pages.sort();
		pages
	}
}
