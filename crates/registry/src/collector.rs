use implbridge_primitives::{ImplementationDescriptor, ImplementorSet, LibraryId};
use parking_lot::Mutex;

use crate::ImplementorSink;

#[derive(Debug, Default)]
struct Merged {
	set: ImplementorSet,
	deliveries: usize,
}

/// Consumer that merges every delivery into one implementor table.
///
/// Libraries keep first-delivery order; a library delivered again has its
/// descriptors appended.
#[derive(Debug, Default)]
pub struct ImplementorCollector {
	merged: Mutex<Merged>,
}

impl ImplementorCollector {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of `register` calls received.
	pub fn deliveries(&self) -> usize {
		self.merged.lock().deliveries
	}

	pub fn snapshot(&self) -> ImplementorSet {
		self.merged.lock().set.clone()
	}

	/// Source-written impls, rendered under "Implementors".
	pub fn explicit(&self) -> Vec<(LibraryId, ImplementationDescriptor)> {
		self.filtered(ImplementationDescriptor::is_explicit)
	}

	/// Compiler-inferred impls, rendered under "Auto implementors".
	pub fn synthetic(&self) -> Vec<(LibraryId, ImplementationDescriptor)> {
		self.filtered(ImplementationDescriptor::is_synthetic)
	}

	fn filtered(&self, keep: impl Fn(&ImplementationDescriptor) -> bool) -> Vec<(LibraryId, ImplementationDescriptor)> {
		let keep = &keep;
		let merged = self.merged.lock();
		merged
			.set
			.iter()
			.flat_map(|(lib, descriptors)| descriptors.iter().filter(move |d| keep(*d)).map(move |d| (lib.clone(), d.clone())))
			.collect()
	}
}

impl ImplementorSink for ImplementorCollector {
	fn register(&self, set: ImplementorSet) {
		let mut merged = self.merged.lock();
		merged.deliveries += 1;
		for (library, descriptors) in set {
			merged.set.append(library, descriptors);
		}
	}
}
