use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ImplementationDescriptor, LibraryId};

/// Implementor data keyed by library, in display order.
///
/// Two sets are equal only when they list the same libraries in the same
/// order with the same descriptors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplementorSet {
	entries: IndexMap<LibraryId, Vec<ImplementationDescriptor>>,
}

impl ImplementorSet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: IndexMap::with_capacity(capacity),
		}
	}

	/// One-entry set, the shape a single `publish` delivers.
	pub fn single(library: LibraryId, descriptors: Vec<ImplementationDescriptor>) -> Self {
		let mut set = Self::with_capacity(1);
		set.entries.insert(library, descriptors);
		set
	}

	/// Inserts a library's descriptors.
	///
	/// A repeated library keeps its original position and the displaced
	/// descriptors are returned.
	pub fn insert(&mut self, library: LibraryId, descriptors: Vec<ImplementationDescriptor>) -> Option<Vec<ImplementationDescriptor>> {
		self.entries.insert(library, descriptors)
	}

	/// Appends descriptors to a library, creating it at the end if absent.
	pub fn append(&mut self, library: LibraryId, descriptors: impl IntoIterator<Item = ImplementationDescriptor>) {
		self.entries.entry(library).or_default().extend(descriptors);
	}

	pub fn get(&self, library: &str) -> Option<&[ImplementationDescriptor]> {
		self.entries.get(library).map(Vec::as_slice)
	}

	pub fn contains(&self, library: &str) -> bool {
		self.entries.contains_key(library)
	}

	/// Library identifiers in insertion order.
	pub fn libraries(&self) -> impl ExactSizeIterator<Item = &LibraryId> {
		self.entries.keys()
	}

	pub fn iter(&self) -> impl ExactSizeIterator<Item = (&LibraryId, &[ImplementationDescriptor])> {
		self.entries.iter().map(|(lib, descriptors)| (lib, descriptors.as_slice()))
	}

	/// Number of libraries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Total descriptors across all libraries.
	pub fn descriptor_count(&self) -> usize {
		self.entries.values().map(Vec::len).sum()
	}
}

impl PartialEq for ImplementorSet {
	fn eq(&self, other: &Self) -> bool {
		self.entries.iter().eq(other.entries.iter())
	}
}

impl Eq for ImplementorSet {}

impl IntoIterator for ImplementorSet {
	type Item = (LibraryId, Vec<ImplementationDescriptor>);
	type IntoIter = indexmap::map::IntoIter<LibraryId, Vec<ImplementationDescriptor>>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl FromIterator<(LibraryId, Vec<ImplementationDescriptor>)> for ImplementorSet {
	fn from_iter<I: IntoIterator<Item = (LibraryId, Vec<ImplementationDescriptor>)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}
