use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PrimitiveError;

/// Identifier of a documented library, unique per producer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LibraryId(String);

impl LibraryId {
	/// Validates and wraps a library identifier.
	pub fn new(id: impl Into<String>) -> crate::Result<Self> {
		let id = id.into();
		if id.is_empty() {
			return Err(PrimitiveError::EmptyLibraryId);
		}
		Ok(Self(id))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl TryFrom<String> for LibraryId {
	type Error = PrimitiveError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl TryFrom<&str> for LibraryId {
	type Error = PrimitiveError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}

impl From<LibraryId> for String {
	fn from(id: LibraryId) -> Self {
		id.0
	}
}

impl Borrow<str> for LibraryId {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for LibraryId {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for LibraryId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
