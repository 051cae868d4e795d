use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PrimitiveError;

/// `::`-separated path of the trait whose page renders a set of implementors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TraitPath {
	segments: Vec<String>,
}

impl TraitPath {
	pub fn parse(path: &str) -> crate::Result<Self> {
		Self::from_segments(path.split("::"))
	}

	/// Builds a path from already-split segments.
	pub fn from_segments<S: AsRef<str>>(segments: impl IntoIterator<Item = S>) -> crate::Result<Self> {
		let segments: Vec<String> = segments.into_iter().map(|s| s.as_ref().to_string()).collect();
		match invalid_reason(&segments) {
			Some(reason) => Err(PrimitiveError::InvalidTraitPath {
				path: segments.join("::"),
				reason,
			}),
			None => Ok(Self { segments }),
		}
	}

	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// The trait's own name, the last segment.
	pub fn name(&self) -> &str {
		self.segments.last().map(String::as_str).unwrap_or_default()
	}
}

fn invalid_reason(segments: &[String]) -> Option<&'static str> {
	if segments.is_empty() {
		return Some("path has no segments");
	}
	for segment in segments {
		if segment.is_empty() {
			return Some("empty path segment");
		}
		if !segment.chars().all(|c| c.is_alphanumeric() || c == '_') {
			return Some("segment is not an identifier");
		}
	}
	None
}

impl FromStr for TraitPath {
	type Err = PrimitiveError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl TryFrom<String> for TraitPath {
	type Error = PrimitiveError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(&value)
	}
}

impl From<TraitPath> for String {
	fn from(path: TraitPath) -> Self {
		path.to_string()
	}
}

impl fmt::Display for TraitPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.segments.join("::"))
	}
}

#[cfg(test)]
mod tests;
