use thiserror::Error;

/// Validation failures for implementor primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
	/// A library identifier was the empty string.
	#[error("library identifier must not be empty")]
	EmptyLibraryId,

	/// A trait path could not be parsed.
	#[error("invalid trait path {path:?}: {reason}")]
	InvalidTraitPath {
		/// The rejected input.
		path: String,
		/// What was wrong with it.
		reason: &'static str,
	},
}

/// Result type for primitive construction.
pub type Result<T> = std::result::Result<T, PrimitiveError>;
