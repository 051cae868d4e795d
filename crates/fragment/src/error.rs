use std::path::PathBuf;

use implbridge_primitives::PrimitiveError;
use thiserror::Error;

/// Malformed producer payloads. All of these are bugs in the step that
/// generated the fragment and are reported rather than coerced.
#[derive(Debug, Error)]
pub enum FragmentError {
	#[error("payload is not valid JSON: {0}")]
	Json(#[source] serde_json::Error),

	#[error("payload root must be an object keyed by library, found {found}")]
	NotAnObject { found: &'static str },

	#[error("descriptors for library {library:?} must be an array, found {found}")]
	NotASequence { library: String, found: &'static str },

	#[error("descriptor {index} of library {library:?} is malformed: {source}")]
	Record {
		library: String,
		index: usize,
		#[source]
		source: serde_json::Error,
	},

	#[error("no `implementors[\"<lib>\"] = [...]` statement found")]
	NoStatements,

	#[error("array for library {library:?} has no closing bracket")]
	Unterminated { library: String },

	#[error("array for library {library:?} is not a valid literal: {source}")]
	Generated {
		library: String,
		#[source]
		source: json5::Error,
	},

	#[error(transparent)]
	Invalid(#[from] PrimitiveError),

	#[error("cannot derive a trait path from {path}: {reason}")]
	Location { path: PathBuf, reason: &'static str },
}
