use std::sync::LazyLock;

use implbridge_primitives::{ImplementationDescriptor, ImplementorSet, LibraryId, TraitPath};
use implbridge_registry::{Bridge, PublishOutcome};
use regex::Regex;
use serde_json::Value;

use crate::FragmentError;

/// Start of one `implementors["<lib>"] = [...];` statement in a generated file.
static STATEMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"implementors\["([^"\\]*)"\]\s*=\s*"#).expect("statement pattern is valid"));

/// One generated producer: implementors for a single trait page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
	trait_path: TraitPath,
	set: ImplementorSet,
}

impl Fragment {
	pub fn new(trait_path: TraitPath, set: ImplementorSet) -> Self {
		Self { trait_path, set }
	}

	/// Decodes a payload literal of the form
	/// `{"<library>": [{"text": ..., "synthetic": ..., "types": [...]}, ...]}`.
	///
	/// Library and descriptor order are kept as written.
	pub fn from_json(trait_path: TraitPath, payload: &str) -> Result<Self, FragmentError> {
		let root: Value = serde_json::from_str(payload).map_err(FragmentError::Json)?;
		let libraries = match root {
			Value::Object(libraries) => libraries,
			other => return Err(FragmentError::NotAnObject { found: kind(&other) }),
		};

		let mut set = ImplementorSet::with_capacity(libraries.len());
		for (library, records) in libraries {
			let (library, descriptors) = decode_library(library, records)?;
			set.insert(library, descriptors);
		}

		Ok(Self { trait_path, set })
	}

	/// Decodes a generated producer file.
	///
	/// The file assigns one relaxed array literal per library:
	/// `implementors["<lib>"] = [{text:"...",synthetic:false,types:["..."]},];`.
	/// Statements are read in file order; a repeated library keeps its first
	/// position and the later assignment wins, as it would when evaluated.
	pub fn from_generated(trait_path: TraitPath, source: &str) -> Result<Self, FragmentError> {
		let statements: Vec<_> = STATEMENT
			.captures_iter(source)
			.filter_map(|caps| Some((caps.get(0)?, caps.get(1)?.as_str())))
			.collect();
		if statements.is_empty() {
			return Err(FragmentError::NoStatements);
		}

		let mut set = ImplementorSet::with_capacity(statements.len());
		for (i, (statement, library)) in statements.iter().enumerate() {
			let end = statements.get(i + 1).map_or(source.len(), |(next, _)| next.start());
			let segment = &source[statement.end()..end];
			let Some(close) = segment.rfind(']') else {
				return Err(FragmentError::Unterminated { library: library.to_string() });
			};
			let records: Value = json5::from_str(&segment[..=close]).map_err(|error| FragmentError::Generated {
				library: library.to_string(),
				source: error,
			})?;
			let (library, descriptors) = decode_library(library.to_string(), records)?;
			set.insert(library, descriptors);
		}

		tracing::debug!(page = %trait_path, libraries = set.len(), "decoded generated fragment");
		Ok(Self { trait_path, set })
	}

	pub fn trait_path(&self) -> &TraitPath {
		&self.trait_path
	}

	pub fn implementors(&self) -> &ImplementorSet {
		&self.set
	}

	/// Publishes every library in payload order.
	pub fn publish_into(self, bridge: &Bridge) -> Vec<(LibraryId, PublishOutcome)> {
		self.set
			.into_iter()
			.map(|(library, descriptors)| {
				let outcome = bridge.publish(library.clone(), descriptors);
				(library, outcome)
			})
			.collect()
	}
}

fn decode_library(library: String, records: Value) -> Result<(LibraryId, Vec<ImplementationDescriptor>), FragmentError> {
	let records = match records {
		Value::Array(records) => records,
		other => {
			return Err(FragmentError::NotASequence {
				found: kind(&other),
				library,
			});
		}
	};
	let descriptors = records
		.into_iter()
		.enumerate()
		.map(|(index, record)| {
			serde_json::from_value::<ImplementationDescriptor>(record).map_err(|source| FragmentError::Record {
				library: library.clone(),
				index,
				source,
			})
		})
		.collect::<Result<Vec<_>, _>>()?;
	Ok((LibraryId::new(library)?, descriptors))
}

fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

#[cfg(test)]
mod tests;
