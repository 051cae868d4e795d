use serde::{Deserialize, Serialize};

/// One trait-implementation fact as rendered on a trait page.
///
/// Field names match the generated payload: `text` is the rendered
/// `impl ... for ...` fragment, `synthetic` marks compiler-inferred (auto)
/// impls, and `types` lists the type paths used for cross-linking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImplementationDescriptor {
	text: String,
	synthetic: bool,
	types: Vec<String>,
}

impl ImplementationDescriptor {
	pub fn new<S: Into<String>>(text: impl Into<String>, synthetic: bool, types: impl IntoIterator<Item = S>) -> Self {
		Self {
			text: text.into(),
			synthetic,
			types: types.into_iter().map(Into::into).collect(),
		}
	}

	/// Descriptor for an impl written in source.
	pub fn explicit<S: Into<String>>(text: impl Into<String>, types: impl IntoIterator<Item = S>) -> Self {
		Self::new(text, false, types)
	}

	/// Descriptor for an impl inferred by the compiler.
	pub fn synthetic<S: Into<String>>(text: impl Into<String>, types: impl IntoIterator<Item = S>) -> Self {
		Self::new(text, true, types)
	}

	/// Rendered rich-text description.
	pub fn text(&self) -> &str {
		&self.text
	}

	pub const fn is_synthetic(&self) -> bool {
		self.synthetic
	}

	pub const fn is_explicit(&self) -> bool {
		!self.synthetic
	}

	/// Type-path tokens, in payload order.
	pub fn types(&self) -> &[String] {
		&self.types
	}
}
