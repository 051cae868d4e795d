use super::TraitPath;
use crate::PrimitiveError;

#[test]
fn parses_and_displays() {
	let path = TraitPath::parse("core::iter::traits::FusedIterator").unwrap();
	assert_eq!(path.name(), "FusedIterator");
	assert_eq!(path.segments().len(), 4);
	assert_eq!(path.to_string(), "core::iter::traits::FusedIterator");
}

#[test]
fn single_segment_is_valid() {
	let path: TraitPath = "Send".parse().unwrap();
	assert_eq!(path.name(), "Send");
}

#[test]
fn rejects_empty_segments() {
	for input in ["", "core::", "::Send", "core::::Send"] {
		let err = TraitPath::parse(input).unwrap_err();
		assert!(matches!(err, PrimitiveError::InvalidTraitPath { .. }), "{input:?} gave {err:?}");
	}
}

#[test]
fn rejects_non_identifier_segments() {
	assert!(TraitPath::parse("core::iter::Fused Iterator").is_err());
	assert!(TraitPath::parse("trait.FusedIterator.js").is_err());
}
