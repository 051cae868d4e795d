use implbridge_primitives::{ImplementationDescriptor, LibraryId, PrimitiveError, TraitPath};
use implbridge_registry::{Bridge, ImplementorCollector, PublishOutcome};

use super::Fragment;
use crate::FragmentError;

const FUSED_ITERATOR: &str = r#"{
	"hashbrown": [
		{"text": "impl<'a, K, V> FusedIterator for Iter<'a, K, V>", "synthetic": false, "types": ["hashbrown::map::Iter"]},
		{"text": "impl<K, V> FusedIterator for IntoIter<K, V>", "synthetic": false, "types": ["hashbrown::map::IntoIter"]}
	],
	"arrayvec": []
}"#;

fn fused_iterator() -> TraitPath {
	TraitPath::parse("core::iter::traits::FusedIterator").unwrap()
}

#[test]
fn decodes_payload_in_written_order() {
	let fragment = Fragment::from_json(fused_iterator(), FUSED_ITERATOR).unwrap();
	let set = fragment.implementors();

	let order: Vec<_> = set.libraries().map(LibraryId::as_str).collect();
	assert_eq!(order, ["hashbrown", "arrayvec"]);
	let hashbrown = set.get("hashbrown").unwrap();
	assert_eq!(hashbrown.len(), 2);
	assert_eq!(hashbrown[0].types(), ["hashbrown::map::Iter"]);
	assert_eq!(hashbrown[1].text(), "impl<K, V> FusedIterator for IntoIter<K, V>");
	assert!(hashbrown.iter().all(ImplementationDescriptor::is_explicit));
	assert_eq!(set.get("arrayvec"), Some(&[][..]));
}

#[test]
fn rejects_non_object_root() {
	let err = Fragment::from_json(fused_iterator(), "[]").unwrap_err();
	assert!(matches!(err, FragmentError::NotAnObject { found: "an array" }), "{err:?}");
}

#[test]
fn rejects_non_sequence_descriptors() {
	let err = Fragment::from_json(fused_iterator(), r#"{"hashbrown": {"text": "x"}}"#).unwrap_err();
	match err {
		FragmentError::NotASequence { library, found } => {
			assert_eq!(library, "hashbrown");
			assert_eq!(found, "an object");
		}
		other => panic!("unexpected error: {other:?}"),
	}
}

#[test]
fn reports_malformed_record_position() {
	let payload = r#"{"hashbrown": [
		{"text": "ok", "synthetic": false, "types": []},
		{"text": "bad", "synthetic": "no", "types": []}
	]}"#;
	match Fragment::from_json(fused_iterator(), payload).unwrap_err() {
		FragmentError::Record { library, index, .. } => {
			assert_eq!(library, "hashbrown");
			assert_eq!(index, 1);
		}
		other => panic!("unexpected error: {other:?}"),
	}
}

#[test]
fn rejects_empty_library_identifier() {
	let err = Fragment::from_json(fused_iterator(), r#"{"": []}"#).unwrap_err();
	assert!(matches!(err, FragmentError::Invalid(PrimitiveError::EmptyLibraryId)), "{err:?}");
}

#[test]
fn rejects_invalid_json() {
	let err = Fragment::from_json(fused_iterator(), r#"{"hashbrown": [}"#).unwrap_err();
	assert!(matches!(err, FragmentError::Json(_)), "{err:?}");
}

#[test]
fn publish_into_reports_each_library() {
	let bridge = Bridge::new();
	let fragment = Fragment::from_json(fused_iterator(), FUSED_ITERATOR).unwrap();
	let expected = fragment.implementors().clone();

	let outcomes = fragment.publish_into(&bridge);
	assert_eq!(
		outcomes,
		vec![
			(LibraryId::new("hashbrown").unwrap(), PublishOutcome::Staged),
			(LibraryId::new("arrayvec").unwrap(), PublishOutcome::Staged),
		]
	);

	let page = std::sync::Arc::new(ImplementorCollector::new());
	bridge.attach_shared(page.clone()).unwrap();
	assert_eq!(page.deliveries(), 1);
	assert_eq!(page.snapshot(), expected);
}

/// Two hashbrown records taken verbatim from a generated `trait.FusedIterator.js`,
/// plus a second library with an auto impl.
const GENERATED: &str = r##"(function() {var implementors = {};
implementors["hashbrown"] = [{text:"impl&lt;'a, K, V&gt; <a class=\"trait\" href=\"https://doc.rust-lang.org/nightly/core/iter/traits/trait.FusedIterator.html\" title=\"trait core::iter::traits::FusedIterator\">FusedIterator</a> for <a class=\"struct\" href=\"hashbrown/hash_map/struct.Iter.html\" title=\"struct hashbrown::hash_map::Iter\">Iter</a>&lt;'a, K, V&gt;",synthetic:false,types:["hashbrown::map::Iter"]},{text:"impl&lt;'a, K, V&gt; <a class=\"trait\" href=\"https://doc.rust-lang.org/nightly/core/iter/traits/trait.FusedIterator.html\" title=\"trait core::iter::traits::FusedIterator\">FusedIterator</a> for <a class=\"struct\" href=\"hashbrown/hash_map/struct.IterMut.html\" title=\"struct hashbrown::hash_map::IterMut\">IterMut</a>&lt;'a, K, V&gt;",synthetic:false,types:["hashbrown::map::IterMut"]},];
implementors["smallvec"] = [{text:"impl&lt;A&gt; Send for IntoIter&lt;A&gt;",synthetic:true,types:["smallvec::IntoIter"]},];

            if (window.register_implementors) {
                window.register_implementors(implementors);
            } else {
                window.pending_implementors = implementors;
            }
        
})()"##;

#[test]
fn decodes_generated_file_in_statement_order() {
	let fragment = Fragment::from_generated(fused_iterator(), GENERATED).unwrap();
	let set = fragment.implementors();

	let order: Vec<_> = set.libraries().map(LibraryId::as_str).collect();
	assert_eq!(order, ["hashbrown", "smallvec"]);

	let hashbrown = set.get("hashbrown").unwrap();
	assert_eq!(hashbrown.len(), 2);
	assert_eq!(hashbrown[0].types(), ["hashbrown::map::Iter"]);
	assert_eq!(hashbrown[1].types(), ["hashbrown::map::IterMut"]);
	assert!(hashbrown[0].text().starts_with("impl&lt;'a, K, V&gt; <a class=\"trait\""), "{}", hashbrown[0].text());
	assert!(hashbrown[1].text().ends_with(">IterMut</a>&lt;'a, K, V&gt;"), "{}", hashbrown[1].text());
	assert!(hashbrown.iter().all(ImplementationDescriptor::is_explicit));

	let smallvec = set.get("smallvec").unwrap();
	assert_eq!(smallvec.len(), 1);
	assert!(smallvec[0].is_synthetic());
	assert_eq!(smallvec[0].types(), ["smallvec::IntoIter"]);
}

#[test]
fn generated_and_json_forms_agree() {
	let generated = Fragment::from_generated(fused_iterator(), GENERATED).unwrap();
	let json = serde_json::to_string(generated.implementors()).unwrap();
	assert_eq!(Fragment::from_json(fused_iterator(), &json).unwrap(), generated);
}

#[test]
fn generated_file_without_statements_is_rejected() {
	let err = Fragment::from_generated(fused_iterator(), "(function() {var implementors = {};})()").unwrap_err();
	assert!(matches!(err, FragmentError::NoStatements), "{err:?}");
}

#[test]
fn generated_record_with_wrong_field_type_is_located() {
	let source = r#"implementors["a"] = [{text:"x",synthetic:false,types:[]},{text:"y",synthetic:1,types:[]},];"#;
	match Fragment::from_generated(fused_iterator(), source).unwrap_err() {
		FragmentError::Record { library, index, .. } => {
			assert_eq!(library, "a");
			assert_eq!(index, 1);
		}
		other => panic!("unexpected error: {other:?}"),
	}
}

#[test]
fn generated_array_that_is_not_a_literal_is_rejected() {
	let source = r#"implementors["a"] = [{text:"x" synthetic:false}];"#;
	let err = Fragment::from_generated(fused_iterator(), source).unwrap_err();
	assert!(matches!(err, FragmentError::Generated { ref library, .. } if library == "a"), "{err:?}");
}
