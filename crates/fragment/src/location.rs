use std::path::{Component, Path};

use implbridge_primitives::TraitPath;

use crate::FragmentError;

const ROOT_DIR: &str = "implementors";
const TRAIT_PREFIX: &str = "trait.";
const EXTENSION: &str = ".js";

/// Derives the trait page a generated fragment belongs to from where it was
/// written, e.g. `implementors/core/iter/traits/trait.FusedIterator.js` is
/// `core::iter::traits::FusedIterator`.
pub fn trait_path_from_file(path: &Path) -> Result<TraitPath, FragmentError> {
	let fail = |reason| FragmentError::Location {
		path: path.to_path_buf(),
		reason,
	};

	let mut components = path.components().map(Component::as_os_str).map(|c| c.to_str());
	if !components.any(|c| c == Some(ROOT_DIR)) {
		return Err(fail("not under an `implementors` directory"));
	}
	let rest = components.collect::<Option<Vec<&str>>>().ok_or_else(|| fail("path is not valid UTF-8"))?;

	let Some((file, modules)) = rest.split_last() else {
		return Err(fail("no file after `implementors`"));
	};
	let name = file
		.strip_prefix(TRAIT_PREFIX)
		.and_then(|f| f.strip_suffix(EXTENSION))
		.ok_or_else(|| fail("file name is not `trait.<Name>.js`"))?;

	Ok(TraitPath::from_segments(modules.iter().copied().chain(std::iter::once(name)))?)
}
