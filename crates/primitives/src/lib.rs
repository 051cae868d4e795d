//! Implementor data model.
//!
//! Every producer hands its trait page an [`ImplementorSet`]: an
//! insertion-ordered map from [`LibraryId`] to the
//! [`ImplementationDescriptor`]s that library contributes. Insertion order is
//! display order, so nothing in this crate ever sorts or deduplicates.

mod descriptor;
mod error;
mod library;
mod set;
mod trait_path;

pub use descriptor::ImplementationDescriptor;
pub use error::{PrimitiveError, Result};
pub use library::LibraryId;
pub use set::ImplementorSet;
pub use trait_path::TraitPath;
