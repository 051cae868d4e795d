//! Producers for the implementor bridge.
//!
//! A [`Fragment`] is one generated producer: the implementors a single
//! library contributes to one trait page, decoded from its payload literal.
//! [`PageRegistry`] keeps one [`Bridge`](implbridge_registry::Bridge) per
//! trait page so fragments and page consumers can start in any order.

mod decode;
mod error;
mod location;
mod pages;

pub use decode::Fragment;
pub use error::FragmentError;
pub use location::trait_path_from_file;
pub use pages::PageRegistry;
