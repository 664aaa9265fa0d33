#![doc = concat!(include_str!("../README.md"), "\n\n", include_str!("../CHANGELOG.md"))]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::clone_on_ref_ptr,
    clippy::explicit_iter_loop,
    clippy::future_not_send,
    clippy::use_self,
    dead_code,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    non_camel_case_types,
    non_snake_case,
    non_upper_case_globals,
    rust_2018_idioms,
    rustdoc::bare_urls,
    rustdoc::broken_intra_doc_links,
    unknown_lints,
    unreachable_code,
    unreachable_patterns,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates
)]

pub mod error;

pub mod filters;

pub mod hash_utils;

pub mod params;

pub use error::{Error, Result};
pub use filters::bloomfilter::BloomFilter;

#[cfg(test)]
mod test_util;
