//! The command line tool `msort` sorts multi-line blocks of text,
//! such as the cards in a vCard file, by a key found inside each block.
//! The library does the same for text already in memory.
//!
//! See [block] for the details, and [BlockSorter] to start.

#![warn(
    absolute_paths_not_starting_with_crate,
    explicit_outlives_requirements,
    keyword_idents,
    noop_method_call,
    rust_2021_incompatible_closure_captures,
    rust_2021_incompatible_or_patterns,
    rust_2021_prefixes_incompatible_syntax,
    rust_2021_prelude_collisions,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    trivial_numeric_casts,
    trivial_casts,
    unreachable_pub,
    unused_lifetimes,
    unused_extern_crates,
    unused_qualifications,

//    clippy::all,
//    clippy::restriction,
//    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::redundant_pub_crate)]

pub mod block;
pub mod util;

#[doc(inline)]
pub use crate::block::{sort_blocks, Block, BlockSorter};
#[doc(inline)]
pub use crate::util::{get_writer, prerr, read_all, read_stdin, Error, Outfile, Result};
