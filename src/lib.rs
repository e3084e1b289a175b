#![forbid(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod enrich;
pub mod formats;
pub mod isbn;
pub mod library;
pub mod logging;
pub mod lookup;
pub mod merge;
pub mod shelf;
pub mod sync;
