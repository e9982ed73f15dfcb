//! Word lists
//!
//! The English lists are compiled into the binary by the build script; other
//! lists (including digraph alphabets) are loaded from files.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
