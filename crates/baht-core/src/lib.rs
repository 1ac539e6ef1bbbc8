//! Thai-Baht amount reading.
//!
//! `normalize` cleans raw amount text into a [`NormalizedAmount`], `group`
//! renders it for display, `spell` reads a digit string in the Thai counting
//! grammar, and [`Reader`] assembles the full บาท/สตางค์ phrase.

pub mod amount;
pub mod grouping;
pub mod reader;
pub mod settings;
pub mod speller;

pub use amount::{normalize, AmountError, NormalizedAmount};
pub use grouping::group;
pub use reader::{format, read, read_with, Reader};
pub use speller::spell;
