//! Structural value descriptions.
//!
//! A [`Shape`] is the intermediate form between a live value and its final
//! text: the describe pass classifies every node into one of four variants,
//! and a layout strategy renders the finished tree bottom-up.

mod core;

pub use core::Shape;

#[cfg(test)]
mod tests;
