//! Building AQL query strings and normalizing the operators and sort directions
//! that go into them.

pub mod error;
pub mod operators;
pub mod params;
pub mod sort;
pub mod string;
