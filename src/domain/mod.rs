mod cell;
mod bounds;
mod generation;
mod patterns;
mod algorithm;
pub mod rules;

pub use cell::Cell;
pub use bounds::BoundingBox;
pub use generation::Generation;
pub use rules::{Status, will_be_alive};
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
