// Domain layer - Core simulation engine
pub mod domain;

// Application layer - Sequencing generations
pub mod application;

// Infrastructure layer - Text rendering, argument handling
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{BoundingBox, Cell, Generation, Pattern, presets, Algorithm};
pub use application::{Simulation, iterate};
pub use rendering::{Glyphs, render};
