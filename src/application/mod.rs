mod simulation;

pub use simulation::{Generations, Simulation, iterate, iterate_with};
