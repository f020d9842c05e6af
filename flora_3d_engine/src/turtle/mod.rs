/// Turtle module - command-string interpretation

pub mod plant_turtle;
pub mod symbol;

pub use plant_turtle::PlantTurtle;
pub use symbol::Symbol;
