// Adapters layer: the input and output collaborators around the engine.

pub mod report;
pub mod roster;
