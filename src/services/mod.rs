// Service module exports

pub mod clock;
pub mod grid;
pub mod selection;
pub mod settings;
