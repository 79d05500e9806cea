pub mod cycle;
pub mod phases;
