pub mod formatting;
pub mod table;

pub use formatting::mins2readable;
