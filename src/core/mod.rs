pub mod calculator;
pub mod columns;
pub mod device;
pub mod fields;
pub mod logic;
pub mod normalizer;
pub mod ordering;
pub mod timestamp;
