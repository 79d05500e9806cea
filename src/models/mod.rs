pub mod column;
pub mod event;
pub mod event_kind;
pub mod interval;
pub mod table;
pub mod unit;
