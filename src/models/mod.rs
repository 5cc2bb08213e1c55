pub mod event;

pub use event::{Event, EventFields, EventFilter, NewEvent};
