//! Application state machine
//!
//! The appliance is always in exactly one of four states. Transitions are a
//! pure function of the current state and an event; side effects on the
//! timer are performed by the controller before the event is raised.

pub mod events;
pub mod machine;

pub use events::AppEvent;
pub use machine::AppState;
