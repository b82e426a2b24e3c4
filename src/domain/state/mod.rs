//! Persistent invocation state

mod invocation_state;

pub use invocation_state::InvocationState;
