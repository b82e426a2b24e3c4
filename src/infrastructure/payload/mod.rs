//! Hook payload adapters

mod stdin;

pub use stdin::StdinPayload;
