//! peon-ping - event-triggered audio cues for editor hooks
//!
//! The host editor runs the binary once per lifecycle event with
//! `--hook <name>`. The engine maps the hook to sound categories, escalates
//! to the `annoyed` category on rapid repeats, picks a clip without
//! repeating the previous one and starts a detached player.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Configuration model, state record, pack manifest, selection policy
//! - **Application**: The invocation use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (JSON files, stdin, audio players)
//! - **CLI**: Argument parsing, directory resolution, logging and the runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
