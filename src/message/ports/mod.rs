//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces the core requires from
//! infrastructure ([`MessageRepository`], [`IdGenerator`]) and the interface
//! it offers to driving adapters ([`MessageUseCase`]).

pub mod id_generator;
pub mod repository;
pub mod use_case;

pub use id_generator::IdGenerator;
pub use repository::{MessageRepository, RepositoryError, RepositoryResult};
pub use use_case::MessageUseCase;
