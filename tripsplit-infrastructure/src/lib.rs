#![warn(clippy::uninlined_format_args)]

pub mod id_generator;
pub mod json_repository;
pub mod memory_repository;

pub use id_generator::ClockIdGenerator;
pub use json_repository::JsonFileRepository;
pub use memory_repository::InMemoryRepository;
