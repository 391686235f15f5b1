//! InMemory Repository 実装

mod project;

pub use project::InMemoryProjectRepository;
