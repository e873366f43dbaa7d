pub mod engine;

pub use engine::StudyQueries;
