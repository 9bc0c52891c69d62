pub mod engine;
pub mod report;
pub mod resolver;
pub mod summary;
pub mod writer;
