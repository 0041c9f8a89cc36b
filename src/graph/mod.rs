//! Graph representation and algorithms module

pub mod compressed;
pub mod builder;
pub mod algorithms;
pub mod encoding;

pub use algorithms::complement;
pub use builder::GraphBuilder;
pub use compressed::{Graph, GraphRecord, DEFAULT_MAX_NODES};
