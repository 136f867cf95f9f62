pub mod call_context;
pub mod graph;
pub mod io;
pub mod types;

pub use graph::max_throughput;
