pub mod connection;
pub mod problem;

pub use connection::Connection;
pub use problem::Problem;

/// Dense node identity. Original nodes are `0..n`, the super-sink is `n`.
pub type NodeId = usize;
