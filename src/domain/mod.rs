// Domain layer: pure, synchronous types and ports
pub mod error;
pub mod graph;
pub mod model;
pub mod traits;
