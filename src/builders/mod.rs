pub mod network;

pub use network::{NetworkBuilder, NetworkConfig};
