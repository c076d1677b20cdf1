//! Session gateway adapters

mod memory;

pub use memory::MemorySessionGateway;
