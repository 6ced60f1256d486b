// Adapters layer: concrete console implementations of the domain ports.

pub mod console;
