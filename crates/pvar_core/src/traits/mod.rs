//! Trait boundaries consumed by the engine.

mod pricer;

pub use pricer::Pricer;
