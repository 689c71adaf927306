// Adapters layer: concrete implementations for external collaborators
// (currency rendering, submission backends).

pub mod currency;
pub mod gateway;
