pub mod context;
pub mod params;

#[cfg(test)]
mod tests;

pub use context::*;
pub use params::*;
