pub mod types;
pub mod error;
pub mod config;
pub mod index;
pub mod locator;
pub mod resolver;
pub mod assembler;
pub mod visibility;
pub mod engine;
pub mod change;
pub mod cortex;

pub use types::*;
pub use error::*;
pub use config::*;
pub use index::*;
pub use locator::*;
pub use resolver::*;
pub use assembler::*;
pub use visibility::*;
pub use engine::*;
pub use change::*;
pub use cortex::*;

#[cfg(test)]
mod tests;
