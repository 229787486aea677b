//! Core game mechanics: the world state, the per-tick update, and the
//! pipe spawner. Everything here is deterministic given an injected RNG
//! and runs without a terminal attached.

pub mod logic;
pub mod types;

// In the binary target `game` is a private module, so these re-exports
// count as unused there; they are part of the library's public API.
#[allow(unused_imports)]
pub use logic::*;
#[allow(unused_imports)]
pub use types::*;
