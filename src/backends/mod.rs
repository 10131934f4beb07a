//! Available rendering backends. See the [`Backend`](crate::Backend) docs for what they need to do.
//!
//! Each is enabled by a feature:
//!
//! - `cli_crossterm` (default): [`CrosstermBackend`], a real terminal.
//! - `memory`: [`MemoryBackend`], an in-memory grid, for tests and offscreen rendering.

mod crossterm;
mod memory;

#[cfg(feature = "cli_crossterm")]
pub use self::crossterm::CrosstermBackend;
#[cfg(any(test, feature = "memory"))]
pub use self::memory::MemoryBackend;
