// Library surface for headless/integration tests and reuse.
// Rendering and terminal setup stay in the binary.
pub mod app;
pub mod app_dirs;
pub mod celebration;
pub mod config;
pub mod error;
pub mod exercises;
pub mod logging;
pub mod metronome;
pub mod params;
pub mod plan;
pub mod progress;
pub mod runtime;
pub mod session;
pub mod settings;
pub mod stopwatch;
pub mod timer;
pub mod util;
