//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: views compose styled glyphs into
//! a framebuffer, and the renderer flushes framebuffers to the terminal by
//! diffing consecutive frames, so only changed cells are written. The
//! simulation core stays free of any I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screens;

pub use quadris_core as core;
pub use quadris_types as types;

pub use fb::{FrameBuffer, Glyph, Viewport};
pub use game_view::GameView;
pub use renderer::TerminalRenderer;
pub use screens::{GameOverScreen, TitleScreen, GAME_OVER_STEP_MS};
