//! Terminal front end: card board, interactive session and setup

pub mod board;
pub mod session;
pub mod setup;
pub mod ui;

pub use board::{CardBoard, OutputFormat};
pub use session::Session;
