pub mod commands;
mod render;
pub mod setup;
