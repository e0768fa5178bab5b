pub mod app;
pub mod config;
pub mod game;
pub mod generators;
pub mod maze;
