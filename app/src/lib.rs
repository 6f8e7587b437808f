// Shared pieces of the viewer and the headless renderer
pub mod config;
pub mod figure;
