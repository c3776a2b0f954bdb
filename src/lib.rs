pub mod dom;
pub mod engine;
pub mod info;
pub mod input;
pub mod render;
pub mod theme;
