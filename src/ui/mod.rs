//! Terminal rendering for the game screen

pub mod view;

pub use view::render;
