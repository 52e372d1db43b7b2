pub mod assets;
pub mod backdrop;
pub mod common;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod helpers;
pub mod persist;
pub mod picture;
pub mod reader;
pub mod state;
pub mod surface;
pub mod tile;
pub mod tilecache;
pub mod view;

#[cfg(test)]
mod testutil;
