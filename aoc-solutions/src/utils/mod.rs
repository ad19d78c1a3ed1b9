//! Shared containers and helpers for the daily puzzles

pub mod matrix;
pub mod memo;
pub mod point;
pub mod seq;
