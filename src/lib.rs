//! Raging Sea library - animated ocean surface with live shader controls

pub mod camera;
pub mod cli;
pub mod error;
pub mod frame;
pub mod gui;
pub mod ocean;
pub mod params;
pub mod rendering;
