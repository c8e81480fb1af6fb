pub mod clip;
pub mod error;
pub mod extend;
pub mod fiber;
pub mod gesture;
pub mod interp;
pub mod jagged;
pub mod mesh;
pub mod noise;
pub mod plugin;
pub mod sheet;
pub mod types;
pub mod utils;

pub use plugin::PaperTearPlugin;
