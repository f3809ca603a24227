pub mod assets;
pub mod commands;

pub use assets::{AssetDir, AssetError};
