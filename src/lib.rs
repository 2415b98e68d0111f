pub mod config;
pub mod discovery;
pub mod error;
pub mod layout;
pub mod menu;
pub mod to;
pub mod view;

pub use error::{Result, ViewError};
