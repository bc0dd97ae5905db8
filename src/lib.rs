pub mod models;
pub mod services;
pub mod cli;
pub mod utils;

pub use anyhow::{Error, Result};
pub use services::{Cart, CartError};
