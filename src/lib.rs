pub mod config;
pub mod error;
pub mod inventory;
pub mod store;

#[cfg(test)]
mod capture;

pub use config::Config;
pub use error::{InvsError, Result};
pub use inventory::{parse_item, parse_qty, Inventory};
