//! Reading `config.toml`, and writing the commented template on first run.

mod loader;
mod template;

#[cfg(test)]
mod tests;

pub use loader::{config_path, load_default, load_from_path, load_or_create};
