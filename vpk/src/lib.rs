pub mod assets;
pub mod cli;
pub mod commands;
pub mod error;
pub mod recovery;
pub mod tree;
pub mod utils;
