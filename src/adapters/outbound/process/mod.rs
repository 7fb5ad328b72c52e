/// Process adapters driving the manifest-generation CLI
mod ks_cli;

pub use ks_cli::{KsCli, DEFAULT_TOOL};
