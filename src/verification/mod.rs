/// Domain layer - chart verification models and pure services
///
/// Nothing in here touches the network, the filesystem or child processes.
pub mod domain;
pub mod services;
