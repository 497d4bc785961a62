// Frameworks layer: configuration and the runnable widget host.

pub mod app;
pub mod config;
