pub mod config;
pub mod kernel_info;

pub use config::{AppConfig, ConfigSource, DemoConfig};
pub use kernel_info::KernelInfo;
