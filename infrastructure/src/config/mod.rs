//! Configuration loading and credential resolution.

mod credentials;
mod file_config;
mod loader;

pub use credentials::{CredentialError, Credentials};
pub use file_config::{
    FileChatConfig, FileConfig, FileLogConfig, FileOpenAiConfig, FileSerpApiConfig,
};
pub use loader::ConfigLoader;
