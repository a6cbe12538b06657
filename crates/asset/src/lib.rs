//! Asset loading: shader text fetched from HTTP or disk, cached by name.

pub mod config;
pub mod http;
pub mod loader;
pub mod registry;
pub mod source;

pub use config::LoaderConfig;
pub use http::HttpSource;
pub use loader::ShaderLoader;
pub use registry::{ShaderRegistry, ShaderTable};
pub use source::{FileSource, ShaderSource};
