mod embedded;
mod file;
mod http;

pub use embedded::{EmbeddedLoader, SAMPLE_PUZZLE};
pub use file::FileLoader;
pub use http::HttpLoader;
