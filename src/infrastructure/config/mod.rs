//! 설정 파일 로딩/해석 구현.

mod inspection;
mod loader;
mod resolve;

pub use inspection::inspect_pretty_json;
pub use loader::{LoadedConfig, config_paths, load_merged_config};
pub use resolve::{SERVER_ENV, resolve_server};
