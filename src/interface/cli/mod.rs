//! CLI 인터페이스 모듈 묶음.
//! 입력 파싱과 의존성 조립을 한 네임스페이스로 관리한다.

pub mod command;
pub mod composition;

pub use command::{Cli, CliAction, ParsedAction};
pub use composition::AppComposition;
