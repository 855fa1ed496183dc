//! Interface layer
//! CLI 입력을 받아 애플리케이션 유스케이스로 연결한다.

pub mod cli;
