//! 콘솔 리포터 포트 구현 어댑터.

use crate::application::ports::Reporter;
use crate::infrastructure::render::{render_count_heading, render_table};

/// stdout 전용 리포터 어댑터.
/// 출력 순서는 서버 응답 순서를 그대로 따른다.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn count(&self, label: &str, count: i32) {
        println!("{}", render_count_heading(label, count));
    }

    fn item(&self, name: &str) {
        println!("{name}");
    }

    fn table(&self, rows: &[(String, String)]) {
        for line in render_table(rows) {
            println!("{line}");
        }
    }
}
