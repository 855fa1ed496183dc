//! 목록/테이블 콘솔 출력용 문자열 렌더링.

/// "No. of APIs: 3" 형식의 개수 헤더를 만든다.
pub fn render_count_heading(label: &str, count: i32) -> String {
    format!("No. of {label}: {count}")
}

/// (라벨, 값) 행을 2열 테이블 줄 목록으로 렌더링한다.
/// 상단 테두리와 행 사이 구분선을 넣고 하단 테두리는 생략한다.
pub fn render_table(rows: &[(String, String)]) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    let separator = format!(
        "+-{}-+-{}-+",
        "-".repeat(label_width),
        "-".repeat(value_width)
    );

    let mut lines = Vec::with_capacity(rows.len() * 2 + 1);
    lines.push(separator.clone());
    for (label, value) in rows {
        lines.push(format!(
            "| {label:<label_width$} | {value:<value_width$} |"
        ));
        lines.push(separator.clone());
    }
    // 마지막 구분선이 하단 테두리 역할을 겸하지 않도록 제거한다.
    lines.pop();

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(l, v)| (l.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn count_heading_matches_expected_format() {
        assert_eq!(render_count_heading("APIs", 3), "No. of APIs: 3");
        assert_eq!(render_count_heading("Sequences", 0), "No. of Sequences: 0");
    }

    #[test]
    fn table_pads_columns_to_widest_cell() {
        let lines = render_table(&rows(&[("NAME", "TestProxy"), ("ENDPOINT", "EP")]));

        assert_eq!(lines[0], "+----------+-----------+");
        assert_eq!(lines[1], "| NAME     | TestProxy |");
        assert_eq!(lines[2], "+----------+-----------+");
        assert_eq!(lines[3], "| ENDPOINT | EP        |");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn empty_rows_render_nothing() {
        assert!(render_table(&[]).is_empty());
    }
}
