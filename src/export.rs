//! CSV rendering for tabular report exports.

/// Render a header row plus data rows as CSV. Fields containing commas,
/// quotes, or newlines are quoted per RFC 4180.
pub fn to_csv(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    write_row(&mut out, header.iter().map(|s| s.to_string()));
    for row in rows {
        write_row(&mut out, row.iter().cloned());
    }
    out
}

fn write_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape(&field));
    }
    out.push_str("\r\n");
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_rows() {
        let csv = to_csv(
            &["date", "tag", "total_yield"],
            &[
                vec!["2024-01-01".into(), "B-101".into(), "12.5".into()],
                vec!["2024-01-02".into(), "B-101".into(), "11.0".into()],
            ],
        );
        assert_eq!(
            csv,
            "date,tag,total_yield\r\n2024-01-01,B-101,12.5\r\n2024-01-02,B-101,11.0\r\n"
        );
    }

    #[test]
    fn fields_with_commas_and_quotes_are_escaped() {
        let csv = to_csv(
            &["note"],
            &[vec!["fever, \"mild\"".into()]],
        );
        assert_eq!(csv, "note\r\n\"fever, \"\"mild\"\"\"\r\n");
    }

    #[test]
    fn empty_rows_yield_header_only() {
        assert_eq!(to_csv(&["a", "b"], &[]), "a,b\r\n");
    }
}
