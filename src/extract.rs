use regex::Regex;
use std::sync::LazyLock;

/// Poster images on the listing carry the film title in `alt`. The title may
/// wrap across lines, hence the `s` flag on the group.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<img width="100" alt="(?s:(.*?))""#).unwrap());

/// Returns the `alt` value of every poster image in `html`, in document order.
///
/// A page without poster images yields an empty vector.
pub fn extract_titles(html: &str) -> Vec<String> {
    TITLE_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_posters() {
        let html = r#"<html><body><img width="50" alt="thumb"><p>nothing</p></body></html>"#;

        assert!(extract_titles(html).is_empty());
        assert!(extract_titles("").is_empty());
    }

    #[test]
    fn test_titles_in_document_order() {
        let html = r#"
            <ol class="grid_view">
                <li><img width="100" alt="肖申克的救赎" src="https://img.example/1.jpg" class=""></li>
                <li><img width="100" alt="霸王别姬" src="https://img.example/2.jpg" class=""></li>
                <li><img width="100" alt="阿甘正传" src="https://img.example/3.jpg" class=""></li>
            </ol>
        "#;

        assert_eq!(
            extract_titles(html),
            vec!["肖申克的救赎", "霸王别姬", "阿甘正传"]
        );
    }

    #[test]
    fn test_title_spanning_lines() {
        let html = "<img width=\"100\" alt=\"The Lord of the Rings:\nThe Return of the King\" src=\"x.jpg\">";

        assert_eq!(
            extract_titles(html),
            vec!["The Lord of the Rings:\nThe Return of the King"]
        );
    }

    /// The lazy group stops at the first closing quote, so adjacent tags stay separate.
    #[test]
    fn test_matches_do_not_overlap() {
        let html = r#"<img width="100" alt="A"><img width="100" alt="B">"#;

        assert_eq!(extract_titles(html), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_alt() {
        let html = r#"<img width="100" alt="" src="blank.jpg">"#;

        assert_eq!(extract_titles(html), vec![""]);
    }
}
