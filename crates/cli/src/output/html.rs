//! HTML output formatting.

use dochead_core::RenderedHead;

/// Format a head with each child on its own indented line.
pub fn format_pretty(head: &RenderedHead) -> String {
    let mut output = head.open_tag();
    for child in &head.children {
        output.push_str("\n  ");
        output.push_str(&child.to_html());
    }
    output.push_str("\n</head>");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use dochead_core::{render_head, HeadConfig};

    #[test]
    fn test_format_pretty() {
        let config = HeadConfig {
            id: Some("main-head".to_string()),
            ..Default::default()
        }
        .with_defaults();
        let head = render_head(&config).unwrap();
        assert_eq!(
            format_pretty(&head),
            concat!(
                r#"<head id="main-head" class="the-head">"#,
                "\n  ",
                r#"<meta class="the-head-charset" charset="utf-8"/>"#,
                "\n  ",
                r#"<meta class="the-head-viewport" name="viewport" content="width=device-width,initial-scale=1.0"/>"#,
                "\n</head>"
            )
        );
    }

    #[test]
    fn test_pretty_and_compact_share_opening() {
        let config = HeadConfig {
            id: Some("a&b".to_string()),
            class_name: Some("site".to_string()),
            ..Default::default()
        };
        let head = render_head(&config).unwrap();
        let opening = r#"<head id="a&amp;b" class="the-head site">"#;
        assert!(format_pretty(&head).starts_with(opening));
        assert!(head.to_html().starts_with(opening));
    }

    #[test]
    fn test_format_pretty_empty() {
        let head = render_head(&HeadConfig::default()).unwrap();
        assert_eq!(format_pretty(&head), "<head class=\"the-head\">\n</head>");
    }
}
