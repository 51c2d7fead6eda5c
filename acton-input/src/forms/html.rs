//! Attribute writing and HTML escaping
//!
//! Attributes are appended in the order they are written, so the same
//! inputs always produce the same markup.

/// Escape a string for use in HTML attribute values
#[must_use]
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a string for use in HTML content
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Append ` name="value"` with the value escaped
pub fn write_attr(html: &mut String, name: &str, value: &str) {
    html.push(' ');
    html.push_str(name);
    html.push_str("=\"");
    html.push_str(&escape_attr(value));
    html.push('"');
}

/// Append the attribute only when a value is present
pub fn write_opt_attr(html: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        write_attr(html, name, value);
    }
}

/// Append a bare boolean attribute (` disabled`) when set
pub fn write_flag(html: &mut String, name: &str, set: bool) {
    if set {
        html.push(' ');
        html.push_str(name);
    }
}

/// Append a numeric attribute when present
pub fn write_num_attr<N: ToString>(html: &mut String, name: &str, value: Option<N>) {
    if let Some(value) = value {
        write_attr(html, name, &value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("\"test\""), "&quot;test&quot;");
        assert_eq!(escape_attr("it's"), "it&#39;s");
    }

    #[test]
    fn test_write_attr_order() {
        let mut html = String::from("<input");
        write_attr(&mut html, "type", "text");
        write_opt_attr(&mut html, "id", None);
        write_opt_attr(&mut html, "name", Some("q"));
        write_flag(&mut html, "required", true);
        write_flag(&mut html, "disabled", false);
        write_num_attr(&mut html, "size", Some(10_u32));
        assert_eq!(html, r#"<input type="text" name="q" required size="10""#);
    }

    proptest! {
        #[test]
        fn escaped_attr_never_breaks_out(s in ".*") {
            let escaped = escape_attr(&s);
            prop_assert!(!escaped.contains('"'));
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
        }

        #[test]
        fn escaped_html_has_no_tags(s in ".*") {
            let escaped = escape_html(&s);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
        }
    }
}
