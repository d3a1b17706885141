//! HTML escaping utilities.

/// Escape HTML special characters for safe rendering.
///
/// Every piece of user- or page-derived text that ends up inside a
/// highlight fragment goes through this first.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape_basic() {
        assert_eq!(html_escape("hello"), "hello");
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_html_escape_injection_attempt() {
        assert_eq!(
            html_escape("<img src=x onerror='alert(1)'>"),
            "&lt;img src=x onerror=&#x27;alert(1)&#x27;&gt;"
        );
    }
}
