use url::Url;

const BLOCKED_PREFIXES: &[&str] = &["mailto:", "javascript:", "tel:", "#"];

/// True for hrefs that can never lead to a crawlable page (mail, script, phone, in-page anchors).
fn has_blocked_prefix(raw: &str) -> bool {
    let normalized = raw.trim().to_lowercase();
    BLOCKED_PREFIXES.iter().any(|p| normalized.starts_with(p))
}

/// Whether `url` is an absolute http(s) link worth following. Never panics, never errors.
pub fn is_eligible(url: &str) -> bool {
    let normalized = url.trim().to_lowercase();
    if normalized.is_empty() || has_blocked_prefix(&normalized) {
        return false;
    }
    match Url::parse(&normalized) {
        Ok(u) => matches!(u.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blocked_prefixes_in_any_case() {
        for url in [
            "mailto:x@y.com",
            "  MAILTO:x@y.com",
            "javascript:void(0)",
            "JavaScript:alert(1) ",
            "tel:+15551234",
            "\tTEL:123",
            "#top",
            "  #",
        ] {
            assert!(!is_eligible(url), "{url:?} should be rejected");
        }
    }

    #[test]
    fn accepts_absolute_http_and_https() {
        for url in ["http://example.com", "https://example.com/a?b=c", " HTTPS://Example.com/x ", "http://localhost:8080/"] {
            assert!(is_eligible(url), "{url:?} should be accepted");
        }
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        for url in ["", "   ", "ftp://example.com/file", "/relative/path", "example.com/page", "http://", "file:///etc/passwd", "data:text/html,hi"] {
            assert!(!is_eligible(url), "{url:?} should be rejected");
        }
    }
}
