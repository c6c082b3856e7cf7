use anyhow::Context;
use uuid::Uuid;

/// Parse a document UUID from CLI input with a readable error.
pub fn parse_document_id(input: &str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(input.trim())
        .with_context(|| format!("'{}' is not a valid document ID", input))
}

/// Truncate a string to max_len characters, appending "..." if truncated.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let keep: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", keep)
    }
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_document_id_accepts_uuid_with_whitespace() {
        let id = Uuid::new_v4();
        assert_eq!(parse_document_id(&format!("  {id} ")).unwrap(), id);
    }

    #[test]
    fn parse_document_id_rejects_garbage() {
        let err = parse_document_id("not-a-uuid").unwrap_err();
        assert!(err.to_string().contains("not a valid document ID"));
    }

    #[test]
    fn truncate_string_short() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("", 5), "");
    }

    #[test]
    fn truncate_string_exact() {
        assert_eq!(truncate_string("hello", 5), "hello");
    }

    #[test]
    fn truncate_string_long() {
        assert_eq!(truncate_string("hello world", 8), "hello...");
        assert_eq!(truncate_string("ab", 2), "ab");
    }
}
