use burrow_core::ClientMetadata;
use woothee::parser::Parser;

/// Recorded when the parser cannot classify a field.
pub const UNKNOWN: &str = "Unknown";

/// Parses a raw `User-Agent` header into the OS and browser names that are
/// stored with each visit.
pub fn parse_user_agent(user_agent: &str) -> ClientMetadata {
    let parser = Parser::new();
    let Some(result) = parser.parse(user_agent) else {
        return ClientMetadata::new(UNKNOWN, UNKNOWN);
    };

    ClientMetadata::new(known_or_unknown(&result.os), known_or_unknown(&result.name))
}

fn known_or_unknown(value: &str) -> &str {
    if value.is_empty() || value == "UNKNOWN" {
        UNKNOWN
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_desktop_chrome() {
        let client = parse_user_agent(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
             (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
        );
        assert_eq!(client.agent, "Chrome");
        assert!(client.os.starts_with("Windows"));
    }

    #[test]
    fn parses_firefox_on_linux() {
        let client = parse_user_agent(
            "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0",
        );
        assert_eq!(client.agent, "Firefox");
        assert_eq!(client.os, "Linux");
    }

    #[test]
    fn empty_user_agent_is_unknown() {
        assert_eq!(parse_user_agent(""), ClientMetadata::new(UNKNOWN, UNKNOWN));
    }
}
