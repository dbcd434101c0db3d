//! `Link` response header parsing (`<url>; rel="value", <url>; ...`).

/// Characters stripped around the whole header, parameter names and values.
const QUOTE_CHARS: [char; 3] = [' ', '\'', '"'];

/// One entry of a `Link` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderLink {
    pub url: String,
    /// Parameters in header order (e.g. `("rel", "canonical")`).
    pub params: Vec<(String, String)>,
}

impl HeaderLink {
    /// Last value for `key`. Keys match exactly, so `REL` is not `rel`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Parses a `Link` header value into its entries.
///
/// Entries are separated by a comma followed by optional spaces and `<`.
/// Parameter parsing for an entry stops at the first piece that is not a
/// single `key=value` pair.
pub fn parse_link_header(value: &str) -> Vec<HeaderLink> {
    let value = value.trim_matches(QUOTE_CHARS);
    if value.is_empty() {
        return Vec::new();
    }

    split_entries(value)
        .into_iter()
        .map(|entry| {
            let (url, params) = entry.split_once(';').unwrap_or((entry, ""));
            let url = url
                .trim_matches(|c| c == '<' || c == '>' || QUOTE_CHARS.contains(&c))
                .to_string();

            let mut parsed = Vec::new();
            for param in params.split(';') {
                let mut parts = param.split('=');
                let (Some(key), Some(val), None) = (parts.next(), parts.next(), parts.next())
                else {
                    break;
                };
                parsed.push((
                    key.trim_matches(QUOTE_CHARS).to_string(),
                    val.trim_matches(QUOTE_CHARS).to_string(),
                ));
            }
            HeaderLink {
                url,
                params: parsed,
            }
        })
        .collect()
}

/// True when any entry's `rel` value contains "canonical" (case-insensitive).
pub fn has_canonical_link(value: &str) -> bool {
    parse_link_header(value).iter().any(|link| {
        link.param("rel")
            .is_some_and(|rel| rel.to_ascii_lowercase().contains("canonical"))
    })
}

fn split_entries(value: &str) -> Vec<&str> {
    let bytes = value.as_bytes();
    let mut entries = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b',' {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j] == b' ' {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'<' {
                entries.push(&value[start..i]);
                start = j + 1;
                i = j + 1;
                continue;
            }
        }
        i += 1;
    }
    entries.push(&value[start..]);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_canonical() {
        let links = parse_link_header("<https://x>; rel=\"canonical\"");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "https://x");
        assert_eq!(links[0].param("rel"), Some("canonical"));
    }

    #[test]
    fn parse_multiple_entries() {
        let links = parse_link_header(
            "<https://x/p/1>; rel=prev, <https://x/p/3>; rel=\"next\"; title=\"Page 3\"",
        );
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].url, "https://x/p/1");
        assert_eq!(links[0].param("rel"), Some("prev"));
        assert_eq!(links[1].url, "https://x/p/3");
        assert_eq!(links[1].param("rel"), Some("next"));
        assert_eq!(links[1].param("title"), Some("Page 3"));
    }

    #[test]
    fn comma_inside_url_does_not_split() {
        let links = parse_link_header("<https://x/a,b>; rel=canonical");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "https://x/a,b");
    }

    #[test]
    fn entry_without_params() {
        let links = parse_link_header("<https://x/>");
        assert_eq!(links[0].url, "https://x/");
        assert!(links[0].params.is_empty());
    }

    #[test]
    fn malformed_param_stops_param_parsing() {
        let links = parse_link_header("<https://x/>; preload; rel=canonical");
        assert!(links[0].params.is_empty());
        assert!(!has_canonical_link("<https://x/>; preload; rel=canonical"));
    }

    #[test]
    fn empty_header_has_no_links() {
        assert!(parse_link_header("").is_empty());
        assert!(parse_link_header(" \"' ").is_empty());
    }

    #[test]
    fn canonical_match_is_case_insensitive_substring() {
        assert!(has_canonical_link("<https://x/>; rel=\"Canonical\""));
        assert!(has_canonical_link("<https://x/>; rel=\"alternate canonical\""));
        assert!(!has_canonical_link("<https://x/>; rel=\"alternate\""));
    }

    #[test]
    fn rel_key_is_case_sensitive() {
        let links = parse_link_header("<https://x/>; REL=\"canonical\"");
        assert_eq!(links[0].param("REL"), Some("canonical"));
        assert_eq!(links[0].param("rel"), None);
        assert!(!has_canonical_link("<https://x/>; REL=\"canonical\""));
    }

    #[test]
    fn canonical_in_later_entry() {
        assert!(has_canonical_link(
            "<https://cdn.x/style.css>; rel=preload, <https://x/>; rel=\"canonical\""
        ));
    }
}
