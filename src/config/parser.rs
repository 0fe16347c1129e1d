//! Helpers that turn raw command-line strings into config values

/// Usage-rights tokens the search API understands
pub const RIGHTS_CHOICES: [&str; 5] = [
    "cc_publicdomain",
    "cc_attribute",
    "cc_sharealike",
    "cc_noncommercial",
    "cc_nonderived",
];

/// Splits a comma-separated list, trimming entries and dropping empty ones
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolves the usage-rights filter from the two command-line flags
///
/// An explicit `--rights` list takes precedence over `--public-domain`;
/// when both are given the shortcut is ignored with a logged notice.
/// Unknown tokens are warned about but still forwarded to the API, which
/// is the authority on what it accepts. Tokens are joined with `|` as the
/// API expects.
pub fn resolve_rights(rights: Option<&str>, public_domain: bool) -> Option<String> {
    if let Some(raw) = rights {
        if public_domain {
            tracing::warn!("Both --public-domain and --rights given; --rights takes precedence");
        }

        let tokens = parse_list(raw);
        let unknown: Vec<&str> = tokens
            .iter()
            .map(String::as_str)
            .filter(|t| !RIGHTS_CHOICES.contains(t))
            .collect();
        if !unknown.is_empty() {
            tracing::warn!("Unknown rights tokens: {} (continuing anyway)", unknown.join(", "));
        }

        if tokens.is_empty() {
            None
        } else {
            Some(tokens.join("|"))
        }
    } else if public_domain {
        Some("cc_publicdomain".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_basic() {
        assert_eq!(parse_list(".edu,.gov"), vec![".edu", ".gov"]);
    }

    #[test]
    fn test_parse_list_trims_and_drops_empties() {
        assert_eq!(parse_list(" usgs.gov , ,si.edu,"), vec!["usgs.gov", "si.edu"]);
    }

    #[test]
    fn test_parse_list_empty_input() {
        assert!(parse_list("").is_empty());
        assert!(parse_list(" , ,").is_empty());
    }

    #[test]
    fn test_resolve_rights_none() {
        assert_eq!(resolve_rights(None, false), None);
    }

    #[test]
    fn test_resolve_rights_public_domain_shortcut() {
        assert_eq!(
            resolve_rights(None, true),
            Some("cc_publicdomain".to_string())
        );
    }

    #[test]
    fn test_resolve_rights_joins_with_pipe() {
        assert_eq!(
            resolve_rights(Some("cc_publicdomain,cc_attribute"), false),
            Some("cc_publicdomain|cc_attribute".to_string())
        );
    }

    #[test]
    fn test_resolve_rights_explicit_wins_over_shortcut() {
        assert_eq!(
            resolve_rights(Some("cc_attribute"), true),
            Some("cc_attribute".to_string())
        );
    }

    #[test]
    fn test_resolve_rights_unknown_tokens_kept() {
        // Unknown tokens are warned about but still forwarded
        assert_eq!(
            resolve_rights(Some("cc_publicdomain,not_a_right"), false),
            Some("cc_publicdomain|not_a_right".to_string())
        );
    }

    #[test]
    fn test_resolve_rights_empty_list_is_none() {
        assert_eq!(resolve_rights(Some(" , "), false), None);
    }
}
