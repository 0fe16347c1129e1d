//! Search string assembly
//!
//! A query is the category term, a fixed suffix, and optional `site:`
//! restriction clauses built from TLD and host lists.

/// Builds a clause like `(site:.edu OR site:.gov)` from TLD-ish entries
///
/// Accepts items like `.edu`, `gov`, or `example.gov` and normalizes bare
/// TLDs to the dotted form. Entries that already look like hosts are used
/// as-is. Returns an empty string when nothing survives cleaning.
pub fn build_domain_clause(domains: &[String]) -> String {
    let cleaned: Vec<String> = domains
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .map(|d| {
            if d.starts_with('.') || d.contains('.') {
                format!("site:{}", d)
            } else {
                format!("site:.{}", d)
            }
        })
        .collect();

    join_site_clauses(&cleaned)
}

/// Builds a clause like `(site:usgs.gov OR site:si.edu)` from host entries
pub fn build_site_clause(sites: &[String]) -> String {
    let cleaned: Vec<String> = sites
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.starts_with("site:") {
                s.to_string()
            } else {
                format!("site:{}", s)
            }
        })
        .collect();

    join_site_clauses(&cleaned)
}

fn join_site_clauses(clauses: &[String]) -> String {
    if clauses.is_empty() {
        String::new()
    } else {
        format!("({})", clauses.join(" OR "))
    }
}

/// Assembles the full query string for one category term
///
/// Empty parts are elided so a missing suffix or absent restriction
/// clauses never leave stray whitespace.
pub fn build_query(term: &str, suffix: &str, domain_clause: &str, site_clause: &str) -> String {
    [term, suffix, domain_clause, site_clause]
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_domain_clause_dotted_tld() {
        assert_eq!(
            build_domain_clause(&strings(&[".edu", ".gov"])),
            "(site:.edu OR site:.gov)"
        );
    }

    #[test]
    fn test_domain_clause_bare_tld_gets_dot() {
        assert_eq!(build_domain_clause(&strings(&["edu"])), "(site:.edu)");
    }

    #[test]
    fn test_domain_clause_host_passes_through() {
        assert_eq!(
            build_domain_clause(&strings(&["example.gov"])),
            "(site:example.gov)"
        );
    }

    #[test]
    fn test_domain_clause_empty() {
        assert_eq!(build_domain_clause(&[]), "");
        assert_eq!(build_domain_clause(&strings(&["", "  "])), "");
    }

    #[test]
    fn test_site_clause_hosts() {
        assert_eq!(
            build_site_clause(&strings(&["usgs.gov", "si.edu"])),
            "(site:usgs.gov OR site:si.edu)"
        );
    }

    #[test]
    fn test_site_clause_prefixed_entry_not_doubled() {
        assert_eq!(
            build_site_clause(&strings(&["site:usgs.gov"])),
            "(site:usgs.gov)"
        );
    }

    #[test]
    fn test_build_query_all_parts() {
        let query = build_query(
            "Basalt",
            "rock sample",
            "(site:.edu)",
            "(site:usgs.gov)",
        );
        assert_eq!(query, "Basalt rock sample (site:.edu) (site:usgs.gov)");
    }

    #[test]
    fn test_build_query_elides_empty_parts() {
        assert_eq!(build_query("Basalt", "", "", ""), "Basalt");
        assert_eq!(
            build_query("Basalt", "rock sample", "", ""),
            "Basalt rock sample"
        );
    }
}
