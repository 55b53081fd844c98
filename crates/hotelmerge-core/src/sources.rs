//! Supplier source configuration: `supplierKey:url[,supplierKey:url...]`.

use crate::ConfigError;

/// Environment variable holding the supplier source list.
pub const SUPPLIER_CONFIG_VAR: &str = "HOTELMERGE_SUPPLIER_CONFIG";

/// One configured supplier feed: the adapter key and the URL serving its
/// JSON array of hotel payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierSource {
    pub key: String,
    pub url: String,
}

impl std::fmt::Display for SupplierSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.key, self.url)
    }
}

/// Parses a comma-separated supplier source list.
///
/// Each entry is split on its first `:` so URLs keep their own colons.
/// Blank entries (e.g. a trailing comma) are ignored. The key is not checked
/// against the known suppliers here; unknown keys surface per source when
/// the loader runs.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] if an entry has no `:` separator,
/// an empty key or an empty URL, or if the list contains no entries at all.
pub fn parse_supplier_sources(raw: &str) -> Result<Vec<SupplierSource>, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: SUPPLIER_CONFIG_VAR.to_string(),
        reason,
    };

    let mut sources = Vec::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (key, url) = entry
            .split_once(':')
            .ok_or_else(|| invalid(format!("entry \"{entry}\" is not in supplierKey:url form")))?;
        let (key, url) = (key.trim(), url.trim());
        if key.is_empty() {
            return Err(invalid(format!("entry \"{entry}\" has an empty supplier key")));
        }
        if url.is_empty() {
            return Err(invalid(format!("entry \"{entry}\" has an empty url")));
        }
        sources.push(SupplierSource {
            key: key.to_string(),
            url: url.to_string(),
        });
    }

    if sources.is_empty() {
        return Err(invalid("no supplier sources configured".to_string()));
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multiple_entries_keeping_url_colons() {
        let sources = parse_supplier_sources(
            "supplierA:https://example.com/a,supplierB:http://localhost:9000/b",
        )
        .unwrap();
        assert_eq!(
            sources,
            vec![
                SupplierSource {
                    key: "supplierA".to_string(),
                    url: "https://example.com/a".to_string(),
                },
                SupplierSource {
                    key: "supplierB".to_string(),
                    url: "http://localhost:9000/b".to_string(),
                },
            ]
        );
    }

    #[test]
    fn ignores_blank_entries_and_whitespace() {
        let sources = parse_supplier_sources(" supplierC : https://example.com/c , ").unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].key, "supplierC");
        assert_eq!(sources[0].url, "https://example.com/c");
    }

    #[test]
    fn rejects_entry_without_separator() {
        let err = parse_supplier_sources("supplierA").unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == SUPPLIER_CONFIG_VAR),
            "got: {err:?}"
        );
    }

    #[test]
    fn rejects_empty_key_or_url() {
        assert!(parse_supplier_sources(":https://example.com").is_err());
        assert!(parse_supplier_sources("supplierA:").is_err());
    }

    #[test]
    fn rejects_empty_list() {
        assert!(parse_supplier_sources(" , ").is_err());
    }

    #[test]
    fn display_round_trips_the_entry_form() {
        let source = SupplierSource {
            key: "supplierA".to_string(),
            url: "https://example.com/a".to_string(),
        };
        assert_eq!(source.to_string(), "supplierA:https://example.com/a");
    }
}
