//! Domain normalization for user-entered company URLs.

use crate::error::{CloudDepsError, Result};
use url::Url;

/// Normalize user input to the bare hostname used as a company key.
///
/// A leading `http://` or `https://` is removed by parsing the input as a
/// URL and keeping its host. A leading literal `www.` is stripped afterwards.
/// Input without a scheme is kept verbatim apart from trimming.
pub fn normalize_domain(input: &str) -> Result<String> {
    let trimmed = input.trim();

    let host = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        let url = Url::parse(trimmed)?;
        url.host_str()
            .ok_or_else(|| CloudDepsError::invalid_url(trimmed))?
            .to_string()
    } else {
        trimmed.to_string()
    };

    let domain = host.strip_prefix("www.").unwrap_or(&host);
    if domain.is_empty() {
        return Err(CloudDepsError::invalid_url(trimmed));
    }
    Ok(domain.to_string())
}

/// Derive a display name from a normalized domain.
///
/// Takes the first label and upper-cases its first character:
/// `stripe.com` becomes `Stripe`.
#[must_use]
pub fn display_name_from_domain(domain: &str) -> String {
    let label = domain.split('.').next().unwrap_or(domain);
    let mut chars = label.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Whether free text typed into the search box looks like a domain.
#[must_use]
pub fn looks_like_url(text: &str) -> bool {
    text.contains('.') && text.chars().count() > 3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_scheme_and_www() {
        assert_eq!(normalize_domain("https://www.stripe.com").unwrap(), "stripe.com");
        assert_eq!(normalize_domain("http://stripe.com/pricing").unwrap(), "stripe.com");
        assert_eq!(normalize_domain("www.stripe.com").unwrap(), "stripe.com");
        assert_eq!(normalize_domain("  stripe.com  ").unwrap(), "stripe.com");
    }

    #[test]
    fn test_scheme_parse_lowercases_host_and_drops_port() {
        assert_eq!(
            normalize_domain("https://WWW.Example.COM:8443/x").unwrap(),
            "example.com"
        );
    }

    #[test]
    fn test_www_only_stripped_as_prefix() {
        assert_eq!(normalize_domain("shop.www.example.com").unwrap(), "shop.www.example.com");
    }

    #[test]
    fn test_unparsable_url_is_error() {
        assert!(normalize_domain("https://").is_err());
        assert!(normalize_domain("https://exa mple.com").is_err());
    }

    #[test]
    fn test_bare_www_is_error() {
        assert!(normalize_domain("www.").is_err());
    }

    #[test]
    fn test_display_name_from_domain() {
        assert_eq!(display_name_from_domain("stripe.com"), "Stripe");
        assert_eq!(display_name_from_domain("badsite.com"), "Badsite");
        assert_eq!(display_name_from_domain("localhost"), "Localhost");
        assert_eq!(display_name_from_domain(""), "");
    }

    #[test]
    fn test_looks_like_url() {
        assert!(looks_like_url("stripe.com"));
        assert!(looks_like_url("a.io"));
        assert!(!looks_like_url("a.b"));
        assert!(!looks_like_url("stripe"));
    }
}
