//! Hostname validation: per-label charset and dash-placement rules.

use super::error::RejectKind;

/// Validate a host string (wildcard prefix already stripped).
///
/// Dots separate labels and are always permitted; each label independently
/// must be non-empty, contain only `[A-Za-z0-9-]`, and neither start nor end
/// with `-`. A `%` anywhere in the host is refused before the label scan:
/// percent-encoded hostnames are never accepted, punycode is the caller's
/// problem. Case is preserved.
pub fn validate_host(host: &str) -> Result<(), RejectKind> {
    if host.is_empty() {
        return Err(RejectKind::EmptyHost);
    }
    if host.contains('%') {
        return Err(RejectKind::PercentEncodingInHost);
    }
    for label in host.split('.') {
        validate_label(label)?;
    }
    Ok(())
}

fn validate_label(label: &str) -> Result<(), RejectKind> {
    if label.is_empty() {
        return Err(RejectKind::InvalidHostnameCharset(None));
    }
    if let Some(bad) = label.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
        return Err(RejectKind::InvalidHostnameCharset(Some(bad)));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(RejectKind::InvalidDashPlacement);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_hostnames() {
        assert_eq!(validate_host("example.com"), Ok(()));
        assert_eq!(validate_host("sub-domain.example.co.uk"), Ok(()));
        assert_eq!(validate_host("localhost"), Ok(()));
        assert_eq!(validate_host("123.example.com"), Ok(()));
    }

    #[test]
    fn case_is_allowed_and_preserved() {
        assert_eq!(validate_host("Example.COM"), Ok(()));
    }

    #[test]
    fn reports_the_offending_character() {
        assert_eq!(
            validate_host("exa_mple.com"),
            Err(RejectKind::InvalidHostnameCharset(Some('_')))
        );
        assert_eq!(
            validate_host("example.com?q=1"),
            Err(RejectKind::InvalidHostnameCharset(Some('?')))
        );
    }

    #[test]
    fn dash_placement_per_label() {
        assert_eq!(
            validate_host("-example.com"),
            Err(RejectKind::InvalidDashPlacement)
        );
        assert_eq!(
            validate_host("example-.com"),
            Err(RejectKind::InvalidDashPlacement)
        );
        assert_eq!(
            validate_host("a.-b.c"),
            Err(RejectKind::InvalidDashPlacement)
        );
        assert_eq!(validate_host("a-b.c"), Ok(()));
    }

    #[test]
    fn percent_is_always_rejected() {
        assert_eq!(
            validate_host("ex%41mple.com"),
            Err(RejectKind::PercentEncodingInHost)
        );
        // Checked before the charset scan, so the reason is percent-specific.
        assert_eq!(
            validate_host("%"),
            Err(RejectKind::PercentEncodingInHost)
        );
    }

    #[test]
    fn empty_labels_are_rejected() {
        assert_eq!(
            validate_host("a..b"),
            Err(RejectKind::InvalidHostnameCharset(None))
        );
        assert_eq!(
            validate_host("example.com."),
            Err(RejectKind::InvalidHostnameCharset(None))
        );
        assert_eq!(
            validate_host(".example.com"),
            Err(RejectKind::InvalidHostnameCharset(None))
        );
    }

    #[test]
    fn empty_host_is_rejected() {
        assert_eq!(validate_host(""), Err(RejectKind::EmptyHost));
    }
}
