//! Email address syntax checking.
//!
//! [`EmailCheck`] is the capability the email rule relies on. The
//! bundled [`EmailSyntax`] only looks at the shape of the address and
//! never resolves the domain.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::EmailError;

const MAX_ADDRESS_LENGTH: usize = 254;
const MAX_LOCAL_LENGTH: usize = 64;
const MAX_LABEL_LENGTH: usize = 63;

// Characters allowed in an unquoted local part (RFC 5322 atext) plus unicode letters and digits
static LOCAL_INVALID_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}!#$%&'*+/=?^_`{|}~.\-]").unwrap());

static DOMAIN_INVALID_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}.\-]").unwrap());

pub trait EmailCheck {
    /// Returns the reason the value is not an acceptable email address.
    fn check(&self, value: &str) -> Result<(), EmailError>;
}

impl<F> EmailCheck for F
where
    F: Fn(&str) -> Result<(), EmailError>,
{
    fn check(&self, value: &str) -> Result<(), EmailError> {
        self(value)
    }
}

/// Structural email validation: local part and domain shape only.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailSyntax;

impl EmailSyntax {
    pub fn new() -> Self {
        Self
    }

    fn check_local_part(local: &str) -> Result<(), EmailError> {
        if local.is_empty() {
            return Err(EmailError::EmptyLocalPart);
        }
        let len = local.chars().count();
        if len > MAX_LOCAL_LENGTH {
            return Err(EmailError::LocalPartTooLong(len));
        }
        let bad = collect_matches(&LOCAL_INVALID_CHARS, local);
        if !bad.is_empty() {
            return Err(EmailError::InvalidLocalCharacters(bad));
        }
        if local.starts_with('.') || local.ends_with('.') {
            return Err(EmailError::LocalPartDotEdge);
        }
        if local.contains("..") {
            return Err(EmailError::ConsecutiveDots);
        }
        Ok(())
    }

    fn check_domain(domain: &str) -> Result<(), EmailError> {
        if domain.is_empty() {
            return Err(EmailError::EmptyDomain);
        }
        let bad = collect_matches(&DOMAIN_INVALID_CHARS, domain);
        if !bad.is_empty() {
            return Err(EmailError::InvalidDomainCharacters(bad));
        }
        if domain.starts_with('.') || domain.ends_with('.') {
            return Err(EmailError::DomainDotEdge);
        }
        if domain.contains("..") {
            return Err(EmailError::ConsecutiveDots);
        }
        if !domain.contains('.') {
            return Err(EmailError::DomainWithoutDot);
        }

        for label in domain.split('.') {
            if label.chars().count() > MAX_LABEL_LENGTH {
                return Err(EmailError::LabelTooLong);
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(EmailError::LabelHyphenEdge(label.to_string()));
            }
        }

        let tld = domain.rsplit('.').next().unwrap_or_default();
        if tld.chars().all(|c| c.is_numeric()) {
            return Err(EmailError::NumericTopLevelDomain);
        }
        Ok(())
    }
}

impl EmailCheck for EmailSyntax {
    fn check(&self, value: &str) -> Result<(), EmailError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(EmailError::Empty);
        }

        let mut parts = value.split('@');
        let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => (local, domain),
            _ => return Err(EmailError::AtSignCount),
        };

        let len = value.chars().count();
        if len > MAX_ADDRESS_LENGTH {
            return Err(EmailError::TooLong(len));
        }

        Self::check_local_part(local)?;
        Self::check_domain(domain)
    }
}

/// Distinct offending characters, quoted, in order of first appearance
fn collect_matches(pattern: &Regex, value: &str) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for m in pattern.find_iter(value) {
        if !seen.contains(&m.as_str()) {
            seen.push(m.as_str());
        }
    }
    seen.iter()
        .map(|c| format!("'{}'", c))
        .collect::<Vec<_>>()
        .join(", ")
}
