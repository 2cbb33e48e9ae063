//! One line of the password file
//!
//! A record is `<site>:<token>`. The site comes first and the line is split
//! on the first delimiter, so a site can never contain one.

use crate::error::{VaultError, VaultResult};

/// Separates the site name from the encrypted token
pub const DELIMITER: char = ':';

/// A site name paired with its encrypted password token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub site: &'a str,
    pub token: &'a str,
}

impl<'a> Record<'a> {
    pub fn new(site: &'a str, token: &'a str) -> Self {
        Self { site, token }
    }

    /// Parse a line, ignoring trailing whitespace
    pub fn parse(line: &'a str) -> VaultResult<Self> {
        let (site, token) = line
            .trim_end()
            .split_once(DELIMITER)
            .ok_or_else(|| VaultError::Validation("Record has no delimiter".to_string()))?;

        Ok(Self { site, token })
    }

    /// Render the record without its trailing newline
    pub fn to_line(&self) -> String {
        format!("{}{}{}", self.site, DELIMITER, self.token)
    }
}

/// Reject site names that would corrupt the line format
pub fn validate_site(site: &str) -> VaultResult<()> {
    if site.contains(DELIMITER) {
        return Err(VaultError::Validation(format!(
            "Site name cannot contain '{}': {}",
            DELIMITER, site
        )));
    }

    if site.contains(['\n', '\r']) {
        return Err(VaultError::Validation(
            "Site name cannot contain line breaks".to_string(),
        ));
    }

    Ok(())
}
