use crate::utils::error::{Result, SiteError};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> SiteError {
    SiteError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_email(field_name: &str, address: &str) -> Result<()> {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@<>]+@[^\s@<>]+\.[^\s@<>]+$").expect("email pattern is valid")
    });

    if !re.is_match(address) {
        return Err(invalid(
            field_name,
            address,
            "Expected an address of the form name@domain.tld",
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    if path.contains("${") {
        return Err(invalid(
            field_name,
            path,
            "Path references an environment variable that is not set",
        ));
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extension: &str) -> Result<()> {
    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if extension == allowed_extension => Ok(()),
        Some(extension) => Err(invalid(
            field_name,
            file,
            format!(
                "Unsupported file extension: {}. Expected: {}",
                extension, allowed_extension
            ),
        )),
        None => Err(invalid(
            field_name,
            file,
            "File has no extension or invalid filename",
        )),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // Written so that NaN falls outside every range.
    if !(value >= min && value <= max) {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("personal.linkedin", "https://example.com").is_ok());
        assert!(validate_url("personal.thesis", "http://example.com").is_ok());
        assert!(validate_url("personal.linkedin", "").is_err());
        assert!(validate_url("personal.linkedin", "invalid-url").is_err());
        assert!(validate_url("personal.linkedin", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("personal.email", "someone@example.org").is_ok());
        assert!(validate_email("personal.email", "someone@localhost").is_err());
        assert!(validate_email("personal.email", "no at sign").is_err());
        assert!(validate_email("personal.email", "").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("build.archive_filename", "site.zip", "zip").is_ok());
        assert!(validate_file_extension("build.archive_filename", "site.tar", "zip").is_err());
        assert!(validate_file_extension("build.archive_filename", "site", "zip").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("scroll_spy.offset_px", 100.0, 0.0, 2000.0).is_ok());
        assert!(validate_range("scroll_spy.offset_px", -1.0, 0.0, 2000.0).is_err());
        assert!(validate_range("scroll_spy.offset_px", f64::NAN, 0.0, 2000.0).is_err());
        assert!(validate_range("scroll_spy.offset_px", f64::INFINITY, 0.0, 2000.0).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("site.output_path", "./public").is_ok());
        assert!(validate_path("site.output_path", "").is_err());
        assert!(validate_path("site.output_path", "bad\0path").is_err());
        assert!(validate_path("site.output_path", "${PORTFOLIO_OUTPUT}").is_err());
        assert!(validate_path("site.output_path", "/srv/${UNSET}/public").is_err());
    }
}
