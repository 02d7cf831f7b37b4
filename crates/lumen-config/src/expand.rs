//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_year_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LUMEN_TEST_YEAR", "2020");
        }
        let result = expand_env("© ${LUMEN_TEST_YEAR}", "site.copyright").unwrap();
        assert_eq!(result, "© 2020");
        unsafe {
            std::env::remove_var("LUMEN_TEST_YEAR");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LUMEN_UNSET_SUBTITLE");
        }
        let result = expand_env("${LUMEN_UNSET_SUBTITLE:-Engineer}", "site.subtitle").unwrap();
        assert_eq!(result, "Engineer");
    }

    #[test]
    fn test_expand_with_default_prefers_set_value() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LUMEN_TEST_PHOTO", "/static/me.png");
        }
        let result = expand_env("${LUMEN_TEST_PHOTO:-/NewPixelMe.png}", "sidebar.photo").unwrap();
        assert_eq!(result, "/static/me.png");
        unsafe {
            std::env::remove_var("LUMEN_TEST_PHOTO");
        }
    }

    #[test]
    fn test_expand_several_vars_in_copyright() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("LUMEN_TEST_FROM", "2016");
            std::env::set_var("LUMEN_TEST_TO", "2020");
        }
        let result = expand_env(
            "© ${LUMEN_TEST_FROM}-${LUMEN_TEST_TO} Chad Lumley",
            "site.copyright",
        )
        .unwrap();
        assert_eq!(result, "© 2016-2020 Chad Lumley");
        unsafe {
            std::env::remove_var("LUMEN_TEST_FROM");
            std::env::remove_var("LUMEN_TEST_TO");
        }
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("LUMEN_MISSING_EMAIL");
        }
        let err = expand_env("${LUMEN_MISSING_EMAIL}", "site.author.email").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("LUMEN_MISSING_EMAIL"));
        assert!(err.to_string().contains("site.author.email"));
    }

    #[test]
    fn test_expand_literal_unchanged() {
        let result = expand_env("© 2020 Chad Lumley", "site.copyright").unwrap();
        assert_eq!(result, "© 2020 Chad Lumley");
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("Costs $5", "site.subtitle").unwrap();
        assert_eq!(result, "Costs $5");
    }
}
