use crate::constants::TOKEN_INPUT_NAME;
use once_cell::sync::Lazy;
use regex::Regex;

// The login form renders the token as a hidden input; attribute order varies
// between portal deployments, so both orderings are matched.
static TOKEN_NAME_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"<input[^>]*\bname="{TOKEN_INPUT_NAME}"[^>]*\bvalue="([^"]*)""#
    ))
    .expect("token regex")
});
static TOKEN_VALUE_FIRST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r#"<input[^>]*\bvalue="([^"]*)"[^>]*\bname="{TOKEN_INPUT_NAME}""#
    ))
    .expect("token regex")
});

/// Extracts the CSRF token value from the landing-page HTML
///
/// Looks for `<input name="authenticity_token" value="...">` in the login
/// form. An input with an empty `value` attribute counts as missing.
///
/// # Arguments
/// * `html` - The full landing-page body
///
/// # Returns
/// * `Some(token)` when the hidden input is present with a non-empty value
/// * `None` otherwise
pub fn extract_authenticity_token(html: &str) -> Option<String> {
    TOKEN_NAME_FIRST
        .captures(html)
        .or_else(|| TOKEN_VALUE_FIRST.captures(html))
        .map(|caps| caps[1].to_string())
        .filter(|value| !value.is_empty())
}
