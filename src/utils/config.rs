use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable, falling back to a default when the variable
/// is absent or does not parse as the requested type
///
/// # Arguments
///
/// * `name` - The name of the environment variable
/// * `default` - The value to use when the variable is missing or unparsable
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(name: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(name) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", name, raw);
            default
        }),
        Err(_) => default,
    }
}
