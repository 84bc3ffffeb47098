use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable, falling back to a default when it is unset
/// or fails to parse
///
/// # Arguments
/// * `env_var` - Name of the environment variable
/// * `default` - Value to use when the variable is missing or unparsable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, returning `None` when it is
/// unset or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().ok(),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_used_when_missing() {
        let value: u64 = get_env_or_default("SENDPULSE_TEST_MISSING_VAR", 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn value_parsed_when_present() {
        unsafe { env::set_var("SENDPULSE_TEST_PRESENT_VAR", "7") };
        let value: u64 = get_env_or_default("SENDPULSE_TEST_PRESENT_VAR", 42);
        assert_eq!(value, 7);
        unsafe { env::remove_var("SENDPULSE_TEST_PRESENT_VAR") };
    }

    #[test]
    fn none_when_unparsable() {
        unsafe { env::set_var("SENDPULSE_TEST_BAD_VAR", "not-a-number") };
        let value: Option<u32> = get_env_or_none("SENDPULSE_TEST_BAD_VAR");
        assert_eq!(value, None);
        unsafe { env::remove_var("SENDPULSE_TEST_BAD_VAR") };
    }
}
