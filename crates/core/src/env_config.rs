//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently.
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read a string variable, treating an empty or whitespace value as unset.
#[must_use]
pub fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // SAFETY (all tests): each test touches a variable name no other test reads.

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "PHONEBOOK_TEST_ENV_PARSE_VALID";
        unsafe { std::env::set_var(var_name, "8080") };
        let result: u16 = env_parse_with_default(var_name, 3001);
        assert_eq!(result, 8080);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "PHONEBOOK_TEST_ENV_PARSE_INVALID";
        unsafe { std::env::set_var(var_name, "banana") };
        let result: u16 = env_parse_with_default(var_name, 3001);
        assert_eq!(result, 3001);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "PHONEBOOK_TEST_ENV_PARSE_MISSING";
        unsafe { std::env::remove_var(var_name) };
        let result: u16 = env_parse_with_default(var_name, 3001);
        assert_eq!(result, 3001);
    }

    #[test]
    fn test_env_non_empty() {
        let var_name = "PHONEBOOK_TEST_ENV_NON_EMPTY";
        unsafe { std::env::set_var(var_name, "   ") };
        assert_eq!(env_non_empty(var_name), None);
        unsafe { std::env::set_var(var_name, " postgres://localhost/phonebook ") };
        assert_eq!(env_non_empty(var_name).as_deref(), Some("postgres://localhost/phonebook"));
        unsafe { std::env::remove_var(var_name) };
    }
}
