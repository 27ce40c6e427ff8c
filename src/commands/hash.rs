//! Password-hash utility.
//!
//! Produces MySQL authentication strings from plaintext passwords. Only
//! the `mysql_native_password` plugin is supported: its authentication
//! string is `*` followed by the uppercase hex SHA-1 of the SHA-1 of the
//! password.

use crate::utils::error::HashError;
use sha1::{Digest, Sha1};

/// Plugin name handled by [`hash_password`]
pub const NATIVE_PASSWORD_PLUGIN: &str = "mysql_native_password";

/// Build the authentication string for a password under the given plugin
///
/// **Public** - entry point for the hash-password command
///
/// # Errors
/// * `HashError::UnsupportedPlugin` - any plugin other than
///   `mysql_native_password`
pub fn hash_password(password: &str, plugin: &str) -> Result<String, HashError> {
    if plugin != NATIVE_PASSWORD_PLUGIN {
        return Err(HashError::UnsupportedPlugin(plugin.to_string()));
    }

    Ok(hash_native_password(password))
}

/// Double SHA-1 as used by mysql_native_password
///
/// **Private** - internal helper for hash_password
fn hash_native_password(password: &str) -> String {
    let stage1 = Sha1::digest(password.as_bytes());
    let stage2 = Sha1::digest(stage1);

    format!("*{}", hex::encode_upper(stage2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_native_password_vector() {
        // Matches SELECT PASSWORD('password') on a pre-8.0 server.
        assert_eq!(
            hash_password("password", NATIVE_PASSWORD_PLUGIN).unwrap(),
            "*2470C0C06DEE42FD1618BB99005ADCA2EC9D1E19"
        );
    }

    #[test]
    fn test_unsupported_plugin_rejected() {
        let err = hash_password("secret", "caching_sha2_password").unwrap_err();
        assert!(err.to_string().contains("caching_sha2_password"));
    }
}
