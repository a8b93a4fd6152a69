use crate::core::error::{HubrefError, HubrefResult};
use keyring::Entry;

/// Service name for keyring entries
const KEYRING_SERVICE: &str = "hubref";

/// Keyring key holding the GitHub API token
pub const GITHUB_TOKEN_KEY: &str = "github_token";

/// Manages credential storage using OS keychain
///
/// Platform support:
/// - macOS: Keychain
/// - Windows: Credential Manager
/// - Linux: Secret Service (libsecret)
pub struct CredentialStore;

impl CredentialStore {
    /// Store a credential in the OS keychain
    pub fn store(key: &str, value: &str) -> HubrefResult<()> {
        let entry = Self::entry(key)?;
        entry.set_password(value).map_err(|e| {
            HubrefError::Credential(format!("Failed to store credential in keychain: {}", e))
        })
    }

    /// Retrieve a credential from the OS keychain
    pub fn retrieve(key: &str) -> HubrefResult<String> {
        let entry = Self::entry(key)?;
        entry.get_password().map_err(|e| {
            HubrefError::Credential(format!(
                "Failed to retrieve credential from keychain: {}",
                e
            ))
        })
    }

    /// Delete a credential from the OS keychain
    ///
    /// Deleting a credential that does not exist is not an error.
    pub fn delete(key: &str) -> HubrefResult<()> {
        let entry = Self::entry(key)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(HubrefError::Credential(format!(
                "Failed to delete credential from keychain: {}",
                e
            ))),
        }
    }

    /// Check if a credential exists in the keychain
    pub fn exists(key: &str) -> bool {
        Self::retrieve(key).is_ok()
    }

    fn entry(key: &str) -> HubrefResult<Entry> {
        Entry::new(KEYRING_SERVICE, key)
            .map_err(|e| HubrefError::Credential(format!("Failed to create keyring entry: {}", e)))
    }
}
