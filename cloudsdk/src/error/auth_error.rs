//! Credential resolution errors.

use thiserror::Error;

/// Errors while resolving or applying credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential was configured and none of the environment variables
    /// in the fallback chain is set.
    #[error("Missing credential for {api}: set one of {}", .env_vars.join(", "))]
    MissingCredential {
        /// The API that requires the credential.
        api: String,
        /// Environment variables that were consulted, in order.
        env_vars: Vec<String>,
    },

    /// The credential cannot be sent as an HTTP header value.
    #[error("Invalid credential format for header {header}")]
    InvalidCredential {
        /// Header the credential was destined for.
        header: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_lists_env_chain() {
        let err = AuthError::MissingCredential {
            api: "AzureMonitor".to_string(),
            env_vars: vec!["AZURE_MONITOR_TOKEN".to_string(), "AZURE_TOKEN".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Missing credential for AzureMonitor: set one of AZURE_MONITOR_TOKEN, AZURE_TOKEN"
        );
    }

    #[test]
    fn test_invalid_credential() {
        let err = AuthError::InvalidCredential {
            header: "Authorization".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid credential format for header Authorization");
    }
}
