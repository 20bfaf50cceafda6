use crate::error::{BillingError, Result};
use std::ffi::OsString;
use std::path::PathBuf;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_AWS_BIN: &str = "aws";
pub const DEFAULT_SEARCH_PATH: &str = "/usr/local/bin";

/// Settings handed to the AWS CLI client at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub region: String,
    pub currency: String,
    pub aws_bin: String,
    /// Directory prepended to the child process `PATH`.
    pub search_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            aws_bin: DEFAULT_AWS_BIN.to_string(),
            search_path: Some(PathBuf::from(DEFAULT_SEARCH_PATH)),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("region", &self.region),
            ("currency", &self.currency),
            ("aws_bin", &self.aws_bin),
        ] {
            if value.trim().is_empty() {
                return Err(BillingError::Config(format!("{} cannot be empty", name)));
            }
        }
        if let Some(dir) = &self.search_path {
            std::env::join_paths([dir]).map_err(|e| {
                BillingError::Config(format!("search path {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }

    /// `PATH` value for the child process, or `None` to inherit ours.
    pub fn child_path(&self, inherited: Option<OsString>) -> Result<Option<OsString>> {
        let Some(prefix) = &self.search_path else {
            return Ok(None);
        };
        let mut dirs = vec![prefix.clone()];
        if let Some(inherited) = inherited {
            dirs.extend(std::env::split_paths(&inherited));
        }
        let path = std::env::join_paths(dirs).map_err(|e| {
            BillingError::Config(format!("search path {}: {}", prefix.display(), e))
        })?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.currency, "USD");
        assert_eq!(config.aws_bin, "aws");
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        assert!(ClientConfig::default().validate().is_ok());

        let config = ClientConfig {
            region: " ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(BillingError::Config(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_child_path_prepends() {
        let config = ClientConfig {
            search_path: Some(PathBuf::from("/opt/aws/bin")),
            ..Default::default()
        };

        let path = config.child_path(Some(OsString::from("/usr/bin:/bin"))).unwrap();
        assert_eq!(path, Some(OsString::from("/opt/aws/bin:/usr/bin:/bin")));

        let path = config.child_path(None).unwrap();
        assert_eq!(path, Some(OsString::from("/opt/aws/bin")));
    }

    #[cfg(unix)]
    #[test]
    fn test_search_path_with_separator_rejected() {
        let config = ClientConfig {
            search_path: Some(PathBuf::from("/opt/aws:/bin")),
            ..Default::default()
        };

        assert!(matches!(config.validate(), Err(BillingError::Config(_))));
        assert!(matches!(
            config.child_path(Some(OsString::from("/usr/bin"))),
            Err(BillingError::Config(_))
        ));
    }

    #[test]
    fn test_child_path_inherits_without_prefix() {
        let config = ClientConfig {
            search_path: None,
            ..Default::default()
        };
        assert_eq!(config.child_path(Some(OsString::from("/usr/bin"))).unwrap(), None);
    }
}
