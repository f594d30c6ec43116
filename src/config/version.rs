//! WooCommerce REST API version definitions.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// WooCommerce REST API namespace version.
///
/// Each version is served under its own namespace below `wp-json/`, e.g.
/// `wp-json/wc/v2`. The client defaults to [`ApiVersion::V2`].
///
/// ```rust
/// use woocommerce_api::ApiVersion;
///
/// let version: ApiVersion = "wc/v3".parse().unwrap();
/// assert_eq!(version, ApiVersion::V3);
/// assert_eq!(ApiVersion::V2.to_string(), "v2");
/// assert_eq!(ApiVersion::V2.namespace(), "wc/v2");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// Legacy `wc/v1` namespace.
    V1,
    /// `wc/v2` namespace.
    #[default]
    V2,
    /// `wc/v3` namespace.
    V3,
}

impl ApiVersion {
    /// Returns the REST namespace for this version (e.g. `wc/v2`).
    #[must_use]
    pub const fn namespace(&self) -> &'static str {
        match self {
            Self::V1 => "wc/v1",
            Self::V2 => "wc/v2",
            Self::V3 => "wc/v3",
        }
    }

    /// Returns the base path below the store URL (e.g. `wp-json/wc/v2`).
    #[must_use]
    pub fn base_path(&self) -> String {
        format!("wp-json/{}", self.namespace())
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
            Self::V3 => "v3",
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let bare = normalized.strip_prefix("wc/").unwrap_or(&normalized);

        match bare {
            "v1" => Ok(Self::V1),
            "v2" => Ok(Self::V2),
            "v3" => Ok(Self::V3),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.trim().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_parses_bare_and_namespaced_forms() {
        assert_eq!("v1".parse::<ApiVersion>().unwrap(), ApiVersion::V1);
        assert_eq!("V2".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
        assert_eq!("wc/v3".parse::<ApiVersion>().unwrap(), ApiVersion::V3);
        assert_eq!(" wc/v2 ".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
    }

    #[test]
    fn test_api_version_rejects_unknown() {
        let result = "v9".parse::<ApiVersion>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidApiVersion { version }) if version == "v9"
        ));
        assert!("wp/v2".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_api_version_default_is_v2() {
        assert_eq!(ApiVersion::default(), ApiVersion::V2);
    }

    #[test]
    fn test_base_path_includes_wp_json_prefix() {
        assert_eq!(ApiVersion::V2.base_path(), "wp-json/wc/v2");
        assert_eq!(ApiVersion::V3.base_path(), "wp-json/wc/v3");
    }

    #[test]
    fn test_api_version_ordering() {
        assert!(ApiVersion::V1 < ApiVersion::V2);
        assert!(ApiVersion::V2 < ApiVersion::V3);
    }
}
