//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a marina's
//! booking policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{BookingPolicy, CancellationConfig, MarinaMetadata, PricingPolicy, RefundPolicy};

/// Loads and provides access to a marina's booking policy.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── marina.yaml        # Marina metadata
/// ├── pricing.yaml       # Long-stay discount rule
/// └── cancellation.yaml  # Refund tiers
/// ```
///
/// # Example
///
/// ```no_run
/// use dock_booking_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded policy for: {}", loader.marina().name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    policy: BookingPolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The pricing rule or refund tiers are inconsistent
    ///
    /// # Example
    ///
    /// ```no_run
    /// use dock_booking_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), dock_booking_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<MarinaMetadata>(&path.join("marina.yaml"))?;

        let pricing = Self::load_yaml::<PricingPolicy>(&path.join("pricing.yaml"))?;
        pricing.validate()?;

        let cancellation = Self::load_yaml::<CancellationConfig>(&path.join("cancellation.yaml"))?;
        let refund = RefundPolicy::new(cancellation.tiers)?;

        debug!(
            marina = %metadata.name,
            version = %metadata.version,
            refund_tiers = refund.tiers().len(),
            "Loaded booking policy"
        );

        Ok(Self {
            policy: BookingPolicy::new(metadata, pricing, refund),
        })
    }

    /// Wraps an already-built policy.
    pub fn from_policy(policy: BookingPolicy) -> Self {
        Self { policy }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded booking policy.
    pub fn policy(&self) -> &BookingPolicy {
        &self.policy
    }

    /// Returns the marina metadata.
    pub fn marina(&self) -> &MarinaMetadata {
        self.policy.marina()
    }
}
