// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::traits::Transform;

use super::factory::TransformFactory;

/// Name-keyed registry of the transforms the service can dispatch.
///
/// Built once at startup from configuration and shared with the HTTP layer;
/// the configured default transform is resolved eagerly so request handling
/// never has to deal with a missing default.
pub struct TransformRegistry {
    transforms: HashMap<&'static str, Arc<dyn Transform>>,
    default_transform: Arc<dyn Transform>,
}

impl TransformRegistry {
    /// Build the registry with every available implementation registered.
    ///
    /// Fails when the configured default transform does not resolve to a
    /// registered implementation.
    pub fn from_config(cfg: &Config) -> Result<Self, String> {
        let mut transforms: HashMap<&'static str, Arc<dyn Transform>> = HashMap::new();

        for name in TransformFactory::list_available_implementations() {
            transforms.insert(name, TransformFactory::create_transform(name)?);
        }

        let default_transform = transforms
            .get(cfg.transform.default.as_str())
            .cloned()
            .ok_or_else(|| {
                format!(
                    "Unknown transform implementation: '{}'",
                    cfg.transform.default
                )
            })?;

        Ok(Self {
            transforms,
            default_transform,
        })
    }

    /// Look up a transform by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Transform>> {
        self.transforms.get(name).cloned()
    }

    /// The transform applied when callers do not name one.
    pub fn default_transform(&self) -> Arc<dyn Transform> {
        self.default_transform.clone()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn with_transform(
        mut self,
        name: &'static str,
        transform: Arc<dyn Transform>,
    ) -> Self {
        self.transforms.insert(name, transform);
        self
    }
}
