//! Top-level configuration loading.

use apm_cnode::ConfigNode;
use std::path::Path;

use crate::error::ConfigError;
use crate::global::load_global_config;
use crate::keys::{AUDIO_HW_MODULE_TAG, PRIMARY_MODULE_NAME};
use crate::module::build_module;
use crate::policy::PolicyConfig;

/// Options controlling how a configuration is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Module that receives the legacy root-level global configuration.
    pub primary_module: String,
}

impl LoadOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route the legacy global configuration to module `name`.
    pub fn with_primary_module(mut self, name: impl Into<String>) -> Self {
        self.primary_module = name.into();
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            primary_module: PRIMARY_MODULE_NAME.to_string(),
        }
    }
}

/// Load a policy configuration file.
///
/// Failing to read the file is the only error. Malformed entries inside it
/// are logged and skipped, and a module with any rejected entry is left out.
///
/// # Example
///
/// ```rust,no_run
/// use apm_config::{LoadOptions, load_config};
///
/// let config = load_config("/vendor/etc/audio_policy.conf", &LoadOptions::default()).unwrap();
/// for module in &config.modules {
///     println!("{}: {} outputs", module.name, module.output_profiles.len());
/// }
/// ```
pub fn load_config(path: impl AsRef<Path>, options: &LoadOptions) -> Result<PolicyConfig, ConfigError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config = load_config_str(&String::from_utf8_lossy(&bytes), options);
    tracing::info!(
        path = %path.display(),
        modules = config.modules.len(),
        "loaded audio policy configuration"
    );
    Ok(config)
}

/// Load a policy configuration from text already in memory.
pub fn load_config_str(text: &str, options: &LoadOptions) -> PolicyConfig {
    let root = apm_cnode::parse(text);
    load_from_tree(&root, options)
}

/// Build a policy configuration from a parsed tree.
pub fn load_from_tree(root: &ConfigNode, options: &LoadOptions) -> PolicyConfig {
    let mut config = PolicyConfig::default();
    load_hw_modules(root, &mut config);

    let primary = config
        .modules
        .iter()
        .position(|m| m.name == options.primary_module);
    match primary {
        Some(index) => {
            // The module is moved out for the duration so the aggregate can be
            // updated alongside it.
            let mut module = config.modules.remove(index);
            load_global_config(root, &mut config, Some(&mut module));
            config.modules.insert(index, module);
        }
        None => load_global_config(root, &mut config, None),
    }
    config
}

/// Load `path`, falling back to [`PolicyConfig::default_topology`] when the
/// file cannot be read.
pub fn load_config_or_default(path: impl AsRef<Path>, options: &LoadOptions) -> PolicyConfig {
    match load_config(path, options) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "using default audio policy configuration");
            PolicyConfig::default_topology()
        }
    }
}

fn load_hw_modules(root: &ConfigNode, config: &mut PolicyConfig) {
    let Some(modules) = root.find(AUDIO_HW_MODULE_TAG) else {
        tracing::debug!("no {AUDIO_HW_MODULE_TAG} section");
        return;
    };

    for node in modules.children() {
        tracing::debug!(module = node.name(), "loading module");
        let (module, status) = build_module(node, config);
        if status.is_ok() {
            config.modules.push(module);
        } else {
            tracing::warn!(module = %module.name, %status, "dropping module");
        }
    }
}
