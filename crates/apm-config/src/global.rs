//! Global configuration sections.
//!
//! A module may carry its own `global_configuration` section naming attached
//! devices, the default output device and its HAL version. Legacy files have a
//! single such section at the file root instead, which also holds the speaker
//! DRC flag and applies to the primary module.

use apm_cnode::ConfigNode;
use apm_types::DeviceType;
use apm_types::convert::parse_bool;
use std::sync::Arc;

use crate::device::DeviceEndpoint;
use crate::keys::{GLOBAL_CONFIG_TAG, LegacyGlobalKey, ModuleGlobalKey};
use crate::module::{HalVersion, HwModule};
use crate::policy::PolicyConfig;
use crate::tags::resolve_device_tags;

/// Apply the `global_configuration` child of `root`, if any, for `module`.
///
/// Attached device lists resolve against the module's declared devices and
/// are merged into the aggregate. The default output device must be a literal
/// device type; anything else leaves the current default in place.
pub fn load_module_global_config(root: &ConfigNode, module: &mut HwModule, config: &mut PolicyConfig) {
    let Some(global) = root.find(GLOBAL_CONFIG_TAG) else {
        return;
    };

    for child in global.children() {
        let value = child.value();
        match ModuleGlobalKey::from_name(child.name()) {
            Some(ModuleGlobalKey::AttachedOutputDevices) => {
                let devices = resolve_device_tags(value, &module.declared_devices);
                tracing::debug!(module = %module.name, devices = devices.types(), "attached output devices");
                config.available_output_devices.add_all(&devices);
            }
            Some(ModuleGlobalKey::DefaultOutputDevice) => {
                let device = DeviceType::from_token(value)
                    .and_then(|device_type| DeviceEndpoint::new(device_type).ok());
                match device {
                    Some(device) => {
                        tracing::debug!(module = %module.name, device = %device.device_type(), "default output device");
                        config.default_output_device = Some(Arc::new(device));
                    }
                    None => {
                        tracing::warn!(module = %module.name, value, "default output device not specified");
                    }
                }
            }
            Some(ModuleGlobalKey::AttachedInputDevices) => {
                let devices = resolve_device_tags(value, &module.declared_devices);
                tracing::debug!(module = %module.name, devices = devices.types(), "attached input devices");
                config.available_input_devices.add_all(&devices);
            }
            Some(ModuleGlobalKey::HalVersion) => match HalVersion::parse(value) {
                Some(version) => {
                    tracing::debug!(module = %module.name, %version, encoded = version.encoded(), "hal version");
                    module.hal_version = Some(version);
                }
                None => {
                    tracing::warn!(module = %module.name, value, "malformed audio HAL version");
                }
            },
            None => {}
        }
    }
}

/// Apply the legacy file-root `global_configuration` section.
///
/// Reads the speaker DRC flag, then applies the module-level keys of the same
/// section to `primary`. Without a primary module only the flag is applied.
pub fn load_global_config(root: &ConfigNode, config: &mut PolicyConfig, primary: Option<&mut HwModule>) {
    let Some(global) = root.find(GLOBAL_CONFIG_TAG) else {
        return;
    };

    for child in global.children() {
        let Some(LegacyGlobalKey::SpeakerDrcEnabled) = LegacyGlobalKey::from_name(child.name()) else {
            continue;
        };
        match parse_bool(child.value()) {
            Some(enabled) => {
                tracing::debug!(enabled, "speaker drc");
                config.speaker_drc_enabled = enabled;
            }
            None => {
                tracing::warn!(value = child.value(), "malformed speaker_drc_enabled");
            }
        }
    }

    match primary {
        Some(module) => load_module_global_config(root, module, config),
        None => tracing::debug!("no primary module, skipping legacy device configuration"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apm_cnode::parse;

    fn module_with_declared(tags: &[(&str, DeviceType)]) -> HwModule {
        let mut module = HwModule::new("primary");
        for &(tag, device_type) in tags {
            module
                .declared_devices
                .add(Arc::new(DeviceEndpoint::new(device_type).unwrap().with_tag(tag)));
        }
        module
    }

    #[test]
    fn absent_section_is_a_no_op() {
        let root = parse("other { }");
        let mut module = HwModule::new("primary");
        let mut config = PolicyConfig::default();
        load_module_global_config(&root, &mut module, &mut config);
        assert!(config.available_output_devices.is_empty());
        assert!(config.default_output_device.is_none());
        assert!(module.hal_version.is_none());
    }

    #[test]
    fn attached_devices_resolve_against_module() {
        let root = parse(
            "global_configuration {\n\
               attached_output_devices Speaker|AUDIO_DEVICE_OUT_EARPIECE|Unknown\n\
               attached_input_devices Mic\n\
             }",
        );
        let mut module = module_with_declared(&[
            ("Speaker", DeviceType::OUT_SPEAKER),
            ("Mic", DeviceType::IN_BUILTIN_MIC),
        ]);
        let mut config = PolicyConfig::default();
        load_module_global_config(&root, &mut module, &mut config);

        assert_eq!(config.available_output_devices.len(), 2);
        assert!(Arc::ptr_eq(
            config.available_output_devices.get(0).unwrap(),
            module.declared_devices.find_by_tag("Speaker").unwrap()
        ));
        assert_eq!(config.available_input_devices.len(), 1);
    }

    #[test]
    fn default_output_device_is_literal_only() {
        let root = parse("global_configuration { default_output_device Speaker }");
        let mut module = module_with_declared(&[("Speaker", DeviceType::OUT_SPEAKER)]);
        let mut config = PolicyConfig::default();
        load_module_global_config(&root, &mut module, &mut config);
        assert!(config.default_output_device.is_none());

        let root = parse("global_configuration { default_output_device AUDIO_DEVICE_OUT_SPEAKER }");
        load_module_global_config(&root, &mut module, &mut config);
        let default = config.default_output_device.as_ref().unwrap();
        assert_eq!(default.device_type(), DeviceType::OUT_SPEAKER);
        assert!(default.tag().is_none());
    }

    #[test]
    fn bad_default_keeps_previous_default() {
        let mut module = HwModule::new("primary");
        let mut config = PolicyConfig::default();
        load_module_global_config(
            &parse("global_configuration { default_output_device AUDIO_DEVICE_OUT_EARPIECE }"),
            &mut module,
            &mut config,
        );
        load_module_global_config(
            &parse("global_configuration { default_output_device AUDIO_DEVICE_NONE }"),
            &mut module,
            &mut config,
        );
        assert_eq!(
            config.default_output_device.unwrap().device_type(),
            DeviceType::OUT_EARPIECE
        );
    }

    #[test]
    fn malformed_hal_version_leaves_module_unset() {
        let root = parse("global_configuration { audio_hal_version latest }");
        let mut module = HwModule::new("primary");
        let mut config = PolicyConfig::default();
        load_module_global_config(&root, &mut module, &mut config);
        assert!(module.hal_version.is_none());
    }

    #[test]
    fn legacy_section_sets_drc_and_applies_to_primary() {
        let root = parse(
            "global_configuration {\n\
               speaker_drc_enabled TRUE\n\
               attached_output_devices Speaker\n\
               audio_hal_version 3.0\n\
             }",
        );
        let mut module = module_with_declared(&[("Speaker", DeviceType::OUT_SPEAKER)]);
        let mut config = PolicyConfig::default();
        load_global_config(&root, &mut config, Some(&mut module));

        assert!(config.speaker_drc_enabled);
        assert_eq!(config.available_output_devices.len(), 1);
        assert_eq!(module.hal_version, Some(HalVersion::new(3, 0)));
    }

    #[test]
    fn legacy_section_without_primary_only_sets_drc() {
        let root = parse(
            "global_configuration {\n\
               speaker_drc_enabled 1\n\
               attached_output_devices AUDIO_DEVICE_OUT_SPEAKER\n\
             }",
        );
        let mut config = PolicyConfig::default();
        load_global_config(&root, &mut config, None);
        assert!(config.speaker_drc_enabled);
        assert!(config.available_output_devices.is_empty());
    }

    #[test]
    fn malformed_drc_keeps_default() {
        let root = parse("global_configuration { speaker_drc_enabled maybe }");
        let mut config = PolicyConfig::default();
        load_global_config(&root, &mut config, None);
        assert!(!config.speaker_drc_enabled);
    }
}
