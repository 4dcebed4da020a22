//! Integration tests for apm-config.
//!
//! These tests load complete configuration files from disk and check the
//! resulting model end to end.

use apm_config::apm_types::{AudioFormat, ChannelMask, DeviceType, InputFlags, OutputFlags};
use apm_config::{
    ConfigError, HalVersion, IoFlags, LoadOptions, PolicyConfig, load_config,
    load_config_or_default, load_config_str,
};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/audio_policy.conf")
}

/// Write `text` to a fresh file and load it with default options.
fn load_text(text: &str) -> PolicyConfig {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("audio_policy.conf");
    std::fs::write(&path, text).unwrap();
    load_config(&path, &LoadOptions::default()).expect("should load written file")
}

/// A complete output profile entry routed to `devices`.
fn output_entry(name: &str, devices: &str, extra: &str) -> String {
    format!(
        "{name} {{\n\
           sampling_rates 48000\n\
           channel_masks AUDIO_CHANNEL_OUT_STEREO\n\
           formats AUDIO_FORMAT_PCM_16_BIT\n\
           devices {devices}\n\
           {extra}\n\
         }}"
    )
}

#[test]
fn test_fixture_loads_all_modules() {
    let config = load_config(fixture_path(), &LoadOptions::default()).unwrap();

    let names: Vec<_> = config.modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["primary", "a2dp", "usb", "r_submix"]);

    let primary = config.module("primary").unwrap();
    assert_eq!(primary.output_profiles.len(), 3);
    assert_eq!(primary.input_profiles.len(), 1);
    assert_eq!(primary.declared_devices.len(), 2);
    assert_eq!(config.module("usb").unwrap().output_profiles.len(), 2);
}

#[test]
fn test_fixture_profiles() {
    let config = load_config(fixture_path(), &LoadOptions::default()).unwrap();
    let primary = config.module("primary").unwrap();

    let output = primary.output_profile("primary").unwrap();
    assert_eq!(output.flags, IoFlags::Output(OutputFlags::PRIMARY));
    assert_eq!(output.supported_devices.len(), 4);
    assert_eq!(
        output.supported_devices.types(),
        (DeviceType::OUT_EARPIECE.0
            | DeviceType::OUT_SPEAKER.0
            | DeviceType::OUT_WIRED_HEADSET.0
            | DeviceType::OUT_WIRED_HEADPHONE.0)
    );

    let offload = primary.output_profile("compress_offload").unwrap();
    assert_eq!(offload.capabilities.sampling_rates.len(), 7);
    assert!(offload.capabilities.formats.contains(&AudioFormat::MP3));
    assert!(offload.capabilities.formats.contains(&AudioFormat::AAC));
    assert_eq!(
        offload.flags,
        IoFlags::Output(
            OutputFlags::COMPRESS_OFFLOAD
                .union(OutputFlags::NON_BLOCKING)
                .union(OutputFlags::DIRECT)
        )
    );

    let input = primary.input_profile("primary").unwrap();
    assert_eq!(input.flags, IoFlags::Input(InputFlags::NONE));
    assert_eq!(input.capabilities.channel_masks.len(), 2);
    assert!(input.capabilities.channel_masks.contains(&ChannelMask::IN_STEREO));
    assert_eq!(input.supported_devices.len(), 3);
}

#[test]
fn test_fixture_devices_and_gains() {
    let config = load_config(fixture_path(), &LoadOptions::default()).unwrap();
    let primary = config.module("primary").unwrap();

    let speaker = primary.declared_devices.find_by_tag("Speaker").unwrap();
    assert_eq!(speaker.capabilities().gains.len(), 1);
    let gain = &speaker.capabilities().gains[0];
    assert_eq!(gain.min_value_mb, -8400);
    assert_eq!(gain.max_value_mb, 4000);
    assert_eq!(gain.step_value_mb, 100);
    assert_eq!(speaker.default_gain().unwrap().values, [0]);

    let mic = primary.declared_devices.find_by_tag("Built-In Mic").unwrap();
    assert_eq!(mic.address(), "bottom");
    assert!(mic.default_gain().is_none());
}

#[test]
fn test_fixture_global_configuration() {
    let config = load_config(fixture_path(), &LoadOptions::default()).unwrap();
    let primary = config.module("primary").unwrap();

    assert!(config.speaker_drc_enabled);
    assert_eq!(
        config.default_output_device.as_ref().unwrap().device_type(),
        DeviceType::OUT_SPEAKER
    );
    assert_eq!(config.module("a2dp").unwrap().hal_version, Some(HalVersion::new(2, 0)));
    assert!(primary.hal_version.is_none());

    assert_eq!(config.available_output_devices.len(), 2);
    let speaker = primary.declared_devices.find_by_tag("Speaker").unwrap();
    assert!(config.available_output_devices.contains(speaker));

    // r_submix's module section is applied before the legacy root section.
    let inputs: Vec<_> = config
        .available_input_devices
        .iter()
        .map(|d| d.device_type())
        .collect();
    assert_eq!(
        inputs,
        [
            DeviceType::IN_REMOTE_SUBMIX,
            DeviceType::IN_BUILTIN_MIC,
            DeviceType::IN_BACK_MIC
        ]
    );
    assert_eq!(config.available_input_devices.get(0).unwrap().address(), "0");
}

#[test]
fn test_tagged_device_is_shared_not_copied() {
    let text = format!(
        "audio_hw_modules {{\n\
           primary {{\n\
             devices {{ Speaker {{ type AUDIO_DEVICE_OUT_SPEAKER }} }}\n\
             outputs {{ {} {} }}\n\
           }}\n\
         }}",
        output_entry("primary", "Speaker", ""),
        output_entry("deep_buffer", "Speaker", "flags AUDIO_OUTPUT_FLAG_DEEP_BUFFER"),
    );
    let config = load_text(&text);
    let module = config.module("primary").unwrap();
    let declared = module.declared_devices.find_by_tag("Speaker").unwrap();

    for profile in &module.output_profiles {
        assert!(Arc::ptr_eq(profile.supported_devices.get(0).unwrap(), declared));
    }
    // Declared set plus one reference per profile.
    assert_eq!(Arc::strong_count(declared), 3);
}

#[test]
fn test_offload_implies_direct() {
    let text = format!(
        "audio_hw_modules {{ primary {{ outputs {{ {} }} }} }}",
        output_entry(
            "offload",
            "AUDIO_DEVICE_OUT_SPEAKER",
            "flags AUDIO_OUTPUT_FLAG_COMPRESS_OFFLOAD"
        ),
    );
    let config = load_text(&text);
    let profile = config.module("primary").unwrap().output_profile("offload").unwrap();
    let IoFlags::Output(flags) = profile.flags else {
        panic!("expected output flags");
    };
    assert!(flags.contains(OutputFlags::COMPRESS_OFFLOAD));
    assert!(flags.contains(OutputFlags::DIRECT));
}

#[test]
fn test_gain_without_mode_is_discarded() {
    let config = load_text(
        r"audio_hw_modules {
            primary {
              devices {
                Speaker {
                  type AUDIO_DEVICE_OUT_SPEAKER
                  gains {
                    silent {
                      channel_mask AUDIO_CHANNEL_OUT_STEREO
                      min_value_mB -100
                      max_value_mB 100
                    }
                  }
                }
              }
            }
          }",
    );
    let speaker = config.module("primary").unwrap().declared_devices.get(0).unwrap();
    assert!(speaker.capabilities().gains.is_empty());
    assert!(speaker.default_gain().is_none());
}

#[test]
fn test_unknown_default_output_device_is_ignored() {
    let text = format!(
        "audio_hw_modules {{\n\
           primary {{\n\
             global_configuration {{ default_output_device AUDIO_DEVICE_OUT_TOASTER }}\n\
             outputs {{ {} }}\n\
           }}\n\
         }}",
        output_entry("primary", "AUDIO_DEVICE_OUT_SPEAKER", ""),
    );
    let config = load_text(&text);
    assert!(config.default_output_device.is_none());
    assert_eq!(config.modules.len(), 1);
}

#[test]
fn test_doubled_delimiter_resolves_two_devices() {
    let text = format!(
        "audio_hw_modules {{\n\
           primary {{\n\
             devices {{\n\
               A {{ type AUDIO_DEVICE_OUT_SPEAKER }}\n\
               B {{ type AUDIO_DEVICE_OUT_EARPIECE }}\n\
             }}\n\
             outputs {{ {} }}\n\
           }}\n\
         }}",
        output_entry("primary", "A||B", ""),
    );
    let config = load_text(&text);
    let profile = config.module("primary").unwrap().output_profile("primary").unwrap();
    let tags: Vec<_> = profile.supported_devices.iter().map(|d| d.tag()).collect();
    assert_eq!(tags, [Some("A"), Some("B")]);
}

#[test]
fn test_incomplete_profile_fails_its_module_only() {
    let config = load_text(&format!(
        "audio_hw_modules {{\n\
           primary {{ outputs {{ {} }} }}\n\
           usb {{ outputs {{ {} broken {{ sampling_rates 44100 }} }} }}\n\
         }}",
        output_entry("primary", "AUDIO_DEVICE_OUT_SPEAKER", ""),
        output_entry("usb", "AUDIO_DEVICE_OUT_USB_DEVICE", ""),
    ));
    let names: Vec<_> = config.modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["primary"]);
}

#[test]
fn test_bad_device_fails_module_but_not_aggregate() {
    let config = load_text(&format!(
        "audio_hw_modules {{\n\
           primary {{\n\
             devices {{ Mystery {{ type AUDIO_DEVICE_OUT_TOASTER }} }}\n\
             outputs {{ {} }}\n\
           }}\n\
           a2dp {{ outputs {{ {} }} }}\n\
         }}",
        output_entry("primary", "AUDIO_DEVICE_OUT_SPEAKER", ""),
        output_entry("a2dp", "AUDIO_DEVICE_OUT_BLUETOOTH_A2DP", ""),
    ));
    assert!(config.module("primary").is_none());
    assert!(config.module("a2dp").is_some());
}

#[test]
fn test_unknown_tokens_do_not_fail_profile() {
    let config = load_text(&format!(
        "audio_hw_modules {{ primary {{ outputs {{ {} }} }} }}",
        output_entry("primary", "Ghost|AUDIO_DEVICE_OUT_SPEAKER|AUDIO_DEVICE_OUT_PHASER", ""),
    ));
    let profile = config.module("primary").unwrap().output_profile("primary").unwrap();
    assert_eq!(profile.supported_devices.len(), 1);
}

#[test]
fn test_unreadable_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.conf");
    let err = load_config(&path, &LoadOptions::default()).unwrap_err();
    match err {
        ConfigError::ReadFile { path: reported, .. } => assert_eq!(reported, path),
    }
}

#[test]
fn test_missing_file_falls_back_to_default_topology() {
    let dir = TempDir::new().unwrap();
    let config = load_config_or_default(dir.path().join("missing.conf"), &LoadOptions::default());
    let primary = config.module("primary").unwrap();
    assert!(primary.output_profile("primary").is_some());
    assert!(primary.input_profile("primary").is_some());
    assert_eq!(config.available_output_devices.len(), 1);
    assert_eq!(config.available_input_devices.len(), 1);
}

#[test]
fn test_non_utf8_bytes_are_tolerated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("audio_policy.conf");
    let mut bytes = b"# \xff\xfe comment\n".to_vec();
    bytes.extend_from_slice(
        format!(
            "audio_hw_modules {{ primary {{ outputs {{ {} }} }} }}",
            output_entry("primary", "AUDIO_DEVICE_OUT_SPEAKER", "")
        )
        .as_bytes(),
    );
    std::fs::write(&path, bytes).unwrap();
    let config = load_config(&path, &LoadOptions::default()).unwrap();
    assert_eq!(config.modules.len(), 1);
}

#[test]
fn test_config_serializes_to_json() {
    let config = load_config_str(
        &std::fs::read_to_string(fixture_path()).unwrap(),
        &LoadOptions::default(),
    );
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["modules"].as_array().unwrap().len(), 4);
    assert_eq!(json["speaker_drc_enabled"], true);
    assert_eq!(json["modules"][0]["name"], "primary");
}
