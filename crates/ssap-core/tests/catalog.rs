//! Static uri table, envelope-type selection, and pairing payloads.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use ssap_core::protocol::manifest::Manifest;
use ssap_core::protocol::payload::Payload;
use ssap_core::{translate, Command, PairingType, RequestType, SoundOutput};

fn catalog() -> Vec<(Command, Option<&'static str>)> {
    vec![
        (Command::Register { pairing_type: PairingType::Prompt, client_key: None }, None),
        (Command::SetPin { pin: "1234".into() }, Some("ssap://pairing/setPin")),
        (Command::CastPhoto { url: "http://x/y.jpg".into() }, Some("ssap://media.viewer/open")),
        (Command::StopCasting, Some("ssap://media.viewer/close")),
        (Command::VolumeUp, Some("ssap://audio/volumeUp")),
        (Command::VolumeDown, Some("ssap://audio/volumeDown")),
        (Command::GetVolume { subscribe: None }, Some("ssap://audio/getVolume")),
        (Command::SetVolume { level: 1 }, Some("ssap://audio/setVolume")),
        (Command::SetMute { mute: false }, Some("ssap://audio/setMute")),
        (Command::GetSoundOutput { subscribe: None }, Some("ssap://audio/getSoundOutput")),
        (
            Command::ChangeSoundOutput { output: SoundOutput::TvSpeaker },
            Some("ssap://audio/changeSoundOutput"),
        ),
        (Command::Play, Some("ssap://media.controls/play")),
        (Command::Pause, Some("ssap://media.controls/pause")),
        (Command::Stop, Some("ssap://media.controls/stop")),
        (Command::Rewind, Some("ssap://media.controls/rewind")),
        (Command::FastForward, Some("ssap://media.controls/fastForward")),
        (
            Command::Toast { message: "m".into(), icon_data: None, icon_extension: None },
            Some("ssap://system.notifications/createToast"),
        ),
        (
            Command::GetPowerState { subscribe: None },
            Some("ssap://com.webos.service.tvpower/power/getPowerState"),
        ),
        (Command::ScreenOff, Some("ssap://com.webos.service.tvpower/power/turnOffScreen")),
        (Command::ScreenOn, Some("ssap://com.webos.service.tvpower/power/turnOnScreen")),
        (Command::TurnOff, Some("ssap://system/turnOff")),
        (Command::SystemInfo, Some("ssap://com.webos.service.update/getCurrentSWInformation")),
        (Command::MacAddressInfo, Some("ssap://com.webos.service.connectionmanager")),
        (Command::ListApps, Some("ssap://com.webos.applicationManager/listApps")),
        (
            Command::GetForegroundApp { subscribe: None },
            Some("ssap://com.webos.applicationManager/getForegroundAppInfo"),
        ),
        (
            Command::GetForegroundAppMediaStatus { subscribe: None },
            Some("ssap://com.webos.media/getForegroundAppInfo"),
        ),
        (
            Command::LaunchApp { app_id: "a".into(), content_id: None, params: None },
            Some("ssap://system.launcher/launch"),
        ),
        (
            Command::CloseApp { app_id: "a".into(), session_id: None },
            Some("ssap://system.launcher/close"),
        ),
        (
            Command::InsertText { text: "t".into(), replace: true },
            Some("ssap://com.webos.service.ime/insertText"),
        ),
        (Command::SendEnterKey, Some("ssap://com.webos.service.ime/sendEnterKey")),
        (
            Command::DeleteCharacters { count: 2 },
            Some("ssap://com.webos.service.ime/deleteCharacters"),
        ),
        (
            Command::RegisterRemoteKeyboard,
            Some("ssap://com.webos.service.ime/registerRemoteKeyboard"),
        ),
        (
            Command::GetPointerInputSocket,
            Some("ssap://com.webos.service.networkinput/getPointerInputSocket"),
        ),
        (Command::ChannelUp, Some("ssap://tv/channelUp")),
        (Command::ChannelDown, Some("ssap://tv/channelDown")),
        (Command::ListSources, Some("ssap://tv/getExternalInputList")),
        (Command::SetSource { input_id: "HDMI_1".into() }, Some("ssap://tv/switchInput")),
        (
            Command::GetPictureSettings { subscribe: None },
            Some("ssap://settings/getSystemSettings"),
        ),
        (Command::GetSoundMode { subscribe: None }, Some("ssap://settings/getSystemSettings")),
    ]
}

#[test]
fn every_variant_resolves_to_its_table_entry() {
    for (cmd, uri) in catalog() {
        assert_eq!(cmd.uri(), uri, "command={}", cmd.name());
        assert_eq!(translate(&cmd).uri(), uri, "command={}", cmd.name());
    }
}

#[test]
fn tagged_json_names_match_variant_names() {
    for (cmd, _) in catalog() {
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["command"], cmd.name());
        let back = Command::from_json(&json.to_string()).unwrap();
        assert_eq!(back, cmd);
    }
}

#[test]
fn name_list_covers_the_catalog() {
    let catalog = catalog();
    assert_eq!(Command::NAMES.len(), catalog.len());
    for (cmd, _) in &catalog {
        assert!(Command::NAMES.contains(&cmd.name()), "command={}", cmd.name());
    }
}

#[test]
fn tagged_json_omits_absent_fields() {
    let toast = Command::Toast { message: "hi".into(), icon_data: None, icon_extension: None };
    assert_eq!(
        serde_json::to_value(&toast).unwrap(),
        serde_json::json!({ "command": "toast", "message": "hi" })
    );

    let query = Command::GetVolume { subscribe: None };
    assert_eq!(
        serde_json::to_value(&query).unwrap(),
        serde_json::json!({ "command": "getVolume" })
    );

    let launch = Command::LaunchApp { app_id: "netflix".into(), content_id: None, params: None };
    let json = serde_json::to_string(&launch).unwrap();
    assert!(!json.contains("null"), "json={json}");
}

#[test]
fn subscription_flag_selects_envelope_type() {
    let queries: Vec<fn(Option<bool>) -> Command> = vec![
        |subscribe| Command::GetVolume { subscribe },
        |subscribe| Command::GetSoundOutput { subscribe },
        |subscribe| Command::GetPowerState { subscribe },
        |subscribe| Command::GetForegroundApp { subscribe },
        |subscribe| Command::GetForegroundAppMediaStatus { subscribe },
        |subscribe| Command::GetPictureSettings { subscribe },
        |subscribe| Command::GetSoundMode { subscribe },
    ];

    for make in queries {
        let cases = [
            (Some(true), RequestType::Subscribe),
            (Some(false), RequestType::Unsubscribe),
            (None, RequestType::Request),
        ];
        for (flag, expected) in cases {
            let cmd = make(flag);
            assert_eq!(translate(&cmd).request_type(), expected, "command={}", cmd.name());
        }
    }
}

#[test]
fn non_query_variants_have_no_subscription_flag() {
    assert_eq!(Command::Play.subscription(), None);
    assert_eq!(Command::SetVolume { level: 3 }.subscription(), None);
    assert_eq!(Command::GetVolume { subscribe: Some(true) }.subscription(), Some(Some(true)));
}

#[test]
fn set_volume_example() {
    let env = translate(&Command::SetVolume { level: 42 });
    assert_eq!(env.request_type(), RequestType::Request);
    assert_eq!(env.uri(), Some("ssap://audio/setVolume"));
    assert_eq!(env.payload(), Some(&Payload::volume(42)));
}

#[test]
fn get_volume_subscribe_example() {
    let env = translate(&Command::GetVolume { subscribe: Some(true) });
    assert_eq!(env.request_type(), RequestType::Subscribe);
    assert_eq!(env.uri(), Some("ssap://audio/getVolume"));
    assert!(env.payload().is_none());
}

#[test]
fn fresh_pairing_omits_client_key() {
    let env = translate(&Command::Register { pairing_type: PairingType::Prompt, client_key: None });
    assert_eq!(env.request_type(), RequestType::Register);
    assert!(env.uri().is_none());

    let json = serde_json::to_value(&env).unwrap();
    assert!(json.get("uri").is_none());
    let payload = &json["payload"];
    assert_eq!(payload["forcePairing"], false);
    assert_eq!(payload["pairingType"], "PROMPT");
    assert!(payload.get("clientKey").is_none());
    assert_eq!(payload["manifest"], serde_json::to_value(Manifest::default()).unwrap());
    assert_eq!(payload.as_object().unwrap().len(), 3);
}

#[test]
fn resumed_pairing_carries_client_key() {
    let env = translate(&Command::Register {
        pairing_type: PairingType::Pin,
        client_key: Some("0f9b1c".into()),
    });
    let payload = env.payload().unwrap();
    assert_eq!(payload.pairing_type, Some(PairingType::Pin));
    assert_eq!(payload.client_key.as_deref(), Some("0f9b1c"));
    assert_eq!(payload.force_pairing, Some(false));
}

#[test]
fn manifest_shape() {
    let json = serde_json::to_value(Manifest::default()).unwrap();
    assert_eq!(json["manifestVersion"], 1);
    assert_eq!(json["appVersion"], "1.1");
    assert_eq!(json["signed"]["appId"], "com.lge.test");
    assert_eq!(json["signed"]["localizedVendorNames"][""], "LG Electronics");
    assert_eq!(json["signatures"][0]["signatureVersion"], 1);
    let perms = json["permissions"].as_array().unwrap();
    assert!(perms.iter().any(|p| p == "CONTROL_AUDIO"));
    assert!(perms.iter().any(|p| p == "READ_SETTINGS"));
}

#[test]
fn uri_less_command_is_a_gap_not_a_failure() {
    let env = translate(&Command::Register { pairing_type: PairingType::Prompt, client_key: None });
    let err = env.require_uri("register").expect_err("no uri");
    assert!(err.is_recoverable());
    assert_eq!(err.code().as_str(), "TRANSLATION_GAP");

    let targeted = env.with_uri("ssap://custom/endpoint");
    assert_eq!(targeted.require_uri("register").unwrap(), "ssap://custom/endpoint");
    assert!(env.uri().is_none());
}

#[test]
fn only_relevant_fields_are_populated() {
    let payload = translate(&Command::CloseApp { app_id: "netflix".into(), session_id: None })
        .payload()
        .cloned()
        .unwrap();
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, serde_json::json!({ "id": "netflix" }));
}
