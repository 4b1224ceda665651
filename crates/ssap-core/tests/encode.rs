//! Encoder tests: id injection, copy-on-send, round trips, failures.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use ssap_core::protocol::payload::{LaunchParams, ParamValue};
use ssap_core::{
    decode_envelope, decode_settings_envelope, encode, encode_to_vec, translate, Command,
    PairingType, SettingsCommand, Stamp,
};

#[test]
fn encode_injects_id_and_keeps_other_fields() {
    let env = translate(&Command::SetVolume { level: 42 });
    let text = encode(&env, "req-7").unwrap();

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["id"], "req-7");
    assert_eq!(json["type"], "request");
    assert_eq!(json["uri"], "ssap://audio/setVolume");
    assert_eq!(json["payload"], serde_json::json!({ "volume": 42 }));

    let mut without_id = json.clone();
    without_id.as_object_mut().unwrap().remove("id");
    assert_eq!(without_id, serde_json::to_value(&env).unwrap());
}

#[test]
fn encode_does_not_mutate_the_input() {
    let env = translate(&Command::Play);
    let _ = encode(&env, "a").unwrap();
    assert!(env.id().is_none());

    let stamped = env.with_id("b");
    assert_eq!(Stamp::id(&stamped), Some("b"));
    assert!(env.id().is_none());
}

#[test]
fn id_is_placed_verbatim() {
    let env = translate(&Command::ListApps);
    let id = "weird \"id\" \u{1F4FA}";
    let decoded = decode_envelope(&encode(&env, id).unwrap()).unwrap();
    assert_eq!(decoded.id(), Some(id));
}

#[test]
fn bytes_match_text() {
    let env = translate(&Command::ChannelDown);
    assert_eq!(
        encode_to_vec(&env, "x").unwrap(),
        encode(&env, "x").unwrap().into_bytes()
    );
}

#[test]
fn round_trip_equals_input_except_id() {
    let mut params = LaunchParams::new();
    params.insert("autoplay".into(), ParamValue::from(true));
    params.insert("ratio".into(), ParamValue::from(1.5));
    params.insert("query".into(), ParamValue::from("cats"));

    let commands = vec![
        Command::Register { pairing_type: PairingType::Prompt, client_key: Some("k".into()) },
        Command::StopCasting,
        Command::GetPictureSettings { subscribe: Some(false) },
        Command::LaunchApp { app_id: "youtube".into(), content_id: None, params: Some(params) },
        Command::Toast {
            message: "hi".into(),
            icon_data: Some(vec![0x89, 0x50, 0x4e, 0x47]),
            icon_extension: Some("png".into()),
        },
    ];

    for cmd in commands {
        let env = translate(&cmd);
        let decoded = decode_envelope(&encode(&env, "rt-1").unwrap()).unwrap();
        assert_eq!(decoded.id(), Some("rt-1"));
        assert_eq!(decoded, env.with_id("rt-1"), "command={}", cmd.name());
    }
}

#[test]
fn settings_envelope_round_trip() {
    let env = SettingsCommand::SetPictureMode { mode: "vivid".into() }.to_envelope();
    let text = encode(&env, "luna-1").unwrap();
    let decoded = decode_settings_envelope(&text).unwrap();

    assert_eq!(decoded.id(), Some("luna-1"));
    assert_eq!(decoded, env.with_id("luna-1"));
    assert!(env.id().is_none());
}

#[test]
fn settings_write_repeats_params_in_every_hook() {
    let cmd = SettingsCommand::SetPictureSettings {
        brightness: 50,
        contrast: 80,
        color: 55,
        backlight: 70,
    };
    let env = cmd.to_envelope();
    let alert = env.payload();

    assert_eq!(alert.buttons[0].params, cmd.params());
    assert_eq!(alert.on_close.params, cmd.params());
    assert_eq!(alert.on_fail.params, cmd.params());
    assert_eq!(alert.buttons[0].on_click, cmd.uri());
}

#[test]
fn picture_mode_example() {
    let env = SettingsCommand::SetPictureMode { mode: "vivid".into() }.to_envelope();
    let json = serde_json::to_value(&env).unwrap();
    let nested = serde_json::json!({ "category": "picture", "settings": { "pictureMode": "vivid" } });

    assert_eq!(json["uri"], "ssap://system.notifications/createAlert");
    assert_eq!(
        json["payload"]["onClose"]["uri"],
        "luna://com.webos.settingsservice/setSystemSettings"
    );
    assert_eq!(json["payload"]["buttons"][0]["params"], nested);
    assert_eq!(json["payload"]["onClose"]["params"], nested);
    assert_eq!(json["payload"]["onFail"]["params"], nested);
}

#[test]
fn non_finite_number_is_an_encoding_error() {
    let mut params = LaunchParams::new();
    params.insert("speed".into(), ParamValue::Float(f64::NAN));
    let env = translate(&Command::LaunchApp { app_id: "a".into(), content_id: None, params: Some(params) });

    let err = encode(&env, "bad").expect_err("NaN must not encode");
    assert_eq!(err.code().as_str(), "ENCODING");

    let mut params = LaunchParams::new();
    params.insert("speed".into(), ParamValue::Float(f64::INFINITY));
    let env = translate(&Command::LaunchApp { app_id: "a".into(), content_id: None, params: Some(params) });
    assert!(encode_to_vec(&env, "bad").is_err());
}

#[test]
fn malformed_text_is_a_decoding_error() {
    let err = decode_envelope("{\"type\": \"shout\"}").expect_err("unknown type");
    assert_eq!(err.code().as_str(), "DECODING");

    let err = decode_envelope("{\"type\": \"request\", \"extra\": 1}").expect_err("unknown field");
    assert_eq!(err.code().as_str(), "DECODING");
}
