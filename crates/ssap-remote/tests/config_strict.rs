#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use ssap_core::{Command, PairingType};
use ssap_remote::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
pairing:
  type: PROMPT
  clientkey: "abc" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.pairing.pairing_type, PairingType::Prompt);
    assert!(cfg.pairing.client_key.is_none());
    assert_eq!(cfg.limits.max_frame_bytes, 1024 * 1024);
}

#[test]
fn wrong_version_is_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn stored_key_resumes_pairing() {
    let ok = r#"
version: 1
pairing:
  type: PIN
  client_key: "8a1f0c"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(
        cfg.register_command(),
        Command::Register {
            pairing_type: PairingType::Pin,
            client_key: Some("8a1f0c".into()),
        }
    );
}

#[test]
fn empty_client_key_is_rejected() {
    let bad = r#"
version: 1
pairing:
  client_key: "  "
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn frame_limit_range() {
    let bad = r#"
version: 1
limits:
  max_frame_bytes: 10
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn missing_file_is_bad_config() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn frame_limit_must_fit_pairing_frame() {
    let bad = r#"
version: 1
limits:
  max_frame_bytes: 1024
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");

    let ok = "version: 1\nlimits:\n  max_frame_bytes: 4096\n";
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.limits.max_frame_bytes, config::schema::MIN_FRAME_BYTES);
}
