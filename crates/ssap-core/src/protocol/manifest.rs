//! Capability manifest sent with every `register` request.
//!
//! The TV checks the signed block against the signature and grants the listed
//! permissions once the user accepts the pairing prompt. The content is fixed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const APP_ID: &str = "com.lge.test";
const VENDOR_ID: &str = "com.lge";
const CREATED: &str = "20140509";
const SERIAL: &str = "2f930e2d2cfe083771f68e4fe7bb07";

const SIGNED_PERMISSIONS: &[&str] = &[
    "TEST_SECURE",
    "CONTROL_INPUT_TEXT",
    "CONTROL_MOUSE_AND_KEYBOARD",
    "READ_INSTALLED_APPS",
    "READ_LGE_SDX",
    "READ_NOTIFICATIONS",
    "SEARCH",
    "WRITE_SETTINGS",
    "WRITE_NOTIFICATION_ALERT",
    "CONTROL_POWER",
    "READ_CURRENT_CHANNEL",
    "READ_RUNNING_APPS",
    "READ_UPDATE_INFO",
    "UPDATE_FROM_REMOTE_APP",
    "READ_LGE_TV_INPUT_EVENTS",
    "READ_TV_CURRENT_TIME",
];

const PERMISSIONS: &[&str] = &[
    "LAUNCH",
    "LAUNCH_WEBAPP",
    "APP_TO_APP",
    "CLOSE",
    "TEST_OPEN",
    "TEST_PROTECTED",
    "CONTROL_AUDIO",
    "CONTROL_DISPLAY",
    "CONTROL_INPUT_JOYSTICK",
    "CONTROL_INPUT_MEDIA_RECORDING",
    "CONTROL_INPUT_MEDIA_PLAYBACK",
    "CONTROL_INPUT_TV",
    "CONTROL_POWER",
    "READ_APP_STATUS",
    "READ_CURRENT_CHANNEL",
    "READ_INPUT_DEVICE_LIST",
    "READ_NETWORK_STATE",
    "READ_RUNNING_APPS",
    "READ_TV_CHANNEL_LIST",
    "WRITE_NOTIFICATION_TOAST",
    "READ_POWER_STATE",
    "READ_COUNTRY_INFO",
    "READ_SETTINGS",
    "CONTROL_TV_SCREEN",
    "CONTROL_TV_STANBY",
    "CONTROL_FAVORITE_GROUP",
    "CONTROL_USER_INFO",
    "CHECK_BLUETOOTH_DEVICE",
    "CONTROL_BLUETOOTH",
    "CONTROL_TIMER_INFO",
    "STB_INTERNAL_CONNECTION",
    "CONTROL_RECORDING",
    "READ_RECORDING_STATE",
    "WRITE_RECORDING_LIST",
    "READ_RECORDING_LIST",
    "READ_RECORDING_SCHEDULE",
    "WRITE_RECORDING_SCHEDULE",
    "READ_STORAGE_DEVICE_LIST",
    "READ_TV_PROGRAM_INFO",
    "CONTROL_BOX_CHANNEL",
    "READ_TV_ACR_AUTH_TOKEN",
    "READ_TV_CONTENT_STATE",
    "READ_TV_CURRENT_TIME",
    "ADD_LAUNCHER_CHANNEL",
    "SET_CHANNEL_SKIP",
    "RELEASE_CHANNEL_SKIP",
    "CONTROL_CHANNEL_BLOCK",
    "DELETE_SELECT_CHANNEL",
    "CONTROL_CHANNEL_GROUP",
    "SCAN_TV_CHANNELS",
    "CONTROL_TV_POWER",
    "CONTROL_WOL",
];

const SIGNATURE: &str = "eyJhbGdvcml0aG0iOiJSU0EtU0hBMjU2Iiwia2V5SWQiOiJ0ZXN0LXNpZ25pbmctY2VydCIsInNpZ25hdHVyZVZlcnNpb24iOjF9.hrVRgjCwXVvE2OOSpDZ58hR+59aFNwYDyjQgKk3auukd7pcegmE2CzPCa0bJ0ZsRAcKkCTJrWo5iDzNhMBWRyaMOv5zWSrthlf7G128qvIlpMT0YNY+n/FaOHE73uLrS/g7swl3/qH/BGFG2Hu4RlL48eb3lLKqTt2xKHdCs6Cd4RMfJPYnzgvI4BNrFUKsjkcu+WD4OO2A27Pq1n50cMchmcaXadJhGrOqH5YmHdOCj5NSHzJYrsW0HPlpuAx/ECMeIZYDh6RMqaFM2DXzdKX9NmmyqzJ3o/0lkk/N97gfVRLW5hA29yeAwaCViZNCP8iC9aO0q9fQojoa7NQnAtw==";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub manifest_version: u32,
    pub app_version: String,
    pub signed: SignedBlock,
    pub permissions: Vec<String>,
    pub signatures: Vec<ManifestSignature>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedBlock {
    pub created: String,
    pub app_id: String,
    pub vendor_id: String,
    pub localized_app_names: BTreeMap<String, String>,
    pub localized_vendor_names: BTreeMap<String, String>,
    pub permissions: Vec<String>,
    pub serial: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestSignature {
    pub signature_version: u32,
    pub signature: String,
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

impl Default for Manifest {
    fn default() -> Self {
        let localized_app_names = BTreeMap::from([
            (String::new(), "LG Remote App".to_owned()),
            ("ko-KR".to_owned(), "리모컨 앱".to_owned()),
            ("zxx-XX".to_owned(), "ЛГ Rэмotэ AПП".to_owned()),
        ]);
        let localized_vendor_names = BTreeMap::from([(String::new(), "LG Electronics".to_owned())]);

        Self {
            manifest_version: 1,
            app_version: "1.1".to_owned(),
            signed: SignedBlock {
                created: CREATED.to_owned(),
                app_id: APP_ID.to_owned(),
                vendor_id: VENDOR_ID.to_owned(),
                localized_app_names,
                localized_vendor_names,
                permissions: owned(SIGNED_PERMISSIONS),
                serial: SERIAL.to_owned(),
            },
            permissions: owned(PERMISSIONS),
            signatures: vec![ManifestSignature {
                signature_version: 1,
                signature: SIGNATURE.to_owned(),
            }],
        }
    }
}
