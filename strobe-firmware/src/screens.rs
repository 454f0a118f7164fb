//! Menu tree and action handlers

use strobe_ui::{ActionId, MenuItem, SettingKey};

pub const SET_SSID: ActionId = ActionId(1);
pub const SET_PASSWORD: ActionId = ActionId(2);
pub const CLEAR_SCREEN: ActionId = ActionId(3);

/// Values written by the update-settings actions until real entry exists
pub const PLACEHOLDER_SSID: &str = "new_ssid";
pub const PLACEHOLDER_PASSWORD: &str = "new_pass";

static UPDATE_SETTINGS: [MenuItem<'static>; 2] = [
    MenuItem::Action {
        title: "SSID",
        id: SET_SSID,
        disappears: false,
    },
    MenuItem::Action {
        title: "Password",
        id: SET_PASSWORD,
        disappears: false,
    },
];

static SETTINGS: [MenuItem<'static>; 3] = [
    MenuItem::Submenu {
        title: "Update Settings",
        items: &UPDATE_SETTINGS,
    },
    MenuItem::LabelItem {
        title: "WiFi SSID",
        key: SettingKey::Ssid,
    },
    MenuItem::LabelItem {
        title: "WiFi Pass",
        key: SettingKey::Password,
    },
];

pub static MAIN_MENU: [MenuItem<'static>; 3] = [
    MenuItem::Plain { title: "Strobe" },
    MenuItem::Submenu {
        title: "Settings",
        items: &SETTINGS,
    },
    MenuItem::Action {
        title: "Clear Screen",
        id: CLEAR_SCREEN,
        disappears: true,
    },
];
