//! Strobe - Parallel-bus TFT panel firmware
//!
//! Main firmware binary for RP2040-based boards driving a write-only
//! 8080-style panel. The main task owns the panel and is the only place
//! drawing happens; button tasks feed it through a channel.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use strobe_display::{Display, DisplayError, FontBlob, ParallelBus, Rgb565};
use strobe_ui::{
    parse_config, ActionId, AppConfig, Button, LinkStatus, MemorySettings, Menu, MenuEvent,
    MenuLayout, SettingKey, SettingsStore, StatusIcon,
};

mod board;
mod channels;
mod icons;
mod screens;
mod tasks;

use board::{Panel, Pin};
use channels::BUTTON_CHANNEL;

/// Embedded configuration (compiled into firmware)
/// Edit panel.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../panel.toml");

/// 256 glyphs, 8 bytes each, MSB = leftmost column
static FONT: &[u8] = include_bytes!("../assets/vga_8x8.bin");

/// Pixels streamed between yields during a full-screen clear
const FILL_CHUNK_PIXELS: u32 = 4096;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Strobe firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("Config parse failed: {}, using defaults", e);
            AppConfig::default()
        }
    };
    info!(
        "Panel {}x{}, rotation {}",
        config.panel.width, config.panel.height, config.panel.rotation
    );

    // Panel bus: D0-D8 on GPIO0-8, DC=9, WR=10, CS=11, RESET=12
    let data = [
        Pin::new(p.PIN_0),
        Pin::new(p.PIN_1),
        Pin::new(p.PIN_2),
        Pin::new(p.PIN_3),
        Pin::new(p.PIN_4),
        Pin::new(p.PIN_5),
        Pin::new(p.PIN_6),
        Pin::new(p.PIN_7),
        Pin::new(p.PIN_8),
    ];
    let bus = ParallelBus::new(
        data,
        Pin::new(p.PIN_9),
        Pin::new(p.PIN_10),
        Pin::new(p.PIN_11),
        Pin::new(p.PIN_12),
    );
    let mut panel: Panel = Display::new(bus, config.panel.geometry(), FontBlob::new(FONT));
    panel.init(&mut Delay, config.panel.init_timing());

    let mut backlight = Output::new(p.PIN_13, Level::Low);
    backlight.set_high();
    info!("Panel initialized");

    let layout = MenuLayout::from(&config.ui);
    if let Err(e) = clear_screen(&mut panel, layout.background).await {
        warn!("Screen clear failed: {}", e);
    }

    // Buttons: active low, reported on release
    let buttons = [
        (Button::Up, Input::new(p.PIN_16, Pull::Up)),
        (Button::Down, Input::new(p.PIN_17, Pull::Up)),
        (Button::Left, Input::new(p.PIN_18, Pull::Up)),
        (Button::Right, Input::new(p.PIN_19, Pull::Up)),
        (Button::SelectA, Input::new(p.PIN_20, Pull::Up)),
        (Button::SelectB, Input::new(p.PIN_21, Pull::Up)),
    ];
    for (button, input) in buttons {
        spawner.spawn(tasks::button_task(input, button)).unwrap();
    }
    info!("Button tasks spawned");

    let mut settings = MemorySettings::new();

    let mut icon = match icons::status_icon(panel.geometry(), layout.background) {
        Ok(icon) => Some(icon),
        Err(e) => {
            warn!("Status icon unavailable: {}", e);
            None
        }
    };
    show_link_status(&mut panel, icon.as_mut(), &settings);

    let mut menu = Menu::new(&screens::MAIN_MENU, layout);
    if let Err(e) = menu.show(&mut panel, &settings) {
        warn!("Menu draw failed: {}", e);
    }

    info!("Entering display loop");
    let mut reported_missing = 0;

    loop {
        let button = BUTTON_CHANNEL.receive().await;
        debug!("Button: {}", button.name());

        match menu.navigate(&mut panel, &settings, button) {
            Ok(MenuEvent::Action(id)) => {
                handle_action(id, &mut panel, &mut menu, icon.as_mut(), &mut settings, layout)
                    .await;
            }
            Ok(event) => trace!("Menu event: {}", event),
            Err(e) => warn!("Menu navigation failed: {}", e),
        }

        let missing = panel.missing_glyphs();
        if missing != reported_missing {
            warn!("{} glyph lookups fell back to blank", missing);
            reported_missing = missing;
        }
    }
}

/// Run a menu action
async fn handle_action(
    id: ActionId,
    panel: &mut Panel,
    menu: &mut Menu<'static>,
    mut icon: Option<&mut StatusIcon<'static>>,
    settings: &mut MemorySettings,
    layout: MenuLayout,
) {
    info!("Action {}", id);

    match id {
        screens::SET_SSID | screens::SET_PASSWORD => {
            let (key, value) = if id == screens::SET_SSID {
                (SettingKey::Ssid, screens::PLACEHOLDER_SSID)
            } else {
                (SettingKey::Password, screens::PLACEHOLDER_PASSWORD)
            };
            if let Err(e) = settings.set(key, value) {
                warn!("Failed to store {}: {}", key.name(), e);
                return;
            }
            if let Err(e) = menu.refresh_values(panel, &*settings) {
                warn!("Menu refresh failed: {}", e);
            }
            show_link_status(panel, icon, settings);
        }
        screens::CLEAR_SCREEN => {
            if let Err(e) = clear_screen(panel, layout.background).await {
                warn!("Screen clear failed: {}", e);
            }
            // The fill painted over everything
            menu.invalidate();
            if let Some(icon) = icon.as_deref_mut() {
                icon.invalidate();
            }
            show_link_status(panel, icon, settings);
            if let Err(e) = menu.show(panel, &*settings) {
                warn!("Menu draw failed: {}", e);
            }
        }
        _ => warn!("Unhandled action {}", id),
    }
}

/// Fill the whole panel, yielding between chunks so other tasks keep running
async fn clear_screen(panel: &mut Panel, color: Rgb565) -> Result<(), DisplayError> {
    let mut job = panel.begin_fill(color)?;
    while !job.step(FILL_CHUNK_PIXELS) {
        yield_now().await;
    }
    Ok(())
}

/// Link is reported up once credentials are configured
fn show_link_status(
    panel: &mut Panel,
    icon: Option<&mut StatusIcon<'static>>,
    settings: &MemorySettings,
) {
    let Some(icon) = icon else {
        return;
    };
    let status = if settings.get(SettingKey::Ssid).is_some()
        && settings.get(SettingKey::Password).is_some()
    {
        LinkStatus::Up
    } else {
        LinkStatus::Down
    };
    if let Err(e) = icon.show(panel, status) {
        warn!("Status icon draw failed: {}", e);
    }
}
