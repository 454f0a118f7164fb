//! Menu model and navigation
//!
//! A menu is a static tree of [`MenuItem`]s. Each row of the current level
//! is a [`Label`] whose text starts with a two-character selection prefix
//! (`"> "` selected, `"  "` otherwise), so moving the selection only
//! re-renders the first cell of the two affected rows.

use heapless::{String, Vec};
use strobe_display::{Canvas, DisplayError, Label, Rgb565};

use crate::button::Button;
use crate::config::UiConfig;
use crate::settings::{SettingKey, SettingsStore};

/// Maximum rows on one menu level
pub const MAX_ROWS: usize = 8;

/// Maximum submenu nesting
pub const MAX_DEPTH: usize = 4;

/// Maximum row text length in bytes, prefix included; longer rows are cut
pub const ROW_TEXT_LEN: usize = 40;

/// Shown for settings that have never been set
const NOT_SET: &str = "Not Set";

/// Application-defined action identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActionId(pub u8);

/// One menu row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem<'a> {
    /// Opens a nested level
    Submenu {
        title: &'a str,
        items: &'a [MenuItem<'a>],
    },
    /// Reports `id` to the caller; `disappears` clears the menu first
    Action {
        title: &'a str,
        id: ActionId,
        disappears: bool,
    },
    /// Renders `title: value` from the settings store
    LabelItem { title: &'a str, key: SettingKey },
    /// Informational text
    Plain { title: &'a str },
}

impl<'a> MenuItem<'a> {
    pub fn title(&self) -> &'a str {
        match self {
            MenuItem::Submenu { title, .. }
            | MenuItem::Action { title, .. }
            | MenuItem::LabelItem { title, .. }
            | MenuItem::Plain { title } => title,
        }
    }
}

/// Row placement and colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub row_spacing: u16,
    pub foreground: Rgb565,
    pub background: Rgb565,
    pub action_color: Rgb565,
    pub submenu_color: Rgb565,
    pub marker: char,
}

impl MenuLayout {
    /// Text colour for a row, by item kind
    pub fn color_for(&self, item: &MenuItem<'_>) -> Rgb565 {
        match item {
            MenuItem::Submenu { .. } => self.submenu_color,
            MenuItem::Action { .. } => self.action_color,
            MenuItem::LabelItem { .. } | MenuItem::Plain { .. } => self.foreground,
        }
    }
}

impl From<&UiConfig> for MenuLayout {
    fn from(ui: &UiConfig) -> Self {
        Self {
            origin_x: ui.origin_x,
            origin_y: ui.origin_y,
            row_spacing: ui.row_spacing,
            foreground: Rgb565::new(ui.foreground),
            background: Rgb565::new(ui.background),
            action_color: Rgb565::new(ui.action_color),
            submenu_color: Rgb565::new(ui.submenu_color),
            marker: ui.selection_marker,
        }
    }
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self::from(&UiConfig::default())
    }
}

/// Result of a navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuEvent {
    /// Button has no meaning here
    Ignored,
    /// Selection moved
    Moved,
    /// Entered a submenu
    Entered,
    /// Returned to the parent level
    Back,
    /// Selected an action
    Action(ActionId),
}

/// Menu errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuError {
    /// Drawing failed
    Display(DisplayError),
    /// Level has more than [`MAX_ROWS`] items
    TooManyItems,
    /// Nesting deeper than [`MAX_DEPTH`]
    TooDeep,
}

impl From<DisplayError> for MenuError {
    fn from(e: DisplayError) -> Self {
        MenuError::Display(e)
    }
}

/// Navigable menu
pub struct Menu<'a> {
    layout: MenuLayout,
    current: &'a [MenuItem<'a>],
    history: Vec<&'a [MenuItem<'a>], MAX_DEPTH>,
    selection: usize,
    rows: Vec<Label<ROW_TEXT_LEN>, MAX_ROWS>,
    shown: bool,
}

impl<'a> Menu<'a> {
    /// Create a menu at the root level; nothing is drawn yet
    pub fn new(root: &'a [MenuItem<'a>], layout: MenuLayout) -> Self {
        Self {
            layout,
            current: root,
            history: Vec::new(),
            selection: 0,
            rows: Vec::new(),
            shown: false,
        }
    }

    /// Items of the current level
    pub fn items(&self) -> &'a [MenuItem<'a>] {
        self.current
    }

    /// Index of the selected row
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Submenu nesting depth (0 at root)
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Labels currently on screen
    pub fn rows(&self) -> &[Label<ROW_TEXT_LEN>] {
        &self.rows
    }

    /// Compose the text of row `index`
    ///
    /// The text is cut to whatever fits between the row origin and the
    /// right edge of the panel.
    fn row_text<C: Canvas, S: SettingsStore>(
        &self,
        canvas: &C,
        index: usize,
        settings: &S,
    ) -> String<ROW_TEXT_LEN> {
        let item = &self.current[index];
        let marker = if index == self.selection {
            self.layout.marker
        } else {
            ' '
        };

        let (width, _) = canvas.size();
        let (cell_width, _) = canvas.cell_size();
        let cells = width.saturating_sub(self.layout.origin_x) / cell_width.max(1);

        let mut row = RowText::new(cells as usize);
        compose_row(&mut row, marker, item, settings);
        row.text
    }

    fn row_y(&self, index: usize) -> Result<u16, DisplayError> {
        (index as u16)
            .checked_mul(self.layout.row_spacing)
            .and_then(|offset| offset.checked_add(self.layout.origin_y))
            .ok_or(DisplayError::InvalidCoordinates)
    }

    /// Draw the current level, replacing whatever the menu had on screen
    pub fn show<C: Canvas, S: SettingsStore>(
        &mut self,
        canvas: &mut C,
        settings: &S,
    ) -> Result<(), MenuError> {
        self.clear(canvas)?;
        if self.current.len() > MAX_ROWS {
            return Err(MenuError::TooManyItems);
        }

        let items = self.current;
        for (index, item) in items.iter().enumerate() {
            let text = self.row_text(canvas, index, settings);
            let mut label = Label::new(
                self.layout.origin_x,
                self.row_y(index)?,
                &text,
                self.layout.color_for(item),
                self.layout.background,
            )?;
            label.draw(canvas)?;
            self.rows
                .push(label)
                .map_err(|_| MenuError::TooManyItems)?;
        }
        self.shown = true;
        Ok(())
    }

    /// Erase every row
    pub fn clear<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), MenuError> {
        for label in self.rows.iter_mut() {
            if label.is_visible() {
                label.erase(canvas)?;
            }
        }
        self.rows.clear();
        self.shown = false;
        Ok(())
    }

    /// Drop the rows without erasing, after the panel was cleared
    pub fn invalidate(&mut self) {
        self.rows.clear();
        self.shown = false;
    }

    /// Handle one button press
    pub fn navigate<C: Canvas, S: SettingsStore>(
        &mut self,
        canvas: &mut C,
        settings: &S,
        button: Button,
    ) -> Result<MenuEvent, MenuError> {
        if !self.shown {
            return Ok(MenuEvent::Ignored);
        }
        let count = self.current.len();

        match button {
            Button::Up | Button::Down if count > 0 => {
                let previous = self.selection;
                self.selection = if button == Button::Up {
                    (self.selection + count - 1) % count
                } else {
                    (self.selection + 1) % count
                };
                self.refresh_row(canvas, settings, previous)?;
                if self.selection != previous {
                    self.refresh_row(canvas, settings, self.selection)?;
                }
                Ok(MenuEvent::Moved)
            }
            Button::Right if count > 0 => match self.current[self.selection] {
                MenuItem::Submenu { items, .. } => {
                    self.history
                        .push(self.current)
                        .map_err(|_| MenuError::TooDeep)?;
                    if let Err(e) = self.switch_level(canvas, settings, items) {
                        self.history.pop();
                        return Err(e);
                    }
                    Ok(MenuEvent::Entered)
                }
                MenuItem::Action { id, disappears, .. } => {
                    if disappears {
                        self.clear(canvas)?;
                    }
                    Ok(MenuEvent::Action(id))
                }
                MenuItem::LabelItem { .. } | MenuItem::Plain { .. } => Ok(MenuEvent::Ignored),
            },
            Button::Left => match self.history.pop() {
                Some(parent) => {
                    if let Err(e) = self.switch_level(canvas, settings, parent) {
                        self.history
                            .push(parent)
                            .map_err(|_| MenuError::TooDeep)?;
                        return Err(e);
                    }
                    Ok(MenuEvent::Back)
                }
                None => Ok(MenuEvent::Ignored),
            },
            _ => Ok(MenuEvent::Ignored),
        }
    }

    /// Show `items` with the first row selected
    ///
    /// If the new level cannot be drawn the previous one is put back on
    /// screen, so the menu stays navigable.
    fn switch_level<C: Canvas, S: SettingsStore>(
        &mut self,
        canvas: &mut C,
        settings: &S,
        items: &'a [MenuItem<'a>],
    ) -> Result<(), MenuError> {
        let previous = (self.current, self.selection);
        self.current = items;
        self.selection = 0;

        if let Err(e) = self.show(canvas, settings) {
            (self.current, self.selection) = previous;
            self.show(canvas, settings)?;
            return Err(e);
        }
        Ok(())
    }

    /// Re-render value rows after settings changed
    ///
    /// Only the cells whose characters changed are redrawn.
    pub fn refresh_values<C: Canvas, S: SettingsStore>(
        &mut self,
        canvas: &mut C,
        settings: &S,
    ) -> Result<(), MenuError> {
        if !self.shown {
            return Ok(());
        }
        for index in 0..self.current.len() {
            if matches!(self.current[index], MenuItem::LabelItem { .. }) {
                self.refresh_row(canvas, settings, index)?;
            }
        }
        Ok(())
    }

    fn refresh_row<C: Canvas, S: SettingsStore>(
        &mut self,
        canvas: &mut C,
        settings: &S,
        index: usize,
    ) -> Result<(), MenuError> {
        let text = self.row_text(canvas, index, settings);
        if let Some(label) = self.rows.get_mut(index) {
            label.update(canvas, &text)?;
        }
        Ok(())
    }
}

/// Row text limited to a number of cells and [`ROW_TEXT_LEN`] bytes
struct RowText {
    text: String<ROW_TEXT_LEN>,
    cells_left: usize,
}

impl RowText {
    fn new(cells: usize) -> Self {
        Self {
            text: String::new(),
            cells_left: cells,
        }
    }

    /// Append `ch`; once the row is full everything else is dropped
    fn push(&mut self, ch: char) {
        if self.cells_left == 0 {
            return;
        }
        if self.text.push(ch).is_err() {
            self.cells_left = 0;
            return;
        }
        self.cells_left -= 1;
    }

    fn push_str(&mut self, s: &str) {
        for ch in s.chars() {
            self.push(ch);
        }
    }
}

fn compose_row<S: SettingsStore>(
    row: &mut RowText,
    marker: char,
    item: &MenuItem<'_>,
    settings: &S,
) {
    row.push(marker);
    row.push(' ');
    row.push_str(item.title());

    if let MenuItem::LabelItem { key, .. } = item {
        row.push_str(": ");
        match settings.get(*key) {
            Some(value) if key.is_secret() => value.chars().for_each(|_| row.push('*')),
            Some(value) => row.push_str(value),
            None => row.push_str(NOT_SET),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strobe_display::mock::RecordingCanvas;
    use crate::settings::{MemorySettings, MAX_VALUE_LEN};
    use proptest::prelude::*;
    use std::vec::Vec as StdVec;
    use strobe_display::TextStyle;

    const SET_SSID: ActionId = ActionId(1);
    const SET_PASS: ActionId = ActionId(2);
    const SLEEP: ActionId = ActionId(3);

    const UPDATE: [MenuItem<'static>; 2] = [
        MenuItem::Action {
            title: "SSID",
            id: SET_SSID,
            disappears: false,
        },
        MenuItem::Action {
            title: "Password",
            id: SET_PASS,
            disappears: false,
        },
    ];

    const SETTINGS: [MenuItem<'static>; 3] = [
        MenuItem::Submenu {
            title: "Update Settings",
            items: &UPDATE,
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

    const ROOT: [MenuItem<'static>; 3] = [
        MenuItem::Plain { title: "Status" },
        MenuItem::Submenu {
            title: "Settings",
            items: &SETTINGS,
        },
        MenuItem::Action {
            title: "Sleep",
            id: SLEEP,
            disappears: true,
        },
    ];

    fn shown_menu(canvas: &mut RecordingCanvas, settings: &MemorySettings) -> Menu<'static> {
        let mut menu = Menu::new(&ROOT, MenuLayout::default());
        menu.show(canvas, settings).unwrap();
        canvas.ops.clear();
        menu
    }

    fn texts<'m>(menu: &'m Menu<'_>) -> StdVec<&'m str> {
        menu.rows().iter().map(|l| l.text()).collect()
    }

    #[test]
    fn test_show_lays_out_rows() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let settings = MemorySettings::new();
        let mut menu = Menu::new(&ROOT, MenuLayout::default());
        menu.show(&mut canvas, &settings).unwrap();

        let rows = menu.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].text(), "> Status");
        assert_eq!(rows[1].text(), "  Settings");
        assert_eq!(rows[2].text(), "  Sleep");
        assert_eq!(rows[0].position(), (10, 10));
        assert_eq!(rows[1].position(), (10, 30));
        assert_eq!(rows[2].position(), (10, 50));
        assert!(rows.iter().all(|r| r.is_visible()));
    }

    #[test]
    fn test_colors_by_kind() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let settings = MemorySettings::new();
        let menu = shown_menu(&mut canvas, &settings);

        let rows = menu.rows();
        assert_eq!(rows[0].style().fg, Rgb565::new(0xFFFF));
        assert_eq!(rows[1].style().fg, Rgb565::new(0x001F));
        assert_eq!(rows[2].style().fg, Rgb565::new(0x07E0));
        assert!(rows.iter().all(|r| r.style().bg == Rgb565::BLACK));
    }

    #[test]
    fn test_down_touches_only_prefix_cells() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let settings = MemorySettings::new();
        let mut menu = shown_menu(&mut canvas, &settings);

        assert_eq!(
            menu.navigate(&mut canvas, &settings, Button::Down).unwrap(),
            MenuEvent::Moved
        );
        assert_eq!(menu.selection(), 1);

        let white = TextStyle::new(Rgb565::WHITE, Rgb565::BLACK);
        let blue = TextStyle::new(Rgb565::new(0x001F), Rgb565::BLACK);
        assert_eq!(
            canvas.chars(),
            [
                (10, 10, '>', white.erased()),
                (10, 10, ' ', white),
                (10, 30, ' ', blue.erased()),
                (10, 30, '>', blue),
            ]
        );
        assert_eq!(menu.rows()[1].text(), "> Settings");
    }

    #[test]
    fn test_up_wraps_to_last() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let settings = MemorySettings::new();
        let mut menu = shown_menu(&mut canvas, &settings);

        menu.navigate(&mut canvas, &settings, Button::Up).unwrap();
        assert_eq!(menu.selection(), 2);
        assert_eq!(menu.rows()[2].text(), "> Sleep");

        menu.navigate(&mut canvas, &settings, Button::Down).unwrap();
        assert_eq!(menu.selection(), 0);
    }

    #[test]
    fn test_enter_and_leave_submenu() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let settings = MemorySettings::new();
        let mut menu = shown_menu(&mut canvas, &settings);

        menu.navigate(&mut canvas, &settings, Button::Down).unwrap();
        assert_eq!(
            menu.navigate(&mut canvas, &settings, Button::Right).unwrap(),
            MenuEvent::Entered
        );
        assert_eq!(menu.depth(), 1);
        assert_eq!(menu.selection(), 0);
        assert_eq!(
            texts(&menu),
            [
                "> Update Settings",
                "  WiFi SSID: Not Set",
                "  WiFi Pass: Not Set",
            ]
        );

        assert_eq!(
            menu.navigate(&mut canvas, &settings, Button::Left).unwrap(),
            MenuEvent::Back
        );
        assert_eq!(menu.depth(), 0);
        assert_eq!(menu.selection(), 0);
        assert_eq!(menu.rows()[0].text(), "> Status");
    }

    #[test]
    fn test_left_at_root_is_ignored() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let settings = MemorySettings::new();
        let mut menu = shown_menu(&mut canvas, &settings);

        assert_eq!(
            menu.navigate(&mut canvas, &settings, Button::Left).unwrap(),
            MenuEvent::Ignored
        );
        assert!(canvas.chars().is_empty());
    }

    #[test]
    fn test_right_on_plain_and_select_ignored() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let settings = MemorySettings::new();
        let mut menu = shown_menu(&mut canvas, &settings);

        for button in [Button::Right, Button::SelectA, Button::SelectB] {
            assert_eq!(
                menu.navigate(&mut canvas, &settings, button).unwrap(),
                MenuEvent::Ignored
            );
        }
        assert!(canvas.chars().is_empty());
    }

    #[test]
    fn test_disappearing_action_clears_menu() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let settings = MemorySettings::new();
        let mut menu = shown_menu(&mut canvas, &settings);

        menu.navigate(&mut canvas, &settings, Button::Up).unwrap();
        canvas.ops.clear();
        assert_eq!(
            menu.navigate(&mut canvas, &settings, Button::Right).unwrap(),
            MenuEvent::Action(SLEEP)
        );
        assert!(!menu.is_shown());
        assert!(menu.rows().is_empty());
        // "  Status" is 8 cells, "  Settings" 10, "> Sleep" 7
        assert_eq!(canvas.chars().len(), 8 + 10 + 7);

        assert_eq!(
            menu.navigate(&mut canvas, &settings, Button::Down).unwrap(),
            MenuEvent::Ignored
        );
    }

    #[test]
    fn test_action_stays_shown() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let settings = MemorySettings::new();
        let mut menu = shown_menu(&mut canvas, &settings);

        menu.navigate(&mut canvas, &settings, Button::Down).unwrap();
        menu.navigate(&mut canvas, &settings, Button::Right).unwrap();
        menu.navigate(&mut canvas, &settings, Button::Right).unwrap();
        assert_eq!(menu.depth(), 2);
        assert_eq!(
            menu.navigate(&mut canvas, &settings, Button::Right).unwrap(),
            MenuEvent::Action(SET_SSID)
        );
        assert!(menu.is_shown());
    }

    #[test]
    fn test_refresh_values_updates_changed_cells() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let mut settings = MemorySettings::new();
        settings.set(SettingKey::Ssid, "home").unwrap();
        let mut menu = shown_menu(&mut canvas, &settings);
        menu.navigate(&mut canvas, &settings, Button::Down).unwrap();
        menu.navigate(&mut canvas, &settings, Button::Right).unwrap();
        assert_eq!(menu.rows()[1].text(), "  WiFi SSID: home");
        canvas.ops.clear();

        settings.set(SettingKey::Ssid, "hose").unwrap();
        menu.refresh_values(&mut canvas, &settings).unwrap();

        assert_eq!(menu.rows()[1].text(), "  WiFi SSID: hose");
        // 'm' -> 's' at cell 15: erase + draw
        assert_eq!(canvas.chars().len(), 2);
        assert!(canvas.chars().iter().all(|c| c.0 == 10 + 15 * 8 && c.1 == 30));
    }

    #[test]
    fn test_secret_value_masked() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let mut settings = MemorySettings::new();
        settings.set(SettingKey::Password, "hunter2").unwrap();
        let mut menu = Menu::new(&SETTINGS, MenuLayout::default());
        menu.show(&mut canvas, &settings).unwrap();

        assert_eq!(menu.rows()[2].text(), "  WiFi Pass: *******");
    }

    #[test]
    fn test_too_many_items() {
        const PLAIN: MenuItem<'static> = MenuItem::Plain { title: "x" };
        static BIG: [MenuItem<'static>; MAX_ROWS + 1] = [PLAIN; MAX_ROWS + 1];

        let mut canvas = RecordingCanvas::new(320, 240);
        let settings = MemorySettings::new();
        let mut menu = Menu::new(&BIG, MenuLayout::default());
        assert_eq!(
            menu.show(&mut canvas, &settings),
            Err(MenuError::TooManyItems)
        );
        assert!(canvas.chars().is_empty());
    }

    #[test]
    fn test_long_value_cut_to_panel_width() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let mut settings = MemorySettings::new();
        let ssid = "s".repeat(MAX_VALUE_LEN);
        settings.set(SettingKey::Ssid, &ssid).unwrap();
        let mut menu = shown_menu(&mut canvas, &settings);

        menu.navigate(&mut canvas, &settings, Button::Down).unwrap();
        assert_eq!(
            menu.navigate(&mut canvas, &settings, Button::Right).unwrap(),
            MenuEvent::Entered
        );

        // (320 - 10) / 8 = 38 cells
        let row = menu.rows()[1].text();
        assert_eq!(row.len(), 38);
        assert!(row.starts_with("  WiFi SSID: sss"));

        assert_eq!(
            menu.navigate(&mut canvas, &settings, Button::Left).unwrap(),
            MenuEvent::Back
        );
        assert_eq!(menu.depth(), 0);
    }

    #[test]
    fn test_long_value_cut_to_row_capacity() {
        let mut canvas = RecordingCanvas::new(1024, 240);
        let mut settings = MemorySettings::new();
        let ssid = "s".repeat(MAX_VALUE_LEN);
        settings.set(SettingKey::Ssid, &ssid).unwrap();
        let mut menu = Menu::new(&SETTINGS, MenuLayout::default());
        menu.show(&mut canvas, &settings).unwrap();

        assert_eq!(menu.rows()[1].text().len(), ROW_TEXT_LEN);
    }

    #[test]
    fn test_narrow_panel_cuts_titles() {
        let mut canvas = RecordingCanvas::new(80, 240);
        let settings = MemorySettings::new();
        let mut menu = Menu::new(&ROOT, MenuLayout::default());
        menu.show(&mut canvas, &settings).unwrap();

        assert_eq!(texts(&menu), ["> Status", "  Settin", "  Sleep"]);
    }

    #[test]
    fn test_failed_submenu_keeps_parent() {
        const PLAIN: MenuItem<'static> = MenuItem::Plain { title: "x" };
        static BIG: [MenuItem<'static>; MAX_ROWS + 1] = [PLAIN; MAX_ROWS + 1];
        static NESTED: [MenuItem<'static>; 1] = [MenuItem::Submenu {
            title: "Big",
            items: &BIG,
        }];

        let mut canvas = RecordingCanvas::new(320, 240);
        let settings = MemorySettings::new();
        let mut menu = Menu::new(&NESTED, MenuLayout::default());
        menu.show(&mut canvas, &settings).unwrap();

        assert_eq!(
            menu.navigate(&mut canvas, &settings, Button::Right),
            Err(MenuError::TooManyItems)
        );
        assert_eq!(menu.depth(), 0);
        assert!(menu.is_shown());
        assert_eq!(texts(&menu), ["> Big"]);
        assert_eq!(
            menu.navigate(&mut canvas, &settings, Button::Down).unwrap(),
            MenuEvent::Moved
        );
    }

    #[test]
    fn test_custom_marker() {
        let mut canvas = RecordingCanvas::new(320, 240);
        let settings = MemorySettings::new();
        let layout = MenuLayout {
            marker: '*',
            ..MenuLayout::default()
        };
        let mut menu = Menu::new(&ROOT, layout);
        menu.show(&mut canvas, &settings).unwrap();
        assert_eq!(menu.rows()[0].text(), "* Status");
    }

    proptest! {
        #[test]
        fn prop_exactly_one_row_marked(moves in prop::collection::vec(any::<bool>(), 0..24)) {
            let mut canvas = RecordingCanvas::new(320, 240);
            let settings = MemorySettings::new();
            let mut menu = shown_menu(&mut canvas, &settings);

            for up in moves {
                let button = if up { Button::Up } else { Button::Down };
                let event = menu.navigate(&mut canvas, &settings, button).unwrap();
                prop_assert_eq!(event, MenuEvent::Moved);
            }

            prop_assert!(menu.selection() < ROOT.len());
            let marked: StdVec<usize> = menu
                .rows()
                .iter()
                .enumerate()
                .filter(|(_, row)| row.text().starts_with('>'))
                .map(|(i, _)| i)
                .collect();
            prop_assert_eq!(marked, StdVec::from([menu.selection()]));
        }
    }
}
