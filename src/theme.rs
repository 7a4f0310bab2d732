use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result, anyhow};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub const THEME_STORAGE_KEY: &str = "player-guesser-theme";
pub const LIGHT_THEME: &str = "theme-light";
pub const DARK_THEME: &str = "theme-dark";

const CONFIG_DIR: &str = "player_guesser";
const PREFS_FILE: &str = "prefs.json";
const PREFS_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Light => LIGHT_THEME,
            Theme::Dark => DARK_THEME,
        }
    }

    /// Only the two exact stored values are recognised.
    pub fn from_storage_value(raw: &str) -> Option<Self> {
        match raw {
            LIGHT_THEME => Some(Theme::Light),
            DARK_THEME => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                bg: Color::Black,
                fg: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                badge_fg: Color::Black,
                badge_bg: Color::Cyan,
                answer: Color::Yellow,
                warn: Color::LightRed,
            },
            Theme::Light => Palette {
                bg: Color::White,
                fg: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                badge_fg: Color::White,
                badge_bg: Color::Blue,
                answer: Color::Magenta,
                warn: Color::Red,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub badge_fg: Color,
    pub badge_bg: Color,
    pub answer: Color,
    pub warn: Color,
}

/// Durable key-value storage for UI preferences.
pub trait PrefStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PrefsFile {
    version: u32,
    #[serde(default)]
    values: HashMap<String, String>,
}

/// Preferences kept as a versioned JSON file under the user's config dir.
#[derive(Debug, Clone)]
pub struct FilePrefStore {
    path: Option<PathBuf>,
}

impl FilePrefStore {
    pub fn new() -> Self {
        Self {
            path: prefs_path(),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn path(&self) -> Result<&PathBuf> {
        self.path.as_ref().ok_or_else(|| anyhow!("no config dir"))
    }

    fn load(&self) -> Result<PrefsFile> {
        let path = self.path()?;
        if !path.exists() {
            return Ok(PrefsFile::default());
        }
        let raw = fs::read_to_string(path).context("read prefs")?;
        let prefs = serde_json::from_str::<PrefsFile>(&raw).context("parse prefs")?;
        // Files from another layout version carry nothing we can trust.
        if prefs.version != PREFS_VERSION {
            return Ok(PrefsFile::default());
        }
        Ok(prefs)
    }
}

impl Default for FilePrefStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefStore for FilePrefStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.values.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path()?;
        // A corrupt file is replaced rather than blocking the write.
        let mut prefs = self.load().unwrap_or_default();
        prefs.version = PREFS_VERSION;
        prefs.values.insert(key.to_string(), value.to_string());
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("create config dir")?;
        }
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(&prefs).context("serialize prefs")?;
        fs::write(&tmp, json).context("write prefs")?;
        fs::rename(&tmp, path).context("swap prefs")?;
        Ok(())
    }
}

impl<T: PrefStore + ?Sized> PrefStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Default)]
pub struct MemoryPrefStore {
    values: RefCell<HashMap<String, String>>,
    fail: bool,
}

impl MemoryPrefStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            values: RefCell::default(),
            fail: true,
        }
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PrefStore for MemoryPrefStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail {
            return Err(anyhow!("storage unavailable"));
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail {
            return Err(anyhow!("storage unavailable"));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stored theme, treating storage failures and unknown values as absent.
pub fn stored_theme(store: &dyn PrefStore) -> Option<Theme> {
    let raw = store.get(THEME_STORAGE_KEY).ok().flatten()?;
    Theme::from_storage_value(&raw)
}

/// Stored value first, then a light default already in effect, then dark.
pub fn resolve_initial(stored: Option<Theme>, ui_default: Option<Theme>) -> Theme {
    match (stored, ui_default) {
        (Some(theme), _) => theme,
        (None, Some(Theme::Light)) => Theme::Light,
        _ => Theme::Dark,
    }
}

/// The `PLAYER_GUESSER_THEME` env var plays the part of a pre-applied mode.
pub fn ui_default_from_env() -> Option<Theme> {
    let raw = std::env::var("PLAYER_GUESSER_THEME").ok()?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "light" | LIGHT_THEME => Some(Theme::Light),
        "dark" | DARK_THEME => Some(Theme::Dark),
        _ => None,
    }
}

/// Active theme plus the state of the control that switches it.
pub struct ThemeToggle {
    store: Box<dyn PrefStore>,
    theme: Theme,
    label: String,
    pressed: bool,
}

impl ThemeToggle {
    pub fn init(store: Box<dyn PrefStore>, ui_default: Option<Theme>) -> Self {
        let initial = resolve_initial(stored_theme(store.as_ref()), ui_default);
        let mut toggle = Self {
            store,
            theme: initial,
            label: String::new(),
            pressed: false,
        };
        toggle.apply(initial);
        toggle
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Describes the action the control performs next.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn apply(&mut self, theme: Theme) {
        self.theme = theme;
        self.label = format!("Switch to {} theme", theme.other().label());
        self.pressed = theme == Theme::Light;
        // Storage can be unavailable; the theme still applies for this run.
        let _ = self.store.set(THEME_STORAGE_KEY, theme.storage_value());
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.other();
        self.apply(next);
        next
    }
}

fn prefs_path() -> Option<PathBuf> {
    if let Ok(base) = std::env::var("XDG_CONFIG_HOME") {
        if !base.trim().is_empty() {
            return Some(PathBuf::from(base).join(CONFIG_DIR).join(PREFS_FILE));
        }
    }
    let home = std::env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(
        PathBuf::from(home)
            .join(".config")
            .join(CONFIG_DIR)
            .join(PREFS_FILE),
    )
}
