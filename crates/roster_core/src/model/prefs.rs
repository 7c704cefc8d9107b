//! Session preferences passed through by the model.
//!
//! # Responsibility
//! - Hold window geometry and the roster storage path for one session.
//!
//! # Invariants
//! - Preferences carry no behaviour beyond get/set; the model never
//!   interprets them.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_WINDOW_WIDTH: f64 = 740.0;
const DEFAULT_WINDOW_HEIGHT: f64 = 600.0;
const DEFAULT_ADDRESS_BOOK_FILE: &str = "data/addressbook.json";

/// Window geometry remembered between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiSettings {
    pub window_width: f64,
    pub window_height: f64,
    /// `None` lets the presentation layer centre the window.
    pub window_x: Option<i32>,
    pub window_y: Option<i32>,
}

impl GuiSettings {
    pub fn new(window_width: f64, window_height: f64, window_x: i32, window_y: i32) -> Self {
        Self {
            window_width,
            window_height,
            window_x: Some(window_x),
            window_y: Some(window_y),
        }
    }
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_x: None,
            window_y: None,
        }
    }
}

/// Per-user session preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrefs {
    gui_settings: GuiSettings,
    address_book_file_path: PathBuf,
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self {
            gui_settings: GuiSettings::default(),
            address_book_file_path: PathBuf::from(DEFAULT_ADDRESS_BOOK_FILE),
        }
    }
}

impl UserPrefs {
    /// Replaces every field with the values from `other`.
    pub fn reset_data(&mut self, other: &UserPrefs) {
        self.gui_settings = other.gui_settings.clone();
        self.address_book_file_path = other.address_book_file_path.clone();
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        &self.gui_settings
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.gui_settings = gui_settings;
    }

    pub fn address_book_file_path(&self) -> &Path {
        &self.address_book_file_path
    }

    pub fn set_address_book_file_path(&mut self, path: impl Into<PathBuf>) {
        self.address_book_file_path = path.into();
    }
}
