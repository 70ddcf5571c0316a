//! Host keymap configuration and the reserved move-tab shortcuts
//!
//! The host hands over its full keymap (command name -> one or more key
//! combinations); [`decorate_keymaps`] forces the two move-tab bindings in
//! and strips their combinations from every other command, so the reserved
//! shortcuts always win. User overrides load from
//! `~/.config/tabdrag/keymap.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TabdragError};

use super::key::KeyAction;

/// Command name for the move-left shortcut
pub const MOVE_LEFT_COMMAND: &str = "tab:moveLeft";
/// Command name for the move-right shortcut
pub const MOVE_RIGHT_COMMAND: &str = "tab:moveRight";
/// Reserved combination for [`MOVE_LEFT_COMMAND`]
pub const MOVE_LEFT_KEYS: &str = "ctrl+shift+left";
/// Reserved combination for [`MOVE_RIGHT_COMMAND`]
pub const MOVE_RIGHT_KEYS: &str = "ctrl+shift+right";

/// One command's key bindings: a single combination or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Binding {
    Single(String),
    Multiple(Vec<String>),
}

impl Binding {
    /// Whether any of the bound combinations equals `combo`
    pub fn contains(&self, combo: &str) -> bool {
        match self {
            Binding::Single(keys) => keys == combo,
            Binding::Multiple(list) => list.iter().any(|keys| keys == combo),
        }
    }

    /// Strip the reserved move-tab combinations from this binding
    ///
    /// A single binding for a reserved combination disappears entirely; a
    /// list binding is filtered and kept, even when emptied. Combinations
    /// are compared in normalized form, so any modifier spelling or order
    /// denoting a reserved physical combo is stripped.
    fn without_reserved(&self) -> Option<Binding> {
        match self {
            Binding::Single(keys) => {
                if is_reserved(keys) {
                    None
                } else {
                    Some(self.clone())
                }
            }
            Binding::Multiple(list) => {
                let kept: Vec<String> =
                    list.iter().filter(|keys| !is_reserved(keys)).cloned().collect();
                Some(Binding::Multiple(kept))
            }
        }
    }
}

/// Whether `keys` denotes one of the reserved move-tab combinations
///
/// Non-combination strings can't collide with the reserved combos, so they
/// compare literally.
fn is_reserved(keys: &str) -> bool {
    let canonical = normalize_combo(keys).unwrap_or_else(|_| keys.to_string());
    canonical == MOVE_LEFT_KEYS || canonical == MOVE_RIGHT_KEYS
}

/// Full host keymap: command name -> bindings, insertion-ordered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeymapConfig {
    pub commands: IndexMap<String, Binding>,
}

impl KeymapConfig {
    /// Get the config directory path (~/.config/tabdrag)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tabdrag"))
    }

    /// Get the keymap file path (~/.config/tabdrag/keymap.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("keymap.toml"))
    }

    /// Load the user keymap from file
    ///
    /// Returns an empty keymap if the file doesn't exist or can't be parsed
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| {
                if path.exists() {
                    fs::read_to_string(&path).ok()
                } else {
                    None
                }
            })
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Load a keymap from a specific path (for testing)
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TabdragError::config(e.to_string()))
    }

    /// Bind `command` to a single combination
    pub fn bind(&mut self, command: impl Into<String>, keys: impl Into<String>) {
        self.commands
            .insert(command.into(), Binding::Single(keys.into()));
    }

    /// Bind `command` to a list of combinations
    pub fn bind_all(&mut self, command: impl Into<String>, keys: &[&str]) {
        self.commands.insert(
            command.into(),
            Binding::Multiple(keys.iter().map(|k| k.to_string()).collect()),
        );
    }

    /// Resolve a key event against the two reserved move-tab commands
    ///
    /// Bindings that aren't valid combination strings are logged and skipped.
    pub fn lookup(&self, key: &KeyEvent) -> Option<KeyAction> {
        let pressed = key_event_to_string(key);
        if pressed.is_empty() {
            return None;
        }

        let commands = [
            (MOVE_LEFT_COMMAND, KeyAction::MoveTabLeft),
            (MOVE_RIGHT_COMMAND, KeyAction::MoveTabRight),
        ];
        for (command, action) in commands {
            let Some(binding) = self.commands.get(command) else {
                continue;
            };
            if binding_matches(command, binding, &pressed) {
                return Some(action);
            }
        }
        None
    }
}

fn binding_matches(command: &str, binding: &Binding, pressed: &str) -> bool {
    let combos: Vec<&String> = match binding {
        Binding::Single(keys) => vec![keys],
        Binding::Multiple(list) => list.iter().collect(),
    };
    combos.into_iter().any(|keys| match normalize_combo(keys) {
        Ok(combo) => combo == pressed,
        Err(e) => {
            warn!("skipping binding {keys:?} for {command}: {e}");
            false
        }
    })
}

/// Force the two reserved move-tab bindings into a host keymap
///
/// Every other command loses any binding to the reserved combinations, and
/// the two move-tab commands come out bound to their fixed combinations no
/// matter what the input bound them to. Applying the transform twice yields
/// the same result as applying it once.
pub fn decorate_keymaps(keymaps: &KeymapConfig) -> KeymapConfig {
    let mut decorated = KeymapConfig::default();
    decorated.bind(MOVE_LEFT_COMMAND, MOVE_LEFT_KEYS);
    decorated.bind(MOVE_RIGHT_COMMAND, MOVE_RIGHT_KEYS);

    for (command, binding) in &keymaps.commands {
        if command == MOVE_LEFT_COMMAND || command == MOVE_RIGHT_COMMAND {
            continue;
        }
        match binding.without_reserved() {
            Some(kept) => {
                decorated.commands.insert(command.clone(), kept);
            }
            None => {
                warn!("unbinding {command}: its combination is reserved for tab moves");
            }
        }
    }
    decorated
}

/// Normalize a combination string to canonical `mod+...+key` form
///
/// Modifiers come out in ctrl, alt, shift, super order; `cmd`/`command` are
/// aliases for `super`. Errors on empty combos and unknown modifier tokens.
pub fn normalize_combo(combo: &str) -> Result<String> {
    let tokens: Vec<String> = combo
        .split('+')
        .map(|t| t.trim().to_lowercase())
        .collect();
    let Some((key, modifiers)) = tokens.split_last() else {
        return Err(TabdragError::keymap(format!("empty combination: {combo:?}")));
    };
    if key.is_empty() {
        return Err(TabdragError::keymap(format!("missing key in: {combo:?}")));
    }

    let mut parts: Vec<&str> = Vec::new();
    for modifier in modifiers {
        let name = match modifier.as_str() {
            "ctrl" | "control" => "ctrl",
            "alt" | "option" => "alt",
            "shift" => "shift",
            "super" | "cmd" | "command" | "meta" => "super",
            other => {
                return Err(TabdragError::keymap(format!("unknown modifier: {other}")));
            }
        };
        if !parts.contains(&name) {
            parts.push(name);
        }
    }
    parts.sort_by_key(|name| match *name {
        "ctrl" => 0,
        "alt" => 1,
        "shift" => 2,
        _ => 3,
    });

    parts.push(key);
    Ok(parts.join("+"))
}

/// Convert a KeyEvent to a canonical combination string
fn key_event_to_string(key: &KeyEvent) -> String {
    let mut parts = Vec::new();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("ctrl");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("alt");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        // Only add shift for non-character keys or when combined with ctrl/alt
        if !matches!(key.code, KeyCode::Char(_)) || !parts.is_empty() {
            parts.push("shift");
        }
    }
    if key.modifiers.contains(KeyModifiers::SUPER) {
        parts.push("super");
    }

    let key_name = match key.code {
        KeyCode::Char(c) => c.to_lowercase().to_string(),
        KeyCode::F(n) => format!("f{}", n),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::Esc => "esc".to_string(),
        _ => return String::new(),
    };

    if parts.is_empty() {
        key_name
    } else {
        parts.push(&key_name);
        parts.join("+")
    }
}
