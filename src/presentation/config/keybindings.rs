use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de, Deserialize, Deserializer, Serialize};
use strum::Display;

use crate::core::state::ui::Tab;

/// What a bound key does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    Quit,
    Suspend,
    NextTab,
    PreviousTab,

    NextImage,
    PreviousImage,

    StartTimer,
    StopTimer,
    ResetTimer,

    NewTask,
    SelectNextTask,
    SelectPreviousTask,
    ToggleDone,
    RemoveTask,

    SubmitForm,
    NextField,
    PreviousField,
}

/// Where a binding applies. `Global` is consulted after the active tab's scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Global,
    Contact,
    Carousel,
    Timer,
    Todo,
}

impl From<Tab> for Scope {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Contact => Scope::Contact,
            Tab::Carousel => Scope::Carousel,
            Tab::Timer => Scope::Timer,
            Tab::Todo => Scope::Todo,
        }
    }
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Scope, HashMap<Vec<KeyEvent>, Action>>);

impl KeyBindings {
    /// Action bound to the single key `key` within `scope`
    pub fn action_for(&self, scope: Scope, key: KeyEvent) -> Option<Action> {
        self.get(&scope)
            .and_then(|bindings| bindings.get(&vec![key]))
            .copied()
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<Scope, HashMap<String, Action>>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(scope, inner_map)| {
                let converted = inner_map
                    .into_iter()
                    .map(|(key_str, action)| Ok((parse_key_sequence(&key_str)?, action)))
                    .collect::<Result<HashMap<_, _>, String>>()?;
                Ok((scope, converted))
            })
            .collect::<Result<HashMap<_, _>, String>>()
            .map_err(de::Error::custom)?;

        Ok(KeyBindings(keybindings))
    }
}

/// Parse `<ctrl-s>` or `<g><g>` style sequences
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    let inner = raw
        .trim()
        .strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .ok_or_else(|| format!("Unable to parse `{raw}`: expected `<key>`"))?;
    if inner.contains('<') != inner.contains('>') {
        return Err(format!("Unable to parse `{raw}`: unbalanced brackets"));
    }
    inner.split("><").map(parse_key_event).collect()
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        if let Some(rest) = current.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            current = rest;
        } else if let Some(rest) = current.strip_prefix("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            current = rest;
        } else {
            break;
        }
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let code = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next().unwrap_or_default();
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse key `{raw}`")),
    };
    Ok(KeyEvent::new(code, modifiers))
}
