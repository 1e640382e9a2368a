//! Scripted key input for driving the picker without a terminal.
//!
//! `CATEGORY_COMBO_TEST_KEYS` holds one key sequence per picker run,
//! separated by `|`; keys within a sequence are separated by `,`.

use crossterm::event::KeyCode;
use once_cell::sync::Lazy;
use std::{collections::VecDeque, env, sync::Mutex};

pub const TEST_KEYS_ENV: &str = "CATEGORY_COMBO_TEST_KEYS";

/// Pending scripted runs; `None` while scripting is off.
type ScriptedRuns = Option<VecDeque<Vec<KeyCode>>>;

static SCRIPTED_RUNS: Lazy<Mutex<ScriptedRuns>> = Lazy::new(|| {
    Mutex::new(env::var(TEST_KEYS_ENV).ok().map(|raw| parse_key_sequences(&raw)))
});

/// Next scripted sequence, or `None` when scripting is off. A script that
/// runs dry yields an empty sequence, which the picker treats as escape.
pub fn next_selector_events(label: &str) -> Option<Vec<KeyCode>> {
    let mut guard = SCRIPTED_RUNS.lock().ok()?;
    let runs = guard.as_mut()?;
    let next = runs.pop_front();
    if next.is_none() {
        tracing::warn!(label, "scripted key sequences exhausted");
    }
    Some(next.unwrap_or_default())
}

/// Turns scripting on with the given runs, replacing any pending ones.
pub fn install_selector_events(runs: Vec<Vec<KeyCode>>) {
    if let Ok(mut guard) = SCRIPTED_RUNS.lock() {
        *guard = Some(runs.into());
    }
}

pub fn reset_selector_events() {
    if let Ok(mut guard) = SCRIPTED_RUNS.lock() {
        *guard = None;
    }
}

pub fn parse_key_sequences(raw: &str) -> VecDeque<Vec<KeyCode>> {
    raw.split('|')
        .filter_map(|segment| {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                return None;
            }
            let events = trimmed
                .split(',')
                .filter_map(|token| parse_key_code(token.trim()))
                .collect::<Vec<_>>();
            if events.is_empty() {
                None
            } else {
                Some(events)
            }
        })
        .collect()
}

/// Named keys are case-insensitive; any other single character is typed
/// as-is, so `f` and `F` stay distinct.
pub fn parse_key_code(token: &str) -> Option<KeyCode> {
    let mut chars = token.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(ch));
    }
    match token.to_ascii_uppercase().as_str() {
        "UP" => Some(KeyCode::Up),
        "DOWN" => Some(KeyCode::Down),
        "LEFT" => Some(KeyCode::Left),
        "RIGHT" => Some(KeyCode::Right),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "ESC" | "ESCAPE" => Some(KeyCode::Esc),
        "BACKSPACE" | "BS" => Some(KeyCode::Backspace),
        "SPACE" => Some(KeyCode::Char(' ')),
        "COMMA" => Some(KeyCode::Char(',')),
        "PIPE" => Some(KeyCode::Char('|')),
        "TAB" => Some(KeyCode::Tab),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_keep_their_case() {
        assert_eq!(parse_key_code("f"), Some(KeyCode::Char('f')));
        assert_eq!(parse_key_code("F"), Some(KeyCode::Char('F')));
        assert_eq!(parse_key_code("down"), Some(KeyCode::Down));
        assert_eq!(parse_key_code("SPACE"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key_code("bogus"), None);
    }

    #[test]
    fn sequences_split_on_pipes_and_skip_blanks() {
        let parsed = parse_key_sequences("F,o,o,DOWN,ENTER| |ESC");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].len(), 5);
        assert_eq!(parsed[1], vec![KeyCode::Esc]);
    }
}
