use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};

/// Terminal event translated into something the picker session acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerInput {
    Up,
    Down,
    Enter,
    Esc,
    Char(char),
    Backspace,
    Interrupt,
    Click { row: u16 },
    Hover { row: u16 },
    Resize,
    Unknown,
}

pub fn key_input(code: KeyCode) -> PickerInput {
    match code {
        KeyCode::Up => PickerInput::Up,
        KeyCode::Down => PickerInput::Down,
        KeyCode::Enter => PickerInput::Enter,
        KeyCode::Esc => PickerInput::Esc,
        KeyCode::Backspace => PickerInput::Backspace,
        KeyCode::Char(ch) => PickerInput::Char(ch),
        _ => PickerInput::Unknown,
    }
}

fn key_event_input(key: KeyEvent) -> PickerInput {
    if key.kind == KeyEventKind::Release {
        return PickerInput::Unknown;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return PickerInput::Interrupt;
    }
    key_input(key.code)
}

pub fn event_input(event: Event) -> PickerInput {
    match event {
        Event::Key(key) => key_event_input(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => PickerInput::Click { row: mouse.row },
            MouseEventKind::Moved => PickerInput::Hover { row: mouse.row },
            _ => PickerInput::Unknown,
        },
        Event::Resize(_, _) => PickerInput::Resize,
        _ => PickerInput::Unknown,
    }
}
