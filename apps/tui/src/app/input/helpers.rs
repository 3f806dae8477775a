use crossterm::event::KeyCode;

pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Cursor movement shared by the list screens. Returns `None` for keys that
/// are not list navigation.
pub fn move_cursor(index: usize, len: usize, key: KeyCode) -> Option<usize> {
    let last = len.saturating_sub(1);
    let next = match key {
        KeyCode::Up => index.saturating_sub(1),
        KeyCode::Down => (index + 1).min(last),
        KeyCode::PageUp => index.saturating_sub(5),
        KeyCode::PageDown => (index + 5).min(last),
        KeyCode::Home => 0,
        KeyCode::End => last,
        _ => return None,
    };
    Some(next)
}

/// Applies a text-editing key to `buffer`. Returns whether the key was
/// consumed.
pub fn edit_text(buffer: &mut String, key: KeyCode) -> bool {
    match key {
        KeyCode::Backspace => {
            buffer.pop();
            true
        }
        KeyCode::Char(ch) => {
            buffer.push(ch);
            true
        }
        _ => false,
    }
}

/// Next (or previous) entry of `options` after `current`, where `None` is
/// the "all" position in front of the list.
pub fn cycle_choice(options: &[&str], current: Option<&str>, forward: bool) -> Option<String> {
    let len = options.len() + 1;
    let index = current
        .and_then(|value| options.iter().position(|option| *option == value))
        .map_or(0, |position| position + 1);
    let next = if forward {
        wrap_increment(index, len)
    } else {
        wrap_decrement(index, len)
    };
    next.checked_sub(1)
        .and_then(|position| options.get(position))
        .map(|option| (*option).to_owned())
}
