use crossterm::event::{poll, read, Event, KeyCode};
use crossterm::terminal;
use log::warn;
use std::collections::HashMap;
use std::io;
use std::time::Duration;

/// map of keyboard characters to chip8 key symbols, using the left-hand
/// side of a qwerty keyboard:
///
///   1 2 3 4      1 2 3 C
///   q w e r  =>  4 5 6 D
///   a s d f      7 8 9 E
///   z x c v      A 0 B F
const CHIP8_CONVENTIONAL_KEYMAP: [(char, u8); 16] = [
    ('x', 0x00),
    ('1', 0x01),
    ('2', 0x02),
    ('3', 0x03),
    ('q', 0x04),
    ('w', 0x05),
    ('e', 0x06),
    ('a', 0x07),
    ('s', 0x08),
    ('d', 0x09),
    ('z', 0x0a),
    ('c', 0x0b),
    ('4', 0x0c),
    ('r', 0x0d),
    ('f', 0x0e),
    ('v', 0x0f),
];

/// reads keypresses
pub trait Input {
    /// get a list of all the mapped keys that have been pressed recently,
    /// without flushing them from the buffer
    fn peek_keys(&mut self) -> Result<&[u8], io::Error>;

    /// flush all the keypresses from the buffer
    fn flush_keys(&mut self) -> Result<(), io::Error>;

    /// has the user asked to leave the emulator?
    fn quit_requested(&self) -> bool {
        false
    }
}

/// simple implementation of Input, using STDIN
pub struct StdinInput {
    buffer: Vec<u8>,
    keymap: HashMap<char, u8>,
    quit: bool,
}

impl StdinInput {
    pub fn new() -> Self {
        terminal::enable_raw_mode().unwrap();
        StdinInput {
            buffer: Vec::new(),
            keymap: HashMap::from(CHIP8_CONVENTIONAL_KEYMAP),
            quit: false,
        }
    }

    fn read_stdin(&mut self) -> Result<(), io::Error> {
        while poll(Duration::from_millis(0))? {
            match read()? {
                Event::Key(evt) => match evt.code {
                    KeyCode::Char(key) => match self.keymap.get(&key) {
                        Some(mapped_key) => self.buffer.push(*mapped_key),
                        None => {
                            warn!("can't map {:?} to a chip8 key", key);
                        }
                    },
                    KeyCode::Esc => self.quit = true,
                    _ => {
                        warn!("unknown key event received");
                    }
                },
                _ => {
                    warn!("unknown event received");
                }
            }
        }
        Ok(())
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StdinInput {
    fn drop(&mut self) {
        terminal::disable_raw_mode().unwrap();
    }
}

impl Input for StdinInput {
    fn peek_keys(&mut self) -> Result<&[u8], io::Error> {
        self.read_stdin()?;
        Ok(self.buffer.as_slice())
    }

    fn flush_keys(&mut self) -> Result<(), io::Error> {
        self.read_stdin()?;
        self.buffer.clear();
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}

/// dummy Input implementation for testing
pub struct DummyInput {
    bytes: Vec<u8>,
}

impl DummyInput {
    pub fn new(keys: &[u8]) -> Self {
        DummyInput {
            bytes: Vec::from(keys),
        }
    }
}

impl Input for DummyInput {
    fn peek_keys(&mut self) -> Result<&[u8], io::Error> {
        Ok(self.bytes.as_slice())
    }

    fn flush_keys(&mut self) -> Result<(), io::Error> {
        self.bytes.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dummy_input_peek_does_not_consume() -> Result<(), io::Error> {
        let mut i = DummyInput::new(&[0x1, 0xa]);
        assert_eq!(i.peek_keys()?, &[0x1, 0xa]);
        assert_eq!(i.peek_keys()?, &[0x1, 0xa]);
        Ok(())
    }

    #[test]
    fn test_dummy_input_flush_consumes() -> Result<(), io::Error> {
        let mut i = DummyInput::new(&[0x1, 0xa]);
        i.flush_keys()?;
        assert!(i.peek_keys()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_dummy_input_never_quits() {
        let i = DummyInput::new(&[]);
        assert!(!i.quit_requested());
    }

    #[test]
    fn test_keymap_covers_all_sixteen_keys() {
        let mut symbols: Vec<u8> = CHIP8_CONVENTIONAL_KEYMAP.iter().map(|(_, v)| *v).collect();
        symbols.sort_unstable();
        assert_eq!(symbols, (0..16).collect::<Vec<u8>>());
    }
}
