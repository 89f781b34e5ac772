use chip8_vm::emulator::{Framebuffer, SCREEN_HEIGHT, SCREEN_WIDTH};

use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use std::io::{stdout, Write};
use std::time::{Duration, Instant};

/// How long a key counts as held after its last press event.
const KEY_HELD: Duration = Duration::from_millis(250);

/// The fixed keymap: '0'-'9' and 'a'-'f' (either case) name the 16 keypad
/// indices; everything else is ignored.
pub fn key_to_nibble(c: char) -> Option<u8> {
    c.to_ascii_lowercase().to_digit(16).map(|d| d as u8)
}

/// Keypad state reconstructed from key press events. Terminals report no
/// release events, so a key counts as down while its last press is fresher
/// than a timeout.
pub struct HeldKeys {
    last_press: [Option<Instant>; 16],
}

impl HeldKeys {
    pub fn new() -> HeldKeys {
        HeldKeys {
            last_press: [None; 16],
        }
    }

    pub fn press(&mut self, key: u8) {
        self.last_press[key as usize & 0xF] = Some(Instant::now());
    }

    pub fn is_down(&self, key: u8) -> bool {
        self.last_press[key as usize & 0xF]
            .map(|at| at.elapsed() < KEY_HELD)
            .unwrap_or(false)
    }
}

/// Renders framebuffer snapshots to the terminal, two columns per pixel,
/// inside a box border. Entering the alternate screen and raw mode happens
/// on construction and is undone on drop.
pub struct TerminalScreen {
    drawn: Framebuffer,
}

impl TerminalScreen {
    pub fn new() -> crossterm::Result<TerminalScreen> {
        execute!(stdout(), EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))?;
        terminal::enable_raw_mode()?;
        draw_border()?;
        Ok(TerminalScreen {
            drawn: Framebuffer::new(),
        })
    }

    /// Repaint the cells that changed since the previous frame.
    pub fn render(&mut self, framebuffer: &Framebuffer) -> crossterm::Result<()> {
        let frame = *framebuffer;
        for x in 0..SCREEN_WIDTH {
            for y in 0..SCREEN_HEIGHT {
                let state = frame.get(x, y);
                if self.drawn.get(x, y) != state {
                    execute!(stdout(), cursor::MoveTo(2 * x as u16 + 2, y as u16 + 2))?;
                    write!(stdout(), "{}", if state { "██" } else { "  " })?;
                }
            }
        }
        self.drawn = frame;
        stdout().flush()?;
        Ok(())
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

fn draw_border() -> crossterm::Result<()> {
    let right = 2 * SCREEN_WIDTH as u16 + 2;
    let bottom = SCREEN_HEIGHT as u16 + 2;
    for y in 1..=bottom {
        for x in 1..=right {
            if y == 1 || y == bottom || x == 1 || x == right {
                let c = if y == 1 && x == 1 {
                    '┏'
                } else if y == 1 && x == right {
                    '┓'
                } else if y == bottom && x == 1 {
                    '┗'
                } else if y == bottom && x == right {
                    '┛'
                } else if y == 1 || y == bottom {
                    '━'
                } else {
                    '┃'
                };
                execute!(stdout(), cursor::MoveTo(x, y))?;
                write!(stdout(), "{}", c)?;
            }
        }
    }
    stdout().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn keymap_covers_the_hex_digits() {
        assert_eq!(Some(0x0), key_to_nibble('0'));
        assert_eq!(Some(0x9), key_to_nibble('9'));
        assert_eq!(Some(0xA), key_to_nibble('a'));
        assert_eq!(Some(0xF), key_to_nibble('f'));
        assert_eq!(Some(0xB), key_to_nibble('B'));
        assert_eq!(None, key_to_nibble('g'));
        assert_eq!(None, key_to_nibble(' '));
    }

    #[test]
    fn held_keys_expire() {
        let mut held = HeldKeys::new();
        assert!(!held.is_down(0x4));
        held.press(0x4);
        assert!(held.is_down(0x4));
        assert!(!held.is_down(0x5));
    }
}
