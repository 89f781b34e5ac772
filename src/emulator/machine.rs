//! The machine state as described at
//! https://en.wikipedia.org/wiki/CHIP-8#Virtual_machine_description:
//! memory, registers, call stack, timers, framebuffer and keypad.

pub const MEM_SIZE: usize = 4096;
pub const NUM_REGISTERS: usize = 16;
pub const NUM_KEYS: usize = 16;
pub const SCREEN_WIDTH: usize = 64;
pub const SCREEN_HEIGHT: usize = 32;
pub const PC_START: u16 = 0x200;

/// The built-in 4x5 font, one glyph per hex digit, installed at 0x000.
const FONT: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];

/// The 64x32 one-bit display plane, indexed `[x][y]`.
///
/// Only the draw instruction (via XOR) and the clear-screen instruction
/// mutate it. It is `Copy` so a renderer can take a snapshot per frame
/// instead of sharing cells with the execution context.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Framebuffer {
    cells: [[bool; SCREEN_HEIGHT]; SCREEN_WIDTH],
}

impl Framebuffer {
    pub fn new() -> Framebuffer {
        Framebuffer {
            cells: [[false; SCREEN_HEIGHT]; SCREEN_WIDTH],
        }
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[x][y]
    }

    /// XOR a sprite bit into the cell at (x, y) and return the new state.
    pub(crate) fn xor(&mut self, x: usize, y: usize, bit: bool) -> bool {
        self.cells[x][y] ^= bit;
        self.cells[x][y]
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [[false; SCREEN_HEIGHT]; SCREEN_WIDTH];
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// The complete machine state. Created once with the font installed and
/// PC at 0x200, then owned and mutated by the cycle engine; the keypad is
/// written from outside between cycles and the framebuffer read from
/// outside whenever the renderer wants a frame.
pub struct Machine {
    pub(crate) memory: [u8; MEM_SIZE],
    pub(crate) registers: [u8; NUM_REGISTERS],
    pub(crate) i: u16,
    pub(crate) program_counter: u16,
    pub(crate) stack: Vec<u16>,
    pub(crate) delay_timer: u8,
    pub(crate) sound_timer: u8,
    pub(crate) framebuffer: Framebuffer,
    pub(crate) keypad: [bool; NUM_KEYS],
}

impl Machine {
    pub fn new() -> Machine {
        let mut memory = [0; MEM_SIZE];
        memory[..FONT.len()].copy_from_slice(&FONT);

        Machine {
            memory,
            registers: [0; NUM_REGISTERS],
            i: 0,
            program_counter: PC_START,
            stack: Vec::new(),
            delay_timer: 0,
            sound_timer: 0,
            framebuffer: Framebuffer::new(),
            keypad: [false; NUM_KEYS],
        }
    }

    /// Copy a program into memory at 0x200. Any byte sequence is accepted;
    /// bytes that would run past the end of memory are dropped.
    pub fn load(&mut self, program: &[u8]) {
        let capacity = MEM_SIZE - PC_START as usize;
        if program.len() > capacity {
            log::warn!(
                "program is {} bytes, truncating to {}",
                program.len(),
                capacity
            );
        }
        let len = std::cmp::min(program.len(), capacity);
        let start = PC_START as usize;
        self.memory[start..start + len].copy_from_slice(&program[..len]);
    }

    /// Set the pressed state of one of the 16 keys. Meant for the input
    /// collaborator; key state is level-triggered, so the same state may be
    /// written repeatedly.
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        if let Some(slot) = self.keypad.get_mut(key as usize) {
            *slot = pressed;
        }
    }

    /// Whether the key named by a register value is down. Values above 0xF
    /// name no key and read as released.
    pub(crate) fn key_pressed(&self, key: u8) -> bool {
        self.keypad.get(key as usize).copied().unwrap_or(false)
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn register(&self, index: u8) -> u8 {
        self.registers[index as usize]
    }

    pub fn program_counter(&self) -> u16 {
        self.program_counter
    }

    pub fn delay_timer(&self) -> u8 {
        self.delay_timer
    }

    /// The sound timer; a frontend with a beeper would sound it while this
    /// is nonzero.
    pub fn sound_timer(&self) -> u8 {
        self.sound_timer
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn font_is_installed_at_zero() {
        let machine = Machine::new();
        assert_eq!(&machine.memory[..80], &FONT[..]);
        // Glyph for 0xF starts at 0xF * 5
        assert_eq!(machine.memory[0xF * 5], 0xF0);
    }

    #[test]
    fn programs_load_at_0x200() {
        let mut machine = Machine::new();
        machine.load(&[0xAB, 0xCD]);
        assert_eq!(machine.memory[0x200], 0xAB);
        assert_eq!(machine.memory[0x201], 0xCD);
        assert_eq!(machine.program_counter(), 0x200);
    }

    #[test]
    fn oversized_programs_are_truncated() {
        let mut machine = Machine::new();
        let program = vec![0xFF; MEM_SIZE];
        machine.load(&program);
        assert_eq!(machine.memory[MEM_SIZE - 1], 0xFF);
        // The font is not overwritten
        assert_eq!(&machine.memory[..80], &FONT[..]);
    }

    #[test]
    fn keypad_writes_are_bounded() {
        let mut machine = Machine::new();
        machine.set_key(0x3, true);
        assert!(machine.keypad[0x3]);
        machine.set_key(0x3, false);
        assert!(!machine.keypad[0x3]);
        machine.set_key(0xFF, true); // Out of range, ignored
    }

    #[test]
    fn framebuffer_xor_toggles() {
        let mut fb = Framebuffer::new();
        assert!(fb.xor(3, 4, true));
        assert!(fb.get(3, 4));
        assert!(!fb.xor(3, 4, true));
        assert!(!fb.get(3, 4));
        // XOR with 0 leaves the cell alone
        assert!(!fb.xor(3, 4, false));
    }
}
