//! The cycle engine: fetch an instruction at PC, decode it, apply it to the
//! machine state, then tick the timers.

use crate::emulator::error::{DecodeError, Fault};
use crate::emulator::instruction::*;
use crate::emulator::machine::{Framebuffer, Machine, MEM_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

/// The fetch-decode-execute engine around a [`Machine`].
///
/// One `step` is one cycle. Undecodable words are logged and skipped;
/// stack underflow and out-of-bounds memory access end the run with a
/// [`Fault`].
pub struct Emulator {
    machine: Machine,
}

impl Emulator {
    /// Create an emulator around a fresh machine.
    pub fn new() -> Emulator {
        Emulator::with_machine(Machine::new())
    }

    /// Create an emulator around prepared machine state.
    pub fn with_machine(machine: Machine) -> Emulator {
        Emulator { machine }
    }

    /// Copy a program into memory at 0x200.
    pub fn load(&mut self, program: &[u8]) {
        self.machine.load(program);
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Write one key's pressed state, for the input collaborator.
    pub fn set_key(&mut self, key: u8, pressed: bool) {
        self.machine.set_key(key, pressed);
    }

    /// The current framebuffer. It is `Copy`, so `*emulator.framebuffer()`
    /// is a snapshot a renderer can keep across further cycles.
    pub fn framebuffer(&self) -> &Framebuffer {
        self.machine.framebuffer()
    }

    /// Perform a single cycle: fetch the two bytes at PC as a big-endian
    /// word, advance PC, decode and apply, then count the timers down.
    pub fn step(&mut self) -> Result<(), Fault> {
        let pc = self.machine.program_counter;
        if pc as usize + 1 >= MEM_SIZE {
            return Err(Fault::OutOfBounds { addr: pc });
        }

        // Each instruction is two bytes
        let left = self.machine.memory[pc as usize];
        let right = self.machine.memory[pc as usize + 1];
        self.machine.program_counter += 2;

        match Instruction::try_from_two_u8(left, right) {
            Ok(instruction) => {
                log::trace!("{:#06X}: {:?}", pc, instruction);
                self.execute_single(instruction)?;
            }
            // Tolerated so that programs using quirks we don't implement
            // keep running; the cycle becomes a no-op.
            Err(DecodeError(word)) => {
                log::warn!("no opcode matches {:#06X} at {:#06X}, skipping", word, pc);
            }
        }

        self.tick_timers();
        Ok(())
    }

    /// Count both timers down by one, saturating at zero. Bound to the
    /// instruction cycle rate, not to a separate 60 Hz clock.
    fn tick_timers(&mut self) {
        if self.machine.delay_timer > 0 {
            self.machine.delay_timer -= 1;
        }
        if self.machine.sound_timer > 0 {
            self.machine.sound_timer -= 1;
            if self.machine.sound_timer == 0 {
                // Where a frontend with a beeper would stop beeping
                log::debug!("sound timer reached zero");
            }
        }
    }

    /// Execute a sequence of instructions without fetching them from memory.
    pub fn execute_many(&mut self, instructions: &[Instruction]) -> Result<(), Fault> {
        for instruction in instructions {
            self.execute_single(*instruction)?;
        }
        Ok(())
    }

    /// Execute a single instruction against the machine state.
    pub fn execute_single(&mut self, instruction: Instruction) -> Result<(), Fault> {
        let machine = &mut self.machine;
        match instruction {
            // Clear the framebuffer
            Instruction::ClearScreen => {
                machine.framebuffer.clear();
            }

            // Return to the previous call site via the stack
            Instruction::Return => {
                machine.program_counter = machine.stack.pop().ok_or(Fault::StackUnderflow {
                    pc: machine.program_counter,
                })?;
            }

            // Go to a specific memory address
            Instruction::Goto(Addr(addr)) => {
                machine.program_counter = addr;
            }

            // Store the current address on the stack, then jump to the specified address
            Instruction::Call(Addr(addr)) => {
                machine.stack.push(machine.program_counter);
                machine.program_counter = addr;
            }

            // If the register equals the constant, skip the next instruction
            Instruction::IfRegEqConst(Reg(x), Const(n)) => {
                if machine.registers[x as usize] == n {
                    machine.program_counter += 2;
                }
            }

            Instruction::IfRegNeqConst(Reg(x), Const(n)) => {
                if machine.registers[x as usize] != n {
                    machine.program_counter += 2;
                }
            }

            Instruction::IfRegEqReg(Reg(x), Reg(y)) => {
                if machine.registers[x as usize] == machine.registers[y as usize] {
                    machine.program_counter += 2;
                }
            }

            Instruction::SetRegToConst(Reg(x), Const(n)) => {
                machine.registers[x as usize] = n;
            }

            // No carry flag for the constant variant
            Instruction::IncRegByConst(Reg(x), Const(n)) => {
                machine.registers[x as usize] = machine.registers[x as usize].wrapping_add(n);
            }

            Instruction::SetRegToReg(Reg(x), Reg(y)) => {
                machine.registers[x as usize] = machine.registers[y as usize];
            }

            Instruction::BitwiseOr(Reg(x), Reg(y)) => {
                machine.registers[x as usize] |= machine.registers[y as usize];
            }

            Instruction::BitwiseAnd(Reg(x), Reg(y)) => {
                machine.registers[x as usize] &= machine.registers[y as usize];
            }

            Instruction::BitwiseXor(Reg(x), Reg(y)) => {
                machine.registers[x as usize] ^= machine.registers[y as usize];
            }

            // Vx += Vy, VF = 1 on carry, 0 otherwise
            Instruction::IncRegByReg(Reg(x), Reg(y)) => {
                let sum = machine.registers[x as usize] as u16 + machine.registers[y as usize] as u16;
                machine.registers[0xF] = (sum > 0xFF) as u8;
                machine.registers[x as usize] = sum as u8;
            }

            // Vx -= Vy, VF = 0 on borrow, 1 otherwise
            Instruction::DecRegByReg(Reg(x), Reg(y)) => {
                let (vx, vy) = (machine.registers[x as usize], machine.registers[y as usize]);
                machine.registers[0xF] = (vx >= vy) as u8;
                machine.registers[x as usize] = vx.wrapping_sub(vy);
            }

            // Vx >>= 1, VF = the bit shifted out (Y is unused)
            Instruction::BitshiftRight(Reg(x)) => {
                machine.registers[0xF] = machine.registers[x as usize] & 1;
                machine.registers[x as usize] >>= 1;
            }

            // Vx = Vy - Vx, VF = 0 on borrow, 1 otherwise
            Instruction::SetVxVyMinusVx(Reg(x), Reg(y)) => {
                let (vx, vy) = (machine.registers[x as usize], machine.registers[y as usize]);
                machine.registers[0xF] = (vy >= vx) as u8;
                machine.registers[x as usize] = vy.wrapping_sub(vx);
            }

            // Vx <<= 1, VF = the bit shifted out (Y is unused)
            Instruction::BitshiftLeft(Reg(x)) => {
                let shifted = (machine.registers[x as usize] as u16) << 1;
                machine.registers[0xF] = (shifted > 0xFF) as u8;
                machine.registers[x as usize] = shifted as u8;
            }

            Instruction::IfRegNeqReg(Reg(x), Reg(y)) => {
                if machine.registers[x as usize] != machine.registers[y as usize] {
                    machine.program_counter += 2;
                }
            }

            Instruction::SetI(Addr(addr)) => {
                machine.i = addr;
            }

            Instruction::SetPcToV0PlusAddr(Addr(addr)) => {
                machine.program_counter = addr + machine.registers[0] as u16;
            }

            Instruction::SetVxRand(Reg(x), Const(n)) => {
                machine.registers[x as usize] = rand::random::<u8>() & n;
            }

            // Draw an 8-wide, N-tall sprite from memory[I..] at (Vx, Vy).
            // Pixels are XORed in; anything outside the 64x32 grid is
            // clipped. VF is 1 iff some cell ends up set by this draw.
            Instruction::Draw(Reg(x), Reg(y), Const(sprite_height)) => {
                let x_coord = machine.registers[x as usize] as usize;
                let y_coord = machine.registers[y as usize] as usize;

                let sprite_start = machine.i as usize;
                let sprite_end = sprite_start + sprite_height as usize;
                if sprite_end > MEM_SIZE {
                    return Err(Fault::OutOfBounds {
                        addr: (sprite_end - 1) as u16,
                    });
                }

                machine.registers[0xF] = 0;
                for (row, &row_bits) in machine.memory[sprite_start..sprite_end].iter().enumerate() {
                    for column in 0..8 {
                        let (px, py) = (x_coord + column, y_coord + row);
                        if px >= SCREEN_WIDTH || py >= SCREEN_HEIGHT {
                            log::trace!("clipped pixel at ({}, {})", px, py);
                            continue;
                        }
                        let bit = (row_bits >> (7 - column)) & 1 == 1;
                        if machine.framebuffer.xor(px, py, bit) {
                            machine.registers[0xF] = 1;
                        }
                    }
                }
            }

            // Skip if the key in Vx is pressed
            Instruction::IfKeyEqVx(Reg(x)) => {
                if machine.key_pressed(machine.registers[x as usize]) {
                    machine.program_counter += 2;
                }
            }

            // Skip if the key in Vx isn't pressed
            Instruction::IfKeyNeqVx(Reg(x)) => {
                if !machine.key_pressed(machine.registers[x as usize]) {
                    machine.program_counter += 2;
                }
            }

            Instruction::SetRegToDelayTimer(Reg(x)) => {
                machine.registers[x as usize] = machine.delay_timer;
            }

            // Wait for a key press and store it. No key down means PC is
            // rewound past this instruction, so the next cycle fetches it
            // again; the lowest pressed key wins.
            Instruction::SetRegToGetKey(Reg(x)) => {
                match machine.keypad.iter().position(|&pressed| pressed) {
                    Some(key) => machine.registers[x as usize] = key as u8,
                    None => machine.program_counter -= 2,
                }
            }

            Instruction::SetDelayTimerToReg(Reg(x)) => {
                machine.delay_timer = machine.registers[x as usize];
            }

            Instruction::SetSoundTimerToReg(Reg(x)) => {
                machine.sound_timer = machine.registers[x as usize];
            }

            // I += Vx, VF = 1 if I leaves addressable memory
            Instruction::AddRegToI(Reg(x)) => {
                machine.i += machine.registers[x as usize] as u16;
                machine.registers[0xF] = (machine.i > 0xFFF) as u8;
            }

            // Point I at the font glyph for Vx. Each glyph is 5 bytes.
            Instruction::SetIToSpriteAddrVx(Reg(x)) => {
                machine.i = 5 * machine.registers[x as usize] as u16;
            }

            // Store the decimal digits of Vx at I, I+1, I+2
            Instruction::StoreBcdOfReg(Reg(x)) => {
                let i = machine.i as usize;
                if i + 2 >= MEM_SIZE {
                    return Err(Fault::OutOfBounds {
                        addr: (i + 2) as u16,
                    });
                }
                let vx = machine.registers[x as usize];
                machine.memory[i] = vx / 100;
                machine.memory[i + 1] = (vx / 10) % 10;
                machine.memory[i + 2] = vx % 10;
            }

            // Dump register values up to Vx into memory at I; I is unchanged
            Instruction::RegDump(Reg(x)) => {
                let i = machine.i as usize;
                if i + x as usize >= MEM_SIZE {
                    return Err(Fault::OutOfBounds {
                        addr: (i + x as usize) as u16,
                    });
                }
                for reg_no in 0..=x as usize {
                    machine.memory[i + reg_no] = machine.registers[reg_no];
                }
            }

            // Load register values up to Vx from memory at I; I is unchanged
            Instruction::RegLoad(Reg(x)) => {
                let i = machine.i as usize;
                if i + x as usize >= MEM_SIZE {
                    return Err(Fault::OutOfBounds {
                        addr: (i + x as usize) as u16,
                    });
                }
                for reg_no in 0..=x as usize {
                    machine.registers[reg_no] = machine.memory[i + reg_no];
                }
            }
        };
        Ok(())
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use test_case::test_case;

    fn emulator_with_registers(values: &[u8]) -> Emulator {
        let mut machine = Machine::new();
        machine.registers[..values.len()].copy_from_slice(values);
        Emulator::with_machine(machine)
    }

    #[test]
    fn goto_goes_to() {
        let mut emulator = Emulator::new();
        emulator.execute_single(Instruction::Goto(Addr(0x250))).unwrap();
        assert_eq!(emulator.machine.program_counter, 0x250);
    }

    #[test]
    fn return_after_call_is_neutral() {
        let mut emulator = Emulator::new();
        assert_eq!(emulator.machine.program_counter, 0x200);

        // Write program with call and return
        let program = [
            0x22, 0x06, // 0x200, call 0x206
            0x00, 0x00, // 0x202
            0x00, 0x00, // 0x204
            0x00, 0xEE, // 0x206, return
        ];
        emulator.load(&program);

        emulator.step().unwrap(); // Call 0x206
        assert_eq!(emulator.machine.program_counter, 0x206);
        emulator.step().unwrap(); // Return to 0x202
        assert_eq!(emulator.machine.program_counter, 0x202);
    }

    #[test]
    fn return_on_empty_stack_is_a_fault() {
        let mut emulator = Emulator::new();
        assert_eq!(
            Err(Fault::StackUnderflow { pc: 0x200 }),
            emulator.execute_single(Instruction::Return)
        );
    }

    #[test]
    fn undecodable_words_are_skipped() {
        let mut emulator = Emulator::new();
        emulator.load(&[0x00, 0x00]); // No pattern matches 0x0000
        emulator.step().unwrap();
        assert_eq!(emulator.machine.program_counter, 0x202);
    }

    #[test]
    fn fetch_past_end_of_memory_is_a_fault() {
        let mut emulator = Emulator::new();
        emulator.execute_single(Instruction::Goto(Addr(0xFFF))).unwrap();
        assert_eq!(Err(Fault::OutOfBounds { addr: 0xFFF }), emulator.step());
    }

    // Registers in the fixture: V0 = 5, V1 = 5, V2 = 9.
    #[test_case(0x30, 0x05, 4 ; "3xnn skips on equal")]
    #[test_case(0x30, 0x09, 2 ; "3xnn falls through on unequal")]
    #[test_case(0x40, 0x09, 4 ; "4xnn skips on unequal")]
    #[test_case(0x40, 0x05, 2 ; "4xnn falls through on equal")]
    #[test_case(0x50, 0x10, 4 ; "5xy0 skips on equal registers")]
    #[test_case(0x50, 0x20, 2 ; "5xy0 falls through on unequal registers")]
    #[test_case(0x90, 0x20, 4 ; "9xy0 skips on unequal registers")]
    #[test_case(0x90, 0x10, 2 ; "9xy0 falls through on equal registers")]
    fn conditional_skips(left: u8, right: u8, advance: u16) {
        let mut emulator = emulator_with_registers(&[5, 5, 9]);
        emulator.load(&[left, right]);
        emulator.step().unwrap();
        assert_eq!(emulator.machine.program_counter, 0x200 + advance);
    }

    #[test]
    fn shift_right_moves_low_bit_to_vf() {
        let mut emulator = emulator_with_registers(&[0b1011_0011]);
        emulator.execute_single(Instruction::BitshiftRight(Reg(0))).unwrap();
        assert_eq!(emulator.machine.registers[0], 0b0101_1001);
        assert_eq!(emulator.machine.registers[0xF], 1);
    }

    #[test]
    fn shift_left_moves_high_bit_to_vf() {
        let mut emulator = emulator_with_registers(&[0b1100_0000]);
        emulator.execute_single(Instruction::BitshiftLeft(Reg(0))).unwrap();
        assert_eq!(emulator.machine.registers[0], 0b1000_0000);
        assert_eq!(emulator.machine.registers[0xF], 1);
    }

    #[test]
    fn bcd_digits_are_stored_as_integers() {
        let mut emulator = emulator_with_registers(&[234]);
        emulator.execute_single(Instruction::SetI(Addr(0x300))).unwrap();
        emulator.execute_single(Instruction::StoreBcdOfReg(Reg(0))).unwrap();
        assert_eq!(&emulator.machine.memory[0x300..0x303], &[2, 3, 4]);
    }

    #[test]
    fn bcd_near_end_of_memory_is_a_fault() {
        let mut emulator = emulator_with_registers(&[7]);
        emulator.execute_single(Instruction::SetI(Addr(0xFFE))).unwrap();
        assert_eq!(
            Err(Fault::OutOfBounds { addr: 0x1000 }),
            emulator.execute_single(Instruction::StoreBcdOfReg(Reg(0)))
        );
    }

    #[test]
    fn reg_dump_and_load_round_trip() {
        let mut emulator = emulator_with_registers(&[1, 2, 3, 4, 5]);
        emulator.execute_single(Instruction::SetI(Addr(0x300))).unwrap();
        emulator.execute_single(Instruction::RegDump(Reg(4))).unwrap();
        assert_eq!(&emulator.machine.memory[0x300..0x305], &[1, 2, 3, 4, 5]);
        assert_eq!(emulator.machine.i, 0x300);

        for reg_no in 0..5 {
            emulator.machine.registers[reg_no] = 0;
        }
        emulator.execute_single(Instruction::RegLoad(Reg(4))).unwrap();
        assert_eq!(&emulator.machine.registers[..5], &[1, 2, 3, 4, 5]);
        assert_eq!(emulator.machine.i, 0x300);
    }

    #[test]
    fn font_glyph_address_is_five_times_vx() {
        let mut emulator = emulator_with_registers(&[0xA]);
        emulator.execute_single(Instruction::SetIToSpriteAddrVx(Reg(0))).unwrap();
        assert_eq!(emulator.machine.i, 0xA * 5);
    }

    #[test]
    fn add_reg_to_i_flags_address_overflow() {
        let mut emulator = emulator_with_registers(&[0xFF]);
        emulator.execute_single(Instruction::SetI(Addr(0xFFF))).unwrap();
        emulator.execute_single(Instruction::AddRegToI(Reg(0))).unwrap();
        assert_eq!(emulator.machine.i, 0xFFF + 0xFF);
        assert_eq!(emulator.machine.registers[0xF], 1);

        let mut emulator = emulator_with_registers(&[0x10]);
        emulator.execute_single(Instruction::SetI(Addr(0x300))).unwrap();
        emulator.execute_single(Instruction::AddRegToI(Reg(0))).unwrap();
        assert_eq!(emulator.machine.i, 0x310);
        assert_eq!(emulator.machine.registers[0xF], 0);
    }

    #[test]
    fn draw_xor_is_self_cancelling() {
        let mut machine = Machine::new();
        machine.memory[0x300] = 0b1000_0000; // A single set pixel
        machine.registers[0] = 5;
        machine.registers[1] = 6;
        let mut emulator = Emulator::with_machine(machine);
        emulator.execute_single(Instruction::SetI(Addr(0x300))).unwrap();

        emulator.execute_single(Instruction::Draw(Reg(0), Reg(1), Const(1))).unwrap();
        assert!(emulator.framebuffer().get(5, 6));
        assert_eq!(emulator.machine.registers[0xF], 1);

        // The identical draw XORs the pixel away again, and no cell ends
        // up set, so VF drops back to 0
        emulator.execute_single(Instruction::Draw(Reg(0), Reg(1), Const(1))).unwrap();
        assert!(!emulator.framebuffer().get(5, 6));
        assert_eq!(emulator.machine.registers[0xF], 0);
    }

    #[test]
    fn draw_clips_at_the_screen_edge() {
        let mut machine = Machine::new();
        machine.memory[0x300] = 0xFF;
        machine.registers[0] = 62;
        machine.registers[1] = 31;
        let mut emulator = Emulator::with_machine(machine);
        emulator.execute_single(Instruction::SetI(Addr(0x300))).unwrap();
        emulator.execute_single(Instruction::Draw(Reg(0), Reg(1), Const(1))).unwrap();

        assert!(emulator.framebuffer().get(62, 31));
        assert!(emulator.framebuffer().get(63, 31));
        assert_eq!(emulator.machine.registers[0xF], 1);
    }

    #[test]
    fn clear_screen_clears_every_cell() {
        let mut machine = Machine::new();
        machine.memory[0x300] = 0xFF;
        let mut emulator = Emulator::with_machine(machine);
        emulator.execute_many(&[
            Instruction::SetI(Addr(0x300)),
            Instruction::Draw(Reg(0), Reg(1), Const(1)),
            Instruction::ClearScreen,
        ]).unwrap();

        for x in 0..SCREEN_WIDTH {
            for y in 0..SCREEN_HEIGHT {
                assert!(!emulator.framebuffer().get(x, y));
            }
        }
    }

    #[test]
    fn get_key_busy_waits_until_a_key_is_down() {
        let mut emulator = Emulator::new();
        emulator.load(&[0xF5, 0x0A]); // V5 = get_key()

        // No key down: the same instruction is refetched every cycle
        emulator.step().unwrap();
        emulator.step().unwrap();
        assert_eq!(emulator.machine.program_counter, 0x200);

        // Two keys down: the lowest index wins
        emulator.set_key(0x7, true);
        emulator.set_key(0x3, true);
        emulator.step().unwrap();
        assert_eq!(emulator.machine.registers[5], 0x3);
        assert_eq!(emulator.machine.program_counter, 0x202);
    }

    #[test]
    fn key_skips_follow_keypad_state() {
        let mut emulator = emulator_with_registers(&[0x4]);
        emulator.set_key(0x4, true);
        emulator.load(&[
            0xE0, 0x9E, // 0x200, skip if key V0 pressed (taken)
            0x00, 0x00, // 0x202, skipped
            0xE0, 0xA1, // 0x204, skip if key V0 not pressed (not taken)
        ]);
        emulator.step().unwrap();
        assert_eq!(emulator.machine.program_counter, 0x204);
        emulator.step().unwrap();
        assert_eq!(emulator.machine.program_counter, 0x206);
    }

    #[test]
    fn timers_count_down_once_per_cycle() {
        let mut emulator = emulator_with_registers(&[3]);
        emulator.load(&[
            0xF0, 0x15, // 0x200, delay = V0
            0xF0, 0x18, // 0x202, sound = V0
            0xF1, 0x07, // 0x204, V1 = delay
        ]);

        // The decrement happens after the instruction, so setting a timer
        // to 3 leaves 2 at the end of the same cycle
        emulator.step().unwrap();
        assert_eq!(emulator.machine.delay_timer, 2);
        emulator.step().unwrap();
        assert_eq!(emulator.machine.delay_timer, 1);
        assert_eq!(emulator.machine.sound_timer, 2);
        emulator.step().unwrap();
        assert_eq!(emulator.machine.registers[1], 1);
        assert_eq!(emulator.machine.delay_timer, 0);

        // Both timers saturate at zero
        emulator.execute_single(Instruction::Goto(Addr(0x200))).unwrap();
        emulator.step().unwrap();
        assert_eq!(emulator.machine.sound_timer, 0);
    }

    #[test]
    fn jump_with_offset_adds_v0() {
        let mut emulator = emulator_with_registers(&[0x05]);
        emulator.execute_single(Instruction::SetPcToV0PlusAddr(Addr(0x300))).unwrap();
        assert_eq!(emulator.machine.program_counter, 0x305);
    }

    #[test]
    fn call_then_add_yields_eight() {
        // 0x200: call 0x204; 0x204: V0 = 5; 0x206: V0 += 3; 0x208: return
        let mut emulator = Emulator::new();
        emulator.load(&[
            0x22, 0x04, //
            0x00, 0x00, //
            0x60, 0x05, //
            0x70, 0x03, //
            0x00, 0xEE, //
        ]);
        emulator.step().unwrap(); // Call
        emulator.step().unwrap(); // V0 = 5
        emulator.step().unwrap(); // V0 += 3
        assert_eq!(emulator.machine.registers[0], 8);
        emulator.step().unwrap(); // Return
        assert_eq!(emulator.machine.program_counter, 0x202);
    }

    proptest! {
        #[test]
        fn add_with_carry_holds_for_all_pairs(a: u8, b: u8) {
            let mut emulator = emulator_with_registers(&[a, b]);
            emulator.execute_single(Instruction::IncRegByReg(Reg(0), Reg(1))).unwrap();
            prop_assert_eq!(emulator.machine.registers[0], a.wrapping_add(b));
            prop_assert_eq!(emulator.machine.registers[0xF], (a as u16 + b as u16 > 0xFF) as u8);
        }

        #[test]
        fn sub_with_borrow_holds_for_all_pairs(a: u8, b: u8) {
            let mut emulator = emulator_with_registers(&[a, b]);
            emulator.execute_single(Instruction::DecRegByReg(Reg(0), Reg(1))).unwrap();
            prop_assert_eq!(emulator.machine.registers[0], a.wrapping_sub(b));
            prop_assert_eq!(emulator.machine.registers[0xF], (a >= b) as u8);
        }

        #[test]
        fn reverse_sub_mirrors_sub(a: u8, b: u8) {
            let mut emulator = emulator_with_registers(&[a, b]);
            emulator.execute_single(Instruction::SetVxVyMinusVx(Reg(0), Reg(1))).unwrap();
            prop_assert_eq!(emulator.machine.registers[0], b.wrapping_sub(a));
            prop_assert_eq!(emulator.machine.registers[0xF], (b >= a) as u8);
        }

        #[test]
        fn random_byte_is_masked(mask: u8) {
            let mut emulator = Emulator::new();
            emulator.execute_single(Instruction::SetVxRand(Reg(0), Const(mask))).unwrap();
            prop_assert_eq!(emulator.machine.registers[0] & !mask, 0);
        }
    }
}
