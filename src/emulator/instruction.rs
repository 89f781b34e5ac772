//! The opcode table: every legal instruction as an enum variant, and the
//! decoder that maps a 16-bit word to the unique variant matching it.

use crate::emulator::error::DecodeError;
use crate::util::nibbles::Nibbles;

/// A wrapper for addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Addr(pub u16);

/// A wrapper for registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reg(pub u8);

/// A wrapper for constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Const(pub u8);

/// A single instruction from the CHIP-8 instruction set.
/// Two bytes written in hexadecimal, with the following special characters:
/// - NNN: address
/// - NN: 8-bit constant
/// - N: 4-bit constant
/// - X and Y: 4-bit register identifier
/// - PC: Program counter
/// - I: 16 bit register for memory address
/// - VN: One of the 16 available variables (register identifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    ClearScreen,                    // 00E0
    Return,                         // 00EE
    Goto(Addr),                     // 1NNN
    Call(Addr),                     // 2NNN
    IfRegEqConst(Reg, Const),       // 3XNN
    IfRegNeqConst(Reg, Const),      // 4XNN
    IfRegEqReg(Reg, Reg),           // 5XY0
    SetRegToConst(Reg, Const),      // 6XNN
    IncRegByConst(Reg, Const),      // 7XNN
    SetRegToReg(Reg, Reg),          // 8XY0
    BitwiseOr(Reg, Reg),            // 8XY1
    BitwiseAnd(Reg, Reg),           // 8XY2
    BitwiseXor(Reg, Reg),           // 8XY3
    IncRegByReg(Reg, Reg),          // 8XY4
    DecRegByReg(Reg, Reg),          // 8XY5
    BitshiftRight(Reg),             // 8XY6
    SetVxVyMinusVx(Reg, Reg),       // 8XY7
    BitshiftLeft(Reg),              // 8XYE
    IfRegNeqReg(Reg, Reg),          // 9XY0
    SetI(Addr),                     // ANNN
    SetPcToV0PlusAddr(Addr),        // BNNN
    SetVxRand(Reg, Const),          // CXNN
    Draw(Reg, Reg, Const),          // DXYN
    IfKeyEqVx(Reg),                 // EX9E
    IfKeyNeqVx(Reg),                // EXA1
    SetRegToDelayTimer(Reg),        // FX07
    SetRegToGetKey(Reg),            // FX0A
    SetDelayTimerToReg(Reg),        // FX15
    SetSoundTimerToReg(Reg),        // FX18
    AddRegToI(Reg),                 // FX1E
    SetIToSpriteAddrVx(Reg),        // FX29
    StoreBcdOfReg(Reg),             // FX33
    RegDump(Reg),                   // FX55
    RegLoad(Reg),                   // FX65
}

impl Instruction {
    /// Decode a big-endian instruction word.
    ///
    /// The match on the four nibbles is the opcode table: literal nibbles
    /// select the opcode family (and, within the 8/E/F families, the exact
    /// member), wildcard positions become operands. At most one arm can
    /// match any word, and words no arm matches are a `DecodeError`.
    pub fn try_from_u16(value: u16) -> Result<Instruction, DecodeError> {
        let word = Nibbles::from_u16(value);
        let instruction = match word.as_four_u8() {
            (0, 0, 0xE, 0) => Instruction::ClearScreen,
            (0, 0, 0xE, 0xE) => Instruction::Return,
            (1, _, _, _) => Instruction::Goto(Addr(word.last_12_bits())),
            (2, _, _, _) => Instruction::Call(Addr(word.last_12_bits())),
            (3, x, _, _) => Instruction::IfRegEqConst(Reg(x), Const(word.last_8_bits())),
            (4, x, _, _) => Instruction::IfRegNeqConst(Reg(x), Const(word.last_8_bits())),
            (5, x, y, 0) => Instruction::IfRegEqReg(Reg(x), Reg(y)),
            (6, x, _, _) => Instruction::SetRegToConst(Reg(x), Const(word.last_8_bits())),
            (7, x, _, _) => Instruction::IncRegByConst(Reg(x), Const(word.last_8_bits())),
            (8, x, y, 0) => Instruction::SetRegToReg(Reg(x), Reg(y)),
            (8, x, y, 1) => Instruction::BitwiseOr(Reg(x), Reg(y)),
            (8, x, y, 2) => Instruction::BitwiseAnd(Reg(x), Reg(y)),
            (8, x, y, 3) => Instruction::BitwiseXor(Reg(x), Reg(y)),
            (8, x, y, 4) => Instruction::IncRegByReg(Reg(x), Reg(y)),
            (8, x, y, 5) => Instruction::DecRegByReg(Reg(x), Reg(y)),
            (8, x, _, 6) => Instruction::BitshiftRight(Reg(x)),
            (8, x, y, 7) => Instruction::SetVxVyMinusVx(Reg(x), Reg(y)),
            (8, x, _, 0xE) => Instruction::BitshiftLeft(Reg(x)),
            (9, x, y, 0) => Instruction::IfRegNeqReg(Reg(x), Reg(y)),
            (0xA, _, _, _) => Instruction::SetI(Addr(word.last_12_bits())),
            (0xB, _, _, _) => Instruction::SetPcToV0PlusAddr(Addr(word.last_12_bits())),
            (0xC, x, _, _) => Instruction::SetVxRand(Reg(x), Const(word.last_8_bits())),
            (0xD, x, y, n) => Instruction::Draw(Reg(x), Reg(y), Const(n)),
            (0xE, x, 9, 0xE) => Instruction::IfKeyEqVx(Reg(x)),
            (0xE, x, 0xA, 1) => Instruction::IfKeyNeqVx(Reg(x)),
            (0xF, x, 0, 7) => Instruction::SetRegToDelayTimer(Reg(x)),
            (0xF, x, 0, 0xA) => Instruction::SetRegToGetKey(Reg(x)),
            (0xF, x, 1, 5) => Instruction::SetDelayTimerToReg(Reg(x)),
            (0xF, x, 1, 8) => Instruction::SetSoundTimerToReg(Reg(x)),
            (0xF, x, 1, 0xE) => Instruction::AddRegToI(Reg(x)),
            (0xF, x, 2, 9) => Instruction::SetIToSpriteAddrVx(Reg(x)),
            (0xF, x, 3, 3) => Instruction::StoreBcdOfReg(Reg(x)),
            (0xF, x, 5, 5) => Instruction::RegDump(Reg(x)),
            (0xF, x, 6, 5) => Instruction::RegLoad(Reg(x)),
            _ => return Err(DecodeError(value)),
        };
        Ok(instruction)
    }

    /// Decode from the two memory bytes of the instruction, high byte first.
    pub fn try_from_two_u8(left: u8, right: u8) -> Result<Instruction, DecodeError> {
        Instruction::try_from_u16(Nibbles::new(left, right).as_u16())
    }
}
