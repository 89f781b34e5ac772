/// A structure for splitting an instruction word
/// into the formats the decoder cares about:
/// the four hex nibbles, and the low 8 or 12 bits.
pub struct Nibbles(u8, u8);

impl Nibbles {
    pub fn from_u16(value: u16) -> Nibbles {
        Nibbles((value >> 8) as u8, (value & 0x00FF) as u8)
    }

    pub fn new(left: u8, right: u8) -> Nibbles {
        Nibbles(left, right)
    }

    /// Left-shift the first u8-component 8 bits,
    /// then take bitwise or with the second component
    /// in order to store the components in a u16.
    pub fn as_u16(&self) -> u16 {
        ((self.0 as u16) << 8) | self.1 as u16
    }

    /// The four hex digits of the word, most significant first.
    pub fn as_four_u8(&self) -> (u8, u8, u8, u8) {
        let low_nibble_mask = 0x0F;
        (
            (self.0 >> 4) & low_nibble_mask,
            self.0 & low_nibble_mask,
            (self.1 >> 4) & low_nibble_mask,
            self.1 & low_nibble_mask,
        )
    }

    pub fn last_8_bits(&self) -> u8 {
        self.1
    }

    pub fn last_12_bits(&self) -> u16 {
        self.as_u16() & 0x0FFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_u8_are_the_hex_digits() {
        assert_eq!((0xA, 0xB, 0xC, 0xD), Nibbles::from_u16(0xABCD).as_four_u8());
        assert_eq!((0x0, 0x0, 0x0, 0x0), Nibbles::from_u16(0x0000).as_four_u8());
        assert_eq!((0xF, 0xF, 0xF, 0xF), Nibbles::from_u16(0xFFFF).as_four_u8());
    }

    #[test]
    fn as_u16_round_trips() {
        assert_eq!(0x1234, Nibbles::from_u16(0x1234).as_u16());
        assert_eq!(0x1234, Nibbles::new(0x12, 0x34).as_u16());
    }

    #[test]
    fn trailing_bit_groups() {
        assert_eq!(0xCD, Nibbles::from_u16(0xABCD).last_8_bits());
        assert_eq!(0xBCD, Nibbles::from_u16(0xABCD).last_12_bits());
    }
}
