//! Bit-packed synonym flags.
//!
//! Five sub-fields share one 16-bit word:
//!
//! ```text
//! bit    0      : has_ambiguity
//! bit    1      : is_noun
//! bits   2..4   : form_type      (0..4)
//! bits   5..6   : acronym_type   (0..2)
//! bits   7..8   : variant_type   (0..3)
//! bits   9..15  : unused, zero on write, ignored on read
//! ```

use crate::error::Error;

const FORM_TYPE_BITS: u16 = 0b111; // 3 bits, values 0..4
const ACRONYM_TYPE_BITS: u16 = 0b11; // 2 bits, values 0..2
const VARIANT_TYPE_BITS: u16 = 0b11; // 2 bits, values 0..3

/// The five flag sub-fields, unpacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    pub has_ambiguity: bool,
    pub is_noun: bool,
    pub form_type: u8,
    pub acronym_type: u8,
    pub variant_type: u8,
}

impl Flags {
    /// Pack into the on-disk 16-bit word. Fails if a sub-field exceeds its
    /// bit width.
    pub fn encode(self) -> Result<u16, Error> {
        if self.form_type as u16 > FORM_TYPE_BITS {
            return Err(Error::BadFlags {
                field: "form_type",
                value: self.form_type as u16,
            });
        }
        if self.acronym_type as u16 > ACRONYM_TYPE_BITS {
            return Err(Error::BadFlags {
                field: "acronym_type",
                value: self.acronym_type as u16,
            });
        }
        if self.variant_type as u16 > VARIANT_TYPE_BITS {
            return Err(Error::BadFlags {
                field: "variant_type",
                value: self.variant_type as u16,
            });
        }

        let mut word = 0u16;
        if self.has_ambiguity {
            word |= 1 << 0;
        }
        if self.is_noun {
            word |= 1 << 1;
        }
        word |= (self.form_type as u16 & FORM_TYPE_BITS) << 2;
        word |= (self.acronym_type as u16 & ACRONYM_TYPE_BITS) << 5;
        word |= (self.variant_type as u16 & VARIANT_TYPE_BITS) << 7;
        Ok(word)
    }

    /// Unpack from the on-disk word. High bits (9..15) are ignored.
    pub fn decode(word: u16) -> Flags {
        Flags {
            has_ambiguity: word & 1 != 0,
            is_noun: (word >> 1) & 1 != 0,
            form_type: ((word >> 2) & FORM_TYPE_BITS) as u8,
            acronym_type: ((word >> 5) & ACRONYM_TYPE_BITS) as u8,
            variant_type: ((word >> 7) & VARIANT_TYPE_BITS) as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encode_rejects_oversized_subfields() {
        let f = Flags {
            form_type: 5,
            ..Default::default()
        };
        assert!(matches!(f.encode(), Err(Error::BadFlags { field: "form_type", .. })));
    }

    #[test]
    fn known_bit_layout() {
        let f = Flags {
            has_ambiguity: true,
            is_noun: false,
            form_type: 3,
            acronym_type: 2,
            variant_type: 1,
        };
        // bit0=1, bit1=0, bits2-4=011, bits5-6=10, bits7-8=01
        let expected = 0b1_10_011_0_1u16;
        assert_eq!(f.encode().unwrap(), expected);
    }

    proptest! {
        #[test]
        fn round_trip(
            has_ambiguity in any::<bool>(),
            is_noun in any::<bool>(),
            form_type in 0u8..5,
            acronym_type in 0u8..3,
            variant_type in 0u8..4,
        ) {
            let f = Flags { has_ambiguity, is_noun, form_type, acronym_type, variant_type };
            let word = f.encode().unwrap();
            prop_assert_eq!(Flags::decode(word), f);
        }
    }
}
