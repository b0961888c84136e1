use crate::error::{DemuxError, Result};

/// A bit-level reader for parsing binary data streams.
///
/// Used for the bit-packed header fields of PSI sections, where field
/// widths do not fall on byte boundaries (12-bit section lengths, 5-bit
/// version numbers, single-bit indicators).
///
/// Example:
/// ```
/// use tsdemux::utils::BitReader;
///
/// let data = [0b1011_0011];
/// let mut reader = BitReader::new(&data);
///
/// assert!(reader.read_bit().unwrap());
/// assert_eq!(reader.read_bits(3).unwrap(), 0b011);
/// ```
pub struct BitReader<'a> {
    data: &'a [u8],
    byte_offset: usize,
    bit_offset: u8,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader from a byte slice
    pub fn new(data: &'a [u8]) -> Self {
        BitReader {
            data,
            byte_offset: 0,
            bit_offset: 0,
        }
    }

    /// Reads n bits and returns them as a number.
    /// The bits are interpreted as big-endian.
    ///
    /// Returns error if n > 32 or end of data is reached.
    pub fn read_bits(&mut self, n: u32) -> Result<u32> {
        if n > 32 {
            return Err(DemuxError::Parser("too many bits requested".into()));
        }

        let mut value = 0u32;
        let mut remaining = n;
        while remaining > 0 {
            let byte = *self
                .data
                .get(self.byte_offset)
                .ok_or_else(|| DemuxError::Parser("reached end of data".into()))?;

            // Consume as much of the current byte as the request still needs.
            let available = 8 - u32::from(self.bit_offset);
            let take = remaining.min(available);
            let aligned = byte >> (available - take);
            let mask = ((1u16 << take) - 1) as u8;
            value = (value << take) | u32::from(aligned & mask);

            self.bit_offset += take as u8;
            if self.bit_offset == 8 {
                self.bit_offset = 0;
                self.byte_offset += 1;
            }
            remaining -= take;
        }

        Ok(value)
    }

    /// Reads a single bit from the stream.
    /// Returns true for 1, false for 0.
    ///
    /// Returns error if end of data is reached.
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? == 1)
    }

    /// Skips n bits (reserved fields and markers).
    pub fn skip_bits(&mut self, n: u32) -> Result<()> {
        self.read_bits(n).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bits() {
        let data = &[0b1011_0011, 0b0101_1010];
        let mut reader = BitReader::new(data);

        assert_eq!(reader.read_bits(3).unwrap(), 0b101);
        assert_eq!(reader.read_bits(5).unwrap(), 0b10011);
        assert_eq!(reader.read_bits(4).unwrap(), 0b0101);
    }

    #[test]
    fn test_section_length_field() {
        // 12-bit value spanning a byte boundary, as in PSI section headers
        let data = &[0xB0, 0x0D];
        let mut reader = BitReader::new(data);
        reader.skip_bits(4).unwrap();
        assert_eq!(reader.read_bits(12).unwrap(), 0x0D);
    }

    #[test]
    fn test_read_past_end() {
        let data = [0xFF];
        let mut reader = BitReader::new(&data);
        reader.read_bits(8).unwrap();
        assert!(reader.read_bit().is_err());
    }
}
