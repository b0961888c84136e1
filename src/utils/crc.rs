/// CRC32 for MPEG-2 TS PSI tables (ITU-T H.222.0 / ISO/IEC 13818-1).
/// Polynomial 0x04C11DB7, initial value 0xFFFFFFFF, no reflection.
const CRC32_MPEG2: u32 = 0x04C1_1DB7;

/// MPEG-2 CRC32 calculator used for Transport Stream PSI table validation
pub struct Crc32Mpeg2 {
    table: [u32; 256],
}

impl Crc32Mpeg2 {
    /// Creates a new CRC32 calculator with pre-computed lookup table
    pub fn new() -> Self {
        let mut table = [0u32; 256];
        for (byte, slot) in table.iter_mut().enumerate() {
            // Eight shift-and-conditionally-xor rounds per table entry.
            *slot = (0..8).fold((byte as u32) << 24, |crc, _| {
                let shifted = crc << 1;
                if crc & 0x8000_0000 != 0 {
                    shifted ^ CRC32_MPEG2
                } else {
                    shifted
                }
            });
        }
        Self { table }
    }

    /// Calculates the CRC32 checksum for the given data using the MPEG-2 algorithm
    pub fn calculate(&self, data: &[u8]) -> u32 {
        data.iter().fold(0xFFFF_FFFF, |crc, &byte| {
            let index = usize::from((crc >> 24) as u8 ^ byte);
            (crc << 8) ^ self.table[index]
        })
    }

    /// Checks the trailing CRC_32 field of a complete PSI section.
    ///
    /// `section` must span from table_id through the four CRC bytes.
    pub fn section_crc_ok(&self, section: &[u8]) -> bool {
        if section.len() < 4 {
            return false;
        }
        let body = &section[..section.len() - 4];
        let stored = u32::from_be_bytes([
            section[section.len() - 4],
            section[section.len() - 3],
            section[section.len() - 2],
            section[section.len() - 1],
        ]);
        self.calculate(body) == stored
    }
}

impl Default for Crc32Mpeg2 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc32_mpeg2_vector() {
        // Test vector from STMicroelectronics community forum post
        let crc = Crc32Mpeg2::new();
        assert_eq!(crc.calculate(&[0x01, 0x01]), 0xD66F_B816);
    }

    #[test]
    fn test_section_crc_roundtrip() {
        let crc = Crc32Mpeg2::new();
        let mut section = vec![
            0x00, 0xB0, 0x0D, // table_id + section_length
            0x00, 0x01, // transport_stream_id
            0xC1, // version 0, current_next 1
            0x00, 0x00, // section / last_section
            0x00, 0x01, // program_number
            0xE1, 0x00, // PMT PID
        ];
        let checksum = crc.calculate(&section);
        section.extend_from_slice(&checksum.to_be_bytes());
        assert!(crc.section_crc_ok(&section));

        section[3] ^= 0xFF;
        assert!(!crc.section_crc_ok(&section));
    }
}
