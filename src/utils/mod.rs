//! # Utility Functions and Types
//!
//! Common utilities used throughout the tsdemux library:
//!
//! - Bit-level reading for the packed header fields of PSI sections
//! - MPEG-2 CRC32 calculation for PSI table validation
//!
//! ## Bit Operations
//!
//! ```rust
//! use tsdemux::utils::BitReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = vec![0b1011_0011u8];
//! let mut reader = BitReader::new(&data);
//! assert_eq!(reader.read_bits(3)?, 0b101);
//! # Ok(())
//! # }
//! ```
//!
//! ## CRC Calculation
//!
//! ```rust
//! use tsdemux::utils::Crc32Mpeg2;
//!
//! let crc = Crc32Mpeg2::new();
//! let checksum = crc.calculate(b"section body");
//! assert_ne!(checksum, 0);
//! ```

/// Bit manipulation and bitstream reading utilities
pub mod bits;

/// CRC calculation implementations
pub mod crc;

// Re-export commonly used types
pub use bits::BitReader;
pub use crc::Crc32Mpeg2;
