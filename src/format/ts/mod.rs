//! # MPEG Transport Stream (TS) Demultiplexing
//!
//! This module implements the transport layer of MPEG-TS (ISO/IEC 13818-1):
//!
//! - Probabilistic sync detection over 188- and 192-byte framing
//! - TS packet iteration with adaptation-field handling
//! - PAT/PMT section decoding and program selection
//! - Per-PID PES reassembly with 33-bit PTS/DTS extraction
//!
//! ## Core Features
//!
//! - **Probing**: Decide whether a byte buffer is MPEG-TS and where sync begins
//! - **Demuxing**: Recover elementary-stream payloads with their timestamps
//! - **Tables**: Track the PAT → PMT hierarchy across version changes
//! - **Resilience**: Skip damaged sections and PES packets without losing
//!   the stream
//!
//! ## Example Usage
//!
//! ```rust
//! use tsdemux::format::ts::{TSDemuxer, TS_PACKET_SIZE, TS_SYNC_BYTE};
//!
//! // Four empty packets' worth of sync bytes is enough to probe.
//! let mut data = vec![0u8; 4 * TS_PACKET_SIZE];
//! for offset in [0, 188, 376, 564] {
//!     data[offset] = TS_SYNC_BYTE;
//! }
//!
//! let probe = TSDemuxer::probe(&data).expect("looks like MPEG-TS");
//! assert_eq!(probe.packet_size, TS_PACKET_SIZE);
//! assert_eq!(probe.sync_offset, 0);
//! ```

/// TS demuxer facade: probe, parse_chunk, callbacks
pub mod demuxer;

/// Low-level TS packet and PSI section parsing
pub mod parser;

/// PES header parsing and slice reassembly
pub mod pes;

/// Core TS types and constants
pub mod types;

// Re-export commonly used types and constants
pub use demuxer::{DemuxerCallbacks, ElementaryStreamSink, TSDemuxer};
pub use parser::PacketIter;
pub use pes::{PESHeader, PESPacket};
pub use types::{
    CommonPids, Descriptor, ProbeResult, StreamType, TSHeader, M2TS_PACKET_SIZE, PAT,
    PID_PAT, PMT, TS_PACKET_SIZE, TS_SYNC_BYTE,
};
