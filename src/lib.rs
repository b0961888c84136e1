//! # tsdemux - Streaming MPEG-TS Demultiplexer
//!
//! `tsdemux` recovers elementary streams from MPEG-2 Transport Streams
//! (ISO/IEC 13818-1). It is a push parser: the host feeds byte chunks in
//! stream order and receives synchronous callbacks: reassembled PES
//! payloads tagged with PTS/DTS for the video/audio parsers downstream,
//! plus table, metadata and error events.
//!
//! ## Features
//!
//! - Sync probing over canonical 188-byte and BDAV/M2TS 192-byte framing
//! - PAT/PMT decoding with program selection and version tracking
//! - Per-PID PES reassembly that survives arbitrary chunk boundaries
//! - 33-bit PTS/DTS extraction at 90 kHz
//! - Timed ID3, SCTE-35 and PES-private-data routing for metadata streams
//!
//! ## Quick Start
//!
//! ```rust
//! use tsdemux::config::DemuxerConfig;
//! use tsdemux::format::ts::{TSDemuxer, TS_PACKET_SIZE, TS_SYNC_BYTE};
//!
//! // Probe a buffer, then build a demuxer for the detected framing.
//! let mut data = vec![0u8; 4 * TS_PACKET_SIZE];
//! for offset in [0, 188, 376, 564] {
//!     data[offset] = TS_SYNC_BYTE;
//! }
//! let probe = TSDemuxer::probe(&data).expect("MPEG-TS");
//!
//! let mut demuxer = TSDemuxer::new(probe, DemuxerConfig::default());
//! let callbacks = demuxer.callbacks_mut();
//! callbacks.on_error = Some(Box::new(|kind, detail| {
//!     eprintln!("demux error {kind}: {detail}");
//! }));
//! callbacks.on_media_info = Some(Box::new(|info| {
//!     println!("media info: {:?}", info.mime_type);
//! }));
//! callbacks.on_track_metadata = Some(Box::new(|_, _| {}));
//! callbacks.on_data_available = Some(Box::new(|_, _| {}));
//!
//! let consumed = demuxer.parse_chunk(&data, 0).unwrap();
//! assert_eq!(consumed, data.len());
//! ```
//!
//! ## Module Overview
//!
//! - `format::ts`: the transport-stream demuxer itself
//! - `av`: host-facing media types (media info, tracks, samples)
//! - `config`: construction-time options forwarded to collaborators
//! - `error`: error types and the crate `Result` alias
//! - `utils`: bit reading and MPEG-2 CRC32

/// Audio/Video base types shared with elementary-stream collaborators
pub mod av;

/// Configuration module
pub mod config;

/// Error types and utilities
pub mod error;

/// Media format implementations (MPEG-TS)
pub mod format;

/// Common utilities and helper functions
pub mod utils;

pub use error::{DemuxError, DemuxErrorKind, Result};
pub use format::ts::TSDemuxer;
