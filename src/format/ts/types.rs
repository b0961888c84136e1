use std::collections::{HashMap, HashSet};
use std::time::Duration;

// Constants
/// Size of a canonical Transport Stream packet in bytes
pub const TS_PACKET_SIZE: usize = 188;
/// Size of a BDAV/M2TS framed packet: 4-byte TP_extra_header + 188-byte body
pub const M2TS_PACKET_SIZE: usize = 192;
/// Size of a Transport Stream header in bytes
pub const TS_HEADER_SIZE: usize = 4;
/// Sync byte opening every TS packet
pub const TS_SYNC_BYTE: u8 = 0x47;
/// PID for the Program Association Table (PAT)
pub const PID_PAT: u16 = 0x0000;
/// PID reserved for null (stuffing) packets
pub const PID_NULL: u16 = 0x1FFF;

// Table IDs
/// Table ID for Program Association Table (PAT)
pub const TABLE_ID_PAT: u8 = 0x00;
/// Table ID for Program Map Table (PMT)
pub const TABLE_ID_PMT: u8 = 0x02;

/// Clock frequency for Presentation Time Stamps (PTS) in Hz
pub const PTS_HZ: u64 = 90_000;

/// Elementary stream type, the 8-bit code a PMT assigns to each PID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamType {
    /// MPEG-1 audio (ISO/IEC 11172-3)
    Mpeg1Audio,
    /// MPEG-2 audio (ISO/IEC 13818-3)
    Mpeg2Audio,
    /// PES packets containing private data
    PesPrivateData,
    /// AAC audio with ADTS framing
    AdtsAac,
    /// Timed ID3 metadata carried in PES
    TimedId3,
    /// H.264 / AVC video
    H264,
    /// H.265 / HEVC video
    H265,
    /// SCTE-35 splice information sections
    Scte35,
    /// Any stream type this demuxer does not single out
    Other(u8),
}

impl StreamType {
    /// Maps the raw PMT stream_type byte to its classification.
    pub fn from_u8(value: u8) -> Self {
        match value {
            0x03 => StreamType::Mpeg1Audio,
            0x04 => StreamType::Mpeg2Audio,
            0x06 => StreamType::PesPrivateData,
            0x0F => StreamType::AdtsAac,
            0x15 => StreamType::TimedId3,
            0x1B => StreamType::H264,
            0x24 => StreamType::H265,
            0x86 => StreamType::Scte35,
            other => StreamType::Other(other),
        }
    }

    /// The raw 8-bit code as carried in the PMT.
    pub fn as_u8(self) -> u8 {
        match self {
            StreamType::Mpeg1Audio => 0x03,
            StreamType::Mpeg2Audio => 0x04,
            StreamType::PesPrivateData => 0x06,
            StreamType::AdtsAac => 0x0F,
            StreamType::TimedId3 => 0x15,
            StreamType::H264 => 0x1B,
            StreamType::H265 => 0x24,
            StreamType::Scte35 => 0x86,
            StreamType::Other(other) => other,
        }
    }
}

/// Result of a successful MPEG-TS probe.
///
/// `sync_offset` is where the first sync byte sits in the probed buffer;
/// `consumed` is always 0; probing never eats input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    /// Detected framing: 188 or 192 bytes per packet
    pub packet_size: usize,
    /// Offset of the first sync byte in the probed buffer
    pub sync_offset: usize,
    /// Bytes consumed by the probe, always 0
    pub consumed: usize,
}

/// Program Association Table: the program_number → PMT-PID directory
/// broadcast on PID 0x0000.
#[derive(Debug, Clone, Default)]
pub struct PAT {
    /// 5-bit table version; a new current/section-0 PAT replaces the old one
    pub version_number: u8,
    /// PID of the Network Information Table, from the program_number=0 entry
    pub network_pid: Option<u16>,
    /// program_number → PMT PID for every non-zero program
    pub program_pmt_pid: HashMap<u16, u16>,
}

/// The distinguished elementary PIDs of the active program.
///
/// The first H.264 and first ADTS-AAC stream encountered in the PMT
/// become the program's selected video and audio streams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommonPids {
    /// Selected H.264 video PID
    pub h264: Option<u16>,
    /// Selected ADTS-AAC audio PID
    pub adts_aac: Option<u16>,
}

/// Program Map Table for one program: elementary PIDs and their types.
#[derive(Debug, Clone, Default)]
pub struct PMT {
    /// Program this table describes
    pub program_number: u16,
    /// 5-bit table version
    pub version_number: u8,
    /// Every listed elementary PID and its stream type
    pub pid_stream_type: HashMap<u16, StreamType>,
    /// Selected video/audio PIDs
    pub common_pids: CommonPids,
    /// PIDs carrying PES private data (stream_type 0x06)
    pub pes_private_data_pids: HashSet<u16>,
    /// PIDs carrying timed ID3 metadata (stream_type 0x15)
    pub timed_id3_pids: HashSet<u16>,
    /// PIDs carrying SCTE-35 splice sections (stream_type 0x86)
    pub scte_35_pids: HashSet<u16>,
}

/// A descriptor attached to an elementary stream in the PMT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// Tag identifying the descriptor type
    pub tag: u8,
    /// Raw descriptor payload bytes
    pub data: Vec<u8>,
}

/// Decoded 4-byte Transport Stream packet header.
#[derive(Debug, Clone, Copy)]
pub struct TSHeader {
    /// Set when the packet is known to carry uncorrectable errors
    pub transport_error: bool,
    /// Set on the first packet of a PES packet or PSI section
    pub payload_unit_start: bool,
    /// Priority hint; decoded but otherwise unused
    pub transport_priority: bool,
    /// 13-bit Packet Identifier
    pub pid: u16,
    /// 2-bit scrambling mode
    pub scrambling_control: u8,
    /// 2-bit adaptation_field_control: 01 payload, 10 adaptation,
    /// 11 both, 00 reserved
    pub adaptation_field_control: u8,
    /// 4-bit per-PID continuity counter
    pub continuity_counter: u8,
}

/// Converts a 90 kHz PTS/DTS tick count to a Duration.
pub fn pts_to_time(pts: u64) -> Duration {
    Duration::from_nanos((pts * 1_000_000_000) / PTS_HZ)
}
