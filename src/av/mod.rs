use serde::Serialize;
use std::fmt;

/// Codec identifiers for the elementary streams a transport stream can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CodecType {
    /// H.264 / AVC video
    H264,
    /// H.265 / HEVC video
    H265,
    /// AAC audio (ADTS framing in TS)
    AAC,
}

/// Track classification used by the host-facing callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    /// Video elementary stream
    Video,
    /// Audio elementary stream
    Audio,
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackType::Video => f.write_str("video"),
            TrackType::Audio => f.write_str("audio"),
        }
    }
}

/// One elementary stream as listed in the active program's PMT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamSummary {
    /// Packet identifier carrying the stream
    pub pid: u16,
    /// Raw 8-bit stream_type from the PMT
    pub stream_type: u8,
}

/// Container-level description of the demultiplexed stream.
///
/// Assembled by the demuxer whenever the active PMT changes and delivered
/// through `on_media_info`. Codec-level detail (resolution, sample rate)
/// is filled in downstream by the elementary-stream parsers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaInfo {
    /// Container MIME type, always `video/mp2t` for this demuxer
    pub mime_type: String,
    /// Whether the active program carries an H.264 video stream
    pub has_video: bool,
    /// Whether the active program carries an ADTS-AAC audio stream
    pub has_audio: bool,
    /// PID of the selected video stream, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_pid: Option<u16>,
    /// PID of the selected audio stream, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_pid: Option<u16>,
    /// Every elementary stream the active PMT lists, in PID order
    pub streams: Vec<StreamSummary>,
}

/// Per-track codec metadata reported through `on_track_metadata`.
///
/// The demuxer fills in the codec identity from the PMT; dimensions and
/// initialization data belong to the elementary-stream parsers that
/// inspect the payloads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrackMetadata {
    /// Detected codec, once known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<CodecType>,
    /// Visual width in pixels (video tracks)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Visual height in pixels (video tracks)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Codec-specific initialization data (SPS/PPS, AudioSpecificConfig)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<Vec<u8>>,
}

/// An ordered batch of samples for one track, the payload of
/// `on_data_available`.
#[derive(Debug, Clone)]
pub struct MediaTrack {
    /// Track classification
    pub kind: TrackType,
    /// Stable track identifier
    pub id: u32,
    /// Monotonic batch counter
    pub sequence_number: u32,
    /// Samples in stream order
    pub samples: Vec<Packet>,
    /// Total payload bytes across `samples`
    pub length: usize,
}

impl MediaTrack {
    /// Creates an empty track batch.
    pub fn new(kind: TrackType, id: u32) -> Self {
        Self {
            kind,
            id,
            sequence_number: 0,
            samples: Vec::new(),
            length: 0,
        }
    }
}

pub mod packet;
pub use packet::Packet;
