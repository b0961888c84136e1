use bytes::Bytes;

/// One media sample: an elementary-stream payload plus its timing.
///
/// Samples are produced by elementary-stream collaborators from the PES
/// payloads the demuxer hands them, and collected into
/// [`MediaTrack`](crate::av::MediaTrack)s for `on_data_available`.
#[derive(Debug, Clone)]
pub struct Packet {
    /// The actual media data contained in the packet
    pub data: Bytes,
    /// Presentation Time Stamp in 90 kHz ticks, 33-bit range
    pub pts: Option<u64>,
    /// Decoding Time Stamp in 90 kHz ticks, 33-bit range
    pub dts: Option<u64>,
    /// Indicates whether this packet contains a key frame
    pub is_key: bool,
}

impl Packet {
    /// Creates a new media packet with the given data.
    ///
    /// Timestamps are unset and the packet is not marked as a key frame.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            pts: None,
            dts: None,
            is_key: false,
        }
    }

    /// Sets the Presentation Time Stamp for this packet.
    pub fn with_pts(mut self, pts: u64) -> Self {
        self.pts = Some(pts);
        self
    }

    /// Sets the Decoding Time Stamp for this packet.
    pub fn with_dts(mut self, dts: u64) -> Self {
        self.dts = Some(dts);
        self
    }

    /// Sets whether this packet contains a key frame.
    pub fn with_key_flag(mut self, is_key: bool) -> Self {
        self.is_key = is_key;
        self
    }
}
