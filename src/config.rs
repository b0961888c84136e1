/// Construction-time demuxer options.
///
/// None of these change transport-layer decode behaviour; the record is
/// held by the demuxer and exposed to elementary-stream collaborators,
/// which is where the options take effect.
#[derive(Debug, Clone)]
pub struct DemuxerConfig {
    /// Whether the source is a live stream (collaborators may relax
    /// buffering and duration accounting)
    pub is_live: bool,
    /// Whether collaborators should accumulate per-stream statistics
    pub enable_statistics_info: bool,
}

impl Default for DemuxerConfig {
    fn default() -> Self {
        Self {
            is_live: false,
            enable_statistics_info: false,
        }
    }
}

impl DemuxerConfig {
    /// Marks the source as live.
    pub fn with_live(mut self, is_live: bool) -> Self {
        self.is_live = is_live;
        self
    }
}
