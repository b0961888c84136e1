use super::parser::{self, PacketIter, PATSection, PMTSection};
use super::pes::{self, PESPacket, PesSliceQueue};
use super::types::*;
use crate::av::{CodecType, MediaInfo, MediaTrack, Packet, StreamSummary, TrackMetadata, TrackType};
use crate::config::DemuxerConfig;
use crate::error::{DemuxError, DemuxErrorKind, Result};
use crate::format::{ChunkSink, ChunkSource};
use crate::utils::Crc32Mpeg2;
use log::{debug, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Scan window for the sync probe, in bytes.
const PROBE_SCAN_WINDOW: usize = 1000;

/// Callback invoked for recoverable demux errors.
pub type ErrorCallback = Box<dyn FnMut(DemuxErrorKind, &str)>;
/// Callback invoked when the container-level media info changes.
pub type MediaInfoCallback = Box<dyn FnMut(&MediaInfo)>;
/// Callback invoked once a track's codec identity is known; collaborators
/// refine it later with payload-derived detail.
pub type TrackMetadataCallback = Box<dyn FnMut(TrackType, &TrackMetadata)>;
/// Callback invoked with the video/audio samples batched during one parse
/// pass (or flush).
pub type DataAvailableCallback = Box<dyn FnMut(&MediaTrack, &MediaTrack)>;
/// Callback invoked with a complete PES packet (timed ID3, private data).
pub type PesCallback = Box<dyn FnMut(&PESPacket)>;
/// Callback invoked with a raw SCTE-35 section slice.
pub type Scte35Callback = Box<dyn FnMut(u16, &[u8])>;
/// Callback invoked with the PMT descriptors of a PES-private-data stream.
pub type PrivateDataDescriptorCallback = Box<dyn FnMut(u16, &[Descriptor])>;

/// The demuxer's host-facing callback slots.
///
/// The first four are mandatory: `parse_chunk` refuses to run until
/// `on_error`, `on_media_info`, `on_track_metadata` and `on_data_available`
/// are all bound. The rest are optional per-feature hooks.
#[derive(Default)]
pub struct DemuxerCallbacks {
    /// Recoverable demux errors (mandatory)
    pub on_error: Option<ErrorCallback>,
    /// Container-level media info (mandatory)
    pub on_media_info: Option<MediaInfoCallback>,
    /// Per-track codec identity, fired when the active PMT changes (mandatory)
    pub on_track_metadata: Option<TrackMetadataCallback>,
    /// Sample batches, fired at the end of each parse pass (mandatory)
    pub on_data_available: Option<DataAvailableCallback>,
    /// Timed ID3 metadata PES packets
    pub on_timed_id3_metadata: Option<PesCallback>,
    /// Raw SCTE-35 splice sections
    pub on_scte35_metadata: Option<Scte35Callback>,
    /// PES private data packets (stream_type 0x06)
    pub on_pes_private_data: Option<PesCallback>,
    /// ES_info descriptors of PES-private-data streams
    pub on_pes_private_data_descriptor: Option<PrivateDataDescriptorCallback>,
}

/// Receiver for the elementary-stream payloads the demuxer extracts.
///
/// The H.264 and ADTS-AAC parsers sit behind this trait; the demuxer
/// itself never inspects the payload bytes. Default implementations
/// discard the payload so a sink may handle only one direction.
pub trait ElementaryStreamSink {
    /// A complete H.264 PES payload with its timestamps.
    fn on_video_payload(&mut self, pes: &PESPacket) {
        let _ = pes;
    }

    /// A complete ADTS-AAC PES payload with its timestamps.
    fn on_audio_payload(&mut self, pes: &PESPacket) {
        let _ = pes;
    }
}

/// Streaming MPEG-TS demultiplexer.
///
/// A plain state machine driven by `parse_chunk`: bytes in, synchronous
/// callbacks out. One instance owns its tables and queues exclusively;
/// instances are independent.
pub struct TSDemuxer {
    config: DemuxerConfig,
    callbacks: DemuxerCallbacks,
    es_sink: Option<Box<dyn ElementaryStreamSink>>,
    crc: Crc32Mpeg2,

    packet_size: usize,
    sync_offset: usize,
    first_parse: bool,
    destroyed: bool,

    pat: Option<PAT>,
    current_program: Option<u16>,
    current_pmt_pid: Option<u16>,
    program_pmt: HashMap<u16, PMT>,
    pes_slice_queues: HashMap<u16, PesSliceQueue>,
    media_info: Option<MediaInfo>,
    video_track: MediaTrack,
    audio_track: MediaTrack,
}

/// Track id the video samples are batched under.
const VIDEO_TRACK_ID: u32 = 1;
/// Track id the audio samples are batched under.
const AUDIO_TRACK_ID: u32 = 2;

impl TSDemuxer {
    /// Decides whether `data` is an MPEG transport stream.
    ///
    /// Requires three sync bytes spaced one packet apart inside the scan
    /// window, trying canonical 188-byte framing before 192-byte M2TS
    /// framing. Buffers of three packets or fewer are never a match.
    pub fn probe(data: &[u8]) -> Option<ProbeResult> {
        if data.len() <= 3 * TS_PACKET_SIZE {
            return None;
        }

        for packet_size in [TS_PACKET_SIZE, M2TS_PACKET_SIZE] {
            let window = data
                .len()
                .saturating_sub(3 * packet_size)
                .min(PROBE_SCAN_WINDOW);
            for sync_offset in 0..window {
                if data[sync_offset] == TS_SYNC_BYTE
                    && data[sync_offset + packet_size] == TS_SYNC_BYTE
                    && data[sync_offset + 2 * packet_size] == TS_SYNC_BYTE
                {
                    return Some(ProbeResult {
                        packet_size,
                        sync_offset,
                        consumed: 0,
                    });
                }
            }
        }

        None
    }

    /// Creates a demuxer for the framing a successful probe reported.
    pub fn new(probe: ProbeResult, config: DemuxerConfig) -> Self {
        Self {
            config,
            callbacks: DemuxerCallbacks::default(),
            es_sink: None,
            crc: Crc32Mpeg2::new(),
            packet_size: probe.packet_size,
            sync_offset: probe.sync_offset,
            first_parse: true,
            destroyed: false,
            pat: None,
            current_program: None,
            current_pmt_pid: None,
            program_pmt: HashMap::new(),
            pes_slice_queues: HashMap::new(),
            media_info: None,
            video_track: MediaTrack::new(TrackType::Video, VIDEO_TRACK_ID),
            audio_track: MediaTrack::new(TrackType::Audio, AUDIO_TRACK_ID),
        }
    }

    /// The configuration record this demuxer was built with.
    ///
    /// No option in it alters transport-layer decoding; elementary-stream
    /// collaborators read it from here.
    pub fn config(&self) -> &DemuxerConfig {
        &self.config
    }

    /// Mutable access to the callback slots.
    pub fn callbacks_mut(&mut self) -> &mut DemuxerCallbacks {
        &mut self.callbacks
    }

    /// Installs the elementary-stream sink receiving video/audio payloads.
    pub fn set_elementary_stream_sink(&mut self, sink: Box<dyn ElementaryStreamSink>) {
        self.es_sink = Some(sink);
    }

    /// Registers `demuxer` as the data-arrival sink of `source`.
    pub fn bind_data_source(demuxer: Rc<RefCell<TSDemuxer>>, source: &mut dyn ChunkSource) {
        source.bind_sink(demuxer);
    }

    /// Drives one pass over `chunk`, returning the exclusive end offset
    /// consumed. `byte_start` is the chunk's absolute stream position; the
    /// caller requeues any unconsumed remainder in front of the next chunk.
    pub fn parse_chunk(&mut self, chunk: &[u8], byte_start: u64) -> Result<usize> {
        if self.destroyed {
            return Err(DemuxError::IllegalState(
                "parse_chunk called on a destroyed demuxer".into(),
            ));
        }
        self.ensure_mandatory_callbacks()?;

        let start_offset = if self.first_parse {
            self.first_parse = false;
            self.sync_offset.min(chunk.len())
        } else {
            0
        };

        let mut iter = PacketIter::new(chunk, start_offset, self.packet_size);
        while let Some(packet) = iter.next() {
            self.handle_packet(&packet);
        }

        if iter.halted() {
            warn!(
                "{}: lost sync at stream position {}, dropping rest of chunk",
                DemuxErrorKind::FormatDesync,
                byte_start + iter.offset() as u64
            );
        }
        let consumed = iter.offset();

        self.dispatch_data_available();
        Ok(consumed)
    }

    /// Drains every pending PES queue, emitting whatever is buffered.
    ///
    /// A PES is normally terminated by the next payload-unit-start on its
    /// PID; at end of stream that marker never comes, so the host calls
    /// this once after the final chunk.
    pub fn flush(&mut self) -> Result<()> {
        if self.destroyed {
            return Err(DemuxError::IllegalState(
                "flush called on a destroyed demuxer".into(),
            ));
        }
        self.ensure_mandatory_callbacks()?;

        let mut pids: Vec<u16> = self.pes_slice_queues.keys().copied().collect();
        pids.sort_unstable();
        for pid in pids {
            let pending = self
                .pes_slice_queues
                .get_mut(&pid)
                .and_then(PesSliceQueue::take_buffer);
            if let Some(buffer) = pending {
                self.emit_pes(pid, &buffer);
            }
        }

        self.dispatch_data_available();
        Ok(())
    }

    /// Discards the accumulated media info so the next PMT update
    /// re-reports it.
    pub fn reset_media_info(&mut self) {
        self.media_info = None;
    }

    /// Releases all state. Subsequent `parse_chunk` calls fail with an
    /// illegal-state error.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.pat = None;
        self.current_program = None;
        self.current_pmt_pid = None;
        self.program_pmt.clear();
        self.pes_slice_queues.clear();
        self.media_info = None;
        self.video_track = MediaTrack::new(TrackType::Video, VIDEO_TRACK_ID);
        self.audio_track = MediaTrack::new(TrackType::Audio, AUDIO_TRACK_ID);
        self.callbacks = DemuxerCallbacks::default();
        self.es_sink = None;
    }

    fn ensure_mandatory_callbacks(&self) -> Result<()> {
        let cb = &self.callbacks;
        if cb.on_error.is_none()
            || cb.on_media_info.is_none()
            || cb.on_track_metadata.is_none()
            || cb.on_data_available.is_none()
        {
            return Err(DemuxError::IllegalState(
                "on_error, on_media_info, on_track_metadata and on_data_available \
                 must be bound before parsing"
                    .into(),
            ));
        }
        Ok(())
    }

    fn emit_error(&mut self, kind: DemuxErrorKind, detail: &str) {
        warn!("{kind}: {detail}");
        if let Some(cb) = self.callbacks.on_error.as_mut() {
            cb(kind, detail);
        }
    }

    fn active_pmt(&self) -> Option<&PMT> {
        self.current_program
            .and_then(|program| self.program_pmt.get(&program))
    }

    fn handle_packet(&mut self, packet: &parser::TSPacket<'_>) {
        let header = &packet.header;
        let payload = match packet.payload {
            Some(payload) => payload,
            None => return,
        };

        if header.pid == PID_PAT {
            if header.payload_unit_start {
                self.handle_pat_payload(payload);
            }
            return;
        }

        if self.is_pmt_pid(header.pid) {
            if header.payload_unit_start {
                self.handle_pmt_payload(payload);
            }
            return;
        }

        let Some(pmt) = self.active_pmt() else { return };
        if !pmt.pid_stream_type.contains_key(&header.pid) {
            return;
        }

        let is_pes_pid = Some(header.pid) == pmt.common_pids.h264
            || Some(header.pid) == pmt.common_pids.adts_aac
            || pmt.pes_private_data_pids.contains(&header.pid)
            || pmt.timed_id3_pids.contains(&header.pid);
        let is_scte35_pid = pmt.scte_35_pids.contains(&header.pid);

        if is_pes_pid {
            self.handle_pes_slice(header.pid, header.payload_unit_start, payload);
        } else if is_scte35_pid && header.payload_unit_start {
            self.handle_scte35_section(header.pid, payload);
        }
    }

    fn is_pmt_pid(&self, pid: u16) -> bool {
        Some(pid) == self.current_pmt_pid
            || self
                .pat
                .as_ref()
                .map_or(false, |pat| pat.program_pmt_pid.values().any(|&p| p == pid))
    }

    /// Strips the pointer_field in front of a payload-unit-start section.
    fn section_after_pointer<'a>(&mut self, payload: &'a [u8]) -> Option<&'a [u8]> {
        let Some(&pointer) = payload.first() else {
            return None;
        };
        let start = 1 + pointer as usize;
        if start >= payload.len() {
            self.emit_error(
                DemuxErrorKind::TableMismatch,
                "pointer_field exceeds TS payload",
            );
            return None;
        }
        Some(&payload[start..])
    }

    fn handle_pat_payload(&mut self, payload: &[u8]) {
        let Some(section) = self.section_after_pointer(payload) else {
            return;
        };
        match parser::parse_pat_section(section, &self.crc) {
            Ok(section) => self.apply_pat_section(section),
            Err(error) => self.emit_error(DemuxErrorKind::TableMismatch, &error.to_string()),
        }
    }

    fn apply_pat_section(&mut self, section: PATSection) {
        if !section.crc_ok {
            warn!(
                "PAT v{} section {} failed CRC check, keeping it anyway",
                section.version_number, section.section_number
            );
        }

        let fresh = section.current_next_indicator && section.section_number == 0;
        let mut pat = if fresh {
            PAT {
                version_number: section.version_number,
                ..PAT::default()
            }
        } else {
            // Continuation sections only refine a table we already hold.
            match self.pat.take() {
                Some(pat) => pat,
                None => return,
            }
        };

        let mut first_program: Option<(u16, u16)> = None;
        for entry in &section.programs {
            if entry.program_number == 0 {
                pat.network_pid = Some(entry.pid);
            } else {
                pat.program_pmt_pid.insert(entry.program_number, entry.pid);
                if first_program.is_none() {
                    first_program = Some((entry.program_number, entry.pid));
                }
            }
        }

        if fresh {
            if self.current_program.is_none() {
                debug!(
                    "accepted first PAT v{}: {} program(s)",
                    pat.version_number,
                    pat.program_pmt_pid.len()
                );
            }
            if let Some((program_number, pmt_pid)) = first_program {
                self.current_program = Some(program_number);
                self.current_pmt_pid = Some(pmt_pid);
            }
        }
        self.pat = Some(pat);
    }

    fn handle_pmt_payload(&mut self, payload: &[u8]) {
        let Some(section) = self.section_after_pointer(payload) else {
            return;
        };
        match parser::parse_pmt_section(section, &self.crc) {
            Ok(section) => self.apply_pmt_section(section),
            Err(error) => self.emit_error(DemuxErrorKind::TableMismatch, &error.to_string()),
        }
    }

    fn apply_pmt_section(&mut self, section: PMTSection) {
        if !section.crc_ok {
            warn!(
                "PMT v{} for program {} failed CRC check, keeping it anyway",
                section.version_number, section.program_number
            );
        }

        let program_number = section.program_number;
        let fresh = section.current_next_indicator && section.section_number == 0;
        let mut pmt = if fresh {
            PMT {
                program_number,
                version_number: section.version_number,
                ..PMT::default()
            }
        } else {
            match self.program_pmt.remove(&program_number) {
                Some(pmt) => pmt,
                None => return,
            }
        };

        let mut private_descriptors: Vec<(u16, Vec<Descriptor>)> = Vec::new();
        for entry in &section.streams {
            let stream_type = StreamType::from_u8(entry.stream_type);
            pmt.pid_stream_type.insert(entry.elementary_pid, stream_type);

            match stream_type {
                StreamType::H264 => {
                    if pmt.common_pids.h264.is_none() {
                        pmt.common_pids.h264 = Some(entry.elementary_pid);
                    }
                }
                StreamType::AdtsAac => {
                    if pmt.common_pids.adts_aac.is_none() {
                        pmt.common_pids.adts_aac = Some(entry.elementary_pid);
                    }
                }
                StreamType::PesPrivateData => {
                    pmt.pes_private_data_pids.insert(entry.elementary_pid);
                    if !entry.descriptors.is_empty() {
                        private_descriptors
                            .push((entry.elementary_pid, entry.descriptors.clone()));
                    }
                }
                StreamType::TimedId3 => {
                    pmt.timed_id3_pids.insert(entry.elementary_pid);
                }
                StreamType::Scte35 => {
                    pmt.scte_35_pids.insert(entry.elementary_pid);
                }
                _ => {}
            }
        }

        self.program_pmt.insert(program_number, pmt);

        for (pid, descriptors) in private_descriptors {
            if let Some(cb) = self.callbacks.on_pes_private_data_descriptor.as_mut() {
                cb(pid, &descriptors);
            }
        }

        if Some(program_number) == self.current_program {
            debug!(
                "active PMT updated: program {} v{}",
                program_number, section.version_number
            );
            self.refresh_media_info();
        }
    }

    fn refresh_media_info(&mut self) {
        let Some(pmt) = self.active_pmt() else { return };

        let mut streams: Vec<StreamSummary> = pmt
            .pid_stream_type
            .iter()
            .map(|(&pid, &stream_type)| StreamSummary {
                pid,
                stream_type: stream_type.as_u8(),
            })
            .collect();
        streams.sort_by_key(|s| s.pid);

        let info = MediaInfo {
            mime_type: "video/mp2t".to_string(),
            has_video: pmt.common_pids.h264.is_some(),
            has_audio: pmt.common_pids.adts_aac.is_some(),
            video_pid: pmt.common_pids.h264,
            audio_pid: pmt.common_pids.adts_aac,
            streams,
        };

        if self.media_info.as_ref() == Some(&info) {
            return;
        }
        if let Some(cb) = self.callbacks.on_media_info.as_mut() {
            cb(&info);
        }
        if let Some(cb) = self.callbacks.on_track_metadata.as_mut() {
            if info.has_video {
                let metadata = TrackMetadata {
                    codec: Some(CodecType::H264),
                    ..TrackMetadata::default()
                };
                cb(TrackType::Video, &metadata);
            }
            if info.has_audio {
                let metadata = TrackMetadata {
                    codec: Some(CodecType::AAC),
                    ..TrackMetadata::default()
                };
                cb(TrackType::Audio, &metadata);
            }
        }
        self.media_info = Some(info);
    }

    /// Hands the batched samples to the host and starts fresh batches.
    ///
    /// Skipped while both batches are empty, so table-only passes stay
    /// silent; dispatched batches advance the per-track sequence numbers.
    fn dispatch_data_available(&mut self) {
        if self.video_track.samples.is_empty() && self.audio_track.samples.is_empty() {
            return;
        }

        if let Some(cb) = self.callbacks.on_data_available.as_mut() {
            cb(&self.video_track, &self.audio_track);
        }

        let mut video = MediaTrack::new(TrackType::Video, VIDEO_TRACK_ID);
        video.sequence_number = self.video_track.sequence_number + 1;
        self.video_track = video;
        let mut audio = MediaTrack::new(TrackType::Audio, AUDIO_TRACK_ID);
        audio.sequence_number = self.audio_track.sequence_number + 1;
        self.audio_track = audio;
    }

    /// Routes one TS payload slice of a PES-bearing PID.
    ///
    /// A payload-unit-start closes the previous PES on the PID (its bytes
    /// are complete only once the next PES begins) and opens a new queue;
    /// continuation slices are appended while a queue exists and dropped
    /// silently otherwise.
    fn handle_pes_slice(&mut self, pid: u16, payload_unit_start: bool, slice: &[u8]) {
        if payload_unit_start {
            let pending = self
                .pes_slice_queues
                .get_mut(&pid)
                .and_then(PesSliceQueue::take_buffer);
            if let Some(buffer) = pending {
                self.emit_pes(pid, &buffer);
            }
            self.pes_slice_queues.insert(pid, PesSliceQueue::new());
        }

        if let Some(queue) = self.pes_slice_queues.get_mut(&pid) {
            queue.push(slice);
        }
    }

    fn emit_pes(&mut self, pid: u16, buffer: &[u8]) {
        let stream_type = self
            .active_pmt()
            .and_then(|pmt| pmt.pid_stream_type.get(&pid).copied())
            .unwrap_or(StreamType::Other(0));

        match pes::parse_pes(buffer, pid, stream_type) {
            Ok(Some(packet)) => self.dispatch_pes(packet),
            Ok(None) => {}
            Err(error) => self.emit_error(DemuxErrorKind::MalformedPes, &error.to_string()),
        }
    }

    fn dispatch_pes(&mut self, packet: PESPacket) {
        match packet.stream_type {
            StreamType::H264 => {
                if let Some(sink) = self.es_sink.as_mut() {
                    sink.on_video_payload(&packet);
                }
                let mut sample = Packet::new(packet.payload.clone());
                sample.pts = packet.pts;
                sample.dts = packet.dts;
                self.video_track.length += sample.data.len();
                self.video_track.samples.push(sample);
            }
            StreamType::AdtsAac => {
                if let Some(sink) = self.es_sink.as_mut() {
                    sink.on_audio_payload(&packet);
                }
                let mut sample = Packet::new(packet.payload.clone());
                sample.pts = packet.pts;
                sample.dts = packet.dts;
                self.audio_track.length += sample.data.len();
                self.audio_track.samples.push(sample);
            }
            StreamType::PesPrivateData => {
                if let Some(cb) = self.callbacks.on_pes_private_data.as_mut() {
                    cb(&packet);
                }
            }
            StreamType::TimedId3 => {
                if let Some(cb) = self.callbacks.on_timed_id3_metadata.as_mut() {
                    cb(&packet);
                }
            }
            // MPEG audio, H.265 and unrecognized types have no collaborator
            // wired up in this crate.
            _ => {}
        }
    }

    /// Forwards one single-packet SCTE-35 section, bounded by its
    /// section_length.
    fn handle_scte35_section(&mut self, pid: u16, payload: &[u8]) {
        let Some(section) = self.section_after_pointer(payload) else {
            return;
        };
        if section.len() < 3 {
            return;
        }
        let section_length = (((section[1] & 0x0F) as usize) << 8) | section[2] as usize;
        let end = (3 + section_length).min(section.len());
        let section = &section[..end];
        if let Some(cb) = self.callbacks.on_scte35_metadata.as_mut() {
            cb(pid, section);
        }
    }
}

impl ChunkSink for TSDemuxer {
    fn on_chunk_arrival(&mut self, chunk: &[u8], byte_start: u64) -> Result<usize> {
        self.parse_chunk(chunk, byte_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_rejects_short_buffer() {
        assert!(TSDemuxer::probe(&[0x47; 3 * TS_PACKET_SIZE]).is_none());
    }

    #[test]
    fn test_probe_188() {
        let mut data = vec![0u8; 4 * TS_PACKET_SIZE];
        for offset in [0, 188, 376, 564] {
            data[offset] = TS_SYNC_BYTE;
        }
        assert_eq!(
            TSDemuxer::probe(&data),
            Some(ProbeResult {
                packet_size: 188,
                sync_offset: 0,
                consumed: 0
            })
        );
    }

    #[test]
    fn test_probe_192_fallback() {
        let mut data = vec![0u8; 4 * M2TS_PACKET_SIZE];
        for offset in [4, 196, 388, 580] {
            data[offset] = TS_SYNC_BYTE;
        }
        assert_eq!(
            TSDemuxer::probe(&data),
            Some(ProbeResult {
                packet_size: 192,
                sync_offset: 4,
                consumed: 0
            })
        );
    }

    #[test]
    fn test_probe_no_match() {
        // A lone 0x47 here and there, never three a packet apart.
        let mut data = vec![0u8; 1024];
        data[10] = TS_SYNC_BYTE;
        data[200] = TS_SYNC_BYTE;
        data[700] = TS_SYNC_BYTE;
        assert!(TSDemuxer::probe(&data).is_none());
    }

    #[test]
    fn test_probe_nonzero_sync_offset() {
        let mut data = vec![0u8; 5 * TS_PACKET_SIZE];
        for offset in [7, 7 + 188, 7 + 376, 7 + 564] {
            data[offset] = TS_SYNC_BYTE;
        }
        let probe = TSDemuxer::probe(&data).unwrap();
        assert_eq!(probe.packet_size, 188);
        assert_eq!(probe.sync_offset, 7);
    }

    #[test]
    fn test_parse_chunk_requires_callbacks() {
        let probe = ProbeResult {
            packet_size: 188,
            sync_offset: 0,
            consumed: 0,
        };
        let mut demuxer = TSDemuxer::new(probe, DemuxerConfig::default());
        let chunk = vec![0u8; 188];
        assert!(matches!(
            demuxer.parse_chunk(&chunk, 0),
            Err(DemuxError::IllegalState(_))
        ));
    }
}
