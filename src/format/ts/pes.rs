use super::types::StreamType;
use crate::error::{DemuxError, Result};
use bytes::{Bytes, BytesMut};

/// Stream IDs that carry no PES header extension: program_stream_map,
/// padding_stream, private_stream_2, ECM, EMM, program_stream_directory,
/// DSMCC_stream, ITU-T H.222.1 type E. A PES with one of these is valid
/// but yields no elementary payload here.
const STREAM_IDS_WITHOUT_PAYLOAD: [u8; 8] = [0xBC, 0xBE, 0xBF, 0xF0, 0xF1, 0xFF, 0xF2, 0xF8];

/// Decoded fixed part of a PES header.
#[derive(Debug, Clone, Copy)]
pub struct PESHeader {
    /// Stream identifier following the start-code prefix
    pub stream_id: u8,
    /// PES_packet_length field; 0 means "until end of stream"
    pub packet_length: u16,
    /// 2-bit PTS_DTS_flags
    pub pts_dts_flags: u8,
    /// Length of the optional-field region after byte 8
    pub header_data_length: u8,
    /// Presentation timestamp, 90 kHz, 33-bit
    pub pts: Option<u64>,
    /// Decoding timestamp, 90 kHz, 33-bit; equals PTS when only PTS is sent
    pub dts: Option<u64>,
}

/// One complete, reassembled PES packet ready for an elementary-stream
/// parser: the payload window plus its timestamps and origin.
#[derive(Debug, Clone)]
pub struct PESPacket {
    /// PID the packet was reassembled from
    pub pid: u16,
    /// Stream type the active PMT assigns to the PID
    pub stream_type: StreamType,
    /// Presentation timestamp, when signalled
    pub pts: Option<u64>,
    /// Decoding timestamp, when signalled (PTS copied if absent)
    pub dts: Option<u64>,
    /// Elementary-stream payload bytes
    pub payload: Bytes,
}

/// Unpacks one 33-bit PTS/DTS from its 5-byte encoding.
///
/// Bits land as: byte0[3:1] → ts[32:30], byte1 → ts[29:22],
/// byte2[7:1] → ts[21:15], byte3 → ts[14:7], byte4[7:1] → ts[6:0].
fn read_timestamp(b: &[u8]) -> u64 {
    (((b[0] & 0x0E) as u64) << 29)
        | ((b[1] as u64) << 22)
        | (((b[2] & 0xFE) as u64) << 14)
        | ((b[3] as u64) << 7)
        | (((b[4] & 0xFE) as u64) >> 1)
}

/// Decodes the PES header of one reassembled packet.
///
/// Returns `Ok(None)` for the reserved stream_ids that carry no header
/// extension, `Err` when the start code or a field bound is violated.
pub fn parse_pes_header(data: &[u8]) -> Result<Option<PESHeader>> {
    if data.len() < 6 {
        return Err(DemuxError::InvalidData("PES shorter than fixed header".into()));
    }

    let start_code_prefix =
        ((data[0] as u32) << 16) | ((data[1] as u32) << 8) | data[2] as u32;
    if start_code_prefix != 0x00_0001 {
        return Err(DemuxError::InvalidData(format!(
            "bad PES start code prefix 0x{:06x}",
            start_code_prefix
        )));
    }

    let stream_id = data[3];
    let packet_length = ((data[4] as u16) << 8) | data[5] as u16;

    if STREAM_IDS_WITHOUT_PAYLOAD.contains(&stream_id) {
        return Ok(None);
    }

    if data.len() < 9 {
        return Err(DemuxError::InvalidData("PES optional header truncated".into()));
    }

    let pts_dts_flags = (data[7] >> 6) & 0x03;
    let header_data_length = data[8];

    let mut pts = None;
    let mut dts = None;
    if pts_dts_flags == 0x02 || pts_dts_flags == 0x03 {
        if data.len() < 14 {
            return Err(DemuxError::InvalidData("PES PTS field truncated".into()));
        }
        let presentation = read_timestamp(&data[9..14]);
        pts = Some(presentation);
        dts = if pts_dts_flags == 0x03 {
            if data.len() < 19 {
                return Err(DemuxError::InvalidData("PES DTS field truncated".into()));
            }
            Some(read_timestamp(&data[14..19]))
        } else {
            Some(presentation)
        };
    }

    Ok(Some(PESHeader {
        stream_id,
        packet_length,
        pts_dts_flags,
        header_data_length,
        pts,
        dts,
    }))
}

/// Parses one reassembled PES packet into its payload window.
///
/// Returns `Ok(None)` for the reserved stream_ids that carry no elementary
/// payload, `Err` when the start code or length arithmetic is violated.
pub fn parse_pes(data: &[u8], pid: u16, stream_type: StreamType) -> Result<Option<PESPacket>> {
    let header = match parse_pes_header(data)? {
        Some(header) => header,
        None => return Ok(None),
    };

    let payload_start = 9 + header.header_data_length as usize;
    let payload_length = if header.packet_length != 0 {
        let declared = header.packet_length as usize;
        if declared < 3 + header.header_data_length as usize {
            return Err(DemuxError::InvalidData(format!(
                "PES_packet_length {} shorter than header ({})",
                declared,
                3 + header.header_data_length as usize
            )));
        }
        declared - 3 - header.header_data_length as usize
    } else {
        data.len().saturating_sub(payload_start)
    };

    if payload_start > data.len() {
        return Err(DemuxError::InvalidData("PES header exceeds packet".into()));
    }
    let payload_end = (payload_start + payload_length).min(data.len());

    Ok(Some(PESPacket {
        pid,
        stream_type,
        pts: header.pts,
        dts: header.dts,
        payload: Bytes::copy_from_slice(&data[payload_start..payload_end]),
    }))
}

/// Per-PID accumulator for the TS payload slices of one in-flight PES.
///
/// Slices are copied on append so the source chunk does not have to
/// outlive `parse_chunk`; the concatenation happens once, on flush.
#[derive(Debug, Default)]
pub struct PesSliceQueue {
    slices: Vec<Bytes>,
    total_length: usize,
}

impl PesSliceQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an owned copy of one TS payload slice.
    pub fn push(&mut self, slice: &[u8]) {
        self.slices.push(Bytes::copy_from_slice(slice));
        self.total_length += slice.len();
    }

    /// Bytes accumulated so far.
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Concatenates and drains the queued slices, or `None` when empty.
    pub fn take_buffer(&mut self) -> Option<Bytes> {
        if self.slices.is_empty() {
            return None;
        }
        let mut buffer = BytesMut::with_capacity(self.total_length);
        for slice in self.slices.drain(..) {
            buffer.extend_from_slice(&slice);
        }
        self.total_length = 0;
        Some(buffer.freeze())
    }
}
