use std::mem;

use bytes::{Bytes, BytesMut};

use crate::io::Encode;

/// Every packet is prefixed by 4 bytes: 3 for the payload length (little
/// endian) and one sequence number.
///
/// <https://dev.mysql.com/doc/internals/en/mysql-packet.html>
pub(crate) const PACKET_HEADER_SIZE: usize = 4;

/// One complete protocol packet, stripped of its framing header.
#[derive(Debug)]
pub(crate) struct Packet {
    pub(crate) sequence_id: u8,
    pub(crate) payload: Bytes,
}

/// Re-assembles packets from the raw inbound byte stream and frames
/// outbound payloads.
///
/// Inbound chunks may arrive fragmented or coalesced; the framer holds
/// whatever prefix of a packet it has seen and can be re-entered with more
/// data at any point. It also owns the outbound sequence counter: the
/// counter follows the packets the server sends and is reset at the start
/// of each new command cycle.
pub(crate) struct PacketFramer {
    rbuf: BytesMut,
    wbuf: Vec<u8>,
    sequence_id: u8,
}

impl PacketFramer {
    pub(crate) fn new() -> Self {
        Self {
            rbuf: BytesMut::with_capacity(8192),
            wbuf: Vec::with_capacity(1024),
            sequence_id: 0,
        }
    }

    /// Append a chunk received from the transport.
    pub(crate) fn feed(&mut self, data: &[u8]) {
        self.rbuf.extend_from_slice(data);
    }

    /// Remove and return the next complete packet, if one is buffered.
    pub(crate) fn next_packet(&mut self) -> Option<Packet> {
        if self.rbuf.len() < PACKET_HEADER_SIZE {
            return None;
        }

        let len = usize::from(self.rbuf[0])
            | usize::from(self.rbuf[1]) << 8
            | usize::from(self.rbuf[2]) << 16;

        if self.rbuf.len() - PACKET_HEADER_SIZE < len {
            return None;
        }

        let header = self.rbuf.split_to(PACKET_HEADER_SIZE);
        let sequence_id = header[3];
        let payload = self.rbuf.split_to(len).freeze();

        // to respond to a packet, the client uses a sequence id of n + 1
        self.sequence_id = sequence_id.wrapping_add(1);

        Some(Packet { sequence_id, payload })
    }

    /// Frame and buffer an outbound packet: 3-byte length, the current
    /// sequence number (post-incremented), then the encoded payload.
    pub(crate) fn write_packet<T: Encode>(&mut self, packet: &T) {
        let pos = self.wbuf.len();

        // reserve room for the header, then encode directly into the
        // write buffer
        self.wbuf.extend_from_slice(&[0_u8; PACKET_HEADER_SIZE]);
        packet.encode(&mut self.wbuf);

        let len = self.wbuf.len() - pos - PACKET_HEADER_SIZE;
        debug_assert!(len < 0xff_ff_ff);

        self.wbuf[pos..pos + 3].copy_from_slice(&(len as u32).to_le_bytes()[..3]);
        self.wbuf[pos + 3] = self.sequence_id;

        self.sequence_id = self.sequence_id.wrapping_add(1);
    }

    /// Start a fresh sequence-number cycle for a new command.
    pub(crate) fn reset_sequence(&mut self) {
        self.sequence_id = 0;
    }

    pub(crate) fn write_buffer(&self) -> &[u8] {
        &self.wbuf
    }

    pub(crate) fn take_write_buffer(&mut self) -> Vec<u8> {
        mem::take(&mut self.wbuf)
    }
}
