use bytes::{Buf, Bytes};

use super::Status;
use crate::error::{Error, Result};
use crate::io::{Decode, MySqlBufExt};

/// Successful completion of a command that produced no result set.
///
/// <https://dev.mysql.com/doc/internals/en/packet-OK_Packet.html>
#[derive(Debug)]
pub(crate) struct OkPacket {
    pub(crate) affected_rows: u64,
    pub(crate) last_insert_id: u64,
    pub(crate) status: Status,
    pub(crate) warnings: u16,
}

impl Decode for OkPacket {
    fn decode(mut buf: Bytes) -> Result<Self> {
        if buf.is_empty() {
            return Err(Error::malformed_packet("empty OK packet"));
        }

        let tag = buf.get_u8();
        debug_assert!(tag == 0x00 || tag == 0xfe);

        let affected_rows = buf.get_uint_lenenc()?;
        let last_insert_id = buf.get_uint_lenenc()?;

        if buf.remaining() < 4 {
            return Err(Error::malformed_packet("OK packet is truncated"));
        }

        let status = Status::from_bits_truncate(buf.get_u16_le());
        let warnings = buf.get_u16_le();

        // a human-readable info string may follow; it is not parsed

        Ok(Self { affected_rows, last_insert_id, status, warnings })
    }
}
