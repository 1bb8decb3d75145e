use bytes::{Buf, Bytes};

use super::Status;
use crate::error::{Error, Result};
use crate::io::Decode;

/// Marks the end of the column definitions and of the rows of a result
/// set.
///
/// <https://dev.mysql.com/doc/internals/en/packet-EOF_Packet.html>
#[derive(Debug)]
pub(crate) struct EofPacket {
    pub(crate) warnings: u16,
    pub(crate) status: Status,
}

impl Decode for EofPacket {
    fn decode(mut buf: Bytes) -> Result<Self> {
        if buf.is_empty() {
            return Err(Error::malformed_packet("empty EOF packet"));
        }

        let tag = buf.get_u8();
        debug_assert_eq!(tag, 0xfe);

        // the 4.1 EOF carries warnings and status flags; ancient servers
        // send the marker byte alone
        let (warnings, status) = if buf.remaining() >= 4 {
            (buf.get_u16_le(), Status::from_bits_truncate(buf.get_u16_le()))
        } else {
            (0, Status::empty())
        };

        Ok(Self { warnings, status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_decodes_a_41_eof() {
        let eof = EofPacket::decode(Bytes::from_static(b"\xfe\0\0\x02\0")).unwrap();

        assert_eq!(eof.warnings, 0);
        assert_eq!(eof.status, Status::SERVER_STATUS_AUTOCOMMIT);
    }

    #[test]
    fn it_decodes_a_bare_marker() {
        let eof = EofPacket::decode(Bytes::from_static(b"\xfe")).unwrap();

        assert_eq!(eof.warnings, 0);
        assert_eq!(eof.status, Status::empty());
    }
}
