use bytes::{Buf, Bytes};

use crate::error::{Error, Result};
use crate::io::Decode;

/// The server failed the current command (or the handshake).
///
/// <https://dev.mysql.com/doc/internals/en/packet-ERR_Packet.html>
#[derive(Debug)]
pub(crate) struct ErrPacket {
    pub(crate) error_code: u16,
    pub(crate) sql_state: Option<String>,
    pub(crate) error_message: String,
}

impl Decode for ErrPacket {
    fn decode(mut buf: Bytes) -> Result<Self> {
        if buf.len() < 3 {
            return Err(Error::malformed_packet("ERR packet is truncated"));
        }

        let tag = buf.get_u8();
        debug_assert_eq!(tag, 0xff);

        let error_code = buf.get_u16_le();

        // a '#' marker means the 5-byte SQLSTATE follows
        let sql_state = if buf.first() == Some(&b'#') {
            buf.advance(1);

            if buf.remaining() < 5 {
                return Err(Error::malformed_packet("ERR packet is missing its SQLSTATE"));
            }

            let state = buf.split_to(5);
            Some(
                String::from_utf8(state.to_vec())
                    .map_err(|_| Error::malformed_packet("SQLSTATE is not UTF-8"))?,
            )
        } else {
            None
        };

        let error_message = String::from_utf8(buf.to_vec())
            .map_err(|_| Error::malformed_packet("error message is not UTF-8"))?;

        Ok(Self { error_code, sql_state, error_message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_decodes_an_error_without_a_sql_state() {
        const DATA: &[u8] = b"\xff\x84\x04Got packets out of order";

        let err = ErrPacket::decode(Bytes::from_static(DATA)).unwrap();

        assert_eq!(err.error_code, 1156);
        assert_eq!(err.sql_state, None);
        assert_eq!(err.error_message, "Got packets out of order");
    }

    #[test]
    fn it_decodes_an_error_with_a_sql_state() {
        const DATA: &[u8] = b"\xff\x19\x04#42000Unknown database 'unknown'";

        let err = ErrPacket::decode(Bytes::from_static(DATA)).unwrap();

        assert_eq!(err.error_code, 1049);
        assert_eq!(err.sql_state.as_deref(), Some("42000"));
        assert_eq!(err.error_message, "Unknown database 'unknown'");
    }
}
