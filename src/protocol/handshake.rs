use bytes::{Buf, Bytes};

use super::{Capabilities, Status};
use crate::error::{Error, Result};
use crate::io::{Decode, MySqlBufExt};

// bytes between the server version and the second scramble fragment:
// thread id (4) + scramble part 1 (8) + filler (1) + capabilities (2)
// + charset (1) + status (2) + reserved (13)
const FIXED_AFTER_VERSION: usize = 31;

/// The greeting the server sends as soon as the TCP session opens.
///
/// <https://dev.mysql.com/doc/internals/en/connection-phase-packets.html#packet-Protocol::Handshake>
#[derive(Debug)]
pub(crate) struct Handshake {
    pub(crate) protocol_version: u8,
    pub(crate) server_version: String,
    pub(crate) connection_id: u32,
    pub(crate) capabilities: Capabilities,
    pub(crate) charset: u8,
    pub(crate) status: Status,

    /// The 20-byte authentication seed, re-assembled from its two
    /// fragments.
    pub(crate) auth_plugin_data: Vec<u8>,
}

impl Decode for Handshake {
    fn decode(mut buf: Bytes) -> Result<Self> {
        if buf.is_empty() {
            return Err(Error::malformed_packet("empty greeting packet"));
        }

        let protocol_version = buf.get_u8();
        let server_version = buf.get_str_nul()?;

        if buf.remaining() < FIXED_AFTER_VERSION {
            return Err(Error::malformed_packet("greeting packet is truncated"));
        }

        let connection_id = buf.get_u32_le();

        // scramble, 1st fragment
        let mut auth_plugin_data = buf.split_to(8).to_vec();

        // filler
        buf.advance(1);

        let capabilities = Capabilities::from_bits_truncate(u32::from(buf.get_u16_le()));
        let charset = buf.get_u8();
        let status = Status::from_bits_truncate(buf.get_u16_le());

        // reserved
        buf.advance(13);

        // scramble, 2nd fragment
        auth_plugin_data.extend_from_slice(&buf.get_bytes_nul()?);

        Ok(Self {
            protocol_version,
            server_version,
            connection_id,
            capabilities,
            charset,
            status,
            auth_plugin_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_decodes_the_greeting() {
        let mut payload = vec![10_u8];
        payload.extend_from_slice(b"5.7.28-log\0");
        payload.extend_from_slice(&13_u32.to_le_bytes());
        payload.extend_from_slice(b"abcdefgh");
        payload.push(0);
        payload.extend_from_slice(&(512_u16 | 32768).to_le_bytes());
        payload.push(8);
        payload.extend_from_slice(&2_u16.to_le_bytes());
        payload.extend_from_slice(&[0_u8; 13]);
        payload.extend_from_slice(b"ijklmnopqrst\0");

        let handshake = Handshake::decode(Bytes::from(payload)).unwrap();

        assert_eq!(handshake.protocol_version, 10);
        assert_eq!(handshake.server_version, "5.7.28-log");
        assert_eq!(handshake.connection_id, 13);
        assert_eq!(handshake.charset, 8);
        assert_eq!(handshake.status, Status::SERVER_STATUS_AUTOCOMMIT);
        assert!(handshake.capabilities.contains(Capabilities::PROTOCOL_41));
        assert!(handshake.capabilities.contains(Capabilities::SECURE_CONNECTION));
        assert_eq!(&handshake.auth_plugin_data, b"abcdefghijklmnopqrst");
    }

    #[test]
    fn it_rejects_a_truncated_greeting() {
        let payload = b"\x0a5.7.28\0\x0d\0\0\0".to_vec();

        assert!(Handshake::decode(Bytes::from(payload)).is_err());
    }
}
