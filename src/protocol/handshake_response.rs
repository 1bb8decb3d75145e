use super::Capabilities;
use crate::io::{Encode, MySqlBufMutExt};

/// The client's reply to the greeting: the capability subset it will
/// speak, plus credentials.
///
/// <https://dev.mysql.com/doc/internals/en/connection-phase-packets.html#packet-Protocol::HandshakeResponse>
#[derive(Debug)]
pub(crate) struct HandshakeResponse<'a> {
    pub(crate) capabilities: Capabilities,
    pub(crate) max_packet_size: u32,
    pub(crate) charset: u8,
    pub(crate) username: &'a str,
    pub(crate) auth_response: &'a [u8],
    pub(crate) database: &'a str,
}

impl Encode for HandshakeResponse<'_> {
    fn encode(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.capabilities.bits().to_le_bytes());
        buf.extend_from_slice(&self.max_packet_size.to_le_bytes());
        buf.push(self.charset);

        // reserved
        buf.extend_from_slice(&[0_u8; 23]);

        buf.put_str_nul(self.username);
        buf.put_bytes_lenenc(self.auth_response);
        buf.put_str_nul(self.database);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_encodes_an_anonymous_login() {
        let response = HandshakeResponse {
            capabilities: Capabilities::PROTOCOL_41 | Capabilities::SECURE_CONNECTION,
            max_packet_size: 65_535,
            charset: 8,
            username: "root",
            auth_response: &[],
            database: "",
        };

        let mut buf = Vec::new();
        response.encode(&mut buf);

        let mut expected = (512_u32 | 32768).to_le_bytes().to_vec();
        expected.extend_from_slice(&65_535_u32.to_le_bytes());
        expected.push(8);
        expected.extend_from_slice(&[0_u8; 23]);
        expected.extend_from_slice(b"root\0");
        expected.push(0); // empty scramble token
        expected.push(0); // empty database

        assert_eq!(buf, expected);
    }

    #[test]
    fn it_length_prefixes_the_auth_response() {
        let token = [0xaa_u8; 20];
        let response = HandshakeResponse {
            capabilities: Capabilities::PROTOCOL_41,
            max_packet_size: 65_535,
            charset: 33,
            username: "app",
            auth_response: &token,
            database: "orders",
        };

        let mut buf = Vec::new();
        response.encode(&mut buf);

        // 4 + 4 + 1 + 23 reserved, then "app\0"
        let token_at = 32 + 4;
        assert_eq!(buf[token_at], 20);
        assert_eq!(&buf[token_at + 1..token_at + 21], &token);
        assert_eq!(&buf[token_at + 21..], b"orders\0");
    }
}
