//! The connection phase: greeting in, authentication out, verdict in.
//!
//! <https://dev.mysql.com/doc/internals/en/connection-phase.html>

use log::{debug, warn};

use super::{MySqlConnection, SessionState, MAX_PACKET_SIZE};
use crate::error::{Error, Result};
use crate::io::Decode;
use crate::protocol::{
    auth, Capabilities, ErrPacket, Handshake, HandshakeResponse, OkPacket, Packet,
};
use crate::{MySqlDatabaseError, MySqlServerInfo};

impl MySqlConnection {
    /// Handle the greeting: capture the server facts, prove knowledge of
    /// the password against the scramble seed, and send our capability
    /// subset back.
    pub(super) fn process_greeting(&mut self, packet: Packet) -> Result<()> {
        let handshake = Handshake::decode(packet.payload)?;
        let info = MySqlServerInfo::from(handshake);

        debug!(
            "connected to {} (protocol {}, connection id {})",
            info.server_version(),
            info.protocol_version(),
            info.connection_id()
        );
        debug!("server capabilities: {}", info.capability_names());

        // nothing below 4.1 framing is spoken here; bail before sending
        // anything
        if !info.has_capability(Capabilities::PROTOCOL_41) {
            return Err(Error::ProtocolUnsupported);
        }

        let scramble = auth::scramble(
            self.options.get_password().unwrap_or(""),
            &info.auth_plugin_data,
        );

        let mut capabilities = info.capabilities();
        capabilities.remove(Capabilities::COMPRESS);

        self.framer.write_packet(&HandshakeResponse {
            capabilities,
            max_packet_size: MAX_PACKET_SIZE,
            charset: info.charset(),
            username: self.options.get_username(),
            auth_response: &scramble,
            database: self.options.get_database().unwrap_or(""),
        });

        self.server_info = Some(info);
        self.state = SessionState::HandshakeInitAck;

        Ok(())
    }

    /// Handle the server's verdict on our authentication packet.
    pub(super) fn process_handshake_ack(&mut self, packet: Packet) -> Result<()> {
        let payload = packet.payload;

        match payload.first().copied() {
            Some(0x00) => {
                let ok = OkPacket::decode(payload)?;
                debug!("authenticated; server status: {:?}", ok.status);

                self.state = SessionState::Command(None);

                if let Some(callback) = self.on_connect.take() {
                    callback(Ok(()));
                }

                // queries submitted before the session was ready start now
                if !self.requests.is_empty() {
                    self.start_next_request();
                }

                Ok(())
            }

            Some(0xff) => {
                let error = MySqlDatabaseError::from(ErrPacket::decode(payload)?);
                debug!("authentication rejected: {}", error);

                self.state = SessionState::Failed;

                // the verdict goes to whoever initiated the session: the
                // callback when one is registered, the caller otherwise
                match self.on_connect.take() {
                    Some(callback) => {
                        callback(Err(error));
                        Ok(())
                    }
                    None => Err(Error::AuthenticationFailed(error)),
                }
            }

            Some(tag) => {
                // defensive fallback: stay put and wait for a packet we
                // understand
                warn!("unrecognized handshake response tag: 0x{tag:02x}");
                Ok(())
            }

            None => Err(Error::malformed_packet("empty handshake response packet")),
        }
    }
}
