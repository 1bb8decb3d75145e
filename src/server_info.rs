use crate::protocol::Handshake;
use crate::{Capabilities, Status};

/// Facts captured from the server greeting.
///
/// Assembled once during the handshake and immutable for the life of the
/// session.
#[derive(Debug, Clone)]
pub struct MySqlServerInfo {
    protocol_version: u8,
    server_version: String,
    connection_id: u32,
    capabilities: Capabilities,
    charset: u8,
    status: Status,
    pub(crate) auth_plugin_data: Vec<u8>,
}

impl MySqlServerInfo {
    pub fn protocol_version(&self) -> u8 {
        self.protocol_version
    }

    /// The server version string, e.g. `5.7.28-log`.
    pub fn server_version(&self) -> &str {
        &self.server_version
    }

    /// The id of the server thread serving this session.
    pub fn connection_id(&self) -> u32 {
        self.connection_id
    }

    /// The full capability set the server advertised.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// `true` if the server advertised the given capability bits.
    pub fn has_capability(&self, capability: Capabilities) -> bool {
        self.capabilities.contains(capability)
    }

    /// Human-readable list of the advertised capabilities.
    pub fn capability_names(&self) -> String {
        self.capabilities.names()
    }

    /// The server's default character-set id.
    pub fn charset(&self) -> u8 {
        self.charset
    }

    /// Status flags reported in the greeting.
    pub fn status(&self) -> Status {
        self.status
    }
}

impl From<Handshake> for MySqlServerInfo {
    fn from(handshake: Handshake) -> Self {
        Self {
            protocol_version: handshake.protocol_version,
            server_version: handshake.server_version,
            connection_id: handshake.connection_id,
            capabilities: handshake.capabilities,
            charset: handshake.charset,
            status: handshake.status,
            auth_plugin_data: handshake.auth_plugin_data,
        }
    }
}
