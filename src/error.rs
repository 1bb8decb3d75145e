use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use crate::protocol::ErrPacket;

/// A specialized `Result` type for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors which may occur while driving a MySQL session.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A packet or value did not have the structure the protocol requires.
    ///
    /// Framing and codec failures are fatal to the session: no partial
    /// state is retained and the caller should discard the connection.
    #[error("malformed packet: {message}")]
    MalformedPacket { message: String },

    /// The server did not advertise support for the 4.1 protocol, which is
    /// the only framing this crate speaks.
    #[error("server does not support the 4.1 protocol")]
    ProtocolUnsupported,

    /// The server rejected the supplied credentials during the handshake.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(MySqlDatabaseError),

    /// A column declared a type code with no known symbolic name.
    #[error("unknown field type: 0x{0:02x}")]
    UnknownFieldType(u8),

    /// The connection URL could not be parsed.
    #[error("invalid connection configuration: {message}")]
    Configuration { message: String },
}

impl Error {
    pub(crate) fn malformed_packet(message: impl Into<String>) -> Self {
        Self::MalformedPacket { message: message.into() }
    }

    pub(crate) fn config(message: impl Display) -> Self {
        Self::Configuration { message: message.to_string() }
    }
}

/// An error returned from the MySQL database server.
///
/// Errors raised while a query is executing are delivered to that query's
/// consumer and leave the session usable; only an error during the
/// handshake is fatal.
#[derive(Debug, Clone)]
pub struct MySqlDatabaseError {
    pub(crate) error_code: u16,
    pub(crate) sql_state: Option<String>,
    pub(crate) error_message: String,
}

impl MySqlDatabaseError {
    /// The numeric server error code, e.g. `1045`.
    pub fn code(&self) -> u16 {
        self.error_code
    }

    /// The five-character SQLSTATE, when the server sent one.
    pub fn sql_state(&self) -> Option<&str> {
        self.sql_state.as_deref()
    }

    /// The human-readable error message.
    pub fn message(&self) -> &str {
        &self.error_message
    }
}

impl From<ErrPacket> for MySqlDatabaseError {
    fn from(packet: ErrPacket) -> Self {
        Self {
            error_code: packet.error_code,
            sql_state: packet.sql_state,
            error_message: packet.error_message,
        }
    }
}

impl Display for MySqlDatabaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.sql_state {
            Some(state) => write!(f, "{} ({}): {}", self.error_code, state, self.message()),
            None => write!(f, "{}: {}", self.error_code, self.message()),
        }
    }
}

impl StdError for MySqlDatabaseError {}
