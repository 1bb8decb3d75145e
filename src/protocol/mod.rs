pub(crate) mod auth;
mod capabilities;
mod column_def;
mod column_flags;
mod com_query;
mod eof;
mod err;
mod handshake;
mod handshake_response;
mod ok;
mod packet;
mod row;
mod status;

pub use capabilities::Capabilities;
pub(crate) use column_def::ColumnDefinition;
pub use column_flags::ColumnFlags;
pub(crate) use com_query::ComQuery;
pub(crate) use eof::EofPacket;
pub(crate) use err::ErrPacket;
pub(crate) use handshake::Handshake;
pub(crate) use handshake_response::HandshakeResponse;
pub(crate) use ok::OkPacket;
pub(crate) use packet::{Packet, PacketFramer};
pub(crate) use row::Row;
pub use status::Status;
