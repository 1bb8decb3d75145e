//! Standalone implementation of the client side of the [MySQL] wire
//! protocol (the 4.1-capable subset).
//!
//! This crate is transport-agnostic: it never opens a socket. The caller
//! owns the TCP stream and drives [`MySqlConnection`] by feeding it the
//! bytes that arrived ([`MySqlConnection::recv_data`]) and writing out the
//! bytes it produced ([`MySqlConnection::take_write_buffer`]). Everything
//! in between happens here: packet framing, the handshake and
//! authentication exchange, and the command/result-set state machine.
//!
//! [MySQL]: https://dev.mysql.com/doc/internals/en/client-server-protocol.html
//!
//! ```rust,no_run
//! use mysql_protocol::{MySqlConnectOptions, MySqlConnection, QueryEvent};
//!
//! # fn main() -> mysql_protocol::Result<()> {
//! let options: MySqlConnectOptions = "mysql://root@localhost/mysql".parse()?;
//! let mut conn = MySqlConnection::new(options);
//!
//! conn.on_connect(|result| println!("connected: {}", result.is_ok()));
//!
//! conn.query("select * from user", |event| {
//!     if let Ok(QueryEvent::Rows(rows)) = event {
//!         for row in rows {
//!             println!("{:?}", row.get_by_name("User"));
//!         }
//!     }
//! });
//!
//! // drive the session: bytes read from the socket go into `recv_data`,
//! // bytes in the write buffer go back out to the socket
//! # let received: Vec<u8> = Vec::new();
//! conn.recv_data(&received)?;
//! let outbound = conn.take_write_buffer();
//! # drop(outbound);
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(future_incompatible)]

mod column;
mod connection;
mod error;
mod io;
mod options;
mod protocol;
mod query_result;
mod row;
mod server_info;
mod type_id;

pub use column::MySqlColumn;
pub use connection::{MySqlConnection, QueryEvent};
pub use error::{Error, MySqlDatabaseError, Result};
pub use options::MySqlConnectOptions;
pub use protocol::{Capabilities, ColumnFlags, Status};
pub use query_result::MySqlQueryResult;
pub use row::MySqlRow;
pub use server_info::MySqlServerInfo;
pub use type_id::MySqlTypeId;
