//! The sans-IO session: packets in, packets out, no socket.
//!
//! The transport (whatever owns the TCP stream) feeds received bytes into
//! [`MySqlConnection::recv_data`] and writes the bytes accumulated in the
//! write buffer back to the server. All protocol state lives here, private
//! to the session instance; exactly one logical stream of packets is
//! processed at a time, so no locking is involved.

use std::collections::VecDeque;
use std::fmt::{self, Debug, Formatter};

use log::{debug, trace};

use command::{PendingRequest, QueryState};

use crate::error::Result;
use crate::protocol::{ComQuery, Packet, PacketFramer};
use crate::{MySqlConnectOptions, MySqlDatabaseError, MySqlQueryResult, MySqlRow, MySqlServerInfo};

mod command;
mod handshake;

/// Largest command packet the client announces during the handshake.
const MAX_PACKET_SIZE: u32 = 65_535;

/// Deliveries handed to a query's consumer.
#[derive(Debug)]
pub enum QueryEvent {
    /// The statement completed without producing a result set.
    Ok(MySqlQueryResult),

    /// One row, delivered as it arrived. Streaming queries only; there is
    /// no trailing delivery once the result set ends.
    Row(MySqlRow),

    /// The complete row sequence, delivered once. Buffered queries only.
    Rows(Vec<MySqlRow>),
}

type QueryConsumer = Box<dyn FnMut(Result<QueryEvent, MySqlDatabaseError>)>;
type ConnectCallback = Box<dyn FnOnce(Result<(), MySqlDatabaseError>)>;

/// Where the session is in its lifecycle. Handshake and command-cycle
/// data rides inside the variants so that illegal combinations (say, rows
/// arriving outside a result set) cannot be represented.
enum SessionState {
    /// Waiting for the server greeting.
    HandshakeInit,

    /// Authentication sent; waiting for the server's verdict.
    HandshakeInitAck,

    /// Handshake complete. `None` between command cycles.
    Command(Option<QueryState>),

    /// Fatal handshake or framing failure; inbound packets are discarded.
    Failed,
}

/// A single MySQL client session over a single stream, driven entirely by
/// the caller's transport.
///
/// Queries are queued and strictly serialized: a command packet is not
/// transmitted until every earlier request has finished, keeping the
/// half-duplex discipline the classic protocol expects.
pub struct MySqlConnection {
    options: MySqlConnectOptions,
    framer: PacketFramer,
    state: SessionState,
    server_info: Option<MySqlServerInfo>,
    on_connect: Option<ConnectCallback>,
    requests: VecDeque<PendingRequest>,
}

impl MySqlConnection {
    /// Create a session that expects the server greeting as its first
    /// inbound packet.
    pub fn new(options: MySqlConnectOptions) -> Self {
        Self {
            options,
            framer: PacketFramer::new(),
            state: SessionState::HandshakeInit,
            server_info: None,
            on_connect: None,
            requests: VecDeque::new(),
        }
    }

    /// Register a callback invoked exactly once when the handshake
    /// concludes: with `Ok` when the session is ready for queries, or with
    /// the server's error when authentication is rejected.
    ///
    /// Dropping the connection before the handshake concludes drops the
    /// callback without invoking it.
    pub fn on_connect(
        &mut self,
        callback: impl FnOnce(Result<(), MySqlDatabaseError>) + 'static,
    ) {
        self.on_connect = Some(Box::new(callback));
    }

    /// Feed bytes received from the transport.
    ///
    /// Every complete packet buffered so far is processed in arrival
    /// order; a trailing partial packet is kept until more data arrives.
    /// Consumer callbacks run from inside this call. An `Err` here is
    /// fatal: the session discards its protocol state and ignores any
    /// further input.
    pub fn recv_data(&mut self, data: &[u8]) -> Result<()> {
        self.framer.feed(data);

        while let Some(packet) = self.framer.next_packet() {
            if let Err(error) = self.process_packet(packet) {
                self.state = SessionState::Failed;
                return Err(error);
            }
        }

        Ok(())
    }

    fn process_packet(&mut self, packet: Packet) -> Result<()> {
        trace!(
            "received packet, size: {}, number: {}",
            packet.payload.len(),
            packet.sequence_id
        );

        match self.state {
            SessionState::HandshakeInit => self.process_greeting(packet),
            SessionState::HandshakeInitAck => self.process_handshake_ack(packet),
            SessionState::Command(_) => self.process_command(packet),

            SessionState::Failed => {
                debug!("dropping packet received after session failure");
                Ok(())
            }
        }
    }

    /// Submit a query whose rows are buffered and delivered to `consumer`
    /// in a single [`QueryEvent::Rows`] once the result set is complete.
    pub fn query(
        &mut self,
        sql: impl Into<String>,
        consumer: impl FnMut(Result<QueryEvent, MySqlDatabaseError>) + 'static,
    ) {
        self.enqueue(sql.into(), false, Box::new(consumer));
    }

    /// Submit a query whose rows are delivered to `consumer` one
    /// [`QueryEvent::Row`] at a time, in arrival order.
    pub fn query_streaming(
        &mut self,
        sql: impl Into<String>,
        consumer: impl FnMut(Result<QueryEvent, MySqlDatabaseError>) + 'static,
    ) {
        self.enqueue(sql.into(), true, Box::new(consumer));
    }

    fn enqueue(&mut self, sql: String, streaming: bool, consumer: QueryConsumer) {
        self.requests.push_back(PendingRequest::new(sql, streaming, consumer));

        // a lone request on an idle, ready session transmits immediately;
        // anything else waits for its turn at the queue head
        if matches!(self.state, SessionState::Command(None)) && self.requests.len() == 1 {
            self.start_next_request();
        }
    }

    /// Transmit the command for the request now at the queue head, or go
    /// idle if the queue has drained.
    fn start_next_request(&mut self) {
        match self.requests.front_mut() {
            Some(request) => {
                let sql = request.sql.take().expect("queued request already transmitted");

                // each command starts a fresh sequence-number cycle
                self.framer.reset_sequence();
                self.framer.write_packet(&ComQuery(&sql));

                self.state = SessionState::Command(Some(QueryState::WaitHeader));
            }

            None => self.state = SessionState::Command(None),
        }
    }

    /// Bytes waiting to be written to the server.
    pub fn write_buffer(&self) -> &[u8] {
        self.framer.write_buffer()
    }

    /// Take the bytes waiting to be written to the server, leaving the
    /// buffer empty.
    pub fn take_write_buffer(&mut self) -> Vec<u8> {
        self.framer.take_write_buffer()
    }

    /// Facts captured from the server greeting; `None` until the greeting
    /// has been received.
    pub fn server_info(&self) -> Option<&MySqlServerInfo> {
        self.server_info.as_ref()
    }

    pub fn options(&self) -> &MySqlConnectOptions {
        &self.options
    }

    /// `true` once the handshake has completed successfully.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, SessionState::Command(_))
    }

    /// `true` after a fatal handshake or framing failure.
    pub fn is_failed(&self) -> bool {
        matches!(self.state, SessionState::Failed)
    }

    /// Number of queries submitted but not yet resolved.
    pub fn pending_requests(&self) -> usize {
        self.requests.len()
    }
}

impl Debug for MySqlConnection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MySqlConnection")
            .field("ready", &self.is_ready())
            .field("pending_requests", &self.requests.len())
            .finish()
    }
}
