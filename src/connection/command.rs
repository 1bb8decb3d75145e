//! The command phase: one strictly-serialized query cycle at a time.
//!
//! A cycle is either a bare OK/ERR, or a result set: the column-count
//! header, the column definitions up to an EOF marker, then the rows up to
//! a second EOF marker.
//!
//! <https://dev.mysql.com/doc/internals/en/com-query-response.html>

use std::collections::HashMap;
use std::mem;
use std::sync::Arc;

use log::debug;

use super::{MySqlConnection, QueryConsumer, QueryEvent, SessionState};
use crate::error::{Error, Result};
use crate::io::{Decode, MySqlBufExt};
use crate::protocol::{self, ColumnDefinition, EofPacket, ErrPacket, OkPacket, Packet};
use crate::{MySqlColumn, MySqlDatabaseError, MySqlQueryResult, MySqlRow};

/// A submitted query waiting for (or receiving) its response. Requests
/// live in a FIFO queue; only the head is ever active.
pub(super) struct PendingRequest {
    /// The query text; taken when the command packet is transmitted.
    pub(super) sql: Option<String>,
    pub(super) streaming: bool,
    pub(super) consumer: QueryConsumer,

    /// Rows accumulated so far (buffered mode only).
    pub(super) rows: Vec<MySqlRow>,
}

impl PendingRequest {
    pub(super) fn new(sql: String, streaming: bool, consumer: QueryConsumer) -> Self {
        Self { sql: Some(sql), streaming, consumer, rows: Vec::new() }
    }
}

/// Position inside one command cycle. The active column set rides in the
/// state itself, so row packets cannot be processed without one.
pub(super) enum QueryState {
    /// Expecting OK, ERR, or the column-count header of a result set.
    WaitHeader,

    /// Expecting column definitions, terminated by an EOF marker.
    WaitFields { columns: Vec<MySqlColumn> },

    /// Expecting rows, terminated by an EOF marker. Every row of the
    /// result set shares this column set.
    WaitData {
        columns: Arc<[MySqlColumn]>,
        column_names: Arc<HashMap<String, usize>>,
    },
}

impl MySqlConnection {
    pub(super) fn process_command(&mut self, packet: Packet) -> Result<()> {
        let payload = packet.payload;

        if payload.is_empty() {
            return Err(Error::malformed_packet("empty command response packet"));
        }

        let sub = {
            let SessionState::Command(sub) = &mut self.state else {
                unreachable!("process_command outside the command phase");
            };

            sub.take()
        };

        match sub {
            None => {
                // no command in flight; the server should not be talking
                debug!("dropping unsolicited packet outside a command cycle");
                Ok(())
            }

            Some(QueryState::WaitHeader) => match payload[0] {
                0x00 => {
                    let ok = OkPacket::decode(payload)?;
                    self.finish_active_request(Ok(QueryEvent::Ok(MySqlQueryResult(ok))))
                }

                0xff => {
                    let error = MySqlDatabaseError::from(ErrPacket::decode(payload)?);
                    self.finish_active_request(Err(error))
                }

                _ => {
                    // the column-count header; the count is advisory, the
                    // EOF marker decides when the definitions stop
                    let mut buf = payload;
                    let count = buf.get_uint_lenenc()?;
                    let count = usize::try_from(count).unwrap_or(0);

                    self.set_query_state(QueryState::WaitFields {
                        columns: Vec::with_capacity(count),
                    });

                    Ok(())
                }
            },

            Some(QueryState::WaitFields { mut columns }) => match payload[0] {
                0xfe => {
                    let eof = EofPacket::decode(payload)?;
                    debug!(
                        "result set has {} columns; {} warnings",
                        columns.len(),
                        eof.warnings
                    );

                    let column_names = columns
                        .iter()
                        .map(|column| (column.org_name().to_owned(), column.ordinal()))
                        .collect::<HashMap<_, _>>();

                    self.set_query_state(QueryState::WaitData {
                        columns: columns.into(),
                        column_names: Arc::new(column_names),
                    });

                    Ok(())
                }

                0xff => {
                    let error = MySqlDatabaseError::from(ErrPacket::decode(payload)?);
                    self.finish_active_request(Err(error))
                }

                _ => {
                    let def = ColumnDefinition::decode(payload)?;
                    columns.push(MySqlColumn::new(columns.len(), def));

                    self.set_query_state(QueryState::WaitFields { columns });

                    Ok(())
                }
            },

            Some(QueryState::WaitData { columns, column_names }) => match payload[0] {
                0xfe => {
                    let eof = EofPacket::decode(payload)?;
                    debug!("result set complete; status: {:?}", eof.status);

                    let mut request = self.active_request()?;

                    // buffered requests get the whole row sequence at
                    // once; streaming consumers have already seen every row
                    if !request.streaming {
                        let rows = mem::take(&mut request.rows);
                        (request.consumer)(Ok(QueryEvent::Rows(rows)));
                    }

                    self.start_next_request();

                    Ok(())
                }

                0xff => {
                    let error = MySqlDatabaseError::from(ErrPacket::decode(payload)?);
                    self.finish_active_request(Err(error))
                }

                _ => {
                    let row = protocol::Row::decode(payload, columns.len())?;
                    let row = MySqlRow {
                        values: row.values,
                        columns: Arc::clone(&columns),
                        column_names: Arc::clone(&column_names),
                    };

                    let request = self.requests.front_mut().ok_or_else(|| {
                        Error::malformed_packet("row packet with no pending request")
                    })?;

                    if request.streaming {
                        (request.consumer)(Ok(QueryEvent::Row(row)));
                    } else {
                        request.rows.push(row);
                    }

                    self.set_query_state(QueryState::WaitData { columns, column_names });

                    Ok(())
                }
            },
        }
    }

    fn set_query_state(&mut self, query_state: QueryState) {
        self.state = SessionState::Command(Some(query_state));
    }

    /// Pop the active request off the queue head.
    fn active_request(&mut self) -> Result<PendingRequest> {
        self.requests
            .pop_front()
            .ok_or_else(|| Error::malformed_packet("command response with no pending request"))
    }

    /// Deliver the terminal outcome for the active request, then hand the
    /// session to the next queued request (or go idle).
    fn finish_active_request(
        &mut self,
        outcome: Result<QueryEvent, MySqlDatabaseError>,
    ) -> Result<()> {
        let mut request = self.active_request()?;
        (request.consumer)(outcome);

        self.start_next_request();

        Ok(())
    }
}
