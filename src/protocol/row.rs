use bytes::Bytes;

use crate::error::Result;
use crate::io::MySqlBufExt;

/// One result-set row: a nullable length-encoded value per column.
///
/// <https://dev.mysql.com/doc/internals/en/com-query-response.html#packet-ProtocolText::ResultsetRow>
#[derive(Debug)]
pub(crate) struct Row {
    pub(crate) values: Vec<Option<Bytes>>,
}

impl Row {
    pub(crate) fn decode(mut buf: Bytes, columns: usize) -> Result<Self> {
        let mut values = Vec::with_capacity(columns);

        for _ in 0..columns {
            values.push(buf.get_bytes_lenenc()?);
        }

        Ok(Self { values })
    }
}
