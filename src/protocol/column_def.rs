use bytes::{Buf, Bytes};

use super::ColumnFlags;
use crate::error::{Error, Result};
use crate::io::{Decode, MySqlBufExt};

/// Column metadata, sent once per column ahead of the rows of a result
/// set.
///
/// <https://dev.mysql.com/doc/internals/en/com-query-response.html#packet-Protocol::ColumnDefinition41>
#[derive(Debug)]
pub(crate) struct ColumnDefinition {
    pub(crate) catalog: String,
    pub(crate) schema: String,

    /// Table name after any aliasing.
    pub(crate) table: String,
    pub(crate) org_table: String,

    /// Column name after any aliasing.
    pub(crate) name: String,
    pub(crate) org_name: String,

    pub(crate) charset: u16,
    pub(crate) max_size: u32,
    pub(crate) type_id: u8,
    pub(crate) flags: ColumnFlags,
    pub(crate) decimals: u8,
}

impl Decode for ColumnDefinition {
    fn decode(mut buf: Bytes) -> Result<Self> {
        let catalog = buf.get_str_lenenc()?.unwrap_or_default();
        let schema = buf.get_str_lenenc()?.unwrap_or_default();
        let table = buf.get_str_lenenc()?.unwrap_or_default();
        let org_table = buf.get_str_lenenc()?.unwrap_or_default();
        let name = buf.get_str_lenenc()?.unwrap_or_default();
        let org_name = buf.get_str_lenenc()?.unwrap_or_default();

        // length of the fixed-size fields, always 0x0c
        let _ = buf.get_uint_lenenc()?;

        if buf.remaining() < 10 {
            return Err(Error::malformed_packet("column definition is truncated"));
        }

        let charset = buf.get_u16_le();
        let max_size = buf.get_u32_le();
        let type_id = buf.get_u8();
        let flags = ColumnFlags::from_bits_truncate(buf.get_u16_le());
        let decimals = buf.get_u8();

        // 2 filler bytes follow; ignored

        Ok(Self {
            catalog,
            schema,
            table,
            org_table,
            name,
            org_name,
            charset,
            max_size,
            type_id,
            flags,
            decimals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_decodes_a_column_definition() {
        let mut payload = Vec::new();
        for part in [&b"def"[..], b"db", b"users", b"users", b"username", b"username"] {
            payload.push(part.len() as u8);
            payload.extend_from_slice(part);
        }
        payload.push(0x0c);
        payload.extend_from_slice(&33_u16.to_le_bytes());
        payload.extend_from_slice(&255_u32.to_le_bytes());
        payload.push(0xfd);
        payload.extend_from_slice(&ColumnFlags::NOT_NULL.bits().to_le_bytes());
        payload.push(0);
        payload.extend_from_slice(&[0, 0]);

        let def = ColumnDefinition::decode(Bytes::from(payload)).unwrap();

        assert_eq!(def.catalog, "def");
        assert_eq!(def.schema, "db");
        assert_eq!(def.table, "users");
        assert_eq!(def.org_table, "users");
        assert_eq!(def.name, "username");
        assert_eq!(def.org_name, "username");
        assert_eq!(def.charset, 33);
        assert_eq!(def.max_size, 255);
        assert_eq!(def.type_id, 0xfd);
        assert_eq!(def.flags, ColumnFlags::NOT_NULL);
        assert_eq!(def.decimals, 0);
    }

    #[test]
    fn it_rejects_a_truncated_definition() {
        assert!(ColumnDefinition::decode(Bytes::from_static(b"\x03def\x02db")).is_err());
    }
}
