use crate::error::{Error, Result};

/// The type code a column declares in its definition packet.
///
/// The text protocol ships every value as an untyped byte string; the type
/// code tells the caller how to interpret those bytes.
///
/// <https://dev.mysql.com/doc/internals/en/com-query-response.html#column-type>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MySqlTypeId(pub(crate) u8);

impl MySqlTypeId {
    pub const DECIMAL: Self = Self(0x00);
    pub const TINY: Self = Self(0x01);
    pub const SHORT: Self = Self(0x02);
    pub const LONG: Self = Self(0x03);
    pub const FLOAT: Self = Self(0x04);
    pub const DOUBLE: Self = Self(0x05);
    pub const NULL: Self = Self(0x06);
    pub const TIMESTAMP: Self = Self(0x07);
    pub const LONGLONG: Self = Self(0x08);
    pub const INT24: Self = Self(0x09);
    pub const DATE: Self = Self(0x0a);
    pub const TIME: Self = Self(0x0b);
    pub const DATETIME: Self = Self(0x0c);
    pub const YEAR: Self = Self(0x0d);
    pub const NEWDATE: Self = Self(0x0e);
    pub const VARCHAR: Self = Self(0x0f);
    pub const BIT: Self = Self(0x10);
    pub const NEWDECIMAL: Self = Self(0xf6);
    pub const ENUM: Self = Self(0xf7);
    pub const SET: Self = Self(0xf8);
    pub const TINY_BLOB: Self = Self(0xf9);
    pub const MEDIUM_BLOB: Self = Self(0xfa);
    pub const LONG_BLOB: Self = Self(0xfb);
    pub const BLOB: Self = Self(0xfc);
    pub const VAR_STRING: Self = Self(0xfd);
    pub const STRING: Self = Self(0xfe);
    pub const GEOMETRY: Self = Self(0xff);

    /// The raw wire value of this type code.
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// The symbolic name for this type code, e.g. `var_string`.
    ///
    /// Fails with [`Error::UnknownFieldType`] for codes outside the
    /// documented table; the caller decides on a fallback.
    pub fn name(self) -> Result<&'static str> {
        Ok(match self {
            Self::DECIMAL => "decimal",
            Self::TINY => "tiny",
            Self::SHORT => "short",
            Self::LONG => "long",
            Self::FLOAT => "float",
            Self::DOUBLE => "double",
            Self::NULL => "null",
            Self::TIMESTAMP => "timestamp",
            Self::LONGLONG => "longlong",
            Self::INT24 => "int24",
            Self::DATE => "date",
            Self::TIME => "time",
            Self::DATETIME => "datetime",
            Self::YEAR => "year",
            Self::NEWDATE => "newdate",
            Self::VARCHAR => "varchar",
            Self::BIT => "bit",
            Self::NEWDECIMAL => "newdecimal",
            Self::ENUM => "enum",
            Self::SET => "set",
            Self::TINY_BLOB => "tiny_blob",
            Self::MEDIUM_BLOB => "medium_blob",
            Self::LONG_BLOB => "long_blob",
            Self::BLOB => "blob",
            Self::VAR_STRING => "var_string",
            Self::STRING => "string",
            Self::GEOMETRY => "geometry",

            _ => return Err(Error::UnknownFieldType(self.0)),
        })
    }
}
