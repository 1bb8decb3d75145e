use bytes::{Buf, Bytes};
use memchr::memchr;

use crate::error::{Error, Result};

/// Extends [`Bytes`] with the MySQL wire primitives: length-encoded
/// integers and strings, and nul-terminated strings.
///
/// <https://dev.mysql.com/doc/internals/en/integer.html#packet-Protocol::LengthEncodedInteger>
pub(crate) trait MySqlBufExt {
    /// Read a length-encoded integer.
    ///
    /// The lead byte either holds the literal value (below 251) or selects
    /// the width of the length field that follows: 0xfc + 2 bytes,
    /// 0xfd + 4 bytes (only the low 3 are significant), 0xfe + 8 bytes.
    /// The NULL marker (0xfb) is valid for strings, not for bare integers.
    fn get_uint_lenenc(&mut self) -> Result<u64>;

    /// Read a length-encoded byte string; a lead byte of 0xfb is the NULL
    /// marker and yields `None`.
    fn get_bytes_lenenc(&mut self) -> Result<Option<Bytes>>;

    /// Read a length-encoded string as UTF-8.
    fn get_str_lenenc(&mut self) -> Result<Option<String>>;

    /// Read a nul-terminated byte string, consuming the terminator.
    fn get_bytes_nul(&mut self) -> Result<Bytes>;

    /// Read a nul-terminated string as UTF-8.
    fn get_str_nul(&mut self) -> Result<String>;
}

impl MySqlBufExt for Bytes {
    fn get_uint_lenenc(&mut self) -> Result<u64> {
        if self.is_empty() {
            return Err(Error::malformed_packet(
                "expected length-encoded integer, packet is exhausted",
            ));
        }

        match self.get_u8() {
            0xfb => Err(Error::malformed_packet(
                "unexpected NULL marker (0xfb) in a length-encoded integer",
            )),

            0xfc => {
                if self.remaining() < 2 {
                    return Err(Error::malformed_packet("length-encoded integer is truncated"));
                }

                Ok(u64::from(self.get_u16_le()))
            }

            0xfd => {
                if self.remaining() < 4 {
                    return Err(Error::malformed_packet("length-encoded integer is truncated"));
                }

                // 3 significant bytes carried in a 4-byte field; the high
                // byte is ignored
                let value = self.get_uint_le(3);
                self.advance(1);

                Ok(value)
            }

            0xfe => {
                if self.remaining() < 8 {
                    return Err(Error::malformed_packet("length-encoded integer is truncated"));
                }

                Ok(self.get_u64_le())
            }

            value => Ok(u64::from(value)),
        }
    }

    fn get_bytes_lenenc(&mut self) -> Result<Option<Bytes>> {
        if self.is_empty() {
            return Err(Error::malformed_packet(
                "expected length-encoded string, packet is exhausted",
            ));
        }

        if self[0] == 0xfb {
            self.advance(1);
            return Ok(None);
        }

        let len = self.get_uint_lenenc()?;
        let len = usize::try_from(len)
            .map_err(|_| Error::malformed_packet(format!("string length overflows usize: {len}")))?;

        if self.remaining() < len {
            return Err(Error::malformed_packet(format!(
                "length-encoded string declares {len} bytes, only {} available",
                self.remaining()
            )));
        }

        Ok(Some(self.split_to(len)))
    }

    fn get_str_lenenc(&mut self) -> Result<Option<String>> {
        self.get_bytes_lenenc()?
            .map(|bytes| {
                String::from_utf8(bytes.to_vec())
                    .map_err(|_| Error::malformed_packet("length-encoded string is not UTF-8"))
            })
            .transpose()
    }

    fn get_bytes_nul(&mut self) -> Result<Bytes> {
        let nul = memchr(b'\0', self)
            .ok_or_else(|| Error::malformed_packet("expected nul-terminated string"))?;

        Ok(self.split_to(nul + 1).slice(..nul))
    }

    fn get_str_nul(&mut self) -> Result<String> {
        let bytes = self.get_bytes_nul()?;

        String::from_utf8(bytes.to_vec())
            .map_err(|_| Error::malformed_packet("nul-terminated string is not UTF-8"))
    }
}
