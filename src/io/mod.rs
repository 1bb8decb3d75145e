use bytes::Bytes;

mod buf;
mod buf_mut;

pub(crate) use buf::MySqlBufExt;
pub(crate) use buf_mut::MySqlBufMutExt;

use crate::error::Result;

/// Deserialize a packet payload into a protocol structure.
pub(crate) trait Decode: Sized {
    fn decode(buf: Bytes) -> Result<Self>;
}

/// Serialize a protocol structure into a packet payload.
pub(crate) trait Encode {
    fn encode(&self, buf: &mut Vec<u8>);
}
