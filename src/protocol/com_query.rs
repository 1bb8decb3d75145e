use crate::io::Encode;

/// `COM_QUERY`: execute a statement immediately, in text mode.
///
/// <https://dev.mysql.com/doc/internals/en/com-query.html>
#[derive(Debug)]
pub(crate) struct ComQuery<'a>(pub(crate) &'a str);

impl Encode for ComQuery<'_> {
    fn encode(&self, buf: &mut Vec<u8>) {
        buf.push(0x03);
        buf.extend_from_slice(self.0.as_bytes());
    }
}
