/// Extends `Vec<u8>` with the encode side of the MySQL wire primitives.
pub(crate) trait MySqlBufMutExt {
    /// Write a byte string behind the minimal-width length prefix that
    /// covers it: a bare length byte up to 250, then the 0xfc/0xfd/0xfe
    /// forms for progressively longer values.
    fn put_bytes_lenenc(&mut self, value: &[u8]);

    /// Write a string followed by a nul terminator.
    fn put_str_nul(&mut self, value: &str);
}

impl MySqlBufMutExt for Vec<u8> {
    fn put_bytes_lenenc(&mut self, value: &[u8]) {
        let len = value.len();

        if len <= 250 {
            self.push(len as u8);
        } else if len <= 32_767 {
            self.push(0xfc);
            self.extend_from_slice(&(len as u16).to_le_bytes());
        } else if len <= 2_147_483_647 {
            self.push(0xfd);
            self.extend_from_slice(&(len as u32).to_le_bytes());
        } else {
            self.push(0xfe);
            self.extend_from_slice(&(len as u64).to_le_bytes());
        }

        self.extend_from_slice(value);
    }

    fn put_str_nul(&mut self, value: &str) {
        self.extend_from_slice(value.as_bytes());
        self.push(0);
    }
}
