// https://dev.mysql.com/doc/internals/en/capability-flags.html#packet-Protocol::CapabilityFlags
// https://mariadb.com/kb/en/library/connection/#capabilities
bitflags::bitflags! {
    /// Optional protocol features, negotiated during the handshake.
    ///
    /// The server advertises its set in the greeting packet; the client
    /// echoes back the subset it will use.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u32 {
        /// Use the improved version of "old password auth".
        const LONG_PASSWORD = 1;

        /// Send found (read: matched) rows instead of affected rows.
        const FOUND_ROWS = 2;

        /// Longer flags for column metadata.
        const LONG_FLAG = 4;

        /// A database (schema) name can be specified on connect.
        const CONNECT_WITH_DB = 8;

        /// Do not permit `database.table.column`.
        const NO_SCHEMA = 16;

        /// Compression protocol supported. Always cleared by this client.
        const COMPRESS = 32;

        /// Legacy flag for special ODBC handling; no effect since MySQL 3.22.
        const ODBC = 64;

        /// Enable `LOAD DATA LOCAL`.
        const LOCAL_FILES = 128;

        /// The SQL parser may ignore spaces before `(`.
        const IGNORE_SPACE = 256;

        /// Uses the 4.1+ protocol. Required by this client.
        const PROTOCOL_41 = 512;

        /// This is an interactive client; `wait_interactive_timeout`
        /// applies instead of `wait_timeout`.
        const INTERACTIVE = 1024;

        /// Use SSL encryption for this session.
        const SSL = 2048;

        /// Do not issue SIGPIPE if network failures occur.
        const IGNORE_SIGPIPE = 4096;

        /// EOF packets will contain transaction status flags.
        const TRANSACTIONS = 8192;

        const RESERVED = 16384;

        /// Support native 4.1+ authentication.
        const SECURE_CONNECTION = 32768;

        /// Can handle multiple statements per query.
        const MULTI_STATEMENTS = 65536;

        /// Can send multiple result sets for a query.
        const MULTI_RESULTS = 131_072;
    }
}

impl Capabilities {
    /// Render the set bits as a human-readable list, for diagnostics.
    pub fn names(&self) -> String {
        self.iter_names().map(|(name, _)| name).collect::<Vec<_>>().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::Capabilities;

    #[test]
    fn it_lists_the_set_bits_by_name() {
        let capabilities = Capabilities::PROTOCOL_41 | Capabilities::SECURE_CONNECTION;

        assert_eq!(capabilities.names(), "PROTOCOL_41, SECURE_CONNECTION");
    }

    #[test]
    fn it_ignores_unknown_bits() {
        let capabilities = Capabilities::from_bits_truncate(512 | 0x4000_0000);

        assert_eq!(capabilities, Capabilities::PROTOCOL_41);
    }
}
