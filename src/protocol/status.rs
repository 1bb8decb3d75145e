// https://dev.mysql.com/doc/internals/en/status-flags.html
// https://mariadb.com/kb/en/library/ok_packet/#server-status-flag
bitflags::bitflags! {
    /// Server status flags, reported in the greeting and at the end of
    /// every command.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Status: u16 {
        /// A transaction is currently active.
        const SERVER_STATUS_IN_TRANS = 1;

        /// Autocommit mode is set.
        const SERVER_STATUS_AUTOCOMMIT = 2;

        /// More results exist (more packets will follow).
        const SERVER_MORE_RESULTS_EXISTS = 8;

        const SERVER_QUERY_NO_GOOD_INDEX_USED = 16;

        const SERVER_QUERY_NO_INDEX_USED = 32;

        /// When using COM_STMT_FETCH, indicates that a cursor exists.
        const SERVER_STATUS_CURSOR_EXISTS = 64;

        /// When using COM_STMT_FETCH, indicates the cursor is exhausted.
        const SERVER_STATUS_LAST_ROW_SENT = 128;

        /// The current database was dropped.
        const SERVER_STATUS_DB_DROPPED = 256;

        /// Backslash is not an escape character.
        const SERVER_STATUS_NO_BACKSLASH_ESCAPES = 512;

        const SERVER_STATUS_METADATA_CHANGED = 1024;

        const SERVER_QUERY_WAS_SLOW = 2048;

        const SERVER_PS_OUT_PARAMS = 4096;

        /// A read-only transaction is currently active.
        const SERVER_STATUS_IN_TRANS_READONLY = 8192;

        /// Connection state information has changed.
        const SERVER_SESSION_STATE_CHANGED = 16384;
    }
}
