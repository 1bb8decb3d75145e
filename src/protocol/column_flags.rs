// https://dev.mysql.com/doc/dev/mysql-server/8.0.12/group__group__cs__column__definition__flags.html
// https://mariadb.com/kb/en/library/resultset/#field-detail-flag
bitflags::bitflags! {
    /// Attributes a column declares in its definition packet.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ColumnFlags: u16 {
        /// The field cannot be NULL.
        const NOT_NULL = 1;

        /// The field is part of a primary key.
        const PRIMARY_KEY = 2;

        /// The field is part of a unique key.
        const UNIQUE_KEY = 4;

        /// The field is part of a multi-part unique or primary key.
        const MULTIPLE_KEY = 8;

        /// The field is a blob.
        const BLOB = 16;

        /// The field is unsigned.
        const UNSIGNED = 32;

        /// The field is zero filled.
        const ZEROFILL = 64;

        /// The field has a binary collation.
        const BINARY = 128;

        /// The field is an enumeration.
        const ENUM = 256;

        /// The field auto-increments.
        const AUTO_INCREMENT = 512;

        /// The field is a timestamp.
        const TIMESTAMP = 1024;

        /// The field is a set.
        const SET = 2048;

        /// The field has no default value.
        const NO_DEFAULT_VALUE = 4096;

        /// The field is set to NOW on UPDATE.
        const ON_UPDATE_NOW = 8192;

        /// The field is a number.
        const NUM = 32768;
    }
}
