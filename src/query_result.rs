use std::fmt::{self, Debug, Formatter};

use crate::protocol::OkPacket;
use crate::Status;

/// Execution result of a statement that completed without producing a
/// result set (`INSERT`, `UPDATE`, DDL, ...).
pub struct MySqlQueryResult(pub(crate) OkPacket);

impl MySqlQueryResult {
    /// The number of rows changed, deleted, or inserted by the statement.
    pub fn rows_affected(&self) -> u64 {
        self.0.affected_rows
    }

    /// The id generated for an `AUTO_INCREMENT` column by an `INSERT`;
    /// a valid id is never zero.
    pub fn inserted_id(&self) -> Option<u64> {
        if self.0.last_insert_id == 0 {
            None
        } else {
            Some(self.0.last_insert_id)
        }
    }

    /// The number of errors, warnings, and notes the statement generated.
    pub fn warnings(&self) -> u16 {
        self.0.warnings
    }

    /// Server status flags reported with the result.
    pub fn status(&self) -> Status {
        self.0.status
    }
}

impl Debug for MySqlQueryResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MySqlQueryResult")
            .field("rows_affected", &self.rows_affected())
            .field("inserted_id", &self.inserted_id())
            .field("warnings", &self.warnings())
            .finish()
    }
}
