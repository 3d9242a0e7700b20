use std::fmt;

use crate::db::tables;

/// The two per-user JSON documents the client persists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobKind {
    /// Learning progress (scores per unit, category and exercise)
    Progress,
    /// Last screen/unit the user was on
    Navigation,
}

impl BlobKind {
    /// Table holding documents of this kind
    pub fn table(self) -> &'static str {
        match self {
            BlobKind::Progress => tables::USER_PROGRESS,
            BlobKind::Navigation => tables::USER_NAVIGATION,
        }
    }

    /// Text column holding the serialized document
    pub fn data_column(self) -> &'static str {
        match self {
            BlobKind::Progress => tables::PROGRESS_DATA,
            BlobKind::Navigation => tables::NAVIGATION_DATA,
        }
    }
}

impl fmt::Display for BlobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlobKind::Progress => f.write_str("progress"),
            BlobKind::Navigation => f.write_str("navigation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_use_distinct_storage() {
        assert_ne!(BlobKind::Progress.table(), BlobKind::Navigation.table());
        assert_ne!(
            BlobKind::Progress.data_column(),
            BlobKind::Navigation.data_column()
        );
    }
}
