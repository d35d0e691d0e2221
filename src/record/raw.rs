use getset::{CopyGetters, Getters};

use crate::record::Row;

/// A data line split on tabs, before any column is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct RawRecord {
    /// 1-based line number in the source.
    #[getset(get_copy = "pub")]
    pub(crate) line: usize,
    #[getset(get = "pub")]
    pub(crate) values: Vec<String>,
}

impl RawRecord {
    pub(crate) fn new(line: usize, values: Vec<String>) -> Self {
        RawRecord { line, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, idx: usize) -> Option<&str> {
        self.values.get(idx).map(String::as_str)
    }
}

impl Row for RawRecord {
    fn fields(&self) -> Vec<&str> {
        self.values.iter().map(String::as_str).collect()
    }
}
