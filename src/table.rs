use getset::Getters;
use tracing::debug;

use crate::error::{Error, Result};
use crate::record::{Layout, RawRecord, VariantRecord};
use crate::types::Header;

/// An ordered set of records sharing one header.
///
/// Tables are never modified once built; every filter hands back a new one.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct VariantTable<R> {
    header: Header,
    records: Vec<R>,
}

impl<R> VariantTable<R> {
    pub(crate) fn new(header: Header, records: Vec<R>) -> Self {
        VariantTable { header, records }
    }

    pub fn columns(&self) -> &[String] {
        self.header.columns()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    /// Fails if rows exist without any column names to go with them.
    pub(crate) fn require_header(&self) -> Result<()> {
        if self.header.columns().is_empty() && !self.records.is_empty() {
            return Err(Error::MissingHeader {
                rows: self.records.len(),
            });
        }
        Ok(())
    }
}

impl<'a, R> IntoIterator for &'a VariantTable<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl VariantTable<RawRecord> {
    /// Resolves CHROM through FORMAT and the sample columns by name.
    ///
    /// This is where a source without a header line, or one lacking a
    /// required column, is rejected.
    pub fn typed(&self) -> Result<VariantTable<VariantRecord>> {
        self.require_header()?;
        let layout = Layout::resolve(&self.header)?;
        let records = self
            .records
            .iter()
            .map(|raw| VariantRecord::from_raw(&layout, raw))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            records = records.len(),
            samples = layout.sample_names().count(),
            "resolved variant columns"
        );
        Ok(VariantTable::new(
            self.header.with_columns(layout.columns()),
            records,
        ))
    }
}
