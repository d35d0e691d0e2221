use getset::Getters;
use indexmap::IndexMap;
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::error::{Error, Result};
use crate::record::{RawRecord, Record, Row};
use crate::types::{Column, Header};

/// Where each named column sits in a raw row.
///
/// Every column after FORMAT is a sample. For repeated names the first
/// occurrence wins, both for fixed columns and samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Layout {
    fixed: Vec<usize>,
    samples: IndexMap<String, usize>,
}

impl Layout {
    pub(crate) fn resolve(header: &Header) -> Result<Self> {
        let fixed = Column::iter()
            .map(|column| {
                header
                    .position(column.as_ref())
                    .ok_or_else(|| Error::MissingColumn(column.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        let first_sample = fixed[Column::Format as usize] + 1;
        let mut samples = IndexMap::new();
        for (idx, name) in header.columns().iter().enumerate().skip(first_sample) {
            samples.entry(name.clone()).or_insert(idx);
        }
        Ok(Layout { fixed, samples })
    }

    fn index(&self, column: Column) -> usize {
        self.fixed[column as usize]
    }

    pub(crate) fn sample_names(&self) -> impl Iterator<Item = &String> {
        self.samples.keys()
    }

    /// Column names in the order [`VariantRecord`] lays out its fields.
    pub(crate) fn columns(&self) -> Vec<String> {
        Column::iter()
            .map(|column| column.to_string())
            .chain(self.sample_names().cloned())
            .collect()
    }
}

/// One fully typed variant line.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct VariantRecord {
    pub(crate) chrom: String,
    pub(crate) pos: String,
    pub(crate) id: String,
    pub(crate) ref_allele: String,
    pub(crate) alt_alleles: String,
    #[getset(get = "pub")]
    pub(crate) qual: String,
    #[getset(get = "pub")]
    pub(crate) filter: String,
    #[getset(get = "pub")]
    pub(crate) info: String,
    /// Colon-separated names describing each sample value.
    #[getset(get = "pub")]
    pub(crate) format: String,
    /// Sample name to genotype string, in header order.
    #[getset(get = "pub")]
    pub(crate) samples: IndexMap<String, String>,
}

impl VariantRecord {
    pub(crate) fn from_raw(layout: &Layout, raw: &RawRecord) -> Result<Self> {
        let value = |idx: usize| {
            raw.value(idx)
                .map(str::to_owned)
                .ok_or_else(|| Error::FieldCount {
                    line: raw.line(),
                    expected: idx + 1,
                    actual: raw.len(),
                })
        };
        let samples = layout
            .samples
            .iter()
            .map(|(name, &idx)| -> Result<(String, String)> {
                Ok((name.clone(), value(idx)?))
            })
            .collect::<Result<IndexMap<_, _>>>()?;
        Ok(VariantRecord {
            chrom: value(layout.index(Column::Chrom))?,
            pos: value(layout.index(Column::Pos))?,
            id: value(layout.index(Column::Id))?,
            ref_allele: value(layout.index(Column::Ref))?,
            alt_alleles: value(layout.index(Column::Alt))?,
            qual: value(layout.index(Column::Qual))?,
            filter: value(layout.index(Column::Filter))?,
            info: value(layout.index(Column::Info))?,
            format: value(layout.index(Column::Format))?,
            samples,
        })
    }

    /// FORMAT split into its field names.
    pub fn format_keys(&self) -> Vec<&str> {
        self.format.split(':').collect_vec()
    }
}

impl Row for VariantRecord {
    fn fields(&self) -> Vec<&str> {
        let fixed = [
            &self.chrom,
            &self.pos,
            &self.id,
            &self.ref_allele,
            &self.alt_alleles,
            &self.qual,
            &self.filter,
            &self.info,
            &self.format,
        ];
        fixed
            .iter()
            .map(|s| s.as_str())
            .chain(self.samples.values().map(String::as_str))
            .collect()
    }
}

impl Record for VariantRecord {
    fn chrom(&self) -> &str {
        &self.chrom
    }

    fn pos(&self) -> &str {
        &self.pos
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn ref_allele(&self) -> &str {
        &self.ref_allele
    }

    fn alt_alleles(&self) -> &str {
        &self.alt_alleles
    }

    fn sample(&self, name: &str) -> Option<&str> {
        self.samples.get(name).map(String::as_str)
    }
}
