use std::str::FromStr;

use getset::Getters;
use multimap::MultiMap;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

pub(crate) const META_MARKER: &str = "##";
pub(crate) const HEADER_MARKER: &str = "#";
pub(crate) const GENOTYPE_SEPARATOR: char = ':';
pub(crate) const VCF_SUFFIX: &str = ".vcf";

/// Sample column used as the decomposition source unless told otherwise.
pub const DEFAULT_SAMPLE: &str = "NORMAL";

/// Rows with a p-value strictly below this are considered significant.
pub const DEFAULT_PVALUE_THRESHOLD: f64 = 0.05;

/// Number of colon-separated parts a decomposable genotype must have.
pub const GENOTYPE_ARITY: usize = 10;

/// Fixed, non-sample columns of a variant line, in file order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, EnumString, Display, EnumIter, AsRefStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Column {
    Chrom,
    Pos,
    Id,
    Ref,
    Alt,
    Qual,
    Filter,
    Info,
    Format,
}

impl Column {
    /// Columns kept by the chromosome filter, ahead of the sample column.
    pub const PROJECTED: [Column; 5] = [
        Column::Chrom,
        Column::Pos,
        Column::Id,
        Column::Ref,
        Column::Alt,
    ];
}

/// Positional names of the ten parts of a decomposed genotype string.
///
/// The layout is assumed, not read from FORMAT: `TYPE`, forward allele counts
/// `A1 C1 G1 T1`, reverse allele counts `A2 C2 G2 T2`, and the p-value `PVAL`.
#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Hash,
    EnumString,
    Display,
    EnumIter,
    AsRefStr,
    IntoPrimitive,
    TryFromPrimitive,
)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u8)]
pub enum GenotypeField {
    Type = 0,
    A1 = 1,
    C1 = 2,
    G1 = 3,
    T1 = 4,
    A2 = 5,
    C2 = 6,
    G2 = 7,
    T2 = 8,
    Pval = 9,
}

impl GenotypeField {
    pub fn index(self) -> usize {
        u8::from(self) as usize
    }

    /// Output column name for this field of `sample`, e.g. `NORMAL_PVAL`.
    pub fn column_name(self, sample: &str) -> String {
        format!("{}_{}", sample, self)
    }

    pub fn column_names(sample: &str) -> impl Iterator<Item = String> + '_ {
        GenotypeField::iter().map(move |field| field.column_name(sample))
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, EnumString, Display, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

#[derive(Debug, Clone, Default, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct Header {
    /// `##key=value` lines, in file order per key.
    pub(crate) meta: MultiMap<String, String>,
    /// Column names from the `#` line; empty if the source had none.
    pub(crate) columns: Vec<String>,
}

impl Header {
    pub fn new(columns: Vec<String>) -> Self {
        Header {
            meta: MultiMap::new(),
            columns,
        }
    }

    /// Same meta-information, different columns.
    pub(crate) fn with_columns(&self, columns: Vec<String>) -> Self {
        Header {
            meta: self.meta.clone(),
            columns,
        }
    }

    /// Position of the first column named `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Position of the sample column `name`.
    ///
    /// Samples are the columns after FORMAT. Narrowed headers have no
    /// FORMAT, and there any column that is not a fixed variant column
    /// counts.
    pub fn sample_position(&self, name: &str) -> Option<usize> {
        match self.position(Column::Format.as_ref()) {
            Some(format) => self
                .columns
                .iter()
                .skip(format + 1)
                .position(|c| c == name)
                .map(|idx| idx + format + 1),
            None if Column::from_str(name).is_ok() => None,
            None => self.position(name),
        }
    }
}

/// Settings shared by the filter pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    /// Sample column kept by the projection and decomposed for p-values.
    pub sample: String,
    /// Upper bound (exclusive) on PVAL for a row to count as significant.
    pub threshold: f64,
}

impl Default for FilterOptions {
    fn default() -> Self {
        FilterOptions {
            sample: DEFAULT_SAMPLE.to_owned(),
            threshold: DEFAULT_PVALUE_THRESHOLD,
        }
    }
}
