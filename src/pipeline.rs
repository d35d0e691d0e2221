//! One call per CLI command: parse a file and run it through the filters.
//!
//! None of these validate their arguments; see [`crate::validate`].

use std::path::Path;

use crate::error::Result;
use crate::filter::{
    by_chromosome_and_nucleotide_for_sample, by_chromosome_for_sample, decompose,
    significance_filter,
};
use crate::reader::parse;
use crate::record::{DecomposedVariant, ProjectedVariant, RawRecord};
use crate::table::VariantTable;
use crate::types::FilterOptions;

pub fn parse_all_snps<P: AsRef<Path>>(path: P) -> Result<VariantTable<RawRecord>> {
    parse(path)
}

pub fn parse_snps_by_chromosome<P: AsRef<Path>>(
    path: P,
    chromosome: &str,
    options: &FilterOptions,
) -> Result<VariantTable<ProjectedVariant>> {
    let table = parse(path)?.typed()?;
    by_chromosome_for_sample(&table, chromosome, &options.sample)
}

pub fn parse_snps_by_chromosome_and_nucleotide<P: AsRef<Path>>(
    path: P,
    chromosome: &str,
    nucleotide: &str,
    options: &FilterOptions,
) -> Result<VariantTable<ProjectedVariant>> {
    let table = parse(path)?.typed()?;
    by_chromosome_and_nucleotide_for_sample(&table, chromosome, nucleotide, &options.sample)
}

/// Variants on `chromosome` with `nucleotide` as REF or ALT whose sample
/// p-value is below `options.threshold`.
pub fn parse_significant_snps<P: AsRef<Path>>(
    path: P,
    chromosome: &str,
    nucleotide: &str,
    options: &FilterOptions,
) -> Result<VariantTable<DecomposedVariant>> {
    let candidates =
        parse_snps_by_chromosome_and_nucleotide(path, chromosome, nucleotide, options)?;
    significance_filter(&decompose(&candidates)?, options.threshold)
}
