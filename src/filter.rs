use itertools::Itertools;
use tracing::debug;

use crate::error::{Error, Result};
use crate::record::{DecomposedGenotype, DecomposedVariant, ProjectedVariant, Record};
use crate::table::VariantTable;
use crate::types::{Column, GenotypeField, DEFAULT_SAMPLE};

/// Rows whose CHROM is exactly `chromosome`, narrowed to CHROM, POS, ID, REF,
/// ALT and the NORMAL sample.
pub fn by_chromosome<R: Record>(
    table: &VariantTable<R>,
    chromosome: &str,
) -> Result<VariantTable<ProjectedVariant>> {
    by_chromosome_for_sample(table, chromosome, DEFAULT_SAMPLE)
}

/// Like [`by_chromosome`], keeping `sample` as the one genotype column.
///
/// The comparison is case-sensitive: `X` and `x` are different chromosomes
/// here even though validation accepts both.
pub fn by_chromosome_for_sample<R: Record>(
    table: &VariantTable<R>,
    chromosome: &str,
    sample: &str,
) -> Result<VariantTable<ProjectedVariant>> {
    table.require_header()?;
    if table.header().sample_position(sample).is_none() {
        return Err(Error::MissingColumn(sample.to_owned()));
    }
    let records = table
        .iter()
        .filter(|record| record.chrom() == chromosome)
        .map(|record| record.project(sample))
        .collect::<Result<Vec<_>>>()?;
    debug!(
        chromosome,
        sample,
        kept = records.len(),
        of = table.len(),
        "filtered by chromosome"
    );
    let columns = Column::PROJECTED
        .iter()
        .map(|column| column.to_string())
        .chain(std::iter::once(sample.to_owned()))
        .collect_vec();
    Ok(VariantTable::new(
        table.header().with_columns(columns),
        records,
    ))
}

/// [`by_chromosome`], then rows whose REF or ALT is exactly `nucleotide`.
///
/// ALT is compared as a whole, so a multi-allelic `A,T` matches neither `A`
/// nor `T`.
pub fn by_chromosome_and_nucleotide<R: Record>(
    table: &VariantTable<R>,
    chromosome: &str,
    nucleotide: &str,
) -> Result<VariantTable<ProjectedVariant>> {
    by_chromosome_and_nucleotide_for_sample(table, chromosome, nucleotide, DEFAULT_SAMPLE)
}

pub fn by_chromosome_and_nucleotide_for_sample<R: Record>(
    table: &VariantTable<R>,
    chromosome: &str,
    nucleotide: &str,
    sample: &str,
) -> Result<VariantTable<ProjectedVariant>> {
    let on_chromosome = by_chromosome_for_sample(table, chromosome, sample)?;
    let records = on_chromosome
        .iter()
        .filter(|record| record.ref_allele() == nucleotide || record.alt_alleles() == nucleotide)
        .cloned()
        .collect_vec();
    debug!(
        nucleotide,
        kept = records.len(),
        of = on_chromosome.len(),
        "filtered by nucleotide"
    );
    Ok(VariantTable::new(on_chromosome.header().clone(), records))
}

/// Splits each row's sample genotype into TYPE, A1..T1, A2..T2 and PVAL,
/// appended as `<sample>_<FIELD>` columns.
///
/// Every genotype must have exactly ten `:`-separated parts, whatever the
/// row's FORMAT said.
pub fn decompose(
    table: &VariantTable<ProjectedVariant>,
) -> Result<VariantTable<DecomposedVariant>> {
    let records = table
        .iter()
        .map(|variant| -> Result<DecomposedVariant> {
            Ok(DecomposedVariant {
                genotype: DecomposedGenotype::new(variant.sample_name(), variant.genotype())?,
                variant: variant.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    // projected tables always end in their sample column
    let mut columns = table.columns().to_vec();
    if let Some(sample) = columns.last().cloned() {
        columns.extend(GenotypeField::column_names(&sample));
    }
    debug!(records = records.len(), "decomposed genotypes");
    Ok(VariantTable::new(table.header().with_columns(columns), records))
}

/// Rows whose PVAL is strictly below `threshold`.
///
/// Use [`crate::DEFAULT_PVALUE_THRESHOLD`] for the customary 0.05. A PVAL
/// that is not a number aborts the whole filter.
pub fn significance_filter(
    table: &VariantTable<DecomposedVariant>,
    threshold: f64,
) -> Result<VariantTable<DecomposedVariant>> {
    let mut records = Vec::new();
    for record in table {
        if record.pval()? < threshold {
            records.push(record.clone());
        }
    }
    debug!(
        threshold,
        kept = records.len(),
        of = table.len(),
        "filtered by significance"
    );
    Ok(VariantTable::new(table.header().clone(), records))
}
