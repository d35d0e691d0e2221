mod decomposed;
mod projected;
mod raw;
mod variant;

use crate::error::{Error, Result};
pub use decomposed::{AlleleCounts, DecomposedGenotype, DecomposedVariant};
pub use projected::ProjectedVariant;
pub use raw::RawRecord;
pub(crate) use variant::Layout;
pub use variant::VariantRecord;

/// Anything that can be written out as one line of a table.
pub trait Row {
    /// Field values in the same order as the owning table's columns.
    fn fields(&self) -> Vec<&str>;
}

/// A row with the fixed variant columns resolved.
pub trait Record: Row {
    fn chrom(&self) -> &str;

    fn pos(&self) -> &str;

    fn id(&self) -> &str;

    fn ref_allele(&self) -> &str;

    /// The ALT column as written, i.e. comma-joined for multi-allelic sites.
    fn alt_alleles(&self) -> &str;

    /// Genotype string of sample `name`, if this record carries that sample.
    fn sample(&self, name: &str) -> Option<&str>;

    /// Keeps CHROM, POS, ID, REF, ALT and the genotype of `sample`.
    fn project(&self, sample: &str) -> Result<ProjectedVariant> {
        let genotype = self
            .sample(sample)
            .ok_or_else(|| Error::MissingColumn(sample.to_owned()))?;
        Ok(ProjectedVariant {
            chrom: self.chrom().to_owned(),
            pos: self.pos().to_owned(),
            id: self.id().to_owned(),
            ref_allele: self.ref_allele().to_owned(),
            alt_alleles: self.alt_alleles().to_owned(),
            sample_name: sample.to_owned(),
            genotype: genotype.to_owned(),
        })
    }
}
