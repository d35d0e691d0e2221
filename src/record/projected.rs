use getset::Getters;

use crate::error::{Error, Result};
use crate::record::{Record, Row};

/// A variant narrowed to CHROM, POS, ID, REF, ALT and one sample.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ProjectedVariant {
    pub(crate) chrom: String,
    pub(crate) pos: String,
    pub(crate) id: String,
    pub(crate) ref_allele: String,
    pub(crate) alt_alleles: String,
    /// Name of the sample column that was kept.
    #[getset(get = "pub")]
    pub(crate) sample_name: String,
    #[getset(get = "pub")]
    pub(crate) genotype: String,
}

impl Row for ProjectedVariant {
    fn fields(&self) -> Vec<&str> {
        vec![
            self.chrom.as_str(),
            self.pos.as_str(),
            self.id.as_str(),
            self.ref_allele.as_str(),
            self.alt_alleles.as_str(),
            self.genotype.as_str(),
        ]
    }
}

impl Record for ProjectedVariant {
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
        if name == self.sample_name {
            Some(&self.genotype)
        } else {
            None
        }
    }

    fn project(&self, sample: &str) -> Result<ProjectedVariant> {
        if sample == self.sample_name {
            Ok(self.clone())
        } else {
            Err(Error::MissingColumn(sample.to_owned()))
        }
    }
}
