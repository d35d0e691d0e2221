use getset::Getters;
use itertools::Itertools;

use crate::error::{Error, Result};
use crate::record::{ProjectedVariant, Record, Row};
use crate::types::{GenotypeField, GENOTYPE_ARITY, GENOTYPE_SEPARATOR};

/// Allele depths for one strand, as written in the genotype string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlleleCounts<'a> {
    pub a: &'a str,
    pub c: &'a str,
    pub g: &'a str,
    pub t: &'a str,
}

/// A genotype string split into the ten fields of [`GenotypeField`].
///
/// The parts are kept verbatim; only PVAL is ever interpreted, and only
/// when asked for via [`DecomposedGenotype::pval`]. The row's FORMAT column
/// plays no part in this layout.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct DecomposedGenotype {
    #[getset(get = "pub")]
    sample: String,
    parts: [String; GENOTYPE_ARITY],
}

impl DecomposedGenotype {
    /// Splits `value` on `:`; anything other than exactly ten parts is a
    /// schema error.
    pub fn new(sample: &str, value: &str) -> Result<Self> {
        let parts = value
            .split(GENOTYPE_SEPARATOR)
            .map(str::to_owned)
            .collect_vec();
        let actual = parts.len();
        let parts: [String; GENOTYPE_ARITY] =
            parts.try_into().map_err(|_| Error::GenotypeArity {
                sample: sample.to_owned(),
                value: value.to_owned(),
                expected: GENOTYPE_ARITY,
                actual,
            })?;
        Ok(DecomposedGenotype {
            sample: sample.to_owned(),
            parts,
        })
    }

    pub fn get(&self, field: GenotypeField) -> &str {
        &self.parts[field.index()]
    }

    pub fn kind(&self) -> &str {
        self.get(GenotypeField::Type)
    }

    pub fn forward(&self) -> AlleleCounts {
        AlleleCounts {
            a: self.get(GenotypeField::A1),
            c: self.get(GenotypeField::C1),
            g: self.get(GenotypeField::G1),
            t: self.get(GenotypeField::T1),
        }
    }

    pub fn reverse(&self) -> AlleleCounts {
        AlleleCounts {
            a: self.get(GenotypeField::A2),
            c: self.get(GenotypeField::C2),
            g: self.get(GenotypeField::G2),
            t: self.get(GenotypeField::T2),
        }
    }

    /// PVAL as a float. Surrounding whitespace is ignored.
    pub fn pval(&self) -> Result<f64> {
        let value = self.get(GenotypeField::Pval);
        value.trim().parse::<f64>().map_err(|source| Error::NotNumeric {
            field: GenotypeField::Pval.column_name(&self.sample),
            value: value.to_owned(),
            source,
        })
    }

    pub fn parts(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct DecomposedVariant {
    pub(crate) variant: ProjectedVariant,
    pub(crate) genotype: DecomposedGenotype,
}

impl DecomposedVariant {
    pub fn pval(&self) -> Result<f64> {
        self.genotype.pval()
    }
}

impl Row for DecomposedVariant {
    fn fields(&self) -> Vec<&str> {
        let mut fields = self.variant.fields();
        fields.extend(self.genotype.parts());
        fields
    }
}

impl Record for DecomposedVariant {
    fn chrom(&self) -> &str {
        self.variant.chrom()
    }

    fn pos(&self) -> &str {
        self.variant.pos()
    }

    fn id(&self) -> &str {
        self.variant.id()
    }

    fn ref_allele(&self) -> &str {
        self.variant.ref_allele()
    }

    fn alt_alleles(&self) -> &str {
        self.variant.alt_alleles()
    }

    fn sample(&self, name: &str) -> Option<&str> {
        self.variant.sample(name)
    }
}
