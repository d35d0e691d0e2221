use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Invalid, Result};
use crate::types::{Nucleotide, VCF_SUFFIX};

const AUTOSOMES: std::ops::RangeInclusive<u8> = 1..=23;
const SEX_CHROMOSOMES: [&str; 2] = ["x", "y"];

/// Checks caller-supplied parameters before anything is read.
///
/// Both `chromosome` and `nucleotide` are matched ignoring ASCII case; the
/// filters that later use them compare exactly.
pub fn validate<P: AsRef<Path>>(
    path: P,
    chromosome: Option<&str>,
    nucleotide: Option<&str>,
) -> Result<()> {
    let path = path.as_ref();
    if !is_readable_vcf(path) {
        return Err(Invalid::File(path.display().to_string()).into());
    }
    if let Some(chromosome) = chromosome {
        if !is_valid_chromosome(chromosome) {
            return Err(Invalid::Chromosome(chromosome.to_owned()).into());
        }
    }
    if let Some(nucleotide) = nucleotide {
        if Nucleotide::from_str(nucleotide).is_err() {
            return Err(Invalid::Nucleotide(nucleotide.to_owned()).into());
        }
    }
    Ok(())
}

fn is_readable_vcf(path: &Path) -> bool {
    path.to_string_lossy().ends_with(VCF_SUFFIX)
        && path.is_file()
        && File::open(path).is_ok()
}

/// `1`..`23`, `x` or `y`, in any case. No leading zeros or signs.
pub fn is_valid_chromosome(chromosome: &str) -> bool {
    let chromosome = chromosome.to_ascii_lowercase();
    SEX_CHROMOSOMES.contains(&chromosome.as_str())
        || AUTOSOMES.map(|n| n.to_string()).any(|n| n == chromosome)
}
