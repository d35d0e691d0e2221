pub mod cli;
pub mod error;
pub mod filter;
pub(crate) mod parser;
pub mod pipeline;
pub mod reader;
pub mod record;
pub mod table;
pub mod types;
pub mod validate;
pub mod writer;

pub use error::{Error, ErrorKind, Invalid, Result};
pub use filter::{
    by_chromosome, by_chromosome_and_nucleotide, by_chromosome_and_nucleotide_for_sample,
    by_chromosome_for_sample, decompose, significance_filter,
};
pub use pipeline::{
    parse_all_snps, parse_significant_snps, parse_snps_by_chromosome,
    parse_snps_by_chromosome_and_nucleotide,
};
pub use reader::parse;
pub use record::{
    DecomposedGenotype, DecomposedVariant, ProjectedVariant, RawRecord, Record, Row,
    VariantRecord,
};
pub use table::VariantTable;
pub use types::{
    FilterOptions, GenotypeField, Header, Nucleotide, DEFAULT_PVALUE_THRESHOLD, DEFAULT_SAMPLE,
};
pub use validate::validate;
pub use writer::write_csv;

#[cfg(test)]
mod test {
    use super::*;

    // single row, NORMAL p-value 0.01
    const SCENARIO: &str = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tNORMAL\tTUMOUR\n\
        1\t100\t.\tG\tA\t.\tPASS\t.\tGT\tSNP:10:0:5:0:8:0:3:0:0.01\tSNP:1:0:1:0:1:0:1:0:0.9\n";

    #[test]
    fn test_significant_scenario() {
        let table = reader::from_str(SCENARIO).unwrap().typed().unwrap();
        let candidates = by_chromosome_and_nucleotide(&table, "1", "G").unwrap();
        let significant =
            significance_filter(&decompose(&candidates).unwrap(), DEFAULT_PVALUE_THRESHOLD)
                .unwrap();
        assert_eq!(significant.len(), 1);
        let record = &significant.records()[0];
        assert_eq!(record.chrom(), "1");
        assert_eq!(record.ref_allele(), "G");
        assert_eq!(record.alt_alleles(), "A");
        assert_eq!(record.genotype().get(GenotypeField::Pval), "0.01");
        assert_eq!(record.pval().unwrap(), 0.01);
    }

    #[test]
    fn test_insignificant_scenario() {
        let text = SCENARIO.replace("0:0.01", "0:0.2");
        let table = reader::from_str(&text).unwrap().typed().unwrap();
        let decomposed = decompose(&by_chromosome(&table, "1").unwrap()).unwrap();
        assert_eq!(decomposed.len(), 1);
        let significant = significance_filter(&decomposed, DEFAULT_PVALUE_THRESHOLD).unwrap();
        assert!(significant.is_empty());
    }
}
