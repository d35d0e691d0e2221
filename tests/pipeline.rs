use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rust_snps::{
    parse, parse_all_snps, parse_significant_snps, parse_snps_by_chromosome,
    parse_snps_by_chromosome_and_nucleotide, validate, write_csv, ErrorKind, FilterOptions,
};
use tempfile::TempDir;

const HEADER: &str = "#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tNORMAL\tTUMOUR\n";

const ROWS: &str = "1\t100\t.\tG\tA\t.\tPASS\t.\tGT\tSNP:10:0:5:0:8:0:3:0:0.01\tSNP:1:0:1:0:1:0:1:0:0.9\n\
    1\t200\t.\tC\tG\t.\tPASS\t.\tGT\tSNP:0:4:2:0:0:3:1:0:0.2\tSNP:1:0:1:0:1:0:1:0:0.01\n\
    2\t300\trs1\tG\tT\t.\tPASS\t.\tGT\tSNP:0:0:9:1:0:0:8:2:0.001\tSNP:1:0:1:0:1:0:1:0:0.5\n";

fn write_vcf(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

fn read_csv(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|record| record.unwrap().iter().map(str::to_owned).collect())
        .collect()
}

#[test]
fn test_all_snps_to_csv() {
    let dir = TempDir::new().unwrap();
    let vcf = write_vcf(&dir, "in.vcf", &format!("##fileformat=VCFv4.1\n{HEADER}{ROWS}"));
    let output = dir.path().join("all.csv");

    validate(&vcf, None, None).unwrap();
    let table = parse_all_snps(&vcf).unwrap();
    assert_eq!(table.header().meta().get("fileformat").unwrap(), "VCFv4.1");
    write_csv(&output, &table).unwrap();

    let rows = read_csv(&output);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0][0], "CHROM");
    assert_eq!(rows[0].len(), 11);
    assert_eq!(rows[3][2], "rs1");
}

#[test]
fn test_chromosome_to_csv() {
    let dir = TempDir::new().unwrap();
    let vcf = write_vcf(&dir, "in.vcf", &format!("{HEADER}{ROWS}"));
    let output = dir.path().join("chromosome.csv");

    let table = parse_snps_by_chromosome(&vcf, "1", &FilterOptions::default()).unwrap();
    write_csv(&output, &table).unwrap();

    let rows = read_csv(&output);
    assert_eq!(rows[0], ["CHROM", "POS", "ID", "REF", "ALT", "NORMAL"]);
    assert_eq!(rows.len(), 3);
    assert!(rows[1..].iter().all(|row| row[0] == "1"));
}

#[test]
fn test_chromosome_nucleotide_to_csv() {
    let dir = TempDir::new().unwrap();
    let vcf = write_vcf(&dir, "in.vcf", &format!("{HEADER}{ROWS}"));
    let output = dir.path().join("nucleotide.csv");

    let table =
        parse_snps_by_chromosome_and_nucleotide(&vcf, "1", "C", &FilterOptions::default())
            .unwrap();
    write_csv(&output, &table).unwrap();

    let rows = read_csv(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][1], "200");
}

#[test]
fn test_significant_to_csv() {
    let dir = TempDir::new().unwrap();
    let vcf = write_vcf(&dir, "in.vcf", &format!("{HEADER}{ROWS}"));
    let output = dir.path().join("significant.csv");

    let table = parse_significant_snps(&vcf, "1", "G", &FilterOptions::default()).unwrap();
    write_csv(&output, &table).unwrap();

    let rows = read_csv(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 16);
    assert_eq!(rows[0].last().unwrap(), "NORMAL_PVAL");
    assert_eq!(rows[1][1], "100");
    assert_eq!(rows[1].last().unwrap(), "0.01");

    let tumour = FilterOptions {
        sample: "TUMOUR".to_owned(),
        ..FilterOptions::default()
    };
    let table = parse_significant_snps(&vcf, "1", "G", &tumour).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.columns().last().unwrap(), "TUMOUR_PVAL");
}

#[test]
fn test_gzipped_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("in.vcf.gz");
    {
        let mut writer = niffler::to_path(
            &path,
            niffler::compression::Format::Gzip,
            niffler::Level::One,
        )
        .unwrap();
        write!(writer, "{HEADER}{ROWS}").unwrap();
    }

    let table = parse(&path).unwrap();
    assert_eq!(table.len(), 3);
    let table = parse_snps_by_chromosome(&path, "2", &FilterOptions::default()).unwrap();
    assert_eq!(table.len(), 1);

    // the validator only accepts plain `.vcf` names
    let err = validate(&path, None, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.vcf");
    assert_eq!(
        validate(&path, None, None).unwrap_err().kind(),
        ErrorKind::Validation
    );
    assert_eq!(parse(&path).unwrap_err().kind(), ErrorKind::Format);
}

#[test]
fn test_missing_header_is_schema_error() {
    let dir = TempDir::new().unwrap();
    let vcf = write_vcf(&dir, "in.vcf", ROWS);

    let table = parse_all_snps(&vcf).unwrap();
    assert_eq!(table.len(), 3);
    assert!(table.columns().is_empty());

    let err = parse_snps_by_chromosome(&vcf, "1", &FilterOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);

    let err = write_csv(dir.path().join("out.csv"), &table).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
}

#[test]
fn test_short_genotype_is_schema_error() {
    let dir = TempDir::new().unwrap();
    let text = format!("{HEADER}1\t100\t.\tG\tA\t.\tPASS\t.\tGT\tSNP:1:2:3:4\tSNP:1:2:3:4\n");
    let vcf = write_vcf(&dir, "in.vcf", &text);

    // projection alone does not look inside the genotype
    let projected =
        parse_snps_by_chromosome_and_nucleotide(&vcf, "1", "G", &FilterOptions::default())
            .unwrap();
    assert_eq!(projected.len(), 1);

    let err = parse_significant_snps(&vcf, "1", "G", &FilterOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
}

#[test]
fn test_ragged_row_is_format_error() {
    let dir = TempDir::new().unwrap();
    let vcf = write_vcf(&dir, "in.vcf", &format!("{HEADER}1\t100\t.\tG\n"));
    assert_eq!(parse_all_snps(&vcf).unwrap_err().kind(), ErrorKind::Format);
}

#[test]
fn test_short_plain_sources() {
    let dir = TempDir::new().unwrap();

    let empty = write_vcf(&dir, "empty.vcf", "");
    validate(&empty, None, None).unwrap();
    let table = parse_all_snps(&empty).unwrap();
    assert!(table.is_empty());
    assert!(table.columns().is_empty());

    let header_only = write_vcf(&dir, "header.vcf", "#A\n");
    let table = parse(&header_only).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.columns(), ["A"]);

    let output = dir.path().join("header.csv");
    write_csv(&output, &table).unwrap();
    assert_eq!(read_csv(&output), [["A"]]);
}
