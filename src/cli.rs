use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    parse_all_snps, parse_significant_snps, parse_snps_by_chromosome,
    parse_snps_by_chromosome_and_nucleotide, validate, write_csv, FilterOptions, Row,
    VariantTable, DEFAULT_PVALUE_THRESHOLD, DEFAULT_SAMPLE,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Analyze SNPs from VCF files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Sample column to keep and decompose
    #[arg(long, global = true, default_value = DEFAULT_SAMPLE)]
    sample: String,

    /// Logging verbosity (e.g. error, warn, info, debug); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse all SNPs in the VCF file into a CSV file
    All {
        /// Path to the input VCF file
        vcf: PathBuf,
        /// Path to the output CSV file
        output: PathBuf,
    },
    /// Parse SNPs from a specific chromosome into a CSV file
    Chromosome {
        /// Path to the input VCF file
        vcf: PathBuf,
        /// Chromosome to filter SNPs
        chromosome: String,
        /// Path to the output CSV file
        output: PathBuf,
    },
    /// Parse SNPs from a specific chromosome and nucleotide into a CSV file
    #[command(name = "chromosome_nucleotide")]
    ChromosomeNucleotide(NucleotideArgs),
    /// Parse significant SNPs from a specific chromosome and nucleotide into a CSV file
    Significant {
        #[command(flatten)]
        args: NucleotideArgs,
        /// Keep rows whose p-value is strictly below this
        #[arg(long, default_value_t = DEFAULT_PVALUE_THRESHOLD)]
        threshold: f64,
    },
}

#[derive(Debug, Args)]
struct NucleotideArgs {
    /// Path to the input VCF file
    vcf: PathBuf,
    /// Chromosome to filter SNPs
    chromosome: String,
    /// Nucleotide to filter SNPs
    nucleotide: String,
    /// Path to the output CSV file
    output: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;
    execute(cli)
}

pub fn execute(cli: Cli) -> Result<()> {
    let mut options = FilterOptions {
        sample: cli.sample,
        ..FilterOptions::default()
    };

    match cli.command {
        Command::All { vcf, output } => {
            validate(&vcf, None, None)?;
            let table = parse_all_snps(&vcf)
                .with_context(|| format!("failed to parse {}", vcf.display()))?;
            finish(&output, &table)
        }
        Command::Chromosome {
            vcf,
            chromosome,
            output,
        } => {
            validate(&vcf, Some(chromosome.as_str()), None)?;
            let table = parse_snps_by_chromosome(&vcf, &chromosome, &options)
                .with_context(|| format!("failed to filter {}", vcf.display()))?;
            finish(&output, &table)
        }
        Command::ChromosomeNucleotide(args) => {
            validate(
                &args.vcf,
                Some(args.chromosome.as_str()),
                Some(args.nucleotide.as_str()),
            )?;
            let table = parse_snps_by_chromosome_and_nucleotide(
                &args.vcf,
                &args.chromosome,
                &args.nucleotide,
                &options,
            )
            .with_context(|| format!("failed to filter {}", args.vcf.display()))?;
            finish(&args.output, &table)
        }
        Command::Significant { args, threshold } => {
            validate(
                &args.vcf,
                Some(args.chromosome.as_str()),
                Some(args.nucleotide.as_str()),
            )?;
            options.threshold = threshold;
            let table = parse_significant_snps(
                &args.vcf,
                &args.chromosome,
                &args.nucleotide,
                &options,
            )
            .with_context(|| format!("failed to filter {}", args.vcf.display()))?;
            finish(&args.output, &table)
        }
    }
}

fn finish<R: Row>(output: &Path, table: &VariantTable<R>) -> Result<()> {
    write_csv(output, table).with_context(|| format!("failed to write {}", output.display()))?;
    info!(
        records = table.len(),
        columns = table.columns().len(),
        output = %output.display(),
        "wrote variants"
    );
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level: {level}"))?;
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to initialize logging")?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_command_names() {
        let cli = Cli::try_parse_from([
            "rust-snps",
            "chromosome_nucleotide",
            "in.vcf",
            "1",
            "G",
            "out.csv",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::ChromosomeNucleotide(_)));
        assert_eq!(cli.sample, "NORMAL");

        let cli = Cli::try_parse_from([
            "rust-snps",
            "significant",
            "in.vcf",
            "1",
            "G",
            "out.csv",
            "--threshold",
            "0.01",
            "--sample",
            "TUMOUR",
        ])
        .unwrap();
        match cli.command {
            Command::Significant { threshold, .. } => assert_eq!(threshold, 0.01),
            other => panic!("unexpected command {:?}", other),
        }
        assert_eq!(cli.sample, "TUMOUR");
    }

    #[test]
    fn test_rejects_missing_arguments() {
        assert!(Cli::try_parse_from(["rust-snps", "chromosome", "in.vcf"]).is_err());
    }

    #[test]
    fn test_validation_runs_first() {
        let cli = Cli::try_parse_from([
            "rust-snps",
            "chromosome",
            "resources/example.vcf",
            "24",
            "unused.csv",
        ])
        .unwrap();
        let err = execute(cli).unwrap_err();
        let err = err.downcast::<crate::Error>().unwrap();
        assert_eq!(err.kind(), crate::ErrorKind::Validation);
        assert!(!Path::new("unused.csv").exists());
    }
}
