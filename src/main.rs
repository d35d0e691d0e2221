use anyhow::Result;

fn main() -> Result<()> {
    rust_snps::cli::run()
}
