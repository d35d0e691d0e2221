use std::fs::File;
use std::io::Read;
use std::path::Path;

use itertools::Itertools;
use multimap::MultiMap;
use tracing::debug;

use crate::error::{Error, Result};
use crate::parser::{self, Line};
use crate::record::RawRecord;
use crate::table::VariantTable;
use crate::types::Header;

/// Reads a whole VCF-style file, plain or compressed, into a table.
///
/// The file is closed before this returns.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<VariantTable<RawRecord>> {
    let path = path.as_ref();
    let reader: Box<dyn Read> = match niffler::from_path(path) {
        Ok((reader, compression)) => {
            debug!(path = %path.display(), ?compression, "reading variants");
            reader
        }
        // too short to sniff a compression format, so it can only be plain text
        Err(niffler::Error::FileTooShort) => {
            debug!(path = %path.display(), "reading short uncompressed source");
            Box::new(File::open(path).map_err(|source| Error::Io {
                path: path.to_owned(),
                source,
            })?)
        }
        Err(source) => {
            return Err(Error::Source {
                path: path.to_owned(),
                source,
            })
        }
    };
    from_reader(reader).map_err(|err| match err {
        Error::Io { source, .. } => Error::Io {
            path: path.to_owned(),
            source,
        },
        other => other,
    })
}

/// Reads all of `reader` and parses it as a VCF-style table.
pub fn from_reader<R: Read>(mut reader: R) -> Result<VariantTable<RawRecord>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| Error::Io {
            path: "<stream>".into(),
            source,
        })?;
    from_str(&text)
}

/// Parses VCF-style text.
///
/// `##` lines go to [`Header::meta`], the first `#` line names the columns,
/// everything else is a data row. Blank lines are skipped.
pub fn from_str(text: &str) -> Result<VariantTable<RawRecord>> {
    let mut meta = MultiMap::new();
    let mut columns: Option<Vec<String>> = None;
    let mut records = Vec::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let number = idx + 1;
        if raw_line.is_empty() {
            continue;
        }
        let (_, line) = parser::line(raw_line).map_err(|err| Error::Syntax {
            line: number,
            msg: err.to_string(),
        })?;
        match line {
            Line::Meta { key, value } => meta.insert(key.to_owned(), value.to_owned()),
            Line::Header(names) if columns.is_none() => {
                let names = names.into_iter().map(str::to_owned).collect_vec();
                // rows seen before the header must still match its width
                for record in &records {
                    check_record_width(&names, record)?;
                }
                columns = Some(names);
            }
            Line::Header(names) => {
                // only the first `#` line is the header
                let mut values = names.into_iter().map(str::to_owned).collect_vec();
                if let Some(first) = values.first_mut() {
                    first.insert_str(0, "#");
                }
                records.push(check_width(columns.as_deref(), number, values)?);
            }
            Line::Data(values) => {
                let values = values.into_iter().map(str::to_owned).collect_vec();
                records.push(check_width(columns.as_deref(), number, values)?);
            }
        }
    }

    let header = Header {
        meta,
        columns: columns.unwrap_or_default(),
    };
    debug!(
        meta = header.meta.len(),
        columns = header.columns.len(),
        records = records.len(),
        "parsed variant table"
    );
    Ok(VariantTable::new(header, records))
}

fn check_width(
    columns: Option<&[String]>,
    line: usize,
    values: Vec<String>,
) -> Result<RawRecord> {
    match columns {
        Some(columns) if columns.len() != values.len() => Err(Error::FieldCount {
            line,
            expected: columns.len(),
            actual: values.len(),
        }),
        _ => Ok(RawRecord::new(line, values)),
    }
}

fn check_record_width(columns: &[String], record: &RawRecord) -> Result<()> {
    if columns.len() != record.len() {
        return Err(Error::FieldCount {
            line: record.line(),
            expected: columns.len(),
            actual: record.len(),
        });
    }
    Ok(())
}
