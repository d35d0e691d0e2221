use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_till};
use nom::character::complete::char;
use nom::combinator::{all_consuming, map, rest};
use nom::multi::separated_list0;
use nom::sequence::{preceded, separated_pair};
use nom::IResult;

use crate::types::{HEADER_MARKER, META_MARKER};

const FIELD_SEPARATOR: char = '\t';

/// One classified line of a VCF-style source.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    /// `##key=value`; a line without `=` has an empty value.
    Meta { key: &'a str, value: &'a str },
    /// `#NAME\tNAME...`
    Header(Vec<&'a str>),
    Data(Vec<&'a str>),
}

fn field(input: &str) -> IResult<&str, &str> {
    take_till(|c| c == FIELD_SEPARATOR)(input)
}

fn fields(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list0(char(FIELD_SEPARATOR), field)(input)
}

fn meta_line(input: &str) -> IResult<&str, Line> {
    let (input, (key, value)) = preceded(
        tag(META_MARKER),
        alt((
            separated_pair(is_not("="), char('='), rest),
            map(rest, |key| (key, "")),
        )),
    )(input)?;
    Ok((input, Line::Meta { key, value }))
}

fn header_line(input: &str) -> IResult<&str, Line> {
    map(preceded(tag(HEADER_MARKER), fields), Line::Header)(input)
}

fn data_line(input: &str) -> IResult<&str, Line> {
    map(fields, Line::Data)(input)
}

/// Classifies a single line, which must not contain its terminator.
pub(crate) fn line(input: &str) -> IResult<&str, Line> {
    all_consuming(alt((meta_line, header_line, data_line)))(input)
}
