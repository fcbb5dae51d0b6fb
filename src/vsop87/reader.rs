//! # Reader for the IMCCE VSOP87 distribution files
//!
//! The files `VSOP87A.mer`, `VSOP87A.ven`, … published by the IMCCE hold, for one body, a block
//! of terms per (variable, power) pair. Each block opens with a header such as
//!
//! ```text
//!  VSOP87 VERSION A3    EARTH     VARIABLE 1 (XYZ)       *T**0   1007 TERMS    HELIOCENTRIC DYNAMICAL ECLIPTIC AND EQUINOX J2000
//! ```
//!
//! followed by the announced number of term lines. The last three numeric fields of a term
//! line are the amplitude `A`, the phase `B` and the frequency `C`.
//!
//! Only version A (heliocentric rectangular coordinates, ecliptic and equinox J2000) is
//! accepted since it is the frame every heliocentric ephemeris of the crate is tagged with.

use std::fs;

use camino::Utf8Path;
use log::{debug, info};
use regex::Regex;

use crate::{
    geovsop_errors::GeoVsopError,
    ref_system::Axis,
    vsop87::table::{CoefficientTable, Term, POWERS},
};

/// Content of a parsed VSOP87 file.
#[derive(Debug, Clone, PartialEq)]
pub struct Vsop87File {
    /// Body name as written in the headers (e.g. `EARTH`)
    pub body: String,
    /// Version letter (always `A`)
    pub version: char,
    /// The coefficient table
    pub table: CoefficientTable,
}

/// Header of one block of terms.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BlockHeader {
    axis: Axis,
    power: usize,
    declared_terms: usize,
    line: usize,
}

const HEADER_PATTERN: &str =
    r"VSOP87\s+VERSION\s+([A-F])\d\s+(\S+)\s+VARIABLE\s+(\d)\s+\(\w+\)\s+\*T\*\*(\d)\s+(\d+)\s+TERMS";

/// Read and parse a VSOP87 file from disk.
///
/// Arguments
/// ---------
/// * `path`: path of the file
///
/// Return
/// ------
/// * the parsed [`Vsop87File`]
/// * [`GeoVsopError::VsopFileNotFound`] if the path does not exist,
///   [`GeoVsopError::IoError`] on read failure and the parsing errors of [`parse_vsop87`].
pub fn read_vsop87_file(path: &Utf8Path) -> Result<Vsop87File, GeoVsopError> {
    if !path.exists() {
        return Err(GeoVsopError::VsopFileNotFound(path.to_string()));
    }
    let content = fs::read_to_string(path)?;
    let file = parse_vsop87(&content)?;
    info!(
        "Loaded VSOP87{} series of {} from {path} ({} terms)",
        file.version,
        file.body,
        file.table.term_count()
    );
    Ok(file)
}

/// Parse the content of a VSOP87 file.
///
/// Arguments
/// ---------
/// * `content`: the whole text of the file
///
/// Return
/// ------
/// * the parsed [`Vsop87File`]
/// * [`GeoVsopError::UnsupportedVsopVersion`] if a header announces another version than A,
/// * [`GeoVsopError::MalformedVsopFile`] on a term line before any header, an unparsable
///   number, a variable or power out of range, a repeated block, several bodies in one file,
///   a block whose term count differs from its header, or a file without any header.
pub fn parse_vsop87(content: &str) -> Result<Vsop87File, GeoVsopError> {
    let header_regex = Regex::new(HEADER_PATTERN)?;

    let mut table = CoefficientTable::new();
    let mut seen = [[false; POWERS]; 3];
    let mut body: Option<String> = None;
    let mut current: Option<(BlockHeader, Vec<Term>)> = None;

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        if let Some(captures) = header_regex.captures(line) {
            if let Some((header, terms)) = current.take() {
                close_block(&mut table, header, terms)?;
            }

            let version = captures[1].chars().next().unwrap_or('?');
            if version != 'A' {
                return Err(GeoVsopError::UnsupportedVsopVersion(version));
            }

            let name = &captures[2];
            let known = body.get_or_insert_with(|| name.to_string());
            if known.as_str() != name {
                return Err(malformed(
                    line_number,
                    format!("body {name} found in a file of {known}"),
                ));
            }

            let header = parse_header(
                line_number,
                &captures[3],
                &captures[4],
                &captures[5],
            )?;
            let seen_block = &mut seen[header.axis.index()][header.power];
            if *seen_block {
                return Err(malformed(
                    line_number,
                    format!("duplicated block for {:?} T**{}", header.axis, header.power),
                ));
            }
            *seen_block = true;

            debug!(
                "VSOP87 block {:?} T**{} announces {} terms",
                header.axis, header.power, header.declared_terms
            );
            current = Some((header, Vec::with_capacity(header.declared_terms)));
            continue;
        }

        let Some((_, terms)) = current.as_mut() else {
            return Err(malformed(line_number, "term line before any header".into()));
        };
        terms.push(parse_term(line_number, line)?);
    }

    if let Some((header, terms)) = current.take() {
        close_block(&mut table, header, terms)?;
    }

    let body = body.ok_or_else(|| malformed(0, "no VSOP87 header found".into()))?;

    Ok(Vsop87File {
        body,
        version: 'A',
        table,
    })
}

fn malformed(line: usize, reason: String) -> GeoVsopError {
    GeoVsopError::MalformedVsopFile { line, reason }
}

fn parse_header(
    line: usize,
    variable: &str,
    power: &str,
    count: &str,
) -> Result<BlockHeader, GeoVsopError> {
    let axis = match variable {
        "1" => Axis::X,
        "2" => Axis::Y,
        "3" => Axis::Z,
        other => return Err(malformed(line, format!("variable {other} is not in 1..=3"))),
    };

    let power: usize = power
        .parse()
        .map_err(|_| malformed(line, format!("invalid power {power}")))?;
    if power >= POWERS {
        return Err(malformed(
            line,
            format!("power {power} is not in 0..={}", POWERS - 1),
        ));
    }

    let declared_terms = count
        .parse()
        .map_err(|_| malformed(line, format!("invalid term count {count}")))?;

    Ok(BlockHeader {
        axis,
        power,
        declared_terms,
        line,
    })
}

/// Extract `A B C` from the three last fields of a term line.
fn parse_term(line_number: usize, line: &str) -> Result<Term, GeoVsopError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [.., a, b, c] = fields.as_slice() else {
        return Err(malformed(
            line_number,
            format!("expected at least 3 numeric fields, found {}", fields.len()),
        ));
    };

    let parse = |field: &str, name: &str| -> Result<f64, GeoVsopError> {
        field
            .parse::<f64>()
            .map_err(|_| malformed(line_number, format!("invalid {name} `{field}`")))
    };

    Ok(Term::new(
        parse(*a, "amplitude")?,
        parse(*b, "phase")?,
        parse(*c, "frequency")?,
    ))
}

fn close_block(
    table: &mut CoefficientTable,
    header: BlockHeader,
    terms: Vec<Term>,
) -> Result<(), GeoVsopError> {
    if terms.len() != header.declared_terms {
        return Err(malformed(
            header.line,
            format!(
                "header announces {} terms, found {}",
                header.declared_terms,
                terms.len()
            ),
        ));
    }
    table.set_series(header.axis, header.power, terms)
}

#[cfg(test)]
mod reader_test {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLE: &str = "\
 VSOP87 VERSION A3    EARTH     VARIABLE 1 (XYZ)       *T**0      2 TERMS    HELIOCENTRIC DYNAMICAL ECLIPTIC AND EQUINOX J2000
 1310    1  0  0  1  0  0  0  0  0  0  0  0  0    0.99982927460  0.00000000000     0.99982927460 1.75348568475      6283.31966747491
 1310    2  0  0  2  0  0  0  0  0  0  0  0  0    0.00835257300  0.00000000000     0.00835257300 1.71034539450     12566.63933494982
 VSOP87 VERSION A3    EARTH     VARIABLE 2 (XYZ)       *T**0      1 TERMS    HELIOCENTRIC DYNAMICAL ECLIPTIC AND EQUINOX J2000
 2310    1  0  0  1  0  0  0  0  0  0  0  0  0    0.99989211030  0.00000000000     0.99989211030 0.18265890456      6283.31966747491
 VSOP87 VERSION A3    EARTH     VARIABLE 3 (XYZ)       *T**1      1 TERMS    HELIOCENTRIC DYNAMICAL ECLIPTIC AND EQUINOX J2000
 3311    1  0  0  1  0  0  0  0  0  0  0  0  0    0.00227777722  0.00000000000     0.00227777722 3.41376620530      6283.07584999140
";

    #[test]
    fn test_parse_sample() {
        let file = parse_vsop87(SAMPLE).unwrap();
        assert_eq!(file.body, "EARTH");
        assert_eq!(file.version, 'A');
        assert_eq!(file.table.term_count(), 4);

        let x0 = file.table.series(Axis::X, 0);
        assert_eq!(x0.len(), 2);
        assert_relative_eq!(x0[0].amplitude, 0.99982927460);
        assert_relative_eq!(x0[0].phase, 1.75348568475);
        assert_relative_eq!(x0[0].frequency, 6283.31966747491);
        assert_relative_eq!(x0[1].frequency, 12566.63933494982);

        assert_eq!(file.table.series(Axis::Y, 0).len(), 1);
        assert_eq!(file.table.series(Axis::Z, 1).len(), 1);
        assert!(file.table.series(Axis::Z, 0).is_empty());
    }

    #[test]
    fn test_reject_other_version() {
        let content = SAMPLE.replace("VERSION A3", "VERSION D3");
        assert_eq!(
            parse_vsop87(&content),
            Err(GeoVsopError::UnsupportedVsopVersion('D'))
        );
    }

    #[test]
    fn test_reject_count_mismatch() {
        let content = SAMPLE.replacen("      2 TERMS", "      3 TERMS", 1);
        assert_eq!(
            parse_vsop87(&content),
            Err(GeoVsopError::MalformedVsopFile {
                line: 1,
                reason: "header announces 3 terms, found 2".into()
            })
        );
    }

    #[test]
    fn test_reject_term_before_header() {
        let content = SAMPLE.lines().skip(1).collect::<Vec<_>>().join("\n");
        assert_eq!(
            parse_vsop87(&content),
            Err(GeoVsopError::MalformedVsopFile {
                line: 1,
                reason: "term line before any header".into()
            })
        );
    }

    #[test]
    fn test_reject_invalid_number() {
        let content = SAMPLE.replace("12566.63933494982", "12566.6393349498x");
        assert!(matches!(
            parse_vsop87(&content),
            Err(GeoVsopError::MalformedVsopFile { line: 3, .. })
        ));
    }

    #[test]
    fn test_reject_power_out_of_range() {
        let content = SAMPLE.replace("*T**1", "*T**7");
        assert!(matches!(
            parse_vsop87(&content),
            Err(GeoVsopError::MalformedVsopFile { line: 6, .. })
        ));
    }

    #[test]
    fn test_reject_duplicated_block() {
        let content = SAMPLE.replace("VARIABLE 2 (XYZ)", "VARIABLE 1 (XYZ)");
        assert!(matches!(
            parse_vsop87(&content),
            Err(GeoVsopError::MalformedVsopFile { line: 4, .. })
        ));
    }

    #[test]
    fn test_reject_empty() {
        assert!(matches!(
            parse_vsop87(""),
            Err(GeoVsopError::MalformedVsopFile { line: 0, .. })
        ));
    }

    #[test]
    fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::from_path_buf(dir.path().join("VSOP87A.ear")).unwrap();
        std::fs::write(&path, SAMPLE).unwrap();

        let file = read_vsop87_file(&path).unwrap();
        assert_eq!(file.table.term_count(), 4);

        let missing = path.with_file_name("VSOP87A.xxx");
        assert_eq!(
            read_vsop87_file(&missing),
            Err(GeoVsopError::VsopFileNotFound(missing.to_string()))
        );
    }
}
