use crate::domain::model::{Driver, GroupId, Rider, Roster};
use crate::domain::ports::RosterSource;
use crate::utils::error::{AllocError, ParseErrorKind, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Parses the plain-text roster format.
///
/// Driver lines (`name capacity [group]`) come first; the first blank line switches to
/// rider lines (`name [group]`). Later blank lines are skipped and extra tokens ignored.
pub fn parse_roster(content: &str) -> Result<Roster> {
    let mut roster = Roster::default();
    let mut reading_drivers = true;

    for (i, raw) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() {
            reading_drivers = false;
            continue;
        }

        let mut fields = line.split_whitespace();
        // a trimmed, non-empty line always has a first token
        let name = fields.next().unwrap_or_default();

        if reading_drivers {
            let capacity = fields.next().ok_or_else(|| {
                AllocError::parse(line_no, ParseErrorKind::MissingField { field: "capacity" })
            })?;
            let capacity = parse_number::<u32>(line_no, "capacity", capacity)?;

            let mut driver = Driver::new(name, capacity);
            driver.group_affinity = parse_group(line_no, fields.next())?;
            roster.drivers.push(driver);
        } else {
            roster.riders.push(Rider {
                name: name.to_string(),
                group: parse_group(line_no, fields.next())?,
            });
        }
    }

    Ok(roster)
}

fn parse_number<T: FromStr>(line: usize, field: &'static str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        AllocError::parse(
            line,
            ParseErrorKind::InvalidNumber {
                field,
                value: value.to_string(),
            },
        )
    })
}

fn parse_group(line: usize, token: Option<&str>) -> Result<Option<GroupId>> {
    token
        .map(|t| parse_number::<i64>(line, "group", t).map(GroupId))
        .transpose()
}

/// Roster read from disk. `.json` files use the JSON layout, anything else the text format.
#[derive(Debug, Clone)]
pub struct FileRoster {
    path: PathBuf,
}

impl FileRoster {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl RosterSource for FileRoster {
    fn load_roster(&self) -> Result<Roster> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AllocError::FileNotFound {
                path: self.path.display().to_string(),
            },
            _ => AllocError::Io(e),
        })?;

        tracing::debug!("read {} bytes from {}", content.len(), self.path.display());

        if self.is_json() {
            Roster::from_json(&content)
        } else {
            parse_roster(&content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_sections() {
        let input = "A 2\nB 1 5\n\nr1 5\nr2 5\nr3\n";

        let roster = parse_roster(input).unwrap();

        assert_eq!(
            roster.drivers,
            vec![Driver::new("A", 2), Driver::new("B", 1).with_affinity(5)]
        );
        assert_eq!(
            roster.riders,
            vec![
                Rider::in_group("r1", 5),
                Rider::in_group("r2", 5),
                Rider::new("r3")
            ]
        );
    }

    #[test]
    fn test_whitespace_and_extra_blank_lines() {
        let input = "  A   3  \n   \n\nr1  -2 trailing\n\n r2\n";

        let roster = parse_roster(input).unwrap();

        assert_eq!(roster.drivers, vec![Driver::new("A", 3)]);
        assert_eq!(roster.riders, vec![Rider::in_group("r1", -2), Rider::new("r2")]);
    }

    #[test]
    fn test_missing_capacity() {
        let err = parse_roster("A 2\nB\n\nr1\n").unwrap_err();
        match err {
            AllocError::Parse { line, kind } => {
                assert_eq!(line, 2);
                assert_eq!(kind, ParseErrorKind::MissingField { field: "capacity" });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_numbers() {
        let err = parse_roster("A two\n").unwrap_err();
        assert!(matches!(
            err,
            AllocError::Parse {
                line: 1,
                kind: ParseErrorKind::InvalidNumber { field: "capacity", .. }
            }
        ));

        let err = parse_roster("A -1\n").unwrap_err();
        assert!(matches!(err, AllocError::Parse { line: 1, .. }));

        let err = parse_roster("A 1\n\nr1 five\n").unwrap_err();
        assert!(matches!(
            err,
            AllocError::Parse {
                line: 3,
                kind: ParseErrorKind::InvalidNumber { field: "group", .. }
            }
        ));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_roster("").unwrap(), Roster::default());
    }

    #[test]
    fn test_file_roster_text_and_missing() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"A 1\n\nr1\n").unwrap();

        let roster = FileRoster::new(file.path()).load_roster().unwrap();
        assert_eq!(roster.riders, vec![Rider::new("r1")]);

        let err = FileRoster::new("/definitely/not/here.txt")
            .load_roster()
            .unwrap_err();
        assert!(matches!(err, AllocError::FileNotFound { .. }));
    }

    #[test]
    fn test_file_roster_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"drivers": [{"name": "A", "capacity": 1}], "riders": [{"name": "r1"}]}"#)
            .unwrap();

        let roster = FileRoster::new(file.path()).load_roster().unwrap();
        assert_eq!(roster.drivers, vec![Driver::new("A", 1)]);
        assert_eq!(roster.riders, vec![Rider::new("r1")]);
    }
}
