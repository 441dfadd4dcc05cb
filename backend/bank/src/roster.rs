//! # Roster
//!
//! Five newline-delimited files, aligned by line index. Blank lines and
//! surrounding whitespace are ignored.
//!
//! Rolls, names, URLs and sections must have the same length or the whole
//! roster is rejected. Day markers are not length-checked: a missing marker
//! is read as an empty string.
use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::{BankError, records::RosterEntry};

pub const PROFILE_PREFIX: &str = "https://leetcode.com/u/";

pub const ROLL_FILE: &str = "roll.txt";
pub const NAME_FILE: &str = "name.txt";
pub const URL_FILE: &str = "urls.txt";
pub const SECTION_FILE: &str = "sections.txt";
pub const DAY_FILE: &str = "day.txt";

#[derive(Clone, Debug)]
pub struct RosterPaths {
    pub rolls: PathBuf,
    pub names: PathBuf,
    pub urls: PathBuf,
    pub sections: PathBuf,
    pub days: PathBuf,
}

impl RosterPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();

        Self {
            rolls: dir.join(ROLL_FILE),
            names: dir.join(NAME_FILE),
            urls: dir.join(URL_FILE),
            sections: dir.join(SECTION_FILE),
            days: dir.join(DAY_FILE),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    pub rolls: Vec<String>,
    pub names: Vec<String>,
    pub urls: Vec<String>,
    pub sections: Vec<String>,
    pub days: Vec<String>,
}

impl Roster {
    pub fn validate(&self) -> Result<(), BankError> {
        let rolls = self.rolls.len();

        if rolls != self.names.len() || rolls != self.urls.len() || rolls != self.sections.len() {
            return Err(BankError::RosterMismatch {
                rolls,
                names: self.names.len(),
                urls: self.urls.len(),
                sections: self.sections.len(),
            });
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    /// Zips the columns into entries. Call [`Roster::validate`] first.
    pub fn entries(&self) -> Vec<RosterEntry> {
        if self.days.len() < self.len() {
            warn!(
                "Only {} day markers for {} students, missing ones left blank",
                self.days.len(),
                self.len()
            );
        }

        self.rolls
            .iter()
            .zip(&self.names)
            .zip(&self.urls)
            .zip(&self.sections)
            .enumerate()
            .map(|(i, (((roll, name), url), section))| RosterEntry {
                roll_number: roll.clone(),
                name: name.clone(),
                profile_url: url.clone(),
                section: section.clone(),
                day: self.days.get(i).cloned().unwrap_or_default(),
            })
            .collect()
    }
}

pub fn load_roster(paths: &RosterPaths) -> Result<Roster, BankError> {
    let roster = Roster {
        rolls: read_lines(&paths.rolls)?,
        names: read_lines(&paths.names)?,
        urls: read_lines(&paths.urls)?,
        sections: read_lines(&paths.sections)?,
        days: read_lines(&paths.days)?,
    };

    roster.validate()?;

    Ok(roster)
}

/// Profile URLs of every listed roll, without the cross-file length check.
pub fn load_profile_urls(paths: &RosterPaths) -> Result<Vec<String>, BankError> {
    let rolls = read_lines(&paths.rolls)?;
    let mut urls = read_lines(&paths.urls)?;

    urls.truncate(rolls.len());

    Ok(urls)
}

pub fn read_lines(path: &Path) -> Result<Vec<String>, BankError> {
    read_to_string(path)
        .map(|text| parse_lines(&text))
        .map_err(|e| BankError::io(path, e))
}

pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Username from a `https://leetcode.com/u/<name>/` profile URL, one trailing slash stripped.
pub fn profile_username(url: &str) -> Option<&str> {
    let rest = url.strip_prefix(PROFILE_PREFIX)?;
    let username = rest.strip_suffix('/').unwrap_or(rest);

    (!username.is_empty()).then_some(username)
}
