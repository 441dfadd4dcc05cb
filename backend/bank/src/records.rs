use serde::{Deserialize, Serialize};

pub const NO_DATA_INFO: &str = "No LeetCode data available";

/// One tracked student as listed in the roster files.
///
/// Serialized keys match the snapshot format the frontend reads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "roll")]
    pub roll_number: String,
    pub name: String,
    #[serde(rename = "url")]
    pub profile_url: String,
    pub section: String,
    #[serde(rename = "dayi")]
    pub day: String,
}

impl RosterEntry {
    pub fn profile_username(&self) -> Option<&str> {
        crate::roster::profile_username(&self.profile_url)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_solved: u32,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
}

impl Stats {
    /// Builds stats from upstream `(difficulty, count)` pairs.
    ///
    /// Labels other than `All`, `Easy`, `Medium` and `Hard` are dropped.
    pub fn from_counts<'a, I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let mut stats = Self::default();

        for (difficulty, count) in counts {
            match difficulty {
                "All" => stats.total_solved = count,
                "Easy" => stats.easy_solved = count,
                "Medium" => stats.medium_solved = count,
                "Hard" => stats.hard_solved = count,
                _ => {}
            }
        }

        stats
    }
}

/// Accepted submission exactly as upstream reports it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub title: String,
    pub timestamp: String,
    pub status_display: String,
    pub runtime: String,
    pub memory: String,
    pub lang: String,
}

impl Submission {
    /// Epoch seconds, or 0 when upstream sent something non-numeric.
    pub fn epoch_seconds(&self) -> i64 {
        parse_epoch(&self.timestamp)
    }
}

/// Stats block attached to a record whose profile URL resolved to a username.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub username: String,
    #[serde(flatten)]
    pub stats: Stats,
    pub recent_submissions: Vec<Submission>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRecord {
    #[serde(flatten)]
    pub entry: RosterEntry,
    #[serde(flatten)]
    pub profile: Option<ProfileData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl LeaderboardRecord {
    pub fn with_profile(
        entry: RosterEntry,
        username: String,
        stats: Stats,
        recent_submissions: Vec<Submission>,
    ) -> Self {
        Self {
            entry,
            profile: Some(ProfileData {
                username,
                stats,
                recent_submissions,
            }),
            info: None,
        }
    }

    pub fn without_profile(entry: RosterEntry) -> Self {
        Self {
            entry,
            profile: None,
            info: Some(NO_DATA_INFO.to_string()),
        }
    }

    pub fn stats(&self) -> Option<&Stats> {
        self.profile.as_ref().map(|profile| &profile.stats)
    }

    pub fn total_solved(&self) -> u32 {
        self.stats().map_or(0, |stats| stats.total_solved)
    }
}

/// Entry of the live recent-submissions feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSubmission {
    pub username: String,
    pub title: String,
    pub timestamp: String,
}

impl RecentSubmission {
    pub fn epoch_seconds(&self) -> i64 {
        parse_epoch(&self.timestamp)
    }
}

fn parse_epoch(timestamp: &str) -> i64 {
    timestamp.trim().parse().unwrap_or(0)
}

/// Orders records by total solved, highest first. Records without stats count as 0.
pub fn rank(records: &mut [LeaderboardRecord]) {
    records.sort_by(|a, b| b.total_solved().cmp(&a.total_solved()));
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn entry(roll: &str) -> RosterEntry {
        RosterEntry {
            roll_number: roll.to_string(),
            name: format!("Student {roll}"),
            profile_url: format!("https://leetcode.com/u/{roll}/"),
            section: "A".to_string(),
            day: "Mon".to_string(),
        }
    }

    fn solved(roll: &str, total: u32) -> LeaderboardRecord {
        LeaderboardRecord::with_profile(
            entry(roll),
            roll.to_string(),
            Stats {
                total_solved: total,
                ..Stats::default()
            },
            Vec::new(),
        )
    }

    #[test]
    fn test_counts_mapping() {
        let stats = Stats::from_counts([("All", 10), ("Easy", 5), ("Medium", 4), ("Hard", 1)]);

        assert_eq!(
            stats,
            Stats {
                total_solved: 10,
                easy_solved: 5,
                medium_solved: 4,
                hard_solved: 1,
            }
        );
    }

    #[test]
    fn test_unknown_difficulty_ignored() {
        let stats = Stats::from_counts([("Insane", 99), ("Easy", 3)]);

        assert_eq!(stats.easy_solved, 3);
        assert_eq!(stats.total_solved, 0);
        assert_eq!(Stats::from_counts([]), Stats::default());
    }

    #[test]
    fn test_rank_descending() {
        let mut records = vec![solved("a", 5), solved("b", 20), solved("c", 0), solved("d", 20)];
        rank(&mut records);

        let totals: Vec<u32> = records.iter().map(LeaderboardRecord::total_solved).collect();
        assert_eq!(totals, vec![20, 20, 5, 0]);
    }

    #[test]
    fn test_rank_treats_missing_stats_as_zero() {
        let mut records = vec![LeaderboardRecord::without_profile(entry("x")), solved("y", 1)];
        rank(&mut records);

        assert_eq!(records[0].entry.roll_number, "y");
        assert!(records[1].info.is_some());
    }

    #[test]
    fn test_no_data_record_shape() {
        let value = serde_json::to_value(LeaderboardRecord::without_profile(entry("x"))).unwrap();

        assert_eq!(
            value,
            json!({
                "roll": "x",
                "name": "Student x",
                "url": "https://leetcode.com/u/x/",
                "section": "A",
                "dayi": "Mon",
                "info": "No LeetCode data available",
            })
        );
    }

    #[test]
    fn test_profile_record_shape() {
        let submission = Submission {
            id: "1".to_string(),
            title: "Two Sum".to_string(),
            timestamp: "1700000000".to_string(),
            status_display: "Accepted".to_string(),
            runtime: "3 ms".to_string(),
            memory: "2 MB".to_string(),
            lang: "rust".to_string(),
        };
        let record = LeaderboardRecord::with_profile(
            entry("p"),
            "p".to_string(),
            Stats::default(),
            vec![submission],
        );
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["username"], "p");
        assert_eq!(value["totalSolved"], 0);
        assert_eq!(value["recentSubmissions"][0]["statusDisplay"], "Accepted");
        assert_eq!(value.get("info"), None);

        let back: LeaderboardRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_no_data_record_reads_back_without_profile() {
        let record = LeaderboardRecord::without_profile(entry("z"));
        let value: Value = serde_json::to_value(record).unwrap();
        let back: LeaderboardRecord = serde_json::from_value(value).unwrap();

        assert!(back.profile.is_none());
        assert_eq!(back.total_solved(), 0);
    }

    #[test]
    fn test_epoch_seconds_fallback() {
        let mut submission = Submission {
            id: "1".to_string(),
            title: "t".to_string(),
            timestamp: "42".to_string(),
            status_display: "Accepted".to_string(),
            runtime: String::new(),
            memory: String::new(),
            lang: String::new(),
        };
        assert_eq!(submission.epoch_seconds(), 42);

        submission.timestamp = "soon".to_string();
        assert_eq!(submission.epoch_seconds(), 0);
    }
}
