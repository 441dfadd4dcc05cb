use bank::{Stats, Submission};
use serde::Deserialize;

pub const ENDPOINT: &str = "https://leetcode.com/graphql";

pub const RECENT_SUBMISSION_LIMIT: u32 = 3;

pub const USER_STATS_QUERY: &str = r#"
    query userStats($username: String!) {
        matchedUser(username: $username) {
            username
            submitStats: submitStatsGlobal {
                acSubmissionNum {
                    difficulty
                    count
                    submissions
                }
            }
        }
    }
"#;

pub const RECENT_SUBMISSIONS_QUERY: &str = r#"
    query recentAcSubmissions($username: String!, $limit: Int!) {
        recentAcSubmissionList(username: $username, limit: $limit) {
            id
            title
            timestamp
            statusDisplay
            runtime
            memory
            lang
        }
    }
"#;

#[derive(Deserialize)]
pub struct Response<T> {
    pub data: T,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsData {
    pub matched_user: Option<MatchedUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUser {
    pub submit_stats: SubmitStats,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStats {
    pub ac_submission_num: Option<Vec<DifficultyCount>>,
}

#[derive(Deserialize)]
pub struct DifficultyCount {
    pub difficulty: String,
    pub count: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSubmissionsData {
    pub recent_ac_submission_list: Option<Vec<Submission>>,
}

impl SubmitStats {
    pub fn to_stats(&self) -> Stats {
        Stats::from_counts(
            self.ac_submission_num
                .iter()
                .flatten()
                .map(|item| (item.difficulty.as_str(), item.count)),
        )
    }
}
