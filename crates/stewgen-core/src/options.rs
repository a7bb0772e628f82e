//! Proposal-level options.

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};
use crate::pool::Pool;

/// Longest accepted title. Fully qualified contract identifiers must stay
/// below the explorer's 300 character limit and the title appears three
/// times in one.
pub const MAX_TITLE_LEN: usize = 80;

/// Proposal metadata shared by every targeted pool.
///
/// `short_name` and `date` are fixed when the proposal is first generated
/// and carried verbatim through replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Overwrite existing files without asking. Never persisted.
    #[serde(skip)]
    pub force: bool,
    pub pools: Vec<Pool>,
    pub title: String,
    pub short_name: String,
    pub date: String,
    pub author: String,
    #[serde(default)]
    pub discussion: String,
}

impl Options {
    /// Build options for a fresh proposal.
    ///
    /// Duplicate pools are dropped, keeping first-seen order.
    pub fn new(
        pools: Vec<Pool>,
        title: &str,
        author: &str,
        discussion: &str,
        date: &str,
    ) -> GenResult<Self> {
        validate_title(title)?;

        let options = Self {
            force: false,
            pools: dedup_pools(pools),
            title: title.trim().to_string(),
            short_name: pascal_case(title),
            date: date.to_string(),
            author: author.to_string(),
            discussion: discussion.to_string(),
        };
        options.validate()?;
        Ok(options)
    }

    /// Check the invariants a loaded or freshly built value must hold.
    pub fn validate(&self) -> GenResult<()> {
        if self.pools.is_empty() {
            return Err(GenError::invalid_config("at least one pool is required"));
        }
        if self.short_name.is_empty() || !self.short_name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(GenError::InvalidTitle(format!(
                "short name '{}' must be non-empty and alphanumeric",
                self.short_name
            )));
        }
        if self.date.len() != 8 || !self.date.chars().all(|c| c.is_ascii_digit()) {
            return Err(GenError::invalid_config(format!(
                "date '{}' must be formatted as YYYYMMDD",
                self.date
            )));
        }
        Ok(())
    }

    /// Proposal folder name, prefixed with the date so folders sort chronologically.
    pub fn folder_name(&self) -> String {
        let target = match self.pools.as_slice() {
            [single] => single.as_str(),
            _ => "Multi",
        };
        format!("{}_{}_{}", self.date, target, self.short_name)
    }

    /// Contract name for one pool. The date is a suffix because identifiers
    /// cannot start with a digit.
    pub fn contract_name(&self, pool: Pool) -> String {
        format!("{}_{}_{}", pool, self.short_name, self.date)
    }
}

/// Validate a user supplied title.
pub fn validate_title(title: &str) -> GenResult<()> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(GenError::InvalidTitle("Your title can't be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(GenError::InvalidTitle("Your title is too long".to_string()));
    }
    if trimmed.contains("*/") {
        return Err(GenError::InvalidTitle("Your title can't contain '*/'".to_string()));
    }
    if pascal_case(trimmed).is_empty() {
        return Err(GenError::InvalidTitle(
            "Your title needs at least one letter or digit".to_string(),
        ));
    }
    Ok(())
}

/// Turn a title into an alphanumeric PascalCase identifier.
///
/// Every run of non-alphanumeric characters separates words; the first
/// character of each word is upper-cased and the rest is kept as typed.
pub fn pascal_case(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Today's date as `YYYYMMDD` in local time.
pub fn today() -> String {
    chrono::Local::now().format("%Y%m%d").to_string()
}

fn dedup_pools(pools: Vec<Pool>) -> Vec<Pool> {
    let mut unique = Vec::with_capacity(pools.len());
    for pool in pools {
        if !unique.contains(&pool) {
            unique.push(pool);
        }
    }
    unique
}
