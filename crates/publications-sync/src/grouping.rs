//! Grouping of works by publication year.

use std::collections::HashMap;
use std::fmt;

use crate::models::Paper;

/// Bucket key: a publication year, or unknown when the record has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearKey {
    /// Record carries no year.
    Unknown,
    /// Publication year as reported by the API.
    Year(i32),
}

impl YearKey {
    /// Key for a record's year field.
    #[must_use]
    pub const fn from_year(year: Option<i32>) -> Self {
        match year {
            Some(y) => Self::Year(y),
            None => Self::Unknown,
        }
    }

    /// `(is_unknown, year)`; sorting this pair descending puts "Unknown"
    /// first, then years newest to oldest.
    const fn rank(self) -> (bool, i32) {
        match self {
            Self::Unknown => (true, 0),
            Self::Year(y) => (false, y),
        }
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("Unknown"),
            Self::Year(y) => write!(f, "{y}"),
        }
    }
}

/// Works sharing one [`YearKey`], in fetch order.
#[derive(Debug, Clone, PartialEq)]
pub struct YearBucket<'a> {
    /// Grouping key.
    pub key: YearKey,
    /// Works in this bucket.
    pub papers: Vec<&'a Paper>,
}

/// Buckets ordered "Unknown" first, then years newest to oldest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedPublications<'a> {
    buckets: Vec<YearBucket<'a>>,
}

impl<'a> GroupedPublications<'a> {
    /// Buckets in display order.
    #[must_use]
    pub fn buckets(&self) -> &[YearBucket<'a>] {
        &self.buckets
    }

    /// Total number of works across all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.papers.len()).sum()
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when there are no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Bucket keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = YearKey> + '_ {
        self.buckets.iter().map(|b| b.key)
    }
}

/// Group works by year. Stable: each bucket keeps the input order.
#[must_use]
pub fn group_by_year(papers: &[Paper]) -> GroupedPublications<'_> {
    let mut index: HashMap<YearKey, usize> = HashMap::new();
    let mut buckets: Vec<YearBucket<'_>> = Vec::new();

    for paper in papers {
        let key = YearKey::from_year(paper.year);
        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push(YearBucket { key, papers: Vec::new() });
            buckets.len() - 1
        });
        buckets[slot].papers.push(paper);
    }

    buckets.sort_by(|a, b| b.key.rank().cmp(&a.key.rank()));

    GroupedPublications { buckets }
}
