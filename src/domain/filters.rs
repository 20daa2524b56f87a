use serde::Deserialize;

use crate::domain::screenshots::Screenshot;

/// The "no filter" sentinel the dropdowns use.
pub const ALL: &str = "All";

/// Raw filter parameters as they arrive on the query string. `All`,
/// blanks, and non-numeric years all deactivate their criterion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

impl FilterQuery {
    pub fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            query: self
                .q
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
            subject: active(self.subject),
            year: active(self.year).and_then(|y| y.parse().ok()),
            tag: active(self.tag),
        }
    }
}

fn active(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != ALL)
}

/// Four independent criteria; a record must match every active one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: Option<String>,
    pub subject: Option<String>,
    pub year: Option<i32>,
    pub tag: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.subject.is_none() && self.year.is_none() && self.tag.is_none()
    }
}

/// Select the records matching all active criteria, preserving input
/// order. A pure linear scan; fine for the tens-to-hundreds of records a
/// gallery holds.
pub fn filter<'a>(collection: &'a [Screenshot], criteria: &FilterCriteria) -> Vec<&'a Screenshot> {
    collection.iter().filter(|s| matches(s, criteria)).collect()
}

pub fn matches(screenshot: &Screenshot, criteria: &FilterCriteria) -> bool {
    if let Some(subject) = &criteria.subject
        && screenshot.subject != *subject
    {
        return false;
    }
    if let Some(year) = criteria.year
        && screenshot.year != year
    {
        return false;
    }
    if let Some(tag) = &criteria.tag
        && !screenshot.tags.iter().any(|t| t == tag)
    {
        return false;
    }
    if let Some(query) = &criteria.query {
        let haystack = format!(
            "{} {} {} {}",
            screenshot.subject,
            screenshot.topic,
            screenshot.tags.join(" "),
            screenshot.year
        )
        .to_lowercase();
        return haystack.contains(&query.to_lowercase());
    }
    true
}

/// Options for the filter bar dropdowns: distinct subjects, years, and
/// tags in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub subjects: Vec<String>,
    pub years: Vec<String>,
    pub tags: Vec<String>,
}

pub fn facet_options(collection: &[Screenshot]) -> FacetOptions {
    let mut facets = FacetOptions::default();
    for screenshot in collection {
        push_distinct(&mut facets.subjects, screenshot.subject.clone());
        push_distinct(&mut facets.years, screenshot.year.to_string());
        for tag in &screenshot.tags {
            push_distinct(&mut facets.tags, tag.clone());
        }
    }
    facets
}

fn push_distinct(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}
