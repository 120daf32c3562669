// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named snapshots of rule lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::Result;

use super::expression::FilterExpression;
use super::rule::FilterRule;

/// A named rule list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedFilter {
    /// Format: `sf-{hash}`, first 8 hex chars of SHA256(name + created_at).
    pub id: String,
    pub name: String,
    pub rules: Vec<FilterRule>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavedFilter {
    /// A fresh expression over a copy of the saved rules.
    pub fn expression(&self) -> FilterExpression {
        FilterExpression::from_rules(self.rules.clone())
    }
}

/// Generate a saved filter ID from its name and creation time.
pub fn generate_id(name: &str, created_at: &DateTime<Utc>) -> String {
    let input = format!("{}{}", name, created_at.to_rfc3339());
    let hash = Sha256::digest(input.as_bytes());
    format!("sf-{}", hex::encode(&hash[..4]))
}

/// In-memory collection of saved filters, kept sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedFilters {
    filters: Vec<SavedFilter>,
}

impl SavedFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `rules` under `name`. Saving over an existing name replaces its
    /// rules and keeps its id and creation time.
    pub fn save(&mut self, name: &str, rules: Vec<FilterRule>, now: DateTime<Utc>) -> &SavedFilter {
        let index = match self.position(name) {
            Ok(index) => {
                let existing = &mut self.filters[index];
                existing.rules = rules;
                existing.updated_at = now;
                tracing::debug!(name, id = %existing.id, "replaced saved filter");
                index
            }
            Err(index) => {
                let id = self.unique_id(name, &now);
                tracing::debug!(name, id = %id, "created saved filter");
                self.filters.insert(
                    index,
                    SavedFilter {
                        id,
                        name: name.to_string(),
                        rules,
                        created_at: now,
                        updated_at: now,
                    },
                );
                index
            }
        };
        &self.filters[index]
    }

    pub fn get(&self, name: &str) -> Option<&SavedFilter> {
        self.position(name).ok().map(|i| &self.filters[i])
    }

    pub fn remove(&mut self, name: &str) -> Option<SavedFilter> {
        self.position(name).ok().map(|i| self.filters.remove(i))
    }

    pub fn list(&self) -> &[SavedFilter] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a JSON array of saved filters. Entries are re-sorted by name.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut filters: SavedFilters = serde_json::from_str(json)?;
        filters.filters.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(filters)
    }

    fn position(&self, name: &str) -> std::result::Result<usize, usize> {
        self.filters
            .binary_search_by(|f| f.name.as_str().cmp(name))
    }

    fn unique_id(&self, name: &str, now: &DateTime<Utc>) -> String {
        let base = generate_id(name, now);
        let taken = |id: &str| self.filters.iter().any(|f| f.id == id);
        if !taken(&base) {
            return base;
        }
        let mut suffix = 2;
        loop {
            let id = format!("{}-{}", base, suffix);
            if !taken(&id) {
                return id;
            }
            suffix += 1;
        }
    }
}

#[cfg(test)]
#[path = "saved_tests.rs"]
mod tests;
