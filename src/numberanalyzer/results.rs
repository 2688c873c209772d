// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::{HashMap, HashSet};

use super::categories::CategoryTag;
use super::metadata::NumberFormat;

/// The region data carried by an [`AnalysisEntry`]: the plan's identity
/// and prefix properties, without the pattern table and format list.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionProfile {
    id: String,
    country_code: i32,
    international_prefix: String,
    national_prefix: String,
    allows_double_prefix: bool,
}

impl RegionProfile {
    pub(crate) fn new(
        id: String,
        country_code: i32,
        international_prefix: String,
        national_prefix: String,
        allows_double_prefix: bool,
    ) -> Self {
        Self {
            id,
            country_code,
            international_prefix,
            national_prefix,
            allows_double_prefix,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn international_prefix(&self) -> &str {
        &self.international_prefix
    }

    pub fn national_prefix(&self) -> &str {
        &self.national_prefix
    }

    pub fn allows_double_prefix(&self) -> bool {
        self.allows_double_prefix
    }
}

/// What one region's plan had to say about a number.
///
/// Produced for every region the number is at least possible for. The
/// national number is fixed at creation, when the calling code and any
/// detected prefix digits are stripped; it is never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisEntry {
    region: RegionProfile,
    national_number: String,
    selected_format: NumberFormat,
    valid_categories: HashSet<CategoryTag>,
    possible_categories: HashSet<CategoryTag>,
}

impl AnalysisEntry {
    pub(crate) fn new(
        region: RegionProfile,
        national_number: String,
        selected_format: NumberFormat,
        valid_categories: HashSet<CategoryTag>,
        possible_categories: HashSet<CategoryTag>,
    ) -> Self {
        Self {
            region,
            national_number,
            selected_format,
            valid_categories,
            possible_categories,
        }
    }

    pub fn region(&self) -> &RegionProfile {
        &self.region
    }

    /// The canonical national significant number: the input with the
    /// calling code and any detected prefix digits removed.
    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    pub fn selected_format(&self) -> &NumberFormat {
        &self.selected_format
    }

    pub fn valid_categories(&self) -> &HashSet<CategoryTag> {
        &self.valid_categories
    }

    pub fn possible_categories(&self) -> &HashSet<CategoryTag> {
        &self.possible_categories
    }

    /// Whether the number matched at least one category's assigned range.
    pub fn is_valid(&self) -> bool {
        !self.valid_categories.is_empty()
    }
}

/// Aggregate outcome of one analysis call, keyed by region id.
///
/// Empty when no region recognized the number. Several entries are
/// expected for numbering plans that share a calling code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisResult(HashMap<String, AnalysisEntry>);

impl AnalysisResult {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, region_code: &str) -> Option<&AnalysisEntry> {
        self.0.get(&region_code.to_ascii_uppercase())
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|id| id.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = &AnalysisEntry> {
        self.0.values()
    }

    /// Whether any entry carries a non-empty valid-categories set.
    pub fn has_valid_entry(&self) -> bool {
        self.0.values().any(|entry| entry.is_valid())
    }

    /// Whether any entry carries a non-empty possible-categories set.
    pub fn has_possible_entry(&self) -> bool {
        self.0.values().any(|entry| !entry.possible_categories().is_empty())
    }

    /// Keyed by the entry's own region id; an already present region is
    /// kept untouched, so earlier entries always win.
    pub(crate) fn insert(&mut self, entry: AnalysisEntry) {
        self.0
            .entry(entry.region().id().to_owned())
            .or_insert(entry);
    }

    pub(crate) fn merge(&mut self, other: AnalysisResult) {
        for entry in other.0.into_values() {
            self.insert(entry);
        }
    }
}
