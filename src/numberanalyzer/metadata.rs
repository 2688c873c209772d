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

use std::collections::HashMap;

use log::warn;

use super::categories::CategoryTag;
use super::helper_constants::{PASSTHROUGH_FORMAT_PATTERN, PASSTHROUGH_FORMAT_TEMPLATE};
use super::results::RegionProfile;

/// The pattern pair describing one category of a numbering plan.
///
/// `possible` is a loose shape/length check; `valid` confirms the number
/// belongs to an assigned, dialable range. Either source may be empty,
/// in which case it never matches (a missing `possible` pattern falls
/// back to `valid` at match time).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPatterns {
    possible: String,
    valid: String,
}

impl CategoryPatterns {
    pub fn new(possible: impl Into<String>, valid: impl Into<String>) -> Self {
        Self {
            possible: possible.into(),
            valid: valid.into(),
        }
    }

    /// Pattern pair for categories whose possible ranges equal their
    /// assigned ranges.
    pub fn valid_only(valid: impl Into<String>) -> Self {
        Self {
            possible: String::new(),
            valid: valid.into(),
        }
    }

    pub fn possible(&self) -> &str {
        &self.possible
    }

    pub fn valid(&self) -> &str {
        &self.valid
    }
}

/// One display formatting rule of a region.
///
/// `leading_digits_pattern` restricts the rule to numbers whose national
/// part starts with the given prefix pattern; `pattern` must consume the
/// national number in full for the rule to apply; `format` is the
/// replacement template (`$1 $2 ...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    leading_digits_pattern: Option<String>,
    pattern: String,
    format: String,
}

impl NumberFormat {
    pub fn new(pattern: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            leading_digits_pattern: None,
            pattern: pattern.into(),
            format: format.into(),
        }
    }

    pub fn with_leading_digits(mut self, pattern: impl Into<String>) -> Self {
        self.leading_digits_pattern = Some(pattern.into());
        self
    }

    /// The rule applied when a region's format list is empty or no rule
    /// matches: the national number is rendered unchanged.
    pub fn passthrough() -> Self {
        Self::new(PASSTHROUGH_FORMAT_PATTERN, PASSTHROUGH_FORMAT_TEMPLATE)
    }

    pub fn leading_digits_pattern(&self) -> Option<&str> {
        self.leading_digits_pattern.as_deref()
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

/// The numbering-plan rules of one region.
///
/// Instances are built once by whatever loads the plan data, handed to a
/// [`MetadataStore`](crate::MetadataStore) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionMetadata {
    id: String,
    country_code: i32,
    country_code_digits: String,
    international_prefix: String,
    national_prefix: String,
    allows_double_prefix: bool,
    category_patterns: HashMap<CategoryTag, CategoryPatterns>,
    number_formats: Vec<NumberFormat>,
}

impl RegionMetadata {
    pub fn new(id: impl Into<String>, country_code: i32) -> Self {
        let mut buf = itoa::Buffer::new();
        let country_code_digits = buf.format(country_code).to_owned();
        Self {
            id: id.into().to_ascii_uppercase(),
            country_code,
            country_code_digits,
            international_prefix: String::new(),
            national_prefix: String::new(),
            allows_double_prefix: false,
            category_patterns: HashMap::new(),
            number_formats: Vec::new(),
        }
    }

    /// Pattern recognizing the region's international dialing prefix at
    /// the start of an input (e.g. `(?:00|\+)`).
    pub fn with_international_prefix(mut self, pattern: impl Into<String>) -> Self {
        self.international_prefix = pattern.into();
        self
    }

    pub fn with_national_prefix(mut self, digits: impl Into<String>) -> Self {
        self.national_prefix = digits.into();
        self
    }

    /// Marks the region as accepting numbers written with or without an
    /// extra national-prefix token between the calling code and the
    /// subscriber digits.
    pub fn with_double_prefix(mut self) -> Self {
        self.allows_double_prefix = true;
        self
    }

    pub fn with_category(
        mut self,
        tag: impl Into<CategoryTag>,
        patterns: CategoryPatterns,
    ) -> Self {
        self.category_patterns.insert(tag.into(), patterns);
        self
    }

    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.number_formats.push(format);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    /// The calling code as the digit string it contributes to canonical
    /// numbers.
    pub fn country_code_digits(&self) -> &str {
        &self.country_code_digits
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

    pub fn category_patterns(&self) -> &HashMap<CategoryTag, CategoryPatterns> {
        &self.category_patterns
    }

    pub fn number_formats(&self) -> &[NumberFormat] {
        &self.number_formats
    }

    /// The region data echoed in analysis entries: everything except the
    /// pattern table and the format list, which are consumed during
    /// matching rather than reported.
    pub fn profile(&self) -> RegionProfile {
        RegionProfile::new(
            self.id.clone(),
            self.country_code,
            self.international_prefix.clone(),
            self.national_prefix.clone(),
            self.allows_double_prefix,
        )
    }
}

/// Immutable mapping from region identifier to that region's plan rules.
///
/// Detection passes iterate regions in the order they were supplied, so a
/// store built from stable input yields deterministic aggregates. Lookups
/// are case-insensitive.
#[derive(Debug, Default)]
pub struct MetadataStore {
    regions: Vec<RegionMetadata>,
    region_index_by_id: HashMap<String, usize>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_regions(regions: impl IntoIterator<Item = RegionMetadata>) -> Self {
        let mut store = Self::new();
        for metadata in regions {
            if let Some(&index) = store.region_index_by_id.get(metadata.id()) {
                warn!("Duplicate metadata for region {}, keeping the later entry", metadata.id());
                store.regions[index] = metadata;
                continue;
            }
            store
                .region_index_by_id
                .insert(metadata.id().to_owned(), store.regions.len());
            store.regions.push(metadata);
        }
        store
    }

    pub fn lookup(&self, region_code: &str) -> Option<&RegionMetadata> {
        self.region_index_by_id
            .get(&region_code.to_ascii_uppercase())
            .map(|&index| &self.regions[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegionMetadata> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
