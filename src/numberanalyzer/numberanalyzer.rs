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

use std::collections::HashSet;

use log::{trace, warn};
use strum::IntoEnumIterator;

use crate::{
    interfaces::MatcherApi,
    macros::ok_or_log_return,
    numberanalyzer::{
        categories::{Category, CategoryTag},
        helper_constants::PLUS_SIGN,
        helper_functions::{category_patterns_for_tag, collapse_fixed_or_mobile, leading_prefix_len},
        metadata::{MetadataStore, NumberFormat, RegionMetadata},
        results::{AnalysisEntry, AnalysisResult},
    },
    regex_based_matcher::RegexBasedMatcher,
    regex_util::{RegexConsume, RegexFullMatch},
    regexp_cache::{InvalidRegexError, RegexCache},
    string_util,
};

/// Resolves raw digit strings against a store of per-region numbering
/// plans.
///
/// One analyzer instance wraps an immutable [`MetadataStore`] and answers
/// [`NumberAnalyzer::analyze`] calls without mutating shared state, so it
/// can be used from any number of threads at once.
pub struct NumberAnalyzer {
    /// An API for category pattern checking.
    matcher_api: Box<dyn MatcherApi + Send + Sync>,

    /// Compiled programs for the normalization and format-selection
    /// patterns, which need capture groups and are therefore evaluated
    /// outside the matcher API.
    regexp_cache: RegexCache,

    /// The externally built, read-only plan database.
    store: MetadataStore,

    /// Region consulted for hint-less calls. Set to an id the store does
    /// not know (conventionally `i18n::RegionCode::zz()`) to disable the
    /// default-region attempt.
    default_region: String,
}

impl NumberAnalyzer {
    pub fn new(store: MetadataStore, default_region: impl Into<String>) -> Self {
        Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            regexp_cache: RegexCache::with_capacity(64),
            store,
            default_region: default_region.into().to_ascii_uppercase(),
        }
    }

    pub fn supported_regions(&self) -> Vec<&str> {
        self.store.iter().map(|metadata| metadata.id()).collect()
    }

    pub fn is_valid_region_code(&self, region_code: &str) -> bool {
        self.store.lookup(region_code).is_some()
    }

    /// Returns the well-known categories the region publishes usable
    /// pattern data for, or `None` for an unknown region. The combined
    /// fixed-or-mobile category is never reported here since it only
    /// expresses that the plain two cannot be told apart.
    pub fn supported_categories_for_region(
        &self,
        region_code: &str,
    ) -> Option<HashSet<Category>> {
        let Some(metadata) = self.store.lookup(region_code) else {
            warn!("Invalid or unknown region code provided: {}", region_code);
            return None;
        };
        let mut categories = HashSet::new();
        for category in Category::iter() {
            if matches!(category, Category::General | Category::FixedLineOrMobile) {
                continue;
            }
            let tag = CategoryTag::from(category);
            let has_data = metadata
                .category_patterns()
                .get(&tag)
                .map(|patterns| !patterns.valid().is_empty() || !patterns.possible().is_empty())
                .unwrap_or(false);
            if has_data {
                categories.insert(category);
            }
        }
        Some(categories)
    }

    /// Resolves a raw number against the plan database.
    ///
    /// The number is expected to be a digit string; decimal digits from
    /// any script are folded to ASCII first, anything else simply fails
    /// the plan patterns. The hint names the region the number is
    /// believed to belong to and is matched case-insensitively; an
    /// unknown hint degrades to the hint-less behavior (default region
    /// plus full detection).
    ///
    /// Never fails: an unrecognized number yields an empty result.
    pub fn analyze(&self, raw_number: &str, region_hint: Option<&str>) -> AnalysisResult {
        let number = String::from(dec_from_char::normalize_decimals(raw_number));
        trace!("Analyzing '{}' (hint {:?})", number, region_hint);
        self.analyze_inner(&number, region_hint, true)
    }

    /// Top-level control flow behind [`NumberAnalyzer::analyze`].
    ///
    /// `allow_redetect` bounds the restart performed when a hinted
    /// attempt discovers an international prefix: the restarted pass runs
    /// with the flag off and therefore cannot restart again.
    fn analyze_inner(
        &self,
        number: &str,
        region_hint: Option<&str>,
        allow_redetect: bool,
    ) -> AnalysisResult {
        let hinted = region_hint.and_then(|hint| {
            let metadata = self.store.lookup(hint);
            if metadata.is_none() {
                warn!("Unknown region hint '{}', treating the call as hint-less", hint);
            }
            metadata
        });
        let base_metadata = hinted.or_else(|| self.store.lookup(&self.default_region));

        let base = match base_metadata {
            Some(metadata) => self.resolve_with_region(number, metadata, allow_redetect),
            None => AnalysisResult::new(),
        };
        if base.has_valid_entry() {
            return base;
        }

        let second_attempt = match hinted {
            None => Some(self.detect_regions(number)),
            Some(metadata) => self
                .rebuild_with_double_prefix(number, metadata)
                .map(|rebuilt| {
                    trace!(
                        "Retrying region {} with re-inserted national prefix: '{}'",
                        metadata.id(),
                        rebuilt
                    );
                    self.resolve_with_region(&rebuilt, metadata, false)
                }),
        };
        prefer_candidate(base, second_attempt)
    }

    /// Runs normalization and category matching for exactly one region.
    ///
    /// Produces at most one entry, keyed by the region's id. The one
    /// exception is a canonical form starting with `+`: the input then
    /// carries an international prefix pointing away from this region, so
    /// (when permitted) the whole detection restarts without a hint and
    /// that result is returned as-is.
    fn resolve_with_region(
        &self,
        number: &str,
        metadata: &RegionMetadata,
        allow_redetect: bool,
    ) -> AnalysisResult {
        let canonical = ok_or_log_return!(
            self.canonicalize(number, metadata),
            AnalysisResult::new()
        );
        if let Some(without_plus) = canonical.strip_prefix(PLUS_SIGN) {
            if !allow_redetect {
                trace!(
                    "Region {}: '{}' resolves to an international form, not restarting",
                    metadata.id(),
                    number
                );
                return AnalysisResult::new();
            }
            trace!(
                "'{}' carries an international prefix, restarting detection over all regions",
                number
            );
            return self.analyze_inner(without_plus, None, false);
        }

        let national_number = canonical
            .strip_prefix(metadata.country_code_digits())
            .unwrap_or(canonical.as_str());
        let maybe_entry = ok_or_log_return!(
            self.build_entry(national_number, metadata),
            AnalysisResult::new()
        );

        let mut result = AnalysisResult::new();
        if let Some(entry) = maybe_entry {
            result.insert(entry);
        }
        result
    }

    /// Converts a raw number into its canonical calling-code-prefixed
    /// form, or an international `+`-form when the input starts with the
    /// region's international prefix. Never fails to produce a string;
    /// whether the result means anything is up to the category patterns.
    fn canonicalize(
        &self,
        number: &str,
        metadata: &RegionMetadata,
    ) -> Result<String, InvalidRegexError> {
        if let Some(general) = metadata.category_patterns().get(&CategoryTag::GENERAL) {
            if !general.valid().is_empty() {
                let valid_pattern = self.regexp_cache.get_regex(general.valid())?;
                if let Some(captures) = valid_pattern.captures_full(number) {
                    // The whole input, prefixes included, is a valid number
                    // for this plan; everything after the captured prefix
                    // digits is the national portion.
                    let national_start = leading_prefix_len(&captures);
                    return Ok(fast_cat::concat_str!(
                        metadata.country_code_digits(),
                        &number[national_start..]
                    ));
                }
            }
        }

        if !metadata.international_prefix().is_empty() {
            let prefix_pattern = self.regexp_cache.get_regex(metadata.international_prefix())?;
            if let Some(matched) = prefix_pattern.find_start(number) {
                if !matched.is_empty() {
                    return Ok(fast_cat::concat_str!(PLUS_SIGN, &number[matched.end()..]));
                }
            }
        }

        Ok(fast_cat::concat_str!(metadata.country_code_digits(), number))
    }

    /// Scores the national number against the region's category table.
    ///
    /// Returns `None` when the number does not even pass the plan's
    /// general description; an entry with an empty valid-categories set
    /// when only the general possible pattern accepts it; a full entry
    /// otherwise.
    fn build_entry(
        &self,
        national_number: &str,
        metadata: &RegionMetadata,
    ) -> Result<Option<AnalysisEntry>, InvalidRegexError> {
        let Some(general) = metadata.category_patterns().get(&CategoryTag::GENERAL) else {
            trace!("Region {} has no general description", metadata.id());
            return Ok(None);
        };

        let general_valid = self
            .matcher_api
            .match_category(national_number, general.valid(), false);
        if !general_valid
            && !self
                .matcher_api
                .match_category(national_number, general.possible(), false)
        {
            trace!(
                "'{}' is neither valid nor possible for region {}",
                national_number,
                metadata.id()
            );
            return Ok(None);
        }

        let (valid_categories, possible_categories) =
            self.match_categories(national_number, metadata, !general_valid);
        let selected_format = self
            .choose_format_for_number(metadata.number_formats(), national_number)?
            .cloned()
            .unwrap_or_else(NumberFormat::passthrough);

        trace!(
            "'{}' in region {}: valid for {:?}, possible for {:?}",
            national_number,
            metadata.id(),
            valid_categories,
            possible_categories
        );
        Ok(Some(AnalysisEntry::new(
            metadata.profile(),
            national_number.to_owned(),
            selected_format,
            valid_categories,
            possible_categories,
        )))
    }

    /// Determines, per category, whether the national number is valid
    /// and/or possible. `general_not_valid` marks that the plan's general
    /// description already rejected the number, which caps every category
    /// at "possible".
    fn match_categories(
        &self,
        national_number: &str,
        metadata: &RegionMetadata,
        general_not_valid: bool,
    ) -> (HashSet<CategoryTag>, HashSet<CategoryTag>) {
        let mut valid = HashSet::new();
        let mut possible = HashSet::new();

        for tag in metadata.category_patterns().keys() {
            if tag.is_baseline() {
                continue;
            }
            self.score_category(
                national_number,
                metadata,
                tag,
                general_not_valid,
                &mut valid,
                &mut possible,
            );
        }

        // The fixed-line/mobile family sits outside the generic loop so
        // overlapping plans can be folded into the combined category.
        self.score_category(
            national_number,
            metadata,
            &CategoryTag::FIXED_LINE,
            general_not_valid,
            &mut valid,
            &mut possible,
        );
        self.score_category(
            national_number,
            metadata,
            &CategoryTag::MOBILE,
            general_not_valid,
            &mut valid,
            &mut possible,
        );
        if !possible.contains(&CategoryTag::FIXED_LINE)
            && !possible.contains(&CategoryTag::MOBILE)
        {
            // Plans that only publish the combined category still get it
            // reported, through its dedicated pair or the fixed-line
            // fallback.
            self.score_category(
                national_number,
                metadata,
                &CategoryTag::FIXED_OR_MOBILE,
                general_not_valid,
                &mut valid,
                &mut possible,
            );
        }

        collapse_fixed_or_mobile(&mut valid);
        collapse_fixed_or_mobile(&mut possible);
        (valid, possible)
    }

    fn score_category(
        &self,
        national_number: &str,
        metadata: &RegionMetadata,
        tag: &CategoryTag,
        general_not_valid: bool,
        valid: &mut HashSet<CategoryTag>,
        possible: &mut HashSet<CategoryTag>,
    ) {
        let Some(patterns) = category_patterns_for_tag(metadata, tag) else {
            return;
        };
        let matches_valid = self
            .matcher_api
            .match_category(national_number, patterns.valid(), false);
        if matches_valid && !general_not_valid {
            valid.insert(tag.clone());
        }
        if matches_valid
            || self
                .matcher_api
                .match_category(national_number, patterns.possible(), false)
        {
            possible.insert(tag.clone());
        }
    }

    /// Tries every region in the store and aggregates all regions the
    /// number is at least possible for. Entries never collide since each
    /// is keyed by its own region id.
    fn detect_regions(&self, number: &str) -> AnalysisResult {
        let mut aggregate = AnalysisResult::new();
        for metadata in self.store.iter() {
            let plain = self.resolve_with_region(number, metadata, false);
            let already_valid = plain
                .get(metadata.id())
                .map_or(false, |entry| entry.is_valid());
            let resolved = if already_valid {
                plain
            } else {
                let retried = self
                    .rebuild_with_double_prefix(number, metadata)
                    .map(|rebuilt| self.resolve_with_region(&rebuilt, metadata, false));
                prefer_candidate(plain, retried)
            };
            aggregate.merge(resolved);
        }
        aggregate
    }

    /// Rebuilds the input with the region's national prefix re-inserted
    /// after the calling code, for plans where both spellings denote the
    /// same subscriber number. `None` when the region does not have the
    /// quirk or the input is not in the expected shape.
    fn rebuild_with_double_prefix(
        &self,
        number: &str,
        metadata: &RegionMetadata,
    ) -> Option<String> {
        if !metadata.allows_double_prefix()
            || metadata.national_prefix().is_empty()
            || number.starts_with(PLUS_SIGN)
        {
            return None;
        }
        string_util::reinsert_after_prefix(
            number,
            metadata.country_code_digits(),
            metadata.national_prefix(),
        )
    }

    /// Picks the first format rule whose leading-digits constraint (if
    /// any) matches the start of the national number and whose main
    /// pattern consumes it in full.
    fn choose_format_for_number<'b>(
        &self,
        available_formats: &'b [NumberFormat],
        national_number: &str,
    ) -> Result<Option<&'b NumberFormat>, InvalidRegexError> {
        for format in available_formats {
            if let Some(leading_digits) = format.leading_digits_pattern() {
                let leading_pattern = self.regexp_cache.get_regex(leading_digits)?;
                if !leading_pattern.matches_start(national_number) {
                    continue;
                }
            }
            let pattern_to_match = self.regexp_cache.get_regex(format.pattern())?;
            if pattern_to_match.full_match(national_number) {
                return Ok(Some(format));
            }
        }
        Ok(None)
    }

    /// Renders an entry's national number through its selected format
    /// rule. Falls back to the bare national number when the rule does
    /// not apply.
    pub fn format_entry(&self, entry: &AnalysisEntry) -> String {
        let format = entry.selected_format();
        let pattern = ok_or_log_return!(
            self.regexp_cache.get_regex(format.pattern()),
            entry.national_number().to_owned()
        );
        if !pattern.full_match(entry.national_number()) {
            return entry.national_number().to_owned();
        }
        pattern
            .replace(entry.national_number(), format.format())
            .into_owned()
    }
}

/// Chooses between the hinted attempt and its second-chance counterpart
/// (full detection or a double-prefix retry).
///
/// A candidate containing at least one validly matched category always
/// outranks one with only possible matches, and an empty or purely
/// speculative base never blocks a stronger alternative.
pub(crate) fn prefer_candidate(
    base: AnalysisResult,
    alternative: Option<AnalysisResult>,
) -> AnalysisResult {
    let Some(alternative) = alternative else {
        return base;
    };
    if base.is_empty() || !base.has_possible_entry() {
        return alternative;
    }
    if alternative.has_valid_entry() {
        return alternative;
    }
    base
}
