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

use regex::Captures;

use super::categories::CategoryTag;
use super::helper_constants::MAX_LEADING_PREFIX_GROUPS;
use super::metadata::{CategoryPatterns, RegionMetadata};

/// Byte length of the prefix consumed by the leading capture groups of a
/// general-description match.
///
/// Plans capture trunk and country prefixes in up to two groups at the
/// start of the pattern; the groups must be contiguous from the start of
/// the input to count. The remainder of the match is the national
/// portion.
pub(super) fn leading_prefix_len(captures: &Captures) -> usize {
    let mut offset = 0;
    for index in 1..=MAX_LEADING_PREFIX_GROUPS {
        if index >= captures.len() {
            break;
        }
        let Some(group) = captures.get(index) else {
            // An unmatched optional prefix group; the next one may still
            // start at the current offset.
            continue;
        };
        if group.start() != offset {
            break;
        }
        offset = group.end();
    }
    offset
}

/// Looks up the pattern pair for a category tag.
///
/// Plans that cannot split fixed-line from mobile publish the shared
/// ranges under `fixedLine` only, so the combined tag falls back to that
/// pair when it has no dedicated one. Any other tag without a pair is
/// simply absent.
pub(super) fn category_patterns_for_tag<'a>(
    metadata: &'a RegionMetadata,
    tag: &CategoryTag,
) -> Option<&'a CategoryPatterns> {
    let patterns = metadata.category_patterns().get(tag);
    if patterns.is_none() && *tag == CategoryTag::FIXED_OR_MOBILE {
        return metadata.category_patterns().get(&CategoryTag::FIXED_LINE);
    }
    patterns
}

/// Folds a joint fixed-line and mobile hit into the combined category, so
/// plans whose two ranges fully overlap are not double-reported.
pub(super) fn collapse_fixed_or_mobile(categories: &mut HashSet<CategoryTag>) {
    if categories.contains(&CategoryTag::FIXED_LINE) && categories.contains(&CategoryTag::MOBILE) {
        categories.remove(&CategoryTag::FIXED_LINE);
        categories.remove(&CategoryTag::MOBILE);
        categories.insert(CategoryTag::FIXED_OR_MOBILE);
    }
}
