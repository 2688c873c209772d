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

/// Rebuilds `number` as `prefix + insertion + rest` when `number` starts
/// with `prefix`. Returns `None` if the prefix is absent.
///
/// Single allocation for the rebuilt string.
pub fn reinsert_after_prefix(number: &str, prefix: &str, insertion: &str) -> Option<String> {
    let rest = number.strip_prefix(prefix)?;
    Some(fast_cat::concat_str!(prefix, insertion, rest))
}

#[cfg(test)]
mod tests {
    use crate::string_util::reinsert_after_prefix;

    #[test]
    fn test_usage() {
        let rebuilt = reinsert_after_prefix("541123456789", "54", "9");
        assert_eq!(rebuilt.as_deref(), Some("5491123456789"));

        let rebuilt = reinsert_after_prefix("441123456789", "54", "9");
        assert_eq!(rebuilt, None);
    }
}
