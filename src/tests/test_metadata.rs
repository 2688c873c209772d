//! In-memory plan fixtures for the test suite.
//!
//! The patterns follow the same conventions as production plan data:
//! trunk and country prefixes are captured by up to two leading groups of
//! the general description, the subscriber part stays non-capturing, and
//! per-category patterns describe the national number only.

use crate::{Category, CategoryPatterns, MetadataStore, NumberFormat, RegionMetadata};

pub fn test_store() -> MetadataStore {
    MetadataStore::from_regions([us(), ca(), gb(), ar(), sg()])
}

fn us() -> RegionMetadata {
    RegionMetadata::new("US", 1)
        .with_international_prefix(r"(?:011|\+)")
        .with_national_prefix("1")
        .with_category(
            Category::General,
            CategoryPatterns::new(
                r"(011)?(1)?(?:(?:201|202|650|800)\d{7})",
                r"(011)?(1)?(?:(?:201|202|650|800)[2-9]\d{6})",
            ),
        )
        .with_category(
            Category::FixedLine,
            CategoryPatterns::valid_only(r"(?:201|202|650)[2-9]\d{6}"),
        )
        .with_category(
            Category::Mobile,
            CategoryPatterns::valid_only(r"(?:201|202|650)[2-9]\d{6}"),
        )
        .with_category(
            Category::TollFree,
            CategoryPatterns::new(r"800\d{7}", r"800[2-9]\d{6}"),
        )
        .with_format(NumberFormat::new(r"(\d{3})(\d{3})(\d{4})", "($1) $2-$3"))
}

fn ca() -> RegionMetadata {
    RegionMetadata::new("CA", 1)
        .with_international_prefix(r"(?:011|\+)")
        .with_national_prefix("1")
        .with_category(
            Category::General,
            CategoryPatterns::new(
                r"(011)?(1)?(?:(?:204|604|800)\d{7})",
                r"(011)?(1)?(?:(?:204|604|800)[2-9]\d{6})",
            ),
        )
        .with_category(
            Category::FixedLine,
            CategoryPatterns::valid_only(r"(?:204|604)[2-9]\d{6}"),
        )
        .with_category(
            Category::Mobile,
            CategoryPatterns::valid_only(r"(?:204|604)[2-9]\d{6}"),
        )
        .with_category(
            Category::TollFree,
            CategoryPatterns::new(r"800\d{7}", r"800[2-9]\d{6}"),
        )
        .with_format(NumberFormat::new(r"(\d{3})(\d{3})(\d{4})", "$1-$2-$3"))
}

fn gb() -> RegionMetadata {
    RegionMetadata::new("GB", 44)
        .with_international_prefix(r"(?:00|\+)")
        .with_national_prefix("0")
        .with_category(
            Category::General,
            CategoryPatterns::new(r"(0|44)?(?:\d{9,10})", r"(0|44)?(?:[1-9]\d{8,9})"),
        )
        .with_category(Category::FixedLine, CategoryPatterns::valid_only(r"[12]\d{9}"))
        .with_category(Category::Mobile, CategoryPatterns::valid_only(r"7[1-9]\d{8}"))
        .with_category(
            Category::TollFree,
            CategoryPatterns::new(r"80\d{8}", r"808\d{7}"),
        )
        .with_format(
            NumberFormat::new(r"(\d{2})(\d{4})(\d{4})", "$1 $2 $3").with_leading_digits("[12]"),
        )
        .with_format(NumberFormat::new(r"(\d{4})(\d{6})", "$1 $2").with_leading_digits("7"))
}

/// Mobile numbers carry a "9" token between the calling code and the
/// subscriber digits; inputs written without it are accepted through the
/// double-prefix retry.
fn ar() -> RegionMetadata {
    RegionMetadata::new("AR", 54)
        .with_international_prefix(r"(?:00|\+)")
        .with_national_prefix("9")
        .with_double_prefix()
        .with_category(
            Category::General,
            CategoryPatterns::new(r"(54)?(?:9?11\d{8})", r"(54)?(?:911[2-9]\d{7})"),
        )
        .with_category(Category::Mobile, CategoryPatterns::valid_only(r"911[2-9]\d{7}"))
}

/// A plan that cannot split fixed-line from mobile at all and only
/// publishes the combined category.
fn sg() -> RegionMetadata {
    RegionMetadata::new("SG", 65)
        .with_international_prefix(r"(?:00|\+)")
        .with_category(
            Category::General,
            CategoryPatterns::new(r"(?:\d{8})", r"(?:[3689]\d{7})"),
        )
        .with_category(
            Category::FixedLineOrMobile,
            CategoryPatterns::valid_only(r"[3689]\d{7}"),
        )
        .with_format(NumberFormat::new(r"(\d{4})(\d{4})", "$1 $2"))
}
