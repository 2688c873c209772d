mod numberanalyzer;
mod interfaces;
mod regexp_cache;
mod regex_based_matcher;
pub mod i18n;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// I decided to create this module because there are many
/// boilerplate places in the code that can be replaced with macros,
/// the name of which will describe what is happening more
/// clearly than a few lines of code.
mod macros;

#[cfg(test)]
mod tests;

pub use numberanalyzer::{
    AnalysisEntry, AnalysisResult, Category, CategoryPatterns, CategoryTag, MetadataStore,
    NumberAnalyzer, NumberFormat, RegionMetadata, RegionProfile,
};
