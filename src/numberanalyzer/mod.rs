mod helper_constants;
mod helper_functions;
pub mod categories;
pub mod metadata;
pub mod results;
pub mod numberanalyzer;

pub use categories::{Category, CategoryTag};
pub use metadata::{CategoryPatterns, MetadataStore, NumberFormat, RegionMetadata};
pub use numberanalyzer::NumberAnalyzer;
pub use results::{AnalysisEntry, AnalysisResult, RegionProfile};
