/// Internal pattern matching API used to isolate the underlying
/// implementation of the matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi {
    /// Returns whether the given national number (a string containing only
    /// decimal digits) matches the given category pattern from a region's
    /// numbering plan. When `allow_prefix_match` is set the pattern only
    /// has to match at the start of the number instead of consuming it in
    /// full.
    fn match_category(&self, number: &str, pattern: &str, allow_prefix_match: bool) -> bool;
}
