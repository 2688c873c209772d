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

use std::borrow::Cow;
use std::fmt;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Tag identifying one phone-number category in a region's pattern table.
///
/// Tags are open-ended: a numbering plan may carry categories beyond the
/// well-known set and they are dispatched generically, so new categories
/// in the metadata require no code change here. The well-known tags are
/// available as constants and through [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryTag(Cow<'static, str>);

impl CategoryTag {
    /// Matches the overall shape of any number in the plan; evaluated
    /// before the per-category patterns.
    pub const GENERAL: CategoryTag = CategoryTag::from_static("general");
    pub const FIXED_LINE: CategoryTag = CategoryTag::from_static("fixedLine");
    pub const MOBILE: CategoryTag = CategoryTag::from_static("mobile");
    /// Combined category reported when a plan cannot tell fixed-line and
    /// mobile numbers apart.
    pub const FIXED_OR_MOBILE: CategoryTag = CategoryTag::from_static("fixedOrMobile");

    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    pub fn new(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The general description and the fixed-line/mobile family never go
    /// through the generic per-category dispatch; they are evaluated by
    /// dedicated steps of the matcher.
    pub(crate) fn is_baseline(&self) -> bool {
        matches!(
            self.as_str(),
            "general" | "fixedLine" | "mobile" | "fixedOrMobile"
        )
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Category> for CategoryTag {
    fn from(category: Category) -> Self {
        CategoryTag::from_static(category.into())
    }
}

/// The well-known phone-number categories.
///
/// The serialized names are the tags used in numbering-plan metadata;
/// [`CategoryTag`] accepts any of them plus arbitrary plan-specific tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
pub enum Category {
    /// **Overall plan shape.** Not a reportable category; gates the
    /// validity of every other one.
    #[strum(serialize = "general")]
    General,
    /// **Fixed-line numbers.** Traditional landline numbers tied to a
    /// geographic location.
    #[strum(serialize = "fixedLine")]
    FixedLine,
    /// **Mobile numbers.**
    #[strum(serialize = "mobile")]
    Mobile,
    /// **Fixed-line or mobile.** Reported in plans (e.g. the USA) where the
    /// two ranges cannot be distinguished by looking at the number itself.
    #[strum(serialize = "fixedOrMobile")]
    FixedLineOrMobile,
    /// **Toll-free numbers.** The recipient pays for the call.
    #[strum(serialize = "tollFree")]
    TollFree,
    /// **Premium-rate numbers.** Charged above normal call rates.
    #[strum(serialize = "premiumRate")]
    PremiumRate,
    /// **Shared-cost numbers.** The cost is split between caller and
    /// recipient.
    #[strum(serialize = "sharedCost")]
    SharedCost,
    /// **Voice over IP numbers.**
    #[strum(serialize = "voip")]
    VoIP,
    /// **Personal numbers.** Routed to a person rather than a location or
    /// device.
    #[strum(serialize = "personalNumber")]
    PersonalNumber,
    /// **Pagers.**
    #[strum(serialize = "pager")]
    Pager,
    /// **Universal Access Numbers.** A single company-wide routing number.
    #[strum(serialize = "uan")]
    UAN,
    /// **Voicemail access numbers.**
    #[strum(serialize = "voicemail")]
    Voicemail,
}
