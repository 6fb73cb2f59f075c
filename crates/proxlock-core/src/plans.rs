//! Subscription plan descriptors and feature comparison logic.
//!
//! Plans are fetched from the hosted billing widget (see
//! [`crate::billing`]); when the fetch is loading or fails, the
//! hardcoded fallback catalog below takes over so the pricing page
//! never errors out.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Plan IDs used by the billing widget
pub const FREE_PLAN_ID: &str = "free_user";
pub const PLUS_PLAN_ID: &str = "10k_requests";
pub const PRO_PLAN_ID: &str = "25k_requests";

/// Read-only plan descriptor as reported by the billing widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDescriptor {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fee: Option<PlanFee>,
    #[serde(default)]
    pub free_trial_days: Option<u32>,
    #[serde(default)]
    pub features: Vec<PlanFeature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanFee {
    pub amount_formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanFeature {
    pub slug: String,
    pub name: String,
}

impl PlanDescriptor {
    /// Match by id or slug; the widget reports either depending on version.
    pub fn matches(&self, key: &str) -> bool {
        self.id == key || self.slug == key
    }
}

/// Find a plan by id or slug in a fetched list.
pub fn find_plan<'a>(plans: &'a [PlanDescriptor], key: &str) -> Option<&'a PlanDescriptor> {
    plans.iter().find(|p| p.matches(key))
}

/// Static fallback used while plans are loading or when the fetch fails.
#[derive(Debug, Clone, Copy)]
pub struct FallbackPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub free_trial_days: u32,
}

pub const FALLBACK_FREE: FallbackPlan = FallbackPlan {
    name: "Free",
    price: "0",
    description: "Great for trying out the platform.",
    free_trial_days: 0,
};

pub const FALLBACK_PLUS: FallbackPlan = FallbackPlan {
    name: "Plus",
    price: "9.99",
    description: "Good for scaling applications as you serve a medium size audience.",
    free_trial_days: 30,
};

pub const FALLBACK_PRO: FallbackPlan = FallbackPlan {
    name: "Pro",
    price: "19.99",
    description: "Get the best bang for your buck and serve a large amount of users each month.",
    free_trial_days: 7,
};

/// Value extracted from a feature slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureValue {
    /// The slug carried the literal "unlimited" marker
    Unlimited,
    /// Numeric magnitude, underscores normalized to commas (e.g. "3,000")
    Count(String),
}

/// A feature slug split into its base key and an optional magnitude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFeature {
    pub base: String,
    pub value: Option<FeatureValue>,
}

static UNLIMITED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)unlimited").unwrap());
// Numbers delimited by start/end, underscores or non-word characters,
// optionally grouped with underscores or commas ("3_000", "3,000")
static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[_\W])(\d+(?:[_,]\d+)*)(?:$|[_\W])").unwrap());
static LABEL_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[\d,]+\b").unwrap());
static MULTI_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static MULTI_UNDERSCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__+").unwrap());

/// Split a feature slug into a base key and a display value.
///
/// "monthly_requests_3_000" -> base "monthly_requests", value "3,000";
/// "unlimited_projects" -> base "projects", value Unlimited;
/// "priority_support" -> base "priority_support", no value.
pub fn parse_feature_slug(slug: &str) -> ParsedFeature {
    let (base, value) = if UNLIMITED_RE.is_match(slug) {
        (
            UNLIMITED_RE.replacen(slug, 1, "").into_owned(),
            Some(FeatureValue::Unlimited),
        )
    } else if let Some(caps) = NUMBER_RE.captures(slug) {
        let number = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        (
            slug.replacen(number, "", 1),
            Some(FeatureValue::Count(number.replace('_', ","))),
        )
    } else {
        (slug.to_string(), None)
    };

    let base = MULTI_UNDERSCORE_RE.replace_all(&base, "_").into_owned();
    let base = base.trim_matches('_').to_string();

    ParsedFeature { base, value }
}

/// Derive a generic display label by stripping numeric tokens from a
/// feature's human-readable name.
///
/// "3,000 Monthly Requests" -> "Monthly Requests"
pub fn generic_label(name: &str) -> String {
    let stripped = LABEL_NUMBER_RE.replace_all(name, "");
    MULTI_SPACE_RE
        .replace_all(stripped.trim(), " ")
        .into_owned()
}

/// One row of the feature comparison table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow {
    pub base: String,
    pub label: String,
    pub free: String,
    pub plus: String,
    pub pro: String,
}

/// Display value for `base` in a single plan: "—" when the plan lacks
/// the feature, "✓" when the feature carries no magnitude.
fn display_value(plan: Option<&PlanDescriptor>, base: &str) -> String {
    let feature = plan.and_then(|p| {
        p.features
            .iter()
            .find(|f| parse_feature_slug(&f.slug).base == base)
    });
    match feature {
        None => "—".to_string(),
        Some(f) => match parse_feature_slug(&f.slug).value {
            Some(FeatureValue::Unlimited) => "Unlimited".to_string(),
            Some(FeatureValue::Count(n)) => n,
            None => "✓".to_string(),
        },
    }
}

/// Build the comparison rows across the three plans, keyed by base slug
/// in first-seen order. Returns an empty list when neither paid plan
/// reports features (the table is omitted in that case).
pub fn build_feature_rows(
    free: Option<&PlanDescriptor>,
    plus: Option<&PlanDescriptor>,
    pro: Option<&PlanDescriptor>,
) -> Vec<FeatureRow> {
    let has_features = |p: Option<&PlanDescriptor>| p.map_or(false, |p| !p.features.is_empty());
    if !has_features(plus) && !has_features(pro) {
        return Vec::new();
    }

    // First-seen base slug order, label from the last plan naming it
    let mut bases: Vec<(String, String)> = Vec::new();
    for plan in [free, plus, pro].into_iter().flatten() {
        for feature in &plan.features {
            let base = parse_feature_slug(&feature.slug).base;
            let label = generic_label(&feature.name);
            if let Some(entry) = bases.iter_mut().find(|(b, _)| *b == base) {
                entry.1 = label;
            } else {
                bases.push((base, label));
            }
        }
    }

    bases
        .into_iter()
        .map(|(base, label)| FeatureRow {
            free: display_value(free, &base),
            plus: display_value(plus, &base),
            pro: display_value(pro, &base),
            base,
            label,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(id: &str, features: &[(&str, &str)]) -> PlanDescriptor {
        PlanDescriptor {
            id: id.to_string(),
            slug: id.to_string(),
            name: id.to_string(),
            description: None,
            fee: None,
            free_trial_days: None,
            features: features
                .iter()
                .map(|(slug, name)| PlanFeature {
                    slug: slug.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_parse_numeric_slug() {
        let parsed = parse_feature_slug("monthly_requests_3_000");
        assert_eq!(parsed.base, "monthly_requests");
        assert_eq!(parsed.value, Some(FeatureValue::Count("3,000".to_string())));
    }

    #[test]
    fn test_parse_unlimited_slug() {
        let parsed = parse_feature_slug("unlimited_projects");
        assert_eq!(parsed.base, "projects");
        assert_eq!(parsed.value, Some(FeatureValue::Unlimited));
    }

    #[test]
    fn test_parse_boolean_slug() {
        let parsed = parse_feature_slug("priority_support");
        assert_eq!(parsed.base, "priority_support");
        assert_eq!(parsed.value, None);
    }

    #[test]
    fn test_parse_leading_number() {
        let parsed = parse_feature_slug("1_user_access_key");
        assert_eq!(parsed.base, "user_access_key");
        assert_eq!(parsed.value, Some(FeatureValue::Count("1".to_string())));
    }

    #[test]
    fn test_embedded_k_suffix_is_not_a_number() {
        // "10k" has no boundary after the digits, so no magnitude
        let parsed = parse_feature_slug("10k_requests");
        assert_eq!(parsed.value, None);
    }

    #[test]
    fn test_generic_label_strips_numbers() {
        assert_eq!(generic_label("3,000 Monthly Requests"), "Monthly Requests");
        assert_eq!(generic_label("1 User Access Key"), "User Access Key");
        assert_eq!(generic_label("Priority Support"), "Priority Support");
    }

    #[test]
    fn test_rows_empty_without_paid_features() {
        let free = plan("free_user", &[("basic", "Basic")]);
        let rows = build_feature_rows(Some(&free), None, None);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_rows_align_by_base_slug() {
        let free = plan(
            "free_user",
            &[("monthly_requests_3_000", "3,000 Monthly Requests")],
        );
        let plus = plan(
            "10k_requests",
            &[
                ("monthly_requests_10_000", "10,000 Monthly Requests"),
                ("priority_support", "Priority Support"),
            ],
        );
        let pro = plan(
            "25k_requests",
            &[("monthly_requests_unlimited", "Unlimited Monthly Requests")],
        );

        let rows = build_feature_rows(Some(&free), Some(&plus), Some(&pro));
        assert_eq!(rows.len(), 2);

        let requests = &rows[0];
        assert_eq!(requests.label, "Monthly Requests");
        assert_eq!(requests.free, "3,000");
        assert_eq!(requests.plus, "10,000");
        assert_eq!(requests.pro, "Unlimited");

        let support = &rows[1];
        assert_eq!(support.free, "—");
        assert_eq!(support.plus, "✓");
        assert_eq!(support.pro, "—");
    }

    #[test]
    fn test_find_plan_by_id_or_slug() {
        let mut p = plan(PLUS_PLAN_ID, &[]);
        p.slug = "plus".to_string();
        let plans = vec![p];
        assert!(find_plan(&plans, PLUS_PLAN_ID).is_some());
        assert!(find_plan(&plans, "plus").is_some());
        assert!(find_plan(&plans, "nope").is_none());
    }
}
