use serde::{Deserialize, Serialize};

/// The label given to a description that matches no keyword.
pub const OTHER: &str = "Other";

/// The built-in keyword table. Order is significant: the first keyword found in a description wins.
const DEFAULT_RULES: &[(&str, &str)] = &[
    ("starbucks", "Food & Beverages"),
    ("amc", "Entertainment"),
    ("macys", "Clothing"),
    ("xfinity", "Utilities"),
    ("star osco", "Groceries"),
    ("target", "Shopping"),
    ("walmart", "Groceries"),
    ("nike", "Clothing"),
    ("shell", "Gas"),
    ("chevron", "Gas"),
    ("apple", "Electronics"),
    ("best buy", "Electronics"),
    ("netflix", "Subscriptions"),
    ("spotify", "Subscriptions"),
    ("gym", "Health & Fitness"),
    ("restaurant", "Food & Beverages"),
    ("cvs", "Health & Wellness"),
    ("walgreens", "Health & Wellness"),
    ("amazon", "Shopping"),
    ("electric bill", "Utilities"),
    ("uber", "Transportation"),
    ("lyft", "Transportation"),
    ("place", "Rent"),
    ("fossil", "Clothing"),
    ("zelle", "Bank Transfer"),
];

/// A single keyword-to-category mapping.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CategoryRule {
    keyword: String,
    category: String,
}

impl CategoryRule {
    /// The keyword is stored lowercase so that matching only needs to lowercase the description.
    pub fn new(keyword: impl AsRef<str>, category: impl Into<String>) -> Self {
        Self {
            keyword: keyword.as_ref().to_lowercase(),
            category: category.into(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    fn matches(&self, lowercase_description: &str) -> bool {
        lowercase_description.contains(&self.keyword)
    }
}

/// An ordered keyword table used to categorize transaction descriptions.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CategoryRule>", into = "Vec<CategoryRule>")]
pub struct CategoryRules {
    rules: Vec<CategoryRule>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::new(
            DEFAULT_RULES
                .iter()
                .map(|(keyword, category)| CategoryRule::new(keyword, *category)),
        )
    }
}

impl From<Vec<CategoryRule>> for CategoryRules {
    fn from(rules: Vec<CategoryRule>) -> Self {
        CategoryRules::new(rules)
    }
}

impl From<CategoryRules> for Vec<CategoryRule> {
    fn from(rules: CategoryRules) -> Self {
        rules.rules
    }
}

impl CategoryRules {
    /// Builds a table from `rules`, keeping their order. Keywords are lowercased.
    pub fn new(rules: impl IntoIterator<Item = CategoryRule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|r| CategoryRule::new(r.keyword, r.category))
                .collect(),
        }
    }

    /// Returns the category of the first keyword found in `description`, ignoring case, or
    /// `"Other"` when nothing matches.
    pub fn categorize(&self, description: &str) -> &str {
        let normalized = description.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(CategoryRule::category)
            .unwrap_or(OTHER)
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keywords() {
        let rules = CategoryRules::default();
        assert_eq!(rules.categorize("Starbucks Coffee"), "Food & Beverages");
        assert_eq!(rules.categorize("NETFLIX.COM"), "Subscriptions");
        assert_eq!(rules.categorize("Shell Oil 5521"), "Gas");
        assert_eq!(rules.categorize("STAR OSCO #123"), "Groceries");
        assert_eq!(rules.categorize("Zelle to Sam"), "Bank Transfer");
        assert_eq!(rules.categorize("ELECTRIC BILL autopay"), "Utilities");
    }

    #[test]
    fn test_unmatched_is_other() {
        let rules = CategoryRules::default();
        assert_eq!(rules.categorize("Paycheck"), OTHER);
        assert_eq!(rules.categorize(""), OTHER);
    }

    #[test]
    fn test_first_keyword_wins() {
        let rules = CategoryRules::default();
        // "starbucks" precedes "target" in the table.
        assert_eq!(rules.categorize("Starbucks inside Target"), "Food & Beverages");
        // "target" precedes "walmart".
        assert_eq!(rules.categorize("Walmart gift card at Target"), "Shopping");
        // "amc" matches as a substring before "place" is considered.
        assert_eq!(rules.categorize("AMC Theatre Place"), "Entertainment");
    }

    #[test]
    fn test_substring_match_inside_word() {
        let rules = CategoryRules::default();
        assert_eq!(rules.categorize("Pineapple Express"), "Electronics");
    }

    #[test]
    fn test_custom_rules_lowercase_keywords() {
        let rules = CategoryRules::new(vec![
            CategoryRule::new("COSTCO", "Groceries"),
            CategoryRule::new("Gas", "Fuel"),
        ]);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.rules()[0].keyword(), "costco");
        assert_eq!(rules.categorize("Costco Wholesale"), "Groceries");
        assert_eq!(rules.categorize("costco gas"), "Groceries");
        assert_eq!(rules.categorize("Shell"), OTHER);
    }

    #[test]
    fn test_empty_rules() {
        let rules = CategoryRules::new(Vec::new());
        assert!(rules.is_empty());
        assert_eq!(rules.categorize("Starbucks"), OTHER);
    }

    #[test]
    fn test_deserialize_keeps_order() {
        let json = r#"[
            {"keyword": "Coffee", "category": "Food"},
            {"keyword": "coffee maker", "category": "Appliances"}
        ]"#;
        let rules: CategoryRules = serde_json::from_str(json).unwrap();
        assert_eq!(rules.rules()[0].keyword(), "coffee");
        assert_eq!(rules.categorize("Coffee Maker Deluxe"), "Food");
    }
}
