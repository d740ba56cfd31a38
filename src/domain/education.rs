use serde::{Deserialize, Serialize};

/// Calculators offered by the learning hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Budget,
    Investment,
    DebtPayoff,
}

/// A learning-hub entry. One variant per entity kind, each carrying only
/// the fields it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LearningResource {
    Course {
        id: u32,
        title: String,
        description: String,
        category: String,
        duration_hours: u32,
        lessons: u32,
        /// Completion percentage, 0..=100.
        progress: u8,
    },
    Article {
        id: u32,
        title: String,
        description: String,
        category: String,
        reading_minutes: u32,
    },
    Tool {
        id: u32,
        title: String,
        description: String,
        tool: ToolKind,
    },
}

impl LearningResource {
    pub fn title(&self) -> &str {
        match self {
            Self::Course { title, .. } | Self::Article { title, .. } | Self::Tool { title, .. } => {
                title
            }
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Course { progress: 100, .. })
    }
}

fn course(
    id: u32,
    title: &str,
    description: &str,
    category: &str,
    duration_hours: u32,
    lessons: u32,
    progress: u8,
) -> LearningResource {
    LearningResource::Course {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        duration_hours,
        lessons,
        progress,
    }
}

fn article(
    id: u32,
    title: &str,
    description: &str,
    category: &str,
    reading_minutes: u32,
) -> LearningResource {
    LearningResource::Article {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        reading_minutes,
    }
}

fn tool(id: u32, title: &str, description: &str, kind: ToolKind) -> LearningResource {
    LearningResource::Tool {
        id,
        title: title.to_string(),
        description: description.to_string(),
        tool: kind,
    }
}

/// The stock catalog shipped with the learning hub.
pub fn catalog() -> Vec<LearningResource> {
    vec![
        course(
            1,
            "Financial Planning Basics",
            "Learn the fundamentals of budgeting, saving, and investing.",
            "Personal Finance",
            4,
            6,
            75,
        ),
        course(
            2,
            "Investing in Stocks",
            "A comprehensive guide to stock market investing for beginners.",
            "Investing",
            6,
            8,
            30,
        ),
        course(
            3,
            "Debt Management Strategies",
            "Effective strategies to manage and eliminate debt.",
            "Debt",
            3,
            5,
            100,
        ),
        course(
            4,
            "Retirement Planning",
            "Plan your retirement with confidence.",
            "Retirement",
            5,
            7,
            15,
        ),
        article(
            1,
            "The Power of Compound Interest",
            "Understand how compound interest can grow your wealth.",
            "Investing",
            5,
        ),
        article(
            2,
            "5 Steps to Create a Budget",
            "A simple guide to creating and sticking to a budget.",
            "Personal Finance",
            7,
        ),
        article(
            3,
            "Understanding Credit Scores",
            "Learn what affects your credit score and how to improve it.",
            "Credit",
            6,
        ),
        tool(
            1,
            "Budget Calculator",
            "Calculate your monthly budget and track your spending.",
            ToolKind::Budget,
        ),
        tool(
            2,
            "Investment Calculator",
            "Estimate the potential growth of your investments.",
            ToolKind::Investment,
        ),
        tool(
            3,
            "Debt Payoff Calculator",
            "Plan your debt payoff strategy.",
            ToolKind::DebtPayoff,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contains_all_kinds() {
        let resources = catalog();
        assert!(
            resources
                .iter()
                .any(|r| matches!(r, LearningResource::Course { .. }))
        );
        assert!(
            resources
                .iter()
                .any(|r| matches!(r, LearningResource::Article { .. }))
        );
        assert!(
            resources
                .iter()
                .any(|r| matches!(r, LearningResource::Tool { .. }))
        );
    }

    #[test]
    fn test_completion() {
        let completed: Vec<_> = catalog().into_iter().filter(|r| r.is_completed()).collect();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].title(), "Debt Management Strategies");
    }

    #[test]
    fn test_tagged_serialization() {
        let json = serde_json::to_string(&catalog()[0]).unwrap();
        assert!(json.contains("\"kind\":\"course\""));
    }
}
