//! The article aggregate: metadata plus the block document.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::editing::Document;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    /// Short introduction shown under the title.
    #[serde(default)]
    pub standfirst: String,
    #[serde(default)]
    pub body: Document,
}

impl Article {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            standfirst: String::new(),
            body: Document::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn article_round_trips_through_json() {
        let mut article = Article::new("Monza preview");
        article.standfirst = "Everything to watch this weekend".to_string();
        article.body.insert(&BlockKind::Heading, None).unwrap();
        article.body.insert(&BlockKind::Paragraph, None).unwrap();

        let json = serde_json::to_string(&article).unwrap();
        let back: Article = serde_json::from_str(&json).unwrap();
        assert_eq!(back, article);
    }
}
