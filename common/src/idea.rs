//! アイデア解析フォーム

use crate::error::{Error, Result};
use crate::types::IdeaAnalysisRequest;

pub const EMPTY_IDEA_MESSAGE: &str = "Please enter your startup idea description";

/// アイデア解析フォームの入力値
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdeaForm {
    pub description: String,
    /// カンマ区切りのキーワード
    pub keywords: String,
    pub industry: String,
}

impl IdeaForm {
    /// 入力チェックしてリクエストに変換
    ///
    /// 説明文が空白のみの場合はリクエストを作らない
    pub fn to_request(&self) -> Result<IdeaAnalysisRequest> {
        if self.description.trim().is_empty() {
            return Err(Error::Validation(EMPTY_IDEA_MESSAGE.to_string()));
        }

        Ok(IdeaAnalysisRequest {
            idea_description: self.description.clone(),
            keywords: split_keywords(&self.keywords),
            industry: if self.industry.is_empty() {
                None
            } else {
                Some(self.industry.clone())
            },
        })
    }
}

/// カンマ区切り文字列をキーワード配列に分割（空要素は除外）
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_description_is_rejected() {
        let form = IdeaForm {
            description: "   \n".to_string(),
            keywords: "ai".to_string(),
            ..Default::default()
        };
        let err = form.to_request().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), EMPTY_IDEA_MESSAGE);
    }

    #[test]
    fn test_to_request() {
        let form = IdeaForm {
            description: "An AI tutor for nurses".to_string(),
            keywords: " AI, healthcare,, ,education ".to_string(),
            industry: "Healthcare".to_string(),
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.idea_description, "An AI tutor for nurses");
        assert_eq!(request.keywords, vec!["AI", "healthcare", "education"]);
        assert_eq!(request.industry.as_deref(), Some("Healthcare"));
    }

    #[test]
    fn test_empty_industry_is_omitted() {
        let form = IdeaForm {
            description: "Drone deliveries".to_string(),
            ..Default::default()
        };
        let request = form.to_request().unwrap();
        assert!(request.keywords.is_empty());
        assert_eq!(request.industry, None);
    }
}
