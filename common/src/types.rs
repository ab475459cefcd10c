//! バックエンドAPIのリクエスト/レスポンス型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - IdeaAnalysisRequest / IdeaAnalysisResult: アイデア解析
//! - MarketInsightsRequest / MarketInsightsResult: 市場分析
//! - PitchAnalysisResponse: ピッチ動画解析
//!
//! バックエンドはLLM出力をそのまま返すため、レスポンス側は欠損フィールドを許容する

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::score::ScoreDimension;

/// アイデア解析リクエスト
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdeaAnalysisRequest {
    pub idea_description: String,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

/// 6項目のサブスコア（各0〜10）
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeaScores {
    pub novelty: f64,
    pub technical_feasibility: f64,
    pub market_overlap: f64,
    pub patent_risk: f64,
    pub implementation_complexity: f64,
    pub ethical_regulatory: f64,
}

impl IdeaScores {
    pub fn get(&self, dimension: ScoreDimension) -> f64 {
        match dimension {
            ScoreDimension::Novelty => self.novelty,
            ScoreDimension::TechnicalFeasibility => self.technical_feasibility,
            ScoreDimension::MarketOverlap => self.market_overlap,
            ScoreDimension::PatentRisk => self.patent_risk,
            ScoreDimension::ImplementationComplexity => self.implementation_complexity,
            ScoreDimension::EthicalRegulatory => self.ethical_regulatory,
        }
    }

    /// 重み付き総合スコア（0〜100、小数第1位で丸め）
    pub fn weighted_total(&self) -> f64 {
        let total: f64 = ScoreDimension::ALL
            .iter()
            .map(|d| (self.get(*d) / 10.0) * d.weight() * 100.0)
            .sum();
        (total * 10.0).round() / 10.0
    }
}

/// サブスコアごとの説明文
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeaExplanations {
    pub novelty: String,
    pub technical_feasibility: String,
    pub market_overlap: String,
    pub patent_risk: String,
    pub implementation_complexity: String,
    pub ethical_regulatory: String,
}

impl IdeaExplanations {
    pub fn get(&self, dimension: ScoreDimension) -> &str {
        match dimension {
            ScoreDimension::Novelty => &self.novelty,
            ScoreDimension::TechnicalFeasibility => &self.technical_feasibility,
            ScoreDimension::MarketOverlap => &self.market_overlap,
            ScoreDimension::PatentRisk => &self.patent_risk,
            ScoreDimension::ImplementationComplexity => &self.implementation_complexity,
            ScoreDimension::EthicalRegulatory => &self.ethical_regulatory,
        }
    }
}

/// 特許情報
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Patent {
    pub patent_number: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub filing_date: String,
    pub status: String,
    pub link: String,
}

/// アイデア解析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdeaAnalysisResult {
    pub scores: IdeaScores,
    pub weighted_score: f64,
    pub explanations: IdeaExplanations,
    pub patents: Vec<Patent>,
}

/// 市場分析リクエスト（8項目、先頭4項目が必須）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketInsightsRequest {
    pub startup_idea: String,
    pub ideal_customer: String,
    pub problem_solving: String,
    pub industry: String,
    pub known_competitors: String,
    pub unique_value: String,
    pub business_model: String,
    pub geographic_regions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerSegment {
    pub name: String,
    pub description: String,
    pub size: String,
    pub key_characteristics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerPersona {
    pub name: String,
    pub demographics: String,
    pub psychographics: String,
    pub pain_points: Vec<String>,
    pub goals: Vec<String>,
}

/// 直接競合
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectCompetitor {
    pub name: String,
    pub description: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// 隣接・間接競合
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedCompetitor {
    pub name: String,
    pub description: String,
    pub relevance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitorLandscape {
    pub direct: Vec<DirectCompetitor>,
    pub adjacent: Vec<RelatedCompetitor>,
    pub indirect: Vec<RelatedCompetitor>,
}

/// 市場分析結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketInsightsResult {
    pub customer_segments: Vec<CustomerSegment>,
    pub customer_personas: Vec<CustomerPersona>,
    pub competitors: CompetitorLandscape,
    pub market_gaps: Vec<String>,
    pub positioning_insights: String,
}

/// ピッチ解析のフィードバック本体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchFeedback {
    pub raw_feedback: String,
    pub structured_feedback: HashMap<String, String>,
}

/// ピッチ解析レスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchAnalysisResponse {
    pub success: bool,
    pub analysis: PitchFeedback,
    pub transcript: String,
    pub persona: Option<String>,
}

/// ヘルスチェックレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
}
