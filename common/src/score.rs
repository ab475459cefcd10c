//! アイデア解析スコアの表示ルール
//!
//! - ScoreDimension: 6項目のサブスコア（表示順・ラベル・重み）
//! - ScoreTone: スコア閾値による色分け

/// サブスコアの項目（表示順は ALL の順）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreDimension {
    Novelty,
    TechnicalFeasibility,
    MarketOverlap,
    PatentRisk,
    ImplementationComplexity,
    EthicalRegulatory,
}

impl ScoreDimension {
    pub const ALL: [ScoreDimension; 6] = [
        ScoreDimension::Novelty,
        ScoreDimension::TechnicalFeasibility,
        ScoreDimension::MarketOverlap,
        ScoreDimension::PatentRisk,
        ScoreDimension::ImplementationComplexity,
        ScoreDimension::EthicalRegulatory,
    ];

    /// JSONキー
    pub fn key(&self) -> &'static str {
        match self {
            ScoreDimension::Novelty => "novelty",
            ScoreDimension::TechnicalFeasibility => "technical_feasibility",
            ScoreDimension::MarketOverlap => "market_overlap",
            ScoreDimension::PatentRisk => "patent_risk",
            ScoreDimension::ImplementationComplexity => "implementation_complexity",
            ScoreDimension::EthicalRegulatory => "ethical_regulatory",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreDimension::Novelty => "Novelty / Originality (30%)",
            ScoreDimension::TechnicalFeasibility => "Technical Feasibility (20%)",
            ScoreDimension::MarketOverlap => "Market Overlap (15%)",
            ScoreDimension::PatentRisk => "Patent Freedom / Risk (20%)",
            ScoreDimension::ImplementationComplexity => "Implementation Complexity (10%)",
            ScoreDimension::EthicalRegulatory => "Ethical/Regulatory Risk (5%)",
        }
    }

    /// 総合スコアへの重み（合計1.0）
    pub fn weight(&self) -> f64 {
        match self {
            ScoreDimension::Novelty => 0.30,
            ScoreDimension::TechnicalFeasibility => 0.20,
            ScoreDimension::MarketOverlap => 0.15,
            ScoreDimension::PatentRisk => 0.20,
            ScoreDimension::ImplementationComplexity => 0.10,
            ScoreDimension::EthicalRegulatory => 0.05,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ScoreDimension::Novelty => "✨",
            ScoreDimension::TechnicalFeasibility => "💻",
            ScoreDimension::MarketOverlap => "📈",
            ScoreDimension::PatentRisk => "🛡️",
            ScoreDimension::ImplementationComplexity => "💲",
            ScoreDimension::EthicalRegulatory => "⚠️",
        }
    }
}

/// スコアの色分け
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTone {
    Emerald,
    Blue,
    Amber,
    Red,
}

impl ScoreTone {
    /// 閾値: 8以上 emerald / 6以上 blue / 4以上 amber / それ未満 red
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            ScoreTone::Emerald
        } else if score >= 6.0 {
            ScoreTone::Blue
        } else if score >= 4.0 {
            ScoreTone::Amber
        } else {
            ScoreTone::Red
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTone::Emerald => "emerald",
            ScoreTone::Blue => "blue",
            ScoreTone::Amber => "amber",
            ScoreTone::Red => "red",
        }
    }

    /// スコア数値の文字色クラス
    pub fn text_class(&self) -> String {
        format!("text-{}-400", self.as_str())
    }

    /// スコアバーの背景色クラス
    pub fn bar_class(&self) -> String {
        format!("bg-{}-500", self.as_str())
    }
}

/// スコアを小数第1位で表示（0.05は切り上げ）
pub fn format_score(score: f64) -> String {
    format!("{:.1}", (score * 10.0).round() / 10.0)
}

/// 0〜10のスコアをバー幅(%)に変換
pub fn bar_width_percent(score: f64) -> f64 {
    (score / 10.0) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_thresholds() {
        assert_eq!(ScoreTone::from_score(8.0), ScoreTone::Emerald);
        assert_eq!(ScoreTone::from_score(10.0), ScoreTone::Emerald);
        assert_eq!(ScoreTone::from_score(7.9), ScoreTone::Blue);
        assert_eq!(ScoreTone::from_score(6.0), ScoreTone::Blue);
        assert_eq!(ScoreTone::from_score(5.99), ScoreTone::Amber);
        assert_eq!(ScoreTone::from_score(4.0), ScoreTone::Amber);
        assert_eq!(ScoreTone::from_score(3.9), ScoreTone::Red);
        assert_eq!(ScoreTone::from_score(0.0), ScoreTone::Red);
    }

    #[test]
    fn test_tone_classes() {
        assert_eq!(ScoreTone::Emerald.text_class(), "text-emerald-400");
        assert_eq!(ScoreTone::Red.bar_class(), "bg-red-500");
    }

    #[test]
    fn test_dimension_order_and_weights() {
        let keys: Vec<&str> = ScoreDimension::ALL.iter().map(|d| d.key()).collect();
        assert_eq!(
            keys,
            vec![
                "novelty",
                "technical_feasibility",
                "market_overlap",
                "patent_risk",
                "implementation_complexity",
                "ethical_regulatory",
            ]
        );

        let total: f64 = ScoreDimension::ALL.iter().map(|d| d.weight()).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(73.4), "73.4");
        assert_eq!(format_score(8.0), "8.0");
        assert_eq!(format_score(7.25), "7.3");
        assert_eq!(format_score(73.25), "73.3");
        assert_eq!(bar_width_percent(7.5), 75.0);
    }
}
