//! 市場分析フォームと顧客セグメント円グラフ

use crate::error::{Error, Result};
use crate::types::{CustomerSegment, MarketInsightsRequest};

/// 円グラフの配色（セグメント順に循環）
pub const SEGMENT_COLORS: [&str; 5] = ["#06b6d4", "#14b8a6", "#10b981", "#84cc16", "#eab308"];

pub const INCOMPLETE_FORM_MESSAGE: &str =
    "Please answer the four required questions before requesting insights";

/// フォーム項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketField {
    StartupIdea,
    IdealCustomer,
    ProblemSolving,
    Industry,
    KnownCompetitors,
    UniqueValue,
    BusinessModel,
    GeographicRegions,
}

impl MarketField {
    pub const ALL: [MarketField; 8] = [
        MarketField::StartupIdea,
        MarketField::IdealCustomer,
        MarketField::ProblemSolving,
        MarketField::Industry,
        MarketField::KnownCompetitors,
        MarketField::UniqueValue,
        MarketField::BusinessModel,
        MarketField::GeographicRegions,
    ];

    /// リクエストJSONのキー
    pub fn name(&self) -> &'static str {
        match self {
            MarketField::StartupIdea => "startup_idea",
            MarketField::IdealCustomer => "ideal_customer",
            MarketField::ProblemSolving => "problem_solving",
            MarketField::Industry => "industry",
            MarketField::KnownCompetitors => "known_competitors",
            MarketField::UniqueValue => "unique_value",
            MarketField::BusinessModel => "business_model",
            MarketField::GeographicRegions => "geographic_regions",
        }
    }

    pub fn question(&self) -> &'static str {
        match self {
            MarketField::StartupIdea => "1. What is your startup idea? *",
            MarketField::IdealCustomer => "2. Who is your ideal customer? *",
            MarketField::ProblemSolving => "3. What problem are you solving? *",
            MarketField::Industry => "4. What industry or market are you in? *",
            MarketField::KnownCompetitors => "5. Who are your known competitors (if any)?",
            MarketField::UniqueValue => "6. What makes your solution unique?",
            MarketField::BusinessModel => "7. What is your business model?",
            MarketField::GeographicRegions => "8. What geographic regions are you targeting?",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            MarketField::StartupIdea => "Describe your startup concept in detail...",
            MarketField::IdealCustomer => {
                "e.g., Small business owners, healthcare professionals, students..."
            }
            MarketField::ProblemSolving => "What pain point does your solution address?",
            MarketField::Industry => "e.g., Healthcare, EdTech, FinTech, SaaS...",
            MarketField::KnownCompetitors => {
                "List any competitors you're aware of, or leave blank if unsure..."
            }
            MarketField::UniqueValue => "What's your unique value proposition or differentiator?",
            MarketField::BusinessModel => "e.g., Subscription, Freemium, Marketplace, Enterprise...",
            MarketField::GeographicRegions => "e.g., United States, Global, APAC, Europe...",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            MarketField::StartupIdea
                | MarketField::IdealCustomer
                | MarketField::ProblemSolving
                | MarketField::Industry
        )
    }

    /// テキストエリアの行数（None は1行入力）
    pub fn rows(&self) -> Option<u32> {
        match self {
            MarketField::StartupIdea => Some(3),
            MarketField::Industry | MarketField::BusinessModel | MarketField::GeographicRegions => {
                None
            }
            _ => Some(2),
        }
    }
}

impl MarketInsightsRequest {
    pub fn get(&self, field: MarketField) -> &str {
        match field {
            MarketField::StartupIdea => &self.startup_idea,
            MarketField::IdealCustomer => &self.ideal_customer,
            MarketField::ProblemSolving => &self.problem_solving,
            MarketField::Industry => &self.industry,
            MarketField::KnownCompetitors => &self.known_competitors,
            MarketField::UniqueValue => &self.unique_value,
            MarketField::BusinessModel => &self.business_model,
            MarketField::GeographicRegions => &self.geographic_regions,
        }
    }

    pub fn set(&mut self, field: MarketField, value: String) {
        let slot = match field {
            MarketField::StartupIdea => &mut self.startup_idea,
            MarketField::IdealCustomer => &mut self.ideal_customer,
            MarketField::ProblemSolving => &mut self.problem_solving,
            MarketField::Industry => &mut self.industry,
            MarketField::KnownCompetitors => &mut self.known_competitors,
            MarketField::UniqueValue => &mut self.unique_value,
            MarketField::BusinessModel => &mut self.business_model,
            MarketField::GeographicRegions => &mut self.geographic_regions,
        };
        *slot = value;
    }

    /// 必須4項目がすべて入力済みか（送信ボタンの有効条件）
    pub fn is_complete(&self) -> bool {
        MarketField::ALL
            .iter()
            .filter(|f| f.is_required())
            .all(|f| !self.get(*f).is_empty())
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(Error::Validation(INCOMPLETE_FORM_MESSAGE.to_string()))
        }
    }
}

/// セグメント規模の文字列から円グラフの重みを決める
///
/// "large" を含めば3、"medium" を含めば2、それ以外は1
pub fn segment_weight(size: &str) -> u32 {
    let size = size.to_lowercase();
    if size.contains("large") {
        3
    } else if size.contains("medium") {
        2
    } else {
        1
    }
}

/// 円グラフの1スライス
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSlice {
    pub name: String,
    pub size: String,
    pub value: u32,
    pub color: &'static str,
    /// 全体に占める割合（0〜1）
    pub fraction: f64,
}

impl SegmentSlice {
    /// "{name}: {percent}%"
    pub fn label(&self) -> String {
        format!("{}: {}%", self.name, percent_label(self.fraction))
    }
}

/// セグメント一覧からスライスを作成
pub fn segment_slices(segments: &[CustomerSegment]) -> Vec<SegmentSlice> {
    let values: Vec<u32> = segments.iter().map(|s| segment_weight(&s.size)).collect();
    let total: u32 = values.iter().sum();

    segments
        .iter()
        .zip(values)
        .enumerate()
        .map(|(i, (segment, value))| SegmentSlice {
            name: segment.name.clone(),
            size: segment.size.clone(),
            value,
            color: segment_color(i),
            fraction: if total == 0 {
                0.0
            } else {
                value as f64 / total as f64
            },
        })
        .collect()
}

pub fn segment_color(index: usize) -> &'static str {
    SEGMENT_COLORS[index % SEGMENT_COLORS.len()]
}

/// 割合を整数パーセントに（0.5は切り上げ）
pub fn percent_label(fraction: f64) -> String {
    format!("{}", (fraction * 100.0).round() as i64)
}

/// SVG描画用のスライス形状
#[derive(Debug, Clone, PartialEq)]
pub struct SliceGeometry {
    /// `<path d=...>`
    pub path: String,
    /// ラベル位置
    pub label_x: f64,
    pub label_y: f64,
}

/// 中心(cx, cy)・半径rの円グラフで各スライスのパスを計算
///
/// 12時方向から時計回りに配置する
pub fn pie_geometry(slices: &[SegmentSlice], cx: f64, cy: f64, r: f64) -> Vec<SliceGeometry> {
    let tau = std::f64::consts::TAU;
    let point = |angle: f64, radius: f64| {
        (
            cx + radius * (angle - tau / 4.0).cos(),
            cy + radius * (angle - tau / 4.0).sin(),
        )
    };

    let mut start = 0.0;
    slices
        .iter()
        .map(|slice| {
            let sweep = slice.fraction * tau;
            let end = start + sweep;
            let (sx, sy) = point(start, r);
            let (ex, ey) = point(end, r);
            let (lx, ly) = point(start + sweep / 2.0, r * 1.25);

            let path = if slice.fraction >= 1.0 {
                // 全周は弧1本では描けないので半円2本
                let (mx, my) = point(start + tau / 2.0, r);
                format!(
                    "M {sx:.3} {sy:.3} A {r} {r} 0 1 1 {mx:.3} {my:.3} A {r} {r} 0 1 1 {sx:.3} {sy:.3} Z"
                )
            } else {
                let large_arc = if sweep > tau / 2.0 { 1 } else { 0 };
                format!(
                    "M {cx} {cy} L {sx:.3} {sy:.3} A {r} {r} 0 {large_arc} 1 {ex:.3} {ey:.3} Z"
                )
            };

            start = end;
            SliceGeometry {
                path,
                label_x: lx,
                label_y: ly,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn segment(name: &str, size: &str) -> CustomerSegment {
        CustomerSegment {
            name: name.to_string(),
            size: size.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields_gate_submission() {
        let mut form = MarketInsightsRequest::default();
        assert!(!form.is_complete());

        form.set(MarketField::StartupIdea, "Meal kits".into());
        form.set(MarketField::IdealCustomer, "Busy parents".into());
        form.set(MarketField::ProblemSolving, "No time to cook".into());
        assert!(!form.is_complete());

        form.set(MarketField::Industry, "FoodTech".into());
        assert!(form.is_complete());
        assert!(form.validate().is_ok());

        form.set(MarketField::IdealCustomer, String::new());
        assert!(!form.is_complete());
        assert!(matches!(form.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_optional_fields_do_not_gate_submission() {
        let required = MarketField::ALL.iter().filter(|f| f.is_required()).count();
        assert_eq!(required, 4);

        let mut form = MarketInsightsRequest::default();
        for field in MarketField::ALL.iter().filter(|f| f.is_required()) {
            form.set(*field, "x".into());
        }
        assert!(form.is_complete());
        assert_eq!(form.get(MarketField::BusinessModel), "");
    }

    #[test]
    fn test_request_serializes_all_eight_fields() {
        let json = serde_json::to_value(MarketInsightsRequest::default()).unwrap();
        let object = json.as_object().unwrap();
        for field in MarketField::ALL {
            assert!(object.contains_key(field.name()), "missing {}", field.name());
        }
        assert_eq!(object.len(), 8);
    }

    #[test]
    fn test_segment_weight() {
        assert_eq!(segment_weight("Large (40% of market)"), 3);
        assert_eq!(segment_weight("MEDIUM"), 2);
        assert_eq!(segment_weight("Small niche"), 1);
        assert_eq!(segment_weight("unknown"), 1);
        // "large" の判定が優先
        assert_eq!(segment_weight("medium to large"), 3);
    }

    #[test]
    fn test_segment_slices() {
        let slices = segment_slices(&[
            segment("Enterprises", "Large"),
            segment("Startups", "Medium"),
            segment("Hobbyists", "Small"),
        ]);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].value, 3);
        assert_eq!(slices[0].color, "#06b6d4");
        assert_eq!(slices[0].label(), "Enterprises: 50%");
        assert_eq!(slices[1].label(), "Startups: 33%");
        assert_eq!(slices[2].label(), "Hobbyists: 17%");
    }

    #[test]
    fn test_segment_colors_cycle() {
        assert_eq!(segment_color(5), "#06b6d4");
        assert_eq!(segment_color(6), "#14b8a6");
    }

    #[test]
    fn test_percent_label_rounds_half_up() {
        assert_eq!(percent_label(0.125), "13");
        assert_eq!(percent_label(0.0), "0");
    }

    #[test]
    fn test_pie_geometry() {
        let slices = segment_slices(&[segment("A", "large"), segment("B", "large")]);
        let geometry = pie_geometry(&slices, 100.0, 100.0, 80.0);
        assert_eq!(geometry.len(), 2);
        assert!(geometry[0].path.starts_with("M 100 100 L 100.000 20.000"));
        // 1つ目は右半分、ラベルは3時方向
        assert!((geometry[0].label_x - 200.0).abs() < 1e-6);
        assert!((geometry[0].label_y - 100.0).abs() < 1e-6);

        let single = segment_slices(&[segment("Only", "small")]);
        let geometry = pie_geometry(&single, 100.0, 100.0, 80.0);
        assert_eq!(geometry[0].path.matches(" A ").count(), 2);
    }
}
