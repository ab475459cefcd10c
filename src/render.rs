//! 解析結果のターミナル表示

use colored::{ColoredString, Colorize};

use pitch_coach_common::market::percent_label;
use pitch_coach_common::score::format_score;
use pitch_coach_common::{
    format_feedback, segment_slices, FeedbackLine, HealthStatus, IdeaAnalysisResult,
    MarketInsightsResult, Persona, PitchAnalysisResponse, ScoreDimension, ScoreTone, Sentiment,
};

/// スコアバーの桁数（10点満点で1点=2桁）
const SCORE_BAR_WIDTH: usize = 20;
/// セグメント比率バーの桁数
const SEGMENT_BAR_WIDTH: usize = 30;
/// 再計算値との差がこれ以上なら併記する
const WEIGHTED_SCORE_TOLERANCE: f64 = 0.05;

fn tone_colored(text: &str, tone: ScoreTone) -> ColoredString {
    match tone {
        ScoreTone::Emerald => text.green(),
        ScoreTone::Blue => text.blue(),
        ScoreTone::Amber => text.yellow(),
        ScoreTone::Red => text.red(),
    }
}

/// 割合(0〜1)を █/░ のバーにする
pub fn ratio_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn section(title: &str) -> String {
    format!("\n{}\n", title.bold().underline())
}

pub fn render_idea(result: &IdeaAnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}",
        "Originality & Technology Score:".bold(),
        format_score(result.weighted_score).bold().magenta()
    ));
    out.push_str(" / 100\n");

    let recomputed = result.scores.weighted_total();
    if (recomputed - result.weighted_score).abs() >= WEIGHTED_SCORE_TOLERANCE {
        out.push_str(&format!(
            "  {}\n",
            format!("(recomputed from sub-scores: {})", format_score(recomputed)).dimmed()
        ));
    }

    out.push_str(&section("Score Breakdown"));
    for dimension in ScoreDimension::ALL {
        let score = result.scores.get(dimension);
        let tone = ScoreTone::from_score(score);
        let bar = ratio_bar(score / 10.0, SCORE_BAR_WIDTH);
        out.push_str(&format!(
            "{} {:<40} {} {}\n",
            dimension.icon(),
            dimension.label(),
            tone_colored(&bar, tone),
            tone_colored(&format!("{}/10", format_score(score)), tone).bold()
        ));
        let explanation = result.explanations.get(dimension);
        if !explanation.is_empty() {
            out.push_str(&format!("   {}\n", explanation.dimmed()));
        }
    }

    if !result.patents.is_empty() {
        out.push_str(&section(&format!(
            "Relevant U.S. Patents ({})",
            result.patents.len()
        )));
        for patent in &result.patents {
            out.push_str(&format!("• {}\n", patent.title.bold()));
            out.push_str(&format!(
                "  Patent #{} • Filed: {} • Status: {}\n",
                patent.patent_number, patent.filing_date, patent.status
            ));
            if !patent.abstract_text.is_empty() {
                out.push_str(&format!("  {}\n", patent.abstract_text));
            }
            out.push_str(&format!("  {}\n", patent.link.cyan().underline()));
        }
    }

    out
}

pub fn render_market(result: &MarketInsightsResult) -> String {
    let mut out = String::new();

    if !result.customer_segments.is_empty() {
        out.push_str(&section("Customer Segments"));
        let slices = segment_slices(&result.customer_segments);
        for (segment, slice) in result.customer_segments.iter().zip(&slices) {
            out.push_str(&format!(
                "{:<28} {} {:>4}%\n",
                segment.name.bold(),
                ratio_bar(slice.fraction, SEGMENT_BAR_WIDTH).cyan(),
                percent_label(slice.fraction)
            ));
            out.push_str(&format!("   {}\n", segment.description));
            out.push_str(&format!("   {} {}\n", "Size:".dimmed(), segment.size));
        }
    }

    if !result.customer_personas.is_empty() {
        out.push_str(&section("Customer Personas"));
        for persona in &result.customer_personas {
            out.push_str(&format!("{}\n", persona.name.bold().bright_cyan()));
            out.push_str(&format!("   Demographics: {}\n", persona.demographics));
            if let Some(pain) = persona.pain_points.first() {
                out.push_str(&format!("   Top Pain Point: • {}\n", pain));
            }
            if let Some(goal) = persona.goals.first() {
                out.push_str(&format!("   Primary Goal: → {}\n", goal));
            }
        }
    }

    let competitors = &result.competitors;
    out.push_str(&section("Competitive Landscape"));
    out.push_str(&format!(
        "Direct: {}  Adjacent: {}  Indirect: {}\n",
        competitors.direct.len().to_string().magenta().bold(),
        competitors.adjacent.len().to_string().blue().bold(),
        competitors.indirect.len().to_string().bright_blue().bold()
    ));
    for comp in &competitors.direct {
        out.push_str(&format!("• {} - {}\n", comp.name.bold(), comp.description));
        out.push_str(&format!(
            "  {} {}\n",
            "Strengths:".green(),
            first_two(&comp.strengths)
        ));
        out.push_str(&format!(
            "  {} {}\n",
            "Weaknesses:".red(),
            first_two(&comp.weaknesses)
        ));
    }

    if !result.market_gaps.is_empty() {
        out.push_str(&section("Market Gaps & Opportunities"));
        for gap in &result.market_gaps {
            out.push_str(&format!("{} {}\n", "✔".green(), gap));
        }
    }

    if !result.positioning_insights.is_empty() {
        out.push_str(&section("Positioning Strategy"));
        out.push_str(&result.positioning_insights);
        out.push('\n');
    }

    out
}

pub fn render_pitch(response: &PitchAnalysisResponse, persona: Persona) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n{}\n",
        "🏆 Analysis Complete".bold(),
        format!("Expert feedback from your {}", persona.title()).dimmed()
    ));

    if !response.transcript.is_empty() {
        out.push_str(&section("Your Transcript"));
        out.push_str(&response.transcript);
        out.push('\n');
    }

    out.push_str(&section("Expert Analysis"));
    for line in format_feedback(&response.analysis.raw_feedback) {
        out.push_str(&render_feedback_line(&line));
        out.push('\n');
    }

    out
}

pub fn render_feedback_line(line: &FeedbackLine) -> String {
    match line {
        FeedbackLine::Heading(text) => format!("\n{}", text.bold().bright_white()),
        FeedbackLine::Bullet { text, sentiment } => match sentiment {
            Sentiment::Positive => format!("  {} {}", "✔".green(), text),
            Sentiment::Negative => format!("  {} {}", "✖".yellow(), text),
        },
        FeedbackLine::Score(text) => format!("{} {}", "▌".magenta(), text.bold()),
        FeedbackLine::Paragraph(text) => text.clone(),
    }
}

pub fn render_health(base_url: &str, health: &HealthStatus) -> String {
    let status = if health.status == "healthy" {
        health.status.green().bold()
    } else {
        health.status.yellow().bold()
    };
    format!("{} {}", base_url, status)
}

fn first_two(items: &[String]) -> String {
    items.iter().take(2).map(String::as_str).collect::<Vec<_>>().join(", ")
}
