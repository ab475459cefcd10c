//! ピッチフィードバック本文の行分類
//!
//! バックエンドが返す自由文を改行で分割し、行頭・内容のパターンで
//! 見出し / 箇条書き / スコア行 / 段落 に振り分ける。
//! 文法のあるパーサーではなく、崩れた入力はすべて段落として扱う。

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEADING_PREFIX: Regex = Regex::new(r"^#+\s*").unwrap();
    static ref BOLD_LINE: Regex = Regex::new(r"^\*\*[^\n\r\x{2028}\x{2029}]*\*\*$").unwrap();
    static ref ORDERED_ITEM: Regex = Regex::new(r"^[0-9]+\.").unwrap();
    static ref BULLET_PREFIX: Regex = Regex::new(r"^[-•]\s*").unwrap();
    static ref ORDERED_PREFIX: Regex = Regex::new(r"^[0-9]+\.\s*").unwrap();
    static ref OUT_OF_TEN: Regex = Regex::new(r"[0-9]+/10").unwrap();
    static ref STRIKETHROUGH: Regex =
        Regex::new(r"~~([^\n\r\x{2028}\x{2029}]+?)~~").unwrap();
}

/// 太字行を見出し扱いする最大長（UTF-16単位、未満）
const BOLD_HEADING_MAX_LEN: usize = 100;

/// 肯定的な箇条書きと判定するキーワード
const POSITIVE_KEYWORDS: [&str; 4] = ["good", "strong", "excellent", "effective"];

/// 箇条書きの評価
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
}

/// 分類済みの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackLine {
    Heading(String),
    Bullet { text: String, sentiment: Sentiment },
    Score(String),
    Paragraph(String),
}

/// 強調記号を除去
///
/// `*` と `_` をすべて削除し、`~~x~~` を `x` に戻してから前後の空白を落とす
pub fn clean_markdown(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| *c != '*' && *c != '_').collect();
    let unstruck = STRIKETHROUGH.replace_all(&stripped, "$1");
    trim_whitespace(&unstruck).to_string()
}

/// 1行を分類（空行は None）
pub fn classify_line(line: &str) -> Option<FeedbackLine> {
    if is_heading(line) {
        let text = HEADING_PREFIX.replace(line, "");
        return Some(FeedbackLine::Heading(clean_markdown(&text)));
    }

    let trimmed = trim_whitespace(line);
    if trimmed.starts_with('-') || trimmed.starts_with('•') || ORDERED_ITEM.is_match(trimmed) {
        let without_bullet = BULLET_PREFIX.replace(line, "");
        let without_number = ORDERED_PREFIX.replace(&without_bullet, "");
        let text = clean_markdown(&without_number);
        let sentiment = sentiment_of(&text);
        return Some(FeedbackLine::Bullet { text, sentiment });
    }

    let lower = line.to_lowercase();
    if lower.contains("score") || lower.contains("rating") || OUT_OF_TEN.is_match(line) {
        return Some(FeedbackLine::Score(clean_markdown(line)));
    }

    if !trimmed.is_empty() {
        return Some(FeedbackLine::Paragraph(clean_markdown(line)));
    }

    None
}

/// フィードバック全文を行ごとに分類
pub fn format_feedback(raw: &str) -> Vec<FeedbackLine> {
    raw.split('\n').filter_map(classify_line).collect()
}

fn is_heading(line: &str) -> bool {
    line.starts_with('#')
        || (BOLD_LINE.is_match(line) && line.encode_utf16().count() < BOLD_HEADING_MAX_LEN)
}

fn sentiment_of(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    if POSITIVE_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Sentiment::Positive
    } else {
        Sentiment::Negative
    }
}

/// BOMも空白として扱うtrim
fn trim_whitespace(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bullet(text: &str, sentiment: Sentiment) -> FeedbackLine {
        FeedbackLine::Bullet {
            text: text.to_string(),
            sentiment,
        }
    }

    #[test]
    fn test_positive_bullet() {
        assert_eq!(
            classify_line("- This was a strong argument"),
            Some(bullet("This was a strong argument", Sentiment::Positive))
        );
    }

    #[test]
    fn test_negative_bullet() {
        assert_eq!(
            classify_line("- Needs more detail"),
            Some(bullet("Needs more detail", Sentiment::Negative))
        );
    }

    #[test]
    fn test_bullet_variants() {
        assert_eq!(
            classify_line("• **Excellent** hook"),
            Some(bullet("Excellent hook", Sentiment::Positive))
        );
        assert_eq!(
            classify_line("2. Effective use of data"),
            Some(bullet("Effective use of data", Sentiment::Positive))
        );
        // 行頭空白がある場合は記号を剥がさず、trimのみ
        assert_eq!(
            classify_line("  - Weak close"),
            Some(bullet("- Weak close", Sentiment::Negative))
        );
    }

    #[test]
    fn test_bullet_takes_precedence_over_score() {
        assert_eq!(
            classify_line("- Overall score: 7/10"),
            Some(bullet("Overall score: 7/10", Sentiment::Negative))
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(
            classify_line("## Key Strengths"),
            Some(FeedbackLine::Heading("Key Strengths".to_string()))
        );
        assert_eq!(
            classify_line("**Areas for Improvement**"),
            Some(FeedbackLine::Heading("Areas for Improvement".to_string()))
        );
        assert_eq!(
            classify_line("#"),
            Some(FeedbackLine::Heading(String::new()))
        );
    }

    #[test]
    fn test_long_bold_line_is_not_heading() {
        let line = format!("**{}**", "a".repeat(100));
        assert_eq!(classify_line(&line), Some(FeedbackLine::Paragraph("a".repeat(100))));
    }

    #[test]
    fn test_bold_line_with_carriage_return_is_not_heading() {
        assert_eq!(
            classify_line("**Summary**\r"),
            Some(FeedbackLine::Paragraph("Summary".to_string()))
        );
    }

    #[test]
    fn test_score_lines() {
        assert_eq!(
            classify_line("Overall Score: **8/10**"),
            Some(FeedbackLine::Score("Overall Score: 8/10".to_string()))
        );
        assert_eq!(
            classify_line("Investor rating is high"),
            Some(FeedbackLine::Score("Investor rating is high".to_string()))
        );
        assert_eq!(
            classify_line("Delivery 6/10"),
            Some(FeedbackLine::Score("Delivery 6/10".to_string()))
        );
    }

    #[test]
    fn test_paragraph_and_blank() {
        assert_eq!(
            classify_line("Your ~~pitch~~ _story_ resonates."),
            Some(FeedbackLine::Paragraph("Your pitch story resonates.".to_string()))
        );
        assert_eq!(classify_line(""), None);
        assert_eq!(classify_line("   "), None);
    }

    #[test]
    fn test_clean_markdown() {
        assert_eq!(clean_markdown("***bold italic***"), "bold italic");
        assert_eq!(clean_markdown("__under__ snake_case"), "under snakecase");
        assert_eq!(clean_markdown("~~gone~~ kept"), "gone kept");
        assert_eq!(clean_markdown("\u{FEFF} padded \t"), "padded");
    }

    #[test]
    fn test_format_feedback_document() {
        let raw = "# Overview\nGreat energy overall.\n\n- Good market sizing\n- Unclear revenue model\nOverall Score: 7/10";
        assert_eq!(
            format_feedback(raw),
            vec![
                FeedbackLine::Heading("Overview".to_string()),
                FeedbackLine::Paragraph("Great energy overall.".to_string()),
                bullet("Good market sizing", Sentiment::Positive),
                bullet("Unclear revenue model", Sentiment::Negative),
                FeedbackLine::Score("Overall Score: 7/10".to_string()),
            ]
        );
    }
}
