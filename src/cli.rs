use clap::{Args, Parser, Subcommand};
use pitch_coach_common::{MarketInsightsRequest, Persona};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pitch-coach")]
#[command(about = "スタートアップのピッチ練習・アイデア解析・市場分析クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// バックエンドURL（環境変数・設定ファイルより優先）
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// 整形せずレスポンスJSONをそのまま出力
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// スタートアップのアイデアを解析（新規性・実現性・特許）
    Idea {
        /// アイデアの説明（省略時は対話入力）
        description: Option<String>,

        /// キーワード（カンマ区切り）
        #[arg(short, long, default_value = "")]
        keywords: String,

        /// 業界・ドメイン
        #[arg(short, long, default_value = "")]
        industry: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// 顧客セグメント・競合の市場分析
    Market {
        #[command(flatten)]
        form: MarketArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// ピッチ動画を解析してフィードバックを取得
    Pitch {
        /// 動画ファイル（mp4/mov/webm など）
        #[arg(required = true)]
        video: PathBuf,

        /// 評価者ペルソナ (investor/advisor/healthcare/edtech/tech)。省略時は選択
        #[arg(short, long)]
        persona: Option<Persona>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// バックエンドの稼働確認
    Health,

    /// 設定を表示/編集
    Config {
        /// バックエンドURLを設定
        #[arg(long)]
        set_api_url: Option<String>,

        /// 既定のペルソナを設定
        #[arg(long)]
        set_persona: Option<Persona>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 市場分析の入力（先頭4項目は必須）
#[derive(Args, Debug, Clone)]
pub struct MarketArgs {
    /// スタートアップのアイデア
    #[arg(long)]
    pub startup_idea: String,

    /// 理想の顧客
    #[arg(long)]
    pub ideal_customer: String,

    /// 解決する課題
    #[arg(long)]
    pub problem_solving: String,

    /// 業界
    #[arg(long)]
    pub industry: String,

    /// 把握している競合
    #[arg(long, default_value = "")]
    pub known_competitors: String,

    /// 独自の価値
    #[arg(long, default_value = "")]
    pub unique_value: String,

    /// ビジネスモデル
    #[arg(long, default_value = "")]
    pub business_model: String,

    /// 対象地域
    #[arg(long, default_value = "")]
    pub geographic_regions: String,
}

impl From<MarketArgs> for MarketInsightsRequest {
    fn from(args: MarketArgs) -> Self {
        Self {
            startup_idea: args.startup_idea,
            ideal_customer: args.ideal_customer,
            problem_solving: args.problem_solving,
            industry: args.industry,
            known_competitors: args.known_competitors,
            unique_value: args.unique_value,
            business_model: args.business_model,
            geographic_regions: args.geographic_regions,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// 結果をJSONで保存（パス省略時は kind-日時.json）
    #[arg(short, long, num_args = 0..=1)]
    pub output: Option<Option<PathBuf>>,
}
