use anyhow::Context;
use chrono::Local;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use pitch_coach::cli::{Cli, Commands, OutputArgs};
use pitch_coach::client::BackendClient;
use pitch_coach::config::{Config, API_URL_ENV};
use pitch_coach::error::PitchCoachError;
use pitch_coach::{prompt, render, report};
use pitch_coach_common::api::{IDEA_FAILURE_MESSAGE, MARKET_FAILURE_MESSAGE, PITCH_FAILURE_MESSAGE};
use pitch_coach_common::{IdeaForm, MarketInsightsRequest, Persona};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // config サブコマンドは壊れた設定ファイルでも実行できるようにする
    let mut config = if matches!(cli.command, Commands::Config { .. }) {
        Config::load_or_default()?
    } else {
        Config::load().context("設定ファイルを読み込めません（pitch-coach config --set-api-url で再作成できます）")?
    };
    let api = config.api_config(cli.api_url.as_deref());
    tracing::debug!(base_url = %api.base_url, "backend");

    match cli.command {
        Commands::Idea { description, keywords, industry, output } => {
            let description = match description {
                Some(d) => d,
                None => prompt::ask_idea_description()?,
            };
            let form = IdeaForm { description, keywords, industry };

            let client = BackendClient::new(api)?;
            let spinner = spinner("💡 アイデアを解析中（特許検索を含むため時間がかかります）...");
            let result = client.analyze_idea(&form).await;
            spinner.finish_and_clear();
            let result = result.map_err(|e| user_facing(e, IDEA_FAILURE_MESSAGE))?;

            emit(&result, cli.json, render::render_idea)?;
            save_if_requested(&result, &output, "idea")?;
        }

        Commands::Market { form, output } => {
            let request = MarketInsightsRequest::from(form);

            let client = BackendClient::new(api)?;
            let spinner = spinner("📊 市場を分析中...");
            let result = client.analyze_market(&request).await;
            spinner.finish_and_clear();
            let result = result.map_err(|e| user_facing(e, MARKET_FAILURE_MESSAGE))?;

            emit(&result, cli.json, render::render_market)?;
            save_if_requested(&result, &output, "market")?;
        }

        Commands::Pitch { video, persona, output } => {
            let persona = match persona {
                Some(p) => p,
                None => prompt::choose_persona(config.default_persona)?,
            };

            let client = BackendClient::new(api)?;
            let spinner = spinner(&format!("🎥 {} として動画を解析中...", persona.title()));
            let result = client.analyze_pitch(&video, persona).await;
            spinner.finish_and_clear();
            let result = result.map_err(|e| user_facing(e, PITCH_FAILURE_MESSAGE))?;

            // レスポンスのペルソナを優先
            let shown = result
                .persona
                .as_deref()
                .and_then(|p| p.parse::<Persona>().ok())
                .unwrap_or(persona);
            emit(&result, cli.json, |r| render::render_pitch(r, shown))?;
            save_if_requested(&result, &output, "pitch")?;
        }

        Commands::Health => {
            let client = BackendClient::new(api)?;
            let health = client
                .health()
                .await
                .with_context(|| format!("バックエンドに接続できません: {}", client.config().base_url))?;
            let base_url = client.config().base_url.clone();
            emit(&health, cli.json, |h| render::render_health(&base_url, h))?;
        }

        Commands::Config { set_api_url, set_persona, show } => {
            let changed = set_api_url.is_some() || set_persona.is_some();

            if let Some(url) = set_api_url {
                config.set_api_url(&url)?;
                println!("✔ バックエンドURLを設定しました: {}", config.api_base_url);
            }

            if let Some(persona) = set_persona {
                config.set_default_persona(persona)?;
                println!("✔ 既定のペルソナを設定しました: {}", persona.title());
            }

            if show || !changed {
                let api = config.api_config(cli.api_url.as_deref());
                println!("設定 ({}):", Config::config_path()?.display());
                println!("  バックエンドURL: {}", config.api_base_url);
                if api.base_url != config.api_base_url {
                    println!("  実際の接続先: {} (--api-url / {})", api.base_url, API_URL_ENV);
                }
                println!("  アイデア解析タイムアウト: {}秒", config.idea_timeout_seconds);
                match config.market_timeout_seconds {
                    Some(secs) => println!("  市場分析タイムアウト: {}秒", secs),
                    None => println!("  市場分析タイムアウト: なし"),
                }
                println!("  ピッチ解析タイムアウト: {}秒", config.pitch_timeout_seconds);
                println!("  既定のペルソナ: {} ({})", config.default_persona.title(), config.default_persona);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "pitch_coach=debug,info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.magenta} {msg} [{elapsed}]") {
        bar.set_style(style);
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

/// バックエンドのエラーは detail か既定メッセージで表示する
fn user_facing(e: PitchCoachError, fallback: &str) -> anyhow::Error {
    match e {
        PitchCoachError::Backend(inner) => {
            tracing::debug!(error = %inner, "request failed");
            anyhow::anyhow!(inner.user_message(fallback))
        }
        other => other.into(),
    }
}

fn emit<T: Serialize>(value: &T, json: bool, render: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", render(value));
    }
    Ok(())
}

fn save_if_requested<T: Serialize>(value: &T, output: &OutputArgs, kind: &str) -> anyhow::Result<()> {
    if let Some(path) = &output.output {
        let path = report::resolve_report_path(path.as_deref(), kind, Local::now());
        report::save_report(value, &path)
            .with_context(|| format!("保存に失敗しました: {}", path.display()))?;
        eprintln!("✔ 結果を保存: {}", path.display());
    }
    Ok(())
}
