//! 対話入力（dialoguer）
//!
//! 標準入力が端末でない場合は対話せずに既定値・パイプ入力を使う

use dialoguer::{Input, Select};
use pitch_coach_common::Persona;
use std::io::{IsTerminal, Read};

use crate::error::Result;

/// 評価者ペルソナを選択
pub fn choose_persona(default: Persona) -> Result<Persona> {
    if !std::io::stdin().is_terminal() {
        return Ok(default);
    }

    let items: Vec<String> = Persona::ALL
        .iter()
        .map(|p| format!("{} {:<22} {}", p.icon(), p.title(), p.description()))
        .collect();
    let default_index = Persona::ALL.iter().position(|p| *p == default).unwrap_or(0);

    let index = Select::new()
        .with_prompt("評価者を選択してください")
        .items(&items)
        .default(default_index)
        .interact()?;
    Ok(Persona::ALL[index])
}

/// アイデアの説明を入力
pub fn ask_idea_description() -> Result<String> {
    if !std::io::stdin().is_terminal() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    let text = Input::<String>::new()
        .with_prompt("アイデアの説明")
        .allow_empty(true)
        .interact_text()?;
    Ok(text)
}
