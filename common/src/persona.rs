//! ピッチ評価のエキスパートペルソナ

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// 評価者ペルソナ（固定5種）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    #[default]
    Investor,
    Advisor,
    Healthcare,
    Edtech,
    Tech,
}

impl Persona {
    pub const ALL: [Persona; 5] = [
        Persona::Investor,
        Persona::Advisor,
        Persona::Healthcare,
        Persona::Edtech,
        Persona::Tech,
    ];

    /// バックエンドに送るID
    pub fn id(&self) -> &'static str {
        match self {
            Persona::Investor => "investor",
            Persona::Advisor => "advisor",
            Persona::Healthcare => "healthcare",
            Persona::Edtech => "edtech",
            Persona::Tech => "tech",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Persona::Investor => "Venture Investor",
            Persona::Advisor => "Pitch Advisor",
            Persona::Healthcare => "Healthcare Expert",
            Persona::Edtech => "EdTech Specialist",
            Persona::Tech => "Tech Startup Expert",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Persona::Investor => {
                "VC perspective on market fit, scalability, business model, and ROI potential"
            }
            Persona::Advisor => {
                "Expert coaching on presentation skills, storytelling, and persuasive delivery"
            }
            Persona::Healthcare => {
                "Specialized feedback for medical, biotech, and healthcare solutions"
            }
            Persona::Edtech => {
                "Educational technology perspective on learning outcomes and scalability"
            }
            Persona::Tech => "Technical validation for SaaS, AI, and innovative tech solutions",
        }
    }

    /// カードのグラデーションクラス
    pub fn gradient(&self) -> &'static str {
        match self {
            Persona::Investor => "from-indigo-500 to-blue-600",
            Persona::Advisor => "from-purple-500 to-pink-600",
            Persona::Healthcare => "from-rose-500 to-red-600",
            Persona::Edtech => "from-emerald-500 to-teal-600",
            Persona::Tech => "from-cyan-500 to-blue-600",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Persona::Investor => "👥",
            Persona::Advisor => "💡",
            Persona::Healthcare => "❤️",
            Persona::Edtech => "🎓",
            Persona::Tech => "🖥️",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Persona {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase();
        Persona::ALL
            .iter()
            .copied()
            .find(|p| p.id() == id)
            .ok_or_else(|| {
                let valid: Vec<&str> = Persona::ALL.iter().map(|p| p.id()).collect();
                Error::Validation(format!("Persona must be one of: {}", valid.join(", ")))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_investor() {
        assert_eq!(Persona::default(), Persona::Investor);
    }

    #[test]
    fn test_from_str_roundtrip_ids() {
        for persona in Persona::ALL {
            assert_eq!(persona.id().parse::<Persona>().unwrap(), persona);
        }
        assert_eq!(" EdTech ".parse::<Persona>().unwrap(), Persona::Edtech);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "shark".parse::<Persona>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Persona must be one of: investor, advisor, healthcare, edtech, tech"
        );
    }

    #[test]
    fn test_serde_uses_lowercase_id() {
        let json = serde_json::to_string(&Persona::Healthcare).unwrap();
        assert_eq!(json, "\"healthcare\"");
    }
}
