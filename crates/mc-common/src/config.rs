use thiserror::Error;
use tracing::debug;

use crate::{Category, CriterionItem, DiversityGoals, MatchingConfig};

/// 設定変更時のバリデーションエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("weight out of range for '{id}': {weight} (expected 0-100)")]
    WeightOutOfRange { id: String, weight: u8 },
    #[error("match threshold out of range: {0} (expected 0-100)")]
    ThresholdOutOfRange(u8),
    #[error("diversity priority out of range: {0} (expected 0-100)")]
    PriorityOutOfRange(u8),
    #[error("unknown criterion '{id}' in category {category}")]
    UnknownCriterion { category: &'static str, id: String },
}

pub const DEFAULT_MATCH_THRESHOLD: u8 = 75;

fn item(id: &str, name: &str, weight: u8, required: bool) -> CriterionItem {
    CriterionItem {
        id: id.into(),
        name: name.into(),
        weight,
        required,
    }
}

impl MatchingConfig {
    /// ダッシュボード初期表示用のシードデータ。
    /// 画面マウント時に毎回この状態から開始する（永続化なし）。
    pub fn seed() -> Self {
        Self {
            skills: vec![
                item("react", "React", 90, true),
                item("typescript", "TypeScript", 85, true),
                item("nodejs", "Node.js", 70, false),
                item("graphql", "GraphQL", 50, false),
                item("aws", "AWS", 45, false),
            ],
            experience: vec![
                item("years", "経験年数", 80, true),
                item("industry", "業界経験", 60, false),
                item("leadership", "リーダー経験", 40, false),
            ],
            education: vec![
                item("degree", "学位", 50, false),
                item("major", "専攻分野", 45, false),
                item("certifications", "資格", 30, false),
            ],
            culture: vec![
                item("collaboration", "チーム協調性", 75, true),
                item("growth_mindset", "成長志向", 65, false),
                item("remote_fit", "リモート適性", 50, false),
                item("values", "バリュー共感", 70, false),
            ],
            diversity_goals: DiversityGoals {
                enabled: false,
                target_groups: Default::default(),
                priority: 50,
            },
            match_threshold: env_match_threshold(),
        }
    }

    /// 重みスライダーの反映。0〜100 の範囲外と未知の id は拒否し、設定は変更しない。
    pub fn set_weight(&mut self, category: Category, id: &str, weight: u8) -> Result<(), ConfigError> {
        if weight > 100 {
            return Err(ConfigError::WeightOutOfRange {
                id: id.into(),
                weight,
            });
        }

        let entry = self.find_mut(category, id)?;
        debug!(category = category.as_ref(), id, weight, "criterion weight updated");
        entry.weight = weight;
        Ok(())
    }

    /// 必須チェックボックスの反映。集計結果には影響しない（表示専用フラグ）。
    pub fn set_required(&mut self, category: Category, id: &str, required: bool) -> Result<(), ConfigError> {
        let entry = self.find_mut(category, id)?;
        entry.required = required;
        Ok(())
    }

    pub fn set_match_threshold(&mut self, value: u8) -> Result<(), ConfigError> {
        if value > 100 {
            return Err(ConfigError::ThresholdOutOfRange(value));
        }
        self.match_threshold = value;
        Ok(())
    }

    pub fn set_diversity_priority(&mut self, value: u8) -> Result<(), ConfigError> {
        if value > 100 {
            return Err(ConfigError::PriorityOutOfRange(value));
        }
        self.diversity_goals.priority = value;
        Ok(())
    }

    fn find_mut(&mut self, category: Category, id: &str) -> Result<&mut CriterionItem, ConfigError> {
        let name: &'static str = category.into();
        self.items_mut(category)
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(ConfigError::UnknownCriterion {
                category: name,
                id: id.into(),
            })
    }
}

fn env_match_threshold() -> u8 {
    std::env::var("MC_MATCH_THRESHOLD")
        .ok()
        .and_then(|s| s.parse::<u8>().ok())
        .filter(|v| *v <= 100)
        .unwrap_or(DEFAULT_MATCH_THRESHOLD)
}
