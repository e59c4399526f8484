pub mod config;
pub mod logging;
pub mod matching;
pub mod session;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoStaticStr};

// Commonly used data models for the matching configurator.

/// 評価カテゴリ（4種固定）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Skills,
    Experience,
    Education,
    Culture,
}

/// マッチング基準1件。weight はカテゴリ内の相対的な重要度（0〜100）。
/// required は UI 表示用のフラグで、集計には使われない（既存仕様の踏襲）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionItem {
    pub id: String,
    pub name: String,
    pub weight: u8,
    pub required: bool,
}

/// ダイバーシティ目標。スコア計算とは独立したアドバイザリ設定。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiversityGoals {
    pub enabled: bool,
    pub target_groups: BTreeSet<String>,
    /// 優先度（0〜100）
    pub priority: u8,
}

/// マッチング設定全体。単一セッションが占有し、変更はすべてインプレース。
/// 重みの合計に正規化の制約はなく、集計時に比率へ変換される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub skills: Vec<CriterionItem>,
    pub experience: Vec<CriterionItem>,
    pub education: Vec<CriterionItem>,
    pub culture: Vec<CriterionItem>,
    pub diversity_goals: DiversityGoals,
    /// 合格ライン（0〜100）。表示上の色分けにのみ使われる。
    pub match_threshold: u8,
}

impl MatchingConfig {
    pub fn items(&self, category: Category) -> &[CriterionItem] {
        match category {
            Category::Skills => &self.skills,
            Category::Experience => &self.experience,
            Category::Education => &self.education,
            Category::Culture => &self.culture,
        }
    }

    pub(crate) fn items_mut(&mut self, category: Category) -> &mut Vec<CriterionItem> {
        match category {
            Category::Skills => &mut self.skills,
            Category::Experience => &mut self.experience,
            Category::Education => &mut self.education,
            Category::Culture => &mut self.culture,
        }
    }
}
