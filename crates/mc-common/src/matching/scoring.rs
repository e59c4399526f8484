use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

use super::weights::WeightTotals;
use crate::{Category, MatchingConfig};

/// カテゴリ単位のスコア供給源（0〜100）。
/// 本番では候補者×求人ペアを評価するモデルが入る想定で、
/// シミュレーション実行時は一様乱数の `RandomScorer` を差し込む。
pub trait CategoryScorer {
    fn score(&self, category: Category) -> u8;
}

/// シード無しの一様乱数ドロー [0, 100]。実行ごとに結果は変わる。
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomScorer;

impl CategoryScorer for RandomScorer {
    fn score(&self, _category: Category) -> u8 {
        rand::thread_rng().gen_range(0..=100)
    }
}

/// テスト用の固定スコア
#[derive(Debug, Clone, Copy)]
pub struct FixedScorer {
    pub skills: u8,
    pub experience: u8,
    pub education: u8,
    pub culture: u8,
}

impl CategoryScorer for FixedScorer {
    fn score(&self, category: Category) -> u8 {
        match category {
            Category::Skills => self.skills,
            Category::Experience => self.experience,
            Category::Education => self.education,
            Category::Culture => self.culture,
        }
    }
}

/// カテゴリごとの生スコア。重みに左右されない「その分野での適合度」。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub skills: u8,
    pub experience: u8,
    pub education: u8,
    pub culture: u8,
}

impl CategoryBreakdown {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Skills => self.skills,
            Category::Experience => self.experience,
            Category::Education => self.education,
            Category::Culture => self.culture,
        }
    }

    fn set(&mut self, category: Category, value: u8) {
        match category {
            Category::Skills => self.skills = value,
            Category::Experience => self.experience = value,
            Category::Education => self.education = value,
            Category::Culture => self.culture = value,
        }
    }
}

/// シミュレーション1回分の結果。実行ごとに丸ごと作り直される（マージなし）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// 総合スコア（0〜100）
    pub score: u8,
    pub breakdown: CategoryBreakdown,
}

impl SimulationResult {
    pub fn passes(&self, config: &MatchingConfig) -> bool {
        super::threshold::meets_threshold(self.score, config.match_threshold)
    }
}

pub struct SimulationEngine<S: CategoryScorer> {
    scorer: S,
}

impl Default for SimulationEngine<RandomScorer> {
    fn default() -> Self {
        Self::new(RandomScorer)
    }
}

impl<S: CategoryScorer> SimulationEngine<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// カテゴリ別スコアを重み比率で合成して総合スコアを算出する。
    ///
    /// 1. カテゴリごとに重み合計を取り、grand_total で比率化
    /// 2. カテゴリスコア × 比率の総和を四捨五入して総合スコア
    /// 3. breakdown には重みを掛ける前の生スコアをそのまま入れる
    ///
    /// 全項目の重みが 0 の場合は乱数を引かずにゼロ結果を返す。
    pub fn run(&self, config: &MatchingConfig) -> SimulationResult {
        let totals = WeightTotals::from_config(config);
        let grand_total = totals.grand_total();

        if grand_total == 0 {
            debug!("all criterion weights are zero; returning zero result");
            return SimulationResult {
                score: 0,
                breakdown: CategoryBreakdown::default(),
            };
        }

        let mut breakdown = CategoryBreakdown::default();
        let mut weighted_sum = 0.0_f64;

        for category in Category::iter() {
            let category_score = self.scorer.score(category).min(100);
            breakdown.set(category, category_score);
            weighted_sum += f64::from(category_score) * totals.share(category);
        }

        let score = weighted_sum.round() as u8;

        debug!(
            score,
            grand_total,
            skills = breakdown.skills,
            experience = breakdown.experience,
            education = breakdown.education,
            culture = breakdown.culture,
            "simulation scored"
        );

        SimulationResult { score, breakdown }
    }
}

/// シミュレーション実行のショートカット（乱数スコアラー使用）
pub fn run_simulation(config: &MatchingConfig) -> SimulationResult {
    SimulationEngine::default().run(config)
}
