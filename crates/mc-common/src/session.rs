use tracing::info;

use crate::config::ConfigError;
use crate::matching::scoring::{CategoryScorer, RandomScorer, SimulationEngine, SimulationResult};
use crate::matching::threshold::threshold_status;
use crate::{Category, MatchingConfig};

/// マッチング設定画面1セッション分のコンテキスト。
/// 設定と直近のシミュレーション結果を単独で所有する。
/// 画面を離れた時点でドロップされ、何も永続化されない。
pub struct ConfiguratorSession<S: CategoryScorer = RandomScorer> {
    config: MatchingConfig,
    engine: SimulationEngine<S>,
    last_result: Option<SimulationResult>,
}

impl ConfiguratorSession<RandomScorer> {
    /// シードデータから新規セッションを開始する（画面マウント時）
    pub fn new() -> Self {
        Self::with_scorer(RandomScorer)
    }
}

impl Default for ConfiguratorSession<RandomScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: CategoryScorer> ConfiguratorSession<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            config: MatchingConfig::seed(),
            engine: SimulationEngine::new(scorer),
            last_result: None,
        }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    pub fn set_weight(&mut self, category: Category, id: &str, weight: u8) -> Result<(), ConfigError> {
        self.config.set_weight(category, id, weight)
    }

    pub fn set_required(&mut self, category: Category, id: &str, required: bool) -> Result<(), ConfigError> {
        self.config.set_required(category, id, required)
    }

    pub fn set_match_threshold(&mut self, value: u8) -> Result<(), ConfigError> {
        self.config.set_match_threshold(value)
    }

    pub fn set_diversity_priority(&mut self, value: u8) -> Result<(), ConfigError> {
        self.config.set_diversity_priority(value)
    }

    /// シミュレーションを実行し、前回結果を丸ごと置き換える
    pub fn run_simulation(&mut self) -> SimulationResult {
        let result = self.engine.run(&self.config);
        info!(
            score = result.score,
            threshold = self.config.match_threshold,
            status = threshold_status(result.score, self.config.match_threshold),
            "simulation run completed"
        );
        self.last_result = Some(result);
        result
    }

    pub fn last_result(&self) -> Option<&SimulationResult> {
        self.last_result.as_ref()
    }

    /// 直近結果の合格判定。未実行なら None。
    pub fn passed(&self) -> Option<bool> {
        self.last_result.map(|r| r.passes(&self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scoring::FixedScorer;

    fn fixed_session(value: u8) -> ConfiguratorSession<FixedScorer> {
        ConfiguratorSession::with_scorer(FixedScorer {
            skills: value,
            experience: value,
            education: value,
            culture: value,
        })
    }

    #[test]
    fn starts_without_result() {
        let session = ConfiguratorSession::new();
        assert!(session.last_result().is_none());
        assert_eq!(session.passed(), None);
    }

    #[test]
    fn run_replaces_previous_result() {
        let mut session = fixed_session(90);
        let first = session.run_simulation();
        assert_eq!(session.last_result(), Some(&first));

        let mut low = fixed_session(10);
        let second = low.run_simulation();
        assert_eq!(low.last_result(), Some(&second));
        assert_ne!(first, second);
    }

    #[test]
    fn passed_follows_threshold() {
        let mut session = fixed_session(90);
        session.set_match_threshold(90).unwrap();
        session.run_simulation();
        assert_eq!(session.passed(), Some(true));

        session.set_match_threshold(91).unwrap();
        assert_eq!(session.passed(), Some(false));
    }

    #[test]
    fn mutations_flow_through_to_config() {
        let mut session = ConfiguratorSession::new();
        session.set_weight(Category::Skills, "react", 10).unwrap();
        session.set_required(Category::Skills, "graphql", true).unwrap();
        session.set_diversity_priority(80).unwrap();

        let config = session.config();
        assert_eq!(config.items(Category::Skills)[0].weight, 10);
        assert!(config.items(Category::Skills)[3].required);
        assert_eq!(config.diversity_goals.priority, 80);
    }
}
