use crate::{Category, MatchingConfig};

/// カテゴリごとの重み合計。
/// 各項目の weight は独立で、合計が 100 になる保証はない。
/// 比率への正規化は集計時に grand_total で割って行う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightTotals {
    pub skills: u32,
    pub experience: u32,
    pub education: u32,
    pub culture: u32,
}

impl WeightTotals {
    pub fn from_config(config: &MatchingConfig) -> Self {
        let total = |category: Category| -> u32 {
            config
                .items(category)
                .iter()
                .map(|item| u32::from(item.weight))
                .sum()
        };

        Self {
            skills: total(Category::Skills),
            experience: total(Category::Experience),
            education: total(Category::Education),
            culture: total(Category::Culture),
        }
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Skills => self.skills,
            Category::Experience => self.experience,
            Category::Education => self.education,
            Category::Culture => self.culture,
        }
    }

    pub fn grand_total(&self) -> u32 {
        self.skills + self.experience + self.education + self.culture
    }

    /// カテゴリの重みシェア（0.0〜1.0）。grand_total が 0 の場合は 0.0。
    pub fn share(&self, category: Category) -> f64 {
        let grand = self.grand_total();
        if grand == 0 {
            return 0.0;
        }
        f64::from(self.get(category)) / f64::from(grand)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn totals_match_seed_item_sums() {
        let config = MatchingConfig::seed();
        let totals = WeightTotals::from_config(&config);

        assert_eq!(totals.skills, 90 + 85 + 70 + 50 + 45);
        assert_eq!(totals.experience, 80 + 60 + 40);
        assert_eq!(totals.education, 50 + 45 + 30);
        assert_eq!(totals.culture, 75 + 65 + 50 + 70);
        assert_eq!(
            totals.grand_total(),
            totals.skills + totals.experience + totals.education + totals.culture
        );
    }

    #[test]
    fn shares_sum_to_one_for_nonzero_config() {
        let totals = WeightTotals::from_config(&MatchingConfig::seed());
        let sum: f64 = Category::iter().map(|c| totals.share(c)).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_weight_config_has_zero_shares() {
        let mut config = MatchingConfig::seed();
        for category in Category::iter() {
            let ids: Vec<String> = config
                .items(category)
                .iter()
                .map(|i| i.id.clone())
                .collect();
            for id in ids {
                config.set_weight(category, &id, 0).unwrap();
            }
        }

        let totals = WeightTotals::from_config(&config);
        assert_eq!(totals.grand_total(), 0);
        assert_eq!(totals.share(Category::Skills), 0.0);
    }
}
