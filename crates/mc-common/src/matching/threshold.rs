/// 合格判定。境界値（score == threshold）は合格。
/// 判定は表示上の色分けにのみ使われ、後続処理をゲートしない。
pub fn meets_threshold(score: u8, threshold: u8) -> bool {
    score >= threshold
}

pub fn threshold_status(score: u8, threshold: u8) -> &'static str {
    if meets_threshold(score, threshold) {
        "PASS"
    } else {
        "MISS"
    }
}

/// 表示用パーセント文字列
pub fn format_percent(value: u8) -> String {
    format!("{value}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_equality_passes() {
        assert!(meets_threshold(75, 75));
        assert!(meets_threshold(76, 75));
        assert!(!meets_threshold(74, 75));
    }

    #[test]
    fn zero_threshold_always_passes() {
        assert!(meets_threshold(0, 0));
        assert!(meets_threshold(100, 0));
    }

    #[test]
    fn status_mirrors_threshold_check() {
        assert_eq!(threshold_status(80, 75), "PASS");
        assert_eq!(threshold_status(74, 75), "MISS");
        assert_eq!(threshold_status(75, 75), "PASS");
    }

    #[test]
    fn formats_percent_for_display() {
        assert_eq!(format_percent(0), "0%");
        assert_eq!(format_percent(83), "83%");
        assert_eq!(format_percent(100), "100%");
    }
}
