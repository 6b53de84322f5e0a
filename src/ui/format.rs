/// Inserts `,` every three digits: `6800000` → `6,800,000`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_yen(price: u64) -> String {
    format!("¥{}", group_thousands(price))
}

pub fn format_usd(price: u64) -> String {
    format!("${}", group_thousands(price))
}

pub fn format_mileage(km: u32) -> String {
    format!("{} km", group_thousands(u64::from(km)))
}

/// Five-star bar for a 0-5 score, rounded to the nearest star.
pub fn score_stars(score: f32) -> String {
    let filled = score.clamp(0.0, 5.0).round() as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12_500_000), "12,500,000");
    }

    #[test]
    fn currency_and_distance() {
        assert_eq!(format_yen(6_800_000), "¥6,800,000");
        assert_eq!(format_usd(45_600), "$45,600");
        assert_eq!(format_mileage(2000), "2,000 km");
    }

    #[test]
    fn stars_round_and_clamp() {
        assert_eq!(score_stars(4.5), "★★★★★");
        assert_eq!(score_stars(4.4), "★★★★☆");
        assert_eq!(score_stars(-1.0), "☆☆☆☆☆");
    }
}
