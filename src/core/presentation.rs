//! Display helpers for the list and detail views.

/// Badge colour used for unknown types
pub const FALLBACK_TYPE_COLOR: &str = "#95A5A6";

/// Highest base stat any creature can have; stat bars are scaled to it
pub const MAX_BASE_STAT: u32 = 255;

pub fn type_color(type_name: &str) -> &'static str {
    match type_name {
        "fire" => "#FF5733",
        "water" => "#3498DB",
        "grass" => "#27AE60",
        "electric" => "#F1C40F",
        "psychic" => "#E91E63",
        "ice" => "#85C1E9",
        "dragon" => "#8E44AD",
        "dark" => "#34495E",
        "fairy" => "#FF69B4",
        "fighting" => "#E74C3C",
        "poison" => "#9B59B6",
        "ground" => "#D4AC0D",
        "flying" => "#AED6F1",
        "bug" => "#58D68D",
        "rock" => "#85929E",
        "ghost" => "#BB8FCE",
        "steel" => "#85929E",
        "normal" => "#95A5A6",
        _ => FALLBACK_TYPE_COLOR,
    }
}

/// Upper-cases the first character, leaves the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `special-attack` -> `Special Attack`
pub fn format_stat_name(stat_name: &str) -> String {
    stat_name
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `25` -> `#025`
pub fn dex_number(id: u32) -> String {
    format!("#{:03}", id)
}

/// Upstream heights are in decimetres
pub fn height_meters(decimetres: u32) -> String {
    format!("{:.1} m", decimetres as f64 / 10.0)
}

/// Upstream weights are in hectograms
pub fn weight_kilograms(hectograms: u32) -> String {
    format!("{:.1} kg", hectograms as f64 / 10.0)
}

/// Width of a stat bar as a percentage of [`MAX_BASE_STAT`]
pub fn stat_bar_percent(base_stat: u32) -> f64 {
    (base_stat as f64 / MAX_BASE_STAT as f64 * 100.0).min(100.0)
}

pub fn stat_tier_color(base_stat: u32) -> &'static str {
    if base_stat > 100 {
        "#10b981"
    } else if base_stat > 60 {
        "#f59e0b"
    } else {
        "#ef4444"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_uses_fallback() {
        assert_eq!(type_color("fire"), "#FF5733");
        assert_eq!(type_color("shadow"), FALLBACK_TYPE_COLOR);
    }

    #[test]
    fn test_stat_bar_is_capped() {
        assert_eq!(stat_bar_percent(255), 100.0);
        assert_eq!(stat_bar_percent(300), 100.0);
        assert_eq!(stat_bar_percent(0), 0.0);
    }
}
