//! Chart colours.

/// Default 20-colour palette.
pub const DEFAULT_PALETTE: [&str; 20] = [
    "#3178c6", "#f1e05a", "#e34c26", "#563d7c", "#2b7489", "#178600", "#f34b7d", "#b07219",
    "#555555", "#438eff", "#00ADD8", "#89e051", "#4F5D95", "#dea584", "#ff6b6b", "#c6538c",
    "#3572A5", "#701516", "#DA5B0B", "#5e5086",
];

/// Fallback when a caller passes an empty palette.
pub(super) const NEUTRAL: &str = "#888888";

/// Returns the default palette as owned strings.
#[must_use]
pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect()
}

/// Colour for the datum at `index`; cycles when the palette is shorter.
#[must_use]
pub fn color_at(palette: &[String], index: usize) -> &str {
    if palette.is_empty() {
        return NEUTRAL;
    }
    &palette[index % palette.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_cycle() {
        let palette = default_palette();
        assert_eq!(color_at(&palette, 0), "#3178c6");
        assert_eq!(color_at(&palette, 20), "#3178c6");
        assert_eq!(color_at(&palette, 21), "#f1e05a");
    }

    #[test]
    fn empty_palette_is_neutral() {
        assert_eq!(color_at(&[], 3), NEUTRAL);
    }
}
