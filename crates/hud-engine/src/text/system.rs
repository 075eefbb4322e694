/// Common install locations of a sans-serif font, tried in order.
pub const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// First entry of [`SYSTEM_FONT_CANDIDATES`] for which `exists` holds.
pub fn find_system_font(exists: impl Fn(&str) -> bool) -> Option<&'static str> {
    SYSTEM_FONT_CANDIDATES.iter().copied().find(|&p| exists(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_existing_candidate_wins() {
        let third = SYSTEM_FONT_CANDIDATES[2];
        let fourth = SYSTEM_FONT_CANDIDATES[3];
        assert_eq!(find_system_font(|p| p == third || p == fourth), Some(third));
    }

    #[test]
    fn none_when_nothing_is_installed() {
        assert_eq!(find_system_font(|_| false), None);
    }
}
