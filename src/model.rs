/// A bare catalog entry as seeded at startup
#[derive(Debug, Clone)]
pub struct VideoEntry {
    /// Catalog id; ids repeat in the seed data, nothing may key off them
    pub id: u32,
    /// Full YouTube watch URL
    pub url: String,
}

/// A catalog entry enriched with display metadata
#[derive(Debug, Clone)]
pub struct EnrichedVideo {
    /// Catalog id carried over from the entry
    pub id: u32,
    /// Full YouTube watch URL
    pub url: String,
    /// Extracted 11-character video id, when the URL yields one
    pub video_id: Option<String>,
    /// Resolved title, or the sentinel when the lookup failed
    pub title: String,
    /// Thumbnail location; derived from the video id, never from the network
    pub thumbnail: String,
    /// Channel name, when the resolver supplied one
    pub author: Option<String>,
}

/// Hover tooltip over a video title
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipState {
    /// Whether the tooltip is currently shown
    pub visible: bool,
    /// Title text under the pointer
    pub text: String,
    /// Pointer x position at hover time
    pub x: f32,
    /// Pointer y position at hover time
    pub y: f32,
}

/// Title shown for videos whose metadata lookup failed
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Static seed catalog shown on the wall
pub fn seed_catalog() -> Vec<VideoEntry> {
    const SEED: &[(u32, &str)] = &[
        (1, "https://www.youtube.com/watch?v=EfK0SURQ8X0"),
        (2, "https://www.youtube.com/watch?v=fZCe_JY8oUI"),
        (3, "https://www.youtube.com/watch?v=TUXh42V_ng4"),
        (4, "https://www.youtube.com/watch?v=wI136NFVhl8"),
        (5, "https://www.youtube.com/watch?v=QH44R1oOvOQ"),
        (5, "https://www.youtube.com/watch?v=bDfOdFg5G1U"),
        (5, "https://www.youtube.com/watch?v=22aj-5Pbev4"),
        (5, "https://www.youtube.com/watch?v=8eVXTyIZ1Hs"),
        (5, "https://www.youtube.com/watch?v=drtSveItdwg"),
        (5, "https://www.youtube.com/watch?v=kfOBoEsvbuI"),
    ];

    SEED.iter()
        .map(|&(id, url)| VideoEntry {
            id,
            url: url.to_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_has_ten_entries() {
        assert_eq!(seed_catalog().len(), 10);
    }

    #[test]
    fn seed_catalog_keeps_duplicate_ids() {
        let catalog = seed_catalog();
        let fives = catalog.iter().filter(|e| e.id == 5).count();
        assert_eq!(fives, 6);
    }
}
