use std::fmt;
use std::str::FromStr;

/// The five fixed disaster classifications used for filtering and coloring.
///
/// Declaration order is legend order.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Category {
    WinterStormFreeze,
    DroughtWildfire,
    Flooding,
    TropicalCyclone,
    SevereStorm,
}

impl Category {
    /// All categories in legend order.
    pub const ALL: [Category; 5] = [
        Category::WinterStormFreeze,
        Category::DroughtWildfire,
        Category::Flooding,
        Category::TropicalCyclone,
        Category::SevereStorm,
    ];

    /// Identifier used in the CSV `category` column and as a CSS class.
    pub fn id(&self) -> &'static str {
        match self {
            Category::WinterStormFreeze => "winter-storm-freeze",
            Category::DroughtWildfire => "drought-wildfire",
            Category::Flooding => "flooding",
            Category::TropicalCyclone => "tropical-cyclone",
            Category::SevereStorm => "severe-storm",
        }
    }

    /// Human readable legend title.
    pub fn title(&self) -> &'static str {
        match self {
            Category::WinterStormFreeze => "Winter storm, freezing",
            Category::DroughtWildfire => "Drought and wildfire",
            Category::Flooding => "Flooding",
            Category::TropicalCyclone => "Tropical cyclones",
            Category::SevereStorm => "Severe storms",
        }
    }

    /// Fill color of the category's legend circle and marks.
    pub fn color(&self) -> &'static str {
        match self {
            Category::WinterStormFreeze => "#ccc",
            Category::DroughtWildfire => "#ffffd9",
            Category::Flooding => "#41b6c4",
            Category::TropicalCyclone => "#081d58",
            Category::SevereStorm => "#c7e9b4",
        }
    }

    /// Category at a legend position, if the index resolves.
    pub fn from_index(index: usize) -> Option<Category> {
        Category::ALL.get(index).copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .iter()
            .find(|c| c.id() == s)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("unknown disaster category '{}'", s))
    }
}

#[cfg(test)]
mod test {
    use super::Category;

    #[test]
    fn test_ids_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.id().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category_is_an_error() {
        let err = "earthquake".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("earthquake"));
    }

    #[test]
    fn test_legend_lookup() {
        assert_eq!(Category::from_index(3), Some(Category::TropicalCyclone));
        assert_eq!(Category::from_index(5), None);
    }
}
