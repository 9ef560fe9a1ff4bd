use crate::models::Restaurant;

/// Read-only restaurant catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    restaurants: Vec<Restaurant>,
}

impl Catalog {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    pub fn all(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn find(&self, id: i64) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    pub fn featured(&self) -> impl Iterator<Item = &Restaurant> {
        self.restaurants.iter().filter(|r| r.featured)
    }

    /// Name search and cuisine match, both case-insensitive. An empty search
    /// or a cuisine of "All" matches everything.
    pub fn search<'a>(
        &'a self,
        text: Option<&'a str>,
        cuisine: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Restaurant> {
        let needle = text.map(|t| t.trim().to_lowercase()).unwrap_or_default();
        let cuisine = cuisine
            .map(str::trim)
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all"));
        self.restaurants.iter().filter(move |r| {
            let matches_text = needle.is_empty() || r.name.to_lowercase().contains(&needle);
            let matches_cuisine = cuisine.is_none_or(|c| r.cuisine.eq_ignore_ascii_case(c));
            matches_text && matches_cuisine
        })
    }

    /// Cuisine filter options: "All" followed by each cuisine once, in catalog
    /// order.
    pub fn cuisines(&self) -> Vec<String> {
        let mut options = vec!["All".to_string()];
        for r in &self.restaurants {
            if !options.contains(&r.cuisine) {
                options.push(r.cuisine.clone());
            }
        }
        options
    }
}
