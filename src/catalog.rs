use crate::model::{Category, MenuItem};


// Category selector: the "All" chip or a single section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

// Read-only list of purchasable items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}


impl CategoryFilter {
    // Chips in the order the menu screen shows them
    pub fn chips() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn parse(label: &str) -> Option<CategoryFilter> {
        if label.trim().eq_ignore_ascii_case("all") {
            return Some(CategoryFilter::All);
        }
        Category::parse(label).map(CategoryFilter::Only)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}


#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: &str,
    description: &str,
    price: u32,
    image: &str,
    category: Category,
    available: bool,
    preparation_time_minutes: u32,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        image: image.to_string(),
        category,
        available,
        preparation_time_minutes,
    }
}


impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Catalog { items }
    }

    // The canteen's menu
    pub fn canteen() -> Self {
        Catalog::new(vec![
            item(
                "1",
                "Veg Biryani",
                "Aromatic basmati rice with mixed vegetables and spices",
                120,
                "https://images.pexels.com/photos/1893556/pexels-photo-1893556.jpeg",
                Category::MainCourse,
                true,
                20,
            ),
            item(
                "2",
                "Paneer Tikka",
                "Grilled cottage cheese with bell peppers and onions",
                150,
                "https://images.pexels.com/photos/4449068/pexels-photo-4449068.jpeg",
                Category::Starters,
                true,
                15,
            ),
            item(
                "3",
                "Cold Coffee",
                "Refreshing iced coffee with whipped cream",
                60,
                "https://images.pexels.com/photos/302899/pexels-photo-302899.jpeg",
                Category::Beverages,
                true,
                5,
            ),
            item(
                "4",
                "Chicken Burger",
                "Juicy chicken patty with fresh vegetables and cheese",
                180,
                "https://images.pexels.com/photos/1639557/pexels-photo-1639557.jpeg",
                Category::FastFood,
                true,
                12,
            ),
            item(
                "5",
                "Masala Dosa",
                "Crispy crepe filled with spiced potato mixture",
                80,
                "https://images.pexels.com/photos/5560763/pexels-photo-5560763.jpeg",
                Category::SouthIndian,
                false,
                10,
            ),
            item(
                "6",
                "Chocolate Shake",
                "Rich and creamy chocolate milkshake",
                90,
                "https://images.pexels.com/photos/103566/pexels-photo-103566.jpeg",
                Category::Beverages,
                true,
                3,
            ),
        ])
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn available(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|i| i.available)
    }

    /// Items whose name or description contains `query` (case-insensitive)
    /// and whose category passes `category`. Catalog order is preserved and
    /// an empty query matches everything.
    pub fn filter(&self, query: &str, category: CategoryFilter) -> Vec<&MenuItem> {
        let needle = query.to_lowercase();
        self.items
            .iter()
            .filter(|i| {
                let matches_search = i.name.to_lowercase().contains(&needle)
                    || i.description.to_lowercase().contains(&needle);
                matches_search && category.matches(i.category)
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::canteen()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn ids(items: Vec<&MenuItem>) -> Vec<&str> {
        items.into_iter().map(|i| i.id.as_str()).collect()
    }

    #[rstest]
    #[case("", CategoryFilter::All, vec!["1", "2", "3", "4", "5", "6"])]
    #[case("COFFEE", CategoryFilter::All, vec!["3"])]
    #[case("cream", CategoryFilter::All, vec!["3", "6"])]
    #[case("", CategoryFilter::Only(Category::Beverages), vec!["3", "6"])]
    #[case("shake", CategoryFilter::Only(Category::Beverages), vec!["6"])]
    #[case("rice", CategoryFilter::Only(Category::Beverages), vec![])]
    #[case("chicken", CategoryFilter::Only(Category::FastFood), vec!["4"])]
    fn filters_by_query_and_category(
        #[case] query: &str,
        #[case] category: CategoryFilter,
        #[case] expected: Vec<&str>,
    ) {
        let catalog = Catalog::canteen();
        assert_eq!(ids(catalog.filter(query, category)), expected);
    }

    #[test]
    fn description_matches_count() {
        let catalog = Catalog::canteen();
        // "spiced potato" only appears in the dosa description
        assert_eq!(ids(catalog.filter("Potato", CategoryFilter::All)), vec!["5"]);
    }

    #[test]
    fn chips_start_with_all() {
        let labels: Vec<_> = CategoryFilter::chips().iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["All", "Main Course", "Starters", "Beverages", "Fast Food", "South Indian"]
        );
        assert_eq!(CategoryFilter::parse("ALL"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("south indian"),
            Some(CategoryFilter::Only(Category::SouthIndian))
        );
    }

    #[test]
    fn dosa_is_out_of_stock() {
        let catalog = Catalog::canteen();
        assert!(!catalog.get("5").map(|i| i.available).unwrap_or(true));
        assert_eq!(catalog.available().count(), 5);
    }
}
