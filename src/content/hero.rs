//! Front-page hero arrangement.

use super::models::DisplayPost;

/// Categories featured in the hero, in display order.
pub const HERO_CATEGORIES: [&str; 6] = [
    "Politics",
    "Business",
    "Technology",
    "Health",
    "Sports",
    "Entertainment",
];

const PER_CATEGORY: usize = 2;
const MAX_HERO_ARTICLES: usize = 9;
const SIDE_ARTICLES: usize = 3;

/// Main story, a side column and a bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroLayout {
    pub main: DisplayPost,
    pub side: Vec<DisplayPost>,
    pub bottom: Vec<DisplayPost>,
}

impl HeroLayout {
    /// Take up to two articles per hero category (case-insensitive match),
    /// in category order, capped at nine.
    ///
    /// Returns `None` if no article belongs to a hero category.
    #[must_use]
    pub fn arrange(articles: &[DisplayPost]) -> Option<Self> {
        let mut picked: Vec<DisplayPost> = HERO_CATEGORIES
            .iter()
            .flat_map(|category| {
                articles
                    .iter()
                    .filter(move |a| a.category.eq_ignore_ascii_case(category))
                    .take(PER_CATEGORY)
            })
            .take(MAX_HERO_ARTICLES)
            .cloned()
            .collect();

        if picked.is_empty() {
            return None;
        }

        let main = picked.remove(0);
        let split = SIDE_ARTICLES.min(picked.len());
        let bottom = picked.split_off(split);

        Some(Self {
            main,
            side: picked,
            bottom,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: u64, category: &str) -> DisplayPost {
        DisplayPost {
            id,
            category: category.to_string(),
            ..DisplayPost::default()
        }
    }

    fn ids(posts: &[DisplayPost]) -> Vec<u64> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_arrange_orders_by_category() {
        let articles = vec![
            article(1, "Sports"),
            article(2, "business"),
            article(3, "Politics"),
            article(4, "Politics"),
            article(5, "Politics"),
            article(6, "Weather"),
        ];

        let hero = HeroLayout::arrange(&articles).unwrap();
        assert_eq!(hero.main.id, 3);
        assert_eq!(ids(&hero.side), vec![4, 2, 1]);
        assert!(hero.bottom.is_empty());
    }

    #[test]
    fn test_arrange_caps_at_nine() {
        let articles: Vec<DisplayPost> = HERO_CATEGORIES
            .iter()
            .enumerate()
            .flat_map(|(i, c)| (0..3).map(move |j| article((i * 10 + j) as u64, c)))
            .collect();

        let hero = HeroLayout::arrange(&articles).unwrap();
        assert_eq!(hero.side.len(), 3);
        assert_eq!(hero.bottom.len(), 5);
        assert_eq!(hero.main.id, 0);
        assert_eq!(ids(&hero.side), vec![1, 10, 11]);
    }

    #[test]
    fn test_arrange_without_matches() {
        assert!(HeroLayout::arrange(&[article(1, "Weather")]).is_none());
        assert!(HeroLayout::arrange(&[]).is_none());
    }
}
