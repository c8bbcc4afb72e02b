use rand::seq::SliceRandom;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::insights::domain::RecommendationPolicy;

// AvailableSamplePolicy recommends a random sample of the books that can be
// borrowed right now; with limit or fewer candidates the insertion order is
// kept as-is.
#[derive(Debug, Default)]
pub(crate) struct AvailableSamplePolicy {}

impl RecommendationPolicy for AvailableSamplePolicy {
    fn select(&self, books: &[BookEntity], limit: usize) -> Vec<BookEntity> {
        let available: Vec<&BookEntity> = books.iter().filter(|b| b.is_available()).collect();
        if available.len() <= limit {
            return available.into_iter().cloned().collect();
        }
        available.choose_multiple(&mut rand::thread_rng(), limit)
            .map(|b| (*b).clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::insights::domain::RecommendationPolicy;
    use crate::insights::domain::policy::AvailableSamplePolicy;

    fn sample_books(total: usize, borrowed: usize) -> Vec<BookEntity> {
        (0..total).map(|i| {
            let mut book = BookEntity::new(format!("title {}", i).as_str(), "author", None);
            if i < borrowed {
                book.lend_to("patron1");
            }
            book
        }).collect()
    }

    #[tokio::test]
    async fn test_should_select_only_available_books() {
        let policy = AvailableSamplePolicy::default();
        let books = sample_books(10, 4);
        let selected = policy.select(&books, 10);
        assert_eq!(6, selected.len());
        assert!(selected.iter().all(|b| !b.is_borrowed));
    }

    #[tokio::test]
    async fn test_should_cap_selection_at_limit() {
        let policy = AvailableSamplePolicy::default();
        let books = sample_books(10, 0);
        let selected = policy.select(&books, 3);
        assert_eq!(3, selected.len());
        assert!(selected.iter().all(|s| books.iter().any(|b| b.book_id == s.book_id)));
    }

    #[tokio::test]
    async fn test_should_select_nothing_from_empty_catalog() {
        let policy = AvailableSamplePolicy::default();
        let selected = policy.select(&[], 5);
        assert!(selected.is_empty());
    }
}
