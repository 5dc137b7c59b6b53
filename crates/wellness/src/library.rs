//! Resource library.

use content::{search_records, QueryParams, QueryResult, Resource};

use crate::error::{WellnessError, WellnessResult};

/// How many related resources the detail view shows.
pub const RELATED_LIMIT: usize = 3;

/// Read-only collection of self-help resources.
#[derive(Debug, Clone, Default)]
pub struct ResourceLibrary {
    resources: Vec<Resource>,
}

impl ResourceLibrary {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn get(&self, id: &str) -> WellnessResult<&Resource> {
        self.resources
            .iter()
            .find(|resource| resource.id == id)
            .ok_or_else(|| WellnessError::NotFound(format!("resource {id}")))
    }

    pub fn query_resources(&self, params: &QueryParams) -> QueryResult<&Resource> {
        search_records(&self.resources, params)
    }

    /// Other resources in the same category, in catalogue order.
    pub fn related(&self, id: &str, limit: usize) -> WellnessResult<Vec<&Resource>> {
        let selected = self.get(id)?;
        Ok(self
            .resources
            .iter()
            .filter(|resource| {
                resource.id != selected.id && resource.category == selected.category
            })
            .take(limit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use content::SortMode;

    fn library() -> ResourceLibrary {
        ResourceLibrary::new(fixtures::resources(fixtures::reference_now()))
    }

    fn ids(resources: &[&Resource]) -> Vec<String> {
        resources.iter().map(|resource| resource.id.clone()).collect()
    }

    #[test]
    fn filters_by_category() {
        let library = library();
        let result =
            library.query_resources(&QueryParams::new("", "anxiety", SortMode::Unsorted));
        assert_eq!(ids(&result.items), vec!["1", "8"]);
    }

    #[test]
    fn searches_description_and_tags() {
        let library = library();
        let result = library.query_resources(&QueryParams::new("CBT", "all", SortMode::Unsorted));
        assert_eq!(ids(&result.items), vec!["7"]);

        let result = library.query_resources(&QueryParams::new(
            "thought patterns",
            "all",
            SortMode::Unsorted,
        ));
        assert_eq!(ids(&result.items), vec!["7"]);
    }

    #[test]
    fn popular_orders_by_rating() {
        let library = library();
        let result = library.query_resources(&QueryParams::new("", "all", SortMode::Popular));
        for pair in result.items.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
        // 3 and 8 tie at 4.9 and keep catalogue order.
        assert_eq!(ids(&result.items[..2]), vec!["3", "8"]);
    }

    #[test]
    fn get_reports_missing() {
        let library = library();
        assert_eq!(library.get("4").unwrap().title, "Sleep Hygiene Checklist");
        assert!(matches!(library.get("99"), Err(WellnessError::NotFound(_))));
    }

    #[test]
    fn related_shares_category_and_skips_self() {
        let library = library();
        let related = library.related("1", RELATED_LIMIT).unwrap();
        assert_eq!(ids(&related), vec!["8"]);

        let related = library.related("8", RELATED_LIMIT).unwrap();
        assert_eq!(ids(&related), vec!["1"]);
    }

    #[test]
    fn related_respects_limit() {
        let template = library().get("1").unwrap().clone();
        let library = ResourceLibrary::new(
            ["a", "b", "c", "d", "e"]
                .into_iter()
                .map(|id| Resource {
                    id: id.to_string(),
                    ..template.clone()
                })
                .collect(),
        );

        let related = library.related("b", RELATED_LIMIT).unwrap();
        assert_eq!(ids(&related), vec!["a", "c", "d"]);
        assert!(library.related("b", 0).unwrap().is_empty());
        assert!(matches!(library.related("z", 3), Err(WellnessError::NotFound(_))));
    }
}
