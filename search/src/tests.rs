use super::*;
use common::{ability, element, ids, names, pokemon, seeded_index, starters};
use pokedex_core::types::{Ability, CollectionId, Element, Pokemon, RebuildPolicy};
use std::sync::Arc;

mod common {
    use super::*;
    use pokedex_core::types::{Color, Name, RecordId};
    use std::time::{Duration, SystemTime};

    fn at() -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)
    }

    pub(super) fn pokemon(id: u64, name: &str) -> Pokemon {
        Pokemon {
            id: RecordId::new(id),
            name: Name::try_new(name).unwrap(),
            image_url: String::new(),
            hp: 40,
            element_id: RecordId::new(1),
            created_at: at(),
            updated_at: at(),
        }
    }

    pub(super) fn element(id: u64, name: &str) -> Element {
        Element {
            id: RecordId::new(id),
            name: Name::try_new(name).unwrap(),
            color: Color::try_new("#EE8130").unwrap(),
            created_at: at(),
            updated_at: at(),
        }
    }

    pub(super) fn ability(id: u64, name: &str) -> Ability {
        Ability {
            id: RecordId::new(id),
            name: Name::try_new(name).unwrap(),
            description: String::new(),
            power: 10,
            pokemon_id: RecordId::new(1),
            created_at: at(),
            updated_at: at(),
        }
    }

    /// Pikachu, Pidgey, Charizard in that order.
    pub(super) fn starters() -> Vec<Pokemon> {
        vec![
            pokemon(1, "Pikachu"),
            pokemon(2, "Pidgey"),
            pokemon(3, "Charizard"),
        ]
    }

    pub(super) fn seeded_index() -> SearchIndex {
        let mut index = SearchIndex::default();
        index.rebuild(&starters());
        index.rebuild(&[element(1, "Fire"), element(2, "Flying"), element(3, "Water")]);
        index.rebuild(&[ability(1, "Static"), ability(2, "Solar Power")]);
        index
    }

    pub(super) fn ids<R: pokedex_core::types::Record>(items: &[Arc<R>]) -> Vec<u64> {
        items.iter().map(|r| r.id().into_inner()).collect()
    }

    pub(super) fn names<R: pokedex_core::types::Record>(items: &[Arc<R>]) -> Vec<String> {
        items.iter().map(|r| r.name().to_string()).collect()
    }
}

mod rebuild {
    use super::*;

    #[test]
    fn test_rebuild_indexes_in_source_order() {
        let mut index = SearchIndex::default();

        index.rebuild(&starters());

        assert_eq!(ids(index.search::<Pokemon>("pi")), [1, 2]);
        assert_eq!(ids(index.search::<Pokemon>("pik")), [1]);
    }

    #[test]
    fn test_rebuild_drops_removed_items() {
        let mut index = SearchIndex::default();
        let mut items = starters();
        index.rebuild(&items);

        items.retain(|p| p.id.into_inner() != 2);
        index.rebuild(&items);

        assert_eq!(ids(index.search::<Pokemon>("pi")), [1]);
        assert!(index.search::<Pokemon>("pid").is_empty());
    }

    #[test]
    fn test_rebuild_picks_up_renames() {
        let mut index = SearchIndex::default();
        let mut items = starters();
        index.rebuild(&items);

        items[0] = pokemon(1, "Raichu");
        index.rebuild(&items);

        assert_eq!(ids(index.search::<Pokemon>("pi")), [2]);
        assert_eq!(ids(index.search::<Pokemon>("rai")), [1]);
    }

    #[test]
    fn test_rebuild_leaves_other_collections_alone() {
        let mut index = seeded_index();
        let elements_stamp = index.stamp(CollectionId::Elements);
        let elements_ptr = index.binding::<Element>().items()[0].clone();

        index.rebuild(&[pokemon(9, "Mew")]);

        assert_eq!(index.stamp(CollectionId::Elements), elements_stamp);
        assert!(Arc::ptr_eq(
            &index.binding::<Element>().items()[0],
            &elements_ptr
        ));
        assert_eq!(ids(index.search::<Element>("f")), [1, 2]);
    }

    #[test]
    fn test_rebuild_empty_collection() {
        let mut index = seeded_index();

        index.rebuild::<Ability>(&[]);

        assert!(index.binding::<Ability>().items().is_empty());
        assert!(index.binding::<Ability>().trie().is_empty());
        assert!(index.is_fresh());
    }
}

mod sync {
    use super::*;
    use std::time::{Duration, SystemTime};

    #[test]
    fn test_sync_first_time_rebuilds() {
        let mut index = SearchIndex::default();

        assert!(index.sync(&starters()));
        assert_eq!(ids(index.search::<Pokemon>("char")), [3]);
    }

    #[test]
    fn test_sync_skips_unchanged_content() {
        let mut index = SearchIndex::default();
        index.sync(&starters());
        let before = index.stamp(CollectionId::Pokemon);

        assert!(!index.sync(&starters()));
        assert_eq!(index.stamp(CollectionId::Pokemon), before);
    }

    #[test]
    fn test_sync_detects_payload_edit() {
        let mut index = SearchIndex::default();
        let mut items = starters();
        index.sync(&items);

        items[2].hp = 78;

        assert!(index.sync(&items));
        assert_eq!(index.binding::<Pokemon>().items()[2].hp, 78);
    }

    #[test]
    fn test_sync_detects_reorder() {
        let mut index = SearchIndex::default();
        let mut items = starters();
        index.sync(&items);

        items.swap(0, 1);

        assert!(index.sync(&items));
        assert_eq!(ids(index.search::<Pokemon>("pi")), [2, 1]);
    }

    #[test]
    fn test_sync_after_invalidate_with_same_content_rebuilds() {
        let mut index = seeded_index();
        index.invalidate(CollectionId::Pokemon);

        assert!(index.sync(&starters()));
        assert!(index.is_fresh());
    }

    #[test]
    fn test_sync_always_policy() {
        let mut index = SearchIndex::new(SearchConfig {
            rebuild_policy: RebuildPolicy::Always,
        });
        index.sync(&starters());

        assert!(index.sync(&starters()));
    }

    #[test]
    fn test_sync_unstampable_collection_always_rebuilds() {
        let mut index = SearchIndex::default();
        let mut items = starters();
        items[0].created_at = SystemTime::UNIX_EPOCH - Duration::from_secs(1);

        assert!(index.sync(&items));
        assert!(index.stamp(CollectionId::Pokemon).is_none());
        assert!(index.sync(&items));
        assert_eq!(ids(index.search::<Pokemon>("pi")), [1, 2]);
    }
}

mod state {
    use super::*;

    #[test]
    fn test_new_index_is_stale() {
        let index = SearchIndex::default();

        assert_eq!(index.state(), IndexState::Stale);
        assert_eq!(index.stale_collections(), CollectionId::ALL.to_vec());
    }

    #[test]
    fn test_fresh_after_all_rebuilt() {
        let index = seeded_index();

        assert_eq!(index.state(), IndexState::Fresh);
        assert!(index.stale_collections().is_empty());
    }

    #[test]
    fn test_invalidate_marks_only_one_collection() {
        let mut index = seeded_index();

        index.invalidate(CollectionId::Abilities);

        assert_eq!(index.state(), IndexState::Stale);
        assert_eq!(index.stale_collections(), [CollectionId::Abilities]);
    }

    #[test]
    fn test_stale_query_answers_from_last_build() {
        let mut index = seeded_index();
        index.invalidate(CollectionId::Pokemon);

        let results = index.query("pi", CollectionId::Pokemon);

        assert_eq!(ids(results.pokemon), [1, 2]);
    }

    #[test]
    fn test_reset_empties_everything() {
        let mut index = seeded_index();

        index.reset();

        assert_eq!(index.state(), IndexState::Stale);
        assert!(index.search::<Pokemon>("pi").is_empty());
        assert!(index.stamp(CollectionId::Elements).is_none());
        let results = index.query("", CollectionId::Pokemon);
        assert!(results.is_empty(CollectionId::Pokemon));
        assert!(results.is_empty(CollectionId::Elements));
        assert!(results.is_empty(CollectionId::Abilities));
    }
}

mod query {
    use super::*;

    #[test]
    fn test_query_empty_returns_everything() {
        let index = seeded_index();

        for active in CollectionId::ALL {
            for raw in ["", "   ", "\t\n"] {
                let results = index.query(raw, active);
                assert_eq!(ids(results.pokemon), [1, 2, 3]);
                assert_eq!(ids(results.elements), [1, 2, 3]);
                assert_eq!(ids(results.abilities), [1, 2]);
            }
        }
    }

    #[test]
    fn test_query_filters_only_active_collection() {
        let index = seeded_index();

        let results = index.query("f", CollectionId::Elements);

        assert_eq!(names(results.elements), ["Fire", "Flying"]);
        assert_eq!(results.len(CollectionId::Pokemon), 3);
        assert_eq!(results.len(CollectionId::Abilities), 2);
    }

    #[test]
    fn test_query_trims_and_ignores_case() {
        let index = seeded_index();

        let results = index.query("  SOLAR ", CollectionId::Abilities);

        assert_eq!(names(results.abilities), ["Solar Power"]);
    }

    #[test]
    fn test_query_no_match_is_empty() {
        let index = seeded_index();

        let results = index.query("zzz", CollectionId::Pokemon);

        assert!(results.is_empty(CollectionId::Pokemon));
        assert_eq!(results.len(CollectionId::Elements), 3);
    }

    #[test]
    fn test_query_prefix_spanning_words() {
        let index = seeded_index();

        let results = index.query("solar p", CollectionId::Abilities);

        assert_eq!(ids(results.abilities), [2]);
    }

    #[test]
    fn test_query_parse() {
        assert_eq!(SearchQuery::parse("  "), SearchQuery::All);
        assert_eq!(
            SearchQuery::from(" Pi "),
            SearchQuery::Prefix("Pi".to_string())
        );
    }
}

mod catalog {
    use super::*;
    use pokedex_core::catalog::Catalog;
    use std::time::{Duration, SystemTime};

    fn now() -> SystemTime {
        SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000)
    }

    #[test]
    fn test_from_catalog_is_fresh() {
        let catalog = Catalog::seeded(now()).unwrap();

        let index = SearchIndex::from_catalog(&catalog, SearchConfig::default());

        assert!(index.is_fresh());
        let results = index.query("", CollectionId::Pokemon);
        assert_eq!(results.len(CollectionId::Pokemon), 10);
        assert_eq!(results.len(CollectionId::Elements), 12);
        assert_eq!(results.len(CollectionId::Abilities), 20);
    }

    #[test]
    fn test_sync_catalog_rebuilds_only_changed() {
        let mut catalog = Catalog::seeded(now()).unwrap();
        let mut index = SearchIndex::from_catalog(&catalog, SearchConfig::default());

        let static_id = catalog.find_by_name::<Ability>("Static").unwrap().id;
        catalog.delete::<Ability>(static_id).unwrap();

        assert_eq!(index.sync_catalog(&catalog), [CollectionId::Abilities]);
        assert!(index.sync_catalog(&catalog).is_empty());
        assert!(index.query("stat", CollectionId::Abilities).is_empty(CollectionId::Abilities));
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn name_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z][A-Za-z ]{0,11}"
    }

    proptest! {
        #[test]
        fn every_prefix_of_a_name_finds_it(
            names in prop::collection::vec(name_strategy(), 1..20)
        ) {
            let items: Vec<Pokemon> = names
                .iter()
                .enumerate()
                .map(|(i, n)| pokemon(i as u64 + 1, n))
                .collect();
            let mut index = SearchIndex::default();
            index.rebuild(&items);

            for item in &items {
                let normalized = normalize(item.name.as_str());
                for (end, _) in normalized.char_indices().skip(1).chain([(normalized.len(), ' ')]) {
                    let prefix = &normalized[..end];
                    let found = index.search::<Pokemon>(prefix);
                    prop_assert!(found.iter().any(|p| p.id == item.id));
                }
            }
        }

        #[test]
        fn search_results_keep_source_order(
            names in prop::collection::vec(name_strategy(), 1..20)
        ) {
            let items: Vec<Pokemon> = names
                .iter()
                .enumerate()
                .map(|(i, n)| pokemon(i as u64 + 1, n))
                .collect();
            let mut index = SearchIndex::default();
            index.rebuild(&items);

            let first = normalize(items[0].name.as_str());
            let prefix: String = first.chars().take(1).collect();
            let found = ids(index.search::<Pokemon>(&prefix));
            let mut sorted = found.clone();
            sorted.sort_unstable();
            prop_assert_eq!(found, sorted);
        }

        #[test]
        fn case_of_the_prefix_does_not_matter(prefix in "[a-z]{1,3}") {
            let index = seeded_index();

            let lower = ids(index.search::<Pokemon>(&prefix));
            let upper = ids(index.search::<Pokemon>(&prefix.to_uppercase()));
            prop_assert_eq!(lower, upper);
        }

        #[test]
        fn whitespace_queries_never_filter(raw in "[ \t\n]{0,4}") {
            let index = seeded_index();

            for active in CollectionId::ALL {
                let results = index.query(&raw, active);
                prop_assert_eq!(results.len(CollectionId::Pokemon), 3);
                prop_assert_eq!(results.len(CollectionId::Elements), 3);
                prop_assert_eq!(results.len(CollectionId::Abilities), 2);
            }
        }
    }
}
