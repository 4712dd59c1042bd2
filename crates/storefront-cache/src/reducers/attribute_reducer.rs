//! Attribute Reducer
//!
//! Top level attributes. Term lists are fetched per attribute and merged into
//! the attribute record.

use std::sync::Arc;

use super::collection_reducer::CollectionReducer;
use crate::actions::{action_type, Action};
use crate::domain_models::Attribute;
use crate::state::CollectionState;

pub fn reducer() -> CollectionReducer<Attribute, Action> {
    CollectionReducer::by_id(action_type::ATTRIBUTES, Attribute::id).with_extension(merge_terms)
}

fn merge_terms(
    state: &CollectionState<Attribute>,
    action: &Action,
) -> Option<CollectionState<Attribute>> {
    let Action::AttributeTerms(loaded) = action else {
        return None;
    };

    let next = state.with_entity_updated(&loaded.attribute, |attribute| {
        attribute.with_terms(loaded.terms.clone())
    });
    if next.is_none() {
        log::warn!(
            "Terms for attribute {} ignored: attribute not loaded",
            loaded.attribute
        );
    }
    next
}

pub fn reduce(
    state: &Arc<CollectionState<Attribute>>,
    action: &Action,
) -> Arc<CollectionState<Attribute>> {
    reducer().reduce(state, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Fetch, TermsLoaded};
    use crate::domain_models::{AttributeTerm, EntityKey};
    use crate::selectors::item_by_id;

    fn term(id: u64, name: &str) -> AttributeTerm {
        AttributeTerm {
            id,
            slug: name.to_lowercase(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_merge_terms() {
        let state = reduce(
            &Arc::new(CollectionState::default()),
            &Action::from(Fetch::received(
                action_type::ATTRIBUTES,
                vec![Attribute::new(1, "color", "Color"), Attribute::new(2, "size", "Size")],
            )),
        );

        let next = reduce(
            &state,
            &Action::AttributeTerms(TermsLoaded {
                attribute: EntityKey::Id(2),
                terms: vec![term(20, "S"), term(21, "M")],
            }),
        );

        let size = item_by_id(&next, &EntityKey::Id(2)).unwrap();
        assert_eq!(size.terms.len(), 2);
        assert_eq!(size.name, "Size");
        let color = item_by_id(&next, &EntityKey::Id(1)).unwrap();
        assert!(color.terms.is_empty());
    }

    #[test]
    fn test_nested_product_attributes_do_not_reach_top_level() {
        let state = Arc::new(CollectionState::default());
        let next = reduce(
            &state,
            &Action::from(Fetch::received(
                action_type::PRODUCT_ATTRIBUTES,
                vec![Attribute::new(1, "color", "Color")],
            )),
        );
        assert!(Arc::ptr_eq(&state, &next));
    }
}
