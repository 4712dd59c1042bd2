//! Selector rebasing
//!
//! Lift a selector written for a child slice onto a parent state by
//! supplying a projection from parent to child. Wrapped selectors are
//! selectors themselves, so rebasing composes:
//!
//! ```
//! use storefront_cache::selectors::{all_items, wrap};
//! use storefront_cache::state::{CollectionState, ProductState, RootState};
//! use storefront_cache::domain_models::Category;
//!
//! fn categories(products: &ProductState) -> &CollectionState<Category> {
//!     &products.categories
//! }
//!
//! fn products(root: &RootState) -> &ProductState {
//!     &root.products
//! }
//!
//! let select = wrap(wrap(all_items::<Category>, categories), products);
//! assert!(select(&RootState::default()).is_empty());
//! ```

/// Rebase a selector without arguments
pub fn wrap<P, S, R>(
    selector: impl Fn(&S) -> R,
    projection: impl Fn(&P) -> &S,
) -> impl Fn(&P) -> R
where
    P: ?Sized,
    S: ?Sized,
{
    move |parent: &P| selector(projection(parent))
}

/// Rebase a selector taking one argument (a key, a filter, ...)
pub fn wrap_with<P, S, A, R>(
    selector: impl Fn(&S, &A) -> R,
    projection: impl Fn(&P) -> &S,
) -> impl Fn(&P, &A) -> R
where
    P: ?Sized,
    S: ?Sized,
    A: ?Sized,
{
    move |parent: &P, arg: &A| selector(projection(parent), arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf {
        values: Vec<u32>,
    }

    struct Branch {
        leaf: Leaf,
    }

    struct Root {
        branch: Branch,
    }

    fn sum(leaf: &Leaf) -> u32 {
        leaf.values.iter().sum()
    }

    fn nth(leaf: &Leaf, index: &usize) -> Option<u32> {
        leaf.values.get(*index).copied()
    }

    fn leaf_of(branch: &Branch) -> &Leaf {
        &branch.leaf
    }

    fn branch_of(root: &Root) -> &Branch {
        &root.branch
    }

    fn root() -> Root {
        Root {
            branch: Branch {
                leaf: Leaf {
                    values: vec![3, 4, 5],
                },
            },
        }
    }

    #[test]
    fn test_wrap_projects_before_selecting() {
        let select = wrap(sum, leaf_of);
        assert_eq!(select(&root().branch), 12);
    }

    #[test]
    fn test_wrap_composes() {
        let root = root();
        let twice = wrap(wrap(sum, leaf_of), branch_of);
        let combined = wrap(sum, |r: &Root| leaf_of(branch_of(r)));
        assert_eq!(twice(&root), combined(&root));
        assert_eq!(twice(&root), 12);
    }

    #[test]
    fn test_wrap_with_passes_argument() {
        let root = root();
        let twice = wrap_with(wrap_with(nth, leaf_of), branch_of);
        let combined = wrap_with(nth, |r: &Root| leaf_of(branch_of(r)));
        for index in 0..4 {
            assert_eq!(twice(&root, &index), combined(&root, &index));
        }
        assert_eq!(twice(&root, &1), Some(4));
        assert_eq!(twice(&root, &9), None);
    }
}
