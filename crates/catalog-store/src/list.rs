//! Pure operations on the ordered product list.
//!
//! The list is newest-first. Every mutation returns a new list; the caller
//! decides when to persist it.

use catalog_types::{Product, ProductId};

/// Prepend `product` (newest-first order).
pub fn add(list: &[Product], product: Product) -> Vec<Product> {
    let mut next = Vec::with_capacity(list.len() + 1);
    next.push(product);
    next.extend_from_slice(list);
    next
}

/// Drop the entry with `id`. Unknown ids leave the list unchanged.
pub fn remove(list: &[Product], id: &ProductId) -> Vec<Product> {
    list.iter().filter(|p| &p.id != id).cloned().collect()
}

pub fn clear() -> Vec<Product> {
    Vec::new()
}

pub fn find<'a>(list: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    list.iter().find(|p| &p.id == id)
}

/// Resolve an id or a unique id prefix.
pub fn find_by_prefix<'a>(list: &'a [Product], prefix: &str) -> Option<&'a Product> {
    if let Some(exact) = list.iter().find(|p| p.id.as_str() == prefix) {
        return Some(exact);
    }
    if prefix.is_empty() {
        return None;
    }

    let mut matches = list.iter().filter(|p| p.id.as_str().starts_with(prefix));
    match (matches.next(), matches.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}

/// Case-insensitive substring filter on product names.
///
/// The query is trimmed first; an empty query keeps every product.
pub fn filter_by_name<'a>(list: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return list.iter().collect();
    }
    list.iter().filter(|p| p.name_contains(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: 1.0,
            image: None,
            created_at: 0,
        }
    }

    fn ids(list: &[Product]) -> Vec<&str> {
        list.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_add_prepends() {
        let list = vec![product("old", "Old")];
        let next = add(&list, product("new", "New"));
        assert_eq!(ids(&next), vec!["new", "old"]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_drops_only_matching_entry() {
        let list = vec![product("a", "A"), product("b", "B"), product("c", "C")];
        let next = remove(&list, &ProductId::new("b"));

        assert_eq!(next.len(), list.len() - 1);
        assert_eq!(ids(&next), vec!["a", "c"]);
        assert!(find(&next, &ProductId::new("b")).is_none());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let list = vec![product("a", "A"), product("b", "B")];
        let next = remove(&list, &ProductId::new("zzz"));
        assert_eq!(next, list);
    }

    #[test]
    fn test_clear_is_empty() {
        assert!(clear().is_empty());
    }

    #[test]
    fn test_filter_by_name() {
        let list = vec![product("1", "Apple Pie"), product("2", "apricot")];

        assert_eq!(filter_by_name(&list, "ap").len(), 2);
        assert_eq!(filter_by_name(&list, "AP").len(), 2);
        assert_eq!(filter_by_name(&list, "XYZ").len(), 0);
        assert_eq!(filter_by_name(&list, "").len(), 2);
        assert_eq!(filter_by_name(&list, "  pie ").len(), 1);
    }

    #[test]
    fn test_filter_preserves_order() {
        let list = vec![product("1", "Bread"), product("2", "Brie"), product("3", "Jam")];
        let names: Vec<&str> = filter_by_name(&list, "br")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bread", "Brie"]);
    }

    #[test]
    fn test_find_by_prefix() {
        let list = vec![product("abc-1", "A"), product("abd-2", "B")];

        assert_eq!(find_by_prefix(&list, "abc").unwrap().name, "A");
        assert_eq!(find_by_prefix(&list, "abd-2").unwrap().name, "B");
        assert!(find_by_prefix(&list, "ab").is_none());
        assert!(find_by_prefix(&list, "").is_none());
        assert!(find_by_prefix(&list, "x").is_none());
    }
}
