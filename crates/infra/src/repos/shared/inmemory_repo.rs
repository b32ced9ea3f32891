use super::query_structs::ListQuery;
use concierge_domain::{Entity, ID};
use std::sync::Mutex;

/// Useful functions for creating inmemory repositories

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

pub fn find<T: Clone + Entity>(val_id: ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection.iter().find(|item| item.id() == val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(collection: &Mutex<Vec<T>>, mut compare: F) -> Vec<T> {
    let collection = collection.lock().unwrap();
    collection.iter().filter(|item| compare(item)).cloned().collect()
}

/// Entities ordered by id, paged by the query
pub fn find_page<T: Clone + Entity>(collection: &Mutex<Vec<T>>, query: ListQuery) -> Vec<T> {
    let mut items = find_by(collection, |_| true);
    items.sort_by_key(|item| item.id());
    items
        .into_iter()
        .skip(query.skip)
        .take(query.limit)
        .collect()
}

pub fn delete<T: Clone + Entity>(val_id: ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = collection.lock().unwrap();
    let index = collection.iter().position(|item| item.id() == val_id)?;
    Some(collection.remove(index))
}

/// Applies `update` to the entity with the given id and returns the updated copy
pub fn update_one<T: Clone + Entity, U: FnOnce(&mut T)>(
    val_id: ID,
    collection: &Mutex<Vec<T>>,
    update: U,
) -> Option<T> {
    let mut collection = collection.lock().unwrap();
    let item = collection.iter_mut().find(|item| item.id() == val_id)?;
    update(item);
    Some(item.clone())
}
