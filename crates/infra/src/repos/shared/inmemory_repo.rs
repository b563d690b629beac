use std::sync::Mutex;

/// Useful functions for creating inmemory repositories

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Vec<T> {
    let collection = collection.lock().unwrap();
    collection.iter().filter(|item| compare(item)).cloned().collect()
}

/// Applies `update` to the first matching item, or to a newly created one
/// when nothing matches, while holding the lock for the whole operation.
pub fn upsert_by<T: Clone, F: Fn(&T) -> bool, C: FnOnce() -> T, U: FnOnce(&mut T)>(
    collection: &Mutex<Vec<T>>,
    compare: F,
    create: C,
    update: U,
) -> T {
    let mut collection = collection.lock().unwrap();
    let index = match collection.iter().position(|item| compare(item)) {
        Some(index) => index,
        None => {
            collection.push(create());
            collection.len() - 1
        }
    };
    update(&mut collection[index]);
    collection[index].clone()
}
