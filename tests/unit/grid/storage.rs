//! Tests for linear storage backends

#[cfg(test)]
mod tests {
    use gridcore::LinearStorage;

    fn exercise<S: LinearStorage<u8>>(mut storage: S) {
        assert_eq!(storage.len(), 6);
        assert!(!storage.is_empty());
        assert_eq!(storage.get(5), Some(&9));
        assert_eq!(storage.get(6), None);

        if let Some(cell) = storage.get_mut(2) {
            *cell = 1;
        }
        assert_eq!(storage.as_slice(), &[9, 9, 1, 9, 9, 9]);
        assert!(storage.get_mut(6).is_none());

        storage.as_mut_slice().fill(0);
        assert!(storage.as_slice().iter().all(|&cell| cell == 0));
    }

    #[test]
    fn test_vec_storage() {
        exercise(<Vec<u8> as LinearStorage<u8>>::filled(6, 9));
    }

    #[test]
    fn test_boxed_slice_storage() {
        exercise(<Box<[u8]> as LinearStorage<u8>>::filled(6, 9));
    }

    #[test]
    fn test_empty_storage() {
        let storage = <Vec<char> as LinearStorage<char>>::filled(0, 'x');
        assert!(LinearStorage::is_empty(&storage));
        assert_eq!(LinearStorage::get(&storage, 0), None);
    }
}
