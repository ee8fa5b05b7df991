//! In-memory user store.
//!
//! Records are kept in insertion order alongside an id → position index.
//! Every mutation updates both, so lookups stay O(1) and listing keeps the
//! order users were created in.
//!
//! Ids come from a monotonic counter. Deleting the user with the highest id
//! does not make that id available again.

use std::collections::HashMap;

use crate::domain::StoreError;
use crate::domain::entities::{NewUser, User};

/// Authoritative collection of users.
///
/// The store itself is not synchronized; callers share it behind a lock
/// (see [`crate::infrastructure::persistence::InMemoryUserRepository`]).
#[derive(Debug)]
pub struct UserStore {
    users: Vec<User>,
    index: HashMap<i64, usize>,
    next_id: i64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Creates an empty store. The first user gets id 1.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
        }
    }

    /// Creates a store holding the two demo users (ids 1 and 2).
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for (name, email) in [
            ("John Doe", "john.doe@example.com"),
            ("Jane Smith", "jane.smith@example.com"),
        ] {
            store
                .insert(NewUser::new(name, email))
                .expect("seed users are valid");
        }
        store
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Returns a snapshot of all users in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.users.clone()
    }

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no user has this id.
    pub fn get(&self, id: i64) -> Result<User, StoreError> {
        self.index
            .get(&id)
            .map(|&pos| self.users[pos].clone())
            .ok_or(StoreError::NotFound(id))
    }

    /// Validates the candidate, assigns it the next id and appends it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] if the name is blank or the email
    /// is malformed. The store is left untouched.
    pub fn insert(&mut self, candidate: NewUser) -> Result<User, StoreError> {
        candidate.validate()?;

        let id = self.next_id;
        self.next_id += 1;

        let user = candidate.into_user(id);
        self.index.insert(id, self.users.len());
        self.users.push(user.clone());

        Ok(user)
    }

    /// Replaces name and email of an existing user. The id is kept.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if the id is unknown (checked first),
    /// otherwise [`StoreError::Validation`] for an invalid candidate.
    pub fn update(&mut self, id: i64, candidate: NewUser) -> Result<User, StoreError> {
        let pos = *self.index.get(&id).ok_or(StoreError::NotFound(id))?;
        candidate.validate()?;

        let user = &mut self.users[pos];
        user.name = candidate.name;
        user.email = candidate.email;

        Ok(user.clone())
    }

    /// Removes a user from both the sequence and the index.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no user has this id.
    pub fn remove(&mut self, id: i64) -> Result<User, StoreError> {
        let pos = self.index.remove(&id).ok_or(StoreError::NotFound(id))?;
        let removed = self.users.remove(pos);

        // positions after the removed slot shifted left by one
        for user in &self.users[pos..] {
            if let Some(slot) = self.index.get_mut(&user.id) {
                *slot -= 1;
            }
        }

        Ok(removed)
    }

    #[cfg(test)]
    fn assert_consistent(&self) {
        assert_eq!(self.users.len(), self.index.len());
        for (pos, user) in self.users.iter().enumerate() {
            assert_eq!(self.index.get(&user.id), Some(&pos));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> NewUser {
        NewUser::new("Ada", "ada@x.io")
    }

    #[test]
    fn test_empty_store_starts_at_one() {
        let mut store = UserStore::new();
        assert!(store.is_empty());

        let user = store.insert(ada()).unwrap();
        assert_eq!(user.id, 1);
        store.assert_consistent();
    }

    #[test]
    fn test_seeded_store() {
        let store = UserStore::seeded();
        let users = store.list();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "John Doe");
        assert_eq!(users[1].id, 2);
        assert_eq!(users[1].email, "jane.smith@example.com");
        store.assert_consistent();
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut store = UserStore::seeded();
        let mut last = 2;
        for _ in 0..10 {
            let user = store.insert(ada()).unwrap();
            assert!(user.id > last);
            last = user.id;
        }
        store.assert_consistent();
    }

    #[test]
    fn test_highest_id_not_reused_after_delete() {
        let mut store = UserStore::seeded();
        let created = store.insert(ada()).unwrap();
        assert_eq!(created.id, 3);

        store.remove(3).unwrap();
        let again = store.insert(ada()).unwrap();

        assert_eq!(again.id, 4);
        store.assert_consistent();
    }

    #[test]
    fn test_get_round_trip() {
        let mut store = UserStore::new();
        let created = store.insert(ada()).unwrap();

        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(store.get(created.id).unwrap(), fetched);
    }

    #[test]
    fn test_get_missing() {
        let store = UserStore::seeded();
        assert!(matches!(store.get(99), Err(StoreError::NotFound(99))));
    }

    #[test]
    fn test_invalid_insert_does_not_mutate() {
        let mut store = UserStore::seeded();

        assert!(store.insert(NewUser::new(" ", "ada@x.io")).is_err());
        assert!(store.insert(NewUser::new("Ada", "not-an-email")).is_err());

        assert_eq!(store.len(), 2);
        // a rejected candidate must not burn an id
        assert_eq!(store.insert(ada()).unwrap().id, 3);
        store.assert_consistent();
    }

    #[test]
    fn test_update_in_place() {
        let mut store = UserStore::seeded();

        let updated = store
            .update(1, NewUser::new("John Q. Doe", "jqd@example.com"))
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "John Q. Doe");
        assert_eq!(store.list()[0], updated);
        store.assert_consistent();
    }

    #[test]
    fn test_update_missing_checked_before_validation() {
        let mut store = UserStore::seeded();

        let result = store.update(42, NewUser::new("", "bad"));
        assert!(matches!(result, Err(StoreError::NotFound(42))));
    }

    #[test]
    fn test_update_invalid_leaves_record() {
        let mut store = UserStore::seeded();

        let result = store.update(2, NewUser::new("Jane", "nope"));
        assert!(matches!(result, Err(StoreError::Validation { .. })));
        assert_eq!(store.get(2).unwrap().email, "jane.smith@example.com");
    }

    #[test]
    fn test_remove_keeps_index_consistent() {
        let mut store = UserStore::seeded();
        store.insert(ada()).unwrap();
        store.insert(NewUser::new("Grace", "grace@x.io")).unwrap();

        let removed = store.remove(2).unwrap();
        assert_eq!(removed.name, "Jane Smith");
        store.assert_consistent();

        let ids: Vec<i64> = store.list().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert_eq!(store.get(4).unwrap().name, "Grace");
        assert!(matches!(store.get(2), Err(StoreError::NotFound(2))));
    }

    #[test]
    fn test_remove_missing() {
        let mut store = UserStore::seeded();
        assert!(matches!(store.remove(7), Err(StoreError::NotFound(7))));
        assert_eq!(store.len(), 2);
    }
}
