//! In-memory repositories for tests
//!
//! `MemoryStore` mimics the PostgreSQL repositories closely enough for
//! the layers above: ids are integer keys, missing reads are `RowNotFound`,
//! duplicate or dangling memberships fail, update/delete of unknown ids
//! succeed.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::context::RequestContext;
use crate::db::repos::parse_key;
use crate::db::{ContactRepository, DbError, GroupRepository};
use crate::models::{Contact, Group};

#[derive(Default)]
pub struct MemoryStore {
    contacts: Mutex<BTreeMap<i64, Contact>>,
    groups: Mutex<BTreeMap<i64, String>>,
    memberships: Mutex<Vec<(i64, i64)>>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub fn insert_contact(&self, contact: Contact) {
        let key = parse_key(&contact.id).unwrap();
        self.contacts.lock().unwrap().insert(key, stored(contact, key));
    }

    pub fn contact(&self, id: i64) -> Option<Contact> {
        self.contacts.lock().unwrap().get(&id).cloned()
    }

    pub fn group_name(&self, id: i64) -> Option<String> {
        self.groups.lock().unwrap().get(&id).cloned()
    }

    /// `(group_id, contact_id)` pairs in insertion order
    pub fn memberships(&self) -> Vec<(i64, i64)> {
        self.memberships.lock().unwrap().clone()
    }

    /// Number of repository calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn touch(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// The row as a key column would give it back
fn stored(mut contact: Contact, key: i64) -> Contact {
    contact.id = key.to_string();
    contact
}

fn constraint(message: &str) -> DbError {
    DbError::Sqlx(sqlx::Error::Protocol(message.to_owned()))
}

#[async_trait]
impl ContactRepository for MemoryStore {
    async fn create(&self, _ctx: &RequestContext, contact: &Contact) -> Result<(), DbError> {
        self.touch();
        let key = parse_key(&contact.id)?;
        let mut contacts = self.contacts.lock().unwrap();
        if contacts.contains_key(&key) {
            return Err(constraint("duplicate key value violates unique constraint \"contacts_pkey\""));
        }
        contacts.insert(key, stored(contact.clone(), key));
        Ok(())
    }

    async fn read(&self, _ctx: &RequestContext, id: i64) -> Result<Contact, DbError> {
        self.touch();
        self.contact(id)
            .ok_or(DbError::Sqlx(sqlx::Error::RowNotFound))
    }

    async fn update(&self, _ctx: &RequestContext, contact: &Contact) -> Result<(), DbError> {
        self.touch();
        let key = parse_key(&contact.id)?;
        if let Some(existing) = self.contacts.lock().unwrap().get_mut(&key) {
            *existing = stored(contact.clone(), key);
        }
        Ok(())
    }

    async fn delete(&self, _ctx: &RequestContext, id: i64) -> Result<(), DbError> {
        self.touch();
        self.contacts.lock().unwrap().remove(&id);
        self.memberships.lock().unwrap().retain(|&(_, c)| c != id);
        Ok(())
    }
}

#[async_trait]
impl GroupRepository for MemoryStore {
    async fn create(&self, _ctx: &RequestContext, group: &Group) -> Result<(), DbError> {
        self.touch();
        let key = parse_key(&group.id)?;
        let mut groups = self.groups.lock().unwrap();
        if groups.contains_key(&key) {
            return Err(constraint("duplicate key value violates unique constraint \"groups_pkey\""));
        }
        groups.insert(key, group.name.clone());
        Ok(())
    }

    async fn read(&self, _ctx: &RequestContext, id: i64) -> Result<Group, DbError> {
        self.touch();
        let name = self
            .group_name(id)
            .ok_or(DbError::Sqlx(sqlx::Error::RowNotFound))?;
        let contacts = self
            .memberships()
            .into_iter()
            .filter(|&(g, _)| g == id)
            .filter_map(|(_, c)| self.contact(c))
            .collect();
        Ok(Group {
            id: id.to_string(),
            name,
            contacts,
        })
    }

    async fn add_contact(
        &self,
        _ctx: &RequestContext,
        contact_id: i64,
        group_id: i64,
    ) -> Result<(), DbError> {
        self.touch();
        let pair = (group_id, contact_id);
        if self.group_name(group_id).is_none() || self.contact(contact_id).is_none() {
            return Err(constraint("insert or update on table \"group_contacts\" violates foreign key constraint"));
        }
        let mut memberships = self.memberships.lock().unwrap();
        if memberships.contains(&pair) {
            return Err(constraint("duplicate key value violates unique constraint \"group_contacts_pkey\""));
        }
        memberships.push(pair);
        Ok(())
    }
}

/// Every call fails as if the pool could not hand out a connection
pub struct FailingStore;

#[async_trait]
impl ContactRepository for FailingStore {
    async fn create(&self, _: &RequestContext, _: &Contact) -> Result<(), DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn read(&self, _: &RequestContext, _: i64) -> Result<Contact, DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update(&self, _: &RequestContext, _: &Contact) -> Result<(), DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _: &RequestContext, _: i64) -> Result<(), DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

#[async_trait]
impl GroupRepository for FailingStore {
    async fn create(&self, _: &RequestContext, _: &Group) -> Result<(), DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn read(&self, _: &RequestContext, _: i64) -> Result<Group, DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn add_contact(&self, _: &RequestContext, _: i64, _: i64) -> Result<(), DbError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}
