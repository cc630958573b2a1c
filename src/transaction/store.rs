//! The in-memory collection of transactions shared by the request handlers.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use time::OffsetDateTime;

use crate::{Error, transaction::Transaction};

/// Handles the creation, retrieval, replacement and deletion of transactions.
///
/// Transactions are kept in insertion order. Cloning the store is cheap and
/// every clone shares the same collection.
///
/// Each operation holds the lock for its whole find-and-mutate step, so
/// concurrent requests never observe a half-applied change.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    transactions: Arc<RwLock<Vec<Transaction>>>,
}

impl TransactionStore {
    /// Create a store holding `transactions`.
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Arc::new(RwLock::new(transactions)),
        }
    }

    /// Create a store holding the [seed data](Transaction::seed_data).
    pub fn with_seed_data() -> Self {
        Self::new(Transaction::seed_data(OffsetDateTime::now_utc()))
    }

    /// Retrieve every transaction in storage order.
    ///
    /// # Errors
    ///
    /// Returns [Error::StoreLockError] if the lock is poisoned.
    pub fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.read()?.clone())
    }

    /// Retrieve the first transaction with the ID `id`.
    ///
    /// # Errors
    ///
    /// Returns [Error::TransactionNotFound] if there is no such transaction.
    pub fn get(&self, id: &str) -> Result<Transaction, Error> {
        self.read()?
            .iter()
            .find(|transaction| transaction.id == id)
            .cloned()
            .ok_or_else(|| Error::TransactionNotFound(id.to_owned()))
    }

    /// Append `transaction` to the end of the collection.
    ///
    /// The ID is not checked against existing transactions.
    ///
    /// # Errors
    ///
    /// Returns [Error::StoreLockError] if the lock is poisoned.
    pub fn insert(&self, transaction: Transaction) -> Result<Transaction, Error> {
        self.write()?.push(transaction.clone());

        Ok(transaction)
    }

    /// Replace the first transaction that has the same ID as `transaction`,
    /// keeping its position in the collection.
    ///
    /// # Errors
    ///
    /// Returns [Error::TransactionNotFound] if there is no such transaction.
    pub fn replace(&self, transaction: Transaction) -> Result<Transaction, Error> {
        let mut transactions = self.write()?;

        let slot = transactions
            .iter_mut()
            .find(|stored| stored.id == transaction.id)
            .ok_or_else(|| Error::TransactionNotFound(transaction.id.clone()))?;
        *slot = transaction.clone();

        Ok(transaction)
    }

    /// Remove the first transaction with the ID `id` and return it.
    ///
    /// The remaining transactions keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [Error::TransactionNotFound] if there is no such transaction.
    pub fn delete(&self, id: &str) -> Result<Transaction, Error> {
        let mut transactions = self.write()?;

        let index = transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or_else(|| Error::TransactionNotFound(id.to_owned()))?;

        Ok(transactions.remove(index))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Transaction>>, Error> {
        self.transactions.read().map_err(|error| {
            tracing::error!("Could not acquire the transaction store read lock: {error}");
            Error::StoreLockError
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Transaction>>, Error> {
        self.transactions.write().map_err(|error| {
            tracing::error!("Could not acquire the transaction store write lock: {error}");
            Error::StoreLockError
        })
    }
}
