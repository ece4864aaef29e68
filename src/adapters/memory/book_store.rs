use crate::domain::{Book, Isbn};
use crate::ports::book_store::{BookStore as BookStoreTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// インメモリストアのエラー
#[derive(Debug, Error)]
pub enum StoreError {
    /// ロック保持中に書き込み側がパニックした
    #[error("book store lock poisoned")]
    Poisoned,
}

/// BookStoreのインメモリ実装
///
/// すべての操作を1つの `RwLock` の下で行うため、
/// 重複チェック付きの登録と存在チェック付きの更新は同時リクエストに対して原子的。
/// 再起動をまたいでデータは残らない。
pub struct BookStore {
    books: RwLock<HashMap<Isbn, Book>>,
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(HashMap::new()),
        }
    }

    /// 書籍を登録済みのストアを作成（キーは各書籍の `isbn`）
    ///
    /// 同じISBNが複数ある場合は後のものが残る。
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let books = books
            .into_iter()
            .map(|book| (book.isbn.clone(), book))
            .collect();
        Self {
            books: RwLock::new(books),
        }
    }

    /// 登録されている書籍の数
    ///
    /// ロックが汚染されていても、残っている内容の件数を返す。
    pub fn len(&self) -> usize {
        self.books
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookStoreTrait for BookStore {
    async fn list(&self) -> Result<Vec<Book>> {
        let books = self.books.read().map_err(|_| StoreError::Poisoned)?;
        Ok(books.values().cloned().collect())
    }

    async fn get(&self, isbn: &Isbn) -> Result<Option<Book>> {
        let books = self.books.read().map_err(|_| StoreError::Poisoned)?;
        Ok(books.get(isbn).cloned())
    }

    async fn create(&self, book: Book) -> Result<Option<Isbn>> {
        let mut books = self.books.write().map_err(|_| StoreError::Poisoned)?;
        if books.contains_key(&book.isbn) {
            return Ok(None);
        }
        let isbn = book.isbn.clone();
        books.insert(isbn.clone(), book);
        Ok(Some(isbn))
    }

    async fn update(&self, isbn: &Isbn, book: Book) -> Result<bool> {
        let mut books = self.books.write().map_err(|_| StoreError::Poisoned)?;
        match books.get_mut(isbn) {
            Some(stored) => {
                *stored = book;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, isbn: &Isbn) -> Result<()> {
        let mut books = self.books.write().map_err(|_| StoreError::Poisoned)?;
        books.remove(isbn);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> Book {
        Book::new("Dune", "Frank Herbert", "9780441013593")
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let store = BookStore::new();
        assert!(store.list().await.unwrap().is_empty());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = BookStore::new();

        let created = store.create(dune()).await.unwrap();

        assert_eq!(created, Some(Isbn::from("9780441013593")));
        assert_eq!(
            store.get(&Isbn::from("9780441013593")).await.unwrap(),
            Some(dune())
        );
    }

    #[tokio::test]
    async fn test_create_duplicate_keeps_first_version() {
        let store = BookStore::new();
        store.create(dune()).await.unwrap();

        let second = dune().with_description("second copy");
        let created = store.create(second).await.unwrap();

        assert_eq!(created, None);
        assert_eq!(store.len(), 1);
        let stored = store.get(&Isbn::from("9780441013593")).await.unwrap();
        assert_eq!(stored, Some(dune()));
    }

    #[tokio::test]
    async fn test_update_absent_leaves_store_unchanged() {
        let store = BookStore::with_books([dune()]);

        let exists = store
            .update(&Isbn::from("missing"), Book::new("X", "Y", "missing"))
            .await
            .unwrap();

        assert!(!exists);
        assert_eq!(store.list().await.unwrap(), vec![dune()]);
    }

    #[tokio::test]
    async fn test_update_stores_under_path_key_not_body_isbn() {
        let store = BookStore::with_books([dune()]);
        let key = Isbn::from("9780441013593");

        let replacement = Book::new("Dune Messiah", "Frank Herbert", "other-isbn");
        let exists = store.update(&key, replacement.clone()).await.unwrap();

        assert!(exists);
        assert_eq!(store.get(&key).await.unwrap(), Some(replacement));
        assert_eq!(store.get(&Isbn::from("other-isbn")).await.unwrap(), None);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = BookStore::with_books([dune()]);
        let key = Isbn::from("9780441013593");

        store.delete(&key).await.unwrap();
        store.delete(&key).await.unwrap();

        assert_eq!(store.get(&key).await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_poisoned_lock_is_reported_as_store_error() {
        let store = std::sync::Arc::new(BookStore::with_books([dune()]));

        // 書き込みロックを保持したままパニックさせてロックを汚染する
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.books.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(store.list().await.is_err());
        assert!(store.get(&Isbn::from("9780441013593")).await.is_err());
        assert!(store.create(dune()).await.is_err());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_with_same_isbn_insert_once() {
        let store = std::sync::Arc::new(BookStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create(dune().with_description(format!("copy {i}")))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut inserted = 0;
        for handle in handles {
            if handle.await.unwrap().is_some() {
                inserted += 1;
            }
        }

        assert_eq!(inserted, 1);
        assert_eq!(store.len(), 1);
    }
}
