//! Catalog repository
//!
//! The whole catalog lives in memory behind a single lock. Reads share it;
//! every mutation (update, create, reset) holds it exclusively, so a read
//! never sees a half-applied update and two creates never draw the same id.

use crate::domain::{Book, CreateBookInput, CreateGenreInput, Genre, UpdateBookInput};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_books(&self) -> Result<Vec<Book>>;
    async fn list_books_in_genre(&self, genre_id: u64) -> Result<Vec<Book>>;
    async fn get_book(&self, genre_id: u64, book_id: u64) -> Result<Book>;
    async fn update_book(
        &self,
        genre_id: u64,
        book_id: u64,
        input: &UpdateBookInput,
    ) -> Result<Book>;
    async fn create_book(&self, genre_id: u64, input: &CreateBookInput) -> Result<Book>;
    async fn list_genres(&self) -> Result<Vec<Genre>>;
    async fn get_genre(&self, genre_id: u64) -> Result<Genre>;
    async fn create_genre(&self, input: &CreateGenreInput) -> Result<Genre>;
    async fn reset(&self) -> Result<()>;
}

/// Catalog state: genres, books and the next ids to hand out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    genres: Vec<Genre>,
    books: Vec<Book>,
    next_genre_id: u64,
    next_book_id: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    /// The fixed dataset loaded at startup and on every reset.
    pub fn seeded() -> Self {
        let genres = vec![genre(1, "Fiction"), genre(2, "Non-Fiction")];
        let books = vec![
            book(1, "Pride and Prejudice", "Jane Austin", 1),
            book(2, "Independent People", "Halldór Laxness", 1),
            book(3, "Brennu-Njáls saga", "Unknown", 2),
        ];

        Self {
            next_genre_id: next_id(genres.iter().map(|g| g.id)),
            next_book_id: next_id(books.iter().map(|b| b.id)),
            genres,
            books,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::seeded();
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn genre(&self, genre_id: u64) -> Result<&Genre> {
        self.genres
            .iter()
            .find(|g| g.id == genre_id)
            .ok_or_else(|| AppError::NotFound(format!("Genre {} not found", genre_id)))
    }

    pub fn books_in_genre(&self, genre_id: u64) -> Result<Vec<Book>> {
        self.genre(genre_id)?;
        Ok(self
            .books
            .iter()
            .filter(|b| b.genre_id == genre_id)
            .cloned()
            .collect())
    }

    /// A book filed under another genre is reported exactly like a missing one.
    pub fn book(&self, genre_id: u64, book_id: u64) -> Result<&Book> {
        self.books
            .iter()
            .find(|b| b.id == book_id && b.genre_id == genre_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Book {} not found in genre {}",
                    book_id, genre_id
                ))
            })
    }

    pub fn update_book(
        &mut self,
        genre_id: u64,
        book_id: u64,
        input: &UpdateBookInput,
    ) -> Result<Book> {
        if let Some(target) = input.genre_id {
            self.genre(target)?;
        }

        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == book_id)
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", book_id)))?;

        if book.genre_id != genre_id {
            return Err(AppError::NotFound(format!(
                "Book {} does not belong to genre {}",
                book_id, genre_id
            )));
        }

        book.apply(input);
        Ok(book.clone())
    }

    pub fn create_book(&mut self, genre_id: u64, input: &CreateBookInput) -> Result<Book> {
        self.genre(genre_id)?;

        let created = book(self.next_book_id, &input.title, &input.author, genre_id);
        self.next_book_id += 1;
        self.books.push(created.clone());
        Ok(created)
    }

    pub fn create_genre(&mut self, input: &CreateGenreInput) -> Genre {
        let created = genre(self.next_genre_id, &input.name);
        self.next_genre_id += 1;
        self.genres.push(created.clone());
        created
    }
}

fn genre(id: u64, name: &str) -> Genre {
    Genre {
        id,
        name: name.to_string(),
    }
}

fn book(id: u64, title: &str, author: &str, genre_id: u64) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        genre_id,
    }
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0) + 1
}

/// Process-lifetime catalog store
#[derive(Clone, Default)]
pub struct InMemoryCatalogRepository {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary catalog instead of the seed.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> Catalog {
        self.catalog.read().await.clone()
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepository {
    async fn list_books(&self) -> Result<Vec<Book>> {
        Ok(self.catalog.read().await.books().to_vec())
    }

    async fn list_books_in_genre(&self, genre_id: u64) -> Result<Vec<Book>> {
        self.catalog.read().await.books_in_genre(genre_id)
    }

    async fn get_book(&self, genre_id: u64, book_id: u64) -> Result<Book> {
        self.catalog.read().await.book(genre_id, book_id).cloned()
    }

    async fn update_book(
        &self,
        genre_id: u64,
        book_id: u64,
        input: &UpdateBookInput,
    ) -> Result<Book> {
        self.catalog
            .write()
            .await
            .update_book(genre_id, book_id, input)
    }

    async fn create_book(&self, genre_id: u64, input: &CreateBookInput) -> Result<Book> {
        self.catalog.write().await.create_book(genre_id, input)
    }

    async fn list_genres(&self) -> Result<Vec<Genre>> {
        Ok(self.catalog.read().await.genres().to_vec())
    }

    async fn get_genre(&self, genre_id: u64) -> Result<Genre> {
        self.catalog.read().await.genre(genre_id).cloned()
    }

    async fn create_genre(&self, input: &CreateGenreInput) -> Result<Genre> {
        Ok(self.catalog.write().await.create_genre(input))
    }

    async fn reset(&self) -> Result<()> {
        self.catalog.write().await.reset();
        Ok(())
    }
}
