//! Catalog business logic

use crate::domain::{Book, CreateBookInput, CreateGenreInput, Genre, UpdateBookInput};
use crate::error::Result;
use crate::repository::CatalogRepository;
use metrics::counter;
use std::sync::Arc;
use tracing::{debug, info};
use validator::Validate;

pub struct CatalogService<R: CatalogRepository> {
    repo: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list_books(&self) -> Result<Vec<Book>> {
        self.repo.list_books().await
    }

    pub async fn list_books_in_genre(&self, genre_id: u64) -> Result<Vec<Book>> {
        self.repo.list_books_in_genre(genre_id).await
    }

    pub async fn get_book(&self, genre_id: u64, book_id: u64) -> Result<Book> {
        self.repo.get_book(genre_id, book_id).await
    }

    pub async fn update_book(
        &self,
        genre_id: u64,
        book_id: u64,
        input: UpdateBookInput,
    ) -> Result<Book> {
        input.validate()?;

        let book = self.repo.update_book(genre_id, book_id, &input).await?;
        debug!(book_id, genre_id = book.genre_id, "Book updated");
        Ok(book)
    }

    pub async fn create_book(&self, genre_id: u64, input: CreateBookInput) -> Result<Book> {
        input.validate()?;

        let book = self.repo.create_book(genre_id, &input).await?;
        debug!(book_id = book.id, genre_id, "Book created");
        Ok(book)
    }

    pub async fn list_genres(&self) -> Result<Vec<Genre>> {
        self.repo.list_genres().await
    }

    pub async fn get_genre(&self, genre_id: u64) -> Result<Genre> {
        self.repo.get_genre(genre_id).await
    }

    pub async fn create_genre(&self, input: CreateGenreInput) -> Result<Genre> {
        input.validate()?;

        let genre = self.repo.create_genre(&input).await?;
        info!(genre_id = genre.id, name = %genre.name, "Genre created");
        Ok(genre)
    }

    /// Discard all state and reload the seed dataset.
    pub async fn reset(&self) -> Result<()> {
        self.repo.reset().await?;
        counter!("bookshelf_catalog_resets_total").increment(1);
        info!("Catalog reset to seed data");
        Ok(())
    }
}
