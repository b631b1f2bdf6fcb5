//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` (or a transaction, for multi-statement syncs) as the
//! first argument.

pub mod character_comic_repo;
pub mod character_repo;
pub mod comic_repo;

pub use character_comic_repo::CharacterComicRepo;
pub use character_repo::CharacterRepo;
pub use comic_repo::ComicRepo;
