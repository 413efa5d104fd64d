//! Command handlers organized by category.
//!
//! | Module | Commands | Target |
//! |--------|----------|--------|
//! | `database` | 3 | Database |
//! | `collection` | 3 | Catalog |
//! | `document` | 6 | Collection |

pub mod collection;
pub mod database;
pub mod document;
