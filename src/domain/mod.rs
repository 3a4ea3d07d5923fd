//! Domain Layer
//!
//! This is the core of Libris - the loan lifecycle and reporting logic over
//! an in-memory object graph, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (Book, Reader, Library)
//! - `value_objects/` - Immutable value types (LoanPolicy, updates, queries, timestamps)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Explicit time** - Every time-dependent operation has an `_at(now)` form
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
