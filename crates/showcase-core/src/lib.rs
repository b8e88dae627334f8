//! Platform-free core of the showcase page: the persisted to-do list, the
//! static product catalog, and the navigation helpers.
//!
//! Nothing here touches the DOM. The frontend hands in a key-value storage
//! and a clock, asks for view-models, and draws them.

pub mod catalog;
pub mod config;
pub mod filter;
pub mod ids;
pub mod nav;
pub mod rating;
pub mod storage;
pub mod store;
pub mod task;

pub use catalog::{Category, CategoryFilter, Product, ProductCard, SortKey};
pub use config::PageConfig;
pub use filter::{TaskFilter, TaskListView, TaskRow};
pub use ids::{IdGenerator, MonotonicIds};
pub use nav::Navigation;
pub use rating::Stars;
pub use storage::{KeyValueRepository, KeyValueStorage, MemoryStorage, TaskRepository};
pub use store::TaskStore;
pub use task::{Task, TaskId};
