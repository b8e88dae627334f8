mod catalog_controls;
mod nav_bar;
mod product_card;
mod product_grid;
mod rating_stars;
mod todo_filters;
mod todo_form;
mod todo_list;
mod todo_row;

pub use catalog_controls::CatalogControls;
pub use nav_bar::NavBar;
pub use product_card::ProductCardView;
pub use product_grid::ProductGrid;
pub use rating_stars::RatingStars;
pub use todo_filters::TodoFilters;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;
