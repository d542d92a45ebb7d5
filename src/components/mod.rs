//! UI Components
//!
//! Leptos components making up the shopping-list screen.

mod top_bar;
mod new_item_form;
mod item_list;
mod item_card;
mod delete_button;

pub use top_bar::TopBar;
pub use new_item_form::NewItemForm;
pub use item_list::ItemList;
pub use item_card::ItemCard;
pub use delete_button::DeleteButton;
