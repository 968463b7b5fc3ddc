//! Поиск получателей по фильтрам
//!
//! Simplified MVVM pattern implementation:
//! - filter_state.rs: состояние фильтров и построение строки запроса
//! - api.rs: API functions (списочный endpoint)
//! - view_model.rs: перезагрузка результатов (debounce + порядковый номер)
//! - view.rs: Leptos-компонент таблицы с фильтрами

mod api;
mod filter_state;
mod view;
mod view_model;

pub use filter_state::FilterState;
pub use view::RecipientSearchView;
pub use view_model::SearchViewModel;
