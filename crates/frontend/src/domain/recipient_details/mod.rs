//! Карточка получателя (модальное окно)
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (запись + история платежей)
//! - view_model.rs: загрузка с защитой от поздних ответов
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::RecipientDetails;
pub use view_model::RecipientDetailsViewModel;
