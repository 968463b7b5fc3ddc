use crate::shared::icons::icon;
use leptos::prelude::*;

/// Компактные контролы пагинации: страница вперёд/назад + размер страницы.
/// Общее число страниц знает только backend, поэтому "вперёд" доступна всегда.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Current page size ("" = backend default)
    #[prop(into)]
    page_size: Signal<String>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,
) -> impl IntoView {
    let page_size_opts: Vec<usize> = vec![10, 25, 50, 100];

    // Пока размер не выбран, действует значение backend-а по умолчанию
    let shown_size = move || {
        let value = page_size.get();
        if value.is_empty() {
            "25".to_string()
        } else {
            value
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("Стр. {}", current_page.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(25);
                    on_page_size_change.run(val);
                }
                prop:value=shown_size
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || shown_size() == size.to_string()>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
