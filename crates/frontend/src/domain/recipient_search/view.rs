use super::view_model::SearchViewModel;
use crate::domain::recipient_details::RecipientDetails;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::ClearableSelect;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::number_format::format_sum;
use crate::shared::reference_data::ReferenceCache;
use contracts::reference::{RefTable, MISSING_LABEL};
use leptos::prelude::*;

/// Категориальные фильтры расширенного поиска: (имя поля, подпись, справочник)
const ADVANCED_FILTERS: [(&str, &str, RefTable); 8] = [
    ("nationality", "Национальность", RefTable::Nationality),
    ("gender", "Пол", RefTable::Gender),
    ("city", "Город", RefTable::City),
    ("township", "Поселок", RefTable::Township),
    ("village", "Село", RefTable::Village),
    (
        "territorial_object",
        "Территориальный объект",
        RefTable::TerritorialObject,
    ),
    (
        "territorial_unit",
        "Территориальная единица",
        RefTable::TerritorialUnit,
    ),
    ("relative", "Родственник", RefTable::RelativeType),
];

#[component]
pub fn RecipientSearchView() -> impl IntoView {
    let refs = ReferenceCache::use_cache();
    refs.ensure_loaded();

    let vm = SearchViewModel::new();
    // Монтирование с пустыми фильтрами: один запрос без параметров
    vm.reload();

    let filter_value = move |name: &'static str| {
        Signal::derive(move || {
            vm.filters.with(|filters| {
                filters
                    .entries()
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.to_string())
                    .unwrap_or_default()
            })
        })
    };

    let select_filter = move |name: &'static str| {
        Callback::new(move |value: String| vm.set_select_filter(name, value))
    };

    view! {
        <div class="search-container">
            <div class="search-actions">
                <button
                    class="btn"
                    on:click=move |_| vm.advanced_open.update(|open| *open = !*open)
                >
                    {icon("filter")}
                    {move || if vm.advanced_open.get() {
                        "Скрыть расширенный поиск"
                    } else {
                        "Показать расширенный поиск"
                    }}
                </button>
                {move || {
                    let count = vm.filters.with(|filters| filters.active_count());
                    (count > 0).then(|| view! {
                        <span class="badge">{count}</span>
                    })
                }}
                <PaginationControls
                    current_page=Signal::derive(move || vm.current_page())
                    on_page_change=Callback::new(move |page| vm.set_page(page))
                    page_size=Signal::derive(move || vm.filters.with(|f| f.page_size.clone()))
                    on_page_size_change=Callback::new(move |size| vm.set_page_size(size))
                />
            </div>

            <Show when=move || vm.advanced_open.get()>
                <div class="grid-container">
                    {ADVANCED_FILTERS.iter().map(|&(name, label, table)| {
                        view! {
                            <ClearableSelect
                                label=label.to_string()
                                value=filter_value(name)
                                on_change=select_filter(name)
                                options=Signal::derive(move || refs.options(table))
                            />
                        }
                    }).collect_view()}
                </div>
            </Show>

            <table class="results-table">
                <thead>
                    <tr>
                        <th>"№"</th>
                        <th>
                            "ФИО"
                            <input
                                type="text"
                                class="column-search"
                                placeholder="Поиск по ФИО"
                                prop:value=move || vm.filters.with(|f| f.search.clone())
                                on:input=move |ev| {
                                    vm.set_text_filter("search", event_target_value(&ev))
                                }
                            />
                        </th>
                        <th>
                            "ПИН"
                            <input
                                type="text"
                                class="column-search"
                                placeholder="Поиск по ПИН"
                                prop:value=move || vm.filters.with(|f| f.pin.clone())
                                on:input=move |ev| {
                                    vm.set_text_filter("pin", event_target_value(&ev))
                                }
                            />
                            {move || vm.pin_error.get().map(|err| view! {
                                <div class="error-message">{err}</div>
                            })}
                        </th>
                        <th>
                            "Область"
                            <ClearableSelect
                                value=filter_value("region")
                                on_change=select_filter("region")
                                options=Signal::derive(move || refs.options(RefTable::Region))
                                placeholder="Выбрать область".to_string()
                            />
                        </th>
                        <th>"Сумма платежа"</th>
                        <th>
                            "Статус платежа"
                            <ClearableSelect
                                value=filter_value("payment_status")
                                on_change=select_filter("payment_status")
                                options=Signal::derive(move || refs.options(RefTable::PaymentStatus))
                                placeholder="Выбрать статус".to_string()
                            />
                        </th>
                        <th>"Подробнее"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || vm.results.get().into_iter().enumerate().map(|(index, recipient)| {
                        let id = recipient.id;
                        let region_label = refs.label_opt(
                            RefTable::Region,
                            recipient.address.as_ref().and_then(|a| a.region),
                        );
                        let status = recipient
                            .payment_status
                            .as_ref()
                            .map(|s| s.name_ru.clone())
                            .unwrap_or_else(|| MISSING_LABEL.to_string());
                        view! {
                            <tr>
                                <td>{index + 1}</td>
                                <td>{recipient.full_name()}</td>
                                <td>{recipient.pin.clone()}</td>
                                <td>{region_label}</td>
                                <td>{recipient.payment_sum.map(format_sum).unwrap_or_default()}</td>
                                <td>{status}</td>
                                <td>
                                    <button
                                        class="details-button"
                                        on:click=move |_| vm.selected.set(Some(id))
                                    >
                                        "Посмотреть"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            {move || vm.selected.get().map(|id| view! {
                <Modal on_close=Callback::new(move |_| vm.selected.set(None))>
                    <RecipientDetails id=id />
                </Modal>
            })}
        </div>
    }
}
