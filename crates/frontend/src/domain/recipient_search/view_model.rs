use super::api;
use super::filter_state::FilterState;
use contracts::recipient::Recipient;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Пауза между вводом в текстовое поле и запросом
const DEBOUNCE_MS: u32 = 300;

/// ViewModel поиска: владеет фильтрами и результатами, выдаёт запросы.
///
/// Каждый запрос получает порядковый номер; применяется только ответ
/// последнего выданного запроса, поздние ответы устаревших — отбрасываются.
#[derive(Clone, Copy)]
pub struct SearchViewModel {
    pub filters: RwSignal<FilterState>,
    pub results: RwSignal<Vec<Recipient>>,
    pub pin_error: RwSignal<Option<&'static str>>,
    pub advanced_open: RwSignal<bool>,
    /// id записи, открытой в модальном окне
    pub selected: RwSignal<Option<i64>>,
    seq: StoredValue<u64>,
}

impl SearchViewModel {
    pub fn new() -> Self {
        Self {
            filters: RwSignal::new(FilterState::default()),
            results: RwSignal::new(Vec::new()),
            pin_error: RwSignal::new(None),
            advanced_open: RwSignal::new(false),
            selected: RwSignal::new(None),
            seq: StoredValue::new(0),
        }
    }

    fn next_seq(&self) -> u64 {
        let seq = self.seq.get_value() + 1;
        self.seq.set_value(seq);
        seq
    }

    fn is_current(&self, seq: u64) -> bool {
        self.seq.get_value() == seq
    }

    /// Немедленная перезагрузка: категориальные фильтры, монтирование
    pub fn reload(&self) {
        self.reload_after(0);
    }

    /// Отложенная перезагрузка для текстовых полей
    pub fn reload_debounced(&self) {
        self.reload_after(DEBOUNCE_MS);
    }

    fn reload_after(&self, delay_ms: u32) {
        // Невалидный ПИН блокирует отправку запроса
        if self.pin_error.get_untracked().is_some() {
            return;
        }

        let vm = *self;
        let seq = vm.next_seq();
        spawn_local(async move {
            if delay_ms > 0 {
                TimeoutFuture::new(delay_ms).await;
                // за время паузы пользователь мог продолжить ввод
                if !vm.is_current(seq) {
                    return;
                }
            }
            let query = vm.filters.with_untracked(|filters| filters.query_string());
            match api::fetch_recipients(&query).await {
                Ok(rows) => {
                    if vm.is_current(seq) {
                        vm.results.set(rows);
                    }
                }
                Err(err) => {
                    log::error!("Ошибка при получении данных: {}", err);
                    if vm.is_current(seq) {
                        vm.results.set(Vec::new());
                    }
                }
            }
        });
    }

    /// Текстовые поля (ФИО, ПИН): пересчёт валидации + отложенный запрос
    pub fn set_text_filter(&self, name: &'static str, value: String) {
        self.filters.update(|filters| filters.set(name, value));
        self.pin_error
            .set(self.filters.with_untracked(|filters| filters.pin_error()));
        self.reload_debounced();
    }

    /// Категориальные фильтры; пустая строка — сброс
    pub fn set_select_filter(&self, name: &'static str, value: String) {
        self.filters.update(|filters| filters.set(name, value));
        self.reload();
    }

    /// Номер страницы; первая страница не передаётся в запрос
    pub fn set_page(&self, page: usize) {
        self.filters.update(|filters| {
            filters.page = if page <= 1 {
                String::new()
            } else {
                page.to_string()
            };
        });
        self.reload();
    }

    /// Размер страницы; смена размера возвращает на первую страницу
    pub fn set_page_size(&self, size: usize) {
        self.filters.update(|filters| {
            filters.page_size = size.to_string();
            filters.page = String::new();
        });
        self.reload();
    }

    pub fn current_page(&self) -> usize {
        self.filters.with(|filters| filters.page.parse().unwrap_or(1))
    }
}
