use super::model;
use contracts::recipient::{PaymentHistoryEntry, Recipient};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel карточки получателя.
///
/// Запись и история платежей загружаются независимо: отказ истории не
/// блокирует карточку (остаётся пустой список). Поколение загрузки
/// отсекает ответы, пришедшие после закрытия окна.
#[derive(Clone, Copy)]
pub struct RecipientDetailsViewModel {
    pub recipient: RwSignal<Option<Recipient>>,
    pub history: RwSignal<Vec<PaymentHistoryEntry>>,
    generation: StoredValue<u64>,
}

impl RecipientDetailsViewModel {
    pub fn new() -> Self {
        Self {
            recipient: RwSignal::new(None),
            history: RwSignal::new(Vec::new()),
            generation: StoredValue::new(0),
        }
    }

    fn bump_generation(&self) -> u64 {
        let generation = self.generation.get_value() + 1;
        self.generation.set_value(generation);
        generation
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get_value() == generation
    }

    /// Два независимых запроса; пока запись не пришла, view показывает
    /// заглушку загрузки
    pub fn load(&self, id: i64) {
        let generation = self.bump_generation();
        self.recipient.set(None);
        self.history.set(Vec::new());

        let vm = *self;
        spawn_local(async move {
            match model::fetch_by_id(id).await {
                Ok(record) => {
                    if vm.is_current(generation) {
                        vm.recipient.set(Some(record));
                    }
                }
                Err(err) => log::error!("Ошибка при получении данных: {}", err),
            }
        });

        let vm = *self;
        spawn_local(async move {
            match model::fetch_payment_history(id).await {
                Ok(entries) => {
                    if vm.is_current(generation) {
                        vm.history.set(entries);
                    }
                }
                Err(err) => {
                    log::error!("Ошибка загрузки истории платежей: {}", err);
                    if vm.is_current(generation) {
                        vm.history.set(Vec::new());
                    }
                }
            }
        });
    }

    /// Закрытие карточки: поздние ответы больше не применяются
    pub fn invalidate(&self) {
        self.bump_generation();
    }
}
