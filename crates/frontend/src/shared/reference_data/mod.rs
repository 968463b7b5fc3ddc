//! Сессионный кэш справочников.
//!
//! Кладётся в context один раз в корне приложения; все компоненты разрешают
//! справочные id через него вместо собственных запросов.

use crate::shared::api_utils::api_url;
use contracts::reference::{RefItem, RefResponse, RefTable, ReferenceSet};
use futures::future::join_all;
use gloo_net::http::Request;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Idle,
    Loading,
    Ready,
}

#[derive(Clone, Copy)]
pub struct ReferenceCache {
    set: RwSignal<ReferenceSet>,
    state: RwSignal<LoadState>,
}

impl ReferenceCache {
    pub fn new() -> Self {
        Self {
            set: RwSignal::new(ReferenceSet::default()),
            state: RwSignal::new(LoadState::Idle),
        }
    }

    pub fn use_cache() -> Self {
        use_context::<ReferenceCache>().expect("ReferenceCache not found in context")
    }

    /// Идемпотентный запуск загрузки: первый вызов выдаёт по одному запросу
    /// на каждую таблицу параллельно, последующие вызовы ничего не делают.
    pub fn ensure_loaded(&self) {
        if self.state.get_untracked() != LoadState::Idle {
            return;
        }
        self.state.set(LoadState::Loading);

        let set = self.set;
        let state = self.state;
        spawn_local(async move {
            let tables = RefTable::ALL.map(|table| async move { (table, fetch_table(table).await) });
            let fetched = join_all(tables).await;
            set.update(|target| {
                for (table, items) in fetched {
                    target.insert(table, items);
                }
            });
            state.set(LoadState::Ready);
        });
    }

    /// Название записи справочника; "N/A" если записи нет, ссылка пустая
    /// или таблица ещё не загружена
    pub fn label_opt(&self, table: RefTable, id: Option<i64>) -> String {
        self.set.with(|set| set.label_opt(table, id))
    }

    /// Пары (value, label) для `<select>`
    pub fn options(&self, table: RefTable) -> Vec<(String, String)> {
        self.set.with(|set| set.options(table))
    }
}

/// Сбой одной таблицы деградирует в пустой список и не мешает остальным
async fn fetch_table(table: RefTable) -> Vec<RefItem> {
    let url = api_url(table.endpoint());
    match Request::get(&url).send().await {
        Ok(response) if response.ok() => match response.json::<RefResponse>().await {
            Ok(data) => data.results,
            Err(err) => {
                log::error!("Ошибка при получении данных с {}: {}", url, err);
                Vec::new()
            }
        },
        Ok(response) => {
            log::error!("Ошибка при получении данных с {}: HTTP {}", url, response.status());
            Vec::new()
        }
        Err(err) => {
            log::error!("Ошибка при получении данных с {}: {}", url, err);
            Vec::new()
        }
    }
}
