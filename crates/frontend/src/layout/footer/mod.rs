use crate::shared::api_utils::api_url;
use contracts::reference::RefTable;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Сервер: доступен",
            ServerStatus::Offline => "Сервер: недоступен",
            ServerStatus::Checking => "Сервер: проверка...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

/// Лёгкий GET к самому маленькому справочнику; сбой не показывается
/// пользователю нигде кроме индикатора.
async fn ping_server() -> bool {
    gloo_net::http::Request::get(&api_url(RefTable::Gender.endpoint()))
        .send()
        .await
        .map(|response| response.ok())
        .unwrap_or(false)
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    // Запускаем проверку при монтировании
    Effect::new(move |_| {
        spawn_local(async move {
            let online = ping_server().await;
            status.set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    });

    view! {
        <div class="footer">
            <div class="footer__content">
                <div>{"© \"Интерактивная карта\" 2024-г."}</div>
                <div>
                    <span class=move || status.get().css_class()>
                        {move || status.get().display_text()}
                    </span>
                </div>
            </div>
        </div>
    }
}
