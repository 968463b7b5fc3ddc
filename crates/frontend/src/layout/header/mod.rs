use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <div class="header">
            <div class="header__logo">
                {icon("emblem")}
                <span>
                    "Кыргыз Республикасынын," <br />
                    "Эмгек, социалдык камсыздоо жана миграция министрлиги"
                </span>
            </div>
            <div class="header__links">
                <a href="#">"Уй-булоого комок"</a>
                <a href="#">"Социальный контракт"</a>
                <a href="#">"Социальный паспорт"</a>
            </div>
        </div>
    }
}
