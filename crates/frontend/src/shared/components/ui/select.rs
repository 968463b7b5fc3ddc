use leptos::prelude::*;

/// Select со сбрасываемым значением: первая опция — "Выбрать" — возвращает
/// пустую строку, что означает "фильтр не применён".
#[component]
pub fn ClearableSelect(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value ("" = not selected)
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler; receives "" when cleared
    on_change: Callback<String>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Placeholder for the empty option
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let placeholder_text = move || placeholder.get().unwrap_or_else(|| "Выбрать".to_string());

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label">{l}</label>
            })}
            <select
                class="form__select"
                on:change=move |ev| {
                    on_change.run(event_target_value(&ev));
                }
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder_text}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
