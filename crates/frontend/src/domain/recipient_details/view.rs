use super::view_model::RecipientDetailsViewModel;
use crate::shared::date_utils::{format_date, format_naive_date};
use crate::shared::leaflet;
use crate::shared::number_format::format_sum;
use crate::shared::reference_data::ReferenceCache;
use contracts::recipient::{relative_type_label, Recipient};
use contracts::reference::{RefTable, MISSING_LABEL};
use leptos::prelude::*;
use serde_json::json;

const MINI_MAP_ZOOM: f64 = 13.0;

#[component]
pub fn RecipientDetails(id: i64) -> impl IntoView {
    let refs = ReferenceCache::use_cache();
    refs.ensure_loaded();

    let vm = RecipientDetailsViewModel::new();
    vm.load(id);

    let mini_map = StoredValue::new_local(None::<leaflet::Map>);

    // Мини-карта создаётся, когда запись с координатами уже вставлена в DOM
    Effect::new(move |_| {
        let coords = vm.recipient.with(|record| {
            record.as_ref().and_then(|r| {
                let address = r.address.as_ref()?;
                match (address.latitude, address.longitude) {
                    (Some(lat), Some(lng)) => Some((lat, lng, r.full_name())),
                    _ => None,
                }
            })
        });
        let Some((lat, lng, title)) = coords else {
            return;
        };
        if mini_map.with_value(|handle| handle.is_some()) {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;
            // окно могли успеть закрыть, пока задача ждала своей очереди
            let alive = mini_map.try_with_value(|handle| handle.is_none());
            if alive != Some(true) {
                return;
            }
            let map = init_mini_map(lat, lng, &title);
            let _ = mini_map.try_update_value(|handle| *handle = Some(map));
        });
    });

    on_cleanup(move || {
        mini_map.with_value(|handle| {
            if let Some(map) = handle.as_ref() {
                map.remove();
            }
        });
        vm.invalidate();
    });

    view! {
        <div class="recipient-details">
            {move || match vm.recipient.get() {
                None => view! {
                    <div class="recipient-details__loading">"Загрузка..."</div>
                }.into_any(),
                Some(recipient) => details_body(refs, vm, recipient).into_any(),
            }}
        </div>
    }
}

fn details_body(
    refs: ReferenceCache,
    vm: RecipientDetailsViewModel,
    recipient: Recipient,
) -> impl IntoView {
    let address = recipient.address.clone().unwrap_or_default();
    let has_coords = address.latitude.is_some() && address.longitude.is_some();
    let status = recipient
        .payment_status
        .as_ref()
        .map(|v| v.name_ru.clone())
        .unwrap_or_else(|| MISSING_LABEL.to_string());
    let nationality = recipient
        .nationality
        .as_ref()
        .map(|v| v.name_ru.clone())
        .unwrap_or_else(|| MISSING_LABEL.to_string());
    let gender = recipient
        .gender
        .as_ref()
        .map(|v| v.name_ru.clone())
        .unwrap_or_else(|| MISSING_LABEL.to_string());

    view! {
        <h2>"Детали получателя"</h2>
        <table class="details-table">
            <tbody>
                <tr>
                    <td><strong>"ФИО:"</strong></td>
                    <td>{recipient.full_name()}</td>
                </tr>
                <tr>
                    <td><strong>"ПИН:"</strong></td>
                    <td>{recipient.pin.clone()}</td>
                </tr>
                <tr>
                    <td><strong>"Область:"</strong></td>
                    <td>{refs.label_opt(RefTable::Region, address.region)}</td>
                </tr>
                <tr>
                    <td><strong>"Город:"</strong></td>
                    <td>{refs.label_opt(RefTable::City, address.city)}</td>
                </tr>
                <tr>
                    <td><strong>"Поселок:"</strong></td>
                    <td>{refs.label_opt(RefTable::Township, address.township)}</td>
                </tr>
                <tr>
                    <td><strong>"Село:"</strong></td>
                    <td>{refs.label_opt(RefTable::Village, address.village)}</td>
                </tr>
                <tr>
                    <td><strong>"Сумма платежа:"</strong></td>
                    <td>{recipient.payment_sum.map(format_sum).unwrap_or_else(|| MISSING_LABEL.to_string())}</td>
                </tr>
                <tr>
                    <td><strong>"Статус платежа:"</strong></td>
                    <td>{status}</td>
                </tr>
                <tr>
                    <td><strong>"Национальность:"</strong></td>
                    <td>{nationality}</td>
                </tr>
                <tr>
                    <td><strong>"Пол:"</strong></td>
                    <td>{gender}</td>
                </tr>
                <tr>
                    <td><strong>"Дата рождения:"</strong></td>
                    <td>{recipient.date_of_birth.map(format_naive_date).unwrap_or_default()}</td>
                </tr>
            </tbody>
        </table>

        <h3>"Родственники:"</h3>
        {if recipient.relative.is_empty() {
            view! { <div>"Нет родственников"</div> }.into_any()
        } else {
            view! {
                <table class="details-table">
                    <thead>
                        <tr>
                            <th>"ФИО"</th>
                            <th>"ПИН"</th>
                            <th>"Дата рождения"</th>
                            <th>"Родственник"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {recipient.relative.iter().map(|rel| view! {
                            <tr>
                                <td>{rel.full_name()}</td>
                                <td>{rel.pin.clone()}</td>
                                <td>{rel.date_of_birth.map(format_naive_date).unwrap_or_default()}</td>
                                <td>{relative_type_label(rel.relative_type)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            }.into_any()
        }}

        {address.photo.clone().map(|photo| view! {
            <div class="photo-block">
                <strong>"Фото:"</strong>
                <img src=photo alt="Фото адреса" />
            </div>
        })}

        {has_coords.then(|| view! {
            <div class="mini-map-block">
                <strong>"Карта:"</strong>
                <div id="recipient-map" class="recipient-map"></div>
            </div>
        })}

        <h3>"История платежей:"</h3>
        <table class="details-table">
            <thead>
                <tr>
                    <th>"Дата"</th>
                    <th>"Сумма"</th>
                </tr>
            </thead>
            <tbody>
                {move || vm.history.get().into_iter().map(|payment| view! {
                    <tr>
                        <td>{format_date(&payment.created_date)}</td>
                        <td>{format_sum(payment.payment_sum)}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

/// Статичная мини-карта с маркером по адресу получателя
fn init_mini_map(lat: f64, lng: f64, title: &str) -> leaflet::Map {
    let map = leaflet::new_map(
        "recipient-map",
        &leaflet::js_options(&json!({ "attributionControl": false })),
    );
    map.set_view(&leaflet::lat_lng(lat, lng), MINI_MAP_ZOOM);

    let tiles = leaflet::new_tile_layer(leaflet::OSM_TILE_URL, &leaflet::js_options(&json!({})));
    tiles.tile_layer_add_to(&map);

    let marker = leaflet::new_marker(&leaflet::lat_lng(lat, lng));
    marker.marker_add_to(&map);
    marker.bind_popup(title);

    // контейнер внутри модального окна получает размеры после вставки
    map.invalidate_size();

    map
}
