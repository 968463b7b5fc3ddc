use super::view_model::{HighlightedRegion, RegionMapViewModel};
use crate::shared::icons::icon;
use crate::shared::leaflet;
use crate::shared::number_format::format_sum;
use leptos::prelude::*;
use serde_json::json;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Границы областей поставляются вместе с приложением
const REGION_BOUNDARIES: &str = include_str!("kyrgyzstan_regions.json");

/// Центр страны и зум, при котором видна вся территория
const MAP_CENTER: (f64, f64) = (41.2044, 74.7661);
const MAP_ZOOM: f64 = 7.0;

fn load_boundaries() -> contracts::region::RegionCollection {
    serde_json::from_str(REGION_BOUNDARIES).unwrap_or_else(|err| {
        log::error!("Не удалось разобрать границы регионов: {}", err);
        contracts::region::RegionCollection {
            kind: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    })
}

#[component]
pub fn RegionMapView() -> impl IntoView {
    let vm = RegionMapViewModel::new();
    let regions = StoredValue::new(load_boundaries());
    let map_handle = StoredValue::new_local(None::<leaflet::Map>);

    vm.load_stats();

    // Карта создаётся после вставки контейнера в DOM (отложенная микрозадача)
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(0).await;
        let map = regions.with_value(|boundaries| init_map(vm, boundaries));
        map_handle.set_value(Some(map));
    });

    let submit_search = move || {
        regions.with_value(|boundaries| vm.search_submit(boundaries));
    };

    // Оверлей позиционируется по координате указателя; подсветка от поиска
    // без координаты прижимается к углу карты
    let popup_style = move |region: &HighlightedRegion| -> String {
        let Some((lat, lng)) = region.pointer else {
            return String::new();
        };
        map_handle.with_value(|handle| {
            handle
                .as_ref()
                .map(|map| {
                    let point = map.lat_lng_to_container_point(&leaflet::lat_lng(lat, lng));
                    let x = js_sys::Reflect::get(&point, &JsValue::from_str("x"))
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or_default();
                    let y = js_sys::Reflect::get(&point, &JsValue::from_str("y"))
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or_default();
                    format!("left: {:.0}px; top: {:.0}px;", x + 14.0, y + 14.0)
                })
                .unwrap_or_default()
        })
    };

    view! {
        <div class="map-wrapper">
            <div class="map-toolbar">
                <input
                    type="text"
                    class="map-toolbar__input"
                    placeholder="Поиск региона"
                    prop:value=move || vm.search_term.get()
                    on:input=move |ev| vm.search_term.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            submit_search();
                        }
                    }
                />
                <button class="button" on:click=move |_| submit_search()>
                    {icon("search")}
                    "Найти"
                </button>
            </div>

            <div id="region-map" class="region-map"></div>

            <Show when=move || vm.loading.get()>
                <div class="loader-container">
                    <div class="loader"></div>
                </div>
            </Show>

            {move || vm.highlighted.get().map(|region| {
                let pinned = region.pointer.is_none();
                let style = popup_style(&region);
                view! {
                    <div class="region-popup" class:region-popup--pinned=pinned style=style>
                        <h3>{icon("map-pin")} {region.name.clone()}</h3>
                        {region.stats.map(|stats| view! {
                            <p>"Количество получателей: " {stats.recipient_count}</p>
                            <p>"Мужчины получатели: " {stats.recipient_male_count}</p>
                            <p>"Женщины получатели: " {stats.recipient_female_count}</p>
                            <p>"Дети до 16-лет: " {stats.relative_position_count}</p>
                            <p>"Количество всего человек: " {stats.relative_count}</p>
                            <p>"Общая сумма: " {format_sum(stats.payment_sum)}</p>
                        })}
                    </div>
                }
            })}
        </div>
    }
}

/// Создание карты: тайлы + GeoJSON-слой с обработчиками наведения.
/// Панорамирование и зум отключены — карта статична.
fn init_map(
    vm: RegionMapViewModel,
    regions: &contracts::region::RegionCollection,
) -> leaflet::Map {
    let map_options = leaflet::js_options(&json!({
        "zoomControl": false,
        "attributionControl": false,
        "dragging": false,
        "scrollWheelZoom": false,
        "doubleClickZoom": false,
        "boxZoom": false,
        "keyboard": false,
        "touchZoom": false,
    }));
    let map = leaflet::new_map("region-map", &map_options);
    map.set_view(&leaflet::lat_lng(MAP_CENTER.0, MAP_CENTER.1), MAP_ZOOM);

    let tiles = leaflet::new_tile_layer(leaflet::OSM_TILE_URL, &leaflet::js_options(&json!({})));
    tiles.tile_layer_add_to(&map);

    let data = match serde_json::to_value(regions) {
        Ok(value) => leaflet::js_options(&value),
        Err(err) => {
            log::error!("Не удалось сериализовать границы регионов: {}", err);
            return map;
        }
    };

    let on_each_feature =
        Closure::<dyn FnMut(JsValue, JsValue)>::new(move |feature: JsValue, layer: JsValue| {
            attach_region_handlers(vm, &feature, layer);
        });

    let geo_options = js_sys::Object::new();
    let base_style = leaflet::js_options(&json!({
        "fillColor": "#29B6F6",
        "fillOpacity": 1,
        "color": "white",
        "weight": 1,
    }));
    let _ = js_sys::Reflect::set(&geo_options, &JsValue::from_str("style"), &base_style);
    let _ = js_sys::Reflect::set(
        &geo_options,
        &JsValue::from_str("onEachFeature"),
        on_each_feature.as_ref(),
    );

    let geo_layer = leaflet::new_geo_json(&data, &geo_options.into());
    geo_layer.geo_json_add_to(&map);
    // Обработчики живут столько же, сколько карта
    on_each_feature.forget();

    map
}

fn feature_prop(target: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(key)).ok()
}

/// Постоянная подпись региона + реакция на mouseover/mouseout
fn attach_region_handlers(vm: RegionMapViewModel, feature: &JsValue, layer: JsValue) {
    let props = feature_prop(feature, "properties").unwrap_or(JsValue::UNDEFINED);
    let id = feature_prop(&props, "id")
        .and_then(|v| v.as_f64())
        .map(|v| v as i64)
        .unwrap_or(0);
    let name = feature_prop(&props, "name")
        .and_then(|v| v.as_string())
        .unwrap_or_default();

    let layer: leaflet::Layer = layer.unchecked_into();

    layer.bind_tooltip(
        &name,
        &leaflet::js_options(&json!({
            "permanent": true,
            "direction": "center",
            "className": "label-tooltip",
        })),
    );

    let enter_name = name.clone();
    let mouseover = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        if let Some(target) = feature_prop(&event, "target") {
            let target: leaflet::Layer = target.unchecked_into();
            target.set_style(&leaflet::js_options(&json!({
                "weight": 3,
                "fillOpacity": 1,
                "color": "white",
            })));
        }
        let latlng = feature_prop(&event, "latlng").unwrap_or(JsValue::UNDEFINED);
        let lat = feature_prop(&latlng, "lat")
            .and_then(|v| v.as_f64())
            .unwrap_or_default();
        let lng = feature_prop(&latlng, "lng")
            .and_then(|v| v.as_f64())
            .unwrap_or_default();
        vm.hover_enter(id, enter_name.clone(), (lat, lng));
    });
    layer.layer_on("mouseover", mouseover.as_ref().unchecked_ref());
    mouseover.forget();

    let mouseout = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
        if let Some(target) = feature_prop(&event, "target") {
            let target: leaflet::Layer = target.unchecked_into();
            target.set_style(&leaflet::js_options(&json!({
                "weight": 1,
                "fillOpacity": 1,
                "color": "white",
            })));
        }
        vm.hover_leave();
    });
    layer.layer_on("mouseout", mouseout.as_ref().unchecked_ref());
    mouseout.forget();
}
