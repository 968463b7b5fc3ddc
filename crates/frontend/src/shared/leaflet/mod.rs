//! Минимальные биндинги к Leaflet (глобальный объект `L`, подключается в
//! `index.html`). Только обёртки над JS-функциями — без состояния и логики.

use wasm_bindgen::prelude::*;

/// Публичный тайловый сервер OpenStreetMap (read-only)
pub const OSM_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

#[wasm_bindgen]
extern "C" {
    /// L.Map
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container_id: &str, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64);

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &Map);

    #[wasm_bindgen(method, js_name = latLngToContainerPoint)]
    pub fn lat_lng_to_container_point(this: &Map, lat_lng: &JsValue) -> JsValue;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);

    /// L.TileLayer
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn new_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn tile_layer_add_to(this: &TileLayer, map: &Map);

    /// L.GeoJSON
    pub type GeoJson;

    #[wasm_bindgen(js_namespace = L, js_name = geoJSON)]
    pub fn new_geo_json(data: &JsValue, options: &JsValue) -> GeoJson;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn geo_json_add_to(this: &GeoJson, map: &Map);

    /// Отдельная фигура GeoJSON-слоя (L.Path)
    pub type Layer;

    #[wasm_bindgen(method, js_name = on)]
    pub fn layer_on(this: &Layer, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(method, js_name = setStyle)]
    pub fn set_style(this: &Layer, style: &JsValue);

    #[wasm_bindgen(method, js_name = bindTooltip)]
    pub fn bind_tooltip(this: &Layer, content: &str, options: &JsValue);

    /// L.Marker
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn new_marker(lat_lng: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn marker_add_to(this: &Marker, map: &Map);

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &str);
}

/// Пара `[lat, lng]` в представлении Leaflet
pub fn lat_lng(lat: f64, lng: f64) -> JsValue {
    let pair = js_sys::Array::new();
    pair.push(&JsValue::from_f64(lat));
    pair.push(&JsValue::from_f64(lng));
    pair.into()
}

/// JSON-значение как обычный JS-объект (не `Map`)
pub fn js_options(options: &serde_json::Value) -> JsValue {
    use serde::Serialize;
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    options.serialize(&serializer).unwrap_or(JsValue::NULL)
}
