use super::api;
use contracts::region::{stats_for_region, RegionCollection, RegionStats};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Подсвеченный регион: свойства фигуры, агрегаты и координата указателя
/// (когда подсветка пришла от наведения, а не от поиска)
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightedRegion {
    pub id: i64,
    pub name: String,
    pub stats: Option<RegionStats>,
    pub pointer: Option<(f64, f64)>,
}

/// ViewModel карты регионов
#[derive(Clone, Copy)]
pub struct RegionMapViewModel {
    pub stats: RwSignal<Vec<RegionStats>>,
    pub highlighted: RwSignal<Option<HighlightedRegion>>,
    pub search_term: RwSignal<String>,
    pub loading: RwSignal<bool>,
}

impl RegionMapViewModel {
    pub fn new() -> Self {
        Self {
            stats: RwSignal::new(Vec::new()),
            highlighted: RwSignal::new(None),
            search_term: RwSignal::new(String::new()),
            loading: RwSignal::new(true),
        }
    }

    /// Региональные агрегаты загружаются один раз при монтировании;
    /// при сбое остаётся пустой список
    pub fn load_stats(&self) {
        let stats = self.stats;
        let loading = self.loading;
        spawn_local(async move {
            match api::fetch_region_stats().await {
                Ok(data) => stats.set(data),
                Err(err) => {
                    log::error!("Ошибка при получении данных по регионам: {}", err);
                    stats.set(Vec::new());
                }
            }
            loading.set(false);
        });
    }

    /// Наведение указателя на фигуру региона. Агрегаты читаются из сигнала
    /// в момент события, поэтому обработчик не хранит устаревший снимок.
    pub fn hover_enter(&self, id: i64, name: String, pointer: (f64, f64)) {
        let stats = self
            .stats
            .with_untracked(|all| stats_for_region(all, id).cloned());
        self.highlighted.set(Some(HighlightedRegion {
            id,
            name,
            stats,
            pointer: Some(pointer),
        }));
    }

    /// Уход указателя с фигуры — оверлей исчезает
    pub fn hover_leave(&self) {
        self.highlighted.set(None);
    }

    /// Поиск по названию региона: подстрока без учёта регистра, побеждает
    /// первое совпадение. Без совпадения текущая подсветка сохраняется.
    /// Найденный регион подсвечивается без координаты указателя.
    pub fn search_submit(&self, regions: &RegionCollection) {
        let term = self.search_term.get_untracked();
        if let Some(feature) = regions.find_by_name(&term) {
            self.highlighted.set(Some(HighlightedRegion {
                id: feature.properties.id,
                name: feature.properties.name.clone(),
                stats: None,
                pointer: None,
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::region::{RegionFeature, RegionProps};

    fn collection(names: &[(i64, &str)]) -> RegionCollection {
        RegionCollection {
            kind: "FeatureCollection".to_string(),
            features: names
                .iter()
                .map(|(id, name)| RegionFeature {
                    kind: "Feature".to_string(),
                    properties: RegionProps {
                        id: *id,
                        name: name.to_string(),
                    },
                    geometry: serde_json::json!({"type": "Polygon", "coordinates": []}),
                })
                .collect(),
        }
    }

    #[test]
    fn hover_enter_merges_stats_and_pointer() {
        let vm = RegionMapViewModel::new();
        vm.stats.set(vec![RegionStats {
            region: 4,
            recipient_count: 120,
            ..Default::default()
        }]);

        vm.hover_enter(4, "Чуйская область".to_string(), (42.87, 74.59));

        let highlighted = vm.highlighted.get_untracked().expect("highlight set");
        assert_eq!(highlighted.id, 4);
        assert_eq!(highlighted.name, "Чуйская область");
        assert_eq!(highlighted.stats.as_ref().map(|s| s.recipient_count), Some(120));
        assert_eq!(highlighted.pointer, Some((42.87, 74.59)));
    }

    #[test]
    fn hover_enter_without_stats_entry() {
        let vm = RegionMapViewModel::new();
        vm.hover_enter(9, "Ош".to_string(), (40.5, 72.8));
        let highlighted = vm.highlighted.get_untracked().expect("highlight set");
        assert!(highlighted.stats.is_none());
    }

    #[test]
    fn hover_leave_clears_highlight() {
        let vm = RegionMapViewModel::new();
        vm.hover_enter(1, "Таласская область".to_string(), (42.5, 72.2));
        vm.hover_leave();
        assert!(vm.highlighted.get_untracked().is_none());
    }

    #[test]
    fn search_sets_highlight_without_pointer() {
        let vm = RegionMapViewModel::new();
        let regions = collection(&[(1, "Чуйская область"), (2, "Иссык-Кульская область")]);

        vm.search_term.set("иссык".to_string());
        vm.search_submit(&regions);

        let highlighted = vm.highlighted.get_untracked().expect("highlight set");
        assert_eq!(highlighted.id, 2);
        assert!(highlighted.pointer.is_none());
    }

    #[test]
    fn failed_search_keeps_previous_highlight() {
        let vm = RegionMapViewModel::new();
        let regions = collection(&[(1, "Чуйская область")]);

        vm.hover_enter(1, "Чуйская область".to_string(), (42.9, 74.6));
        vm.search_term.set("нарын".to_string());
        vm.search_submit(&regions);

        // промах поиска не трогает текущую подсветку
        let highlighted = vm.highlighted.get_untracked().expect("highlight kept");
        assert_eq!(highlighted.id, 1);
        assert_eq!(highlighted.pointer, Some((42.9, 74.6)));
    }
}
