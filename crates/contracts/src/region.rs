use serde::{Deserialize, Serialize};

// ============================================================================
// Регионы: агрегаты по получателям + границы для карты
// ============================================================================

/// Агрегированная статистика одного региона
/// (`/recipient/get_data_from_regions/`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    pub region: i64,
    #[serde(default)]
    pub recipient_count: i64,
    #[serde(default)]
    pub recipient_male_count: i64,
    #[serde(default)]
    pub recipient_female_count: i64,
    #[serde(default)]
    pub relative_position_count: i64,
    #[serde(default)]
    pub relative_count: i64,
    #[serde(default)]
    pub payment_sum: f64,
}

/// Агрегаты региона по его id
pub fn stats_for_region(stats: &[RegionStats], region_id: i64) -> Option<&RegionStats> {
    stats.iter().find(|entry| entry.region == region_id)
}

// ----------------------------------------------------------------------------
// GeoJSON-границы, поставляемые вместе с приложением
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionProps {
    pub id: i64,
    pub name: String,
}

/// Одна фигура FeatureCollection. Геометрия не интерпретируется на Rust-стороне
/// и передаётся в движок карты как есть.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionFeature {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: RegionProps,
    pub geometry: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionCollection {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<RegionFeature>,
}

impl RegionCollection {
    /// Поиск региона по названию: подстрока без учёта регистра, побеждает
    /// первое совпадение в порядке массива.
    pub fn find_by_name(&self, term: &str) -> Option<&RegionFeature> {
        let needle = term.to_lowercase();
        self.features
            .iter()
            .find(|feature| feature.properties.name.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn finds_by_case_insensitive_substring() {
        let regions = collection(&[(1, "Чуйская область"), (2, "Иссык-Кульская область")]);
        assert_eq!(
            regions.find_by_name("иссык").map(|f| f.properties.id),
            Some(2)
        );
        // латинские названия ищутся так же
        let latin = collection(&[(1, "Chuy"), (2, "Issyk-Kul")]);
        assert_eq!(latin.find_by_name("issyk").map(|f| f.properties.id), Some(2));
        assert_eq!(latin.find_by_name("ISSYK").map(|f| f.properties.id), Some(2));
    }

    #[test]
    fn first_match_wins_in_array_order() {
        let regions = collection(&[(1, "Ошская область"), (2, "Ош")]);
        assert_eq!(regions.find_by_name("ош").map(|f| f.properties.id), Some(1));
    }

    #[test]
    fn no_match_returns_none() {
        let regions = collection(&[(1, "Таласская область")]);
        assert!(regions.find_by_name("баткен").is_none());
    }

    #[test]
    fn stats_lookup_by_region_id() {
        let stats = vec![
            RegionStats {
                region: 1,
                recipient_count: 10,
                ..Default::default()
            },
            RegionStats {
                region: 2,
                recipient_count: 25,
                ..Default::default()
            },
        ];
        assert_eq!(stats_for_region(&stats, 2).map(|s| s.recipient_count), Some(25));
        assert!(stats_for_region(&stats, 9).is_none());
    }

    #[test]
    fn decodes_stats_payload() {
        let json = r#"[{
            "region": 4,
            "recipient_count": 120,
            "recipient_male_count": 45,
            "recipient_female_count": 75,
            "relative_position_count": 310,
            "relative_count": 430,
            "payment_sum": 185000.5
        }]"#;
        let parsed: Vec<RegionStats> = serde_json::from_str(json).expect("parse");
        assert_eq!(parsed[0].region, 4);
        assert_eq!(parsed[0].relative_count, 430);
    }
}
