use serde::{Deserialize, Serialize};

// ============================================================================
// Справочники (reference lookup tables)
// ============================================================================

/// Подпись для id, которого нет в справочнике (или справочник ещё не загружен)
pub const MISSING_LABEL: &str = "N/A";

/// Одна запись справочника: числовой id и отображаемое название
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefItem {
    pub id: i64,
    pub name_ru: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_kg: Option<String>,
}

/// Ответ любого `/reference/ref_*/` endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefResponse {
    #[serde(default)]
    pub results: Vec<RefItem>,
}

/// Все справочные таблицы backend-а
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefTable {
    Region,
    City,
    Township,
    Village,
    Gender,
    Nationality,
    TerritorialObject,
    TerritorialUnit,
    RelativeType,
    PaymentStatus,
}

impl RefTable {
    pub const ALL: [RefTable; 10] = [
        RefTable::Region,
        RefTable::City,
        RefTable::Township,
        RefTable::Village,
        RefTable::Gender,
        RefTable::Nationality,
        RefTable::TerritorialObject,
        RefTable::TerritorialUnit,
        RefTable::RelativeType,
        RefTable::PaymentStatus,
    ];

    /// Путь endpoint-а относительно базового URL API
    pub fn endpoint(self) -> &'static str {
        match self {
            RefTable::Region => "/reference/ref_region/",
            RefTable::City => "/reference/ref_city/",
            RefTable::Township => "/reference/ref_township/",
            RefTable::Village => "/reference/ref_village/",
            RefTable::Gender => "/reference/ref_gender/",
            RefTable::Nationality => "/reference/ref_nationality/",
            RefTable::TerritorialObject => "/reference/ref_territorial_object/",
            RefTable::TerritorialUnit => "/reference/ref_territorial_unit/",
            RefTable::RelativeType => "/reference/ref_relative_type/",
            RefTable::PaymentStatus => "/reference/ref_payment_status/",
        }
    }
}

/// Все десять справочников, загруженные один раз на сессию.
///
/// Таблицы маленькие (десятки-сотни записей), поэтому разрешение id -> name
/// выполняется линейным поиском. Пустая таблица означает "ещё не загружено"
/// или "запрос не удался" — разрешение в обоих случаях даёт [`MISSING_LABEL`].
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    pub region: Vec<RefItem>,
    pub city: Vec<RefItem>,
    pub township: Vec<RefItem>,
    pub village: Vec<RefItem>,
    pub gender: Vec<RefItem>,
    pub nationality: Vec<RefItem>,
    pub territorial_object: Vec<RefItem>,
    pub territorial_unit: Vec<RefItem>,
    pub relative_type: Vec<RefItem>,
    pub payment_status: Vec<RefItem>,
}

impl ReferenceSet {
    pub fn table(&self, table: RefTable) -> &[RefItem] {
        match table {
            RefTable::Region => &self.region,
            RefTable::City => &self.city,
            RefTable::Township => &self.township,
            RefTable::Village => &self.village,
            RefTable::Gender => &self.gender,
            RefTable::Nationality => &self.nationality,
            RefTable::TerritorialObject => &self.territorial_object,
            RefTable::TerritorialUnit => &self.territorial_unit,
            RefTable::RelativeType => &self.relative_type,
            RefTable::PaymentStatus => &self.payment_status,
        }
    }

    pub fn insert(&mut self, table: RefTable, items: Vec<RefItem>) {
        let slot = match table {
            RefTable::Region => &mut self.region,
            RefTable::City => &mut self.city,
            RefTable::Township => &mut self.township,
            RefTable::Village => &mut self.village,
            RefTable::Gender => &mut self.gender,
            RefTable::Nationality => &mut self.nationality,
            RefTable::TerritorialObject => &mut self.territorial_object,
            RefTable::TerritorialUnit => &mut self.territorial_unit,
            RefTable::RelativeType => &mut self.relative_type,
            RefTable::PaymentStatus => &mut self.payment_status,
        };
        *slot = items;
    }

    /// Название записи по id; [`MISSING_LABEL`] если записи нет
    pub fn label(&self, table: RefTable, id: i64) -> String {
        self.table(table)
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.name_ru.clone())
            .unwrap_or_else(|| MISSING_LABEL.to_string())
    }

    /// То же для опционального id (отсутствующая ссылка -> [`MISSING_LABEL`])
    pub fn label_opt(&self, table: RefTable, id: Option<i64>) -> String {
        match id {
            Some(id) => self.label(table, id),
            None => MISSING_LABEL.to_string(),
        }
    }

    /// Пары (value, label) для `<select>`
    pub fn options(&self, table: RefTable) -> Vec<(String, String)> {
        self.table(table)
            .iter()
            .map(|item| (item.id.to_string(), item.name_ru.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str) -> RefItem {
        RefItem {
            id,
            name_ru: name.to_string(),
            name_kg: None,
        }
    }

    #[test]
    fn label_resolves_by_id() {
        let mut set = ReferenceSet::default();
        set.insert(
            RefTable::Region,
            vec![item(1, "Чуйская область"), item(2, "Ошская область")],
        );
        assert_eq!(set.label(RefTable::Region, 2), "Ошская область");
        assert_eq!(set.label_opt(RefTable::Region, Some(1)), "Чуйская область");
    }

    #[test]
    fn label_miss_falls_back_for_every_table() {
        let mut set = ReferenceSet::default();
        // одна таблица непустая, остальные не загружены
        set.insert(RefTable::Gender, vec![item(1, "Мужской")]);
        for table in RefTable::ALL {
            assert_eq!(set.label(table, 999), MISSING_LABEL);
            assert_eq!(set.label_opt(table, None), MISSING_LABEL);
        }
    }

    #[test]
    fn options_follow_table_order() {
        let mut set = ReferenceSet::default();
        set.insert(
            RefTable::PaymentStatus,
            vec![item(3, "Выплачено"), item(1, "В обработке")],
        );
        assert_eq!(
            set.options(RefTable::PaymentStatus),
            vec![
                ("3".to_string(), "Выплачено".to_string()),
                ("1".to_string(), "В обработке".to_string()),
            ]
        );
    }

    #[test]
    fn ref_response_tolerates_missing_results() {
        let parsed: RefResponse = serde_json::from_str("{}").expect("parse");
        assert!(parsed.results.is_empty());

        let parsed: RefResponse =
            serde_json::from_str(r#"{"results": [{"id": 7, "name_ru": "Село"}]}"#).expect("parse");
        assert_eq!(parsed.results[0].id, 7);
    }
}
