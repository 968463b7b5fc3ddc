use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Получатель пособия и связанные записи
// ============================================================================

/// Вложенное справочное значение, которое backend отдаёт прямо в записи
/// получателя (статус платежа, национальность, пол)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefValue {
    pub id: i64,
    pub name_ru: String,
}

/// Адрес получателя: ссылки на справочники + координаты точки
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub region: Option<i64>,
    #[serde(default)]
    pub city: Option<i64>,
    #[serde(default)]
    pub township: Option<i64>,
    #[serde(default)]
    pub village: Option<i64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub second_name: String,
    #[serde(default)]
    pub third_name: String,
    #[serde(default)]
    pub pin: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub payment_sum: Option<f64>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub payment_status: Option<RefValue>,
    #[serde(default)]
    pub nationality: Option<RefValue>,
    #[serde(default)]
    pub gender: Option<RefValue>,
    #[serde(default)]
    pub relative: Vec<Relative>,
}

impl Recipient {
    /// ФИО одной строкой; пустые части пропускаются
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.second_name, &self.third_name]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relative {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub second_name: String,
    #[serde(default)]
    pub third_name: String,
    #[serde(default)]
    pub pin: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub relative_type: Option<i64>,
}

impl Relative {
    pub fn full_name(&self) -> String {
        [&self.first_name, &self.second_name, &self.third_name]
            .iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Подпись типа родственника. Код 1 — сын, любой другой код (в том числе
/// отсутствующий) — дочь: ветка намеренно неисчерпывающая, поведение
/// сохранено как в действующей системе.
pub fn relative_type_label(code: Option<i64>) -> &'static str {
    match code {
        Some(1) => "Сын",
        _ => "Дочь",
    }
}

/// Запись истории платежей (`get_recipient_payment_history`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentHistoryEntry {
    pub created_date: String,
    #[serde(default)]
    pub payment_sum: f64,
}

/// Ответ списочного endpoint-а `/recipient/recipient/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipientListResponse {
    #[serde(default)]
    pub results: Vec<Recipient>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_type_one_is_son() {
        assert_eq!(relative_type_label(Some(1)), "Сын");
    }

    #[test]
    fn relative_type_everything_else_is_daughter() {
        // неисчерпывающая ветка действующей системы: 2, 0 и отсутствие кода
        // дают одинаковый результат
        assert_eq!(relative_type_label(Some(2)), "Дочь");
        assert_eq!(relative_type_label(Some(0)), "Дочь");
        assert_eq!(relative_type_label(None), "Дочь");
    }

    #[test]
    fn full_name_skips_empty_parts() {
        let recipient: Recipient = serde_json::from_str(
            r#"{"id": 1, "first_name": "Айгуль", "second_name": "Асанова", "third_name": ""}"#,
        )
        .expect("parse");
        assert_eq!(recipient.full_name(), "Айгуль Асанова");
    }

    #[test]
    fn decodes_list_response() {
        let json = r#"{
            "results": [{
                "id": 42,
                "first_name": "Азамат",
                "second_name": "Бекова",
                "third_name": "Уулу",
                "pin": "21503198700123",
                "date_of_birth": "1987-03-15",
                "payment_sum": 1200.0,
                "address": {"region": 4, "city": 11, "latitude": 42.87, "longitude": 74.59},
                "payment_status": {"id": 1, "name_ru": "Выплачено"},
                "relative": [
                    {"id": 1, "first_name": "Нурлан", "pin": "", "relative_type": 1}
                ]
            }]
        }"#;
        let parsed: RecipientListResponse = serde_json::from_str(json).expect("parse");
        let recipient = &parsed.results[0];
        assert_eq!(recipient.pin.len(), 14);
        assert_eq!(recipient.address.as_ref().and_then(|a| a.region), Some(4));
        assert_eq!(
            recipient.payment_status.as_ref().map(|s| s.name_ru.as_str()),
            Some("Выплачено")
        );
        assert_eq!(recipient.relative.len(), 1);
        assert_eq!(relative_type_label(recipient.relative[0].relative_type), "Сын");
    }

    #[test]
    fn decodes_sparse_record() {
        // detail endpoint может отдать запись без адреса и родственников
        let parsed: Recipient = serde_json::from_str(r#"{"id": 7}"#).expect("parse");
        assert!(parsed.address.is_none());
        assert!(parsed.relative.is_empty());
        assert_eq!(parsed.full_name(), "");
    }

    #[test]
    fn decodes_payment_history() {
        let json = r#"[
            {"created_date": "2024-01-05", "payment_sum": 1200.0},
            {"created_date": "2024-02-05", "payment_sum": 1200.0}
        ]"#;
        let parsed: Vec<PaymentHistoryEntry> = serde_json::from_str(json).expect("parse");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].created_date, "2024-01-05");
    }
}
