/// Длина ПИН гражданина
pub const PIN_LENGTH: usize = 14;

/// Текст ошибки валидации ПИН
pub const PIN_ERROR: &str = "ПИН не содержит 14 символов";

/// Плоское состояние фильтров поиска получателей.
///
/// Пустая строка означает "фильтр не применён". Порядок полей фиксирован и
/// определяет порядок параметров в исходящем запросе.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub payment_status: String,
    pub nationality: String,
    pub gender: String,
    pub region: String,
    pub city: String,
    pub township: String,
    pub village: String,
    pub relative: String,
    pub search: String,
    pub pin: String,
    pub page: String,
    pub page_size: String,
    pub territorial_object: String,
    pub territorial_unit: String,
}

impl FilterState {
    /// Пары (имя, значение) в порядке объявления полей
    pub fn entries(&self) -> [(&'static str, &str); 14] {
        [
            ("payment_status", self.payment_status.as_str()),
            ("nationality", self.nationality.as_str()),
            ("gender", self.gender.as_str()),
            ("region", self.region.as_str()),
            ("city", self.city.as_str()),
            ("township", self.township.as_str()),
            ("village", self.village.as_str()),
            ("relative", self.relative.as_str()),
            ("search", self.search.as_str()),
            ("pin", self.pin.as_str()),
            ("page", self.page.as_str()),
            ("page_size", self.page_size.as_str()),
            ("territorial_object", self.territorial_object.as_str()),
            ("territorial_unit", self.territorial_unit.as_str()),
        ]
    }

    /// Установка поля по имени; неизвестные имена игнорируются
    pub fn set(&mut self, name: &str, value: String) {
        match name {
            "payment_status" => self.payment_status = value,
            "nationality" => self.nationality = value,
            "gender" => self.gender = value,
            "region" => self.region = value,
            "city" => self.city = value,
            "township" => self.township = value,
            "village" => self.village = value,
            "relative" => self.relative = value,
            "search" => self.search = value,
            "pin" => self.pin = value,
            "page" => self.page = value,
            "page_size" => self.page_size = value,
            "territorial_object" => self.territorial_object = value,
            "territorial_unit" => self.territorial_unit = value,
            _ => {}
        }
    }

    /// Ошибка валидации ПИН: непустое значение не из 14 символов.
    /// Пока ошибка не исправлена, запрос не отправляется.
    pub fn pin_error(&self) -> Option<&'static str> {
        let len = self.pin.chars().count();
        if len > 0 && len != PIN_LENGTH {
            Some(PIN_ERROR)
        } else {
            None
        }
    }

    /// Строка запроса: непустые поля как `key=value`, соединённые `&`,
    /// в порядке объявления; значения URL-кодируются.
    pub fn query_string(&self) -> String {
        self.entries()
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Число применённых фильтров (для бейджа на панели)
    pub fn active_count(&self) -> usize {
        self.entries()
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_produces_empty_query() {
        let state = FilterState::default();
        assert_eq!(state.query_string(), "");
        assert_eq!(state.active_count(), 0);
    }

    #[test]
    fn query_contains_only_non_empty_fields_in_order() {
        let mut state = FilterState::default();
        state.set("region", "4".to_string());
        state.set("payment_status", "1".to_string());
        state.set("pin", "21503198700123".to_string());

        // порядок объявления полей, а не порядок установки
        assert_eq!(
            state.query_string(),
            "payment_status=1&region=4&pin=21503198700123"
        );
        assert_eq!(state.active_count(), 3);
    }

    #[test]
    fn clearing_a_field_removes_it_from_query() {
        let mut state = FilterState::default();
        state.set("gender", "2".to_string());
        state.set("gender", String::new());
        assert_eq!(state.query_string(), "");
    }

    #[test]
    fn values_are_url_encoded() {
        let mut state = FilterState::default();
        state.set("search", "Асанова Айгуль".to_string());
        let query = state.query_string();
        assert!(query.starts_with("search="));
        assert!(!query.contains(' '));
        assert_eq!(
            query,
            format!("search={}", urlencoding::encode("Асанова Айгуль"))
        );
    }

    #[test]
    fn unknown_field_is_ignored() {
        let mut state = FilterState::default();
        state.set("unknown", "x".to_string());
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn pin_shorter_than_14_is_invalid() {
        for len in 1..PIN_LENGTH {
            let mut state = FilterState::default();
            state.set("pin", "1".repeat(len));
            assert_eq!(state.pin_error(), Some(PIN_ERROR), "len {}", len);
        }
    }

    #[test]
    fn pin_empty_or_14_chars_is_valid() {
        let mut state = FilterState::default();
        assert_eq!(state.pin_error(), None);

        state.set("pin", "2".repeat(PIN_LENGTH));
        assert_eq!(state.pin_error(), None);
        assert_eq!(state.query_string(), format!("pin={}", "2".repeat(14)));
    }

    #[test]
    fn pin_longer_than_14_is_invalid() {
        let mut state = FilterState::default();
        state.set("pin", "3".repeat(PIN_LENGTH + 1));
        assert_eq!(state.pin_error(), Some(PIN_ERROR));
    }

    #[test]
    fn pin_length_is_counted_in_characters() {
        // кириллица: байтов больше, чем символов
        let mut state = FilterState::default();
        state.set("pin", "А".repeat(PIN_LENGTH));
        assert_eq!(state.pin_error(), None);
    }
}
