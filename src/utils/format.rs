// ============================================================================
// FORMAT - Fechas, horas e importes para mostrar
// ============================================================================

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// "$19.50"; null → "$0.00"
pub fn format_currency(amount: Option<f64>) -> String {
    let amount = amount.filter(|a| a.is_finite()).unwrap_or(0.0);
    format!("${:.2}", amount)
}

/// Fecha larga ("May 1, 2024"). Acepta ISO, ISO con hora y el formato
/// RFC 2822 que devuelve el backend para columnas DATE. Si no se entiende,
/// se devuelve tal cual.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Hora en 12h ("02:30 PM"); si no se entiende, tal cual
pub fn format_time(raw: &str) -> String {
    match parse_time(raw) {
        Some(time) => time.format("%I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

/// Día siguiente en formato YYYY-MM-DD (valor por defecto del diálogo de reserva)
pub fn tomorrow_date(today: NaiveDate) -> String {
    today
        .succ_opt()
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|dt| dt.date_naive())
}

pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency() {
        assert_eq!(format_currency(None), "$0.00");
        assert_eq!(format_currency(Some(19.5)), "$19.50");
        assert_eq!(format_currency(Some(1234.567)), "$1234.57");
        assert_eq!(format_currency(Some(f64::NAN)), "$0.00");
    }

    #[test]
    fn long_dates() {
        assert_eq!(format_date("2024-05-01"), "May 1, 2024");
        assert_eq!(format_date("2024-12-25 09:00:00"), "December 25, 2024");
        assert_eq!(format_date("Wed, 01 May 2024 00:00:00 GMT"), "May 1, 2024");
        assert_eq!(format_date("someday"), "someday");
    }

    #[test]
    fn twelve_hour_times() {
        assert_eq!(format_time("14:30"), "02:30 PM");
        assert_eq!(format_time("09:05:00"), "09:05 AM");
        assert_eq!(format_time("later"), "later");
    }

    #[test]
    fn tomorrow_crosses_month_and_year() {
        let eom = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(tomorrow_date(eom), "2024-02-01");
        let eoy = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(tomorrow_date(eoy), "2025-01-01");
    }
}
