//! Display formatting for the dashboard: BRL currency, quantities and
//! relative trade timestamps. Kept out of the view layer so fixtures can
//! pin the exact strings.

use chrono::{DateTime, Duration, Utc};

/// Format a value as Brazilian real: `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac:02}")
}

/// Compact axis label: `R$612k`.
pub fn format_axis_price(value: f64) -> String {
    format!("R${:.0}k", value / 1000.0)
}

/// Trade quantity, 8 decimals (satoshi resolution).
pub fn format_quantity(quantity: f64) -> String {
    format!("{quantity:.8}")
}

/// Wallet position, 6 decimals plus unit.
pub fn format_holdings(holdings: f64) -> String {
    format!("{holdings:.6} BTC")
}

/// Relative fill timestamp: "Today, 10:00:03", "Yesterday, …" or a full
/// date. Dates compare in UTC; both arguments come from the same clock so
/// the comparison stays pure.
pub fn format_trade_date(filled_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let time = filled_at.format("%H:%M:%S");
    let date = filled_at.date_naive();
    if date == now.date_naive() {
        format!("Today, {time}")
    } else if date == (now - Duration::days(1)).date_naive() {
        format!("Yesterday, {time}")
    } else {
        format!("{}, {time}", filled_at.format("%d/%m/%Y"))
    }
}

/// CSS class for a backend log line; ERROR lines get highlighted.
pub fn log_tone_class(line: &str) -> &'static str {
    if line.contains("ERROR") {
        "log-line log-error"
    } else {
        "log-line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brl_grouping_and_decimals() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(1234.5), "R$ 1.234,50");
        assert_eq!(format_brl(612_345.678), "R$ 612.345,68");
        assert_eq!(format_brl(-42.0), "-R$ 42,00");
        assert_eq!(format_brl(1_000_000.0), "R$ 1.000.000,00");
    }

    #[test]
    fn axis_price_in_thousands() {
        assert_eq!(format_axis_price(612_000.0), "R$612k");
    }

    #[test]
    fn quantities() {
        assert_eq!(format_quantity(0.001), "0.00100000");
        assert_eq!(format_holdings(0.0015), "0.001500 BTC");
    }

    #[test]
    fn trade_dates_relative_to_now() {
        let now: DateTime<Utc> = "2024-01-15T18:00:00Z".parse().unwrap();
        let today: DateTime<Utc> = "2024-01-15T10:00:03Z".parse().unwrap();
        let yesterday: DateTime<Utc> = "2024-01-14T23:59:59Z".parse().unwrap();
        let older: DateTime<Utc> = "2023-12-31T08:30:00Z".parse().unwrap();
        assert_eq!(format_trade_date(today, now), "Today, 10:00:03");
        assert_eq!(format_trade_date(yesterday, now), "Yesterday, 23:59:59");
        assert_eq!(format_trade_date(older, now), "31/12/2023, 08:30:00");
    }

    #[test]
    fn error_logs_highlighted() {
        assert_eq!(log_tone_class("[ERROR] feed stalled"), "log-line log-error");
        assert_eq!(log_tone_class("[INFO] tick"), "log-line");
    }
}
