//! en-US display formatting for grades, money, dates, and counts.

use chrono::{DateTime, NaiveDate};

/// Letter grade for a percentage score.
pub fn format_grade(score: f64) -> char {
	match score {
		s if s >= 90.0 => 'A',
		s if s >= 80.0 => 'B',
		s if s >= 70.0 => 'C',
		s if s >= 60.0 => 'D',
		_ => 'F',
	}
}

/// Group an integer's digits in threes: `12500` -> `"12,500"`.
pub fn format_thousands(n: i64) -> String {
	let digits = n.unsigned_abs().to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
	if n < 0 {
		out.push('-');
	}
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	out
}

/// US dollar amount with cents: `1234.5` -> `"$1,234.50"`, `-12.0` -> `"-$12.00"`.
pub fn format_currency(amount: f64) -> String {
	let cents = (amount.abs() * 100.0).round() as i64;
	let sign = if amount < 0.0 && cents != 0 { "-" } else { "" };
	format!(
		"{}${}.{:02}",
		sign,
		format_thousands(cents / 100),
		cents % 100
	)
}

/// Long US date: `January 5, 2024`.
pub fn format_date(date: NaiveDate) -> String {
	date.format("%B %-d, %Y").to_string()
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp into a calendar date.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
	let input = input.trim();
	NaiveDate::parse_from_str(input, "%Y-%m-%d")
		.ok()
		.or_else(|| {
			DateTime::parse_from_rfc3339(input)
				.ok()
				.map(|dt| dt.date_naive())
		})
}
