use catalog_types::to_cents;

/// Format an amount as US dollars: `1234.5` -> `$1,234.50`.
pub fn format_usd(amount: f64) -> String {
    if let Some(cents) = to_cents(amount) {
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.unsigned_abs();
        let dollars = (cents / 100).to_string();
        return format!("{}${}.{:02}", sign, group_thousands(&dollars), cents % 100);
    }

    if !amount.is_finite() {
        return "$0.00".to_string();
    }

    // No cents survive at this magnitude; print the whole dollars exactly.
    let sign = if amount < 0.0 { "-" } else { "" };
    let dollars = format!("{:.0}", amount.abs());
    format!("{}${}.00", sign, group_thousands(&dollars))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
