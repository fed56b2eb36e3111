//! Display formatting for prices and counts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group digits with commas: `1250` -> `"1,250"`.
pub fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Monthly rent label: `"$1,250/mo"`.
pub fn monthly_price(amount: u32) -> String {
    format!("${}/mo", thousands(amount))
}

/// Plan price label; zero reads as `"Free"`.
pub fn plan_price(amount: u32) -> String {
    if amount == 0 { "Free".to_owned() } else { monthly_price(amount) }
}

/// `"1 bed"` / `"3 beds"`.
pub fn plural(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 { format!("{count} {singular}") } else { format!("{count} {plural}") }
}
