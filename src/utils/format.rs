//! Rounding and label formatting shared by both calculators

/// Round to one decimal place (half away from zero)
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Human age label from whole months, e.g. "1 year 3 months", "2 years", "9 months"
pub fn age_label(age_months: f64) -> String {
    let total = age_months.max(0.0).floor() as u32;
    let years = total / 12;
    let months = total % 12;

    if years == 0 {
        return format!("{} month{}", total, plural(total));
    }

    let mut label = format!("{} year{}", years, plural(years));
    if months > 0 {
        label.push_str(&format!(" {} month{}", months, plural(months)));
    }
    label
}
