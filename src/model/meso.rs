//! Display formatting for meso amounts.
//!
//! Korean groups large numbers by 만 (10^4) and 억 (10^8). Amounts are floored to whole
//! 만 before formatting; the payout model itself keeps full precision.

const MAN: f64 = 10_000.0;
const EOK_IN_MAN: u64 = 10_000;

/// Formats a meso amount as `"{억}억 {만}만 메소"`.
///
/// ```
/// use meyoil::model::meso::format_meso;
///
/// assert_eq!(format_meso(800_000_000.0), "8억 메소");
/// assert_eq!(format_meso(250_000_000.0), "2억 5000만 메소");
/// assert_eq!(format_meso(37_500_000.0), "3750만 메소");
/// ```
pub fn format_meso(meso: f64) -> String {
    let man = if meso.is_finite() && meso > 0.0 {
        (meso / MAN).floor() as u64
    } else {
        0
    };

    if man >= EOK_IN_MAN {
        let eok = man / EOK_IN_MAN;
        let remaining_man = man % EOK_IN_MAN;

        if remaining_man == 0 {
            format!("{}억 메소", eok)
        } else {
            format!("{}억 {}만 메소", eok, remaining_man)
        }
    } else {
        format!("{}만 메소", man)
    }
}

/// Compact label used next to each difficulty tier in the boss picker.
pub fn format_meso_short(meso: u64) -> String {
    if meso >= 100_000_000 {
        format!("{:.1}억", meso as f64 / 100_000_000.0)
    } else if meso >= 10_000_000 {
        format!("{}천만", meso / 10_000_000)
    } else if meso >= 1_000_000 {
        format!("{}백만", meso / 1_000_000)
    } else {
        group_digits(meso)
    }
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
