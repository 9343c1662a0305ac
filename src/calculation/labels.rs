//! Label translation.
//!
//! The HR system names statement fields with Japanese payroll terms. The
//! statement is drawn with a built-in Latin font, so each known term is
//! rendered as its romanization followed by an English gloss.

/// Statement title.
pub const TITLE: &str = "給与支給明細書";
/// Payment table header.
pub const PAYMENT: &str = "支給額";
/// Deduction table header.
pub const DEDUCTION: &str = "控除額";
/// Amount column header.
pub const AMOUNT: &str = "金額";
/// Base salary line.
pub const BASE_SALARY: &str = "基本給";
/// Overtime allowance line.
pub const OVERTIME_ALLOWANCE: &str = "残業手当";
/// Commuting allowance line.
pub const COMMUTING_ALLOWANCE: &str = "通勤手当";
/// Health insurance line.
pub const HEALTH_INSURANCE: &str = "健康保険";
/// Pension line.
pub const PENSION: &str = "厚生年金";
/// Employment insurance line.
pub const EMPLOYMENT_INSURANCE: &str = "雇用保険";
/// Income tax line.
pub const INCOME_TAX: &str = "所得税";
/// Resident tax line.
pub const RESIDENT_TAX: &str = "住民税";
/// Total row of either table.
pub const TOTAL: &str = "計";
/// Net pay box.
pub const NET_PAY: &str = "差引支給額";
/// Employee name caption.
pub const NAME: &str = "氏名";
/// Employee code caption.
pub const EMPLOYEE_ID: &str = "社員番号";
/// Payment date caption.
pub const PAYMENT_DATE: &str = "支給年月日";
/// Generation timestamp caption.
pub const GENERATED: &str = "生成日";
/// Year unit.
pub const YEAR: &str = "年";
/// Month unit.
pub const MONTH: &str = "月";
/// Day unit.
pub const DAY: &str = "日";
/// "For the month of" unit used in the period line.
pub const MONTH_PERIOD: &str = "月分";

/// Translates a domain label into its display string.
///
/// Unknown labels come back unchanged, so amounts and free text can be
/// passed through the same call.
///
/// # Examples
///
/// ```
/// use statement_engine::calculation::translate;
///
/// assert_eq!(translate("計"), "Kei (Total)");
/// assert_eq!(translate("unknown-key-xyz"), "unknown-key-xyz");
/// ```
pub fn translate(label: &str) -> &str {
    match label {
        TITLE => "Kyuyo Shikyu Meisaisho (Salary Statement)",
        PAYMENT => "Shikyugaku (Payment)",
        DEDUCTION => "Kojogaku (Deduction)",
        AMOUNT => "Kingaku (Amount)",
        BASE_SALARY => "Kihonkyu (Base Salary)",
        OVERTIME_ALLOWANCE => "Zangyou Teate (Overtime)",
        COMMUTING_ALLOWANCE => "Tsukkin Teate (Commute)",
        HEALTH_INSURANCE => "Kenkou Hoken (Health Insurance)",
        PENSION => "Kousei Nenkin (Pension)",
        EMPLOYMENT_INSURANCE => "Koyou Hoken (Employment Insurance)",
        INCOME_TAX => "Shotokuzei (Income Tax)",
        RESIDENT_TAX => "Juminzei (Resident Tax)",
        TOTAL => "Kei (Total)",
        NET_PAY => "Sashihiki Shikyugaku (Net Pay)",
        NAME => "Shimei (Name)",
        EMPLOYEE_ID => "Shain Bangou (Employee ID)",
        PAYMENT_DATE => "Shikyu Nengappi (Payment Date)",
        GENERATED => "Seisei-bi (Generated Date)",
        YEAR => "nen (Year)",
        MONTH => "gatsu (Month)",
        DAY => "nichi (Day)",
        MONTH_PERIOD => "gatsubun (Month Period)",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_LABELS: [&str; 22] = [
        TITLE,
        PAYMENT,
        DEDUCTION,
        AMOUNT,
        BASE_SALARY,
        OVERTIME_ALLOWANCE,
        COMMUTING_ALLOWANCE,
        HEALTH_INSURANCE,
        PENSION,
        EMPLOYMENT_INSURANCE,
        INCOME_TAX,
        RESIDENT_TAX,
        TOTAL,
        NET_PAY,
        NAME,
        EMPLOYEE_ID,
        PAYMENT_DATE,
        GENERATED,
        YEAR,
        MONTH,
        DAY,
        MONTH_PERIOD,
    ];

    /// TR-001: the total label translates to a fixed, distinct string
    #[test]
    fn test_total_label_translates() {
        let translated = translate("計");
        assert!(!translated.is_empty());
        assert_ne!(translated, "計");
        assert_eq!(translated, "Kei (Total)");
    }

    /// TR-002: unknown labels fall back to identity
    #[test]
    fn test_unknown_label_is_identity() {
        assert_eq!(translate("unknown-key-xyz"), "unknown-key-xyz");
        assert_eq!(translate(""), "");
        assert_eq!(translate("¥330,000"), "¥330,000");
    }

    /// TR-003: every known label has a translation distinct from itself
    #[test]
    fn test_every_known_label_is_translated() {
        for label in ALL_LABELS {
            let translated = translate(label);
            assert_ne!(translated, label, "label {} was not translated", label);
            assert!(translated.is_ascii(), "translation of {} is not ASCII", label);
        }
    }

    #[test]
    fn test_month_and_month_period_are_distinct() {
        assert_eq!(translate(MONTH), "gatsu (Month)");
        assert_eq!(translate(MONTH_PERIOD), "gatsubun (Month Period)");
    }
}
