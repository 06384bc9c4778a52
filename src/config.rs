use dotenvy::dotenv;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::env;

/// The working-calendar constants the payroll engine computes with. Named
/// here (instead of magic numbers in the math) so tests can assert on them
/// and deployments can override them.
#[derive(Debug, Clone)]
pub struct PayrollCalendar {
    pub hours_per_day: Decimal,
    pub working_days_per_month: Decimal,
    pub overtime_multiplier: Decimal,
    pub regular_holiday_multiplier: Decimal,
    pub special_holiday_multiplier: Decimal,
}

impl Default for PayrollCalendar {
    fn default() -> Self {
        Self {
            hours_per_day: dec!(8),
            working_days_per_month: dec!(22),
            overtime_multiplier: dec!(1.25),
            regular_holiday_multiplier: dec!(2.0),
            special_holiday_multiplier: dec!(1.3),
        }
    }
}

impl PayrollCalendar {
    fn from_env() -> Self {
        let defaults = Self::default();

        fn decimal_env(key: &str, fallback: Decimal) -> Decimal {
            env::var(key)
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(fallback)
        }

        Self {
            hours_per_day: decimal_env("PAYROLL_HOURS_PER_DAY", defaults.hours_per_day),
            working_days_per_month: decimal_env(
                "PAYROLL_WORKING_DAYS_PER_MONTH",
                defaults.working_days_per_month,
            ),
            overtime_multiplier: decimal_env(
                "PAYROLL_OVERTIME_MULTIPLIER",
                defaults.overtime_multiplier,
            ),
            regular_holiday_multiplier: decimal_env(
                "PAYROLL_REGULAR_HOLIDAY_MULTIPLIER",
                defaults.regular_holiday_multiplier,
            ),
            special_holiday_multiplier: decimal_env(
                "PAYROLL_SPECIAL_HOLIDAY_MULTIPLIER",
                defaults.special_holiday_multiplier,
            ),
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_addr: String,
    pub access_token_ttl: usize,
    pub refresh_token_ttl: usize,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_register_per_min: u32,
    pub rate_refresh_per_min: u32,
    pub rate_protected_per_min: u32,

    pub api_prefix: String,

    pub payroll: PayrollCalendar,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").expect("SERVER_ADDR must be set"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            access_token_ttl: env::var("ACCESS_TOKEN_TTL")
                .unwrap_or_else(|_| "900".to_string()) // default 15 min
                .parse()
                .unwrap(),
            refresh_token_ttl: env::var("REFRESH_TOKEN_TTL")
                .unwrap_or_else(|_| "604800".to_string()) // default 7 days
                .parse()
                .unwrap(),

            rate_login_per_min: env::var("RATE_LOGIN_PER_MIN")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap(),
            rate_register_per_min: env::var("RATE_REGISTER_PER_MIN")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap(),
            rate_refresh_per_min: env::var("RATE_REFRESH_PER_MIN")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap(),
            rate_protected_per_min: env::var("RATE_PROTECTED_PER_MIN")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .unwrap(),

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),

            payroll: PayrollCalendar::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_defaults_match_the_working_month() {
        let calendar = PayrollCalendar::default();
        assert_eq!(calendar.hours_per_day, dec!(8));
        assert_eq!(calendar.working_days_per_month, dec!(22));
        assert_eq!(calendar.overtime_multiplier, dec!(1.25));
        assert_eq!(calendar.regular_holiday_multiplier, dec!(2.0));
        assert_eq!(calendar.special_holiday_multiplier, dec!(1.3));
        // 8h × 22 days = the 176-hour divisor behind hourly rates
        assert_eq!(
            calendar.hours_per_day * calendar.working_days_per_month,
            dec!(176)
        );
    }
}
