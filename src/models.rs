//! Response records for `/users` and `/benchmark`
//!
//! Plain value types built fresh for every request. Field names go over the
//! wire in PascalCase (`FirstName`, `IsActive`, ...).

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Synthetic user record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    /// Sequential id, starting at 1
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Linda")]
    pub first_name: String,
    #[schema(example = "Lopez")]
    pub last_name: String,
    #[schema(example = "linda.lopez1@example.com")]
    pub email: String,
    #[schema(example = "+1-201-101-1001")]
    pub phone_number: String,
    pub date_of_birth: NaiveDateTime,
    pub address: Address,
    pub company: Company,
    pub preferences: UserPreferences,
    /// LastLogin, AccountStatus, VerificationLevel, ReferralCode, CustomerSince (in that order)
    #[schema(value_type = std::collections::HashMap<String, String>)]
    pub metadata: IndexMap<String, String>,
    #[schema(example = json!(["Premium", "Enterprise", "Verified", "Active"]))]
    pub tags: Vec<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[schema(example = "101 First Avenue")]
    pub street: String,
    #[schema(example = "Columbus")]
    pub city: String,
    #[schema(example = "WI")]
    pub state: String,
    #[schema(example = "10001")]
    pub zip_code: String,
    #[schema(example = "USA")]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Company {
    #[schema(example = "GammaIndustries")]
    pub name: String,
    #[schema(example = "Administration")]
    pub department: String,
    #[schema(example = "Senior Developer")]
    pub position: String,
    /// Whole-dollar amount, emitted as a JSON integer
    #[serde(with = "whole_amount")]
    #[schema(value_type = i64, example = 40001)]
    pub salary: Decimal,
    pub start_date: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct UserPreferences {
    /// "Dark" or "Light"
    #[schema(example = "Light")]
    pub theme: String,
    /// "en", "es" or "fr"
    #[schema(example = "es")]
    pub language: String,
    pub notifications_enabled: bool,
    pub newsletter: bool,
    pub two_factor_enabled: bool,
}

/// Whole-unit currency amounts as plain JSON integers (`40001`, not `40001.0`)
mod whole_amount {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::{Deserialize, Deserializer, Serializer, ser};

    pub fn serialize<S: Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        if !amount.fract().is_zero() {
            return Err(ser::Error::custom(format!(
                "amount {} has a fractional part",
                amount
            )));
        }
        let whole = amount
            .to_i64()
            .ok_or_else(|| ser::Error::custom(format!("amount {} out of i64 range", amount)))?;
        serializer.serialize_i64(whole)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        i64::deserialize(deserializer).map(Decimal::from)
    }
}

/// Outcome of one trial-division run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct BenchmarkResult {
    /// Wall-clock time of the prime loop
    #[schema(example = 180)]
    pub execution_time_ms: i64,
    #[schema(example = 78498)]
    pub primes_found: i32,
    pub process_id: u32,
    /// Resident memory in MiB
    #[serde(rename = "WorkingSetMB")]
    #[schema(example = 12.5)]
    pub working_set_mb: f64,
}
