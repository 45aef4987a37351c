//! Wire representation of a beer.
//!
//! Every field is optional so that a missing value reaches [`BeerDto::validate`]
//! and is reported as a violation instead of failing JSON decoding. Server-owned
//! fields (`id`, `version`, both dates, `quantityOnHand`) are accepted on input
//! but never read from it.

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::domain::BeerStyle;
use super::errors::ValidationErrors;

pub const BEER_NAME_MAX_LEN: usize = 255;
pub const PRICE_SCALE: u32 = 2;
/// Integer digits that fit the `NUMERIC(19,2)` price column.
pub const PRICE_MAX_INTEGER_DIGITS: u32 = 17;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    pub id: Option<Uuid>,
    pub version: Option<i32>,
    pub created_date: Option<DateTime<FixedOffset>>,
    pub last_modified_date: Option<DateTime<FixedOffset>>,
    pub beer_name: Option<String>,
    /// Symbolic style name, e.g. `LAGER`.
    pub beer_style: Option<String>,
    pub upc: Option<i64>,
    #[serde(
        default,
        serialize_with = "rust_decimal::serde::arbitrary_precision_option::serialize",
        deserialize_with = "price_from_json"
    )]
    pub price: Option<Decimal>,
    pub quantity_on_hand: Option<i32>,
}

// Written as an exact JSON number; read from a number or a numeric string
// without passing through f64.
fn price_from_json<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Decimal>, D::Error> {
    #[derive(Deserialize)]
    struct Exact(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal);

    Ok(Option::<Exact>::deserialize(d)?.map(|p| p.0))
}

fn price_upper_bound() -> Decimal {
    Decimal::from(10i64.pow(PRICE_MAX_INTEGER_DIGITS))
}

impl BeerDto {
    /// Check the client-controlled fields, collecting every violation.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errs = ValidationErrors::default();

        match self.beer_name.as_deref() {
            None => errs.push("beerName", "required", "beerName is required"),
            Some(name) if name.trim().is_empty() => {
                errs.push("beerName", "not_blank", "beerName must not be blank")
            }
            Some(name) if name.chars().count() > BEER_NAME_MAX_LEN => errs.push(
                "beerName",
                "max_length",
                format!("beerName must be at most {BEER_NAME_MAX_LEN} characters"),
            ),
            Some(_) => {}
        }

        match self.beer_style.as_deref() {
            None => errs.push("beerStyle", "required", "beerStyle is required"),
            Some(style) if style.parse::<BeerStyle>().is_err() => errs.push(
                "beerStyle",
                "one_of",
                format!("beerStyle '{style}' is not a known style"),
            ),
            Some(_) => {}
        }

        match self.upc {
            None => errs.push("upc", "required", "upc is required"),
            Some(upc) if upc < 0 => errs.push("upc", "non_negative", "upc must not be negative"),
            Some(_) => {}
        }

        match self.price {
            None => errs.push("price", "required", "price is required"),
            Some(price) if price <= Decimal::ZERO => {
                errs.push("price", "positive", "price must be greater than 0")
            }
            Some(price) if price >= price_upper_bound() => errs.push(
                "price",
                "max",
                format!("price must have at most {PRICE_MAX_INTEGER_DIGITS} integer digits"),
            ),
            Some(price) if price.normalize().scale() > PRICE_SCALE => errs.push(
                "price",
                "fraction_digits",
                format!("price must have at most {PRICE_SCALE} fractional digits"),
            ),
            Some(_) => {}
        }

        if errs.is_empty() { Ok(()) } else { Err(errs) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> BeerDto {
        BeerDto {
            beer_name: Some("Mönchsambacher Weizen".into()),
            beer_style: Some("WEIZEN_HELL".into()),
            upc: Some(123123123123),
            price: Some(Decimal::new(999, 2)),
            ..Default::default()
        }
    }

    #[test]
    fn valid_dto_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn server_owned_fields_are_not_checked() {
        let dto = BeerDto { version: Some(-5), quantity_on_hand: Some(-1), ..valid() };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn empty_dto_reports_every_required_field() {
        let errs = BeerDto::default().validate().unwrap_err();
        assert_eq!(errs.violations.len(), 4);
        for field in ["beerName", "beerStyle", "upc", "price"] {
            assert!(errs.has(field, "required"), "missing required violation for {field}");
        }
    }

    #[test]
    fn blank_name_unknown_style_bad_numbers() {
        let dto = BeerDto {
            beer_name: Some("   ".into()),
            beer_style: Some("Lagerbier".into()),
            upc: Some(-1),
            price: Some(Decimal::ZERO),
            ..Default::default()
        };
        let errs = dto.validate().unwrap_err();
        assert!(errs.has("beerName", "not_blank"));
        assert!(errs.has("beerStyle", "one_of"));
        assert!(errs.has("upc", "non_negative"));
        assert!(errs.has("price", "positive"));
    }

    #[test]
    fn price_scale_is_limited_after_normalizing() {
        let ok = BeerDto { price: Some("12.950".parse().unwrap()), ..valid() };
        assert!(ok.validate().is_ok());
        let too_fine = BeerDto { price: Some("12.955".parse().unwrap()), ..valid() };
        assert!(too_fine.validate().unwrap_err().has("price", "fraction_digits"));
    }

    #[test]
    fn price_beyond_column_range_is_rejected() {
        let widest = BeerDto { price: Some("99999999999999999.99".parse().unwrap()), ..valid() };
        assert!(widest.validate().is_ok());
        let too_big = BeerDto { price: Some("100000000000000000.00".parse().unwrap()), ..valid() };
        let errs = too_big.validate().unwrap_err();
        assert!(errs.has("price", "max"));
        assert_eq!(errs.violations.len(), 1);
    }

    #[test]
    fn large_price_survives_json_exactly() {
        let raw = r#"{"beerName":"Lager","beerStyle":"LAGER","upc":1,"price":9999999999999999.99}"#;
        let dto: BeerDto = serde_json::from_str(raw).unwrap();
        let expected: Decimal = "9999999999999999.99".parse().unwrap();
        assert_eq!(dto.price, Some(expected));
        assert!(dto.validate().is_ok());

        let wire = serde_json::to_string(&dto).unwrap();
        assert!(wire.contains(r#""price":9999999999999999.99"#), "wire form {wire}");
        let back: BeerDto = serde_json::from_str(&wire).unwrap();
        assert_eq!(back.price, Some(expected));
    }

    #[test]
    fn price_accepts_numeric_string_and_null() {
        let dto: BeerDto = serde_json::from_str(r#"{"price":"14.95"}"#).unwrap();
        assert_eq!(dto.price, Some(Decimal::new(1495, 2)));
        let dto: BeerDto = serde_json::from_str(r#"{"price":null}"#).unwrap();
        assert_eq!(dto.price, None);
        assert!(serde_json::from_str::<BeerDto>(r#"{"price":"cheap"}"#).is_err());
    }

    #[test]
    fn json_uses_camel_case_and_numeric_price() {
        let dto: BeerDto = serde_json::from_value(json!({
            "beerName": "Lager",
            "beerStyle": "LAGER",
            "upc": 1900024312001i64,
            "price": 12.95
        }))
        .unwrap();
        assert_eq!(dto.price, Some(Decimal::new(1295, 2)));
        assert_eq!(dto.upc, Some(1900024312001));

        let out = serde_json::to_value(&dto).unwrap();
        assert_eq!(out["beerName"], "Lager");
        assert_eq!(out["price"], json!(12.95));
        assert!(out["id"].is_null());
        assert!(out["quantityOnHand"].is_null());
    }
}
