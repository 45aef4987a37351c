use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use uuid::Uuid;

pub use models::beer_style::BeerStyle;

/// The persisted beer record.
///
/// `id`, `version` and both timestamps stay `None` until the repository has
/// stored the beer once. Everything else is plain data; input checks live on
/// [`crate::beer::dto::BeerDto`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Beer {
    pub id: Option<Uuid>,
    pub version: Option<i32>,
    pub created_date: Option<DateTime<FixedOffset>>,
    pub last_modified_date: Option<DateTime<FixedOffset>>,
    pub beer_name: String,
    pub beer_style: Option<BeerStyle>,
    pub upc: i64,
    pub price: Decimal,
    pub quantity_to_brew: i32,
    pub min_on_hand: i32,
    pub quantity_on_hand: i32,
}

impl Beer {
    pub fn builder() -> BeerBuilder {
        BeerBuilder::default()
    }
}

/// Partial construction for seed data and fixtures; unset fields keep their
/// `Default` value.
#[derive(Debug, Default)]
pub struct BeerBuilder {
    beer: Beer,
}

impl BeerBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.beer.id = Some(id);
        self
    }

    pub fn version(mut self, version: i32) -> Self {
        self.beer.version = Some(version);
        self
    }

    pub fn created_date(mut self, at: DateTime<FixedOffset>) -> Self {
        self.beer.created_date = Some(at);
        self
    }

    pub fn last_modified_date(mut self, at: DateTime<FixedOffset>) -> Self {
        self.beer.last_modified_date = Some(at);
        self
    }

    pub fn beer_name(mut self, name: impl Into<String>) -> Self {
        self.beer.beer_name = name.into();
        self
    }

    pub fn beer_style(mut self, style: BeerStyle) -> Self {
        self.beer.beer_style = Some(style);
        self
    }

    pub fn upc(mut self, upc: i64) -> Self {
        self.beer.upc = upc;
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.beer.price = price;
        self
    }

    pub fn quantity_to_brew(mut self, quantity: i32) -> Self {
        self.beer.quantity_to_brew = quantity;
        self
    }

    pub fn min_on_hand(mut self, quantity: i32) -> Self {
        self.beer.min_on_hand = quantity;
        self
    }

    pub fn quantity_on_hand(mut self, quantity: i32) -> Self {
        self.beer.quantity_on_hand = quantity;
        self
    }

    pub fn build(self) -> Beer {
        self.beer
    }
}
