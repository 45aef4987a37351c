use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Wire form of a beer. On input `id`, `version`, both dates and
/// `quantityOnHand` are ignored.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerDtoDoc {
    /// Id of Beer
    pub id: Option<Uuid>,
    /// Version number
    pub version: Option<i32>,
    /// Date when entry was created
    pub created_date: Option<DateTime<FixedOffset>>,
    /// Date when entry was updated the last time
    pub last_modified_date: Option<DateTime<FixedOffset>>,
    /// Name of the beer; required, not blank
    #[schema(example = "Mönchsambacher Lager", max_length = 255)]
    pub beer_name: String,
    /// Style of the beer, by symbolic name
    #[schema(example = "LAGER")]
    pub beer_style: String,
    /// UPC of the beer; not negative
    #[schema(minimum = 0)]
    pub upc: i64,
    /// Price, greater than 0 and below 10^17, with at most two decimals
    #[schema(example = 12.95)]
    pub price: f64,
    /// Quantity on hand
    pub quantity_on_hand: Option<i32>,
}

#[derive(ToSchema)]
pub struct FieldViolationDoc { pub field: String, pub rule: String, pub message: String }

#[derive(ToSchema)]
pub struct ErrorResponseDoc {
    pub error: String,
    pub detail: Option<String>,
    pub violations: Vec<FieldViolationDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::beers::get_beer_by_id,
        crate::routes::beers::save_new_beer,
        crate::routes::beers::update_beer_by_id,
    ),
    components(
        schemas(
            HealthResponse,
            BeerDtoDoc,
            FieldViolationDoc,
            ErrorResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "beer")
    )
)]
pub struct ApiDoc;
