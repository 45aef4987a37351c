//! Entity <-> DTO conversion. Flat field copies, no I/O.

use super::domain::{Beer, BeerStyle};
use super::dto::BeerDto;
use super::errors::MappingError;

pub fn parse_style(name: &str) -> Result<BeerStyle, MappingError> {
    name.parse::<BeerStyle>()
        .map_err(|_| MappingError::UnknownStyle(name.to_string()))
}

/// Copy every exposed field. Infallible, also for `Beer::default()`.
pub fn beer_to_dto(beer: &Beer) -> BeerDto {
    BeerDto {
        id: beer.id,
        version: beer.version,
        created_date: beer.created_date,
        last_modified_date: beer.last_modified_date,
        beer_name: Some(beer.beer_name.clone()),
        beer_style: beer.beer_style.map(|s| s.as_str().to_string()),
        upc: Some(beer.upc),
        price: Some(beer.price),
        quantity_on_hand: Some(beer.quantity_on_hand),
    }
}

/// Build a new, unsaved entity from client input. Identity, version and
/// timestamps stay unset; stock and planning fields start at zero.
pub fn dto_to_beer(dto: &BeerDto) -> Result<Beer, MappingError> {
    let beer_style = dto.beer_style.as_deref().map(parse_style).transpose()?;
    Ok(Beer {
        beer_name: dto.beer_name.clone().unwrap_or_default(),
        beer_style,
        upc: dto.upc.unwrap_or_default(),
        price: dto.price.unwrap_or_default(),
        ..Beer::default()
    })
}

/// Overwrite the client-editable fields of a stored beer: name, style, price
/// and upc. Nothing else is touched. On error `beer` is left unchanged.
pub fn apply_update(beer: &mut Beer, dto: &BeerDto) -> Result<(), MappingError> {
    let beer_style = dto.beer_style.as_deref().map(parse_style).transpose()?;
    beer.beer_name = dto.beer_name.clone().unwrap_or_default();
    beer.beer_style = beer_style;
    beer.price = dto.price.unwrap_or_default();
    beer.upc = dto.upc.unwrap_or_default();
    Ok(())
}
