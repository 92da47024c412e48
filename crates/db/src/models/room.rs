//! Room entity model and DTOs.

use haven_core::room::RoomType;
use haven_core::room_query::RoomFacts;
use haven_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// Postal address of a room. Every field is required when an address is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[validate(length(min = 1, max = 200))]
    pub street: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 1, max = 100))]
    pub state: String,
    #[validate(length(min = 1, max = 100))]
    pub country: String,
    #[validate(length(min = 1, max = 20))]
    pub postal_code: String,
}

/// A row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: DbId,
    pub room_number: i64,
    pub title: String,
    pub property_type: String,
    #[sqlx(try_from = "String")]
    pub room_type: RoomType,
    pub location: String,
    pub address: Option<Json<Address>>,
    pub price: i64,
    pub nights: i32,
    pub rating: f64,
    pub bedrooms: i32,
    pub beds: i32,
    pub bathrooms: i32,
    pub guests: i32,
    pub amenities: Vec<String>,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Room {
    /// City from the address, if the room has one.
    pub fn city(&self) -> Option<&str> {
        self.address.as_ref().map(|a| a.0.city.as_str())
    }

    /// The attributes search predicates look at.
    pub fn facts(&self) -> RoomFacts<'_> {
        RoomFacts {
            published: self.published,
            price: self.price,
            bedrooms: i64::from(self.bedrooms),
            beds: i64::from(self.beds),
            bathrooms: i64::from(self.bathrooms),
            city: self.city(),
            amenities: &self.amenities,
        }
    }
}

/// DTO for creating a new room.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoom {
    #[validate(range(min = 0))]
    pub room_number: i64,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 100))]
    pub property_type: String,
    pub room_type: RoomType,
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    #[validate(nested)]
    pub address: Option<Address>,
    #[validate(range(min = 1))]
    pub price: i64,
    /// Defaults to 1 if omitted.
    #[validate(range(min = 1))]
    pub nights: Option<i32>,
    /// Defaults to 0 if omitted.
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
    #[validate(range(min = 0))]
    pub bedrooms: Option<i32>,
    #[validate(range(min = 0))]
    pub beds: Option<i32>,
    #[validate(range(min = 0))]
    pub bathrooms: Option<i32>,
    /// Defaults to 1 if omitted.
    #[validate(range(min = 1))]
    pub guests: Option<i32>,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// New rooms are drafts unless stated otherwise.
    #[serde(default)]
    pub published: bool,
}

/// DTO for updating an existing room. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoom {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub property_type: Option<String>,
    pub room_type: Option<RoomType>,
    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,
    #[validate(nested)]
    pub address: Option<Address>,
    #[validate(range(min = 1))]
    pub price: Option<i64>,
    #[validate(range(min = 1))]
    pub nights: Option<i32>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
    #[validate(range(min = 0))]
    pub bedrooms: Option<i32>,
    #[validate(range(min = 0))]
    pub beds: Option<i32>,
    #[validate(range(min = 0))]
    pub bathrooms: Option<i32>,
    #[validate(range(min = 1))]
    pub guests: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub published: Option<bool>,
}

/// DTO for toggling the published flag.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PublishRoom {
    pub published: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> serde_json::Value {
        serde_json::json!({
            "roomNumber": 101,
            "title": "Loft by the river",
            "propertyType": "Apartment",
            "roomType": "Entire home",
            "location": "Porto, Portugal",
            "address": {
                "street": "Rua das Flores 1",
                "city": "Porto",
                "state": "Porto",
                "country": "Portugal",
                "postalCode": "4050-262"
            },
            "price": 12000,
            "bedrooms": 2,
            "amenities": ["Wifi", "Pool"]
        })
    }

    #[test]
    fn create_room_accepts_valid_body() {
        let input: CreateRoom = serde_json::from_value(valid_create()).unwrap();
        assert!(input.validate().is_ok());
        assert_eq!(input.room_type, RoomType::EntireHome);
        assert!(!input.published);
    }

    #[test]
    fn create_room_rejects_unknown_room_type() {
        let mut body = valid_create();
        body["roomType"] = serde_json::json!("Castle");
        assert!(serde_json::from_value::<CreateRoom>(body).is_err());
    }

    #[test]
    fn partial_address_is_a_shape_error() {
        let mut body = valid_create();
        body["address"] = serde_json::json!({ "city": "Porto" });
        assert!(serde_json::from_value::<CreateRoom>(body).is_err());
    }

    #[test]
    fn blank_address_field_fails_validation() {
        let mut body = valid_create();
        body["address"]["postalCode"] = serde_json::json!("");
        let input: CreateRoom = serde_json::from_value(body).unwrap();
        assert!(input.validate().is_err());
    }

    #[test]
    fn non_positive_price_fails_validation() {
        let mut body = valid_create();
        body["price"] = serde_json::json!(0);
        let input: CreateRoom = serde_json::from_value(body).unwrap();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn rating_out_of_range_fails_validation() {
        let update = UpdateRoom {
            rating: Some(7.5),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn empty_update_is_valid() {
        assert!(UpdateRoom::default().validate().is_ok());
    }
}
