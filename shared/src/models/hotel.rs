//! Hotel Model

use serde::{Deserialize, Serialize};

/// Hotel entity (a kitchen the menu is served from)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    /// veg / non-veg / both / snacks
    #[serde(rename = "type")]
    pub hotel_type: String,
    pub rating: f64,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: i64,
}

/// Query filters for hotel listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotelQuery {
    /// `all` or absent disables the filter
    #[serde(rename = "type")]
    pub hotel_type: Option<String>,
}

impl HotelQuery {
    pub fn type_filter(&self) -> Option<&str> {
        self.hotel_type
            .as_deref()
            .filter(|t| !t.is_empty() && *t != "all")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_filter_ignores_all() {
        let q = HotelQuery {
            hotel_type: Some("all".into()),
        };
        assert_eq!(q.type_filter(), None);

        let q = HotelQuery {
            hotel_type: Some("veg".into()),
        };
        assert_eq!(q.type_filter(), Some("veg"));

        assert_eq!(HotelQuery::default().type_filter(), None);
    }
}
