use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Printed size, e.g. "15x15cm".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: None,
            size: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Id-{} - {} - Q{:.2}", self.id, self.name, self.price)
    }
}

/// The shop's starting catalog, used to seed an empty store.
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new(1, "Sticker Vinilo de Corte 15x15cm", 20.0).with_category("Stickers").with_size("15x15cm"),
        Product::new(2, "Sticker Holográfico Corte Electrónico", 40.0).with_category("Stickers"),
        Product::new(3, "Sticker Holográfico Hoja Impresa", 30.0).with_category("Stickers"),
        Product::new(4, "Sticker en Papel Adhesivo con Corte Electrónico", 30.0).with_category("Stickers"),
        Product::new(5, "Sticker en Papel Adhesivo sin Corte", 35.0).with_category("Stickers"),
        Product::new(6, "Vinilo Especial Dorado Espejo", 30.0).with_category("Vinilos"),
        Product::new(7, "Vinilo Especial Cromo Espejo", 30.0).with_category("Vinilos"),
        Product::new(8, "Vinilo Tornasol", 30.0).with_category("Vinilos"),
        Product::new(9, "Vinilo Reflectivo Amarillo/Rojo/Blanco", 40.0).with_category("Vinilos"),
    ]
}
