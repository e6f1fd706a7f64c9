use crate::error::CatalogError;
use crate::scheme::product::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Id,
    Name,
    Price,
    Category,
}

/// A product field's value as a sort key. Text is lowercased so ordering ignores case.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl ProductField {
    /// Accepts the English and the Spanish field names the shop's data uses.
    pub fn from_name(name: &str) -> Result<ProductField, CatalogError> {
        match name.trim().to_lowercase().as_str() {
            "id" => Ok(ProductField::Id),
            "name" | "nombre" => Ok(ProductField::Name),
            "price" | "precio" => Ok(ProductField::Price),
            "category" | "categoria" | "categoría" => Ok(ProductField::Category),
            _ => Err(CatalogError::UnknownField(name.to_string())),
        }
    }

    #[inline(always)]
    pub fn sort_key(&self, product: &Product) -> FieldValue {
        match self {
            ProductField::Id => FieldValue::Int(product.id as i64),
            ProductField::Name => FieldValue::Text(product.name.to_lowercase()),
            ProductField::Price => FieldValue::Float(product.price),
            ProductField::Category => FieldValue::Text(
                product.category.as_deref().unwrap_or_default().to_lowercase()
            ),
        }
    }
}
