use sea_orm::entity::prelude::*;

use crate::models::Item;

/// Sea-ORM Entity for the `item` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_item: i32,
    #[sea_orm(column_type = "Text")]
    pub nama_item: String,
    #[sea_orm(column_type = "Text")]
    pub unit: String,
    pub stok: i32,
    pub harga_satuan: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Self {
            id: model.id_item,
            name: model.nama_item,
            unit: model.unit,
            stock: model.stok,
            unit_price: model.harga_satuan,
        }
    }
}
