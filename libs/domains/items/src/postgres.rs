use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryOrder,
    Statement, Value,
};

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::{Item, ItemInput},
    repository::ItemRepository,
};

const INSERT_ITEM: &str = "INSERT INTO item (nama_item, unit, stok, harga_satuan) \
     VALUES ($1, $2, $3, $4) \
     RETURNING id_item, nama_item, unit, stok, harga_satuan";

const UPDATE_ITEM: &str = "UPDATE item SET nama_item = $1, unit = $2, stok = $3, harga_satuan = $4 \
     WHERE id_item = $5";

const DELETE_ITEM: &str = "DELETE FROM item WHERE id_item = $1";

pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn statement<I>(&self, sql: &str, values: I) -> Statement
    where
        I: IntoIterator<Item = Value>,
    {
        Statement::from_sql_and_values(self.db.get_database_backend(), sql, values)
    }
}

fn storage_error(operation: &'static str) -> impl Fn(DbErr) -> ItemError {
    move |e| {
        tracing::error!(operation, error = %e, "Item storage operation failed");
        ItemError::from(e)
    }
}

fn input_values(input: ItemInput) -> [Value; 4] {
    [
        input.name.into(),
        input.unit.into(),
        input.stock.into(),
        input.unit_price.into(),
    ]
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn create(&self, input: ItemInput) -> ItemResult<Item> {
        let stmt = self.statement(INSERT_ITEM, input_values(input));

        let model = entity::Model::find_by_statement(stmt)
            .one(&self.db)
            .await
            .map_err(storage_error("create"))?
            .ok_or_else(|| ItemError::Storage("insert returned no row".to_string()))?;

        tracing::info!(item_id = model.id_item, "Created item");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(storage_error("get_by_id"))?;

        Ok(model.map(Item::from))
    }

    async fn get_all(&self) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::IdItem)
            .all(&self.db)
            .await
            .map_err(storage_error("get_all"))?;

        Ok(models.into_iter().map(Item::from).collect())
    }

    async fn update(&self, id: i32, input: ItemInput) -> ItemResult<u64> {
        let mut values = input_values(input).to_vec();
        values.push(id.into());

        let result = self
            .db
            .execute_raw(self.statement(UPDATE_ITEM, values))
            .await
            .map_err(storage_error("update"))?;

        let rows_affected = result.rows_affected();
        if rows_affected > 0 {
            tracing::info!(item_id = id, "Updated item");
        }
        Ok(rows_affected)
    }

    async fn delete(&self, id: i32) -> ItemResult<u64> {
        let result = self
            .db
            .execute_raw(self.statement(DELETE_ITEM, [id.into()]))
            .await
            .map_err(storage_error("delete"))?;

        let rows_affected = result.rows_affected();
        if rows_affected > 0 {
            tracing::info!(item_id = id, "Deleted item");
        }
        Ok(rows_affected)
    }
}
