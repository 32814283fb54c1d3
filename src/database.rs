use crate::constants::*;
use futures::stream::StreamExt;
use mongodb::bson::Document;
use mongodb::error::{Error as MongoError, ErrorKind, Result as MongoResult, WriteFailure};
use mongodb::options::{FindOneOptions, FindOptions, IndexOptions, InsertOneOptions};
use mongodb::IndexModel;
use mongodb::{options::ClientOptions, Client};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

#[cfg(test)]
use mockall::automock;

pub struct AppDatabase(Client);

#[cfg_attr(test, automock)]
impl AppDatabase {
    pub async fn new() -> MongoResult<Self> {
        // get all database parameters from environment
        // when not found in environment it should panic
        let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI not found in .env file");
        Self::with_uri(&uri).await
    }

    /// Build the client for a given connection string.
    /// No connection is made until the first operation.
    pub async fn with_uri(uri: &str) -> MongoResult<Self> {
        let min_pool = std::env::var("MONGODB_MIN_POOL_SIZE").unwrap_or_default();
        let max_pool = std::env::var("MONGODB_MAX_POOL_SIZE").unwrap_or_default();
        let min_pool = min_pool.parse::<u32>().unwrap_or(MONGO_MIN_POOL_SIZE);
        let max_pool = max_pool.parse::<u32>().unwrap_or(MONGO_MAX_POOL_SIZE);
        let timeout = Duration::from_secs(MONGO_CONN_TIMEOUT);
        // create the mongodb client options
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.max_pool_size = Some(max_pool);
        client_options.min_pool_size = Some(min_pool);
        client_options.connect_timeout = Some(timeout);
        // create the client and return Result object
        let client = Client::with_options(client_options)?;
        let app_db = Self(client);
        Ok(app_db)
    }

    pub async fn find_one<T>(
        &self,
        db: &str,
        coll: &str,
        filter: Option<Document>,
        options: Option<FindOneOptions>,
    ) -> MongoResult<Option<T>>
    where
        T: DeserializeOwned + Unpin + Send + Sync + 'static,
    {
        let coll = self.0.database(db).collection::<T>(coll);
        coll.find_one(filter, options).await
    }

    pub async fn find<T>(
        &self,
        db: &str,
        coll: &str,
        filter: Option<Document>,
        options: Option<FindOptions>,
    ) -> MongoResult<Vec<T>>
    where
        T: DeserializeOwned + Unpin + Send + Sync + 'static,
    {
        let coll = self.0.database(db).collection::<T>(coll);
        let mut cursor = coll.find(filter, options).await?;
        let mut data = vec![];
        while let Some(doc) = cursor.next().await {
            data.push(doc?);
        }
        Ok(data)
    }

    /// Insert a document into a collection guarded by a unique index.
    ///
    /// Returns the hex id of the inserted document, or `None` when the
    /// unique index rejected it as a duplicate.
    pub async fn insert_unique<T>(
        &self,
        db: &str,
        coll: &str,
        doc: &T,
        options: Option<InsertOneOptions>,
    ) -> MongoResult<Option<String>>
    where
        T: Serialize + Send + Sync + 'static,
    {
        let coll = self.0.database(db).collection::<T>(coll);
        match coll.insert_one(doc, options).await {
            Ok(result) => {
                let id = result
                    .inserted_id
                    .as_object_id()
                    .map(|oid| oid.to_hex())
                    .unwrap_or_default();
                Ok(Some(id))
            }
            Err(err) if is_duplicate_key_error(&err) => {
                tracing::debug!("Unique index rejected insert into {}: {}", coll.name(), err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Create an index, doing nothing if an identical one already exists
    pub async fn create_index(
        &self,
        db: &str,
        coll: &str,
        keys: Document,
        unique: bool,
    ) -> MongoResult<String> {
        let coll = self.0.database(db).collection::<Document>(coll);
        let options = IndexOptions::builder().unique(unique).build();
        let model = IndexModel::builder().keys(keys).options(options).build();
        let result = coll.create_index(model, None).await?;
        Ok(result.index_name)
    }
}

fn is_duplicate_key_error(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_err))
            if write_err.code == DUPLICATE_KEY_ERROR_CODE
    )
}
