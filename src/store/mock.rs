//! テスト用モックストア

use super::{CatalogStore, StoreFuture};
use crate::catalog::{NewToolRecord, ToolRecord};
use crate::config::StoreKind;
use crate::error::AtlError;
use std::sync::RwLock;

/// テスト用のインメモリストア
pub struct MockStore {
    records: Vec<ToolRecord>,
    inserted: RwLock<Vec<NewToolRecord>>,
    fail_status: Option<u16>,
    insert_fail_status: Option<u16>,
}

impl MockStore {
    pub fn new(records: Vec<ToolRecord>) -> Self {
        Self {
            records,
            inserted: RwLock::new(Vec::new()),
            fail_status: None,
            insert_fail_status: None,
        }
    }

    /// 読み込みは成功し、追加だけを指定ステータスで失敗させる
    pub fn rejecting_inserts(records: Vec<ToolRecord>, status: u16) -> Self {
        Self {
            insert_fail_status: Some(status),
            ..Self::new(records)
        }
    }

    /// 全操作を指定ステータスで失敗させる
    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::new(Vec::new())
        }
    }

    /// 追加されたレコード
    pub fn inserted(&self) -> Vec<NewToolRecord> {
        self.inserted.read().unwrap().clone()
    }

    fn failure(&self) -> Option<AtlError> {
        self.fail_status.map(|status| AtlError::StoreApi {
            status,
            message: "mock failure".to_string(),
        })
    }
}

impl CatalogStore for MockStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Rest
    }

    fn load_all(&self) -> StoreFuture<'_, Vec<ToolRecord>> {
        Box::pin(async move {
            match self.failure() {
                Some(err) => Err(err),
                None => Ok(self.records.clone()),
            }
        })
    }

    fn insert<'a>(&'a self, record: &'a NewToolRecord) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            if let Some(err) = self.failure() {
                return Err(err);
            }
            if let Some(status) = self.insert_fail_status {
                return Err(AtlError::StoreApi {
                    status,
                    message: "insert rejected".to_string(),
                });
            }
            self.inserted.write().unwrap().push(record.clone());
            Ok(())
        })
    }

    fn ping(&self) -> StoreFuture<'_, usize> {
        Box::pin(async move {
            match self.failure() {
                Some(err) => Err(err),
                None => Ok(self.records.len().min(1)),
            }
        })
    }
}
