use anyhow::Result;
use diesel::prelude::*;
use tracing::debug_span;

use es_core::ports::ScanRecordRepositoryPort;
use es_core::ScanRecord;

use crate::db::models::{NewScanRecordRow, ScanRecordRow};
use crate::db::ports::{DbExecutor, InsertMapper, RowMapper};
use crate::db::schema::scan_record;

pub struct DieselScanRecordRepository<E, M> {
    executor: E,
    mapper: M,
}

impl<E, M> DieselScanRecordRepository<E, M> {
    pub fn new(executor: E, mapper: M) -> Self {
        Self { executor, mapper }
    }
}

#[async_trait::async_trait]
impl<E, M> ScanRecordRepositoryPort for DieselScanRecordRepository<E, M>
where
    E: DbExecutor,
    M: InsertMapper<ScanRecord, NewScanRecordRow> + RowMapper<ScanRecordRow, ScanRecord>,
{
    async fn insert(&self, record: &ScanRecord) -> Result<()> {
        let span = debug_span!(
            "infra.sqlite.insert_scan_record",
            table = "scan_record",
            scan_id = %record.id(),
        );
        let _enter = span.enter();

        let row = self.mapper.to_row(record)?;
        self.executor.run(|conn| {
            diesel::insert_into(scan_record::table)
                .values(&row)
                .execute(conn)?;
            Ok(())
        })
    }

    async fn list_all(&self) -> Result<Vec<ScanRecord>> {
        let span = debug_span!("infra.sqlite.list_scan_records", table = "scan_record");
        let _enter = span.enter();

        self.executor.run(|conn| {
            let rows = scan_record::table
                .order((scan_record::scanned_at_ms.desc(), scan_record::id.desc()))
                .load::<ScanRecordRow>(conn)?;

            rows.iter().map(|row| self.mapper.to_domain(row)).collect()
        })
    }

    async fn clear(&self) -> Result<usize> {
        let span = debug_span!("infra.sqlite.clear_scan_records", table = "scan_record");
        let _enter = span.enter();

        self.executor
            .run(|conn| Ok(diesel::delete(scan_record::table).execute(conn)?))
    }
}
