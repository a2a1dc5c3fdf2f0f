//! Planning data use-case service.
//!
//! Wraps the annual and task repositories behind one connection so the
//! facade can open the database, run one operation, and drop it.

use crate::model::annual::{AnnualData, SystemData, Task};
use crate::repo::{
    reset_all_data, AnnualRepository, RepoResult, SqliteAnnualRepository, SqliteTaskRepository,
    TaskRepository,
};
use log::info;
use rusqlite::Connection;

/// Planning store over one open connection.
pub struct PlannerService<'conn> {
    conn: &'conn Connection,
    annual: SqliteAnnualRepository<'conn>,
    tasks: SqliteTaskRepository<'conn>,
}

impl<'conn> PlannerService<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            annual: SqliteAnnualRepository::new(conn),
            tasks: SqliteTaskRepository::new(conn),
        }
    }

    pub fn all_annual_data(&self) -> RepoResult<SystemData> {
        self.annual.list_annual_data()
    }

    pub fn annual_data(&self, year: &str) -> RepoResult<Option<AnnualData>> {
        self.annual.get_annual_data(year)
    }

    pub fn save_annual_data(&self, data: &AnnualData) -> RepoResult<()> {
        self.annual.save_annual_data(data)?;
        info!(
            "event=annual_save module=planner status=ok year={} dimensions={}",
            data.year,
            data.dimensions.len()
        );
        Ok(())
    }

    pub fn delete_annual_data(&self, year: &str) -> RepoResult<()> {
        self.annual.delete_annual_data(year)?;
        info!("event=annual_delete module=planner status=ok year={}", year);
        Ok(())
    }

    pub fn add_task(&self, task: &Task) -> RepoResult<()> {
        self.tasks.add_task(task)?;
        info!("event=task_add module=planner status=ok task_id={}", task.id);
        Ok(())
    }

    pub fn update_task(&self, task: &Task) -> RepoResult<()> {
        self.tasks.update_task(task)?;
        info!(
            "event=task_update module=planner status=ok task_id={} task_status={}",
            task.id,
            task.status.as_str()
        );
        Ok(())
    }

    pub fn delete_task(&self, id: &str) -> RepoResult<()> {
        self.tasks.delete_task(id)?;
        info!("event=task_delete module=planner status=ok task_id={}", id);
        Ok(())
    }

    pub fn task(&self, id: &str) -> RepoResult<Option<Task>> {
        self.tasks.get_task(id)
    }

    pub fn tasks(&self) -> RepoResult<Vec<Task>> {
        self.tasks.list_tasks()
    }

    /// Removes every annual document and task.
    pub fn reset_all_data(&self) -> RepoResult<()> {
        reset_all_data(self.conn)?;
        info!("event=data_reset module=planner status=ok");
        Ok(())
    }
}
