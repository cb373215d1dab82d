//! Teacher directory command handlers

use crate::api::TeacherApi;
use crate::error::Result;
use prettytable::{row, Table};

/// List all teachers as a table
pub async fn run_list(teachers: &TeacherApi) -> Result<()> {
    let all = teachers.all().await?;

    if all.is_empty() {
        println!("No teachers registered");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["ID", "NAME"]);
    for teacher in &all {
        table.add_row(row![teacher.id, teacher.display_name()]);
    }
    table.printstd();
    Ok(())
}

/// Show one teacher in detail
pub async fn run_show(teachers: &TeacherApi, id: i64) -> Result<()> {
    let teacher = teachers.detail(id).await?;
    println!("{}", teacher.display_name());
    if let Some(created_at) = teacher.created_at {
        println!("Teaching since: {}", created_at.date_naive());
    }
    Ok(())
}
